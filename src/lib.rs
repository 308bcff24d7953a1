#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logo;
pub mod nbezier;
pub mod settings;
pub mod simple;
pub mod variants;
pub mod viewer;
#[cfg(feature = "window")]
pub mod window;

pub use crate::error::{Error, Result};
pub use crate::logo::{compose, Palette, Style};
pub use crate::nbezier::BezierCurve;
pub use crate::settings::Settings;
pub use crate::simple::SimpleCurve;
