//! Tunable parameters of the renderer and the viewer.

use crate::geometry::{DESIGN_RESOLUTION, SUPERSAMPLE};
use std::path::PathBuf;

/// Parameters shared by every variant.
///
/// [`Settings::default`] reproduces the emblem as published: 1080 pixels square,
/// 8 pixel contours, 400 pixel previews and images saved into `results`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Side length of the final image in pixels
    pub resolution: u32,

    /// Contour line width in canvas pixels at the design resolution
    pub contour_size: f32,

    /// Side length of a preview window in pixels
    pub preview_size: u32,

    /// Vertical gap between the two rows of windows
    pub window_gap: i32,

    /// Size of the screen the window grid is centered on
    pub screen: (u32, u32),

    /// Directory the images are saved into. It has to exist.
    pub results_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            resolution: DESIGN_RESOLUTION,
            contour_size: 8.0,
            preview_size: 400,
            window_gap: 30,
            screen: (1920, 1080),
            results_dir: PathBuf::from("results"),
        }
    }
}

impl Settings {
    /// Side length of the supersampled canvas.
    pub fn canvas_size(&self) -> u32 {
        self.resolution * SUPERSAMPLE
    }

    /// Factor mapping design geometry onto the canvas.
    pub fn scale(&self) -> f32 {
        self.resolution as f32 / DESIGN_RESOLUTION as f32
    }
}
