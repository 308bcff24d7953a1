//! Interactive session: render every variant, show them, wait for a key.
//!
//! The session is a small state machine driven by a [`Viewer`], which abstracts the
//! display so the whole loop runs headless in tests.

use crate::error::{Error, Result};
use crate::layout::GridLayout;
use crate::logo::compose;
use crate::settings::Settings;
use crate::variants::{variants, Variant};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::thumbnail;
use image::{ColorType, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Quality the images are encoded with.
pub const JPEG_QUALITY: u8 = 95;

/// ASCII code of the escape key.
pub const ESCAPE: u8 = 27;

/// What the user asked for after looking at the variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Leave without saving
    Quit,
    /// Save every variant, then leave
    Save,
    /// Render and show everything again
    Redraw,
}

impl Command {
    /// Interpret a key's ASCII code: escape quits, `s` saves, anything else redraws.
    pub fn from_ascii(code: u8) -> Self {
        match code {
            ESCAPE => Command::Quit,
            b's' => Command::Save,
            _ => Command::Redraw,
        }
    }
}

/// A surface the previews are shown on.
pub trait Viewer {
    /// Show `preview` in the window titled `title` at `position`, creating it if needed.
    fn show(&mut self, title: &str, position: (isize, isize), preview: &RgbImage) -> Result<()>;

    /// Block until the user issues a command.
    fn wait(&mut self) -> Result<Command>;
}

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Left without saving
    Quit,
    /// Saved these files
    Saved(Vec<PathBuf>),
}

enum State {
    Rendering,
    AwaitingInput(Vec<RgbImage>),
    Done(Outcome),
}

/// Drives a [`Viewer`] through render, show and wait cycles.
pub struct Session<'s, V> {
    viewer: V,
    settings: &'s Settings,
}

impl<'s, V: Viewer> Session<'s, V> {
    /// Create a session showing on `viewer`.
    pub fn new(viewer: V, settings: &'s Settings) -> Self {
        Session { viewer, settings }
    }

    /// Run until the user quits or saves.
    pub fn run(&mut self) -> Result<Outcome> {
        let variants = variants();
        let layout = GridLayout::new(
            self.settings.screen,
            variants.len(),
            2,
            self.settings.preview_size,
            self.settings.window_gap,
        );

        let mut state = State::Rendering;
        loop {
            state = match state {
                State::Rendering => {
                    let images = render_all(&variants, self.settings)?;
                    for (variant, image) in variants.iter().zip(&images) {
                        let small = preview(image, self.settings.preview_size);
                        self.viewer
                            .show(&variant.title(), layout.position(variant.index), &small)?;
                    }
                    State::AwaitingInput(images)
                }
                State::AwaitingInput(images) => {
                    let command = self.viewer.wait()?;
                    debug!(?command, "received");
                    match command {
                        Command::Quit => State::Done(Outcome::Quit),
                        Command::Save => {
                            let paths = save_all(&images, &self.settings.results_dir)?;
                            State::Done(Outcome::Saved(paths))
                        }
                        Command::Redraw => State::Rendering,
                    }
                }
                State::Done(outcome) => return Ok(outcome),
            }
        }
    }

    /// Give the viewer back.
    pub fn into_viewer(self) -> V {
        self.viewer
    }
}

/// Compose every variant at full resolution.
pub fn render_all(variants: &[Variant], settings: &Settings) -> Result<Vec<RgbImage>> {
    variants
        .iter()
        .map(|variant| {
            info!(index = variant.index, scheme = ?variant.scheme, blank = variant.blank, "rendering");
            compose(&variant.style, settings)
        })
        .collect()
}

/// Shrink an image to a `size` square preview.
pub fn preview(image: &RgbImage, size: u32) -> RgbImage {
    thumbnail(image, size, size)
}

/// Path an image is saved to, e.g. `results/Image 0.jpg`.
pub fn image_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("Image {}.jpg", index))
}

/// Write every image into `dir` as `Image {index}.jpg`.
///
/// `dir` has to exist already.
pub fn save_all(images: &[RgbImage], dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::MissingOutputDir(dir.to_path_buf()));
    }

    let mut paths = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        let path = image_path(dir, index);
        let mut writer = BufWriter::new(File::create(&path)?);
        JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).encode(
            image.as_raw(),
            image.width(),
            image.height(),
            ColorType::Rgb8,
        )?;
        writer.flush()?;
        info!(path = %path.display(), "saved");
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed list of commands and records what it was shown.
    struct Scripted {
        commands: VecDeque<Command>,
        shown: Vec<(String, (isize, isize), (u32, u32))>,
    }

    impl Scripted {
        fn new(commands: &[Command]) -> Self {
            Scripted {
                commands: commands.iter().copied().collect(),
                shown: Vec::new(),
            }
        }
    }

    impl Viewer for Scripted {
        fn show(&mut self, title: &str, position: (isize, isize), preview: &RgbImage) -> Result<()> {
            self.shown
                .push((title.to_string(), position, preview.dimensions()));
            Ok(())
        }

        fn wait(&mut self) -> Result<Command> {
            Ok(self.commands.pop_front().unwrap_or(Command::Quit))
        }
    }

    fn settings(dir: &Path) -> Settings {
        Settings {
            resolution: 54,
            preview_size: 20,
            results_dir: dir.to_path_buf(),
            ..Settings::default()
        }
    }

    #[test]
    fn keys() {
        assert_eq!(Command::from_ascii(27), Command::Quit);
        assert_eq!(Command::from_ascii(b's'), Command::Save);
        assert_eq!(Command::from_ascii(b'S'), Command::Redraw);
        assert_eq!(Command::from_ascii(b' '), Command::Redraw);
    }

    #[test]
    fn quit_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path());
        let mut session = Session::new(Scripted::new(&[Command::Quit]), &settings);
        assert_eq!(session.run().unwrap(), Outcome::Quit);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        let viewer = session.into_viewer();
        assert_eq!(viewer.shown.len(), 8);
        assert_eq!(viewer.shown[0].0, "Image 0");
        assert_eq!(viewer.shown[7].2, (20, 20));
    }

    #[test]
    fn redraw_then_save() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path());
        let commands = [Command::Redraw, Command::Save];
        let mut session = Session::new(Scripted::new(&commands), &settings);

        let paths = match session.run().unwrap() {
            Outcome::Saved(paths) => paths,
            outcome => panic!("unexpected {:?}", outcome),
        };
        assert_eq!(paths.len(), 8);
        for (i, path) in paths.iter().enumerate() {
            assert_eq!(path, &dir.path().join(format!("Image {}.jpg", i)));
            let image = image::open(path).unwrap();
            assert_eq!((image.width(), image.height()), (54, 54));
        }

        let viewer = session.into_viewer();
        assert_eq!(viewer.shown.len(), 16);
        assert_eq!(viewer.shown[..8], viewer.shown[8..]);
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("results");
        let images = vec![RgbImage::new(4, 4)];
        assert!(matches!(
            save_all(&images, &missing),
            Err(Error::MissingOutputDir(path)) if path == missing
        ));
    }

    #[test]
    fn preview_size() {
        let image = RgbImage::new(1080, 1080);
        assert_eq!(preview(&image, 400).dimensions(), (400, 400));
    }
}
