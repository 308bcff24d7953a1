//! [`Viewer`] backed by native `minifb` windows.

use crate::error::{Error, Result};
use crate::viewer::{Command, Viewer, ESCAPE};
use image::RgbImage;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::thread;
use std::time::Duration;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// One native window per title, kept open across redraws.
#[derive(Default)]
pub struct MinifbViewer {
    windows: Vec<(String, Window, Vec<u32>)>,
}

impl MinifbViewer {
    /// Create a viewer without any windows yet.
    pub fn new() -> Self {
        Self::default()
    }

    fn window(&mut self, title: &str, width: usize, height: usize) -> Result<usize> {
        if let Some(i) = self.windows.iter().position(|(t, _, _)| t == title) {
            return Ok(i);
        }
        debug!(title, width, height, "opening window");
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|err| Error::Window(err.to_string()))?;
        self.windows.push((title.to_string(), window, Vec::new()));
        Ok(self.windows.len() - 1)
    }
}

impl Viewer for MinifbViewer {
    fn show(&mut self, title: &str, position: (isize, isize), preview: &RgbImage) -> Result<()> {
        let (width, height) = (preview.width() as usize, preview.height() as usize);
        let i = self.window(title, width, height)?;
        let (_, window, buffer) = &mut self.windows[i];

        // 0x00RRGGBB
        buffer.clear();
        buffer.extend(
            preview
                .pixels()
                .map(|p| u32::from_be_bytes([0, p[0], p[1], p[2]])),
        );
        window.set_position(position.0, position.1);
        window
            .update_with_buffer(buffer, width, height)
            .map_err(|err| Error::Window(err.to_string()))
    }

    fn wait(&mut self) -> Result<Command> {
        loop {
            let mut open = 0;
            for (_, window, _) in self.windows.iter_mut() {
                if !window.is_open() {
                    continue;
                }
                open += 1;
                window.update();
                if let Some(key) = window.get_keys_pressed(KeyRepeat::No).first() {
                    debug!(?key, "key pressed");
                    return Ok(Command::from_ascii(ascii(*key)));
                }
            }
            if open == 0 {
                return Ok(Command::Quit);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

/// ASCII code of the keys the session cares about, 0 for everything else.
fn ascii(key: Key) -> u8 {
    match key {
        Key::Escape => ESCAPE,
        Key::S => b's',
        _ => 0,
    }
}
