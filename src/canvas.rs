//! Supersampled drawing surface.
//!
//! A thin layer over [`tiny_skia::Pixmap`] speaking the emblem's integer polygons.
//! Shapes are drawn without anti-aliasing; smoothing comes from [`Canvas::downsample`].

use crate::error::{Error, Result};
use image::{Rgb, RgbImage};
use nalgebra::Vector2;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

const CHANNELS: usize = 4;

/// Square RGB canvas with a uniform scale applied to everything drawn on it.
pub struct Canvas {
    pixmap: Pixmap,
    transform: Transform,
}

impl Canvas {
    /// Allocate a `size` square canvas filled with `background`.
    ///
    /// Coordinates passed to the drawing methods are multiplied by `scale`.
    pub fn new(size: u32, background: Rgb<u8>, scale: f32) -> Result<Self> {
        let mut pixmap = Pixmap::new(size, size).ok_or(Error::Canvas {
            width: size,
            height: size,
        })?;
        let Rgb([r, g, b]) = background;
        pixmap.fill(Color::from_rgba8(r, g, b, 255));
        Ok(Canvas {
            pixmap,
            transform: Transform::from_scale(scale, scale),
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color at `(x, y)`.
    ///
    /// Panics if the position is outside of the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        let i = (y as usize * self.width() as usize + x as usize) * CHANNELS;
        let data = self.pixmap.data();
        Rgb([data[i], data[i + 1], data[i + 2]])
    }

    /// Fill the polygon through `points` using the even-odd rule.
    pub fn fill_polygon(
        &mut self,
        name: &'static str,
        points: &[Vector2<i32>],
        color: Rgb<u8>,
    ) -> Result<()> {
        let path = polyline(points, true).ok_or(Error::DegenerateShape(name))?;
        self.pixmap
            .fill_path(&path, &paint(color), FillRule::EvenOdd, self.transform, None);
        Ok(())
    }

    /// Stroke the line through `points` with round caps and joins.
    ///
    /// `width` is given before scaling, like the points.
    pub fn stroke_polyline(
        &mut self,
        name: &'static str,
        points: &[Vector2<i32>],
        closed: bool,
        color: Rgb<u8>,
        width: f32,
    ) -> Result<()> {
        let path = polyline(points, closed).ok_or(Error::DegenerateShape(name))?;
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, self.transform, None);
        Ok(())
    }

    /// Replace the right half with the mirror image of the left half.
    ///
    /// Afterwards pixel `(x, y)` equals pixel `(width - 1 - x, y)` for every `x`.
    pub fn mirror_left_half(&mut self) {
        let width = self.width() as usize;
        for row in self.pixmap.data_mut().chunks_exact_mut(width * CHANNELS) {
            for x in width / 2..width {
                let src = (width - 1 - x) * CHANNELS;
                row.copy_within(src..src + CHANNELS, x * CHANNELS);
            }
        }
    }

    /// Shrink by `factor` averaging each `factor`x`factor` block.
    ///
    /// Trailing rows and columns not filling a whole block are dropped.
    pub fn downsample(&self, factor: u32) -> RgbImage {
        let factor = factor.max(1);
        let stride = self.width() as usize * CHANNELS;
        let area = factor * factor;
        let data = self.pixmap.data();

        RgbImage::from_fn(self.width() / factor, self.height() / factor, |ox, oy| {
            let mut sum = [0u32; 3];
            for y in oy * factor..(oy + 1) * factor {
                let row = &data[y as usize * stride..(y as usize + 1) * stride];
                for x in ox * factor..(ox + 1) * factor {
                    let i = x as usize * CHANNELS;
                    for (total, &value) in sum.iter_mut().zip(&row[i..i + 3]) {
                        *total += value as u32;
                    }
                }
            }
            // Hand rolled instead of imageops so each block rounds to nearest like an area
            // resize. Every pixel is opaque so premultiplied and straight colors agree.
            Rgb(sum.map(|total| ((total + area / 2) / area) as u8))
        })
    }
}

fn paint(color: Rgb<u8>) -> Paint<'static> {
    let Rgb([r, g, b]) = color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = false;
    paint
}

fn polyline(points: &[Vector2<i32>], closed: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::with_capacity(points.len() + 1, points.len() + 1);
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}
