//! Composes the emblem for one color configuration.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::{scaled, Curve, Layer, SampledCurves, FANG, SEAM, SHAPES, SUPERSAMPLE};
use crate::settings::Settings;
use image::{Rgb, RgbImage};
use nalgebra::Vector2;
use tracing::{debug, trace};

/// Red of the two lobes.
pub const RED: Rgb<u8> = Rgb([250, 4, 50]);

/// Darker red of the lobes' shadows.
pub const RED_SHADOW: Rgb<u8> = Rgb([161, 7, 41]);

/// Default contour color.
pub const CONTOUR: Rgb<u8> = Rgb([0, 0, 0]);

/// Colors used for one rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Background
    pub blank: Rgb<u8>,
    /// Contour lines
    pub contour: Rgb<u8>,
    /// Fang and upper lobe
    pub fang: Rgb<u8>,
    /// Both lobes
    pub main: Rgb<u8>,
    /// Shadows on the lobes
    pub shadow: Rgb<u8>,
}

impl Palette {
    /// Color a shape of `layer` is filled with.
    pub fn fill(&self, layer: Layer) -> Rgb<u8> {
        match layer {
            Layer::Fang => self.fang,
            Layer::Main => self.main,
            Layer::Shadow => self.shadow,
        }
    }
}

/// A complete rendering configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Style {
    /// Colors
    pub palette: Palette,
    /// Stroke the outline after filling
    pub contour: bool,
    /// Copy the mirrored left half over the right half
    pub mirror: bool,
}

/// Gray level as a color.
pub fn gray(level: u8) -> Rgb<u8> {
    Rgb([level; 3])
}

/// Per channel `255 - c`.
pub fn invert(color: Rgb<u8>) -> Rgb<u8> {
    Rgb(color.0.map(|c| 255 - c))
}

/// Draw the emblem on a supersampled canvas without downsampling it.
pub fn render(style: &Style, settings: &Settings) -> Result<Canvas> {
    let palette = &style.palette;
    let mut canvas = Canvas::new(settings.canvas_size(), palette.blank, settings.scale())?;
    let curves = SampledCurves::new()?;
    let fang: Vec<Vector2<i32>> = FANG.iter().copied().map(scaled).collect();

    canvas.fill_polygon("fang", &fang, palette.fang)?;
    for shape in SHAPES.iter() {
        trace!(shape = shape.name, layer = ?shape.layer, "filling");
        let outline = curves.fill_outline(shape);
        canvas.fill_polygon(shape.name, &outline, palette.fill(shape.layer))?;
    }

    if style.contour {
        let width = settings.contour_size;
        for curve in Curve::ALL {
            canvas.stroke_polyline("curve", curves.get(curve), false, palette.contour, width)?;
        }
        let seam = [scaled(SEAM[0]), scaled(SEAM[1])];
        canvas.stroke_polyline("seam", &seam, false, palette.contour, width)?;
        canvas.stroke_polyline("fang", &fang, true, palette.contour, width)?;
    }

    if style.mirror {
        canvas.mirror_left_half();
    }
    Ok(canvas)
}

/// Render the emblem and downsample it to `settings.resolution`.
pub fn compose(style: &Style, settings: &Settings) -> Result<RgbImage> {
    debug!(?style, resolution = settings.resolution, "composing");
    let canvas = render(style, settings)?;
    Ok(canvas.downsample(SUPERSAMPLE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            resolution: 135,
            ..Settings::default()
        }
    }

    fn colored(contour: bool) -> Style {
        Style {
            palette: Palette {
                blank: gray(0),
                contour: CONTOUR,
                fang: gray(255),
                main: RED,
                shadow: RED_SHADOW,
            },
            contour,
            mirror: true,
        }
    }

    #[test]
    fn helpers() {
        assert_eq!(invert(CONTOUR), gray(255));
        assert_eq!(invert(RED), Rgb([5, 251, 205]));
        assert_eq!(colored(false).palette.fill(Layer::Shadow), RED_SHADOW);
    }

    #[test]
    fn canvas_is_mirrored() {
        let canvas = render(&colored(true), &settings()).unwrap();
        let width = canvas.width();
        assert_eq!(width, 540);
        for y in (0..canvas.height()).step_by(3) {
            for x in width / 2..width {
                assert_eq!(canvas.pixel(x, y), canvas.pixel(width - 1 - x, y));
            }
        }
    }

    #[test]
    fn unmirrored_canvas_keeps_right_half_blank() {
        let style = Style {
            mirror: false,
            ..colored(false)
        };
        let canvas = render(&style, &settings()).unwrap();
        let width = canvas.width();
        for y in 0..canvas.height() {
            for x in width / 2 + 1..width {
                assert_eq!(canvas.pixel(x, y), gray(0));
            }
        }
    }

    #[test]
    fn lobes_use_palette() {
        let canvas = render(&colored(false), &settings()).unwrap();
        let mut seen = [false; 3];
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let pixel = canvas.pixel(x, y);
                seen[0] |= pixel == RED;
                seen[1] |= pixel == RED_SHADOW;
                seen[2] |= pixel == gray(255);
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn centerline_column_is_filled() {
        let canvas = render(&colored(false), &Settings::default()).unwrap();
        // upper lobe, then the right shadow below it
        for (y, color) in [(2600, gray(255)), (2880, gray(255)), (3120, RED_SHADOW)] {
            for x in 2156..2164 {
                assert_eq!(canvas.pixel(x, y), color, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn contour_is_drawn_on_top() {
        let plain = render(&colored(false), &settings()).unwrap();
        let outlined = render(&colored(true), &settings()).unwrap();
        let count = |canvas: &Canvas| {
            let mut n = 0;
            for y in 0..canvas.height() {
                for x in 0..canvas.width() {
                    if canvas.pixel(x, y) == CONTOUR {
                        n += 1;
                    }
                }
            }
            n
        };
        // black background: contour pixels inside the figure add to the black area
        assert!(count(&outlined) > count(&plain));
    }
}
