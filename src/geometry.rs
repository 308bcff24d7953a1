//! The emblem's hardcoded geometry.
//!
//! Everything here is authored for the left half of a [`DESIGN_RESOLUTION`] image.
//! Control points are given in design pixels and multiplied by [`SUPERSAMPLE`], while endpoint
//! overrides are given directly in supersampled canvas pixels so adjacent curves meet exactly.

use crate::error::{Error, Result};
use crate::simple::{SimpleCurve, DEFAULT_PRECISION};
use nalgebra::Vector2;
use smallvec::SmallVec;

/// Output resolution the geometry was authored for.
pub const DESIGN_RESOLUTION: u32 = 1080;

/// Factor between the canvas and the output resolution.
pub const SUPERSAMPLE: u32 = 4;

/// Number of points each curve is sampled into. Outline slices index into these.
pub const PRECISION: usize = DEFAULT_PRECISION;

/// Last canvas column of the left half, where the curves meet their mirror image.
pub const CENTERLINE: i32 = (SUPERSAMPLE * DESIGN_RESOLUTION) as i32 / 2 - 1;

/// The seven outline curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Curve {
    /// Outer edge of the left lobe
    LeftOuter,
    /// Inner edge of the left lobe
    LeftInner,
    /// Lower edge of the upper lobe, shared with both red lobes
    Spine,
    /// Upper edge of the upper lobe
    Crest,
    /// Lower edge of the right lobe
    RightLower,
    /// Border of the left lobe's shadow
    LeftShadow,
    /// Border of the right lobe's shadow
    RightShadow,
}

impl Curve {
    /// All curves in the order they are sampled and stroked.
    pub const ALL: [Curve; 7] = [
        Curve::LeftOuter,
        Curve::LeftInner,
        Curve::Spine,
        Curve::Crest,
        Curve::RightLower,
        Curve::LeftShadow,
        Curve::RightShadow,
    ];

    /// Position in [`Curve::ALL`] and [`CURVES`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The curve's definition.
    pub fn def(self) -> &'static CurveDef {
        &CURVES[self.index()]
    }

    /// Used in logs and errors
    pub fn name(self) -> &'static str {
        match self {
            Curve::LeftOuter => "left outer",
            Curve::LeftInner => "left inner",
            Curve::Spine => "spine",
            Curve::Crest => "crest",
            Curve::RightLower => "right lower",
            Curve::LeftShadow => "left shadow border",
            Curve::RightShadow => "right shadow border",
        }
    }
}

/// Control points of one curve plus overrides pinning some of them to canvas pixels.
pub struct CurveDef {
    /// Control points in design pixels
    pub points: &'static [[i32; 2]],
    /// `(index, canvas point)` replacing the scaled control point at `index`
    pub overrides: &'static [(usize, [i32; 2])],
}

impl CurveDef {
    /// Control points in canvas pixels with the overrides applied.
    pub fn control_points(&self) -> SmallVec<[Vector2<i32>; 4]> {
        let mut points: SmallVec<[Vector2<i32>; 4]> = self
            .points
            .iter()
            .map(|&[x, y]| Vector2::new(x, y) * SUPERSAMPLE as i32)
            .collect();
        for &(i, [x, y]) in self.overrides {
            points[i] = Vector2::new(x, y);
        }
        points
    }

    /// The bezier curve through [`CurveDef::control_points`].
    pub fn curve(&self) -> Option<SimpleCurve> {
        let points: SmallVec<[Vector2<f64>; 4]> = self
            .control_points()
            .iter()
            .map(|p| p.cast::<f64>())
            .collect();
        SimpleCurve::from_points(&points)
    }
}

/// Curve definitions indexed by [`Curve::index`].
// The design was shifted 5px left after authoring, hence the `- 5` on every x.
pub static CURVES: [CurveDef; 7] = [
    CurveDef {
        points: &[[225 - 5, 300], [265 - 5, 305], [410 - 5, 450], [250 - 5, 545]],
        overrides: &[(0, [881, 1191])],
    },
    CurveDef {
        points: &[[250 - 5, 545], [350 - 5, 540], [400 - 5, 465], [435 - 5, 425]],
        overrides: &[(3, [1721, 1700])],
    },
    CurveDef {
        points: &[[160 - 5, 310], [422 - 5, 228], [512 - 5, 570], [544 - 5, 735]],
        overrides: &[(3, [CENTERLINE, 4 * 735])],
    },
    CurveDef {
        points: &[[160 - 5, 310], [335 - 5, 170], [495 - 5, 430], [544 - 5, 617]],
        overrides: &[(3, [CENTERLINE, 4 * 614])],
    },
    CurveDef {
        points: &[[350 - 5, 550], [450 - 5, 600], [515 - 5, 725], [544 - 5, 850]],
        overrides: &[(3, [CENTERLINE, 4 * 850])],
    },
    CurveDef {
        points: &[[260 - 5, 320], [335 - 5, 330], [365 - 5, 385], [410 - 5, 450]],
        overrides: &[(0, [1022, 1276]), (3, [1628, 1808])],
    },
    CurveDef {
        points: &[[425 - 5, 480], [495 - 5, 635], [500 - 5, 725]],
        overrides: &[(0, [1670, 1910]), (2, [1986, 2897])],
    },
];

/// The small triangle at the top of the emblem, in design pixels.
pub const FANG: [[i32; 2]; 3] = [[480 - 5, 340], [510 - 5, 340], [510 - 5, 400]];

/// The straight edge closing the right lobe, in design pixels.
pub const SEAM: [[i32; 2]; 2] = [[350 - 5, 550], [450 - 5, 450]];

/// Scale a design point to canvas pixels.
pub fn scaled([x, y]: [i32; 2]) -> Vector2<i32> {
    Vector2::new(x, y) * SUPERSAMPLE as i32
}

/// Which palette entry a shape is filled with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    /// The fang and the upper lobe
    Fang,
    /// Both red lobes
    Main,
    /// The darker overlays on the red lobes
    Shadow,
}

/// One run of points in a shape's outline.
#[derive(Copy, Clone, Debug)]
pub enum Piece {
    /// Samples `from..to` of a curve, in order
    Forward {
        /// Sampled curve
        curve: Curve,
        /// First sample
        from: usize,
        /// One past the last sample
        to: usize,
    },
    /// Samples `from..to` of a curve, last one first
    Reversed {
        /// Sampled curve
        curve: Curve,
        /// First sample of the forward range
        from: usize,
        /// One past the last sample of the forward range
        to: usize,
    },
    /// A single literal point in canvas pixels
    Point([i32; 2]),
}

const fn whole(curve: Curve) -> Piece {
    Piece::Forward {
        curve,
        from: 0,
        to: PRECISION,
    }
}

const fn rev(curve: Curve, from: usize, to: usize) -> Piece {
    Piece::Reversed { curve, from, to }
}

/// A filled region of the emblem.
pub struct ShapeDef {
    /// Used in logs and errors
    pub name: &'static str,
    /// Fill color
    pub layer: Layer,
    /// Outline, concatenated in order
    pub pieces: &'static [Piece],
}

/// Filled regions in z-order, the fang triangle excluded.
pub static SHAPES: [ShapeDef; 5] = [
    ShapeDef {
        name: "left lobe",
        layer: Layer::Main,
        pieces: &[
            rev(Curve::LeftOuter, 0, PRECISION),
            Piece::Forward {
                curve: Curve::Spine,
                from: 89,
                to: 491,
            },
            rev(Curve::LeftInner, 0, PRECISION),
        ],
    },
    ShapeDef {
        name: "upper lobe",
        layer: Layer::Fang,
        pieces: &[whole(Curve::Crest), rev(Curve::Spine, 0, PRECISION)],
    },
    ShapeDef {
        name: "right lobe",
        layer: Layer::Main,
        pieces: &[
            Piece::Point([4 * SEAM[0][0], 4 * SEAM[0][1]]),
            Piece::Point([4 * SEAM[1][0], 4 * SEAM[1][1]]),
            Piece::Forward {
                curve: Curve::Spine,
                from: 535,
                to: PRECISION,
            },
            rev(Curve::RightLower, 0, PRECISION),
        ],
    },
    ShapeDef {
        name: "left shadow",
        layer: Layer::Shadow,
        pieces: &[
            rev(Curve::LeftOuter, 0, 211),
            Piece::Forward {
                curve: Curve::Spine,
                from: 89,
                to: 491,
            },
            rev(Curve::LeftInner, 801, PRECISION),
            rev(Curve::LeftShadow, 0, PRECISION),
        ],
    },
    ShapeDef {
        name: "right shadow",
        layer: Layer::Shadow,
        pieces: &[
            Piece::Point([1670, 1910]),
            Piece::Forward {
                curve: Curve::Spine,
                from: 535,
                to: PRECISION,
            },
            rev(Curve::RightLower, 657, PRECISION),
            rev(Curve::RightShadow, 0, PRECISION - 1),
        ],
    },
];

/// All seven curves sampled at [`PRECISION`], in canvas pixels.
pub struct SampledCurves(Vec<Vec<Vector2<i32>>>);

impl SampledCurves {
    /// Sample every curve in [`CURVES`].
    pub fn new() -> Result<Self> {
        Curve::ALL
            .iter()
            .map(|&curve| sample(curve.def(), curve.name()))
            .collect::<Result<_>>()
            .map(SampledCurves)
    }

    /// Sampled points of one curve.
    pub fn get(&self, curve: Curve) -> &[Vector2<i32>] {
        &self.0[curve.index()]
    }

    /// Flatten a shape's pieces into one polygon.
    pub fn outline(&self, shape: &ShapeDef) -> Vec<Vector2<i32>> {
        let mut points = Vec::new();
        for piece in shape.pieces {
            match *piece {
                Piece::Forward { curve, from, to } => {
                    points.extend_from_slice(&self.get(curve)[from..to])
                }
                Piece::Reversed { curve, from, to } => {
                    points.extend(self.get(curve)[from..to].iter().rev())
                }
                Piece::Point([x, y]) => points.push(Vector2::new(x, y)),
            }
        }
        points
    }

    /// [`SampledCurves::outline`] with points on the [`CENTERLINE`] moved one column right.
    ///
    /// Fills only cover pixels whose center is inside the polygon, so an edge running along
    /// the centerline would leave its column empty and the mirror would copy that gap.
    /// The extra column lies in the half the mirror overwrites.
    pub fn fill_outline(&self, shape: &ShapeDef) -> Vec<Vector2<i32>> {
        let mut points = self.outline(shape);
        for point in points.iter_mut().filter(|p| p.x == CENTERLINE) {
            point.x += 1;
        }
        points
    }
}

fn sample(def: &CurveDef, name: &'static str) -> Result<Vec<Vector2<i32>>> {
    let curve = def.curve().ok_or(Error::DegenerateShape(name))?;
    Ok(curve.samples(PRECISION).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centerline() {
        assert_eq!(CENTERLINE, 2159);
    }

    #[test]
    fn overrides_are_applied() {
        let points = Curve::LeftOuter.def().control_points();
        assert_eq!(points[0], Vector2::new(881, 1191));
        assert_eq!(points[1], Vector2::new(1040, 1220));

        let points = Curve::RightShadow.def().control_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Vector2::new(1670, 1910));
        assert_eq!(points[2], Vector2::new(1986, 2897));
    }

    #[test]
    fn every_curve_is_drawable() {
        for curve in Curve::ALL {
            let simple = curve.def().curve().expect("3 or 4 control points");
            assert!(simple.degree() == 2 || simple.degree() == 3);
        }
    }

    #[test]
    fn sampled_curves_end_on_control_points() {
        let sampled = SampledCurves::new().unwrap();
        for curve in Curve::ALL {
            let points = sampled.get(curve);
            let control = curve.def().control_points();
            assert_eq!(points.len(), PRECISION);
            assert_eq!(points[0], control[0]);
            assert_eq!(points[PRECISION - 1], control[control.len() - 1]);
        }
    }

    #[test]
    fn shared_endpoints() {
        let sampled = SampledCurves::new().unwrap();
        let [outer_end, inner_start] = [
            sampled.get(Curve::LeftOuter)[PRECISION - 1],
            sampled.get(Curve::LeftInner)[0],
        ];
        assert_eq!(outer_end, inner_start);
        assert_eq!(sampled.get(Curve::Spine)[0], sampled.get(Curve::Crest)[0]);
        for curve in [Curve::Spine, Curve::Crest, Curve::RightLower] {
            assert_eq!(sampled.get(curve)[PRECISION - 1].x, CENTERLINE);
        }
    }

    #[test]
    fn outlines() {
        let sampled = SampledCurves::new().unwrap();
        let lens: Vec<_> = SHAPES.iter().map(|s| sampled.outline(s).len()).collect();
        assert_eq!(lens, vec![2402, 2000, 1467, 1812, 1808]);

        let right = sampled.outline(&SHAPES[2]);
        assert_eq!(right[0], Vector2::new(1380, 2200));
        assert_eq!(right[1], Vector2::new(1780, 1800));
        assert_eq!(right[right.len() - 1], sampled.get(Curve::RightLower)[0]);
    }

    #[test]
    fn fill_outlines_cross_the_centerline() {
        let sampled = SampledCurves::new().unwrap();
        for shape in SHAPES.iter() {
            let outline = sampled.outline(shape);
            let fill = sampled.fill_outline(shape);
            assert_eq!(outline.len(), fill.len());
            assert!(fill.iter().all(|p| p.x != CENTERLINE), "{}", shape.name);
            for (a, b) in outline.iter().zip(&fill) {
                assert_eq!(a.y, b.y);
                assert!(b.x == a.x || (a.x == CENTERLINE && b.x == CENTERLINE + 1));
            }
        }
        // the upper lobe is closed by a vertical edge on the centerline
        let upper = sampled.fill_outline(&SHAPES[1]);
        assert_eq!(upper[PRECISION - 1], Vector2::new(CENTERLINE + 1, 4 * 614));
        assert_eq!(upper[PRECISION], Vector2::new(CENTERLINE + 1, 4 * 735));
    }

    #[test]
    fn too_few_control_points() {
        let def = CurveDef {
            points: &[[0, 0], [10, 10]],
            overrides: &[],
        };
        assert!(matches!(
            sample(&def, "line"),
            Err(Error::DegenerateShape("line"))
        ));
        assert_eq!(sample(Curve::Spine.def(), "spine").unwrap().len(), PRECISION);
    }
}
