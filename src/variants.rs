//! The fixed set of styles the emblem is published in.

use crate::logo::{gray, invert, Palette, Style, CONTOUR, RED, RED_SHADOW};

/// Background gray levels, dark first.
pub const BACKGROUNDS: [u8; 2] = [0, 255];

/// How the figure is drawn on a background.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scheme {
    /// Figure in the background color, visible only through its contour
    MonoOutline,
    /// Figure in the inverted background color, pieces separated by background colored lines
    MonoFilled,
    /// Red lobes without contour
    Colored,
    /// Red lobes with a black contour
    ColoredContour,
}

impl Scheme {
    /// All schemes in generation order.
    pub const ALL: [Scheme; 4] = [
        Scheme::MonoOutline,
        Scheme::MonoFilled,
        Scheme::Colored,
        Scheme::ColoredContour,
    ];

    /// The style of this scheme on a `blank` gray background.
    pub fn style(self, blank: u8) -> Style {
        let background = gray(blank);
        let figure = invert(background);
        let (palette, contour) = match self {
            // contour stays on for both backgrounds, the white one included
            Scheme::MonoOutline => (
                Palette {
                    blank: background,
                    contour: if blank == 0 { invert(CONTOUR) } else { CONTOUR },
                    fang: background,
                    main: background,
                    shadow: background,
                },
                true,
            ),
            Scheme::MonoFilled => (
                Palette {
                    blank: background,
                    contour: background,
                    fang: figure,
                    main: figure,
                    shadow: figure,
                },
                true,
            ),
            Scheme::Colored | Scheme::ColoredContour => (
                Palette {
                    blank: background,
                    contour: CONTOUR,
                    fang: figure,
                    main: RED,
                    shadow: RED_SHADOW,
                },
                self == Scheme::ColoredContour,
            ),
        };
        Style {
            palette,
            contour,
            mirror: true,
        }
    }
}

/// One entry of the published set.
#[derive(Copy, Clone, Debug)]
pub struct Variant {
    /// Position in generation order, also used for window titles and file names
    pub index: usize,
    /// Background gray level
    pub blank: u8,
    /// How the figure is drawn
    pub scheme: Scheme,
    /// Resulting style
    pub style: Style,
}

impl Variant {
    /// Window title and file stem, e.g. `Image 3`.
    pub fn title(&self) -> String {
        format!("Image {}", self.index)
    }
}

/// Every background combined with every scheme, backgrounds outermost.
pub fn variants() -> Vec<Variant> {
    BACKGROUNDS
        .iter()
        .flat_map(|&blank| Scheme::ALL.iter().map(move |&scheme| (blank, scheme)))
        .enumerate()
        .map(|(index, (blank, scheme))| Variant {
            index,
            blank,
            scheme,
            style: scheme.style(blank),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_variants_in_order() {
        let variants = variants();
        assert_eq!(variants.len(), 8);
        for (i, variant) in variants.iter().enumerate() {
            assert_eq!(variant.index, i);
            assert_eq!(variant.title(), format!("Image {}", i));
            assert!(variant.style.mirror);
        }
        assert_eq!(variants[0].blank, 0);
        assert_eq!(variants[4].blank, 255);
        assert_eq!(variants[5].scheme, Scheme::MonoFilled);
        assert_eq!(variants[7].scheme, Scheme::ColoredContour);
    }

    #[test]
    fn outline_only_on_black() {
        let style = Scheme::MonoOutline.style(0);
        assert!(style.contour);
        assert_eq!(style.palette.contour, gray(255));
        assert_eq!(style.palette.fang, gray(0));
        assert_eq!(style.palette.main, gray(0));
        assert_eq!(style.palette.shadow, gray(0));
    }

    #[test]
    fn outline_only_on_white() {
        let style = Scheme::MonoOutline.style(255);
        assert!(style.contour);
        assert_eq!(style.palette.contour, gray(0));
        assert_eq!(style.palette.main, gray(255));
    }

    #[test]
    fn colored_fang_contrasts_background() {
        assert_eq!(Scheme::Colored.style(0).palette.fang, gray(255));
        assert_eq!(Scheme::Colored.style(255).palette.fang, gray(0));
        assert!(!Scheme::Colored.style(0).contour);
        assert!(Scheme::ColoredContour.style(255).contour);
        assert_eq!(Scheme::ColoredContour.style(0).palette.main, RED);
    }
}
