//! Placement of the preview windows.
//!
//! Pure arithmetic on a screen size so it can be used (and tested) without a display.

/// A grid of equally sized windows centered on a screen.
///
/// Windows touch horizontally and are separated by `gap` vertically.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    columns: usize,
    rows: usize,
    cell: i32,
    gap: i32,
    origin: (i32, i32),
}

impl GridLayout {
    /// Lay out `count` windows of `cell` pixels in `rows` rows on a `screen` sized screen.
    pub fn new(screen: (u32, u32), count: usize, rows: usize, cell: u32, gap: i32) -> Self {
        let rows = rows.max(1);
        let columns = ((count + rows - 1) / rows).max(1);
        let cell = cell as i32;

        let grid_width = columns as i32 * cell;
        let grid_height = rows as i32 * (cell + gap) - gap;
        let origin = (
            (screen.0 as i32 - grid_width).div_euclid(2),
            (screen.1 as i32 - grid_height).div_euclid(2),
        );

        GridLayout {
            columns,
            rows,
            cell,
            gap,
            origin,
        }
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Top left corner of window `index`, filled row by row.
    ///
    /// Every row is lifted by one `gap` to leave room for the window's title bar.
    pub fn position(&self, index: usize) -> (isize, isize) {
        let column = (index % self.columns) as i32;
        let row = (index / self.columns) as i32;
        let x = self.origin.0 + self.cell * column;
        let y = self.origin.1 - self.gap + (self.cell + self.gap) * row;
        (x as isize, y as isize)
    }
}
