use super::geometry::{LabelGeometry, PageGeometry};
use crate::error::{LabelError, Result};
use crate::units::Mm;

/// The number of rows and columns of label cells that fit on a page
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: u32,
    pub columns: u32,
}

impl Grid {
    /// Maximum number of labels on one sheet
    pub fn capacity(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.columns)
    }

    /// The `(column, row)` of the cell the `index`-th label goes into. Cells
    /// are filled left to right, then top to bottom.
    pub fn cell_of(&self, index: usize) -> (u32, u32) {
        let columns = self.columns as usize;
        ((index % columns) as u32, (index / columns) as u32)
    }
}

/// Compute how many label cells fit on a page, given the page size, the
/// margin around the page, the label size and the cut marker geometry.
///
/// Only whole cells count. Fails with [`LabelError::ImpossibleLayout`] if not
/// even one row or one column fits.
///
/// ```
/// use mklabels::layout::fit_grid;
/// use mklabels::Mm;
///
/// let grid = fit_grid(Mm(297.0), Mm(210.0), Mm(15.0), Mm(56.0), Mm(13.0), Mm(2.0), Mm(1.0))
///     .expect("labels fit");
/// assert_eq!(grid.dimensions(), (9, 4));
/// ```
pub fn fit_grid(
    page_width: Mm,
    page_height: Mm,
    margin: Mm,
    label_width: Mm,
    label_height: Mm,
    marker_length: Mm,
    marker_sep: Mm,
) -> Result<Grid> {
    plan_grid(
        &PageGeometry {
            width: page_width,
            height: page_height,
            margin,
        },
        &LabelGeometry::new(label_width, label_height, marker_length, marker_sep),
    )
}

/// [`fit_grid`], taking the page and label geometry as structures
pub fn plan_grid(page: &PageGeometry, label: &LabelGeometry) -> Result<Grid> {
    let rows = whole_cells(page.usable_height(), label.cell_height());
    let columns = whole_cells(page.usable_width(), label.cell_width());

    match (rows, columns) {
        (Some(rows), Some(columns)) => {
            log::debug!("{rows} rows x {columns} columns fit on {}x{} mm", page.width, page.height);
            Ok(Grid { rows, columns })
        }
        _ => Err(LabelError::ImpossibleLayout),
    }
}

/// Relative slack on `space / cell`, covering the rounding of the f32 cell size
const CELL_TOLERANCE: f64 = 1e-6;

/// Floor of `space / cell`, or `None` if that is less than one
fn whole_cells(space: Mm, cell: Mm) -> Option<u32> {
    let quotient = f64::from(*space) / f64::from(*cell);
    let count = (quotient + quotient.abs() * CELL_TOLERANCE).floor();
    if count.is_finite() && count >= 1.0 {
        Some(count.min(f64::from(u32::MAX)) as u32)
    } else {
        None
    }
}
