//! Grid planning: how many labels fit on a page.
//!
//! A page is split into equally sized _cells_, one per label. A cell is the
//! label itself plus room for the cut markers on every side:
//!
//! ```text
//! cell width  = label width  + 2 * marker length + 2 * marker separation
//! cell height = label height + 2 * marker length + 2 * marker separation
//! ```
//!
//! The number of rows and columns is the number of _whole_ cells that fit
//! between the page margins.
//!
//! # Example
//!
//! ```
//! use mklabels::layout::{plan_grid, LabelGeometry, PageGeometry};
//! use mklabels::Mm;
//!
//! let page = PageGeometry::sheet(Mm(15.0));
//! let label = LabelGeometry::new(Mm(56.0), Mm(13.0), Mm(2.0), Mm(1.0));
//!
//! let grid = plan_grid(&page, &label).expect("labels fit");
//! assert_eq!(grid.capacity(), 36);
//! ```

mod geometry;
mod grid;

pub use geometry::*;
pub use grid::*;
