//! Lay out a sheet of labels with cut markers.
//!
//! Given the label size and the size of the cut markers around each label,
//! [`layout::fit_grid`] works out how many labels fit on an A4 landscape sheet.
//! [`render`] then places the label texts on that grid and produces a
//! LaTeX/TikZ document, which [`compile::Toolchain`] can turn into a PDF. The
//! [`pdf`] module writes a PDF directly instead.
//!
//! ```
//! use mklabels::{render, LabelGeometry, Mm, Style};
//!
//! let label = LabelGeometry::default();
//! let markup = render(&["Flour", "Sugar", "Salt"], Mm(15.0), &label, false, Style::Rounded)
//!     .expect("three labels fit");
//! assert!(markup.contains("Sugar"));
//! ```

mod colour;
pub use colour::*;

pub mod compile;

mod error;
pub use error::*;

mod escape;
pub use escape::*;

mod info;
pub use info::*;

/// Grid planning: how many labels fit on a page
pub mod layout;
pub use layout::{LabelGeometry, PageGeometry};

pub mod pagesize;

/// Native PDF output
pub mod pdf;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod sheet;
pub use sheet::*;

mod style;
pub use style::*;

mod tikz;
pub use tikz::*;

mod units;
pub use units::*;

/// Re-export PDF-writer, for callers that post-process the native output
pub use pdf_writer;
