//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between portrait and landscape.
//!
//! Label sheets are always printed on [`LABEL_SHEET`], which is A4 in landscape.
//!
//! # Example
//!
//! ```
//! use mklabels::pagesize::{A4, LABEL_SHEET, PageOrientation};
//!
//! assert_eq!(A4.landscape(), LABEL_SHEET);
//! ```

use crate::units::Mm;

/// Page dimensions as (width, height) in millimetres.
pub type PageSize = (Mm, Mm);

// iso a-series
pub const A3: PageSize = (Mm(297.0), Mm(420.0));
pub const A4: PageSize = (Mm(210.0), Mm(297.0));
pub const A5: PageSize = (Mm(148.0), Mm(210.0));
pub const A6: PageSize = (Mm(105.0), Mm(148.0));

// north american sizes (converted from inches to mm)
pub const LETTER: PageSize = (Mm(8.5 * 25.4), Mm(11.0 * 25.4));
pub const LEGAL: PageSize = (Mm(8.5 * 25.4), Mm(14.0 * 25.4));

/// The sheet every label layout is planned on: A4 landscape, 297 x 210 mm
pub const LABEL_SHEET: PageSize = (A4.1, A4.0);

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_sheet_is_a4_landscape() {
        assert_eq!(LABEL_SHEET, (Mm(297.0), Mm(210.0)));
        assert_eq!(A4.landscape(), LABEL_SHEET);
        assert_eq!(LABEL_SHEET.portrait(), A4);
    }
}
