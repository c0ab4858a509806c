use crate::pagesize::{PageSize, LABEL_SHEET};
use crate::units::Mm;

/// The page a sheet of labels is laid out on. The margin applies equally to
/// all four edges.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    pub width: Mm,
    pub height: Mm,
    pub margin: Mm,
}

impl PageGeometry {
    /// Create a page of the given size with a uniform margin
    pub fn new(size: PageSize, margin: Mm) -> PageGeometry {
        PageGeometry {
            width: size.0,
            height: size.1,
            margin,
        }
    }

    /// The fixed label sheet ([`LABEL_SHEET`]) with a uniform margin
    pub fn sheet(margin: Mm) -> PageGeometry {
        PageGeometry::new(LABEL_SHEET, margin)
    }

    /// Width available between the left and right margins
    pub fn usable_width(&self) -> Mm {
        self.width - self.margin * 2.0
    }

    /// Height available between the top and bottom margins
    pub fn usable_height(&self) -> Mm {
        self.height - self.margin * 2.0
    }
}

/// The size of a single label and of the cut markers drawn around it.
///
/// Each label occupies a _cell_ which is the label itself plus, on both sides
/// of each axis, the marker separation and the marker length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelGeometry {
    pub width: Mm,
    pub height: Mm,
    /// Length of each cut marker line
    pub marker_length: Mm,
    /// Gap between the label edge and the start of a cut marker
    pub marker_sep: Mm,
}

impl Default for LabelGeometry {
    fn default() -> Self {
        LabelGeometry {
            width: Mm(56.0),
            height: Mm(13.0),
            marker_length: Mm(2.0),
            marker_sep: Mm(1.0),
        }
    }
}

impl LabelGeometry {
    pub fn new(width: Mm, height: Mm, marker_length: Mm, marker_sep: Mm) -> LabelGeometry {
        LabelGeometry {
            width,
            height,
            marker_length,
            marker_sep,
        }
    }

    /// Space taken up by the markers on one side of the label
    pub fn marker_extent(&self) -> Mm {
        self.marker_length + self.marker_sep
    }

    pub fn cell_width(&self) -> Mm {
        self.width + self.marker_extent() * 2.0
    }

    pub fn cell_height(&self) -> Mm {
        self.height + self.marker_extent() * 2.0
    }
}
