use crate::units::*;

/// A point on the sheet, in millimetres from the top-left corner with y
/// growing downwards.
pub type Point = (Mm, Mm);

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x1: Mm,
    /// The y-coordinate of the top edge.
    pub y1: Mm,
    /// The x-coordinate of the right edge.
    pub x2: Mm,
    /// The y-coordinate of the bottom edge.
    pub y2: Mm,
}

impl Rect {
    /// A rectangle with its top-left corner at `origin`
    pub fn from_origin(origin: Point, width: Mm, height: Mm) -> Rect {
        Rect {
            x1: origin.0,
            y1: origin.1,
            x2: origin.0 + width,
            y2: origin.1 + height,
        }
    }

    pub fn width(&self) -> Mm {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Mm {
        self.y2 - self.y1
    }

    pub fn center(&self) -> Point {
        (
            self.x1 + self.width() / 2.0,
            self.y1 + self.height() / 2.0,
        )
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: Pt::from(r.x1).into(),
            y1: Pt::from(r.y1).into(),
            x2: Pt::from(r.x2).into(),
            y2: Pt::from(r.y2).into(),
        }
    }
}

impl From<&Rect> for pdf_writer::Rect {
    fn from(r: &Rect) -> Self {
        (*r).into()
    }
}
