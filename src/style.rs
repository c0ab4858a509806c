//! Cut marker styles and the geometry of the marks drawn at each label corner.
//!
//! Every corner gets two short lines that continue the label's edges outward:
//! one horizontal, one vertical. Each starts `marker_sep` away from the corner
//! and is `marker_length` long. The [`Style::Rounded`] style additionally
//! continues the vertical line into an arc of radius `marker_length`.

use crate::layout::LabelGeometry;
use crate::rect::{Point, Rect};
use crate::units::Mm;
use std::fmt;
use std::str::FromStr;

/// Decoration of the cut markers. Has no influence on the grid.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Style {
    /// Two straight lines per corner
    #[default]
    Plain,
    /// Two straight lines per corner, the vertical one ending in an arc
    Rounded,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Plain => f.write_str("plain"),
            Style::Rounded => f.write_str("rounded"),
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Style::Plain),
            "rounded" => Ok(Style::Rounded),
            other => Err(format!("unknown marker style `{other}`, expected plain or rounded")),
        }
    }
}

/// The four corners of a label, in drawing order
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Signs of the direction pointing away from the label, with y growing downwards
    pub fn outward(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (-1.0, -1.0),
            Corner::TopRight => (1.0, -1.0),
            Corner::BottomRight => (1.0, 1.0),
            Corner::BottomLeft => (-1.0, 1.0),
        }
    }

    /// Start and end angle of the rounded marker arc, in degrees. 0° points
    /// along +x and angles grow counter-clockwise.
    pub fn arc_angles(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (90.0, 360.0),
            Corner::TopRight => (0.0, 270.0),
            Corner::BottomRight => (-180.0, 90.0),
            Corner::BottomLeft => (180.0, -90.0),
        }
    }

    /// This corner of `rect`
    pub fn of(self, rect: &Rect) -> Point {
        match self {
            Corner::TopLeft => (rect.x1, rect.y1),
            Corner::TopRight => (rect.x2, rect.y1),
            Corner::BottomRight => (rect.x2, rect.y2),
            Corner::BottomLeft => (rect.x1, rect.y2),
        }
    }
}

/// A straight line
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// A circular arc starting at `start`, sweeping from `start_angle` to
/// `end_angle` (degrees) around a centre `radius` away from `start`.
///
/// The arc is open-ended: it continues the vertical segment of a
/// [`CornerMark`] and does not come back to the horizontal one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkArc {
    pub start: Point,
    pub start_angle: f32,
    pub end_angle: f32,
    pub radius: Mm,
}

impl MarkArc {
    pub fn center(&self) -> Point {
        let (dx, dy) = polar(self.radius, self.start_angle);
        (self.start.0 - dx, self.start.1 - dy)
    }

    /// The point on the arc's circle at `angle` degrees
    pub fn point_at(&self, angle: f32) -> Point {
        let center = self.center();
        let (dx, dy) = polar(self.radius, angle);
        (center.0 + dx, center.1 + dy)
    }

    pub fn end(&self) -> Point {
        self.point_at(self.end_angle)
    }

    /// Signed sweep in degrees
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }
}

fn polar(radius: Mm, degrees: f32) -> (Mm, Mm) {
    let radians = degrees.to_radians();
    (radius * radians.cos(), radius * radians.sin())
}

/// The complete cut mark at one label corner
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerMark {
    pub corner: Corner,
    pub horizontal: Segment,
    pub vertical: Segment,
    /// Only present for [`Style::Rounded`]; starts where `vertical` ends
    pub arc: Option<MarkArc>,
}

impl Style {
    /// The cut mark for `corner`, which lies at `at`
    pub fn corner_mark(self, corner: Corner, at: Point, label: &LabelGeometry) -> CornerMark {
        let (sx, sy) = corner.outward();
        let near = label.marker_sep;
        let far = label.marker_extent();

        let horizontal = Segment {
            from: (at.0 + near * sx, at.1),
            to: (at.0 + far * sx, at.1),
        };
        let vertical = Segment {
            from: (at.0, at.1 + near * sy),
            to: (at.0, at.1 + far * sy),
        };

        let arc = match self {
            Style::Plain => None,
            Style::Rounded => {
                let (start_angle, end_angle) = corner.arc_angles();
                Some(MarkArc {
                    start: vertical.to,
                    start_angle,
                    end_angle,
                    radius: label.marker_length,
                })
            }
        };

        CornerMark {
            corner,
            horizontal,
            vertical,
            arc,
        }
    }
}
