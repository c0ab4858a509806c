//! Length units used throughout the crate.
//!
//! Sheet geometry is specified in millimetres ([`Mm`]), while the PDF backend
//! works in points ([`Pt`], 1/72 inch). Both are thin wrappers around `f32` so
//! that the two can't be mixed up by accident.

use derive_more::{Add, AddAssign, Deref, Display, Div, From, Into, Mul, Sub, SubAssign, Sum};

/// Points per millimetre (1 inch = 72 points = 25.4 mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// A length in millimetres
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    Div,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
#[display("{_0}")]
pub struct Mm(pub f32);

/// A length in PDF points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    Div,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
#[display("{_0}")]
pub struct Pt(pub f32);

impl From<u32> for Mm {
    fn from(value: u32) -> Self {
        Mm(value as f32)
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt(mm.0 * POINTS_PER_MM)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 / POINTS_PER_MM)
    }
}
