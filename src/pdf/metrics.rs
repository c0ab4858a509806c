//! Advance widths of the standard Helvetica font, in 1/1000 em, for the
//! printable ASCII range. Base-14 fonts are not embedded, so these are needed
//! to centre text.

use crate::units::Pt;

/// Glyph shown for every character the font cannot encode
pub const REPLACEMENT: u8 = b'?';

/// Height of capital letters, in 1/1000 em
pub const CAP_HEIGHT: f32 = 718.0;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0 - 9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A - Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a - z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

/// The byte for `ch` in WinAnsiEncoding, if it is printable ASCII
pub fn encode(ch: char) -> Option<u8> {
    if (' '..='~').contains(&ch) {
        Some(ch as u8)
    } else {
        None
    }
}

/// Encode `text` for the font, replacing what it can't show. The flag is set
/// if anything was replaced.
pub fn encode_text(text: &str) -> (Vec<u8>, bool) {
    let mut replaced = false;
    let bytes = text
        .chars()
        .map(|ch| {
            encode(ch).unwrap_or_else(|| {
                replaced = true;
                REPLACEMENT
            })
        })
        .collect();
    (bytes, replaced)
}

fn advance(byte: u8) -> u16 {
    HELVETICA_WIDTHS
        .get(byte.wrapping_sub(b' ') as usize)
        .copied()
        .unwrap_or(HELVETICA_WIDTHS[(REPLACEMENT - b' ') as usize])
}

/// Width of already encoded text at the given font size
pub fn width_of_text(encoded: &[u8], size: Pt) -> Pt {
    let units: u32 = encoded.iter().map(|&b| u32::from(advance(b))).sum();
    size * (units as f32 / 1000.0)
}
