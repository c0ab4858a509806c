//! LaTeX/TikZ output.
//!
//! The generated document is a `standalone` TikZ picture exactly the size of
//! the label sheet. The picture uses `x=1mm, y=-1mm`, so every coordinate is
//! in millimetres from the top-left corner of the sheet with y growing
//! downwards, the same convention [`Sheet`] uses. The label and marker sizes
//! are declared once as macros in the preamble and referenced from the
//! drawing commands.

use crate::error::Result;
use crate::escape::escape_latex;
use crate::layout::{LabelGeometry, PageGeometry};
use crate::rect::Point;
use crate::sheet::{PlacedLabel, Sheet};
use crate::style::{CornerMark, MarkArc, Segment, Style};
use crate::units::Mm;
use std::fmt::Write;

const MARKER_LENGTH_MACRO: &str = r"\lblmarkerlength";

/// Lay out `labels` on the label sheet and produce the TikZ document.
///
/// Fails with [`LabelError::ImpossibleLayout`](crate::LabelError::ImpossibleLayout)
/// if no label fits on the sheet, and with
/// [`LabelError::TooManyLabels`](crate::LabelError::TooManyLabels) if not all of them do.
///
/// ```
/// use mklabels::{render, LabelGeometry, Mm, Style};
///
/// let label = LabelGeometry::new(Mm(56.0), Mm(13.0), Mm(2.0), Mm(1.0));
/// let markup = render(&["Apricot jam"], Mm(15.0), &label, false, Style::Plain)
///     .expect("one label fits");
/// assert!(markup.contains(r"\node at (43, 21.5) {Apricot jam};"));
/// ```
pub fn render<S: AsRef<str>>(
    labels: &[S],
    margin: Mm,
    label: &LabelGeometry,
    debug_guides: bool,
    style: Style,
) -> Result<String> {
    let sheet = Sheet::plan(labels, PageGeometry::sheet(margin), *label, style)?;
    render_sheet(&sheet, debug_guides)
}

/// Produce the TikZ document for an already planned sheet.
///
/// Debug guides (each label's outline and its horizontal midline) are always
/// written; with `debug_guides` off they are commented out, so that the
/// documents for both settings only differ in those lines.
pub fn render_sheet(sheet: &Sheet<'_>, debug_guides: bool) -> Result<String> {
    let mut out = String::new();
    write_preamble(&mut out, sheet)?;

    for placed in sheet.labels.iter() {
        write_label(&mut out, sheet, placed, debug_guides)?;
    }

    writeln!(out, r"\end{{tikzpicture}}")?;
    writeln!(out, r"\end{{document}}")?;
    Ok(out)
}

fn write_preamble(out: &mut String, sheet: &Sheet<'_>) -> Result<()> {
    let page = &sheet.page;
    let label = &sheet.label;

    writeln!(out, r"\documentclass[tikz, border=0pt]{{standalone}}")?;
    writeln!(out, r"\usepackage[T1]{{fontenc}}")?;
    writeln!(out, r"\usepackage[utf8]{{inputenc}}")?;
    writeln!(out)?;
    writeln!(out, r"\newcommand{{\lblmargin}}{{{}}}", page.margin)?;
    writeln!(out, r"\newcommand{{{MARKER_LENGTH_MACRO}}}{{{}}}", label.marker_length)?;
    writeln!(out, r"\newcommand{{\lblmarkersep}}{{{}}}", label.marker_sep)?;
    writeln!(out, r"\newcommand{{\lblwidth}}{{{}}}", label.width)?;
    writeln!(out, r"\newcommand{{\lblheight}}{{{}}}", label.height)?;
    writeln!(out)?;
    writeln!(out, r"\begin{{document}}")?;
    writeln!(out, r"\begin{{tikzpicture}}[x=1mm, y=-1mm, line width=0.2mm]")?;
    writeln!(
        out,
        r"\useasboundingbox (0, 0) rectangle ({}, {});",
        page.width, page.height
    )?;
    Ok(())
}

fn write_label(
    out: &mut String,
    sheet: &Sheet<'_>,
    placed: &PlacedLabel<'_>,
    debug_guides: bool,
) -> Result<()> {
    let bounds = sheet.bounds(placed);
    let center = bounds.center();
    let guide = if debug_guides { "" } else { "% " };

    writeln!(
        out,
        "% label {}: column {}, row {}",
        placed.index, placed.column, placed.row
    )?;
    writeln!(
        out,
        r"{guide}\draw[help lines] {} rectangle ++(\lblwidth, \lblheight);",
        coord(placed.origin)
    )?;
    writeln!(
        out,
        r"{guide}\draw[help lines] {} -- ++(\lblwidth, 0);",
        coord((bounds.x1, center.1))
    )?;

    for mark in sheet.corner_marks(placed).iter() {
        write_corner_mark(out, mark)?;
    }

    writeln!(
        out,
        r"\node at {} {{{}}};",
        coord(center),
        escape_latex(placed.text)
    )?;
    Ok(())
}

fn write_corner_mark(out: &mut String, mark: &CornerMark) -> Result<()> {
    writeln!(out, r"\draw {};", segment_path(&mark.horizontal))?;
    match mark.arc {
        None => writeln!(out, r"\draw {};", segment_path(&mark.vertical))?,
        Some(arc) => writeln!(
            out,
            r"\draw {} {};",
            segment_path(&mark.vertical),
            arc_path(&arc)
        )?,
    }
    Ok(())
}

/// `(x, y) -- ++(dx, dy)`, with the offset written in terms of the marker length
fn segment_path(segment: &Segment) -> String {
    format!(
        "{} -- ++({}, {})",
        coord(segment.from),
        marker_offset(segment.to.0 - segment.from.0),
        marker_offset(segment.to.1 - segment.from.1),
    )
}

fn arc_path(arc: &MarkArc) -> String {
    format!(
        "arc ({}:{}:{MARKER_LENGTH_MACRO})",
        arc.start_angle, arc.end_angle
    )
}

fn marker_offset(delta: Mm) -> String {
    if *delta < 0.0 {
        format!("-{MARKER_LENGTH_MACRO}")
    } else if *delta > 0.0 {
        MARKER_LENGTH_MACRO.to_string()
    } else {
        "0".to_string()
    }
}

fn coord(point: Point) -> String {
    format!("({}, {})", point.0, point.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_label(style: Style, debug_guides: bool) -> String {
        render(
            &["one"],
            Mm(15.0),
            &LabelGeometry::default(),
            debug_guides,
            style,
        )
        .unwrap()
    }

    #[test]
    fn preamble_declares_sheet_and_macros() {
        let markup = single_label(Style::Plain, false);
        assert!(markup.starts_with(r"\documentclass[tikz, border=0pt]{standalone}"));
        assert!(markup.contains(r"\newcommand{\lblmargin}{15}"));
        assert!(markup.contains(r"\newcommand{\lblmarkerlength}{2}"));
        assert!(markup.contains(r"\newcommand{\lblmarkersep}{1}"));
        assert!(markup.contains(r"\newcommand{\lblwidth}{56}"));
        assert!(markup.contains(r"\newcommand{\lblheight}{13}"));
        assert!(markup.contains(r"\useasboundingbox (0, 0) rectangle (297, 210);"));
        assert!(markup.ends_with("\\end{tikzpicture}\n\\end{document}\n"));
    }

    #[test]
    fn plain_corner_marks() {
        let markup = single_label(Style::Plain, false);
        assert!(markup.contains(r"\draw (14, 15) -- ++(-\lblmarkerlength, 0);"));
        assert!(markup.contains(r"\draw (15, 14) -- ++(0, -\lblmarkerlength);"));
        assert!(markup.contains(r"\draw (72, 28) -- ++(\lblmarkerlength, 0);"));
        assert!(markup.contains(r"\draw (71, 29) -- ++(0, \lblmarkerlength);"));
        assert!(!markup.contains("arc"));
    }

    #[test]
    fn rounded_corner_marks_carry_arcs() {
        let markup = single_label(Style::Rounded, false);
        assert!(markup.contains(
            r"\draw (15, 14) -- ++(0, -\lblmarkerlength) arc (90:360:\lblmarkerlength);"
        ));
        assert!(markup.contains(r"arc (0:270:\lblmarkerlength);"));
        assert!(markup.contains(r"arc (-180:90:\lblmarkerlength);"));
        assert!(markup.contains(r"arc (180:-90:\lblmarkerlength);"));
    }

    #[test]
    fn debug_guides_are_commented_out_when_disabled() {
        let quiet = single_label(Style::Plain, false);
        let loud = single_label(Style::Plain, true);

        assert!(quiet.contains(r"% \draw[help lines] (15, 15) rectangle ++(\lblwidth, \lblheight);"));
        assert!(quiet.contains(r"% \draw[help lines] (15, 21.5) -- ++(\lblwidth, 0);"));
        assert!(loud.contains("\n\\draw[help lines] (15, 15) rectangle"));
        assert!(!loud.contains(r"% \draw[help lines]"));
        assert_eq!(quiet.lines().count(), loud.lines().count());
    }

    #[test]
    fn label_text_is_centered_and_escaped() {
        let markup = render(
            &["R&D 100%"],
            Mm(15.0),
            &LabelGeometry::default(),
            false,
            Style::Plain,
        )
        .unwrap();
        assert!(markup.contains(r"\node at (43, 21.5) {R\&D 100\%};"));
    }
}
