//! Native PDF output.
//!
//! Renders a planned [`Sheet`] straight to a single page PDF, for when no
//! LaTeX installation is around. The drawing matches the TikZ output: the
//! same cut marks (arcs become cubic Bézier curves), the same debug guides and
//! the label text centred in each label, set in the standard Helvetica font.

mod metrics;

pub use metrics::width_of_text;

use crate::colour::{colours, Colour};
use crate::error::Result;
use crate::info::Info;
use crate::rect::{Point, Rect};
use crate::refs::ObjectReferences;
use crate::sheet::{PlacedLabel, Sheet};
use crate::style::{MarkArc, Segment};
use crate::units::{Mm, Pt};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Str};
use std::io::Write;

const FONT_NAME: &[u8] = b"F0";

/// Settings for the native PDF output
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    /// Draw each label's outline and horizontal midline
    pub debug_guides: bool,
    pub font_size: Pt,
    pub line_width: Mm,
    pub mark_colour: Colour,
    pub guide_colour: Colour,
    /// Document metadata. Nothing is written if [None]
    pub info: Option<Info>,
}

impl Default for PdfOptions {
    fn default() -> Self {
        PdfOptions {
            debug_guides: false,
            font_size: Pt(10.0),
            line_width: Mm(0.2),
            mark_colour: colours::BLACK,
            guide_colour: colours::GUIDE_GREY,
            info: None,
        }
    }
}

/// Render the sheet and write the PDF to `w`
pub fn write_pdf<W: Write>(sheet: &Sheet<'_>, options: &PdfOptions, mut w: W) -> Result<()> {
    w.write_all(render_pdf(sheet, options).as_slice())?;
    w.flush()?;
    Ok(())
}

/// Render the sheet to the bytes of a PDF document
pub fn render_pdf(sheet: &Sheet<'_>, options: &PdfOptions) -> Vec<u8> {
    let mut refs = ObjectReferences::new();

    let catalog_id = refs.gen();
    let page_tree_id = refs.gen();
    let page_id = refs.gen();
    let content_id = refs.gen();
    let font_id = refs.gen();

    let mut writer = Pdf::new();
    if let Some(info) = &options.info {
        info.write(&mut refs, &mut writer);
    }

    writer.catalog(catalog_id).pages(page_tree_id);
    writer.pages(page_tree_id).kids([page_id]).count(1);

    let media_box = Rect::from_origin((Mm(0.0), Mm(0.0)), sheet.page.width, sheet.page.height);
    let mut page = writer.page(page_id);
    page.media_box(media_box.into());
    page.parent(page_tree_id);
    page.contents(content_id);
    let mut resources = page.resources();
    resources.fonts().pair(Name(FONT_NAME), font_id);
    resources.finish();
    page.finish();

    writer
        .type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let rendered = draw_sheet(sheet, options);
    let compressed = compress_to_vec_zlib(
        &rendered,
        CompressionLevel::DefaultCompression as u8,
    );
    writer
        .stream(content_id, compressed.as_slice())
        .filter(Filter::FlateDecode);

    writer.finish()
}

/// Maps sheet coordinates (mm, y down) to PDF user space (pt, y up)
struct Canvas {
    height: Mm,
}

impl Canvas {
    fn point(&self, p: Point) -> (f32, f32) {
        (*Pt::from(p.0), *Pt::from(self.height - p.1))
    }

    fn move_to(&self, content: &mut Content, p: Point) {
        let (x, y) = self.point(p);
        content.move_to(x, y);
    }

    fn line_to(&self, content: &mut Content, p: Point) {
        let (x, y) = self.point(p);
        content.line_to(x, y);
    }

    fn segment(&self, content: &mut Content, segment: &Segment) {
        self.move_to(content, segment.from);
        self.line_to(content, segment.to);
    }

    fn arc(&self, content: &mut Content, arc: &MarkArc) {
        for [c1, c2, end] in arc_to_beziers(arc) {
            let (x1, y1) = self.point(c1);
            let (x2, y2) = self.point(c2);
            let (x3, y3) = self.point(end);
            content.cubic_to(x1, y1, x2, y2, x3, y3);
        }
    }
}

fn draw_sheet(sheet: &Sheet<'_>, options: &PdfOptions) -> Vec<u8> {
    let canvas = Canvas {
        height: sheet.page.height,
    };
    let mut content = Content::new();
    content.set_line_width(*Pt::from(options.line_width));

    if options.debug_guides && !sheet.labels.is_empty() {
        options.guide_colour.set_stroke(&mut content);
        for placed in sheet.labels.iter() {
            draw_guides(&canvas, &mut content, &sheet.bounds(placed));
        }
        content.stroke();
    }

    if !sheet.labels.is_empty() {
        options.mark_colour.set_stroke(&mut content);
        for placed in sheet.labels.iter() {
            for mark in sheet.corner_marks(placed).iter() {
                canvas.segment(&mut content, &mark.horizontal);
                canvas.segment(&mut content, &mark.vertical);
                if let Some(arc) = &mark.arc {
                    canvas.arc(&mut content, arc);
                }
            }
        }
        content.stroke();
    }

    colours::BLACK.set_fill(&mut content);
    for placed in sheet.labels.iter() {
        draw_text(&canvas, &mut content, sheet, placed, options.font_size);
    }

    content.finish()
}

fn draw_guides(canvas: &Canvas, content: &mut Content, bounds: &Rect) {
    // pdf rectangles grow upwards from their lower-left corner
    let (x, y) = canvas.point((bounds.x1, bounds.y2));
    content.rect(x, y, *Pt::from(bounds.width()), *Pt::from(bounds.height()));

    let middle = bounds.center().1;
    canvas.move_to(content, (bounds.x1, middle));
    canvas.line_to(content, (bounds.x2, middle));
}

fn draw_text(canvas: &Canvas, content: &mut Content, sheet: &Sheet<'_>, placed: &PlacedLabel<'_>, size: Pt) {
    let (encoded, replaced) = metrics::encode_text(placed.text);
    if replaced {
        log::warn!(
            "label {} ({:?}) has characters Helvetica can't show, they are printed as '?'",
            placed.index,
            placed.text
        );
    }

    let (cx, cy) = canvas.point(sheet.bounds(placed).center());
    let width = width_of_text(&encoded, size);
    let cap_height = size * (metrics::CAP_HEIGHT / 1000.0);

    content.begin_text();
    content.set_font(Name(FONT_NAME), *size);
    content.next_line(cx - *width / 2.0, cy - *cap_height / 2.0);
    content.show(Str(&encoded));
    content.end_text();
}

/// Split an arc into cubic Bézier pieces of at most 90° each. Every piece is
/// `[control 1, control 2, end]`, starting where the previous one ended.
fn arc_to_beziers(arc: &MarkArc) -> Vec<[Point; 3]> {
    let sweep = arc.sweep();
    let pieces = (sweep.abs() / 90.0).ceil().max(1.0) as usize;
    let step = sweep / pieces as f32;
    let handle = 4.0 / 3.0 * (step.to_radians() / 4.0).tan();

    let center = arc.center();
    let r = arc.radius;

    (0..pieces)
        .map(|i| {
            let from = (arc.start_angle + step * i as f32).to_radians();
            let to = (arc.start_angle + step * (i + 1) as f32).to_radians();

            let start = (center.0 + r * from.cos(), center.1 + r * from.sin());
            let end = (center.0 + r * to.cos(), center.1 + r * to.sin());
            let c1 = (
                start.0 - r * (handle * from.sin()),
                start.1 + r * (handle * from.cos()),
            );
            let c2 = (
                end.0 + r * (handle * to.sin()),
                end.1 - r * (handle * to.cos()),
            );
            [c1, c2, end]
        })
        .collect()
}
