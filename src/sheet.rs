use crate::error::{LabelError, Result};
use crate::layout::{plan_grid, Grid, LabelGeometry, PageGeometry};
use crate::rect::{Point, Rect};
use crate::style::{Corner, CornerMark, Style};

/// A label assigned to its grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel<'a> {
    /// Position of the label in the input
    pub index: usize,
    pub column: u32,
    pub row: u32,
    /// Top-left corner of the label itself (not of its cell)
    pub origin: Point,
    pub text: &'a str,
}

/// A fully planned sheet of labels: every label has its cell, nothing is
/// drawn yet. Both the TikZ and the PDF output are produced from this.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet<'a> {
    pub page: PageGeometry,
    pub label: LabelGeometry,
    pub style: Style,
    pub grid: Grid,
    pub labels: Vec<PlacedLabel<'a>>,
}

impl<'a> Sheet<'a> {
    /// Plan the grid for `page` and `label`, then place `labels` into it in
    /// row-major order. A partially filled last row stays left-aligned.
    ///
    /// Fails with [`LabelError::ImpossibleLayout`] if no cell fits and with
    /// [`LabelError::TooManyLabels`] if there are more labels than cells.
    pub fn plan<S: AsRef<str>>(
        labels: &'a [S],
        page: PageGeometry,
        label: LabelGeometry,
        style: Style,
    ) -> Result<Sheet<'a>> {
        let grid = plan_grid(&page, &label)?;

        if labels.len() > grid.capacity() {
            return Err(LabelError::TooManyLabels {
                requested: labels.len(),
                capacity: grid.capacity(),
            });
        }

        let mut sheet = Sheet {
            page,
            label,
            style,
            grid,
            labels: Vec::with_capacity(labels.len()),
        };

        for (index, text) in labels.iter().enumerate() {
            let (column, row) = grid.cell_of(index);
            let origin = sheet.cell_origin(column, row);
            log::debug!("label {index} goes into column {column}, row {row}");
            sheet.labels.push(PlacedLabel {
                index,
                column,
                row,
                origin,
                text: text.as_ref(),
            });
        }

        Ok(sheet)
    }

    /// Top-left corner of the label in the given cell
    pub fn cell_origin(&self, column: u32, row: u32) -> Point {
        (
            self.page.margin + self.label.cell_width() * column as f32,
            self.page.margin + self.label.cell_height() * row as f32,
        )
    }

    /// The area covered by a placed label
    pub fn bounds(&self, placed: &PlacedLabel<'_>) -> Rect {
        Rect::from_origin(placed.origin, self.label.width, self.label.height)
    }

    /// The four cut marks around a placed label
    pub fn corner_marks(&self, placed: &PlacedLabel<'_>) -> [CornerMark; 4] {
        let bounds = self.bounds(placed);
        Corner::ALL.map(|corner| {
            self.style
                .corner_mark(corner, corner.of(&bounds), &self.label)
        })
    }
}
