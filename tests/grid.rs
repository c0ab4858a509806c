//! Grid fitting on the A4 landscape label sheet

use mklabels::layout::{fit_grid, plan_grid, LabelGeometry, PageGeometry};
use mklabels::{LabelError, Mm};

fn mm(values: [u32; 7]) -> [Mm; 7] {
    values.map(Mm::from)
}

fn fit(values: [u32; 7]) -> Result<(u32, u32), LabelError> {
    let [pw, ph, margin, w, h, len, sep] = mm(values);
    fit_grid(pw, ph, margin, w, h, len, sep).map(|grid| grid.dimensions())
}

#[test]
fn default_labels() {
    assert_eq!(fit([297, 210, 15, 56, 13, 2, 1]).unwrap(), (9, 4));
}

#[test]
fn largest_single_label() {
    assert_eq!(fit([297, 210, 15, 261, 174, 2, 1]).unwrap(), (1, 1));
}

#[test]
fn one_millimetre_too_wide() {
    assert!(matches!(
        fit([297, 210, 15, 262, 174, 2, 1]),
        Err(LabelError::ImpossibleLayout)
    ));
}

#[test]
fn one_millimetre_too_high() {
    assert!(matches!(
        fit([297, 210, 15, 261, 175, 2, 1]),
        Err(LabelError::ImpossibleLayout)
    ));
}

#[test]
fn margin_eating_the_page() {
    assert!(matches!(
        fit([297, 210, 150, 10, 10, 2, 1]),
        Err(LabelError::ImpossibleLayout)
    ));
}

#[test]
fn markers_count_towards_the_cell() {
    // 267 / 60 = 4.45 without markers, 267 / 66 = 4.05 with them
    assert_eq!(fit([297, 210, 15, 60, 13, 0, 0]).unwrap().1, 4);
    assert_eq!(fit([297, 210, 15, 60, 13, 2, 1]).unwrap().1, 4);
    assert!(fit([297, 210, 15, 64, 13, 1, 1]).unwrap().1 < 4);
    // 180 / 18 = 10 exactly, one more millimetre of separation costs a row
    assert_eq!(fit([297, 210, 15, 56, 12, 2, 1]).unwrap().0, 10);
    assert_eq!(fit([297, 210, 15, 56, 12, 2, 2]).unwrap().0, 9);
}

#[test]
fn fractional_millimetres_fill_exactly() {
    let grid = |height: f32, sep: f32| {
        fit_grid(Mm(297.0), Mm(210.0), Mm(15.0), Mm(56.0), Mm(height), Mm(0.0), Mm(sep))
            .map(|grid| grid.dimensions())
    };
    // 180 mm of usable height, 0.3 mm and 0.4 mm cells
    assert_eq!(grid(0.1, 0.1).unwrap(), (600, 4));
    assert_eq!(grid(0.2, 0.1).unwrap(), (450, 4));
    // 1.5 mm cells divide 180 mm into 120 rows
    assert_eq!(grid(1.3, 0.1).unwrap().0, 120);
}

#[test]
fn structured_and_flat_forms_agree() {
    let page = PageGeometry::sheet(Mm(15.0));
    let label = LabelGeometry::default();
    let grid = plan_grid(&page, &label).unwrap();
    assert_eq!(grid.dimensions(), fit([297, 210, 15, 56, 13, 2, 1]).unwrap());
    assert_eq!(grid.capacity(), 36);
}

#[test]
fn error_message_is_readable() {
    let err = fit([297, 210, 15, 262, 174, 2, 1]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "not enough space on the page to fit even one row or column"
    );
}
