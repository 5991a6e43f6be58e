use polars::prelude::{Column, DataFrame};

use unctad_ingest::{column_strings, parse_f64, read_csv_frame};
use unctad_output::write_csv;

#[test]
fn nulls_become_empty_cells_and_values_reparse() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("panel.csv");
    let mut df = DataFrame::new(vec![
        Column::new("country".into(), ["Korea, Republic of", "France"]),
        Column::new("iso3".into(), ["KOR", "FRA"]),
        Column::new("year".into(), [2020_i64, 2021]),
        Column::new("exports".into(), [Some(1520.0_f64), None]),
    ])
    .expect("df");

    write_csv(&mut df, &path).expect("write");
    let back = read_csv_frame(&path).expect("read back");

    assert_eq!(back.height(), 2);
    assert_eq!(
        column_strings(&back, "country").expect("country"),
        vec!["Korea, Republic of", "France"]
    );
    let exports: Vec<Option<f64>> = column_strings(&back, "exports")
        .expect("exports")
        .iter()
        .map(|value| parse_f64(value))
        .collect();
    assert_eq!(exports, vec![Some(1520.0), None]);
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.csv");
    std::fs::write(&path, "stale contents that are longer than the new file\n").expect("seed");

    let mut df = DataFrame::new(vec![Column::new("region".into(), ["G7"])]).expect("df");
    write_csv(&mut df, &path).expect("write");
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "region\nG7\n");
}
