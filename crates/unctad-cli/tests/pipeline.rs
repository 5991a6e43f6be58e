//! End-to-end tests for the pipeline stages.

use std::fs;
use std::path::Path;

use unctad_cli::pipeline::{
    AggregateSettings, DataPaths, run_aggregate_stage, run_all, run_panel_stage,
};
use unctad_ingest::{column_strings, parse_f64, read_csv_frame};
use unctad_model::{PanelOptions, load_regions};

const HEADER: &str = "REF_AREA,REF_AREA_LABEL,INDICATOR,TIME_PERIOD,OBS_VALUE,UNIT_MULT,FREQ,\
                      SEX,AGE,URBANISATION,COMP_BREAKDOWN_1,COMP_BREAKDOWN_2,COMP_BREAKDOWN_3,\
                      OBS_STATUS";

fn raw_line(
    area: &str,
    label: &str,
    indicator: &str,
    value: &str,
    mult: &str,
    status: &str,
) -> String {
    format!(
        "{area},{label},UNCTAD_DE_DIG_SERVTRADE_ANN_{indicator},2020,{value},{mult},\
         A,_T,_T,_T,_Z,_Z,_Z,{status}"
    )
}

fn write_raw(dir: &Path) -> DataPaths {
    let lines = [
        HEADER.to_string(),
        raw_line("FRA", "France", "EXP", "500", "6", "P"),
        raw_line("FRA", "France", "EXP", "520", "6", "A"),
        raw_line("FRA", "France", "IMP", "410", "x", "A"),
        raw_line("USA", "United States", "EXP", "1", "9", "A"),
        raw_line("WLD", "World", "EXP", "9999", "6", "A"),
        "FRA,France,UNCTAD_DE_DIG_SERVTRADE_ANN_EXP,2020,7,6,A,F,_T,_T,_Z,_Z,_Z,A".to_string(),
        "FRA,France,UNCTAD_DE_DIG_SERVTRADE_ANN_EXP,2020,7,6,Q,_T,_T,_T,_Z,_Z,_Z,A".to_string(),
    ];
    let data_dir = dir.join("datasets");
    fs::create_dir_all(&data_dir).expect("data dir");
    let paths = DataPaths::in_dir(&data_dir);
    fs::write(&paths.raw, lines.join("\n") + "\n").expect("write raw");
    paths
}

fn first_line(path: &Path) -> String {
    fs::read_to_string(path)
        .expect("read output")
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn floats(path: &Path, column: &str) -> Vec<Option<f64>> {
    let df = read_csv_frame(path).expect("read back");
    column_strings(&df, column)
        .expect("column")
        .iter()
        .map(|value| parse_f64(value))
        .collect()
}

#[test]
fn full_run_writes_both_tables() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_raw(dir.path());

    let reports = run_all(&paths, &PanelOptions::default(), &AggregateSettings::default())
        .expect("run");

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].input_rows, 7);
    assert_eq!(reports[0].output_rows, 3);
    insta::assert_snapshot!(first_line(&paths.panel), @"country,iso3,year,dig_services_exports_usd_millions,dig_services_imports_usd_millions");

    let panel = read_csv_frame(&paths.panel).expect("panel");
    assert_eq!(
        column_strings(&panel, "iso3").expect("iso3"),
        vec!["FRA", "USA", "WLD"]
    );
    assert_eq!(
        floats(&paths.panel, "dig_services_exports_usd_millions"),
        vec![Some(520.0), Some(1000.0), Some(9999.0)]
    );
    assert_eq!(
        floats(&paths.panel, "dig_services_imports_usd_millions"),
        vec![None, None, None]
    );

    insta::assert_snapshot!(first_line(&paths.aggregates), @"region,year,num_members,num_reporting_exports,num_reporting_imports,dig_services_exports_usd_millions_total,dig_services_imports_usd_millions_total");
    let aggregates = read_csv_frame(&paths.aggregates).expect("aggregates");
    assert_eq!(
        column_strings(&aggregates, "region").expect("region"),
        vec!["EU27", "G7"]
    );
    assert_eq!(
        column_strings(&aggregates, "num_members").expect("members"),
        vec!["27", "7"]
    );
    assert_eq!(
        column_strings(&aggregates, "num_reporting_exports").expect("reporting"),
        vec!["1", "2"]
    );
    assert_eq!(
        floats(&paths.aggregates, "dig_services_exports_usd_millions_total"),
        vec![Some(520.0), Some(1520.0)]
    );
    assert_eq!(
        floats(&paths.aggregates, "dig_services_imports_usd_millions_total"),
        vec![Some(0.0), Some(0.0)]
    );
}

#[test]
fn aggregate_without_panel_hints_at_panel_stage() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = DataPaths::in_dir(dir.path());

    let err = run_aggregate_stage(&paths.panel, &paths.aggregates, &AggregateSettings::default())
        .expect_err("missing panel");
    let message = format!("{err:#}");
    assert!(message.contains("input file not found"), "{message}");
    assert!(message.contains("panel"), "{message}");
    assert!(!paths.aggregates.exists());
}

#[test]
fn missing_raw_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = DataPaths::in_dir(dir.path());
    let err = run_panel_stage(&paths.raw, &paths.panel, &PanelOptions::default())
        .expect_err("missing raw");
    assert!(format!("{err:#}").contains("UNCTAD_DE.csv"));
}

#[test]
fn missing_column_produces_no_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = DataPaths::in_dir(dir.path());
    fs::write(&paths.raw, "REF_AREA,TIME_PERIOD\nFRA,2020\n").expect("write raw");

    let err = run_panel_stage(&paths.raw, &paths.panel, &PanelOptions::default())
        .expect_err("schema");
    assert!(format!("{err:#}").contains("missing required columns for panel"));
    assert!(!paths.panel.exists());
}

#[test]
fn custom_regions_from_toml() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_raw(dir.path());
    let config = dir.path().join("regions.toml");
    fs::write(
        &config,
        "[[regions]]\nname = \"NORTH_ATLANTIC\"\nmembers = [\"fra\", \"USA\", \"CAN\"]\n",
    )
    .expect("write config");

    let (regions, exclusions) = load_regions(Some(&config)).expect("regions");
    let settings = AggregateSettings {
        regions,
        exclusions,
        ..AggregateSettings::default()
    };
    run_all(&paths, &PanelOptions::default(), &settings).expect("run");

    let aggregates = read_csv_frame(&paths.aggregates).expect("aggregates");
    assert_eq!(
        column_strings(&aggregates, "region").expect("region"),
        vec!["NORTH_ATLANTIC"]
    );
    assert_eq!(
        column_strings(&aggregates, "num_members").expect("members"),
        vec!["3"]
    );
    assert_eq!(
        floats(&paths.aggregates, "dig_services_exports_usd_millions_total"),
        vec![Some(1520.0)]
    );
}
