//! Conversions between typed rows and Polars DataFrames.

use polars::prelude::{Column, DataFrame};

use unctad_ingest::{any_to_f64, any_to_i64, any_to_string};
use unctad_model::columns::{
    COUNTRY, EXPORTS, IMPORTS, ISO3, NUM_MEMBERS, NUM_REPORTING_EXPORTS, NUM_REPORTING_IMPORTS,
    REGION, YEAR,
};
use unctad_model::{Indicator, PanelRow, RegionAggregateRow};

use crate::error::{Result, check_schema};

/// Reporting-count columns, in `Indicator::ALL` order.
const REPORTING_COLUMNS: [&str; 2] = [NUM_REPORTING_EXPORTS, NUM_REPORTING_IMPORTS];

/// Builds the panel table, columns in output order.
pub fn panel_frame(rows: &[PanelRow]) -> Result<DataFrame> {
    let country: Vec<&str> = rows.iter().map(|row| row.country.as_str()).collect();
    let iso3: Vec<&str> = rows.iter().map(|row| row.iso3.as_str()).collect();
    let year: Vec<i64> = rows.iter().map(|row| row.year).collect();

    let mut columns = vec![
        Column::new(COUNTRY.into(), country),
        Column::new(ISO3.into(), iso3),
        Column::new(YEAR.into(), year),
    ];
    for indicator in Indicator::ALL {
        let values: Vec<Option<f64>> = rows.iter().map(|row| row.value(indicator)).collect();
        columns.push(Column::new(indicator.column().into(), values));
    }
    Ok(DataFrame::new(columns)?)
}

/// Builds the regional aggregates table, columns in output order.
pub fn aggregate_frame(rows: &[RegionAggregateRow]) -> Result<DataFrame> {
    let region: Vec<&str> = rows.iter().map(|row| row.region.as_str()).collect();
    let year: Vec<i64> = rows.iter().map(|row| row.year).collect();
    let members: Vec<u64> = rows.iter().map(|row| row.num_members as u64).collect();

    let mut columns = vec![
        Column::new(REGION.into(), region),
        Column::new(YEAR.into(), year),
        Column::new(NUM_MEMBERS.into(), members),
    ];
    for (indicator, name) in Indicator::ALL.into_iter().zip(REPORTING_COLUMNS) {
        let reporting: Vec<u64> = rows
            .iter()
            .map(|row| row.reporting(indicator) as u64)
            .collect();
        columns.push(Column::new(name.into(), reporting));
    }
    for indicator in Indicator::ALL {
        let totals: Vec<Option<f64>> = rows.iter().map(|row| row.total(indicator)).collect();
        columns.push(Column::new(indicator.total_column().into(), totals));
    }
    Ok(DataFrame::new(columns)?)
}

/// Reads panel rows back from a table such as a re-loaded panel CSV.
///
/// `country` is optional. Years and measures are coerced leniently: a
/// malformed measure becomes `None`, and a row whose year cannot be read
/// is skipped since it has no group to join.
///
/// # Errors
///
/// [`crate::TransformError::Schema`] if `iso3`, `year`, or a measure column
/// is absent.
pub fn panel_rows_from_frame(df: &DataFrame) -> Result<Vec<PanelRow>> {
    check_schema(df, &[ISO3, YEAR, EXPORTS, IMPORTS], "aggregate")?;

    let country = df.column(COUNTRY).ok();
    let iso3 = df.column(ISO3)?;
    let years = df.column(YEAR)?;
    let measures = Indicator::ALL
        .into_iter()
        .map(|indicator| Ok((indicator, df.column(indicator.column())?)))
        .collect::<Result<Vec<_>>>()?;

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let Some(year) = any_to_i64(years.get(idx)?) else {
            continue;
        };
        let country = match country {
            Some(column) => any_to_string(column.get(idx)?),
            None => String::new(),
        };
        let mut row = PanelRow::new(country, any_to_string(iso3.get(idx)?), year);
        for (indicator, column) in &measures {
            row.set_value(*indicator, any_to_f64(column.get(idx)?));
        }
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::AnyValue;
    use unctad_model::columns::{AGGREGATE_COLUMNS, EXPORTS_TOTAL, PANEL_COLUMNS};

    fn cell(df: &DataFrame, name: &str, idx: usize) -> AnyValue<'static> {
        df.column(name)
            .and_then(|column| column.get(idx))
            .map(|value| value.into_static())
            .unwrap_or(AnyValue::Null)
    }

    #[test]
    fn panel_frame_has_fixed_columns_even_when_empty() {
        let df = panel_frame(&[]).expect("frame");
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, PANEL_COLUMNS.to_vec());
        assert_eq!(df.height(), 0);
    }

    #[test]
    fn aggregate_frame_has_fixed_columns() {
        let row = RegionAggregateRow {
            region: "G7".to_string(),
            year: 2020,
            num_members: 7,
            num_reporting_exports: 2,
            num_reporting_imports: 0,
            exports_total: Some(1520.0),
            imports_total: Some(0.0),
        };
        let df = aggregate_frame(&[row]).expect("frame");
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, AGGREGATE_COLUMNS.to_vec());
        assert_eq!(any_to_i64(cell(&df, NUM_MEMBERS, 0)), Some(7));
        assert_eq!(any_to_f64(cell(&df, EXPORTS_TOTAL, 0)), Some(1520.0));
    }

    #[test]
    fn panel_rows_round_trip_through_frame() {
        let rows = vec![
            PanelRow::new("France", "FRA", 2020).with_value(Indicator::Exports, Some(520.0)),
            PanelRow::new("Japan", "JPN", 2020),
        ];
        let df = panel_frame(&rows).expect("frame");
        assert_eq!(panel_rows_from_frame(&df).expect("rows"), rows);
    }

    #[test]
    fn text_panel_is_coerced() {
        let df = DataFrame::new(vec![
            Column::new(ISO3.into(), ["FRA", "DEU", "ITA"]),
            Column::new(YEAR.into(), ["2020", "", "2021"]),
            Column::new(EXPORTS.into(), ["520.5", "1", "oops"]),
            Column::new(IMPORTS.into(), ["", "2", "3"]),
        ])
        .expect("df");

        let rows = panel_rows_from_frame(&df).expect("rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country, "");
        assert_eq!(rows[0].exports, Some(520.5));
        assert_eq!(rows[0].imports, None);
        assert_eq!(rows[1].iso3, "ITA");
        assert_eq!(rows[1].exports, None);
        assert_eq!(rows[1].imports, Some(3.0));
    }
}
