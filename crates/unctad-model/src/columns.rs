//! Column names for the raw extract and the derived tables.

// === Raw UNCTAD_DE extract ===
pub const REF_AREA: &str = "REF_AREA";
pub const REF_AREA_LABEL: &str = "REF_AREA_LABEL";
pub const INDICATOR: &str = "INDICATOR";
pub const TIME_PERIOD: &str = "TIME_PERIOD";
pub const OBS_VALUE: &str = "OBS_VALUE";
pub const UNIT_MULT: &str = "UNIT_MULT";
pub const FREQ: &str = "FREQ";
pub const SEX: &str = "SEX";
pub const AGE: &str = "AGE";
pub const URBANISATION: &str = "URBANISATION";
pub const COMP_BREAKDOWN_1: &str = "COMP_BREAKDOWN_1";
pub const COMP_BREAKDOWN_2: &str = "COMP_BREAKDOWN_2";
pub const COMP_BREAKDOWN_3: &str = "COMP_BREAKDOWN_3";
pub const OBS_STATUS: &str = "OBS_STATUS";

/// Every column the panel stage reads from the raw extract.
pub const RAW_REQUIRED: [&str; 14] = [
    REF_AREA,
    REF_AREA_LABEL,
    INDICATOR,
    TIME_PERIOD,
    OBS_VALUE,
    UNIT_MULT,
    FREQ,
    SEX,
    AGE,
    URBANISATION,
    COMP_BREAKDOWN_1,
    COMP_BREAKDOWN_2,
    COMP_BREAKDOWN_3,
    OBS_STATUS,
];

// === Country-year panel ===
pub const COUNTRY: &str = "country";
pub const ISO3: &str = "iso3";
pub const YEAR: &str = "year";
pub const EXPORTS: &str = "dig_services_exports_usd_millions";
pub const IMPORTS: &str = "dig_services_imports_usd_millions";

/// Output column order of the panel.
pub const PANEL_COLUMNS: [&str; 5] = [COUNTRY, ISO3, YEAR, EXPORTS, IMPORTS];

// === Region-year aggregates ===
pub const REGION: &str = "region";
pub const NUM_MEMBERS: &str = "num_members";
pub const NUM_REPORTING_EXPORTS: &str = "num_reporting_exports";
pub const NUM_REPORTING_IMPORTS: &str = "num_reporting_imports";
pub const EXPORTS_TOTAL: &str = "dig_services_exports_usd_millions_total";
pub const IMPORTS_TOTAL: &str = "dig_services_imports_usd_millions_total";

/// Output column order of the regional aggregates.
pub const AGGREGATE_COLUMNS: [&str; 7] = [
    REGION,
    YEAR,
    NUM_MEMBERS,
    NUM_REPORTING_EXPORTS,
    NUM_REPORTING_IMPORTS,
    EXPORTS_TOTAL,
    IMPORTS_TOTAL,
];
