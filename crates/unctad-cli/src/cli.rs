//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use unctad_cli::pipeline::DEFAULT_DATA_DIR;

#[derive(Parser)]
#[command(
    name = "unctad-de",
    version,
    about = "UNCTAD digital services trade panel and regional aggregates",
    long_about = "Build a country-year panel of digital services exports and imports \
                  (USD millions) from the UNCTAD Digital Economy extract, then sum it \
                  into ASEAN, EU27 and G7 region-year aggregates."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the country-year panel from the raw extract.
    Panel(PanelArgs),

    /// Sum the panel into region-year aggregates.
    Aggregate(AggregateArgs),

    /// Run the panel stage, then the aggregate stage.
    Run(RunArgs),

    /// Print region membership and the aggregate-geography exclusions.
    Regions(RegionsArgs),
}

#[derive(Args)]
pub struct DataDirArgs {
    /// Directory holding the raw extract and the generated files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,
}

#[derive(Args)]
pub struct PanelArgs {
    /// Raw extract (default: <DATA_DIR>/UNCTAD_DE.csv).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Panel output (default: <DATA_DIR>/unctad_country_year_digital_services_trade_panel.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub data: DataDirArgs,
}

#[derive(Args)]
pub struct AggregateArgs {
    /// Panel input (default: the panel file under <DATA_DIR>).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Aggregates output
    /// (default: <DATA_DIR>/unctad_regional_aggregates_dig_services_trade_by_year.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub data: DataDirArgs,

    #[command(flatten)]
    pub regions: RegionArgs,
}

#[derive(Args)]
pub struct RunArgs {
    /// Raw extract (default: <DATA_DIR>/UNCTAD_DE.csv).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Panel file written by the first stage and read by the second.
    #[arg(long = "panel", value_name = "PATH")]
    pub panel: Option<PathBuf>,

    /// Aggregates output.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub data: DataDirArgs,

    #[command(flatten)]
    pub regions: RegionArgs,
}

#[derive(Args)]
pub struct RegionArgs {
    /// Keep aggregate geographies such as World in the input.
    ///
    /// Diagnostic only: aggregates that fall inside a region are counted on
    /// top of their member countries.
    #[arg(long = "include-aggregates")]
    pub include_aggregates: bool,

    /// TOML file with alternate region definitions and exclusions.
    #[arg(long = "regions", value_name = "FILE")]
    pub regions_file: Option<PathBuf>,

    /// Leave a total empty, instead of 0, when no member reported the measure.
    #[arg(long = "null-empty-totals")]
    pub null_empty_totals: bool,
}

#[derive(Args)]
pub struct RegionsArgs {
    /// TOML file with alternate region definitions and exclusions.
    #[arg(long = "regions", value_name = "FILE")]
    pub regions_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
