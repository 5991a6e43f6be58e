use anyhow::{Context, Result};
use tracing::{debug, info_span};

use unctad_cli::pipeline::{
    AggregateSettings, DataPaths, StageReport, run_aggregate_stage, run_all, run_panel_stage,
};
use unctad_model::{AggregateOptions, EmptyTotal, PanelOptions, load_regions};

use crate::cli::{AggregateArgs, PanelArgs, RegionArgs, RegionsArgs, RunArgs};
use crate::summary::print_regions;

pub fn run_panel(args: &PanelArgs) -> Result<Vec<StageReport>> {
    let defaults = DataPaths::in_dir(&args.data.data_dir);
    let input = args.input.clone().unwrap_or(defaults.raw);
    let output = args.output.clone().unwrap_or(defaults.panel);
    let report = run_panel_stage(&input, &output, &PanelOptions::default())?;
    Ok(vec![report])
}

pub fn run_aggregate(args: &AggregateArgs) -> Result<Vec<StageReport>> {
    let defaults = DataPaths::in_dir(&args.data.data_dir);
    let input = args.input.clone().unwrap_or(defaults.panel);
    let output = args.output.clone().unwrap_or(defaults.aggregates);
    let settings = aggregate_settings(&args.regions)?;
    let report = run_aggregate_stage(&input, &output, &settings)?;
    Ok(vec![report])
}

pub fn run_pipeline(args: &RunArgs) -> Result<Vec<StageReport>> {
    let span = info_span!("run", data_dir = %args.data.data_dir.display());
    let _guard = span.enter();
    let defaults = DataPaths::in_dir(&args.data.data_dir);
    let paths = DataPaths {
        raw: args.input.clone().unwrap_or(defaults.raw),
        panel: args.panel.clone().unwrap_or(defaults.panel),
        aggregates: args.output.clone().unwrap_or(defaults.aggregates),
    };
    let settings = aggregate_settings(&args.regions)?;
    run_all(&paths, &PanelOptions::default(), &settings)
}

pub fn run_regions(args: &RegionsArgs) -> Result<()> {
    let (regions, exclusions) =
        load_regions(args.regions_file.as_deref()).context("load region definitions")?;
    print_regions(&regions, &exclusions);
    Ok(())
}

fn aggregate_settings(args: &RegionArgs) -> Result<AggregateSettings> {
    let (regions, exclusions) =
        load_regions(args.regions_file.as_deref()).context("load region definitions")?;
    let empty_total = if args.null_empty_totals {
        EmptyTotal::Null
    } else {
        EmptyTotal::Zero
    };
    let options = AggregateOptions::new()
        .with_include_aggregates(args.include_aggregates)
        .with_empty_total(empty_total);
    debug!(
        regions = regions.len(),
        include_aggregates = options.include_aggregates,
        custom_regions = args.regions_file.is_some(),
        "aggregate settings"
    );
    Ok(AggregateSettings {
        regions,
        exclusions,
        options,
    })
}
