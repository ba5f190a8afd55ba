use std::path::PathBuf;

use anyhow::Context;
use varstat_core::summary::StatisticsSummary;

use crate::{
    command::{EngineKind, engine_for, render_summary, resolve_sample},
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummarizeArg {
    /// Sample values; the built-in reference sample is used when omitted
    values: Vec<f64>,
    /// Which computation engine to use
    #[arg(long, default_value = "manual")]
    engine: EngineKind,
    /// Emit the summary as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let SummarizeArg {
        values,
        engine,
        json,
        output,
    } = arg;
    let sample = resolve_sample(values);
    let summary = StatisticsSummary::compute(engine_for(*engine), &sample)
        .with_context(|| format!("cannot summarize a sample of {} value(s)", sample.len()))?;

    let mut output = Output::from_output_path(output.clone())?;
    if *json {
        output.write_json(&summary)?;
    } else {
        output.write_text(&render_summary(&summary))?;
    }
    Ok(())
}
