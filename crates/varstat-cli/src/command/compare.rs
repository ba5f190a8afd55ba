use anyhow::Context;
use varstat_core::{
    delegated::StatrsEngine, manual::ManualEngine, summary::StatisticsSummary,
};

use crate::{
    command::{render_summary, resolve_sample},
    util::Output,
};

const DEFAULT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CompareArg {
    /// Sample values; the built-in reference sample is used when omitted
    values: Vec<f64>,
    /// Maximum relative divergence tolerated between the two engines
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
}

impl Default for CompareArg {
    fn default() -> Self {
        Self {
            values: vec![],
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

pub(crate) fn run(arg: &CompareArg) -> anyhow::Result<()> {
    let CompareArg { values, tolerance } = arg;
    let sample = resolve_sample(values);
    let manual = StatisticsSummary::compute(&ManualEngine, &sample)
        .context("manual engine failed on the sample")?;
    let delegated = StatisticsSummary::compute(&StatrsEngine, &sample)
        .context("statrs engine failed on the sample")?;

    let mut output = Output::stdout();
    output.write_text(&format!("---- manual ----\n{}", render_summary(&manual)))?;
    output.write_text(&format!("---- statrs ----\n{}", render_summary(&delegated)))?;

    anyhow::ensure!(
        manual.agrees_with(&delegated, *tolerance),
        "engines disagree beyond relative tolerance {tolerance}"
    );
    output.write_text(&format!(
        "engines agree within relative tolerance {tolerance}\n"
    ))?;
    Ok(())
}
