use clap::{Parser, Subcommand};
use varstat_core::{
    delegated::StatrsEngine, engine::StatisticsEngine, manual::ManualEngine,
    summary::StatisticsSummary,
};

use self::{compare::CompareArg, summarize::SummarizeArg};

mod compare;
mod summarize;

/// The sample the original worked example uses; applied when no values are
/// given on the command line.
const DEFAULT_SAMPLE: [f64; 10] = [10.0, 20.0, 20.0, 30.0, 30.0, 30.0, 40.0, 50.0, 50.0, 60.0];

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute descriptive statistics with one engine
    Summarize(#[clap(flatten)] SummarizeArg),
    /// Run both engines and check that their outputs agree
    Compare(#[clap(flatten)] CompareArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Compare(CompareArg::default())) {
        Mode::Summarize(arg) => summarize::run(&arg)?,
        Mode::Compare(arg) => compare::run(&arg)?,
    }
    Ok(())
}

fn resolve_sample(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        DEFAULT_SAMPLE.to_vec()
    } else {
        values.to_vec()
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum EngineKind {
    #[default]
    Manual,
    Statrs,
}

fn engine_for(kind: EngineKind) -> &'static dyn StatisticsEngine {
    match kind {
        EngineKind::Manual => &ManualEngine,
        EngineKind::Statrs => &StatrsEngine,
    }
}

/// Renders a summary in the stable display order: mean, median, mode,
/// variance, standard deviation, coefficient of variation, z-scores.
fn render_summary(summary: &StatisticsSummary) -> String {
    let StatisticsSummary {
        mean,
        median,
        mode,
        variance,
        std_dev,
        coefficient_of_variation,
        z_scores,
    } = summary;
    let z_scores = z_scores
        .iter()
        .map(|z| format!("{z:.4}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "mean:                     {mean}\n\
         median:                   {median}\n\
         mode:                     {mode}\n\
         variance:                 {variance}\n\
         standard deviation:       {std_dev}\n\
         coefficient of variation: {coefficient_of_variation} %\n\
         z-scores:                 [{z_scores}]\n"
    )
}
