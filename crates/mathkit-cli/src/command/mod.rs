use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use mathkit_stats::descriptive::Statistic;

use crate::{model::report::Report, util::Output};

use self::{demo::DemoArg, describe::DescribeArg};

mod demo;
mod describe;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Describe the built-in sample dataset
    Demo(#[clap(flatten)] DemoArg),
    /// Describe values given on the command line or in a JSON file
    Describe(#[clap(flatten)] DescribeArg),
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Decimal places used for statistics in text output
    #[arg(long, default_value_t = 3)]
    precision: usize,
    /// Statistics to compute, in order (defaults to all)
    #[arg(long, value_delimiter = ',')]
    only: Vec<Statistic>,
    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            precision: 3,
            only: vec![],
            format: OutputFormat::Text,
            output: None,
        }
    }
}

impl ReportArg {
    fn statistics(&self) -> &[Statistic] {
        if self.only.is_empty() {
            &Statistic::ALL
        } else {
            &self.only
        }
    }
}

/// Computes the requested statistics and writes the report.
fn write_report(label: &str, values: &[f64], arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg {
        precision,
        only: _,
        format,
        output,
    } = arg;

    tracing::info!(label, count = values.len(), "computing statistics");
    let report = Report::compute(label, values, arg.statistics())
        .inspect_err(|err| tracing::error!(statistic = %err.statistic(), "{err}"))
        .with_context(|| format!("Failed to describe {label}"))?;

    let mut output = Output::from_output_path(output.clone())?;
    match format {
        OutputFormat::Text => output.write_report_text(&report, *precision)?,
        OutputFormat::Json => output.write_json(&report)?,
    }
    tracing::info!(output = %output.display_path(), "report written");
    Ok(())
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Demo(DemoArg::default())) {
        Mode::Demo(arg) => demo::run(&arg)?,
        Mode::Describe(arg) => describe::run(&arg)?,
    }
    Ok(())
}
