use std::path::PathBuf;

use mathkit_stats::format::DEFAULT_LABEL;

use super::{ReportArg, write_report};
use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    /// Comma separated values to describe
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub(super) values: Vec<f64>,
    /// JSON file holding an array of numbers, read before `--values`
    #[arg(long)]
    pub(super) input: Option<PathBuf>,
    /// Label printed in front of the values
    #[arg(long, default_value = DEFAULT_LABEL)]
    pub(super) label: String,
    #[command(flatten)]
    pub(super) report: ReportArg,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let DescribeArg {
        values,
        input,
        label,
        report,
    } = arg;

    let mut all_values = match input {
        Some(path) => util::read_values_file(path)?,
        None => vec![],
    };
    all_values.extend_from_slice(values);

    write_report(label, &all_values, report)
}
