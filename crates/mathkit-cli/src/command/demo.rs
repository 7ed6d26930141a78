use super::{ReportArg, write_report};

/// The sample dataset described when no data is given.
pub(crate) const DEMO_VALUES: [f64; 10] = [1.5, 2.3, 3.7, 4.1, 5.9, 2.8, 6.2, 1.9, 4.5, 3.3];

const DEMO_LABEL: &str = "Dataset";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DemoArg {
    /// Label printed in front of the dataset
    #[arg(long, default_value = DEMO_LABEL)]
    pub(super) label: String,
    #[command(flatten)]
    pub(super) report: ReportArg,
}

impl Default for DemoArg {
    fn default() -> Self {
        Self {
            label: DEMO_LABEL.to_owned(),
            report: ReportArg::default(),
        }
    }
}

pub(crate) fn run(arg: &DemoArg) -> anyhow::Result<()> {
    let DemoArg { label, report } = arg;
    write_report(label, &DEMO_VALUES, report)
}

#[cfg(test)]
mod tests {
    use mathkit_stats::summary::Summary;

    use super::*;

    #[test]
    fn test_demo_dataset_summary() {
        let summary = Summary::new(&DEMO_VALUES).unwrap();
        assert_eq!(summary.count, 10);
        assert!((summary.sum - 36.2).abs() < 1e-9);
        assert!((summary.average - 3.62).abs() < 1e-9);
        assert_eq!(summary.maximum, 6.2);
        assert_eq!(summary.minimum, 1.5);
        assert_eq!(format!("{:.3}", summary.variance), "2.537");
        assert_eq!(format!("{:.3}", summary.standard_deviation), "1.593");
    }
}
