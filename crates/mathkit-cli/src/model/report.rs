use std::io::{self, Write};

use chrono::{DateTime, Utc};
use mathkit_stats::{InvalidInput, descriptive::Statistic, format::display_sequence};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub label: String,
    pub generated_at: DateTime<Utc>,
    pub count: usize,
    pub values: Vec<f64>,
    pub statistics: Vec<StatisticEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticEntry {
    pub name: String,
    pub value: f64,
}

impl Report {
    /// Computes `statistics` over `values` in the given order.
    ///
    /// Stops at the first statistic whose precondition `values` violates.
    pub fn compute(
        label: &str,
        values: &[f64],
        statistics: &[Statistic],
    ) -> Result<Self, InvalidInput> {
        let statistics = statistics
            .iter()
            .map(|&statistic| -> Result<StatisticEntry, InvalidInput> {
                let value = statistic.compute(values)?;
                tracing::debug!(%statistic, value, "computed statistic");
                Ok(StatisticEntry {
                    name: statistic.to_string(),
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            label: label.to_owned(),
            generated_at: Utc::now(),
            count: values.len(),
            values: values.to_vec(),
            statistics,
        })
    }

    /// Writes the human readable form of the report.
    ///
    /// The value list keeps two decimals; statistics use `precision`.
    pub fn write_text<W>(&self, writer: &mut W, precision: usize) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        writeln!(writer, "{}", display_sequence(&self.values, &self.label))?;
        writeln!(writer)?;
        writeln!(writer, "Statistics ({} values):", self.count)?;
        let width = self
            .statistics
            .iter()
            .map(|entry| entry.name.len())
            .max()
            .unwrap_or(0)
            + 1;
        for entry in &self.statistics {
            let name = format!("{}:", entry.name);
            writeln!(writer, "  {name:<width$} {:.precision$}", entry.value)?;
        }
        Ok(())
    }
}
