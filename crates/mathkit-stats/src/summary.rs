use crate::descriptive::{self, InvalidInput, Statistic};

/// All descriptive statistics of a sample sequence.
///
/// Every field is computed by the function of the same name in
/// [`descriptive`], so a `Summary` never disagrees with calling them one
/// by one.
///
/// # Examples
///
/// ```
/// use mathkit_stats::summary::Summary;
///
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let summary = Summary::new(&values).unwrap();
/// assert_eq!(summary.count, 8);
/// assert_eq!(summary.average, 5.0);
/// assert_eq!(summary.variance, 32.0 / 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// The number of values.
    pub count: usize,
    /// The arithmetic total.
    pub sum: f64,
    /// The arithmetic mean.
    pub average: f64,
    /// The greatest value.
    pub maximum: f64,
    /// The least value.
    pub minimum: f64,
    /// The sample variance (divided by `count - 1`).
    pub variance: f64,
    /// The sample standard deviation.
    pub standard_deviation: f64,
}

impl Summary {
    /// Computes every statistic over `values`.
    ///
    /// # Errors
    ///
    /// Fails like [`descriptive::variance`] when fewer than two values are given.
    pub fn new(values: &[f64]) -> Result<Self, InvalidInput> {
        let variance = descriptive::variance(values)?;
        Ok(Self {
            count: values.len(),
            sum: descriptive::sum(values),
            average: descriptive::average(values)?,
            maximum: descriptive::maximum(values)?,
            minimum: descriptive::minimum(values)?,
            variance,
            standard_deviation: variance.sqrt(),
        })
    }

    /// Returns the value of `statistic`.
    #[must_use]
    pub fn get(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Sum => self.sum,
            Statistic::Average => self.average,
            Statistic::Maximum => self.maximum,
            Statistic::Minimum => self.minimum,
            Statistic::Variance => self.variance,
            Statistic::StandardDeviation => self.standard_deviation,
        }
    }
}
