/// Identifies one of the descriptive statistics provided by this crate.
///
/// The variants are listed in [`Statistic::ALL`] in the order a report
/// usually presents them.
///
/// # Examples
///
/// ```
/// use mathkit_stats::descriptive::Statistic;
///
/// let values = [2.0, 4.0, 6.0];
/// assert_eq!(Statistic::Average.compute(&values).unwrap(), 4.0);
/// assert_eq!("variance".parse::<Statistic>().unwrap(), Statistic::Variance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::FromStr)]
pub enum Statistic {
    #[display("sum")]
    Sum,
    #[display("average")]
    Average,
    #[display("maximum")]
    Maximum,
    #[display("minimum")]
    Minimum,
    #[display("variance")]
    Variance,
    #[display("standard deviation")]
    StandardDeviation,
}

impl Statistic {
    pub const ALL: [Self; 6] = [
        Self::Sum,
        Self::Average,
        Self::Maximum,
        Self::Minimum,
        Self::Variance,
        Self::StandardDeviation,
    ];

    /// Returns the minimum number of values this statistic is defined for.
    #[must_use]
    pub const fn min_len(self) -> usize {
        match self {
            Self::Sum => 0,
            Self::Average | Self::Maximum | Self::Minimum => 1,
            Self::Variance | Self::StandardDeviation => 2,
        }
    }

    /// Computes this statistic over `values`.
    ///
    /// Dispatches to the free function of the same name in this module.
    pub fn compute(self, values: &[f64]) -> Result<f64, InvalidInput> {
        match self {
            Self::Sum => Ok(sum(values)),
            Self::Average => average(values),
            Self::Maximum => maximum(values),
            Self::Minimum => minimum(values),
            Self::Variance => variance(values),
            Self::StandardDeviation => standard_deviation(values),
        }
    }
}

/// A sequence did not hold enough values for the requested statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidInput {
    #[display("cannot compute {statistic} of an empty sequence")]
    EmptySequence { statistic: Statistic },
    #[display("need at least {required} values to compute {statistic}, got {actual}")]
    TooFewValues {
        statistic: Statistic,
        required: usize,
        actual: usize,
    },
}

impl InvalidInput {
    /// Returns the statistic whose precondition was violated.
    #[must_use]
    pub const fn statistic(&self) -> Statistic {
        match self {
            Self::EmptySequence { statistic } | Self::TooFewValues { statistic, .. } => *statistic,
        }
    }
}

fn require_len(values: &[f64], statistic: Statistic) -> Result<(), InvalidInput> {
    let required = statistic.min_len();
    match values.len() {
        actual if actual >= required => Ok(()),
        0 => Err(InvalidInput::EmptySequence { statistic }),
        actual => Err(InvalidInput::TooFewValues {
            statistic,
            required,
            actual,
        }),
    }
}

/// Returns the arithmetic total of `values`.
///
/// The empty sequence sums to `0.0`.
///
/// # Examples
///
/// ```
/// # use mathkit_stats::descriptive::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0, 5.0]), 15.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    // `Iterator::sum` starts from -0.0 for floats
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// Returns the arithmetic mean of `values`.
///
/// # Examples
///
/// ```
/// # use mathkit_stats::descriptive::average;
/// assert_eq!(average(&[2.0, 4.0, 6.0]).unwrap(), 4.0);
/// assert!(average(&[]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> Result<f64, InvalidInput> {
    require_len(values, Statistic::Average)?;
    Ok(sum(values) / values.len() as f64)
}

/// Returns the greatest value in `values`.
///
/// Values are compared with [`f64::total_cmp`].
pub fn maximum(values: &[f64]) -> Result<f64, InvalidInput> {
    values
        .iter()
        .copied()
        .max_by(f64::total_cmp)
        .ok_or(InvalidInput::EmptySequence {
            statistic: Statistic::Maximum,
        })
}

/// Returns the least value in `values`.
///
/// Values are compared with [`f64::total_cmp`].
pub fn minimum(values: &[f64]) -> Result<f64, InvalidInput> {
    values
        .iter()
        .copied()
        .min_by(f64::total_cmp)
        .ok_or(InvalidInput::EmptySequence {
            statistic: Statistic::Minimum,
        })
}

/// Returns the sample variance of `values`.
///
/// The sum of squared deviations from the mean is divided by `n - 1`
/// (Bessel's correction), so at least two values are required.
///
/// # Examples
///
/// ```
/// # use mathkit_stats::descriptive::variance;
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&values).unwrap(), 32.0 / 7.0);
/// assert!(variance(&[5.0]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn variance(values: &[f64]) -> Result<f64, InvalidInput> {
    require_len(values, Statistic::Variance)?;
    let mean = average(values)?;
    let sum_squared_diff = values
        .iter()
        .map(|v| (v - mean).powi(2))
        .fold(0.0, |acc, d| acc + d);
    Ok(sum_squared_diff / (values.len() - 1) as f64)
}

/// Returns the sample standard deviation of `values`.
///
/// This is the square root of [`variance`] and has the same precondition.
pub fn standard_deviation(values: &[f64]) -> Result<f64, InvalidInput> {
    require_len(values, Statistic::StandardDeviation)?;
    Ok(variance(values)?.sqrt())
}
