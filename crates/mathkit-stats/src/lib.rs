//! Descriptive statistics over sample sequences.
//!
//! This crate provides a small, flat set of pure functions over `&[f64]`:
//!
//! - **Aggregates**: sum, average, maximum and minimum
//! - **Dispersion**: sample variance (Bessel's correction) and standard deviation
//! - **Formatting**: rendering a labelled sequence for diagnostics
//!
//! Every function borrows its input and returns a fresh value, so all of
//! them can be called concurrently on shared data.
//!
//! # Modules
//!
//! - [`descriptive`]: The individual statistics and their [`InvalidInput`] error
//! - [`summary`]: All statistics of one sequence computed at once
//! - [`format`]: Sequence formatting with two-decimal precision
//!
//! # Examples
//!
//! ## Computing statistics
//!
//! ```
//! use mathkit_stats::descriptive::{average, maximum, standard_deviation, sum};
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(sum(&values), 40.0);
//! assert_eq!(average(&values).unwrap(), 5.0);
//! assert_eq!(maximum(&values).unwrap(), 9.0);
//! assert!((standard_deviation(&values).unwrap() - 2.138_09).abs() < 1e-5);
//! ```
//!
//! ## Handling invalid input
//!
//! ```
//! use mathkit_stats::descriptive::{InvalidInput, Statistic, variance};
//!
//! let err = variance(&[5.0]).unwrap_err();
//! assert!(matches!(err, InvalidInput::TooFewValues { required: 2, actual: 1, .. }));
//! assert_eq!(err.statistic(), Statistic::Variance);
//! ```
//!
//! ## Formatting a sequence
//!
//! ```
//! use mathkit_stats::format::format_sequence;
//!
//! assert_eq!(format_sequence(&[1.0, 2.5], Some("Y")), "Y: [1.00, 2.50]");
//! ```

pub use self::descriptive::InvalidInput;

pub mod descriptive;
pub mod format;
pub mod summary;
