//! Debugging practice: averaging a sequence that may contain bad data.
//!
//! The original exercise ships two latent bugs for the learner to trigger,
//! a type error when a non-numeric element is summed and a division by zero
//! when the input is empty. Both surface here as typed errors so they fail
//! visibly without crashing the process.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AverageError {
    #[error("cannot add text value {value:?} at index {index}")]
    TypeMismatch { index: usize, value: String },
    #[error("division by zero: input sequence is empty")]
    DivisionByZero,
}

/// One element of an averaging input.
///
/// The exercise feeds the function mixed data, so an element is either a
/// number or a stray piece of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Number(f64),
    Text(String),
}

impl From<f64> for Sample {
    fn from(value: f64) -> Self {
        Sample::Number(value)
    }
}

impl From<i32> for Sample {
    fn from(value: i32) -> Self {
        Sample::Number(f64::from(value))
    }
}

impl From<&str> for Sample {
    fn from(value: &str) -> Self {
        Sample::Text(value.to_string())
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sample::Number(n) => write!(f, "{}", n),
            Sample::Text(t) => write!(f, "{:?}", t),
        }
    }
}

/// Render a sample sequence the way the exercise prints its input lists.
pub fn format_samples(samples: &[Sample]) -> String {
    let parts: Vec<String> = samples.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Calculate the average of a sequence of samples.
///
/// Sums in input order, so a text element fails during summation before the
/// empty-input check has a chance to run.
pub fn calculate_average(numbers: &[Sample]) -> Result<f64, AverageError> {
    let mut total: f64 = 0.0;
    for (index, num) in numbers.iter().enumerate() {
        match num {
            Sample::Number(value) => total += value,
            Sample::Text(value) => {
                return Err(AverageError::TypeMismatch {
                    index,
                    value: value.clone(),
                })
            }
        }
    }
    if numbers.is_empty() {
        return Err(AverageError::DivisionByZero);
    }
    Ok(total / numbers.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_one_to_five() {
        let data: Vec<Sample> = [1, 2, 3, 4, 5].into_iter().map(Sample::from).collect();
        assert_eq!(calculate_average(&data), Ok(3.0));
    }

    #[test]
    fn empty_input_is_a_division_by_zero() {
        assert_eq!(calculate_average(&[]), Err(AverageError::DivisionByZero));
    }

    #[test]
    fn text_element_is_a_type_mismatch() {
        let data = vec![10.into(), 20.into(), "30".into(), 40.into()];
        assert_eq!(
            calculate_average(&data),
            Err(AverageError::TypeMismatch {
                index: 2,
                value: "30".to_string(),
            })
        );
    }

    #[test]
    fn text_beats_the_empty_check_in_error_order() {
        // A lone text element reports the type error, not division by zero
        let data = vec![Sample::from("oops")];
        assert!(matches!(
            calculate_average(&data),
            Err(AverageError::TypeMismatch { index: 0, .. })
        ));
    }
}
