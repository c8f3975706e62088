use oop_exercises::debugging::{calculate_average, AverageError, Sample};

#[test]
fn test_average_of_whole_numbers() {
    let data: Vec<Sample> = [1, 2, 3, 4, 5].into_iter().map(Sample::from).collect();
    assert_eq!(calculate_average(&data), Ok(3.0));
}

#[test]
fn test_empty_input_fails_with_division_by_zero() {
    assert_eq!(calculate_average(&[]), Err(AverageError::DivisionByZero));
}

#[test]
fn test_text_input_fails_with_type_mismatch() {
    let data: Vec<Sample> = vec![10.into(), 20.into(), "30".into(), 40.into()];
    let err = calculate_average(&data).unwrap_err();
    assert_eq!(
        err,
        AverageError::TypeMismatch {
            index: 2,
            value: "30".to_string(),
        }
    );
    assert_eq!(err.to_string(), "cannot add text value \"30\" at index 2");
}

#[test]
fn test_average_of_fractional_numbers() {
    let data: Vec<Sample> = vec![1.5.into(), 2.5.into()];
    assert_eq!(calculate_average(&data), Ok(2.0));
}
