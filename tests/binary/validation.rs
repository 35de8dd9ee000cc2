use bitmeasure::estimators::EstimatorError;
use bitmeasure::estimators::entropy::Entropy;
use bitmeasure::estimators::mutual_information::MutualInformation;
use ndarray::Array1;

#[test]
fn empty_series_are_rejected() {
    let x = Array1::from(Vec::<i32>::new());
    let y = Array1::from(Vec::<i32>::new());
    let err = MutualInformation::new_binary(x, y).err().unwrap();
    assert_eq!(err, EstimatorError::EmptyInput);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let x = Array1::from(vec![0, 1, 0]);
    let y = Array1::from(vec![0, 1]);
    let err = MutualInformation::new_binary(x, y).err().unwrap();
    assert_eq!(err, EstimatorError::LengthMismatch { x_len: 3, y_len: 2 });
}

#[test]
fn non_binary_values_are_rejected() {
    let x = Array1::from(vec![0, 1, 2, 1]);
    let y = Array1::from(vec![0, 1, 0, 1]);
    let err = MutualInformation::new_binary(x, y).err().unwrap();
    assert_eq!(
        err,
        EstimatorError::NonBinaryValue {
            series: "x",
            index: 2,
            value: 2
        }
    );

    let x = Array1::from(vec![0, 1, 0, 1]);
    let y = Array1::from(vec![0, -1, 0, 1]);
    let err = MutualInformation::new_binary(x, y).err().unwrap();
    assert_eq!(
        err,
        EstimatorError::NonBinaryValue {
            series: "y",
            index: 1,
            value: -1
        }
    );
}

#[test]
fn entropy_rejects_invalid_input() {
    let err = Entropy::new_binary(Array1::from(Vec::<i32>::new()))
        .err()
        .unwrap();
    assert_eq!(err, EstimatorError::EmptyInput);

    let err = Entropy::new_binary(Array1::from(vec![0, 3])).err().unwrap();
    assert_eq!(
        err,
        EstimatorError::NonBinaryValue {
            series: "data",
            index: 1,
            value: 3
        }
    );
}

#[test]
fn errors_render_readable_messages() {
    let msg = EstimatorError::LengthMismatch { x_len: 3, y_len: 2 }.to_string();
    assert!(msg.contains('3') && msg.contains('2'));

    let msg = EstimatorError::NonBinaryValue {
        series: "x",
        index: 4,
        value: 7,
    }
    .to_string();
    assert!(msg.contains("index 4") && msg.contains('7'));
}
