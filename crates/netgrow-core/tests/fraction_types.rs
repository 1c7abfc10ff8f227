use netgrow_core::{fraction_to_f64, Fraction, NodeLabel};

#[test]
fn fractions_are_reduced_and_convertible() {
    let value = Fraction::new(6, 4);
    assert_eq!(*value.numer(), 3);
    assert_eq!(*value.denom(), 2);
    assert!((fraction_to_f64(&value) - 1.5).abs() < f64::EPSILON);
}

#[test]
fn labels_advance_from_one() {
    let first = NodeLabel::FIRST;
    assert_eq!(first.as_raw(), 1);
    assert_eq!(first.next().as_raw(), 2);
    assert!(first < first.next());
    assert_eq!(first.next().to_string(), "2");
}
