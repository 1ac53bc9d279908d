use super::*;

static SPECS: [CoefficientSpec; 2] = [
    CoefficientSpec::continuous("a", 3.0, 0.1, 5.0),
    CoefficientSpec::integer("n", 3.0, 1.0, 10.0),
];

#[test]
fn defaults_follow_declaration_order() {
    let c = Coefficients::defaults("Rose", &SPECS);
    let pairs: Vec<_> = c.iter().collect();
    assert_eq!(pairs, vec![("a", 3.0), ("n", 3.0)]);
    assert_eq!(c.equation(), "Rose");
}

#[test]
fn integer_coefficients_snap_and_continuous_do_not() {
    let mut c = Coefficients::defaults("Rose", &SPECS);
    assert_eq!(c.set("n", 4.6).unwrap(), 5.0);
    assert_eq!(c.set("a", 1.25).unwrap(), 1.25);
    assert_eq!(c.get("n"), Some(5.0));
    assert_eq!(c.get("a"), Some(1.25));
}

#[test]
fn unknown_coefficient_is_rejected() {
    let mut c = Coefficients::defaults("Rose", &SPECS);
    let err = c.set("b", 1.0).unwrap_err();
    assert!(matches!(err, PolarError::UnknownCoefficient { ref name, .. } if name == "b"));
    assert_eq!(c.get("b"), None);
}

#[test]
fn set_does_not_range_check_but_reports() {
    let mut c = Coefficients::defaults("Rose", &SPECS);
    c.set("a", 9.0).unwrap();
    assert_eq!(c.get("a"), Some(9.0));
    assert_eq!(c.out_of_range(), vec!["a"]);

    c.reset();
    assert!(c.out_of_range().is_empty());
    assert_eq!(c.get("a"), Some(3.0));
}

#[test]
fn value_formatting_depends_on_step() {
    assert_eq!(SPECS[0].format_value(2.0), "2.0");
    assert_eq!(SPECS[0].format_value(0.26), "0.3");
    assert_eq!(SPECS[1].format_value(3.0), "3");
    assert!(SPECS[1].contains(10.0));
    assert!(!SPECS[1].contains(0.5));
}
