use std::f64::consts::PI;

use super::*;
use crate::curve::point::PolarPoint;

#[test]
fn registry_lists_five_families_in_menu_order() {
    let names: Vec<_> = equations().iter().map(|e| e.name).collect();
    assert_eq!(names, ["Circle", "Cardioid", "Rose", "Spiral", "Limacon"]);
}

#[test]
fn lookup_is_case_insensitive_and_accepts_cedilla() {
    assert_eq!(get_equation("rose").unwrap().kind, EquationKind::Rose);
    assert_eq!(get_equation(" CIRCLE ").unwrap().kind, EquationKind::Circle);
    assert_eq!(get_equation("Limaçon").unwrap().kind, EquationKind::Limacon);
    assert!(matches!(
        get_equation("heart"),
        Err(PolarError::UnknownEquation(name)) if name == "heart"
    ));
}

#[test]
fn defaults_bind_to_expected_curves() {
    let rose = get_equation("Rose").unwrap();
    let bound = rose.bind(&rose.defaults()).unwrap();
    assert_eq!(bound, BoundEquation::Rose { a: 3.0, n: 3.0 });

    let spiral = get_equation("Spiral").unwrap();
    assert_eq!(
        spiral.bind(&spiral.defaults()).unwrap(),
        BoundEquation::Spiral { a: 0.5 }
    );
}

#[test]
fn circle_is_constant() {
    let circle = get_equation("Circle").unwrap();
    let mut c = circle.defaults();
    c.set("a", 2.0).unwrap();
    let f = circle.bind(&c).unwrap();
    for theta in [0.0, 1.0, PI, 5.5] {
        assert_eq!(f.radius(theta), 2.0);
    }
}

#[test]
fn rose_at_third_turn_reflects() {
    let f = BoundEquation::Rose { a: 3.0, n: 3.0 };
    let r = f.radius(PI / 3.0);
    assert!((r + 3.0).abs() < 1e-9);
    let p = PolarPoint::normalized(PI / 3.0, r);
    assert!((p.theta - 4.0 * PI / 3.0).abs() < 1e-9);
    assert!((p.r - 3.0).abs() < 1e-9);
}

#[test]
fn limacon_at_pi_stays_positive() {
    let f = BoundEquation::Limacon { a: 2.0, b: 1.0 };
    let r = f.radius(PI);
    assert!((r - 1.0).abs() < 1e-12);
    let p = PolarPoint::normalized(PI, r);
    assert_eq!(p.theta, PI);
}

#[test]
fn cardioid_and_spiral_formulas() {
    let cardioid = BoundEquation::Cardioid { a: 2.0 };
    assert!((cardioid.radius(0.0) - 4.0).abs() < 1e-12);
    assert!(cardioid.radius(PI).abs() < 1e-12);

    let spiral = BoundEquation::Spiral { a: 0.5 };
    assert!((spiral.radius(2.0 * PI) - PI).abs() < 1e-12);
}

#[test]
fn bind_rejects_foreign_coefficients() {
    let rose = get_equation("Rose").unwrap();
    let circle = get_equation("Circle").unwrap();
    let err = rose.bind(&circle.defaults()).unwrap_err();
    assert!(matches!(err, PolarError::Validation(_)));
}

#[test]
fn display_fills_placeholders() {
    let rose = get_equation("Rose").unwrap();
    let mut c = rose.defaults();
    assert_eq!(rose.display(&c), "r = 3.0·cos(3θ)");
    c.set("n", 5.2).unwrap();
    c.set("a", 1.5).unwrap();
    assert_eq!(rose.display(&c), "r = 1.5·cos(5θ)");

    let limacon = get_equation("Limacon").unwrap();
    assert_eq!(limacon.display(&limacon.defaults()), "r = 2.0 + 1.0·cos(θ)");
}

#[test]
fn symbolic_uses_coefficient_names() {
    assert_eq!(get_equation("Rose").unwrap().symbolic(), "r = a·cos(nθ)");
    assert_eq!(
        get_equation("Cardioid").unwrap().symbolic(),
        "r = a·(1 + cos(θ))"
    );
}

#[test]
fn template_keeps_unknown_and_unterminated_placeholders() {
    assert_eq!(
        render_template("x = {q} + {a", |n| (n == "a").then(|| "1".to_string())),
        "x = {q} + {a"
    );
}
