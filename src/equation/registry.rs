use crate::curve::sampler::PolarCurve;
use crate::equation::coeffs::{CoefficientSpec, Coefficients};
use crate::foundation::error::{PolarError, PolarResult};

/// Built-in equation families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationKind {
    /// `r = a`
    Circle,
    /// `r = a·(1 + cos θ)`
    Cardioid,
    /// `r = a·cos(nθ)`
    Rose,
    /// `r = a·θ`
    Spiral,
    /// `r = a + b·cos θ`
    Limacon,
}

/// An equation family: defining function, display template and coefficient metadata.
#[derive(Debug, PartialEq, serde::Serialize)]
pub struct Equation {
    /// Registry name.
    pub name: &'static str,
    /// Family tag.
    pub kind: EquationKind,
    /// Display string with `{name}` coefficient placeholders.
    pub template: &'static str,
    /// Coefficients in display order.
    pub coefficients: &'static [CoefficientSpec],
}

/// An equation with its coefficient values resolved, ready for per-sample evaluation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundEquation {
    /// Circle of radius `a`.
    Circle {
        /// Radius.
        a: f64,
    },
    /// Cardioid scaled by `a`.
    Cardioid {
        /// Scale.
        a: f64,
    },
    /// Rose with amplitude `a` and frequency `n`.
    Rose {
        /// Petal length.
        a: f64,
        /// Angular frequency.
        n: f64,
    },
    /// Archimedean spiral.
    Spiral {
        /// Growth per radian.
        a: f64,
    },
    /// Limaçon.
    Limacon {
        /// Offset.
        a: f64,
        /// Cosine amplitude.
        b: f64,
    },
}

impl PolarCurve for BoundEquation {
    fn radius(&self, theta: f64) -> f64 {
        match *self {
            Self::Circle { a } => a,
            Self::Cardioid { a } => a * (1.0 + theta.cos()),
            Self::Rose { a, n } => a * (n * theta).cos(),
            Self::Spiral { a } => a * theta,
            Self::Limacon { a, b } => a + b * theta.cos(),
        }
    }
}

static CIRCLE_COEFFS: [CoefficientSpec; 1] = [CoefficientSpec::continuous("a", 2.0, 0.1, 5.0)];
static CARDIOID_COEFFS: [CoefficientSpec; 1] = [CoefficientSpec::continuous("a", 2.0, 0.1, 5.0)];
static ROSE_COEFFS: [CoefficientSpec; 2] = [
    CoefficientSpec::continuous("a", 3.0, 0.1, 5.0),
    CoefficientSpec::integer("n", 3.0, 1.0, 10.0),
];
static SPIRAL_COEFFS: [CoefficientSpec; 1] = [CoefficientSpec::continuous("a", 0.5, 0.1, 2.0)];
static LIMACON_COEFFS: [CoefficientSpec; 2] = [
    CoefficientSpec::continuous("a", 2.0, 0.1, 5.0),
    CoefficientSpec::continuous("b", 1.0, 0.1, 5.0),
];

static EQUATIONS: [Equation; 5] = [
    Equation {
        name: "Circle",
        kind: EquationKind::Circle,
        template: "r = {a}",
        coefficients: &CIRCLE_COEFFS,
    },
    Equation {
        name: "Cardioid",
        kind: EquationKind::Cardioid,
        template: "r = {a}·(1 + cos(θ))",
        coefficients: &CARDIOID_COEFFS,
    },
    Equation {
        name: "Rose",
        kind: EquationKind::Rose,
        template: "r = {a}·cos({n}θ)",
        coefficients: &ROSE_COEFFS,
    },
    Equation {
        name: "Spiral",
        kind: EquationKind::Spiral,
        template: "r = {a}·θ",
        coefficients: &SPIRAL_COEFFS,
    },
    Equation {
        name: "Limacon",
        kind: EquationKind::Limacon,
        template: "r = {a} + {b}·cos(θ)",
        coefficients: &LIMACON_COEFFS,
    },
];

/// All registered equation families, in menu order.
pub fn equations() -> &'static [Equation] {
    &EQUATIONS
}

/// Look up an equation family by name (case-insensitive; `Limaçon` is accepted).
pub fn get_equation(name: &str) -> PolarResult<&'static Equation> {
    let wanted = name.trim();
    let wanted = if wanted.to_lowercase() == "limaçon" {
        "limacon"
    } else {
        wanted
    };
    EQUATIONS
        .iter()
        .find(|eq| eq.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| PolarError::UnknownEquation(name.to_string()))
}

impl Equation {
    /// Fresh coefficient binding holding every default.
    pub fn defaults(&'static self) -> Coefficients {
        Coefficients::defaults(self.name, self.coefficients)
    }

    /// Resolve coefficient values into an evaluable curve.
    pub fn bind(&self, coeffs: &Coefficients) -> PolarResult<BoundEquation> {
        if coeffs.equation() != self.name {
            return Err(PolarError::validation(format!(
                "coefficients for '{}' cannot bind equation '{}'",
                coeffs.equation(),
                self.name
            )));
        }
        let value = |name: &str| {
            coeffs.get(name).ok_or_else(|| {
                PolarError::validation(format!("equation '{}' missing coefficient '{name}'", self.name))
            })
        };
        Ok(match self.kind {
            EquationKind::Circle => BoundEquation::Circle { a: value("a")? },
            EquationKind::Cardioid => BoundEquation::Cardioid { a: value("a")? },
            EquationKind::Rose => BoundEquation::Rose {
                a: value("a")?,
                n: value("n")?,
            },
            EquationKind::Spiral => BoundEquation::Spiral { a: value("a")? },
            EquationKind::Limacon => BoundEquation::Limacon {
                a: value("a")?,
                b: value("b")?,
            },
        })
    }

    /// Template with placeholders replaced by the bound values.
    pub fn display(&self, coeffs: &Coefficients) -> String {
        render_template(self.template, |name| {
            let spec = self.coefficients.iter().find(|s| s.name == name)?;
            let v = coeffs.get(name).unwrap_or(spec.default);
            Some(spec.format_value(v))
        })
    }

    /// Template with placeholders replaced by the coefficient names, e.g. `r = a·cos(nθ)`.
    pub fn symbolic(&self) -> String {
        render_template(self.template, |name| Some(name.to_string()))
    }
}

fn render_template(template: &str, mut fill: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match fill(name) {
            Some(text) => out.push_str(&text),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/equation/registry.rs"]
mod tests;
