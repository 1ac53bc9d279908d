use crate::foundation::error::{PolarError, PolarResult};

/// Step used by continuous coefficients.
pub const DEFAULT_STEP: f64 = 0.1;

/// Metadata of one user-adjustable coefficient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CoefficientSpec {
    /// Placeholder name used in the display template.
    pub name: &'static str,
    /// Value bound when the equation is selected.
    pub default: f64,
    /// Smallest recommended value.
    pub min: f64,
    /// Largest recommended value.
    pub max: f64,
    /// Slider increment; `1.0` marks an integer coefficient.
    pub step: f64,
}

impl CoefficientSpec {
    /// Continuous coefficient with [`DEFAULT_STEP`].
    pub const fn continuous(name: &'static str, default: f64, min: f64, max: f64) -> Self {
        Self {
            name,
            default,
            min,
            max,
            step: DEFAULT_STEP,
        }
    }

    /// Integer coefficient (step 1).
    pub const fn integer(name: &'static str, default: f64, min: f64, max: f64) -> Self {
        Self {
            name,
            default,
            min,
            max,
            step: 1.0,
        }
    }

    /// Whether values of this coefficient are whole numbers.
    pub fn is_integer(&self) -> bool {
        self.step == 1.0
    }

    /// Round integer coefficients to the nearest whole number.
    pub fn snap(&self, value: f64) -> f64 {
        if self.is_integer() {
            value.round()
        } else {
            value
        }
    }

    /// Whether `value` lies in `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Format a value the way the equation title shows it.
    pub fn format_value(&self, value: f64) -> String {
        if self.is_integer() {
            format!("{}", value.round() as i64)
        } else {
            format!("{value:.1}")
        }
    }
}

/// Current coefficient values for one equation family.
///
/// Owned by the caller and read each time a plot or animation is (re)computed.
#[derive(Clone, Debug, PartialEq)]
pub struct Coefficients {
    equation: &'static str,
    specs: &'static [CoefficientSpec],
    values: Vec<f64>,
}

impl Coefficients {
    pub(crate) fn defaults(equation: &'static str, specs: &'static [CoefficientSpec]) -> Self {
        Self {
            equation,
            specs,
            values: specs.iter().map(|s| s.default).collect(),
        }
    }

    /// Name of the equation family these values belong to.
    pub fn equation(&self) -> &'static str {
        self.equation
    }

    /// Coefficient metadata, in declaration order.
    pub fn specs(&self) -> &'static [CoefficientSpec] {
        self.specs
    }

    /// Metadata for `name`, if the family declares it.
    pub fn spec(&self, name: &str) -> Option<&'static CoefficientSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        let i = self.specs.iter().position(|s| s.name == name)?;
        self.values.get(i).copied()
    }

    /// Bind `name` to `value`, snapping integer coefficients. Range is not checked.
    pub fn set(&mut self, name: &str, value: f64) -> PolarResult<f64> {
        let Some(i) = self.specs.iter().position(|s| s.name == name) else {
            return Err(PolarError::UnknownCoefficient {
                equation: self.equation,
                name: name.to_string(),
            });
        };
        let snapped = self.specs[i].snap(value);
        self.values[i] = snapped;
        Ok(snapped)
    }

    /// Restore every coefficient to its default.
    pub fn reset(&mut self) {
        for (v, s) in self.values.iter_mut().zip(self.specs) {
            *v = s.default;
        }
    }

    /// `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.specs
            .iter()
            .zip(self.values.iter())
            .map(|(s, v)| (s.name, *v))
    }

    /// Names of coefficients whose value lies outside the declared range.
    pub fn out_of_range(&self) -> Vec<&'static str> {
        self.specs
            .iter()
            .zip(self.values.iter())
            .filter(|(s, v)| !s.contains(**v))
            .map(|(s, _)| s.name)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/equation/coeffs.rs"]
mod tests;
