/// Convenience result type used across polarvis.
pub type PolarResult<T> = Result<T, PolarError>;

/// Top-level error taxonomy used by the sampler, animator and renderer.
#[derive(thiserror::Error, Debug)]
pub enum PolarError {
    /// Invalid caller-provided options or coefficient bindings.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation operation was invoked from a state that does not allow it.
    #[error("invalid transition: cannot {op} while {state}")]
    Transition {
        /// Operation that was attempted (`start`, `tick`, `pause`, `resume`).
        op: &'static str,
        /// Playback state at the time of the call.
        state: &'static str,
    },

    /// No equation family is registered under the requested name.
    #[error("unknown equation '{0}'")]
    UnknownEquation(String),

    /// The equation family has no coefficient with the requested name.
    #[error("equation '{equation}' has no coefficient '{name}'")]
    UnknownCoefficient {
        /// Equation family name.
        equation: &'static str,
        /// Requested coefficient name.
        name: String,
    },

    /// Errors while rasterizing a scene.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PolarError {
    /// Build a [`PolarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PolarError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub(crate) fn transition(op: &'static str, state: &'static str) -> Self {
        Self::Transition { op, state }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
