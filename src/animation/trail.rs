use std::collections::VecDeque;

use crate::foundation::core::FrameIndex;

/// One faint persistent ray is kept for every this many frames.
pub const TRAIL_EVERY: u64 = 10;

/// Environment variable overriding [`TrailPolicy`] (`bounded` or `unbounded`).
pub const TRAIL_POLICY_ENV: &str = "POLARVIS_TRAIL_POLICY";

/// Retention policy for trail rays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailPolicy {
    /// Keep at most one rotation worth of rays; older rays are evicted first.
    #[default]
    Bounded,
    /// Keep every recorded ray until the session stops.
    Unbounded,
}

impl TrailPolicy {
    /// Parse `bounded` / `unbounded` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bounded" => Some(Self::Bounded),
            "unbounded" => Some(Self::Unbounded),
            _ => None,
        }
    }

    /// Policy from [`TRAIL_POLICY_ENV`], falling back to [`TrailPolicy::Bounded`].
    pub fn from_env() -> Self {
        let raw = std::env::var(TRAIL_POLICY_ENV).ok();
        match raw.as_deref().map(Self::parse) {
            Some(Some(policy)) => policy,
            Some(None) => {
                tracing::warn!(
                    value = raw.as_deref().unwrap_or_default(),
                    "ignoring unrecognized {TRAIL_POLICY_ENV}"
                );
                Self::default()
            }
            None => Self::default(),
        }
    }
}

/// Angles of the faint rays left behind by the rotating ray.
#[derive(Clone, Debug, PartialEq)]
pub struct RayTrail {
    angles: VecDeque<f64>,
    capacity: Option<usize>,
}

impl RayTrail {
    /// Empty trail for a rotation of `frames` frames.
    pub fn new(policy: TrailPolicy, frames: u64) -> Self {
        let capacity = match policy {
            TrailPolicy::Bounded => {
                Some(usize::try_from(frames.div_ceil(TRAIL_EVERY).max(1)).unwrap_or(usize::MAX))
            }
            TrailPolicy::Unbounded => None,
        };
        Self {
            angles: VecDeque::with_capacity(capacity.unwrap_or(0).min(1024)),
            capacity,
        }
    }

    /// Record a ray at `theta` if `frame` is a trail frame. Returns whether a ray was added.
    pub fn record(&mut self, frame: FrameIndex, theta: f64) -> bool {
        if frame.0 % TRAIL_EVERY != 0 {
            return false;
        }
        if let Some(cap) = self.capacity {
            while self.angles.len() >= cap {
                self.angles.pop_front();
            }
        }
        self.angles.push_back(theta);
        true
    }

    /// Ray angles, oldest first.
    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.angles.iter().copied()
    }

    /// Number of retained rays.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Whether no ray has been retained.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Maximum retained rays, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/trail.rs"]
mod tests;
