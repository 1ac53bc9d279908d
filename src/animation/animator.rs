use std::time::Duration;

use crate::animation::clock::{DEFAULT_SPEED, TickClock, interval_for_speed};
use crate::animation::frame::{FrameState, theta_for_frame};
use crate::animation::trail::{RayTrail, TrailPolicy};
use crate::curve::sampler::{PolarCurve, radial_limit};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{PolarError, PolarResult};

/// Frames per rotation used when the caller does not choose.
pub const DEFAULT_FRAMES: u64 = 200;

/// Options for one animation session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationOpts {
    /// Frames per full rotation; must be > 0.
    pub frames: u64,
    /// Time between ticks; must be > 0.
    pub interval: Duration,
    /// Trail ray retention.
    pub trail: TrailPolicy,
    /// Most ticks delivered by one [`Animator::advance`] call; `None` means one rotation.
    ///
    /// Older overdue ticks are collapsed into a single jump so the frame index still lands
    /// where delivering every tick would have put it.
    pub max_catch_up: Option<u64>,
}

impl Default for AnimationOpts {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            interval: interval_for_speed(DEFAULT_SPEED),
            trail: TrailPolicy::default(),
            max_catch_up: None,
        }
    }
}

/// Playback state of an [`Animator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// No session; initial and terminal state.
    #[default]
    Stopped,
    /// Ticks are delivered.
    Running,
    /// Ticks are suspended; frame state is retained.
    Paused,
}

impl PlaybackState {
    /// Lowercase state name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

/// Consumer of frames produced by [`Animator::advance`].
pub trait FrameSink {
    /// Called once per tick, after the frame state has been updated.
    fn on_frame(&mut self, frame: &FrameState) -> PolarResult<()>;
}

impl<F> FrameSink for F
where
    F: FnMut(&FrameState),
{
    fn on_frame(&mut self, frame: &FrameState) -> PolarResult<()> {
        self(frame);
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct FrameLog {
    /// Frames in delivery order.
    pub frames: Vec<FrameState>,
}

impl FrameLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivered frame indices, in order.
    pub fn indices(&self) -> Vec<u64> {
        self.frames.iter().map(|f| f.frame.0).collect()
    }
}

impl FrameSink for FrameLog {
    fn on_frame(&mut self, frame: &FrameState) -> PolarResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// State owned by one `start` .. `stop` period.
struct AnimationSession<C> {
    curve: C,
    frames: u64,
    max_catch_up: u64,
    radial_limit: f64,
    clock: TickClock,
    current: FrameState,
    trail: RayTrail,
}

impl<C: PolarCurve> AnimationSession<C> {
    fn new(curve: C, opts: AnimationOpts) -> PolarResult<Self> {
        if opts.frames == 0 {
            return Err(PolarError::validation("animation frames must be > 0"));
        }
        if opts.max_catch_up == Some(0) {
            return Err(PolarError::validation("animation catch-up limit must be > 0"));
        }
        let clock = TickClock::new(opts.interval)?;
        let current = FrameState::compute(&curve, FrameIndex(0), opts.frames);
        let mut trail = RayTrail::new(opts.trail, opts.frames);
        trail.record(current.frame, current.theta);
        Ok(Self {
            radial_limit: radial_limit(&curve),
            curve,
            frames: opts.frames,
            max_catch_up: opts.max_catch_up.unwrap_or(opts.frames),
            clock,
            current,
            trail,
        })
    }

    fn step(&mut self) {
        let next = self.current.frame.next_wrapping(self.frames);
        self.current = FrameState::compute(&self.curve, next, self.frames);
        self.trail.record(next, self.current.theta);
    }

    /// Jump `n` frames ahead without delivering them.
    ///
    /// Trail rays of the last rotation's worth of skipped frames are still recorded.
    fn skip(&mut self, n: u64) {
        if n == 0 {
            return;
        }
        let frames = u128::from(self.frames);
        let from = u128::from(self.current.frame.0);
        // Always < frames, so the narrowing is lossless.
        let at = |k: u64| FrameIndex(((from + u128::from(k)) % frames) as u64);

        for k in (n - n.min(self.frames) + 1)..=n {
            let frame = at(k);
            self.trail.record(frame, theta_for_frame(frame, self.frames));
        }
        self.current = FrameState::compute(&self.curve, at(n), self.frames);
    }
}

/// Playback state machine: `Stopped -> Running -> {Paused <-> Running} -> Stopped`.
///
/// The animator owns at most one session, created by [`Animator::start`] and dropped by
/// [`Animator::stop`]. Time is supplied by the caller through [`Animator::advance`] or by
/// calling [`Animator::tick`] directly.
pub struct Animator<C> {
    state: PlaybackState,
    session: Option<AnimationSession<C>>,
}

impl<C> Default for Animator<C> {
    fn default() -> Self {
        Self {
            state: PlaybackState::Stopped,
            session: None,
        }
    }
}

impl<C: PolarCurve> Animator<C> {
    /// A stopped animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current frame, if a session is active.
    pub fn frame(&self) -> Option<&FrameState> {
        self.session.as_ref().map(|s| &s.current)
    }

    /// Trail rays of the active session.
    pub fn trail(&self) -> Option<&RayTrail> {
        self.session.as_ref().map(|s| &s.trail)
    }

    /// Radial axis limit (and ray length) of the active session.
    pub fn radial_limit(&self) -> Option<f64> {
        self.session.as_ref().map(|s| s.radial_limit)
    }

    /// Curve driving the active session.
    pub fn curve(&self) -> Option<&C> {
        self.session.as_ref().map(|s| &s.curve)
    }

    /// Begin a new session at frame 0. Only valid while stopped.
    #[tracing::instrument(skip(self, curve))]
    pub fn start(&mut self, curve: C, opts: AnimationOpts) -> PolarResult<&FrameState> {
        if self.state != PlaybackState::Stopped {
            return Err(PolarError::transition("start", self.state.as_str()));
        }
        let session = AnimationSession::new(curve, opts)?;
        self.state = PlaybackState::Running;
        tracing::debug!(frames = session.frames, limit = session.radial_limit, "animation started");
        let session = self.session.insert(session);
        Ok(&session.current)
    }

    /// Advance one frame, wrapping after the last. Only valid while running.
    pub fn tick(&mut self) -> PolarResult<&FrameState> {
        if self.state != PlaybackState::Running {
            return Err(PolarError::transition("tick", self.state.as_str()));
        }
        let Some(session) = self.session.as_mut() else {
            return Err(PolarError::transition("tick", PlaybackState::Stopped.as_str()));
        };
        session.step();
        Ok(&session.current)
    }

    /// Suspend ticking, keeping all frame state. Only valid while running.
    pub fn pause(&mut self) -> PolarResult<()> {
        if self.state != PlaybackState::Running {
            return Err(PolarError::transition("pause", self.state.as_str()));
        }
        self.state = PlaybackState::Paused;
        tracing::debug!(frame = ?self.frame().map(|f| f.frame), "animation paused");
        Ok(())
    }

    /// Continue ticking from the retained frame. Only valid while paused.
    pub fn resume(&mut self) -> PolarResult<()> {
        if self.state != PlaybackState::Paused {
            return Err(PolarError::transition("resume", self.state.as_str()));
        }
        if let Some(session) = self.session.as_mut() {
            session.clock.reset();
        }
        self.state = PlaybackState::Running;
        tracing::debug!(frame = ?self.frame().map(|f| f.frame), "animation resumed");
        Ok(())
    }

    /// End the session and drop its state. Returns `false` (and does nothing) when already
    /// stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == PlaybackState::Stopped {
            return false;
        }
        self.session = None;
        self.state = PlaybackState::Stopped;
        tracing::debug!("animation stopped");
        true
    }

    /// Feed `dt` of elapsed time; fires due ticks and hands each frame to `sink`.
    ///
    /// At most `max_catch_up` ticks are delivered per call; older overdue ticks are skipped
    /// in one jump. Each tick consumes its interval before delivery, so when `sink` fails the
    /// undelivered ticks stay pending and the failed frame remains available through
    /// [`Animator::emit_current`].
    ///
    /// Returns the number of ticks delivered. Outside `Running` the time is discarded.
    pub fn advance(&mut self, dt: Duration, sink: &mut dyn FrameSink) -> PolarResult<u64> {
        if self.state != PlaybackState::Running {
            return Ok(0);
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(0);
        };
        session.clock.accumulate(dt);

        let skipped = session.clock.drop_overdue(session.max_catch_up);
        if skipped > 0 {
            tracing::warn!(skipped, "animation fell behind, skipping overdue ticks");
            session.skip(skipped);
        }

        let mut fired = 0;
        while session.clock.take_tick() {
            session.step();
            fired += 1;
            sink.on_frame(&session.current)?;
        }
        Ok(fired)
    }

    /// Deliver the current frame without advancing (e.g. right after `start`).
    pub fn emit_current(&self, sink: &mut dyn FrameSink) -> PolarResult<()> {
        match self.frame() {
            Some(frame) => sink.on_frame(frame),
            None => Err(PolarError::transition("emit", self.state.as_str())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
