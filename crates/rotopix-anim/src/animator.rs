//! Rotation animator
//!
//! An [`Animator`] owns a decoded source image and renders it rotated by
//! an angle that advances a fixed step every frame.
//!
//! # Loop
//!
//! [`Animator::run`] is an explicit loop rather than a callback that
//! reschedules itself:
//!
//! ```text
//! start (theta = 0) -> present
//! loop:
//!     cancelled?       -> stop
//!     request_frame    -> None stops
//!     cancelled?       -> stop
//!     advance, present
//! ```
//!
//! A frame is always rendered and presented as a whole; cancellation takes
//! effect between frames.

use crate::scheduler::FrameScheduler;
use crate::state::{AnimationState, Phase};
use crate::surface::{DisplaySurface, Placement};
use crate::{AnimError, AnimResult, AnimationConfig, CancellationToken};
use rotopix_core::PixelBuffer;
use rotopix_transform::{MatrixReadout, RenderedFrame, render_frame_with};
use tracing::{debug, info};

/// Why [`Animator::run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The cancellation token was set
    Cancelled,
    /// The scheduler stopped granting frames
    HostStopped,
}

/// Outcome of [`Animator::run`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames rendered and presented during this run
    pub frames: u64,
    /// Angle of the last presented frame
    pub final_theta: f64,
    /// Why the loop ended
    pub stop: StopReason,
}

/// Frame-by-frame rotation of one source image
#[derive(Debug, Clone)]
pub struct Animator {
    source: PixelBuffer,
    config: AnimationConfig,
    state: AnimationState,
    phase: Phase,
}

impl Animator {
    /// Create an idle animator for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`AnimError::InvalidConfig`] if `config` does not validate.
    pub fn new(source: PixelBuffer, config: AnimationConfig) -> AnimResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            config,
            state: AnimationState::new(),
            phase: Phase::Idle,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn source(&self) -> &PixelBuffer {
        &self.source
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Enter [`Phase::Running`] and render frame 0 at angle 0.
    ///
    /// Calling this on a running animator restarts it from angle 0.
    pub fn start(&mut self) -> AnimResult<RenderedFrame> {
        if self.phase == Phase::Running {
            debug!(theta = self.state.theta(), "restarting animation");
        }
        self.state = AnimationState::new();
        self.phase = Phase::Running;
        self.render()
    }

    /// Step the angle and render the next frame.
    ///
    /// `timestamp` is the host time (ms) the frame was granted at, if known.
    ///
    /// # Errors
    ///
    /// Returns [`AnimError::InvalidState`] if the animator has not been
    /// started.
    pub fn advance(&mut self, timestamp: Option<f64>) -> AnimResult<RenderedFrame> {
        if self.phase != Phase::Running {
            return Err(AnimError::InvalidState(
                "advance called before start".to_string(),
            ));
        }
        if let Some(t) = timestamp
            && let Some(delta) = self.state.record_time(t)
        {
            debug!(delta_ms = delta, "frame interval");
        }
        self.state.step(self.config.degrees_per_frame);
        self.render()
    }

    fn render(&self) -> AnimResult<RenderedFrame> {
        let frame = render_frame_with(
            &self.source,
            self.state.theta(),
            &self.config.render_options(),
        )?;
        Ok(frame)
    }

    /// Draw `frame` centered on `surface` and show its matrix readout.
    pub fn present<S: DisplaySurface + ?Sized>(frame: &RenderedFrame, surface: &mut S) {
        let placement = Placement::centered(surface.size(), &frame.buffer);
        surface.put_image(&frame.buffer, placement);
        surface.show_matrix(&MatrixReadout::from_transform(&frame.transform));
    }

    /// Run the animation until `token` is cancelled or `scheduler` stops.
    ///
    /// An idle animator is started first; a running one continues from its
    /// current angle.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors. The animator stays in its last good
    /// state.
    pub fn run<F, S>(
        &mut self,
        scheduler: &mut F,
        surface: &mut S,
        token: &CancellationToken,
    ) -> AnimResult<RunSummary>
    where
        F: FrameScheduler + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        info!(
            width = self.source.width(),
            height = self.source.height(),
            step = self.config.degrees_per_frame,
            "animation started"
        );

        let mut frames = 0;
        let stop = 'run: {
            if token.is_cancelled() {
                break 'run StopReason::Cancelled;
            }
            let first = match self.phase {
                Phase::Idle => self.start()?,
                Phase::Running => self.render()?,
            };
            Self::present(&first, surface);
            frames += 1;

            loop {
                if token.is_cancelled() {
                    break 'run StopReason::Cancelled;
                }
                let Some(timestamp) = scheduler.request_frame() else {
                    break 'run StopReason::HostStopped;
                };
                if token.is_cancelled() {
                    break 'run StopReason::Cancelled;
                }
                let frame = self.advance(Some(timestamp))?;
                Self::present(&frame, surface);
                frames += 1;
            }
        };

        let summary = RunSummary {
            frames,
            final_theta: self.state.theta(),
            stop,
        };
        info!(frames, theta = summary.final_theta, reason = ?stop, "animation stopped");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedRateScheduler, MemorySurface};
    use rotopix_core::color;

    fn source() -> PixelBuffer {
        let data = (0..12u8).flat_map(|p| color::compose_rgb(p, p, p)).collect();
        PixelBuffer::from_rgba(4, 3, data).unwrap()
    }

    #[test]
    fn test_new_validates_config() {
        let bad = AnimationConfig::default().degrees_per_frame(f64::NAN);
        assert!(matches!(
            Animator::new(source(), bad),
            Err(AnimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_advance_requires_start() {
        let mut anim = Animator::new(source(), AnimationConfig::default()).unwrap();
        assert_eq!(anim.phase(), Phase::Idle);
        assert!(matches!(anim.advance(None), Err(AnimError::InvalidState(_))));
    }

    #[test]
    fn test_start_renders_frame_zero() {
        let mut anim = Animator::new(source(), AnimationConfig::default()).unwrap();
        let frame = anim.start().unwrap();
        assert_eq!(anim.phase(), Phase::Running);
        assert_eq!(anim.state().theta(), 0.0);
        assert!(frame.buffer.sizes_equal(anim.source()));
    }

    #[test]
    fn test_advance_steps_angle() {
        let mut anim = Animator::new(source(), AnimationConfig::default()).unwrap();
        anim.start().unwrap();
        anim.advance(Some(16.0)).unwrap();
        anim.advance(Some(32.0)).unwrap();
        assert_eq!(anim.state().theta(), 24.0);
        assert_eq!(anim.state().frame(), 2);
        assert_eq!(anim.state().last_frame_time(), Some(32.0));
    }

    #[test]
    fn test_restart_resets_angle() {
        let mut anim = Animator::new(source(), AnimationConfig::default()).unwrap();
        anim.start().unwrap();
        anim.advance(None).unwrap();
        anim.start().unwrap();
        assert_eq!(anim.state().theta(), 0.0);
        assert_eq!(anim.state().frame(), 0);
    }

    #[test]
    fn test_run_until_host_stops() {
        let mut anim = Animator::new(source(), AnimationConfig::default()).unwrap();
        let mut scheduler = FixedRateScheduler::new(60.0).unwrap().with_frame_limit(5);
        let mut surface = MemorySurface::new(10, 10);
        let token = CancellationToken::new();

        let summary = anim.run(&mut scheduler, &mut surface, &token).unwrap();
        assert_eq!(summary.stop, StopReason::HostStopped);
        assert_eq!(summary.frames, 6);
        assert_eq!(summary.final_theta, 60.0);
        assert_eq!(surface.put_count(), 6);
        assert!(surface.last_readout().is_some());
    }

    #[test]
    fn test_run_precancelled_renders_nothing() {
        let mut anim = Animator::new(source(), AnimationConfig::default()).unwrap();
        let mut scheduler = FixedRateScheduler::new(60.0).unwrap();
        let mut surface = MemorySurface::new(10, 10);
        let token = CancellationToken::new();
        token.cancel();

        let summary = anim.run(&mut scheduler, &mut surface, &token).unwrap();
        assert_eq!(summary.stop, StopReason::Cancelled);
        assert_eq!(summary.frames, 0);
        assert_eq!(surface.put_count(), 0);
        assert_eq!(anim.phase(), Phase::Idle);
    }
}
