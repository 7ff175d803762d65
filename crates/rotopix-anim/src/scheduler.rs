//! Frame scheduling
//!
//! A [`FrameScheduler`] stands in for the host's "call me before the next
//! repaint" primitive. Each call blocks (or yields) until the host is ready
//! for another frame and returns the host timestamp in milliseconds, or
//! `None` once the host will not produce any more frames.

use crate::{AnimError, AnimResult};

/// Host frame-timing primitive
pub trait FrameScheduler {
    /// Wait for the next frame slot.
    ///
    /// Returns the host timestamp in milliseconds, or `None` when the host
    /// has stopped.
    fn request_frame(&mut self) -> Option<f64>;
}

impl<F> FrameScheduler for F
where
    F: FnMut() -> Option<f64>,
{
    fn request_frame(&mut self) -> Option<f64> {
        self()
    }
}

/// Synthetic scheduler producing evenly spaced timestamps
///
/// Never sleeps; useful for headless rendering and tests.
#[derive(Debug, Clone)]
pub struct FixedRateScheduler {
    interval_ms: f64,
    now_ms: f64,
    remaining: Option<u64>,
}

impl FixedRateScheduler {
    /// Create a scheduler ticking at `fps` frames per second.
    ///
    /// # Errors
    ///
    /// Returns [`AnimError::InvalidConfig`] if `fps` is not finite and
    /// positive.
    pub fn new(fps: f64) -> AnimResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(AnimError::InvalidConfig(format!(
                "frame rate must be finite and > 0, got {fps}"
            )));
        }
        Ok(Self {
            interval_ms: 1000.0 / fps,
            now_ms: 0.0,
            remaining: None,
        })
    }

    /// Stop after granting `frames` more frames.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }

    /// Milliseconds between frames.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn request_frame(&mut self) -> Option<f64> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        self.now_ms += self.interval_ms;
        Some(self.now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rate_timestamps() {
        let mut s = FixedRateScheduler::new(50.0).unwrap();
        assert_eq!(s.interval_ms(), 20.0);
        assert_eq!(s.request_frame(), Some(20.0));
        assert_eq!(s.request_frame(), Some(40.0));
    }

    #[test]
    fn test_frame_limit() {
        let mut s = FixedRateScheduler::new(10.0).unwrap().with_frame_limit(2);
        assert!(s.request_frame().is_some());
        assert!(s.request_frame().is_some());
        assert_eq!(s.request_frame(), None);
        assert_eq!(s.request_frame(), None);
    }

    #[test]
    fn test_invalid_rate() {
        assert!(FixedRateScheduler::new(0.0).is_err());
        assert!(FixedRateScheduler::new(-30.0).is_err());
        assert!(FixedRateScheduler::new(f64::NAN).is_err());
    }

    #[test]
    fn test_closure_scheduler() {
        let mut ticks = vec![3.0, 2.0, 1.0];
        let mut s = || ticks.pop();
        assert_eq!(s.request_frame(), Some(1.0));
        assert_eq!(s.request_frame(), Some(2.0));
    }
}
