//! Animation state

/// Phase of an [`Animator`](crate::Animator)
///
/// There is no terminal phase: a running animation keeps producing frames
/// until its host stops asking for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No frame rendered yet
    #[default]
    Idle,
    /// Producing frames
    Running,
}

/// Current angle, frame counter and last host timestamp
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    theta: f64,
    frame: u64,
    last_frame_time: Option<f64>,
}

impl AnimationState {
    /// State at angle 0, frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current angle in degrees, in `[0, 360)`.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Number of steps taken since frame 0.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Host timestamp (ms) of the most recent scheduled frame.
    pub fn last_frame_time(&self) -> Option<f64> {
        self.last_frame_time
    }

    /// Advance the angle by `degrees` (>= 0), wrapping at 360.
    pub fn step(&mut self, degrees: f64) {
        self.theta = (self.theta + degrees) % 360.0;
        self.frame += 1;
    }

    /// Record a host timestamp, returning the time since the previous one.
    pub fn record_time(&mut self, timestamp: f64) -> Option<f64> {
        let delta = self.last_frame_time.map(|prev| timestamp - prev);
        self.last_frame_time = Some(timestamp);
        delta
    }
}
