//! rotopix-anim - Rotation animation for rotopix
//!
//! Drives the rotation renderer one frame at a time:
//!
//! - [`Animator`]: owns the decoded source and the [`AnimationState`], and
//!   moves from [`Phase::Idle`] to [`Phase::Running`] on [`Animator::start`]
//! - [`FrameScheduler`]: the host's frame-timing primitive
//! - [`DisplaySurface`]: where frames and the matrix readout are shown
//! - [`CancellationToken`]: stops the loop before the next reschedule
//! - [`Viewer`]: decodes a selected file and prepares an animator
//!
//! The loop is single-threaded and cooperative: each frame is rendered to
//! completion before control returns to the scheduler.

mod cancel;
mod config;
mod error;
mod state;

pub mod animator;
pub mod scheduler;
pub mod surface;
pub mod viewer;

pub use animator::{Animator, RunSummary, StopReason};
pub use cancel::CancellationToken;
pub use config::{AnimationConfig, DEGREES_PER_FRAME};
pub use error::{AnimError, AnimResult};
pub use scheduler::{FixedRateScheduler, FrameScheduler};
pub use state::{AnimationState, Phase};
pub use surface::{DisplaySurface, MemorySurface, Placement};
pub use viewer::Viewer;
