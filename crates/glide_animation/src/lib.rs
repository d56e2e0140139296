//! Glide Animation System
//!
//! Easing functions and the smoothing collaborator widgets hand their
//! derived visual offsets to. Smoothing is fire-and-forget from a widget's
//! point of view: a commit re-targets the transition and returns
//! immediately; the render layer ticks transitions each frame and reads the
//! in-flight value. Widgets never wait on a transition to settle.

pub mod easing;
pub mod smoothing;

pub use easing::Easing;
pub use smoothing::{Smoother, TimedTransition, TransitionRequest};
