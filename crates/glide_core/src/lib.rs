//! Glide Core Runtime
//!
//! This crate provides the foundational primitives for the Glide widget
//! library:
//!
//! - **Gesture Events**: a unified event model for pointer and drag-gesture
//!   lifecycles delivered by the host platform
//! - **State Machines**: flat statecharts driving widget interaction states
//! - **Shared Types**: colors and error types used across the workspace
//!
//! # Example
//!
//! ```rust
//! use glide_core::fsm::StateMachine;
//! use glide_core::events::event_types;
//!
//! const IDLE: u32 = 0;
//! const DRAGGING: u32 = 1;
//!
//! let mut fsm = StateMachine::builder(IDLE)
//!     .on(IDLE, event_types::GESTURE_START, DRAGGING)
//!     .on(DRAGGING, event_types::GESTURE_END, IDLE)
//!     .build();
//!
//! fsm.send(event_types::GESTURE_START);
//! assert_eq!(fsm.current_state(), DRAGGING);
//! ```

pub mod color;
pub mod error;
pub mod events;
pub mod fsm;

pub use color::Color;
pub use error::{ConfigError, Result};
pub use events::{Event, EventType, GestureSample};
pub use fsm::{StateId, StateMachine, Transition};
