//! Glide Widget Library
//!
//! Value-slider controls with FSM-driven interactions.

pub mod slider;
pub mod widget;

pub use slider::{derive_visual, interpret, DerivedVisual, Slider, SliderConfig};
pub use widget::{Widget, WidgetId, WidgetRegistry};
