//! Vertical value-slider widget with FSM-driven interactions
//!
//! The slider maps a vertical drag gesture onto a bounded numeric value:
//! - Drag-to-value mapping with clamping and optional step quantization
//! - FSM-driven idle/dragging lifecycle with change/complete callbacks
//! - Derived visual offsets (track fill, indicator position) recomputed
//!   from the current value, never stored
//! - Optional fire-and-forget smoothing of offset changes
//!
//! Rendering and gesture recognition are external collaborators: the host
//! delivers `GESTURE_START`/`GESTURE_MOVE`/`GESTURE_END`/`GESTURE_CANCEL`
//! events carrying the accumulated drag offset, and reads derived offsets
//! back out after each commit.

use glide_animation::easing::Easing;
use glide_animation::smoothing::{Smoother, TransitionRequest};
use glide_core::color::Color;
use glide_core::error::ConfigError;
use glide_core::events::{event_types, Event, GestureSample};
use glide_core::fsm::StateMachine;

use crate::widget::{Widget, WidgetId, WidgetRegistry};

/// Slider states
pub mod states {
    pub const IDLE: u32 = 0;
    pub const DRAGGING: u32 = 1;
}

/// Slider configuration, immutable for the widget's lifetime
#[derive(Clone)]
pub struct SliderConfig {
    /// Initial value, clamped into `[min, max]` on mount
    pub value: f32,
    /// Lower bound of the value range
    pub min: f32,
    /// Upper bound of the value range
    pub max: f32,
    /// Optional quantization step; values move in whole multiples of it
    pub step: Option<f32>,
    /// Whether the slider ignores drags
    pub disabled: bool,
    /// Track width in pixels
    pub width: f32,
    /// Track length along the drag axis, in pixels
    pub height: f32,
    /// Corner radius of the track
    pub border_radius: f32,
    /// Color of the unfilled part of the track
    pub maximum_track_tint: Color,
    /// Color of the filled part of the track
    pub minimum_track_tint: Color,
    /// Whether the draggable indicator is rendered
    pub show_indicator: bool,
    /// Indicator diameter in pixels
    pub indicator_size: f32,
    /// Indicator fill color
    pub indicator_color: Color,
    /// Indicator label text color
    pub indicator_text_color: Color,
    /// Horizontal inset of the indicator relative to the track
    pub indicator_inset: f32,
    /// Duration of offset smoothing; 0 disables animation
    pub animation_duration_ms: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 1.0,
            step: None,
            disabled: false,
            width: 40.0,
            height: 200.0,
            border_radius: 0.0,
            maximum_track_tint: Color::from_hex(0xECECEC),
            minimum_track_tint: Color::from_hex(0xECECEC),
            show_indicator: false,
            indicator_size: 48.0,
            indicator_color: Color::from_hex(0xECECEC),
            indicator_text_color: Color::BLACK,
            indicator_inset: -60.0,
            animation_duration_ms: 0,
        }
    }
}

impl SliderConfig {
    /// Create a config with a value range
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            ..Default::default()
        }
    }

    /// Check construction-time contracts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min >= self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if let Some(step) = self.step {
            if step <= 0.0 {
                return Err(ConfigError::InvalidStep(step));
            }
        }
        if self.height <= 0.0 {
            return Err(ConfigError::InvalidTrackLength(self.height));
        }
        if self.show_indicator && self.indicator_size <= 0.0 {
            return Err(ConfigError::InvalidIndicatorSize(self.indicator_size));
        }
        Ok(())
    }

    /// Set the initial value
    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Set the quantization step
    pub fn step(mut self, step: f32) -> Self {
        self.step = Some(step);
        self
    }

    /// Set whether the slider is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the track size (width, length along the drag axis)
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the corner radius
    pub fn rounded(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    /// Set the unfilled track color
    pub fn max_track_tint(mut self, color: Color) -> Self {
        self.maximum_track_tint = color;
        self
    }

    /// Set the filled track color
    pub fn min_track_tint(mut self, color: Color) -> Self {
        self.minimum_track_tint = color;
        self
    }

    /// Show the draggable indicator
    pub fn with_indicator(mut self) -> Self {
        self.show_indicator = true;
        self
    }

    /// Set the indicator diameter
    pub fn indicator_size(mut self, size: f32) -> Self {
        self.indicator_size = size;
        self
    }

    /// Set the indicator fill color
    pub fn indicator_color(mut self, color: Color) -> Self {
        self.indicator_color = color;
        self
    }

    /// Set the indicator label color
    pub fn indicator_text_color(mut self, color: Color) -> Self {
        self.indicator_text_color = color;
        self
    }

    /// Set the indicator's horizontal inset
    pub fn indicator_inset(mut self, inset: f32) -> Self {
        self.indicator_inset = inset;
        self
    }

    /// Set the offset smoothing duration
    pub fn animation_duration(mut self, duration_ms: u32) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }
}

/// Derived visual offsets, pure functions of value and config
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedVisual {
    /// Length of the filled part of the track, in pixels
    pub fill_extent: f32,
    /// Indicator position along the track, clamped to stay inside it
    pub indicator_offset: f32,
}

/// Map an accumulated drag offset to a candidate value.
///
/// An upward drag (negative delta, screen coordinates) increases the value.
/// Two distinct precision policies apply, matching the component contract:
///
/// - stepped: the candidate moves in whole steps from the anchor, rounding
///   half-away-from-zero (`f32::round`), then clamps into range
/// - continuous: the candidate clamps into range, then truncates toward
///   zero at hundredths resolution (display precision)
///
/// Pure function; same inputs always yield the same output.
pub fn interpret(sample: GestureSample, anchor: f32, config: &SliderConfig) -> f32 {
    let ratio = -sample.delta_along_axis / config.height;
    let range = config.max - config.min;

    match config.step {
        Some(step) => {
            let candidate = anchor + (ratio * range / step).round() * step;
            candidate.clamp(config.min, config.max)
        }
        None => {
            let candidate = (anchor + ratio * range).clamp(config.min, config.max);
            (candidate * 100.0).trunc() / 100.0
        }
    }
}

/// Compute visual offsets for a value.
///
/// `fill_extent` interpolates linearly over the track and is exact at both
/// bounds. The indicator starts at the fill boundary and is pinned so it
/// never leaves the track: pinned to the top when its far edge would pass
/// the track end, to zero when its near edge would go negative, and
/// centered on the fill boundary otherwise.
pub fn derive_visual(value: f32, config: &SliderConfig) -> DerivedVisual {
    let fill_extent = (value - config.min) / (config.max - config.min) * config.height;

    let indicator_offset = if config.show_indicator {
        let size = config.indicator_size;
        if fill_extent + size >= config.height {
            config.height - size
        } else if fill_extent - size <= 0.0 {
            0.0
        } else {
            fill_extent - size / 2.0
        }
    } else {
        fill_extent
    };

    DerivedVisual {
        fill_extent,
        indicator_offset,
    }
}

/// Mutable slider state, owned exclusively by the widget
struct SliderState {
    /// Authoritative current value, always within `[min, max]`
    value: f32,
    /// Value captured at gesture start; `Some` iff dragging
    drag_anchor: Option<f32>,
}

type ValueCallback = Box<dyn FnMut(f32) + Send>;

/// Vertical value-slider widget
pub struct Slider {
    id: WidgetId,
    config: SliderConfig,
    fsm: StateMachine,
    state: SliderState,
    /// Track origin in window coordinates, for gesture claiming
    origin: (f32, f32),
    on_change: Option<ValueCallback>,
    on_complete: Option<ValueCallback>,
    fill_smoother: Option<Box<dyn Smoother + Send>>,
    indicator_smoother: Option<Box<dyn Smoother + Send>>,
}

impl Slider {
    /// Create a slider, failing fast on invalid configuration.
    ///
    /// The initial value is clamped into range and committed without firing
    /// callbacks; mounting is not a user gesture.
    pub fn new(registry: &mut WidgetRegistry, config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let value = config.value.clamp(config.min, config.max);
        Ok(Self {
            id: registry.register(),
            fsm: Self::create_fsm(),
            state: SliderState {
                value,
                drag_anchor: None,
            },
            origin: (0.0, 0.0),
            on_change: None,
            on_complete: None,
            fill_smoother: None,
            indicator_smoother: None,
            config,
        })
    }

    /// Create the drag-lifecycle FSM.
    ///
    /// Disabled sliders keep the same transitions: a drag that is already
    /// in progress still runs its terminal bookkeeping, only value commits
    /// and callbacks are suppressed.
    fn create_fsm() -> StateMachine {
        StateMachine::builder(states::IDLE)
            .on(states::IDLE, event_types::GESTURE_START, states::DRAGGING)
            .on(states::DRAGGING, event_types::GESTURE_MOVE, states::DRAGGING)
            .on(states::DRAGGING, event_types::GESTURE_END, states::IDLE)
            .on(states::DRAGGING, event_types::GESTURE_CANCEL, states::IDLE)
            .build()
    }

    /// Get the widget ID
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The authoritative current value
    pub fn value(&self) -> f32 {
        self.state.value
    }

    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.fsm.is_in(states::DRAGGING)
    }

    /// The slider's configuration
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current visual offsets, recomputed from the value on every call
    pub fn visual(&self) -> DerivedVisual {
        derive_visual(self.state.value, &self.config)
    }

    /// The text rendered on the indicator: the value rounded to hundredths
    pub fn indicator_label(&self) -> String {
        let rounded = (self.state.value * 100.0).round() / 100.0;
        format!("{rounded}")
    }

    /// Set the track origin in window coordinates
    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = (x, y);
    }

    /// Whether a pointer-down at `(x, y)` should claim the drag gesture
    pub fn wants_gesture(&self, x: f32, y: f32) -> bool {
        let (ox, oy) = self.origin;
        x >= ox && x <= ox + self.config.width && y >= oy && y <= oy + self.config.height
    }

    /// A claimed drag is never yielded to an ancestor (e.g. a surrounding
    /// scroll container cannot hijack it mid-gesture)
    pub fn yields_to_ancestor(&self) -> bool {
        false
    }

    /// Set the callback fired on every value change during a drag
    pub fn on_change<F: FnMut(f32) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the callback fired when a drag ends or is cancelled
    pub fn on_complete<F: FnMut(f32) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Attach a smoother for the track-fill offset
    pub fn with_fill_smoother(mut self, smoother: Box<dyn Smoother + Send>) -> Self {
        self.fill_smoother = Some(smoother);
        self
    }

    /// Attach a smoother for the indicator offset
    pub fn with_indicator_smoother(mut self, smoother: Box<dyn Smoother + Send>) -> Self {
        self.indicator_smoother = Some(smoother);
        self
    }

    /// Handle a gesture-lifecycle event.
    ///
    /// Events that do not match the current phase (a move or terminal event
    /// with no preceding start, a duplicate start) are ignored.
    pub fn handle_event(&mut self, event: &Event) {
        match event.event_type {
            event_types::GESTURE_START => self.handle_start(),
            event_types::GESTURE_MOVE => self.handle_move(event),
            event_types::GESTURE_END | event_types::GESTURE_CANCEL => self.handle_release(event),
            _ => {}
        }
    }

    fn handle_start(&mut self) {
        if !self.fsm.is_in(states::IDLE) {
            tracing::warn!("ignoring gesture start while already dragging");
            return;
        }
        self.fsm.send(event_types::GESTURE_START);
        // Capture the drag anchor; no callback fires on start
        self.state.drag_anchor = Some(self.state.value);
    }

    fn handle_move(&mut self, event: &Event) {
        if !self.fsm.is_in(states::DRAGGING) {
            tracing::warn!("ignoring gesture move without a preceding start");
            return;
        }
        if self.config.disabled {
            return;
        }
        let Some(sample) = event.gesture_sample() else {
            tracing::warn!("gesture move without a sample");
            return;
        };
        let Some(anchor) = self.state.drag_anchor else {
            return;
        };

        self.fsm.send(event_types::GESTURE_MOVE);
        let value = interpret(sample, anchor, &self.config);
        self.commit(value);
        if let Some(callback) = &mut self.on_change {
            callback(value);
        }
    }

    fn handle_release(&mut self, event: &Event) {
        if !self.fsm.is_in(states::DRAGGING) {
            tracing::warn!("ignoring gesture release without a preceding start");
            return;
        }

        // The anchor is cleared on every terminal event, disabled or not
        let anchor = self.state.drag_anchor.take();
        self.fsm.send(event.event_type);

        if self.config.disabled {
            return;
        }
        let (Some(anchor), Some(sample)) = (anchor, event.gesture_sample()) else {
            return;
        };

        let value = interpret(sample, anchor, &self.config);
        self.commit(value);
        if let Some(callback) = &mut self.on_complete {
            callback(value);
        }
    }

    /// Commit a value and re-target the offset smoothers.
    ///
    /// Smoothing is fire-and-forget: the commit and any callback complete
    /// synchronously regardless of the animation duration.
    fn commit(&mut self, value: f32) {
        self.state.value = value;
        tracing::trace!("slider committed value {value}");

        let visual = derive_visual(value, &self.config);
        let duration_ms = self.config.animation_duration_ms;
        if let Some(smoother) = &mut self.fill_smoother {
            smoother.retarget(TransitionRequest::new(
                visual.fill_extent,
                duration_ms,
                Easing::Linear,
            ));
        }
        if let Some(smoother) = &mut self.indicator_smoother {
            smoother.retarget(TransitionRequest::new(
                visual.indicator_offset,
                duration_ms,
                Easing::Linear,
            ));
        }
    }
}

impl Widget for Slider {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn handle_event(&mut self, event: &Event) {
        Slider::handle_event(self, event);
    }
}

/// Create a slider config with a value range
pub fn slider(min: f32, max: f32) -> SliderConfig {
    SliderConfig::new(min, max)
}
