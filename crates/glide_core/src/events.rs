//! Event model
//!
//! Unified events for pointer input and drag-gesture lifecycles, delivered
//! serially by the host platform's event loop.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;

    /// A drag gesture was granted to a widget
    pub const GESTURE_START: EventType = 10;
    /// Drag gesture update; carries the accumulated offset since start
    pub const GESTURE_MOVE: EventType = 11;
    /// Drag gesture released normally
    pub const GESTURE_END: EventType = 12;
    /// Drag gesture was terminated by the platform (e.g. app backgrounded)
    pub const GESTURE_CANCEL: EventType = 13;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// Accumulated drag offset since gesture start.
///
/// The sign convention follows screen coordinates: the axis grows downward,
/// so a negative `delta_along_axis` is an upward drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    /// Signed pixel offset along the drag axis since the gesture started
    pub delta_along_axis: f32,
}

impl GestureSample {
    pub const fn new(delta_along_axis: f32) -> Self {
        Self { delta_along_axis }
    }
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    /// Drag gesture progress sample
    Gesture(GestureSample),
    None,
}

impl Event {
    /// Create a gesture-lifecycle event carrying an accumulated offset
    pub fn gesture(event_type: EventType, sample: GestureSample) -> Self {
        Self {
            event_type,
            target: 0,
            data: EventData::Gesture(sample),
            timestamp: 0,
        }
    }

    /// Extract the gesture sample, if this event carries one
    pub fn gesture_sample(&self) -> Option<GestureSample> {
        match self.data {
            EventData::Gesture(sample) => Some(sample),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_event_carries_sample() {
        let event = Event::gesture(event_types::GESTURE_MOVE, GestureSample::new(-40.0));
        assert_eq!(
            event.gesture_sample(),
            Some(GestureSample::new(-40.0))
        );
    }

    #[test]
    fn pointer_event_has_no_sample() {
        let event = Event {
            event_type: event_types::POINTER_DOWN,
            target: 0,
            data: EventData::Pointer {
                x: 10.0,
                y: 20.0,
                button: 0,
            },
            timestamp: 0,
        };
        assert_eq!(event.gesture_sample(), None);
    }
}
