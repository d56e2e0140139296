//! Base widget trait and identity allocation

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct WidgetId;
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Handle an event delivered by the host event loop
    fn handle_event(&mut self, event: &glide_core::events::Event);
}

/// Allocates widget identities for the lifetime of a UI tree
pub struct WidgetRegistry {
    widgets: SlotMap<WidgetId, ()>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
        }
    }

    /// Allocate a fresh widget ID
    pub fn register(&mut self) -> WidgetId {
        self.widgets.insert(())
    }

    /// Release a widget ID on unmount
    pub fn remove(&mut self, id: WidgetId) {
        self.widgets.remove(id);
    }

    /// Check whether an ID is live
    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Number of live widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
