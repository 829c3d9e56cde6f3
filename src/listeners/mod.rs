//! Page event wiring.
//!
//! Listener managers own declarative tables (button id → target) and turn
//! them into handlers on an [`EventsListener`].

mod events;
mod navbar;

pub use events::{callback, Callback, EventType, EventsListener};
pub use navbar::NavBarMenuListenerManager;

/// Something that wires a section of the page to events.
pub trait ListenerManager {
    fn initialize_listeners(&self, listener: &mut EventsListener);
}

/// Run every listener manager against `listener`, in order.
pub fn initialize_site_listeners(managers: &[&dyn ListenerManager], listener: &mut EventsListener) {
    for manager in managers {
        manager.initialize_listeners(listener);
    }
}
