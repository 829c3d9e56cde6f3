//! Event registry: actions bound to (event, actioner element id) pairs.

use crate::page::SharedPage;
use crate::selectors::HIDDEN_STYLE_CLASS_NAME;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Events elements can be wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Click => "click",
        }
    }
}

/// Asynchronous callback run when an event fires.
pub type Callback = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Wrap an async closure as a [`Callback`].
pub fn callback<F, Fut>(f: F) -> Callback
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

enum Action {
    ToggleHiddenClass {
        receiver_id: String,
    },
    SetAttribute {
        name: String,
        value: String,
        receiver_id: String,
    },
    Callbacks(Vec<Callback>),
}

/// Registry of page event handlers.
///
/// Registration checks that every string argument is non-empty and that the
/// elements exist in the page; on failure nothing is registered. Actions for
/// the same event and actioner run in registration order.
pub struct EventsListener {
    document: SharedPage,
    handlers: HashMap<(EventType, String), Vec<Action>>,
}

impl EventsListener {
    pub fn new(document: SharedPage) -> Self {
        Self {
            document,
            handlers: HashMap::new(),
        }
    }

    pub fn document(&self) -> &SharedPage {
        &self.document
    }

    /// Toggle the hidden class on `receiver_id` whenever `actioner_id` fires
    /// `event`.
    pub fn add_toggle_hidden_class_event(
        &mut self,
        event: EventType,
        actioner_id: &str,
        receiver_id: &str,
    ) -> bool {
        if !self.can_register(&[actioner_id, receiver_id], &[actioner_id, receiver_id]) {
            return false;
        }

        self.register(
            event,
            actioner_id,
            Action::ToggleHiddenClass {
                receiver_id: receiver_id.to_string(),
            },
        );
        true
    }

    /// Set `attribute_name` to `attribute_value` on `receiver_id` whenever
    /// `actioner_id` fires `event`.
    pub fn add_attribute_setting_event(
        &mut self,
        event: EventType,
        attribute_name: &str,
        attribute_value: &str,
        actioner_id: &str,
        receiver_id: &str,
    ) -> bool {
        if !self.can_register(
            &[attribute_name, attribute_value, actioner_id, receiver_id],
            &[actioner_id, receiver_id],
        ) {
            return false;
        }

        self.register(
            event,
            actioner_id,
            Action::SetAttribute {
                name: attribute_name.to_string(),
                value: attribute_value.to_string(),
                receiver_id: receiver_id.to_string(),
            },
        );
        true
    }

    /// Run `callbacks`, in order, whenever `actioner_id` fires `event`.
    pub fn add_callbacks_event(
        &mut self,
        event: EventType,
        actioner_id: &str,
        callbacks: Vec<Callback>,
    ) -> bool {
        if !self.can_register(&[actioner_id], &[actioner_id]) {
            return false;
        }

        self.register(event, actioner_id, Action::Callbacks(callbacks));
        true
    }

    /// Number of actions bound to `actioner_id` for `event`.
    pub fn handler_count(&self, event: EventType, actioner_id: &str) -> usize {
        self.handlers
            .get(&(event, actioner_id.to_string()))
            .map_or(0, Vec::len)
    }

    /// Fire `event` on `actioner_id`, running its actions in registration
    /// order and awaiting each callback.
    ///
    /// Returns the number of actions run.
    pub async fn dispatch(&self, event: EventType, actioner_id: &str) -> usize {
        let Some(actions) = self.handlers.get(&(event, actioner_id.to_string())) else {
            debug!("No {} handlers for #{}", event.as_str(), actioner_id);
            return 0;
        };

        for action in actions {
            match action {
                Action::ToggleHiddenClass { receiver_id } => {
                    self.with_element(receiver_id, |element| {
                        element.toggle_class(HIDDEN_STYLE_CLASS_NAME);
                    });
                }
                Action::SetAttribute {
                    name,
                    value,
                    receiver_id,
                } => {
                    self.with_element(receiver_id, |element| {
                        element.set_attribute(name, value);
                    });
                }
                Action::Callbacks(callbacks) => {
                    for call in callbacks {
                        call().await;
                    }
                }
            }
        }

        actions.len()
    }

    fn with_element(&self, id: &str, f: impl FnOnce(&mut crate::page::Element)) {
        let mut page = self
            .document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match page.element_by_id_mut(id) {
            Some(element) => f(element),
            None => warn!("Event receiver #{} is no longer in the page", id),
        }
    }

    fn can_register(&self, args: &[&str], ids: &[&str]) -> bool {
        if args.iter().any(|arg| arg.is_empty()) {
            warn!("Ignoring event registration with empty arguments: {:?}", args);
            return false;
        }

        let page = self
            .document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match ids.iter().find(|id| !page.contains_id(id)) {
            Some(missing) => {
                warn!("Ignoring event registration: no element #{}", missing);
                false
            }
            None => true,
        }
    }

    fn register(&mut self, event: EventType, actioner_id: &str, action: Action) {
        self.handlers
            .entry((event, actioner_id.to_string()))
            .or_default()
            .push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Element, Page};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn sample_page() -> SharedPage {
        let mut page = Page::new(Element::with_id("root"));
        page.push(Element::with_id("toggle-btn"))
            .push(Element::with_id("submenu").class(HIDDEN_STYLE_CLASS_NAME));
        page.into_shared()
    }

    fn submenu_hidden(document: &SharedPage) -> bool {
        document
            .lock()
            .unwrap()
            .element_by_id("submenu")
            .unwrap()
            .has_class(HIDDEN_STYLE_CLASS_NAME)
    }

    // ==================== EventType Tests ====================

    #[test]
    fn test_event_type_names() {
        assert_eq!(EventType::Click.as_str(), "click");
    }

    // ==================== Registration Tests ====================

    #[test]
    fn test_registration_rejects_empty_arguments() {
        let mut listener = EventsListener::new(sample_page());

        assert!(!listener.add_toggle_hidden_class_event(EventType::Click, "", "submenu"));
        assert!(!listener.add_attribute_setting_event(
            EventType::Click,
            "",
            "dark",
            "toggle-btn",
            "root"
        ));
        assert!(!listener.add_callbacks_event(EventType::Click, "", vec![]));
    }

    #[test]
    fn test_registration_rejects_missing_elements() {
        let mut listener = EventsListener::new(sample_page());

        assert!(!listener.add_toggle_hidden_class_event(EventType::Click, "toggle-btn", "nope"));
        assert!(!listener.add_toggle_hidden_class_event(EventType::Click, "nope", "submenu"));
        assert_eq!(listener.handler_count(EventType::Click, "toggle-btn"), 0);
    }

    // ==================== Dispatch Tests ====================

    #[tokio::test]
    async fn test_toggle_hidden_class() {
        let document = sample_page();
        let mut listener = EventsListener::new(document.clone());
        assert!(listener.add_toggle_hidden_class_event(EventType::Click, "toggle-btn", "submenu"));

        assert!(submenu_hidden(&document));
        assert_eq!(listener.dispatch(EventType::Click, "toggle-btn").await, 1);
        assert!(!submenu_hidden(&document));
        listener.dispatch(EventType::Click, "toggle-btn").await;
        assert!(submenu_hidden(&document));
    }

    #[tokio::test]
    async fn test_set_attribute() {
        let document = sample_page();
        let mut listener = EventsListener::new(document.clone());
        assert!(listener.add_attribute_setting_event(
            EventType::Click,
            "data-theme",
            "dark",
            "toggle-btn",
            "root"
        ));

        listener.dispatch(EventType::Click, "toggle-btn").await;

        assert_eq!(
            document.lock().unwrap().root.get_attribute("data-theme"),
            Some("dark")
        );
    }

    #[tokio::test]
    async fn test_callbacks_run_in_order() {
        let mut listener = EventsListener::new(sample_page());
        let calls = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&calls);
        let second = Arc::clone(&calls);
        assert!(listener.add_callbacks_event(
            EventType::Click,
            "toggle-btn",
            vec![
                callback(move || {
                    let calls = Arc::clone(&first);
                    async move { calls.lock().unwrap().push("first") }
                }),
                callback(move || {
                    let calls = Arc::clone(&second);
                    async move { calls.lock().unwrap().push("second") }
                }),
            ],
        ));

        listener.dispatch(EventType::Click, "toggle-btn").await;

        assert_eq!(*calls.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_actions_accumulate_per_actioner() {
        let document = sample_page();
        let mut listener = EventsListener::new(document.clone());
        let counter = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&counter);

        listener.add_toggle_hidden_class_event(EventType::Click, "toggle-btn", "submenu");
        listener.add_callbacks_event(
            EventType::Click,
            "toggle-btn",
            vec![callback(move || {
                let counted = Arc::clone(&counted);
                async move {
                    counted.fetch_add(1, Ordering::SeqCst);
                }
            })],
        );

        assert_eq!(listener.handler_count(EventType::Click, "toggle-btn"), 2);
        assert_eq!(listener.dispatch(EventType::Click, "toggle-btn").await, 2);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!submenu_hidden(&document));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_actioner() {
        let listener = EventsListener::new(sample_page());
        assert_eq!(listener.dispatch(EventType::Click, "submenu").await, 0);
    }

    #[tokio::test]
    async fn test_dispatch_after_receiver_removed() {
        let document = sample_page();
        let mut listener = EventsListener::new(document.clone());
        listener.add_toggle_hidden_class_event(EventType::Click, "toggle-btn", "submenu");

        document
            .lock()
            .unwrap()
            .elements
            .retain(|e| e.id.as_deref() != Some("submenu"));

        assert_eq!(listener.dispatch(EventType::Click, "toggle-btn").await, 1);
    }
}
