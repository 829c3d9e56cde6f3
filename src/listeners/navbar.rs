//! Nav bar listeners: main menu toggle, submenus, language and theme buttons.

use crate::i18n::{Language, LanguageManager};
use crate::listeners::{callback, EventType, EventsListener, ListenerManager};
use crate::selectors::*;
use crate::theme::ColorTheme;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

pub struct NavBarMenuListenerManager {
    language_manager: Arc<LanguageManager>,
    submenu_map: HashMap<&'static str, &'static str>,
    language_map: HashMap<&'static str, Language>,
}

impl NavBarMenuListenerManager {
    pub fn new(language_manager: Arc<LanguageManager>) -> Self {
        let submenu_map = HashMap::from([
            (
                SAVE_SCHEDULE_SUBMENU_TOGGLE_BUTTON_ID,
                SAVE_SCHEDULE_AS_FILE_SUBMENU_ID,
            ),
            (
                HOW_TO_USE_REGEX_CONTAINER_TOGGLE_BUTTON_ID,
                HOW_TO_USE_REGEX_CONTAINER_ID,
            ),
            (
                CHANGE_PAGE_THEME_SUBMENU_TOGGLE_BUTTON_ID,
                CHANGE_PAGE_THEME_SUBMENU_ID,
            ),
            (
                CHANGE_PAGE_LANGUAGE_SUBMENU_TOGGLE_BUTTON_ID,
                CHANGE_PAGE_LANGUAGE_SUBMENU_ID,
            ),
        ]);

        let language_map = HashMap::from([
            (LANGUAGE_TRANSLATION_BUTTON_SPANISH_ID, Language::SPANISH),
            (LANGUAGE_TRANSLATION_BUTTON_ENGLISH_ID, Language::ENGLISH),
            (LANGUAGE_TRANSLATION_BUTTON_PORTUGUESE_ID, Language::PORTUGUESE),
            (LANGUAGE_TRANSLATION_BUTTON_FRENCH_ID, Language::FRENCH),
        ]);

        Self {
            language_manager,
            submenu_map,
            language_map,
        }
    }

    /// Container toggled by a submenu button, if any.
    pub fn submenu_receiver_id(&self, actioner_id: &str) -> Option<&'static str> {
        self.submenu_map.get(actioner_id).copied()
    }

    /// Language selected by a language button, if any.
    pub fn language_for_button(&self, actioner_id: &str) -> Option<Language> {
        self.language_map.get(actioner_id).copied()
    }

    fn initialize_main_menu_toggle_button(&self, listener: &mut EventsListener) {
        listener.add_toggle_hidden_class_event(
            EventType::Click,
            NAV_BAR_MENU_TOGGLE_BUTTON_ID,
            NAV_BAR_CONTENT_CONTAINER_ID,
        );
    }

    fn initialize_submenu_buttons(&self, listener: &mut EventsListener) {
        for button_id in buttons_with_class(listener, NAV_BAR_BUTTON_CLASS_NAME) {
            if let Some(receiver_id) = self.submenu_receiver_id(&button_id) {
                listener.add_toggle_hidden_class_event(EventType::Click, &button_id, receiver_id);
            }
        }
    }

    /// The regex help panel has its own close button inside the panel.
    fn initialize_close_buttons(&self, listener: &mut EventsListener) {
        let has_close_button = listener
            .document()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_id(HOW_TO_USE_REGEX_CONTAINER_CLOSE_BUTTON_ID);

        if has_close_button {
            listener.add_toggle_hidden_class_event(
                EventType::Click,
                HOW_TO_USE_REGEX_CONTAINER_CLOSE_BUTTON_ID,
                HOW_TO_USE_REGEX_CONTAINER_ID,
            );
        }
    }

    /// Each language button marks the root element with the language and then
    /// translates the page.
    fn initialize_change_language_buttons(&self, listener: &mut EventsListener) {
        let root_id = root_id(listener);

        for button_id in buttons_with_class(listener, CHANGE_PAGE_LANGUAGE_BUTTON_CLASS_NAME) {
            let Some(language) = self.language_for_button(&button_id) else {
                continue;
            };

            if let Some(root_id) = root_id.as_deref() {
                listener.add_attribute_setting_event(
                    EventType::Click,
                    HTML_LANGUAGE_TRANSLATION_ATTRIBUTE,
                    language.code(),
                    &button_id,
                    root_id,
                );
            }

            let manager = Arc::clone(&self.language_manager);
            listener.add_callbacks_event(
                EventType::Click,
                &button_id,
                vec![callback(move || {
                    let manager = Arc::clone(&manager);
                    async move {
                        manager.update_language_translations(language.code()).await;
                    }
                })],
            );
        }
    }

    fn initialize_change_page_color_theme_buttons(&self, listener: &mut EventsListener) {
        let Some(root_id) = root_id(listener) else {
            return;
        };

        for button_id in buttons_with_class(listener, CHANGE_THEME_BUTTON_CLASS_NAME) {
            if let Some(theme) = ColorTheme::from_button_id(&button_id) {
                listener.add_attribute_setting_event(
                    EventType::Click,
                    PAGE_THEME_ATTRIBUTE_NAME,
                    theme.attribute_value(),
                    &button_id,
                    &root_id,
                );
            }
        }
    }
}

impl ListenerManager for NavBarMenuListenerManager {
    fn initialize_listeners(&self, listener: &mut EventsListener) {
        self.initialize_main_menu_toggle_button(listener);
        self.initialize_submenu_buttons(listener);
        self.initialize_close_buttons(listener);
        self.initialize_change_language_buttons(listener);
        self.initialize_change_page_color_theme_buttons(listener);
        info!("Nav bar menu listeners active");
    }
}

fn buttons_with_class(listener: &EventsListener, class: &str) -> Vec<String> {
    listener
        .document()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .ids_by_class(class)
}

fn root_id(listener: &EventsListener) -> Option<String> {
    let root_id = listener
        .document()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .root_id()
        .map(str::to_string);

    if root_id.is_none() {
        warn!("Root element has no id; language and theme attributes will not be set");
    }
    root_id
}
