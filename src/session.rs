//! Page session: the explicit context tying one page to its language manager
//! and event listeners, plus the line commands the binary accepts.

use crate::i18n::{LanguageManager, LocaleSource, PreferenceStore};
use crate::listeners::{
    initialize_site_listeners, EventType, EventsListener, NavBarMenuListenerManager,
};
use crate::page::{Page, SharedPage};
use crate::selectors::PAGE_THEME_ATTRIBUTE_NAME;
use crate::theme::ColorTheme;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (expected click, lang, show, metrics or quit)")]
    Unknown(String),

    #[error("Command '{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("Failed to encode output")]
    Encode(#[from] serde_json::Error),
}

/// A line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `click <element-id>`: fire a click on an element.
    Click(String),
    /// `lang <code>`: change language directly, bypassing the buttons.
    Language(String),
    /// `show`: print the page.
    Show,
    /// `metrics`: print the translation metrics.
    Metrics,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(CommandError::Empty)?;
        let argument = parts.next();

        match name {
            "click" => argument
                .map(|id| Command::Click(id.to_string()))
                .ok_or(CommandError::MissingArgument("click")),
            "lang" => argument
                .map(|code| Command::Language(code.to_string()))
                .ok_or(CommandError::MissingArgument("lang")),
            "show" => Ok(Command::Show),
            "metrics" => Ok(Command::Metrics),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quit,
}

pub struct PageSession {
    document: SharedPage,
    language_manager: Arc<LanguageManager>,
    listener: EventsListener,
}

impl PageSession {
    /// Build the manager and wire the nav bar for `page`.
    pub fn new(
        page: Page,
        source: LocaleSource,
        store: impl PreferenceStore + 'static,
        browser_locale: Option<&str>,
    ) -> Self {
        let document = page.into_shared();
        let language_manager = Arc::new(LanguageManager::new(
            source,
            store,
            document.clone(),
            browser_locale,
        ));

        let mut listener = EventsListener::new(document.clone());
        let navbar = NavBarMenuListenerManager::new(Arc::clone(&language_manager));
        initialize_site_listeners(&[&navbar], &mut listener);

        Self {
            document,
            language_manager,
            listener,
        }
    }

    /// Apply the initial language to the page, as on page load.
    pub async fn load(&self) -> bool {
        let translated = self.language_manager.refresh_translations().await;
        let language = self.language_manager.current_language();
        info!(
            "Page loaded in {} ({}), theme {:?}",
            language.name(),
            language.native_name(),
            self.current_theme()
        );
        translated
    }

    /// Theme named by the root `data-theme` attribute, if it is a known one.
    pub fn current_theme(&self) -> Option<ColorTheme> {
        let page = self
            .document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        page.root
            .get_attribute(PAGE_THEME_ATTRIBUTE_NAME)
            .and_then(ColorTheme::from_attribute_value)
    }

    pub fn language_manager(&self) -> &Arc<LanguageManager> {
        &self.language_manager
    }

    /// Copy of the page as it is now.
    pub fn snapshot(&self) -> Page {
        self.document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub async fn click(&self, element_id: &str) -> usize {
        self.listener.dispatch(EventType::Click, element_id).await
    }

    pub async fn execute(&self, command: Command) -> Result<Reply, CommandError> {
        let reply = match command {
            Command::Click(id) => {
                let actions = self.click(&id).await;
                Reply::Print(format!("#{}: {} action(s)", id, actions))
            }
            Command::Language(code) => {
                let translated = self
                    .language_manager
                    .update_language_translations(&code)
                    .await;
                Reply::Print(format!(
                    "language: {} (translated: {})",
                    self.language_manager.current_language(),
                    translated
                ))
            }
            Command::Show => Reply::Print(serde_json::to_string_pretty(&self.snapshot())?),
            Command::Metrics => Reply::Print(serde_json::to_string_pretty(
                &self.language_manager.metrics().report(),
            )?),
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }
}
