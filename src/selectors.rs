//! Page selectors: element ids, class names and attribute names the site's
//! markup uses.

/// Class that hides an element.
pub const HIDDEN_STYLE_CLASS_NAME: &str = "hidden";
/// Root attribute the color themes are keyed on in CSS.
pub const PAGE_THEME_ATTRIBUTE_NAME: &str = "data-theme";
/// Attribute holding an element's translation key. Language buttons also set
/// it on the root element so CSS can react to the active language.
pub const HTML_LANGUAGE_TRANSLATION_ATTRIBUTE: &str = "data-i18n";

// Nav bar
pub const NAV_BAR_MENU_TOGGLE_BUTTON_ID: &str = "nav-list-content-toggle-btn";
pub const NAV_BAR_CONTENT_CONTAINER_ID: &str = "nav-list-content";
pub const NAV_BAR_BUTTON_CLASS_NAME: &str = "nav-list-btn";

// Submenus
pub const SAVE_SCHEDULE_SUBMENU_TOGGLE_BUTTON_ID: &str = "save-schedule-submenu-toggle-btn";
pub const SAVE_SCHEDULE_AS_FILE_SUBMENU_ID: &str = "save-schedule-as-file-submenu";

pub const HOW_TO_USE_REGEX_CONTAINER_TOGGLE_BUTTON_ID: &str = "how-to-use-regex-container-toggle-btn";
pub const HOW_TO_USE_REGEX_CONTAINER_ID: &str = "how-to-use-regex-container";
pub const HOW_TO_USE_REGEX_CONTAINER_CLOSE_BUTTON_ID: &str = "how-to-use-regex-close-btn";

pub const CHANGE_PAGE_THEME_SUBMENU_TOGGLE_BUTTON_ID: &str = "page-theme-selector-container-toggle-btn";
pub const CHANGE_PAGE_THEME_SUBMENU_ID: &str = "page-theme-selector-container";

pub const CHANGE_PAGE_LANGUAGE_SUBMENU_TOGGLE_BUTTON_ID: &str =
    "page-language-selector-container-toggle-btn";
pub const CHANGE_PAGE_LANGUAGE_SUBMENU_ID: &str = "page-language-selector-container";

// Theme buttons
pub const CHANGE_THEME_BUTTON_CLASS_NAME: &str = "theme-selector";
pub const COLOR_THEME_DEFAULT_ID: &str = "default-theme-btn";
pub const COLOR_THEME_LIGHT_ID: &str = "light-theme-btn";
pub const COLOR_THEME_DARK_ID: &str = "dark-theme-btn";
pub const COLOR_THEME_MATRIX_ID: &str = "matrix-theme-btn";
pub const COLOR_THEME_ARCTIC_ID: &str = "arctic-theme-btn";
pub const COLOR_THEME_CUTESY_ID: &str = "cutesy-theme-btn";
pub const COLOR_THEME_SOLARIS_ID: &str = "solaris-theme-btn";
pub const COLOR_THEME_NEBULA_ID: &str = "nebula-theme-btn";
pub const COLOR_THEME_TROPICAL_ID: &str = "tropical-theme-btn";

// Theme attribute values
pub const COLOR_THEME_ATTRIBUTE_VALUE_DEFAULT: &str = "default";
pub const COLOR_THEME_ATTRIBUTE_VALUE_LIGHT: &str = "light";
pub const COLOR_THEME_ATTRIBUTE_VALUE_DARK: &str = "dark";
pub const COLOR_THEME_ATTRIBUTE_VALUE_MATRIX: &str = "matrix";
pub const COLOR_THEME_ATTRIBUTE_VALUE_ARCTIC: &str = "arctic";
pub const COLOR_THEME_ATTRIBUTE_VALUE_CUTESY: &str = "cutesy";
pub const COLOR_THEME_ATTRIBUTE_VALUE_SOLARIS: &str = "solaris";
pub const COLOR_THEME_ATTRIBUTE_VALUE_NEBULA: &str = "nebula";
pub const COLOR_THEME_ATTRIBUTE_VALUE_TROPICAL: &str = "tropical";

// Language buttons
pub const CHANGE_PAGE_LANGUAGE_BUTTON_CLASS_NAME: &str = "language-selector";
pub const LANGUAGE_TRANSLATION_BUTTON_SPANISH_ID: &str = "spanish-language-option-btn";
pub const LANGUAGE_TRANSLATION_BUTTON_ENGLISH_ID: &str = "english-language-option-btn";
pub const LANGUAGE_TRANSLATION_BUTTON_PORTUGUESE_ID: &str = "portuguese-language-option-btn";
pub const LANGUAGE_TRANSLATION_BUTTON_FRENCH_ID: &str = "french-language-option-btn";
