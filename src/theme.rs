//! Page color themes.
//!
//! Themes are pure CSS keyed on the root element's `data-theme` attribute, so
//! a theme is just the pair of its selector button id and attribute value.

use crate::selectors::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTheme {
    Default,
    Light,
    Dark,
    Matrix,
    Arctic,
    Cutesy,
    Solaris,
    Nebula,
    Tropical,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 9] = [
        ColorTheme::Default,
        ColorTheme::Light,
        ColorTheme::Dark,
        ColorTheme::Matrix,
        ColorTheme::Arctic,
        ColorTheme::Cutesy,
        ColorTheme::Solaris,
        ColorTheme::Nebula,
        ColorTheme::Tropical,
    ];

    /// Value written to the root `data-theme` attribute.
    pub fn attribute_value(self) -> &'static str {
        match self {
            ColorTheme::Default => COLOR_THEME_ATTRIBUTE_VALUE_DEFAULT,
            ColorTheme::Light => COLOR_THEME_ATTRIBUTE_VALUE_LIGHT,
            ColorTheme::Dark => COLOR_THEME_ATTRIBUTE_VALUE_DARK,
            ColorTheme::Matrix => COLOR_THEME_ATTRIBUTE_VALUE_MATRIX,
            ColorTheme::Arctic => COLOR_THEME_ATTRIBUTE_VALUE_ARCTIC,
            ColorTheme::Cutesy => COLOR_THEME_ATTRIBUTE_VALUE_CUTESY,
            ColorTheme::Solaris => COLOR_THEME_ATTRIBUTE_VALUE_SOLARIS,
            ColorTheme::Nebula => COLOR_THEME_ATTRIBUTE_VALUE_NEBULA,
            ColorTheme::Tropical => COLOR_THEME_ATTRIBUTE_VALUE_TROPICAL,
        }
    }

    /// Id of the nav bar button selecting this theme.
    pub fn button_id(self) -> &'static str {
        match self {
            ColorTheme::Default => COLOR_THEME_DEFAULT_ID,
            ColorTheme::Light => COLOR_THEME_LIGHT_ID,
            ColorTheme::Dark => COLOR_THEME_DARK_ID,
            ColorTheme::Matrix => COLOR_THEME_MATRIX_ID,
            ColorTheme::Arctic => COLOR_THEME_ARCTIC_ID,
            ColorTheme::Cutesy => COLOR_THEME_CUTESY_ID,
            ColorTheme::Solaris => COLOR_THEME_SOLARIS_ID,
            ColorTheme::Nebula => COLOR_THEME_NEBULA_ID,
            ColorTheme::Tropical => COLOR_THEME_TROPICAL_ID,
        }
    }

    pub fn from_button_id(id: &str) -> Option<ColorTheme> {
        Self::ALL.into_iter().find(|theme| theme.button_id() == id)
    }

    pub fn from_attribute_value(value: &str) -> Option<ColorTheme> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.attribute_value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_button_id() {
        assert_eq!(
            ColorTheme::from_button_id("matrix-theme-btn"),
            Some(ColorTheme::Matrix)
        );
        assert_eq!(ColorTheme::from_button_id("matrix"), None);
    }

    #[test]
    fn test_from_attribute_value() {
        assert_eq!(
            ColorTheme::from_attribute_value("tropical"),
            Some(ColorTheme::Tropical)
        );
        assert_eq!(ColorTheme::from_attribute_value("Tropical"), None);
    }

    #[test]
    fn test_button_ids_and_values_are_unique() {
        let mut ids: Vec<_> = ColorTheme::ALL.iter().map(|t| t.button_id()).collect();
        let mut values: Vec<_> = ColorTheme::ALL.iter().map(|t| t.attribute_value()).collect();
        ids.sort();
        ids.dedup();
        values.sort();
        values.dedup();

        assert_eq!(ids.len(), ColorTheme::ALL.len());
        assert_eq!(values.len(), ColorTheme::ALL.len());
    }

    #[test]
    fn test_button_id_ends_with_theme_btn() {
        for theme in ColorTheme::ALL {
            assert_eq!(
                theme.button_id(),
                format!("{}-theme-btn", theme.attribute_value())
            );
        }
    }
}
