#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn page_class(self) -> &'static str {
        match self {
            Self::Light => "page theme-light",
            Self::Dark => "page theme-dark",
        }
    }

    pub fn toggle_label(self) -> String {
        match self {
            Self::Light => "Switch to dark theme".to_string(),
            Self::Dark => "Switch to light theme".to_string(),
        }
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    // Shows the theme the button switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_theme_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn toggle_flips_once_per_call() {
        let mut theme = Theme::default();
        theme.toggle();
        assert_eq!(theme, Theme::Dark);
        theme.toggle();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn double_toggle_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn variants_select_distinct_class_sets() {
        assert_ne!(Theme::Light.page_class(), Theme::Dark.page_class());
        assert!(Theme::Dark.page_class().contains("theme-dark"));
        assert!(Theme::Light.page_class().contains("theme-light"));
    }

    #[test]
    fn toggle_label_names_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }
}
