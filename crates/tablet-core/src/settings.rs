use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Ro,
    En,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ro => "Română",
            Self::En => "English",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub job_updates: bool,
    pub academy_reminders: bool,
    pub license_expiry: bool,
    pub system_alerts: bool,
    pub sound_effects: bool,
    pub vibration: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            job_updates: true,
            academy_reminders: true,
            license_expiry: true,
            system_alerts: true,
            sound_effects: true,
            vibration: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceSettings {
    pub compact_mode: bool,
    pub show_animations: bool,
    pub auto_save: bool,
    pub quick_access: bool,
    pub tooltips: bool,
}

impl Default for InterfaceSettings {
    fn default() -> Self {
        Self {
            compact_mode: false,
            show_animations: true,
            auto_save: true,
            quick_access: true,
            tooltips: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySettings {
    pub high_contrast: bool,
    pub large_text: bool,
    pub reduced_motion: bool,
    pub screen_reader: bool,
    pub color_blind: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabletSettings {
    pub theme: Theme,
    pub language: Language,
    pub notifications: NotificationSettings,
    pub interface: InterfaceSettings,
    pub accessibility: AccessibilitySettings,
}

impl TabletSettings {
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// Whether the shell should play its entrance animation.
    pub fn animations_enabled(&self) -> bool {
        self.interface.show_animations && !self.accessibility.reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_defaults() {
        let mut settings = TabletSettings::default();
        settings.theme = Theme::Light;
        settings.notifications.vibration = true;
        settings.accessibility.large_text = true;

        settings.reset_to_defaults();

        assert_eq!(settings, TabletSettings::default());
        assert!(settings.notifications.sound_effects);
        assert!(!settings.notifications.vibration);
    }

    #[test]
    fn reduced_motion_disables_animations() {
        let mut settings = TabletSettings::default();
        assert!(settings.animations_enabled());
        settings.accessibility.reduced_motion = true;
        assert!(!settings.animations_enabled());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let settings: TabletSettings = toml::from_str(
            r#"
theme = "light"

[interface]
compact_mode = true
"#,
        )
        .expect("parse settings");

        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.interface.compact_mode);
        assert!(settings.interface.show_animations);
        assert_eq!(settings.language, Language::Ro);
    }
}
