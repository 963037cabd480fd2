use std::{fmt, str::FromStr};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EDITOR_THEME_ENV: &str = "EDITOR_THEME";
pub const IMAGE_GENERATION_ENV: &str = "IMAGE_GENERATION_ENABLED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTheme {
    #[default]
    Cobalt,
    Espresso,
}

impl EditorTheme {
    /// Presentation order of the theme picker.
    pub const ALL: [EditorTheme; 2] = [EditorTheme::Cobalt, EditorTheme::Espresso];

    pub fn as_str(&self) -> &'static str {
        match self {
            EditorTheme::Cobalt => "cobalt",
            EditorTheme::Espresso => "espresso",
        }
    }
}

impl fmt::Display for EditorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown editor theme `{0}` (expected `cobalt` or `espresso`)")]
pub struct ParseEditorThemeError(pub String);

impl FromStr for EditorTheme {
    type Err = ParseEditorThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        EditorTheme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| ParseEditorThemeError(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    OpenAiApiKey,
    ScreenshotOneApiKey,
    AccessCode,
    ImageGenerationEnabled,
    EditorTheme,
}

impl SettingsField {
    pub const ALL: [SettingsField; 5] = [
        SettingsField::OpenAiApiKey,
        SettingsField::ScreenshotOneApiKey,
        SettingsField::AccessCode,
        SettingsField::ImageGenerationEnabled,
        SettingsField::EditorTheme,
    ];

    /// Stable id of the control bound to this field.
    pub fn control_id(&self) -> &'static str {
        match self {
            SettingsField::OpenAiApiKey => "openai-api-key",
            SettingsField::ScreenshotOneApiKey => "screenshot-one-api-key",
            SettingsField::AccessCode => "access-code",
            SettingsField::ImageGenerationEnabled => "image-generation",
            SettingsField::EditorTheme => "editor-theme",
        }
    }
}

/// Session preferences. Replaced as a whole on every edit, never patched in place.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub open_ai_api_key: Option<String>,
    pub screenshot_one_api_key: Option<String>,
    pub access_code: Option<String>,
    pub is_image_generation_enabled: bool,
    pub editor_theme: EditorTheme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            open_ai_api_key: None,
            screenshot_one_api_key: None,
            access_code: None,
            is_image_generation_enabled: true,
            editor_theme: EditorTheme::Cobalt,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Session defaults with the optional theme and image-generation overrides applied.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = lookup(EDITOR_THEME_ENV) {
            settings.editor_theme = raw
                .parse::<EditorTheme>()
                .with_context(|| format!("invalid {EDITOR_THEME_ENV}"))?;
        }

        if let Some(raw) = lookup(IMAGE_GENERATION_ENV) {
            settings.is_image_generation_enabled = raw
                .trim()
                .parse::<bool>()
                .with_context(|| format!("invalid {IMAGE_GENERATION_ENV} value `{raw}`"))?;
        }

        Ok(settings)
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).context("failed serializing settings")
    }

    pub fn changed_fields(&self, other: &Settings) -> Vec<SettingsField> {
        SettingsField::ALL
            .into_iter()
            .filter(|field| match field {
                SettingsField::OpenAiApiKey => self.open_ai_api_key != other.open_ai_api_key,
                SettingsField::ScreenshotOneApiKey => {
                    self.screenshot_one_api_key != other.screenshot_one_api_key
                }
                SettingsField::AccessCode => self.access_code != other.access_code,
                SettingsField::ImageGenerationEnabled => {
                    self.is_image_generation_enabled != other.is_image_generation_enabled
                }
                SettingsField::EditorTheme => self.editor_theme != other.editor_theme,
            })
            .collect()
    }
}

struct Redacted<'a>(&'a Option<String>);

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("None"),
            Some(raw) if raw.is_empty() => f.write_str("Some(\"\")"),
            Some(_) => f.write_str("Some(<redacted>)"),
        }
    }
}

// Credentials stay out of logs and panic messages.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("open_ai_api_key", &Redacted(&self.open_ai_api_key))
            .field("screenshot_one_api_key", &Redacted(&self.screenshot_one_api_key))
            .field("access_code", &Redacted(&self.access_code))
            .field("is_image_generation_enabled", &self.is_image_generation_enabled)
            .field("editor_theme", &self.editor_theme)
            .finish()
    }
}
