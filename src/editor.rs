//! Translates settings-dialog input into whole-record updates.
//!
//! Every edit commits immediately through [`SettingsHandle::update`]; the
//! "Save" action only asks the surrounding dialog to close.

use crate::{
    config::DeploymentConfig,
    model::{Control, ControlKind, HelpLink, SettingsView, ThemeOption},
    settings::{EditorTheme, Settings, SettingsField},
    store::SettingsHandle,
    text::capitalize,
};

pub const TITLE: &str = "Settings";
pub const SAVE_LABEL: &str = "Save";

const SCREENSHOT_ONE_SIGNUP: HelpLink = HelpLink {
    text: "Get 100 screenshots/mo for free.",
    href: "https://screenshotone.com?via=screenshot-to-code",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    AccessCodeChanged(String),
    ImageGenerationToggled,
    OpenAiApiKeyChanged(String),
    ScreenshotOneApiKeyChanged(String),
    EditorThemeSelected(EditorTheme),
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Committed(SettingsField),
    /// The event targets a control that is not shown; nothing was written.
    Ignored,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsEditor {
    hosted: bool,
}

impl SettingsEditor {
    pub fn new(config: &DeploymentConfig) -> Self {
        Self {
            hosted: config.is_running_on_cloud,
        }
    }

    pub fn is_hosted(&self) -> bool {
        self.hosted
    }

    pub fn view(&self, settings: &Settings) -> SettingsView {
        let mut controls = Vec::with_capacity(SettingsField::ALL.len());

        if self.hosted {
            controls.push(Control {
                id: SettingsField::AccessCode.control_id(),
                label: "Access Code",
                description: Some("Buy an access code."),
                link: None,
                emphasized: true,
                kind: text_input(
                    &settings.access_code,
                    "Enter your Screenshot to Code access code",
                ),
            });
        }

        controls.push(Control {
            id: SettingsField::ImageGenerationEnabled.control_id(),
            label: "DALL-E Placeholder Image Generation",
            description: Some("More fun with it but if you want to save money, turn it off."),
            link: None,
            emphasized: false,
            kind: ControlKind::Toggle {
                checked: settings.is_image_generation_enabled,
            },
        });

        controls.push(Control {
            id: SettingsField::OpenAiApiKey.control_id(),
            label: "OpenAI API key",
            description: Some(
                "Only stored in your browser. Never stored on servers. Overrides your .env config.",
            ),
            link: None,
            emphasized: false,
            kind: text_input(&settings.open_ai_api_key, "OpenAI API key"),
        });

        controls.push(Control {
            id: SettingsField::ScreenshotOneApiKey.control_id(),
            label: "ScreenshotOne API key (optional - only needed if you want to use URLs \
                    directly instead of taking the screenshot yourself)",
            description: Some("Only stored in your browser. Never stored on servers."),
            link: Some(SCREENSHOT_ONE_SIGNUP),
            emphasized: false,
            kind: text_input(&settings.screenshot_one_api_key, "ScreenshotOne API key"),
        });

        controls.push(Control {
            id: SettingsField::EditorTheme.control_id(),
            label: "Editor Theme",
            description: None,
            link: None,
            emphasized: false,
            kind: ControlKind::Select {
                value: settings.editor_theme,
                display: capitalize(settings.editor_theme.as_str()),
                options: EditorTheme::ALL
                    .into_iter()
                    .map(|theme| ThemeOption {
                        value: theme,
                        label: capitalize(theme.as_str()),
                    })
                    .collect(),
            },
        });

        SettingsView {
            title: TITLE,
            controls,
            footer_action: SAVE_LABEL,
        }
    }

    /// Applies one user event. Each accepted edit issues exactly one update that
    /// copies the previous record and overrides a single field.
    pub fn handle<H>(&self, handle: &mut H, event: EditorEvent) -> EditorOutcome
    where
        H: SettingsHandle,
    {
        let field = match event {
            EditorEvent::AccessCodeChanged(_) if !self.hosted => return EditorOutcome::Ignored,
            EditorEvent::AccessCodeChanged(raw) => {
                handle.update(move |s| Settings {
                    access_code: Some(raw),
                    ..s.clone()
                });
                SettingsField::AccessCode
            }
            EditorEvent::ImageGenerationToggled => {
                handle.update(|s| Settings {
                    is_image_generation_enabled: !s.is_image_generation_enabled,
                    ..s.clone()
                });
                SettingsField::ImageGenerationEnabled
            }
            EditorEvent::OpenAiApiKeyChanged(raw) => {
                handle.update(move |s| Settings {
                    open_ai_api_key: Some(raw),
                    ..s.clone()
                });
                SettingsField::OpenAiApiKey
            }
            EditorEvent::ScreenshotOneApiKeyChanged(raw) => {
                handle.update(move |s| Settings {
                    screenshot_one_api_key: Some(raw),
                    ..s.clone()
                });
                SettingsField::ScreenshotOneApiKey
            }
            EditorEvent::EditorThemeSelected(theme) => {
                handle.update(move |s| Settings {
                    editor_theme: theme,
                    ..s.clone()
                });
                SettingsField::EditorTheme
            }
            EditorEvent::Save => return EditorOutcome::Close,
        };

        EditorOutcome::Committed(field)
    }
}

fn text_input(value: &Option<String>, placeholder: &'static str) -> ControlKind {
    ControlKind::Text {
        value: value.clone().unwrap_or_default(),
        placeholder,
    }
}
