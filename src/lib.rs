//! Session-local settings model behind the code generator's settings dialog.

pub mod config;
pub mod dialog;
pub mod editor;
pub mod model;
pub mod settings;
pub mod store;
pub mod text;

pub use config::DeploymentConfig;
pub use dialog::SettingsDialog;
pub use editor::{EditorEvent, EditorOutcome, SettingsEditor};
pub use settings::{EditorTheme, ParseEditorThemeError, Settings, SettingsField};
pub use store::{SettingsHandle, SettingsStore, SubscriptionId};
