use crate::settings::EditorTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    pub fn label(&self) -> &'static str {
        match self {
            DialogState::Closed => "Closed",
            DialogState::Open => "Open",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLink {
    pub text: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOption {
    pub value: EditorTheme,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Text {
        value: String,
        placeholder: &'static str,
    },
    Toggle {
        checked: bool,
    },
    Select {
        value: EditorTheme,
        display: String,
        options: Vec<ThemeOption>,
    },
}

/// One labeled form control, ready for a rendering layer to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
    pub link: Option<HelpLink>,
    /// Drawn inside a highlighted panel.
    pub emphasized: bool,
    pub kind: ControlKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub title: &'static str,
    pub controls: Vec<Control>,
    pub footer_action: &'static str,
}

impl SettingsView {
    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|control| control.id == id)
    }
}
