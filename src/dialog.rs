use crate::{
    editor::{EditorEvent, EditorOutcome, SettingsEditor},
    model::{DialogState, SettingsView},
    settings::Settings,
    store::SettingsHandle,
};

/// Open/closed visibility around a [`SettingsEditor`]. Closing never rolls back edits.
pub struct SettingsDialog {
    pub state: DialogState,
    editor: SettingsEditor,
}

impl SettingsDialog {
    pub fn new(editor: SettingsEditor) -> Self {
        Self {
            state: DialogState::Closed,
            editor,
        }
    }

    pub fn editor(&self) -> &SettingsEditor {
        &self.editor
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn view(&self, settings: &Settings) -> Option<SettingsView> {
        self.is_open().then(|| self.editor.view(settings))
    }

    pub fn dispatch<H>(&mut self, handle: &mut H, event: EditorEvent) -> EditorOutcome
    where
        H: SettingsHandle,
    {
        if !self.is_open() {
            tracing::warn!(state = self.state.label(), "dropping settings event");
            return EditorOutcome::Ignored;
        }

        let outcome = self.editor.handle(handle, event);
        if outcome == EditorOutcome::Close {
            self.close();
        }
        outcome
    }
}
