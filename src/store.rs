use crate::settings::Settings;

/// Read/update pair handed to anything that edits settings.
pub trait SettingsHandle {
    fn read(&self) -> Settings;

    /// Replaces the current value with `transform(previous)`.
    fn update<F>(&mut self, transform: F)
    where
        F: FnOnce(&Settings) -> Settings;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Settings)>;

/// Session-owned settings. Held by the app shell and lent to the editor by reference.
pub struct SettingsStore {
    current: Settings,
    revision: u64,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: initial,
            revision: 0,
            next_subscription: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    /// Number of updates committed since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a consumer that is re-rendered after every update.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Settings) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SettingsHandle for SettingsStore {
    fn read(&self) -> Settings {
        self.current.clone()
    }

    fn update<F>(&mut self, transform: F)
    where
        F: FnOnce(&Settings) -> Settings,
    {
        let next = transform(&self.current);
        let changed = self.current.changed_fields(&next);
        self.current = next;
        self.revision += 1;

        tracing::debug!(
            revision = self.revision,
            changed = ?changed,
            "settings updated"
        );

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.current);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::settings::EditorTheme;

    #[test]
    fn read_is_idempotent_without_updates() {
        let store = SettingsStore::new(Settings {
            open_ai_api_key: Some("abc".to_string()),
            ..Settings::default()
        });

        assert_eq!(store.read(), store.read());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn update_applies_against_latest_value() {
        let mut store = SettingsStore::default();
        store.update(|s| Settings {
            is_image_generation_enabled: !s.is_image_generation_enabled,
            ..s.clone()
        });
        store.update(|s| Settings {
            is_image_generation_enabled: !s.is_image_generation_enabled,
            ..s.clone()
        });

        assert!(store.current().is_image_generation_enabled);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn subscribers_see_each_committed_value_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = SettingsStore::default();

        let first = Rc::clone(&seen);
        store.subscribe(move |s| first.borrow_mut().push(("first", s.editor_theme)));
        let second = Rc::clone(&seen);
        store.subscribe(move |s| second.borrow_mut().push(("second", s.editor_theme)));

        store.update(|s| Settings {
            editor_theme: EditorTheme::Espresso,
            ..s.clone()
        });

        assert_eq!(
            *seen.borrow(),
            vec![
                ("first", EditorTheme::Espresso),
                ("second", EditorTheme::Espresso),
            ]
        );
    }

    #[test]
    fn unsubscribed_consumers_are_not_notified() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = SettingsStore::default();

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);
        store.update(Settings::clone);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update(Settings::clone);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.revision(), 2);
    }
}
