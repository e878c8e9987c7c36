use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::app::Action;

/// A key combination
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Context for keybindings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Global,
    ClusterList,
}

/// Keybinding configuration
pub struct KeyBindings {
    bindings: HashMap<KeyContext, HashMap<KeyBinding, Action>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        // Global bindings
        let mut global = HashMap::new();
        global.insert(KeyBinding::new(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(KeyBinding::new(KeyCode::Esc), Action::GoBack);
        global.insert(KeyBinding::new(KeyCode::Char('r')), Action::Refresh);
        global.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        global.insert(KeyBinding::new(KeyCode::Char('q')), Action::Quit);
        bindings.insert(KeyContext::Global, global);

        // Cluster list bindings
        let mut list = HashMap::new();
        list.insert(KeyBinding::new(KeyCode::Char('j')), Action::CursorDown);
        list.insert(KeyBinding::new(KeyCode::Down), Action::CursorDown);
        list.insert(KeyBinding::new(KeyCode::Char('k')), Action::CursorUp);
        list.insert(KeyBinding::new(KeyCode::Up), Action::CursorUp);
        list.insert(KeyBinding::new(KeyCode::Char('v')), Action::ToggleView);
        list.insert(KeyBinding::new(KeyCode::Char(' ')), Action::ToggleSelect);
        list.insert(KeyBinding::new(KeyCode::Enter), Action::OpenDetail);
        list.insert(KeyBinding::new(KeyCode::Char('c')), Action::OpenCompare);
        list.insert(KeyBinding::new(KeyCode::Char('x')), Action::ClearSelection);
        bindings.insert(KeyContext::ClusterList, list);

        Self { bindings }
    }

    /// Look up action for key event in given context
    pub fn get_action(&self, context: KeyContext, key: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(key);

        // First check context-specific bindings
        if let Some(context_bindings) = self.bindings.get(&context) {
            if let Some(action) = context_bindings.get(&binding) {
                return Some(action.clone());
            }
        }

        // Fall back to global bindings
        self.bindings
            .get(&KeyContext::Global)?
            .get(&binding)
            .cloned()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_bindings() {
        let bindings = KeyBindings::new();
        let key = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE);
        assert_eq!(
            bindings.get_action(KeyContext::ClusterList, &key),
            Some(Action::ToggleView)
        );
    }

    #[test]
    fn test_global_fallback() {
        let bindings = KeyBindings::new();
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            bindings.get_action(KeyContext::ClusterList, &key),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unbound_key() {
        let bindings = KeyBindings::new();
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(bindings.get_action(KeyContext::Global, &key), None);
    }
}
