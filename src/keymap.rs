use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Toggle,
    Reset,
    Quit,
}

/// A logical action bound to one or more physical keys
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBinding {
    keys: Vec<(KeyCode, KeyModifiers)>,
    help_key: &'static str,
    help: &'static str,
    enabled: bool,
}

impl KeyBinding {
    pub fn new(
        keys: Vec<(KeyCode, KeyModifiers)>,
        help_key: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            keys,
            help_key,
            help,
            enabled: true,
        }
    }

    /// Disabled bindings never match and are left out of the help line.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.enabled
            && self.keys.iter().any(|(code, modifiers)| {
                key.code == *code && key.modifiers.contains(*modifiers)
                    // plain bindings must not fire on ctrl/alt chords
                    && (!modifiers.is_empty()
                        || !key
                            .modifiers
                            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT))
            })
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn help_key(&self) -> &'static str {
        self.help_key
    }

    pub fn help(&self) -> &'static str {
        self.help
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub toggle: KeyBinding,
    pub reset: KeyBinding,
    pub quit: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle: KeyBinding::new(
                vec![(KeyCode::Char('s'), KeyModifiers::NONE)],
                "s",
                "start",
            ),
            reset: KeyBinding::new(
                vec![(KeyCode::Char('r'), KeyModifiers::NONE)],
                "r",
                "reset",
            ),
            quit: KeyBinding::new(
                vec![
                    (KeyCode::Char('c'), KeyModifiers::CONTROL),
                    (KeyCode::Char('q'), KeyModifiers::NONE),
                ],
                "q",
                "quit",
            ),
        }
    }
}

impl KeyMap {
    /// Quit is checked first so it wins over any overlapping binding.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        if self.quit.matches(key) {
            Some(Action::Quit)
        } else if self.reset.matches(key) {
            Some(Action::Reset)
        } else if self.toggle.matches(key) {
            Some(Action::Toggle)
        } else {
            None
        }
    }

    pub fn set_all_enabled(&mut self, enabled: bool) {
        self.toggle.set_enabled(enabled);
        self.reset.set_enabled(enabled);
        self.quit.set_enabled(enabled);
    }

    /// (key, description) pairs for every enabled binding, in display order.
    /// The toggle is labelled by what pressing it would do next.
    pub fn short_help(&self, running: bool) -> Vec<(&'static str, &'static str)> {
        let toggle_label = if running { "stop" } else { self.toggle.help() };

        [
            (&self.toggle, toggle_label),
            (&self.reset, self.reset.help()),
            (&self.quit, self.quit.help()),
        ]
        .into_iter()
        .filter(|(binding, _)| binding.enabled())
        .map(|(binding, label)| (binding.help_key(), label))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn default_bindings_resolve_actions() {
        let keymap = KeyMap::default();
        assert_eq!(keymap.action_for(&press('s')), Some(Action::Toggle));
        assert_eq!(keymap.action_for(&press('r')), Some(Action::Reset));
        assert_eq!(keymap.action_for(&press('q')), Some(Action::Quit));
        assert_eq!(keymap.action_for(&press('x')), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let keymap = KeyMap::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keymap.action_for(&ctrl_c), Some(Action::Quit));
        assert_eq!(keymap.action_for(&press('c')), None);
    }

    #[test]
    fn control_chords_do_not_trigger_plain_bindings() {
        let keymap = KeyMap::default();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let alt_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT);
        assert_eq!(keymap.action_for(&ctrl_s), None);
        assert_eq!(keymap.action_for(&alt_r), None);
    }

    #[test]
    fn disabled_binding_does_not_match() {
        let mut keymap = KeyMap::default();
        keymap.reset.set_enabled(false);
        assert_eq!(keymap.action_for(&press('r')), None);
        assert!(keymap.quit.enabled());
    }

    #[test]
    fn short_help_labels_toggle_by_running_state() {
        let keymap = KeyMap::default();
        assert_eq!(
            keymap.short_help(false),
            vec![("s", "start"), ("r", "reset"), ("q", "quit")]
        );
        assert_eq!(
            keymap.short_help(true),
            vec![("s", "stop"), ("r", "reset"), ("q", "quit")]
        );
    }

    #[test]
    fn short_help_is_empty_when_all_disabled() {
        let mut keymap = KeyMap::default();
        keymap.set_all_enabled(false);
        assert!(keymap.short_help(true).is_empty());
    }
}
