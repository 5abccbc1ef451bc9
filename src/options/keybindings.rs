use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Prefix marking a binding that only fires with shift held.
const SHIFT_PREFIX: &str = "Shift+";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key chords.
///
/// A chord is a key code string (`"KeyA"`, `"Home"`), optionally prefixed
/// with `"Shift+"`.
pub struct KeybindingOptions {
    /// Maps action → chord string (e.g. `OpenMenu` → `"Shift+KeyA"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (chord string → action). Rebuilt on load.
    #[serde(skip)]
    chord_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::OpenMenu, "Shift+KeyA".into()),
            (KeyAction::ResetView, "Home".into()),
        ]);

        let mut opts = Self {
            bindings,
            chord_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (chord string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.chord_to_action.clear();
        for (action, chord) in &self.bindings {
            let _ = self.chord_to_action.insert(chord.clone(), *action);
        }
    }

    /// Look up the action for a key string and the current shift state.
    ///
    /// A shifted press only matches a `"Shift+"` chord; an unshifted press
    /// only matches a bare one.
    #[must_use]
    pub fn lookup(&self, key: &str, shift: bool) -> Option<KeyAction> {
        if shift {
            self.chord_to_action
                .get(&format!("{SHIFT_PREFIX}{key}"))
                .copied()
        } else {
            self.chord_to_action.get(key).copied()
        }
    }
}
