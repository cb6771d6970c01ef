//! Pointer and keyboard activation of a toggle-button region.

/// Keys that activate a button: the confirm key and the spacebar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActivationKey {
    Enter,
    Space,
}

impl ActivationKey {
    /// Classify a DOM `KeyboardEvent.key` value.
    ///
    /// Only `"Enter"` and `" "` are activation keys; everything else,
    /// including `"Spacebar"` and `"NumpadEnter"`, is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(ActivationKey::Enter),
            " " => Some(ActivationKey::Space),
            _ => None,
        }
    }
}

/// One discrete user interaction with the activation region.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Activation {
    /// Primary pointer click or tap
    Pointer,
    /// Keydown of an activation key
    Key {
        key: ActivationKey,
        /// Set for keydown events generated by holding the key
        repeat: bool,
    },
}

impl Activation {
    /// Build a keyboard activation from a raw key value, if the key activates.
    pub fn from_keydown(key: &str, repeat: bool) -> Option<Self> {
        ActivationKey::from_key(key).map(|key| Activation::Key { key, repeat })
    }

    /// Whether this interaction should toggle the control.
    ///
    /// Auto-repeat keydowns are not discrete activations.
    pub fn is_discrete(&self) -> bool {
        match self {
            Activation::Pointer => true,
            Activation::Key { repeat, .. } => !repeat,
        }
    }
}
