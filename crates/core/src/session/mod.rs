use crate::schema::{pick, AnimationConfig, AnimationSettings};

/// Editing-session context holding the last copied animation.
///
/// Owned by the editing surface and passed to whoever copies or pastes, so
/// the compiler and runtime stay free of shared state. Lives in memory only
/// and is gone when the session ends.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    copied: Option<AnimationSettings>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the animation subset of `config`, replacing any earlier copy.
    pub fn copy(&mut self, config: &AnimationConfig) {
        self.copied = Some(pick(config));
        tracing::debug!(%config, "copied animation");
    }

    /// The last copied settings. Pasting does not consume the value.
    pub fn paste(&self) -> Option<AnimationSettings> {
        self.copied.clone()
    }

    /// Pastes into `target`, returning `false` when nothing was copied yet.
    pub fn paste_into(&self, target: &mut AnimationConfig) -> bool {
        match self.paste() {
            Some(settings) => {
                target.paste(settings);
                true
            }
            None => false,
        }
    }

    pub fn has_copy(&self) -> bool {
        self.copied.is_some()
    }
}
