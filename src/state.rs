//! Sprint key state tracking.

/// Whether the synthetic sprint key is currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SprintState {
    sprinting: bool,
}

impl SprintState {
    /// Start in the released state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state and return the new value.
    #[inline]
    pub fn toggle(&mut self) -> bool {
        self.sprinting = !self.sprinting;
        self.sprinting
    }

    /// Force the released state. Returns whether the key was held.
    #[inline]
    pub fn reset(&mut self) -> bool {
        std::mem::take(&mut self.sprinting)
    }

    #[inline]
    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_parity() {
        for presses in 0..8 {
            let mut state = SprintState::new();
            for _ in 0..presses {
                state.toggle();
            }
            assert_eq!(state.is_sprinting(), presses % 2 == 1);
        }
    }

    #[test]
    fn test_reset() {
        let mut state = SprintState::new();
        assert!(!state.reset());

        state.toggle();
        assert!(state.reset());
        assert!(!state.is_sprinting());
    }
}
