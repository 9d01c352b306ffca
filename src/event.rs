//! Event types produced by the normalizer.

/// The kind of a normalized input event.
///
/// Discriminants are stable (0..=5) so they can be handed across an FFI
/// boundary as a plain `int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum EventKind {
    /// A keyboard key was pressed. Value is the key code.
    KeyPress = 0,
    /// A keyboard key was released. Value is the key code.
    KeyRelease = 1,
    /// A pointer button was pressed. Value is the button code.
    MousePress = 2,
    /// A pointer button was released. Value is the button code.
    MouseRelease = 3,
    /// The vertical wheel moved. Value is in degrees, positive is down.
    ScrollVertical = 4,
    /// The horizontal wheel moved. Value is in degrees, positive is right.
    ScrollHorizontal = 5,
}

impl EventKind {
    /// Check if this kind carries a key or button code.
    pub fn is_press_or_release(&self) -> bool {
        !self.is_scroll()
    }

    /// Check if this kind carries a scroll magnitude.
    pub fn is_scroll(&self) -> bool {
        matches!(self, EventKind::ScrollVertical | EventKind::ScrollHorizontal)
    }
}

/// A simplified input event for macro scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedEvent {
    /// What happened.
    pub kind: EventKind,
    /// Key/button code, or signed scroll magnitude.
    pub value: i32,
}

impl NormalizedEvent {
    /// Create a new event.
    pub const fn new(kind: EventKind, value: i32) -> Self {
        Self { kind, value }
    }

    pub const fn key_press(code: i32) -> Self {
        Self::new(EventKind::KeyPress, code)
    }

    pub const fn key_release(code: i32) -> Self {
        Self::new(EventKind::KeyRelease, code)
    }

    pub const fn mouse_press(button: i32) -> Self {
        Self::new(EventKind::MousePress, button)
    }

    pub const fn mouse_release(button: i32) -> Self {
        Self::new(EventKind::MouseRelease, button)
    }

    pub const fn scroll_vertical(degrees: i32) -> Self {
        Self::new(EventKind::ScrollVertical, degrees)
    }

    pub const fn scroll_horizontal(degrees: i32) -> Self {
        Self::new(EventKind::ScrollHorizontal, degrees)
    }

    /// Check if this is a keyboard event.
    pub fn is_keyboard(&self) -> bool {
        matches!(self.kind, EventKind::KeyPress | EventKind::KeyRelease)
    }

    /// Check if this is a pointer button or wheel event.
    pub fn is_mouse(&self) -> bool {
        !self.is_keyboard()
    }

    /// The key or button code, if this is a press/release event.
    pub fn code(&self) -> Option<u16> {
        if self.kind.is_press_or_release() {
            u16::try_from(self.value).ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_discriminants() {
        assert_eq!(EventKind::KeyPress as i32, 0);
        assert_eq!(EventKind::KeyRelease as i32, 1);
        assert_eq!(EventKind::MousePress as i32, 2);
        assert_eq!(EventKind::MouseRelease as i32, 3);
        assert_eq!(EventKind::ScrollVertical as i32, 4);
        assert_eq!(EventKind::ScrollHorizontal as i32, 5);
    }

    #[test]
    fn test_code_only_for_press_release() {
        assert_eq!(NormalizedEvent::key_press(29).code(), Some(29));
        assert_eq!(NormalizedEvent::mouse_release(0x110).code(), Some(0x110));
        assert_eq!(NormalizedEvent::scroll_vertical(15).code(), None);
        assert_eq!(NormalizedEvent::scroll_horizontal(-15).code(), None);
    }

    #[test]
    fn test_event_categories() {
        assert!(NormalizedEvent::key_release(30).is_keyboard());
        assert!(!NormalizedEvent::key_release(30).is_mouse());
        assert!(NormalizedEvent::mouse_press(0x111).is_mouse());
        assert!(NormalizedEvent::scroll_vertical(-15).is_mouse());
    }
}
