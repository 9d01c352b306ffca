//! Ctrl-driven sprint toggle on a synthetic keyboard.
//!
//! Each press of left or right Ctrl flips the sprint state. Entering the
//! sprinting state holds [`SPRINT_KEY`] down on the virtual device, leaving it
//! releases the key. Every key event is followed by a `SYN_REPORT`, without
//! which the kernel never delivers the change.

use std::io;
use std::thread;
use std::time::Duration;

use evdev::{EventType, InputEvent, Key};

use crate::config::SprintConfig;
use crate::error::Error;
use crate::event::{EventKind, NormalizedEvent};
use crate::hook::MacroHandler;
use crate::state::SprintState;

/// Key held down while sprinting. Bind sprint to this key in game.
pub const SPRINT_KEY: Key = Key::KEY_F9;

const TOGGLE_KEYS: [Key; 2] = [Key::KEY_LEFTCTRL, Key::KEY_RIGHTCTRL];

// Keys that close a GUI in game: chat, pause menu, inventory, effects.
const GUI_CLOSE_KEYS: [Key; 4] = [Key::KEY_ENTER, Key::KEY_ESC, Key::KEY_E, Key::KEY_Z];

const SNEAK_KEYS: [Key; 2] = [Key::KEY_LEFTSHIFT, Key::KEY_RIGHTSHIFT];

/// A device that accepts raw input event records.
pub trait SyntheticDevice {
    /// Write a batch of events, in order.
    fn emit(&mut self, events: &[InputEvent]) -> io::Result<()>;
}

/// Sprint state machine bound to a synthetic device.
///
/// Dropping the toggle releases the sprint key if it is still held.
pub struct SprintToggle<D: SyntheticDevice> {
    device: D,
    state: SprintState,
    config: SprintConfig,
}

impl<D: SyntheticDevice> SprintToggle<D> {
    pub fn new(device: D, config: SprintConfig) -> Self {
        Self {
            device,
            state: SprintState::new(),
            config,
        }
    }

    pub fn is_sprinting(&self) -> bool {
        self.state.is_sprinting()
    }

    /// Flip the sprint state and update the sprint key to match.
    pub fn toggle(&mut self) -> bool {
        let sprinting = self.state.toggle();

        if sprinting {
            if self.config.quick_release {
                // Bedrock only sees a fresh press after it observed a release.
                self.emit_key(false);
                pause(self.config.repress_delay);
            }
            self.emit_key(true);
            log::info!("PRESS SPRINT");
        } else {
            self.emit_key(false);
            log::info!("RELEASE SPRINT");
        }

        sprinting
    }

    /// Briefly release and re-press the sprint key if it is held.
    pub fn quick_release(&mut self) {
        if !self.state.is_sprinting() {
            return;
        }

        self.emit_key(false);
        pause(self.config.repress_delay);
        self.emit_key(true);
        log::info!("QUICK RELEASE");
    }

    /// React to a key state change.
    pub fn handle_key(&mut self, code: u16, pressed: bool) {
        let key = Key::new(code);

        if pressed {
            if TOGGLE_KEYS.contains(&key) {
                self.toggle();
            }
            return;
        }

        if !self.config.quick_release || !self.state.is_sprinting() {
            return;
        }

        if GUI_CLOSE_KEYS.contains(&key) {
            pause(self.config.ui_close_delay);
            self.quick_release();
        } else if SNEAK_KEYS.contains(&key) {
            pause(self.config.sneak_delay);
            self.quick_release();
        }
    }

    /// Release the sprint key if held, then destroy the device.
    pub fn shutdown(mut self) {
        self.release_held();
    }

    fn release_held(&mut self) {
        if self.state.reset() {
            self.emit_key(false);
            log::info!("RELEASE SPRINT (shutdown)");
        }
    }

    fn emit_key(&mut self, pressed: bool) {
        let events = [
            InputEvent::new(EventType::KEY, SPRINT_KEY.code(), pressed as i32),
            // SYN_REPORT
            InputEvent::new(EventType::SYNCHRONIZATION, 0, 0),
        ];

        if let Err(e) = self.device.emit(&events) {
            log::warn!("{}", Error::WriteFailed(e));
        }
    }
}

impl<D: SyntheticDevice> MacroHandler for SprintToggle<D> {
    fn handle_event(&mut self, event: &NormalizedEvent) {
        let pressed = match event.kind {
            EventKind::KeyPress => true,
            EventKind::KeyRelease => false,
            _ => return,
        };

        if let Some(code) = event.code() {
            self.handle_key(code, pressed);
        }
    }
}

impl<D: SyntheticDevice> Drop for SprintToggle<D> {
    fn drop(&mut self) {
        self.release_held();
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
