//! Classification of raw platform events into [`NormalizedEvent`]s.
//!
//! The platform layer turns each libinput event into a [`RawEvent`] snapshot
//! and releases the libinput event right away; everything here works on the
//! snapshot only.

use std::time::Duration;

use crate::error::Result;
use crate::event::NormalizedEvent;

/// A platform-neutral snapshot of one raw input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent {
    /// Keyboard key state change.
    Keyboard { key: u32, pressed: bool },
    /// Pointer button state change.
    PointerButton { button: u32, pressed: bool },
    /// Wheel scroll. An axis is `Some` only if the event carries it.
    PointerScroll {
        vertical: Option<f64>,
        horizontal: Option<f64>,
    },
    /// Anything the normalizer does not care about.
    Other,
}

/// Classify a raw event. Returns `None` for events that are not surfaced.
///
/// A scroll event with both axes reports only the vertical one. A scroll
/// event carrying neither axis is dropped.
pub fn normalize(raw: &RawEvent) -> Option<NormalizedEvent> {
    match *raw {
        RawEvent::Keyboard { key, pressed } => {
            let code = key as i32;
            Some(if pressed {
                NormalizedEvent::key_press(code)
            } else {
                NormalizedEvent::key_release(code)
            })
        }
        RawEvent::PointerButton { button, pressed } => {
            let code = button as i32;
            Some(if pressed {
                NormalizedEvent::mouse_press(code)
            } else {
                NormalizedEvent::mouse_release(code)
            })
        }
        RawEvent::PointerScroll {
            vertical,
            horizontal,
        } => match (vertical, horizontal) {
            (Some(v), _) => Some(NormalizedEvent::scroll_vertical(v as i32)),
            (None, Some(h)) => Some(NormalizedEvent::scroll_horizontal(h as i32)),
            (None, None) => {
                log::debug!("dropping scroll event without axis data");
                None
            }
        },
        RawEvent::Other => None,
    }
}

/// A queue of raw events backed by a pollable descriptor.
pub trait EventSource {
    /// Wait until the source has data to dispatch.
    ///
    /// `None` waits forever. Returns `Ok(false)` on timeout.
    fn wait_readable(&mut self, timeout: Option<Duration>) -> Result<bool>;

    /// Move pending kernel events into the internal queue.
    fn dispatch(&mut self) -> Result<()>;

    /// Pop the next queued event, if any.
    fn next_raw(&mut self) -> Option<RawEvent>;
}

/// Pop queued events until one normalizes.
fn drain_one<S: EventSource + ?Sized>(source: &mut S) -> Option<NormalizedEvent> {
    while let Some(raw) = source.next_raw() {
        if let Some(event) = normalize(&raw) {
            return Some(event);
        }
    }
    None
}

/// Wait at most `timeout` for the next qualifying event.
///
/// Events already queued are returned without waiting.
pub fn next_event<S: EventSource + ?Sized>(
    source: &mut S,
    timeout: Option<Duration>,
) -> Result<Option<NormalizedEvent>> {
    source.dispatch()?;
    if let Some(event) = drain_one(source) {
        return Ok(Some(event));
    }

    if !source.wait_readable(timeout)? {
        return Ok(None);
    }
    source.dispatch()?;
    Ok(drain_one(source))
}

/// Block until a qualifying event is available.
///
/// Errors from the source are logged and the wait continues.
pub fn wait_for_event<S: EventSource + ?Sized>(source: &mut S) -> NormalizedEvent {
    loop {
        match next_event(source, None) {
            Ok(Some(event)) => return event,
            Ok(None) => {}
            Err(e) => log::warn!("waiting for input failed: {}", e),
        }
    }
}
