//! Event loop, handler trait and cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::Result;
use crate::event::NormalizedEvent;
use crate::normalize::{EventSource, normalize};

/// How long one loop iteration waits for input before rechecking the token.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Trait for consuming normalized events.
pub trait MacroHandler {
    /// Called once per qualifying input event.
    fn handle_event(&mut self, event: &NormalizedEvent);
}

/// Implement MacroHandler for closures.
impl<F> MacroHandler for F
where
    F: FnMut(&NormalizedEvent),
{
    fn handle_event(&mut self, event: &NormalizedEvent) {
        self(event);
    }
}

/// Shared stop flag for the event loop.
///
/// Cloning yields a handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop after its current iteration.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Cancel this token when the process receives an interrupt.
    ///
    /// The handler only flips the flag. Only one handler can be installed
    /// per process.
    pub fn install_ctrlc(&self) -> Result<()> {
        let token = self.clone();
        ctrlc::set_handler(move || token.cancel())?;
        Ok(())
    }
}

/// Feed events from `source` to `handler` until `token` is cancelled.
///
/// Each iteration waits up to [`POLL_INTERVAL`] for input, then drains every
/// queued event. Events still queued when the token is cancelled may be lost.
pub fn run<S, H>(source: &mut S, token: &CancellationToken, handler: &mut H) -> Result<()>
where
    S: EventSource + ?Sized,
    H: MacroHandler + ?Sized,
{
    log::debug!("event loop started");

    while !token.is_cancelled() {
        if !source.wait_readable(Some(POLL_INTERVAL))? {
            continue;
        }

        source.dispatch()?;
        while let Some(raw) = source.next_raw() {
            if let Some(event) = normalize(&raw) {
                handler.handle_event(&event);
            }
        }
    }

    log::debug!("event loop stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::normalize::RawEvent;
    use crate::normalize::tests::MockSource;

    /// Cancels the token once its batches run out.
    struct CancelWhenEmpty {
        inner: MockSource,
        token: CancellationToken,
    }

    impl EventSource for CancelWhenEmpty {
        fn wait_readable(&mut self, timeout: Option<Duration>) -> Result<bool> {
            let ready = self.inner.wait_readable(timeout)?;
            if !ready {
                self.token.cancel();
            }
            Ok(ready)
        }

        fn dispatch(&mut self) -> Result<()> {
            self.inner.dispatch()
        }

        fn next_raw(&mut self) -> Option<RawEvent> {
            self.inner.next_raw()
        }
    }

    #[test]
    fn test_token_shared_between_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_run_drains_every_batch() {
        let token = CancellationToken::new();
        let mut source = CancelWhenEmpty {
            inner: MockSource::with_batches(vec![
                vec![
                    RawEvent::Keyboard {
                        key: 30,
                        pressed: true,
                    },
                    RawEvent::Other,
                    RawEvent::Keyboard {
                        key: 30,
                        pressed: false,
                    },
                ],
                vec![RawEvent::PointerScroll {
                    vertical: Some(15.0),
                    horizontal: None,
                }],
            ]),
            token: token.clone(),
        };

        let mut seen = Vec::new();
        run(&mut source, &token, &mut |event: &NormalizedEvent| {
            seen.push(event.kind)
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![
                EventKind::KeyPress,
                EventKind::KeyRelease,
                EventKind::ScrollVertical
            ]
        );
    }

    #[test]
    fn test_run_returns_immediately_when_cancelled() {
        let token = CancellationToken::new();
        token.cancel();

        let mut source = MockSource::with_batches(vec![vec![RawEvent::Keyboard {
            key: 29,
            pressed: true,
        }]]);
        let mut count = 0;
        run(&mut source, &token, &mut |_: &NormalizedEvent| count += 1).unwrap();

        assert_eq!(count, 0);
        assert_eq!(source.dispatch_calls, 0);
    }
}
