//! udev-backed libinput event source.
//!
//! libinput enumerates and monitors every input device on a seat and asks
//! us to open the device nodes through [`RestrictedInterface`]. Events are
//! snapshotted into [`RawEvent`]s and released immediately.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::OwnedFd;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::time::Duration;

use input::event::keyboard::{KeyState, KeyboardEvent, KeyboardEventTrait};
use input::event::pointer::{Axis, ButtonState, PointerEvent, PointerScrollEvent};
use input::{Event, Libinput, LibinputInterface};

use crate::config::DEFAULT_SEAT;
use crate::error::{Error, Result};
use crate::event::NormalizedEvent;
use crate::normalize::{self, EventSource, RawEvent};

/// Open a device node on behalf of libinput.
///
/// The access mode bits of `flags` select read/write access, the remaining
/// bits are passed to `open(2)` unchanged.
pub fn open_device(path: &Path, flags: i32) -> io::Result<OwnedFd> {
    let access = flags & libc::O_ACCMODE;

    OpenOptions::new()
        .read(access == libc::O_RDONLY || access == libc::O_RDWR)
        .write(access == libc::O_WRONLY || access == libc::O_RDWR)
        .custom_flags(flags)
        .open(path)
        .map(OwnedFd::from)
}

/// Device open/close callbacks handed to libinput.
#[derive(Debug, Default)]
pub struct RestrictedInterface;

impl LibinputInterface for RestrictedInterface {
    fn open_restricted(&mut self, path: &Path, flags: i32) -> std::result::Result<OwnedFd, i32> {
        match open_device(path, flags) {
            Ok(fd) => {
                log::debug!("opened {}", path.display());
                Ok(fd)
            }
            Err(e) => {
                let errno = e.raw_os_error().unwrap_or(libc::EIO);
                match Error::from_open(path, e) {
                    err @ Error::PermissionDenied(_) => log::warn!("{}", err),
                    err => log::debug!("{}", err),
                }
                Err(errno)
            }
        }
    }

    fn close_restricted(&mut self, fd: OwnedFd) {
        drop(File::from(fd));
    }
}

/// Binding of an input backend to a udev seat.
trait SeatBinding {
    fn assign_seat(&mut self, seat: &str) -> bool;
}

impl SeatBinding for Libinput {
    fn assign_seat(&mut self, seat: &str) -> bool {
        self.udev_assign_seat(seat).is_ok()
    }
}

/// Hand back `backend` only if it was bound to `seat`; release it otherwise.
fn bind_seat<B: SeatBinding>(mut backend: B, seat: &str) -> Result<B> {
    if backend.assign_seat(seat) {
        Ok(backend)
    } else {
        Err(Error::InitFailed(format!(
            "seat assignment failed for {}",
            seat
        )))
    }
}

fn axis_value<E: PointerScrollEvent>(event: &E, axis: Axis) -> Option<f64> {
    if event.has_axis(axis) {
        Some(event.scroll_value(axis))
    } else {
        None
    }
}

/// Take what the normalizer needs out of a libinput event.
fn snapshot(event: &Event) -> RawEvent {
    match event {
        Event::Keyboard(KeyboardEvent::Key(ev)) => RawEvent::Keyboard {
            key: ev.key(),
            pressed: matches!(ev.key_state(), KeyState::Pressed),
        },
        Event::Pointer(PointerEvent::Button(ev)) => RawEvent::PointerButton {
            button: ev.button(),
            pressed: matches!(ev.button_state(), ButtonState::Pressed),
        },
        Event::Pointer(PointerEvent::ScrollWheel(ev)) => RawEvent::PointerScroll {
            vertical: axis_value(ev, Axis::Vertical),
            horizontal: axis_value(ev, Axis::Horizontal),
        },
        _ => RawEvent::Other,
    }
}

/// An input context bound to one seat.
///
/// Dropping the context releases libinput and its udev monitor.
pub struct Context {
    libinput: Libinput,
    seat: String,
}

impl Context {
    /// Create a context on the default seat.
    pub fn init() -> Result<Self> {
        Self::with_seat(DEFAULT_SEAT)
    }

    /// Create a context and bind it to `seat`.
    pub fn with_seat(seat: &str) -> Result<Self> {
        let libinput = Libinput::new_with_udev(RestrictedInterface);
        let libinput = bind_seat(libinput, seat)?;
        log::info!("listening for input on {}", seat);

        Ok(Self {
            libinput,
            seat: seat.to_string(),
        })
    }

    pub fn seat(&self) -> &str {
        &self.seat
    }

    /// Block until the next qualifying event.
    pub fn wait_for_event(&mut self) -> NormalizedEvent {
        normalize::wait_for_event(self)
    }

    /// Wait at most `timeout` for the next qualifying event.
    pub fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<NormalizedEvent>> {
        normalize::next_event(self, timeout)
    }
}

impl EventSource for Context {
    fn wait_readable(&mut self, timeout: Option<Duration>) -> Result<bool> {
        let timeout_ms = timeout.map_or(-1, |t| t.as_millis().min(i32::MAX as u128) as i32);
        let mut pfd = libc::pollfd {
            fd: self.libinput.as_raw_fd(),
            events: libc::POLLIN,
            revents: 0,
        };

        let ret = unsafe { libc::poll(&mut pfd, 1, timeout_ms) };
        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(false);
            }
            return Err(Error::Poll(err));
        }

        Ok(ret > 0)
    }

    fn dispatch(&mut self) -> Result<()> {
        self.libinput.dispatch().map_err(Error::Dispatch)
    }

    fn next_raw(&mut self) -> Option<RawEvent> {
        // The libinput event is destroyed when `event` drops.
        self.libinput.next().map(|event| snapshot(&event))
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        log::debug!("releasing input context on {}", self.seat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeBackend {
        accept: bool,
        dropped: Rc<Cell<bool>>,
    }

    impl SeatBinding for FakeBackend {
        fn assign_seat(&mut self, _seat: &str) -> bool {
            self.accept
        }
    }

    impl Drop for FakeBackend {
        fn drop(&mut self) {
            self.dropped.set(true);
        }
    }

    #[test]
    fn test_seat_failure_yields_no_context() {
        let dropped = Rc::new(Cell::new(false));
        let backend = FakeBackend {
            accept: false,
            dropped: dropped.clone(),
        };

        let result = bind_seat(backend, "seat0");
        assert!(matches!(result, Err(Error::InitFailed(_))));
        assert!(dropped.get());
    }

    #[test]
    fn test_seat_success_returns_backend() {
        let dropped = Rc::new(Cell::new(false));
        let backend = FakeBackend {
            accept: true,
            dropped: dropped.clone(),
        };

        let bound = bind_seat(backend, "seat0").unwrap();
        assert!(!dropped.get());
        drop(bound);
        assert!(dropped.get());
    }

    #[test]
    fn test_open_device_modes() {
        let path = Path::new("/dev/null");
        assert!(open_device(path, libc::O_RDONLY).is_ok());
        assert!(open_device(path, libc::O_RDWR | libc::O_NONBLOCK | libc::O_CLOEXEC).is_ok());
    }

    #[test]
    fn test_open_missing_device_returns_errno() {
        let mut iface = RestrictedInterface;
        let result = iface.open_restricted(Path::new("/dev/input/does-not-exist"), libc::O_RDONLY);
        assert_eq!(result.err(), Some(libc::ENOENT));
    }

    #[test]
    fn test_close_restricted_releases_fd() {
        let mut iface = RestrictedInterface;
        let fd = iface
            .open_restricted(Path::new("/dev/null"), libc::O_RDONLY)
            .unwrap();
        iface.close_restricted(fd);
    }
}
