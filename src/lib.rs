//! # libmacro
//!
//! Linux input event normalization for macro scripts.
//!
//! Raw libinput events from every keyboard and mouse on a seat are reduced to
//! a [`NormalizedEvent`]: a key or mouse button press/release carrying its
//! code, or a vertical/horizontal wheel scroll carrying its magnitude in
//! degrees. Everything else (motion, touch, gestures, device hotplug) is
//! dropped.
//!
//! The crate also ships `toggle-sprint`, which turns Ctrl into a toggle for a
//! held F9 key on a virtual keyboard (see [`sprint`]).
//!
//! ## Quick Start
//!
//! ```no_run
//! use libmacro::EventKind;
//!
//! let mut context = libmacro::init().expect("no input context");
//! loop {
//!     let event = libmacro::wait_for_event(&mut context);
//!     match event.kind {
//!         EventKind::KeyPress => println!("key {} pressed", event.value),
//!         EventKind::ScrollVertical => println!("scrolled {} degrees", event.value),
//!         _ => {}
//!     }
//! }
//! ```
//!
//! ## Cancellable Loop
//!
//! ```no_run
//! use libmacro::{CancellationToken, Context, NormalizedEvent, run};
//!
//! let token = CancellationToken::new();
//! token.install_ctrlc()?;
//!
//! let mut context = Context::init()?;
//! run(&mut context, &token, &mut |event: &NormalizedEvent| println!("{:?}", event))?;
//! # Ok::<(), libmacro::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod hook;
pub mod normalize;
pub mod sprint;
pub mod state;

mod platform;

// Re-exports
pub use config::SprintConfig;
pub use error::{Error, Result};
pub use event::{EventKind, NormalizedEvent};
pub use hook::{CancellationToken, MacroHandler, run};
pub use normalize::{EventSource, RawEvent, next_event, normalize};
pub use platform::{Context, RestrictedInterface, VirtualKeyboard, open_device};
pub use sprint::{SPRINT_KEY, SprintToggle, SyntheticDevice};
pub use state::SprintState;

/// Create an input context on the default seat.
///
/// Returns `None` if udev/libinput could not be initialized or the seat could
/// not be assigned. The error is logged.
pub fn init() -> Option<Context> {
    match Context::init() {
        Ok(context) => Some(context),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}

/// Release a context created by [`init`]. Does nothing for `None`.
pub fn deinit(context: Option<Context>) {
    drop(context);
}

/// Block until the next key, mouse button or scroll event.
pub fn wait_for_event(context: &mut Context) -> NormalizedEvent {
    context.wait_for_event()
}
