//! Linux platform implementation.
//!
//! - **libinput**: reads events from every device on a udev seat
//! - **uinput**: creates the virtual keyboard used for injection
//!
//! ## Permissions
//!
//! Reading devices needs access to `/dev/input/event*`, creating the virtual
//! keyboard needs write access to `/dev/uinput`:
//! ```bash
//! sudo usermod -aG input $USER
//! sudo groupadd -f uinput
//! sudo usermod -aG uinput $USER
//! echo 'KERNEL=="uinput", GROUP="uinput", MODE:="0660"' | sudo tee -a /etc/udev/rules.d/99-input.rules
//! # Then log out and back in
//! ```

mod libinput;
mod uinput;

pub use libinput::{Context, RestrictedInterface, open_device};
pub use uinput::VirtualKeyboard;
