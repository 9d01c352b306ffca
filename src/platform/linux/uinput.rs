//! Virtual keyboard backed by `/dev/uinput`.

use std::io;

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, BusType, InputEvent, InputId, Key};

use crate::error::{Error, Result};
use crate::sprint::SyntheticDevice;

/// A uinput keyboard that can only produce one key.
///
/// The kernel removes the device when the uinput descriptor is closed,
/// which happens when this value drops.
pub struct VirtualKeyboard {
    device: VirtualDevice,
    key: Key,
}

impl VirtualKeyboard {
    /// Register a USB keyboard named `name` exposing only `key`.
    pub fn create(name: &str, key: Key) -> Result<Self> {
        let mut keys = AttributeSet::<Key>::new();
        keys.insert(key);

        let device = VirtualDeviceBuilder::new()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::PermissionDenied {
                    Error::PermissionDenied(format!(
                        "cannot open /dev/uinput: {}. Make sure /dev/uinput is accessible \
                         (you may need to be in the 'input' group or have appropriate udev rules).",
                        e
                    ))
                } else {
                    Error::DeviceCreate(format!("cannot open /dev/uinput: {}", e))
                }
            })?
            .name(name)
            .input_id(InputId::new(BusType::BUS_USB, 0x0000, 0x0000, 0))
            .with_keys(&keys)
            .map_err(|e| Error::DeviceCreate(format!("failed to add keys: {}", e)))?
            .build()
            .map_err(|e| Error::DeviceCreate(e.to_string()))?;

        log::info!("created virtual keyboard '{}' with key {:?}", name, key);
        Ok(Self { device, key })
    }

    pub fn key(&self) -> Key {
        self.key
    }
}

impl SyntheticDevice for VirtualKeyboard {
    fn emit(&mut self, events: &[InputEvent]) -> io::Result<()> {
        self.device.emit(events)
    }
}

impl Drop for VirtualKeyboard {
    fn drop(&mut self) {
        log::debug!("destroying virtual keyboard");
    }
}
