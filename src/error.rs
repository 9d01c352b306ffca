//! Error types for libmacro.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for libmacro operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or injecting input events.
#[derive(Debug, Error)]
pub enum Error {
    /// The udev/libinput context could not be created or bound to a seat.
    #[error("failed to initialize input context: {0}")]
    InitFailed(String),

    /// The operation requires elevated permissions.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A device node does not exist.
    #[error("device not found: {0}")]
    NotFound(String),

    /// A device node could not be opened for any other reason.
    #[error("failed to open {}: {source}", .path.display())]
    DeviceAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The virtual input device could not be created.
    #[error("failed to create virtual device: {0}")]
    DeviceCreate(String),

    /// Writing an event to the virtual device failed.
    #[error("failed to write event: {0}")]
    WriteFailed(#[source] io::Error),

    /// Waiting for input readiness failed.
    #[error("poll error: {0}")]
    Poll(#[source] io::Error),

    /// libinput could not process its queued kernel events.
    #[error("dispatch error: {0}")]
    Dispatch(#[source] io::Error),

    /// The interrupt handler could not be installed.
    #[error("failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl Error {
    /// Classify a failed open of `path`.
    pub fn from_open(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(format!(
                "cannot open {}. Make sure you're in the 'input' group.",
                path.display()
            )),
            io::ErrorKind::NotFound => Error::NotFound(path.display().to_string()),
            _ => Error::DeviceAccess {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_classification() {
        let path = Path::new("/dev/input/event3");

        let err = Error::from_open(path, io::Error::from_raw_os_error(libc::EACCES));
        assert!(matches!(err, Error::PermissionDenied(_)));

        let err = Error::from_open(path, io::Error::from_raw_os_error(libc::ENOENT));
        assert!(matches!(err, Error::NotFound(ref p) if p == "/dev/input/event3"));

        let err = Error::from_open(path, io::Error::from_raw_os_error(libc::EBUSY));
        assert!(matches!(err, Error::DeviceAccess { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = Error::InitFailed("seat assignment failed for seat0".into());
        assert_eq!(
            err.to_string(),
            "failed to initialize input context: seat assignment failed for seat0"
        );
    }
}
