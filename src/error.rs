//! Error types for the driver
//!
//! Invalid display input (out-of-range positions, digits or characters) is
//! never an error: it is silently ignored. The only runtime failure is the
//! transport, reported through [`Error::Interface`].
//!
//! ## Error Types
//!
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO/timeout)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// The display may show stale or partially written content afterwards.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::interface::InterfaceError;
    use std::string::ToString;

    struct FailingInterface;

    impl DisplayInterface for FailingInterface {
        type Error = InterfaceError<(), ()>;

        fn select(&mut self, _active: bool) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transmit(&mut self, _bytes: &[u8], _timeout_ms: u32) -> Result<(), Self::Error> {
            Err(InterfaceError::Timeout)
        }
    }

    #[test]
    fn test_error_display() {
        let error: Error<FailingInterface> = Error::Interface(InterfaceError::Timeout);
        assert_eq!(error.to_string(), "Interface error: Timeout");
        assert_eq!(std::format!("{error:?}"), "Interface(Timeout)");
    }
}
