// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// List of all errors.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A paper width was zero or negative.
    ///
    /// The width is replaced by 1.0.
    InvalidWidth,

    /// A paper height was zero or negative.
    ///
    /// The height is replaced by 1.0.
    InvalidHeight,

    /// A query that needs an open device was made without one.
    DeviceNotReady,

    /// The backend failed to allocate a surface.
    ///
    /// The device is not usable after this.
    SurfaceCreation,

    /// The backend failed to create a drawing context on a new surface.
    ContextCreation,

    /// The backend reported a non-success status while finishing a surface.
    ///
    /// Finalization has still been done.
    BackendStatus(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::InvalidWidth => {
                write!(f, "width <= 0")
            }
            Error::InvalidHeight => {
                write!(f, "height <= 0")
            }
            Error::DeviceNotReady => {
                write!(f, "no device is open")
            }
            Error::SurfaceCreation => {
                write!(f, "could not create svg surface")
            }
            Error::ContextCreation => {
                write!(f, "could not create drawing context")
            }
            Error::BackendStatus(ref msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}


/// A receiver of non-fatal errors.
///
/// Operations that can correct themselves (clamping a size, returning a
/// fallback value, finishing a surface anyway) do not fail. Instead, they
/// report what went wrong here and carry on.
pub trait ErrorHandler {
    /// Reports an `error` raised by `routine`.
    fn report(&mut self, routine: &'static str, error: Error);
}

/// Forwards all errors to the `log` crate.
#[derive(Clone, Copy, Default, Debug)]
pub struct LogErrors;

impl ErrorHandler for LogErrors {
    fn report(&mut self, routine: &'static str, error: Error) {
        log::error!("{}: {}.", routine, error);
    }
}

impl ErrorHandler for Vec<Error> {
    fn report(&mut self, _: &'static str, error: Error) {
        self.push(error);
    }
}

impl<H: ErrorHandler + ?Sized> ErrorHandler for &mut H {
    fn report(&mut self, routine: &'static str, error: Error) {
        (**self).report(routine, error);
    }
}
