// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use rgb::RGBA8;

use crate::{
    paper, Backend, DeviceGeometry, Error, ErrorHandler, LogErrors, PaperSize, SvgBackend,
    SvgDevice, Units,
};

/// A plotting session.
///
/// Holds the requested paper size and the currently open device.
/// All errors are reported to the session's [`ErrorHandler`].
pub struct Context<H: ErrorHandler = LogErrors, B: Backend + Clone = SvgBackend> {
    prefix: String,
    paper: Option<PaperSize>,
    backend: B,
    device: Option<SvgDevice<B>>,
    errors: H,
}

impl Context {
    /// Creates a session writing SVG files named after `prefix`.
    ///
    /// Errors are logged.
    pub fn new(prefix: &str) -> Self {
        Context::with_backend(prefix, SvgBackend, LogErrors)
    }
}

impl<H: ErrorHandler, B: Backend + Clone> Context<H, B> {
    /// Creates a session with a custom backend and error handler.
    pub fn with_backend(prefix: &str, backend: B, errors: H) -> Self {
        Context {
            prefix: prefix.to_string(),
            paper: None,
            backend,
            device: None,
            errors,
        }
    }

    /// Sets the paper size used by the next opened device.
    ///
    /// The size stays in effect for all following devices
    /// until [`Context::clear_paper_size`] is called.
    pub fn set_paper_size(&mut self, units: Units, width: f64, height: f64) {
        self.paper = Some(PaperSize::new(units, width, height, &mut self.errors));
    }

    /// Same as [`Context::set_paper_size`], but takes `f32`.
    pub fn set_paper_size_f32(&mut self, units: Units, width: f32, height: f32) {
        self.paper = Some(PaperSize::from_f32(units, width, height, &mut self.errors));
    }

    /// Drops the requested paper size, so devices open at their default size.
    pub fn clear_paper_size(&mut self) {
        self.paper = None;
    }

    /// Returns the requested paper size, if any.
    pub fn specified_paper_size(&self) -> Option<&PaperSize> {
        self.paper.as_ref()
    }

    /// Returns the size of the open device in `units`.
    ///
    /// Returns `(1.0, 1.0)` when no device is open.
    pub fn paper_size(&mut self, units: Units) -> (f64, f64) {
        let device = self.device.as_ref().map(|d| d.geometry());
        paper::paper_size(device, units, &mut self.errors)
    }

    /// Same as [`Context::paper_size`], but returns `f32`.
    pub fn paper_size_f32(&mut self, units: Units) -> (f32, f32) {
        let device = self.device.as_ref().map(|d| d.geometry());
        paper::paper_size_f32(device, units, &mut self.errors)
    }

    /// Opens a new device, closing the current one first.
    pub fn open_device(&mut self, vertical: bool) -> Result<(), Error> {
        self.close_device();

        let res = SvgDevice::open(self.backend.clone(), &self.prefix, self.paper.as_ref(), vertical);
        match res {
            Ok(device) => {
                self.device = Some(device);
                Ok(())
            }
            Err(e) => {
                self.errors.report("open_device", e.clone());
                Err(e)
            }
        }
    }

    /// Checks that a device is open.
    pub fn is_device_ready(&self) -> bool {
        self.device.is_some()
    }

    /// Returns the geometry of the open device.
    pub fn device(&self) -> Option<&DeviceGeometry> {
        self.device.as_ref().map(|d| d.geometry())
    }

    /// Fills the current page of the open device with `color`.
    pub fn fill_background(&mut self, color: RGBA8) {
        match self.device {
            Some(ref mut device) => device.fill_background(color),
            None => self.errors.report("fill_background", Error::DeviceNotReady),
        }
    }

    /// Flushes the open device.
    pub fn flush(&mut self) {
        if let Some(ref mut device) = self.device {
            device.flush();
        }
    }

    /// Starts a new page on the open device.
    pub fn change_page(&mut self) -> Result<(), Error> {
        let device = match self.device {
            Some(ref mut device) => device,
            None => {
                self.errors.report("change_page", Error::DeviceNotReady);
                return Err(Error::DeviceNotReady);
            }
        };

        device.change_page(&mut self.errors).map_err(|e| {
            self.errors.report("change_page", e.clone());
            e
        })
    }

    /// Closes the open device, if any.
    pub fn close_device(&mut self) {
        if let Some(device) = self.device.take() {
            if let Err(e) = device.close() {
                self.errors.report("close_device", e);
            }
        }
    }

    /// Returns the error handler.
    pub fn errors(&self) -> &H {
        &self.errors
    }
}

impl<H: ErrorHandler, B: Backend + Clone> Drop for Context<H, B> {
    fn drop(&mut self) {
        self.close_device();
    }
}
