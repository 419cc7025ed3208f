// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! SVG device implementation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, warn};
use rgb::RGBA8;
use xmlwriter::XmlWriter;

use crate::{filename_for_device, Backend, DeviceGeometry, Error, ErrorHandler, PaperSize, Surface};

/// Landscape width in points.
pub const DEFAULT_WIDTH: i32 = 612;
/// Landscape height in points. Gives a 4:3 aspect ratio.
pub const DEFAULT_HEIGHT: i32 = 459;
/// Points per millimeter.
pub const UNITS_PER_MM: f64 = 2.8346;
/// Points per pixel, so pixel resolution matches raster devices.
pub const UNITS_PER_PIXEL: f64 = 0.765;
/// Output file extension.
pub const EXTENSION: &str = ".svg";


/// Writes SVG surfaces to files.
#[derive(Clone, Copy, Default, Debug)]
pub struct SvgBackend;

impl Backend for SvgBackend {
    type Surface = SvgSurface;

    fn create_surface(&mut self, path: &Path, width: i32, height: i32) -> Option<SvgSurface> {
        if width < 0 || height < 0 {
            debug!("Cannot create a {}x{} surface.", width, height);
            return None;
        }

        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                debug!("Failed to create '{}' cause {}.", path.display(), e);
                return None;
            }
        };

        Some(SvgSurface {
            file: Some(BufWriter::new(file)),
            width,
            height,
            background: None,
        })
    }
}


/// A file-backed SVG surface.
///
/// Nothing is written until the surface is finished.
pub struct SvgSurface {
    file: Option<BufWriter<File>>,
    width: i32,
    height: i32,
    background: Option<RGBA8>,
}

impl SvgSurface {
    fn to_svg(&self) -> String {
        let mut xml = XmlWriter::new(xmlwriter::Options::default());
        xml.start_element("svg");
        xml.write_attribute("xmlns", "http://www.w3.org/2000/svg");
        xml.write_attribute_fmt("width", format_args!("{}pt", self.width));
        xml.write_attribute_fmt("height", format_args!("{}pt", self.height));
        xml.write_attribute_fmt("viewBox", format_args!("0 0 {} {}", self.width, self.height));
        xml.write_attribute("version", "1.1");

        if let Some(c) = self.background {
            xml.start_element("rect");
            xml.write_attribute("width", &self.width);
            xml.write_attribute("height", &self.height);
            xml.write_attribute_fmt("fill", format_args!("rgb({},{},{})", c.r, c.g, c.b));
            if c.a != 255 {
                xml.write_attribute("fill-opacity", &(c.a as f64 / 255.0));
            }
            xml.end_element();
        }

        xml.end_document()
    }
}

impl Surface for SvgSurface {
    fn create_context(&mut self) -> Result<(), String> {
        if self.file.is_some() {
            Ok(())
        } else {
            Err("the target surface has been finished".to_string())
        }
    }

    fn fill(&mut self, color: RGBA8) {
        self.background = Some(color);
    }

    fn flush(&mut self) {
        if let Some(ref mut file) = self.file {
            if let Err(e) = file.flush() {
                warn!("Failed to flush an SVG surface cause {}.", e);
            }
        }
    }

    fn finish(&mut self) -> Result<(), String> {
        let data = self.to_svg();
        let mut file = self.file.take()
            .ok_or_else(|| "the target surface has been finished".to_string())?;

        file.write_all(data.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| e.to_string())
    }
}


/// An open SVG device.
///
/// One file is written per page.
pub struct SvgDevice<B: Backend = SvgBackend> {
    backend: B,
    surface: Option<B::Surface>,
    prefix: String,
    page: u32,
    geometry: DeviceGeometry,
}

impl<B: Backend> SvgDevice<B> {
    /// Opens a device writing to files named after `prefix`.
    ///
    /// The surface size comes from `paper` when set. Otherwise, the default
    /// 4:3 size is used, in portrait orientation when `vertical` is set.
    pub fn open(
        mut backend: B,
        prefix: &str,
        paper: Option<&PaperSize>,
        vertical: bool,
    ) -> Result<Self, Error> {
        let mut geometry = DeviceGeometry {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            units_per_mm: UNITS_PER_MM,
            units_per_pixel: UNITS_PER_PIXEL,
            is_interactive: false,
            default_background_alpha: 0.0,
        };

        if let Some(paper) = paper {
            let (width, height) = paper.to_device_size(&geometry);
            geometry.width = width;
            geometry.height = height;
        } else if vertical {
            geometry.width = DEFAULT_HEIGHT;
            geometry.height = DEFAULT_WIDTH;
        }

        let path = filename_for_device(prefix, 0, EXTENSION);
        let mut surface = backend.create_surface(&path, geometry.width, geometry.height)
            .ok_or(Error::SurfaceCreation)?;
        surface.create_context().map_err(|_| Error::ContextCreation)?;

        debug!("Opened '{}' as {}x{}pt.", path.display(), geometry.width, geometry.height);

        Ok(SvgDevice {
            backend,
            surface: Some(surface),
            prefix: prefix.to_string(),
            page: 0,
            geometry,
        })
    }

    /// Returns the device geometry.
    pub fn geometry(&self) -> &DeviceGeometry {
        &self.geometry
    }

    /// Returns the current page number, starting from zero.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Checks that the device has a surface to draw on.
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Fills the current page with `color`.
    pub fn fill_background(&mut self, color: RGBA8) {
        if let Some(ref mut surface) = self.surface {
            surface.fill(color);
        }
    }

    /// Flushes the current page.
    pub fn flush(&mut self) {
        if let Some(ref mut surface) = self.surface {
            surface.flush();
        }
    }

    /// Finishes the current page and starts a new one of the same size.
    ///
    /// A failure to finish the old page is reported to `errors` and does not
    /// stop the page change. A failure to create the new surface or its
    /// context is returned. In the first case the device has no surface left.
    pub fn change_page(&mut self, errors: &mut dyn ErrorHandler) -> Result<(), Error> {
        if let Err(e) = self.finish_surface() {
            errors.report("change_page", e);
        }

        self.page += 1;

        let path = filename_for_device(&self.prefix, self.page, EXTENSION);
        let mut surface = self.backend
            .create_surface(&path, self.geometry.width, self.geometry.height)
            .ok_or(Error::SurfaceCreation)?;
        let context = surface.create_context();
        self.surface = Some(surface);
        context.map_err(|_| Error::ContextCreation)?;

        debug!("Started page {} in '{}'.", self.page, path.display());
        Ok(())
    }

    /// Finishes the current page and closes the device.
    ///
    /// A non-success backend status is returned after the surface has been
    /// finished and destroyed.
    pub fn close(mut self) -> Result<(), Error> {
        self.finish_surface()
    }

    fn finish_surface(&mut self) -> Result<(), Error> {
        match self.surface.take() {
            Some(mut surface) => surface.finish().map_err(Error::BackendStatus),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Units;

    #[test]
    fn svg_document() {
        let surface = SvgSurface {
            file: None,
            width: 283,
            height: 142,
            background: None,
        };

        let svg = surface.to_svg();
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"283pt\" height=\"142pt\" \
             viewBox=\"0 0 283 142\" version=\"1.1\"/>"
        ));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn svg_document_with_background() {
        let surface = SvgSurface {
            file: None,
            width: 10,
            height: 20,
            background: Some(RGBA8::new(255, 0, 0, 255)),
        };

        let svg = surface.to_svg();
        assert!(svg.contains("<rect width=\"10\" height=\"20\" fill=\"rgb(255,0,0)\"/>"));
        assert!(!svg.contains("fill-opacity"));
    }

    #[test]
    fn finished_surface() {
        let mut surface = SvgSurface {
            file: None,
            width: 10,
            height: 20,
            background: None,
        };

        assert!(surface.create_context().is_err());
        assert!(surface.finish().is_err());
    }

    #[test]
    fn negative_size() {
        let mut backend = SvgBackend;
        assert!(backend.create_surface(Path::new("unused.svg"), -1, 10).is_none());
    }

    #[test]
    fn paper_size_is_resolved_with_svg_density() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("paper");
        let paper = PaperSize::new(Units::Millimeters, 100.0, 50.0, &mut Vec::<Error>::new());
        let dev = SvgDevice::open(SvgBackend, prefix.to_str().unwrap(), Some(&paper), true).unwrap();
        assert_eq!((dev.geometry().width, dev.geometry().height), (283, 142));
        dev.close().unwrap();
    }
}
