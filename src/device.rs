// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use rgb::RGBA8;

/// Geometry and density constants of an open device.
///
/// Known only once a device has been opened and immutable until it is
/// closed or reopened.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DeviceGeometry {
    /// Surface width in device units.
    pub width: i32,
    /// Surface height in device units.
    pub height: i32,
    /// Device units per millimeter.
    pub units_per_mm: f64,
    /// Device units per pixel.
    pub units_per_pixel: f64,
    /// Whether the device is interactive (a window rather than a file).
    pub is_interactive: bool,
    /// Background alpha used when no background color was requested.
    pub default_background_alpha: f64,
}

/// A rendering backend that can allocate output surfaces.
pub trait Backend {
    /// The surface type produced by the backend.
    type Surface: Surface;

    /// Creates a `width`x`height` surface, in device units, bound to `path`.
    ///
    /// Returns `None` when the surface cannot be allocated.
    fn create_surface(&mut self, path: &Path, width: i32, height: i32) -> Option<Self::Surface>;
}

/// A backend output surface.
///
/// Dropping a surface destroys it.
pub trait Surface {
    /// Creates a drawing context on the surface.
    fn create_context(&mut self) -> Result<(), String>;

    /// Paints the whole surface with `color`.
    fn fill(&mut self, color: RGBA8);

    /// Completes any pending drawing.
    fn flush(&mut self);

    /// Finalizes the surface, writing it out.
    ///
    /// Returns the backend status message on failure. The surface is
    /// finished either way.
    fn finish(&mut self) -> Result<(), String>;
}

/// Builds the file name of a device page.
///
/// The first page is written to `<prefix><extension>`, the following ones
/// to `<prefix>_<page><extension>` with a four digit page number.
/// An extension already present on `prefix` is not repeated.
pub fn filename_for_device(prefix: &str, page: u32, extension: &str) -> PathBuf {
    let stem = prefix.strip_suffix(extension).unwrap_or(prefix);
    if page == 0 {
        PathBuf::from(format!("{}{}", stem, extension))
    } else {
        PathBuf::from(format!("{}_{:04}{}", stem, page, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_name {
        ($name:ident, $prefix:expr, $page:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(filename_for_device($prefix, $page, ".svg"), PathBuf::from($result));
            }
        )
    }

    test_name!(name_1, "figure", 0, "figure.svg");
    test_name!(name_2, "figure", 1, "figure_0001.svg");
    test_name!(name_3, "figure", 12, "figure_0012.svg");
    test_name!(name_4, "plot.svg", 0, "plot.svg");
    test_name!(name_5, "plot.svg", 3, "plot_0003.svg");
    test_name!(name_6, "out/plot", 2, "out/plot_0002.svg");
    test_name!(name_7, "plot", 12345, "plot_12345.svg");
}
