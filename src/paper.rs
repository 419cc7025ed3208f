// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{DeviceGeometry, Error, ErrorHandler, Units};

const MM_PER_INCH: f64 = 25.4;
const MM_PER_CM: f64 = 10.0;

/// A requested paper size, i.e. the physical size of the view surface.
///
/// The size is kept in the units it was given in. Conversion to device units
/// needs the density constants of an open device, so it happens only in
/// [`PaperSize::to_device_size`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PaperSize {
    width: f64,
    height: f64,
    units: Units,
}

impl PaperSize {
    /// Creates a new paper size request.
    ///
    /// A zero or negative dimension is reported to `errors` and replaced
    /// by 1.0.
    pub fn new(units: Units, width: f64, height: f64, errors: &mut dyn ErrorHandler) -> Self {
        let width = if width <= 0.0 {
            errors.report("set_paper_size", Error::InvalidWidth);
            1.0
        } else {
            width
        };

        let height = if height <= 0.0 {
            errors.report("set_paper_size", Error::InvalidHeight);
            1.0
        } else {
            height
        };

        PaperSize { width, height, units }
    }

    /// Same as [`PaperSize::new`], but takes `f32`.
    pub fn from_f32(units: Units, width: f32, height: f32, errors: &mut dyn ErrorHandler) -> Self {
        Self::new(units, width as f64, height as f64, errors)
    }

    /// Returns the requested width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the requested height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the units the size was requested in.
    pub fn units(&self) -> Units {
        self.units
    }

    /// Converts the request into device units of an open device.
    ///
    /// Values are rounded to the nearest integer, halves away from zero.
    /// Normalized units carry no physical size and fall back to centimeters,
    /// like any other unit without a case of its own.
    pub fn to_device_size(&self, device: &DeviceGeometry) -> (i32, i32) {
        let scale = match self.units {
            Units::Millimeters => device.units_per_mm,
            Units::Inches => device.units_per_mm * MM_PER_INCH,
            Units::Pixels => device.units_per_pixel,
            Units::Device => 1.0,
            _ => device.units_per_mm * MM_PER_CM,
        };

        (nint(self.width * scale), nint(self.height * scale))
    }
}

#[inline]
fn nint(n: f64) -> i32 {
    n.round() as i32
}

/// Returns the size of an open device in the requested `units`.
///
/// Without a device, reports [`Error::DeviceNotReady`] and returns `(1.0, 1.0)`.
pub fn paper_size(
    device: Option<&DeviceGeometry>,
    units: Units,
    errors: &mut dyn ErrorHandler,
) -> (f64, f64) {
    let device = match device {
        Some(device) => device,
        None => {
            errors.report("paper_size", Error::DeviceNotReady);
            return (1.0, 1.0);
        }
    };

    let width = device.width as f64;
    let height = device.height as f64;
    let upmm = device.units_per_mm;
    match units {
        Units::Millimeters => (width / upmm, height / upmm),
        Units::Inches => ((width / upmm) / MM_PER_INCH, (height / upmm) / MM_PER_INCH),
        Units::Normalized => (1.0, 1.0),
        Units::Pixels => (width / device.units_per_pixel, height / device.units_per_pixel),
        Units::Device => (width, height),
        Units::Centimeters => (0.1 * width / upmm, 0.1 * height / upmm),
    }
}

/// Same as [`paper_size`], but returns `f32`.
pub fn paper_size_f32(
    device: Option<&DeviceGeometry>,
    units: Units,
    errors: &mut dyn ErrorHandler,
) -> (f32, f32) {
    let (width, height) = paper_size(device, units, errors);
    (width as f32, height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(width: i32, height: i32) -> DeviceGeometry {
        DeviceGeometry {
            width,
            height,
            units_per_mm: 2.8346,
            units_per_pixel: 0.765,
            is_interactive: false,
            default_background_alpha: 0.0,
        }
    }

    macro_rules! test_resolve {
        ($name:ident, $units:expr, $w:expr, $h:expr, $result:expr) => (
            #[test]
            fn $name() {
                let mut errors: Vec<Error> = Vec::new();
                let paper = PaperSize::new($units, $w, $h, &mut errors);
                assert!(errors.is_empty());
                assert_eq!(paper.to_device_size(&device(0, 0)), $result);
            }
        )
    }

    test_resolve!(resolve_mm,     Units::Millimeters, 100.0, 50.0, (283, 142));
    test_resolve!(resolve_in,     Units::Inches,      8.5, 11.0,   (612, 792));
    test_resolve!(resolve_px,     Units::Pixels,      800.0, 600.0, (612, 459));
    test_resolve!(resolve_device, Units::Device,      612.4, 458.6, (612, 459));
    test_resolve!(resolve_cm,     Units::Centimeters, 21.0, 29.7,  (595, 842));
    test_resolve!(resolve_norm,   Units::Normalized,  2.0, 1.0,    (57, 28));
    test_resolve!(resolve_code_4, Units::from(4),     2.0, 1.0,    (57, 28));
    test_resolve!(resolve_code_neg, Units::from(-7),  2.0, 1.0,    (57, 28));

    #[test]
    fn resolve_half_away_from_zero() {
        let paper = PaperSize::new(Units::Device, 2.5, 3.5, &mut Vec::<Error>::new());
        assert_eq!(paper.to_device_size(&device(0, 0)), (3, 4));
    }

    #[test]
    fn clamp_width() {
        let mut errors: Vec<Error> = Vec::new();
        let paper = PaperSize::new(Units::Pixels, -5.0, 20.0, &mut errors);
        assert_eq!(paper.width(), 1.0);
        assert_eq!(paper.height(), 20.0);
        assert_eq!(errors, vec![Error::InvalidWidth]);
    }

    #[test]
    fn clamp_height() {
        let mut errors: Vec<Error> = Vec::new();
        let paper = PaperSize::new(Units::Millimeters, 10.0, 0.0, &mut errors);
        assert_eq!(paper.width(), 10.0);
        assert_eq!(paper.height(), 1.0);
        assert_eq!(errors, vec![Error::InvalidHeight]);
    }

    #[test]
    fn clamp_both() {
        let mut errors: Vec<Error> = Vec::new();
        let paper = PaperSize::new(Units::Inches, 0.0, -1.0, &mut errors);
        assert_eq!((paper.width(), paper.height()), (1.0, 1.0));
        assert_eq!(errors, vec![Error::InvalidWidth, Error::InvalidHeight]);
        assert_eq!(errors[0].to_string(), "width <= 0");
        assert_eq!(errors[1].to_string(), "height <= 0");
    }

    #[test]
    fn from_f32_widens() {
        let mut errors: Vec<Error> = Vec::new();
        let a = PaperSize::from_f32(Units::Millimeters, 100.0, 50.0, &mut errors);
        let b = PaperSize::new(Units::Millimeters, 100.0, 50.0, &mut errors);
        assert_eq!(a, b);

        let a = PaperSize::from_f32(Units::Inches, 0.1, 0.3, &mut errors);
        assert_eq!(a.width(), 0.1f32 as f64);
        assert_eq!(a.height(), 0.3f32 as f64);
        assert!(errors.is_empty());
    }

    macro_rules! test_query {
        ($name:ident, $units:expr, $result:expr) => (
            #[test]
            fn $name() {
                let mut errors: Vec<Error> = Vec::new();
                let dev = device(612, 459);
                let (w, h) = paper_size(Some(&dev), $units, &mut errors);
                let (ew, eh) = $result;
                assert!((w - ew).abs() < 1e-9, "{} != {}", w, ew);
                assert!((h - eh).abs() < 1e-9, "{} != {}", h, eh);
                assert!(errors.is_empty());
            }
        )
    }

    test_query!(query_mm,     Units::Millimeters, (612.0 / 2.8346, 459.0 / 2.8346));
    test_query!(query_in,     Units::Inches,      (612.0 / 2.8346 / 25.4, 459.0 / 2.8346 / 25.4));
    test_query!(query_norm,   Units::Normalized,  (1.0, 1.0));
    test_query!(query_px,     Units::Pixels,      (800.0, 600.0));
    test_query!(query_device, Units::Device,      (612.0, 459.0));
    test_query!(query_cm,     Units::Centimeters, (0.1 * 612.0 / 2.8346, 0.1 * 459.0 / 2.8346));

    #[test]
    fn query_without_device() {
        for units in [Units::Millimeters, Units::Device, Units::Normalized, Units::Centimeters] {
            let mut errors: Vec<Error> = Vec::new();
            assert_eq!(paper_size(None, units, &mut errors), (1.0, 1.0));
            assert_eq!(errors, vec![Error::DeviceNotReady]);
        }
    }

    #[test]
    fn query_f32_narrows() {
        let dev = device(283, 142);
        for units in [Units::Normalized, Units::Inches, Units::Millimeters,
                      Units::Pixels, Units::Device, Units::Centimeters] {
            let (w, h) = paper_size(Some(&dev), units, &mut Vec::<Error>::new());
            let (wf, hf) = paper_size_f32(Some(&dev), units, &mut Vec::<Error>::new());
            assert_eq!((w as f32, h as f32), (wf, hf));
        }
    }
}
