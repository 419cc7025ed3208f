// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`plotdev` is the device layer of a plotting library: an SVG output device
and the paper size negotiation between a caller and an open device.

A paper size can be requested in any [`Units`] before a device is opened.
It is converted into device units only once the device is open and its
density constants are known. The size of an open device can be queried
back in any units.

```no_run
use plotdev::{Context, Units};

let mut ctx = Context::new("figure");
ctx.set_paper_size(Units::Millimeters, 100.0, 50.0);
ctx.open_device(false).unwrap();
let (w, h) = ctx.paper_size(Units::Inches);
println!("{}x{} in", w, h);
ctx.close_device();
```
*/

#![warn(missing_docs)]

pub use rgb::RGBA8;

mod context;
mod device;
mod error;
mod paper;
pub mod svg;
mod units;

pub use crate::context::Context;
pub use crate::device::{filename_for_device, Backend, DeviceGeometry, Surface};
pub use crate::error::{Error, ErrorHandler, LogErrors};
pub use crate::paper::{paper_size, paper_size_f32, PaperSize};
pub use crate::svg::{SvgBackend, SvgDevice, SvgSurface};
pub use crate::units::Units;
