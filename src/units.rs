// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgtypes::LengthUnit;

/// A unit system used to specify or query a paper size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Units {
    /// Normalized device units. The whole surface is 1x1.
    Normalized,
    /// Inches.
    Inches,
    /// Millimeters.
    Millimeters,
    /// Pixels.
    Pixels,
    /// Native device units. Points for SVG.
    Device,
    /// Centimeters.
    Centimeters,
}

impl Units {
    /// Returns the integer code of the unit system.
    ///
    /// Centimeters have no code of their own: any unknown code maps to them,
    /// so `None` is returned.
    pub fn code(self) -> Option<i32> {
        match self {
            Units::Normalized => Some(0),
            Units::Inches => Some(1),
            Units::Millimeters => Some(2),
            Units::Pixels => Some(3),
            Units::Device => Some(5),
            Units::Centimeters => None,
        }
    }

    /// Maps an SVG length unit onto a unit system.
    ///
    /// Points are SVG device units. Returns `None` for units that are
    /// relative to something a paper size doesn't have (`em`, `ex`, `%`)
    /// and for picas, which have to be scaled first.
    pub fn from_length_unit(unit: LengthUnit) -> Option<Self> {
        match unit {
            LengthUnit::None | LengthUnit::Pt => Some(Units::Device),
            LengthUnit::Px => Some(Units::Pixels),
            LengthUnit::In => Some(Units::Inches),
            LengthUnit::Cm => Some(Units::Centimeters),
            LengthUnit::Mm => Some(Units::Millimeters),
            LengthUnit::Pc | LengthUnit::Em | LengthUnit::Ex | LengthUnit::Percent => None,
        }
    }
}

impl Default for Units {
    fn default() -> Self {
        Units::Centimeters
    }
}

impl From<i32> for Units {
    fn from(code: i32) -> Self {
        match code {
            0 => Units::Normalized,
            1 => Units::Inches,
            2 => Units::Millimeters,
            3 => Units::Pixels,
            5 => Units::Device,
            // Code 4 is reserved. Everything unknown is treated as centimeters.
            _ => Units::Centimeters,
        }
    }
}

impl std::str::FromStr for Units {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normalized" => Ok(Units::Normalized),
            "inches" | "in" => Ok(Units::Inches),
            "mm" => Ok(Units::Millimeters),
            "pixels" | "px" => Ok(Units::Pixels),
            "device" | "pt" => Ok(Units::Device),
            "cm" => Ok(Units::Centimeters),
            _ => Err("invalid units"),
        }
    }
}
