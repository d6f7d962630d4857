// Copyright 2023 Mikael Lund
//
// Licensed under the Apache license, version 2.0 (the "license");
// you may not use this file except in compliance with the license.
// You may obtain a copy of the license at
//
//     http://www.apache.org/licenses/license-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the license is distributed on an "as is" basis,
// without warranties or conditions of any kind, either express or implied.
// See the license for the specific language governing permissions and
// limitations under the license.

//! # Periodic simulation cell
//!
//! Axis-aligned, orthorhombic box with periodic boundaries in all three directions.

use crate::{Error, Result, Vector3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orthorhombic box with side lengths (Lx, Ly, Lz)
///
/// Positions need not be inside the box; only displacements are reduced.
/// The plain constructors perform no checks: a zero side length gives NaN
/// displacements and a negative one flips the sign of the wrapping. Use
/// [`PeriodicBox::try_new`] if the lengths come from untrusted input.
///
/// # Examples
/// ~~~
/// use ljmic::{PeriodicBox, Vector3};
/// let cell = PeriodicBox::new(10.0, 20.0, 30.0);
/// let d = cell.minimum_image(Vector3::new(9.0, -11.0, 14.0));
/// assert_eq!(d, Vector3::new(-1.0, 9.0, 14.0));
/// ~~~
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(deny_unknown_fields)
)]
pub struct PeriodicBox {
    /// Side lengths
    lengths: Vector3,
}

impl PeriodicBox {
    /// Box from three side lengths
    pub fn new(lx: f64, ly: f64, lz: f64) -> Self {
        Self {
            lengths: Vector3::new(lx, ly, lz),
        }
    }

    /// Cubic box with side length `length`
    pub fn cube(length: f64) -> Self {
        Self::new(length, length, length)
    }

    /// Box from three side lengths that must be finite and strictly positive
    pub fn try_new(lx: f64, ly: f64, lz: f64) -> Result<Self> {
        if let Some(bad) = [lx, ly, lz].into_iter().find(|l| !(l.is_finite() && *l > 0.0)) {
            return Err(Error::InvalidArgument(format!(
                "box lengths must be finite and strictly positive, found {bad}"
            )));
        }
        Ok(Self::new(lx, ly, lz))
    }

    /// Side lengths, (Lx, Ly, Lz)
    pub const fn lengths(&self) -> &Vector3 {
        &self.lengths
    }

    /// Box volume, Lx × Ly × Lz
    pub fn volume(&self) -> f64 {
        self.lengths.product()
    }

    /// Reduce a displacement to its minimum image.
    ///
    /// Each axis is treated independently, `d -= L * round(d / L)`, where
    /// `round` is the nearest integer with halfway cases rounded away from zero.
    #[inline(always)]
    pub fn minimum_image(&self, displacement: Vector3) -> Vector3 {
        displacement.zip_map(&self.lengths, |d, l| d - l * (d / l).round())
    }

    /// Squared minimum image distance between two points
    #[inline]
    pub fn distance_squared(&self, a: &Vector3, b: &Vector3) -> f64 {
        self.minimum_image(a - b).norm_squared()
    }

    /// Minimum image distance between two points
    ///
    /// # Examples
    /// ~~~
    /// use ljmic::{PeriodicBox, Vector3};
    /// let cell = PeriodicBox::cube(10.0);
    /// let a = Vector3::new(0.5, 0.5, 0.5);
    /// let b = Vector3::new(9.5, 9.5, 9.5);
    /// assert!((cell.distance(&a, &b) - f64::sqrt(3.0)).abs() < 1e-12);
    /// ~~~
    #[inline]
    pub fn distance(&self, a: &Vector3, b: &Vector3) -> f64 {
        self.distance_squared(a, b).sqrt()
    }
}

impl From<Vector3> for PeriodicBox {
    fn from(lengths: Vector3) -> Self {
        Self { lengths }
    }
}

impl From<[f64; 3]> for PeriodicBox {
    fn from(lengths: [f64; 3]) -> Self {
        Self::new(lengths[0], lengths[1], lengths[2])
    }
}
