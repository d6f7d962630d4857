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

//! # LJ-MIC
//!
//! Lennard-Jones energy and forces for point particles in a periodic,
//! orthorhombic box, using the minimum image convention.
//!
//! All unique pairs are visited, there is no cutoff and no neighbor list,
//! so the cost is O(N²). This is meant for small demonstration systems.
//!
//! ## Examples
//! ~~~
//! use ljmic::{evaluate, PeriodicBox, Vector3};
//! let cell = PeriodicBox::cube(10.0);
//! let positions = [Vector3::zeros(), Vector3::new(9.5, 0.0, 0.0)];
//! let mut forces = vec![Vector3::zeros(); 2];
//! let energy = evaluate(&positions, &cell, Some(&mut forces[..]), 1.0, 1.0).unwrap();
//! assert!(energy > 0.0); // atoms are 0.5 apart through the boundary
//! assert_eq!(forces[0], -forces[1]);
//! ~~~

#[cfg(test)]
extern crate approx;

/// A point in 3D space
pub type Vector3 = nalgebra::Vector3<f64>;

pub mod cell;
pub mod configuration;
mod error;
pub mod pairwise;
pub mod twobody;

pub use cell::PeriodicBox;
pub use error::{Error, Result};
pub use pairwise::{evaluate, PairwiseEvaluator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serializer};

/// Defines a cutoff distance
pub trait Cutoff {
    /// Squared cutoff distance
    fn cutoff_squared(&self) -> f64 {
        self.cutoff().powi(2)
    }

    /// Cutoff distance
    fn cutoff(&self) -> f64;
}

/// Transform x^2 --> x when serializing
#[cfg(feature = "serde")]
fn sqrt_serialize<S>(x: &f64, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_f64(x.sqrt())
}

/// Transform x --> x^2 when deserializing
#[cfg(feature = "serde")]
fn square_deserialize<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(f64::deserialize(deserializer)?.powi(2))
}

/// Transform x --> x/4 when serializing
#[cfg(feature = "serde")]
fn divide4_serialize<S>(x: &f64, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_f64(x / 4.0)
}

/// Transform x --> 4x when deserializing
#[cfg(feature = "serde")]
fn multiply4_deserialize<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(f64::deserialize(deserializer)? * 4.0)
}
