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

//! # Pairwise interactions in a periodic box
//!
//! Total energy and, optionally, forces from summing a twobody potential over
//! all unique pairs of atoms. Displacements are reduced with the minimum image
//! convention of a [`PeriodicBox`]. There is no cutoff and no neighbor list;
//! a cell or Verlet list would be needed for large systems.

use crate::twobody::{IsotropicTwobodyEnergy, LennardJones};
use crate::{Error, PeriodicBox, Result, Vector3};

/// Lennard-Jones energy of `positions` and, if `forces` is given, add the forces to it.
///
/// Each unique pair (i, j) with j < i is visited once. With the minimum image
/// displacement 𝒅 = 𝒓ᵢ - 𝒓ⱼ and 𝑥⁶ = (σ²/𝑑²)³, the pair contributes 4ε(𝑥¹² - 𝑥⁶)
/// to the energy, and with 𝑔 = -24ε/𝑑² (2𝑥¹² - 𝑥⁶) the forces are updated as
/// `forces[i] -= g·d` and `forces[j] += g·d` on all three axes.
/// Forces are added to the existing content of the buffer, which must have
/// the same length as `positions`.
///
/// An empty configuration gives [`Error::InvalidArgument`]. Nothing else is
/// checked: coincident atoms, or zero or negative box lengths, produce NaN or
/// infinite values rather than errors.
///
/// # Examples
/// ~~~
/// use ljmic::{evaluate, PeriodicBox, Vector3};
/// let cell = PeriodicBox::cube(10.0);
/// let positions = [Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0)];
/// let energy = evaluate(&positions, &cell, None, 1.0, 1.0).unwrap();
/// assert_eq!(energy, 0.0); // r = σ
/// assert!(evaluate(&[], &cell, None, 1.0, 1.0).is_err());
/// ~~~
pub fn evaluate(
    positions: &[Vector3],
    cell: &PeriodicBox,
    forces: Option<&mut [Vector3]>,
    sigma: f64,
    epsilon: f64,
) -> Result<f64> {
    PairwiseEvaluator::lennard_jones(*cell, sigma, epsilon).accumulate(positions, forces)
}

/// Sums a twobody potential over all unique pairs in a periodic box
///
/// Holds no per-call state, so a single instance can be shared between
/// threads, each working on its own position and force buffers.
///
/// # Examples
/// ~~~
/// use ljmic::{PairwiseEvaluator, PeriodicBox, Vector3};
/// let evaluator = PairwiseEvaluator::lennard_jones(PeriodicBox::cube(10.0), 1.0, 1.0);
/// let positions = [Vector3::zeros(), Vector3::new(0.0, 0.0, 1.5)];
/// let (energy, forces) = evaluator.forces(&positions).unwrap();
/// assert!(energy < 0.0);
/// assert!(forces[1].z < 0.0); // attraction
/// ~~~
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseEvaluator<P = LennardJones> {
    cell: PeriodicBox,
    potential: P,
}

impl PairwiseEvaluator<LennardJones> {
    /// Lennard-Jones interactions with diameter σ and well depth ε
    pub fn lennard_jones(cell: PeriodicBox, sigma: f64, epsilon: f64) -> Self {
        Self::new(cell, LennardJones::new(epsilon, sigma))
    }
}

impl<P: IsotropicTwobodyEnergy> PairwiseEvaluator<P> {
    pub const fn new(cell: PeriodicBox, potential: P) -> Self {
        Self { cell, potential }
    }

    pub const fn cell(&self) -> &PeriodicBox {
        &self.cell
    }

    pub const fn potential(&self) -> &P {
        &self.potential
    }

    /// Total energy; no force work is done
    pub fn energy(&self, positions: &[Vector3]) -> Result<f64> {
        self.accumulate(positions, None)
    }

    /// Total energy, adding forces to `forces` if given
    pub fn accumulate(&self, positions: &[Vector3], forces: Option<&mut [Vector3]>) -> Result<f64> {
        if positions.is_empty() {
            return Err(Error::InvalidArgument(
                "the number of atoms must be strictly positive".to_string(),
            ));
        }
        log::trace!(
            "pairwise sum over {} atoms ({})",
            positions.len(),
            if forces.is_some() { "energy and forces" } else { "energy" }
        );
        let energy = match forces {
            Some(forces) => self.sum_with_forces(positions, forces),
            None => self.sum_energy(positions),
        };
        Ok(energy)
    }

    /// Total energy, overwriting `forces` with the forces on each atom
    pub fn energy_and_forces(&self, positions: &[Vector3], forces: &mut [Vector3]) -> Result<f64> {
        forces.fill(Vector3::zeros());
        self.accumulate(positions, Some(forces))
    }

    /// Total energy and a newly allocated force for each atom
    pub fn forces(&self, positions: &[Vector3]) -> Result<(f64, Vec<Vector3>)> {
        let mut forces = vec![Vector3::zeros(); positions.len()];
        let energy = self.accumulate(positions, Some(&mut forces[..]))?;
        Ok((energy, forces))
    }

    #[inline(always)]
    fn displacement(&self, positions: &[Vector3], i: usize, j: usize) -> Vector3 {
        self.cell.minimum_image(positions[i] - positions[j])
    }

    fn sum_energy(&self, positions: &[Vector3]) -> f64 {
        (0..positions.len())
            .flat_map(|i| (0..i).map(move |j| (i, j)))
            .fold(0.0, |energy, (i, j)| {
                let distance_squared = self.displacement(positions, i, j).norm_squared();
                energy + self.potential.isotropic_twobody_energy(distance_squared)
            })
    }

    fn sum_with_forces(&self, positions: &[Vector3], forces: &mut [Vector3]) -> f64 {
        debug_assert_eq!(forces.len(), positions.len());
        let mut energy = 0.0;
        for i in 0..positions.len() {
            for j in 0..i {
                let delta = self.displacement(positions, i, j);
                let (u, gradient) = self
                    .potential
                    .isotropic_twobody_energy_and_gradient(delta.norm_squared());
                energy += u;
                let delta = delta * gradient;
                forces[i] -= delta;
                forces[j] += delta;
            }
        }
        energy
    }
}
