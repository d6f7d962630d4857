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

//! ## Twobody interactions
//!
//! Module for describing exactly two particles interacting with each other.

pub use crate::Vector3;
use std::fmt::Debug;

mod lennard_jones;
pub use self::lennard_jones::LennardJones;

/// Potential energy between a pair of isotropic particles, 𝑈(𝑟)
pub trait IsotropicTwobodyEnergy: Debug {
    /// Interaction energy between a pair of isotropic particles.
    fn isotropic_twobody_energy(&self, distance_squared: f64) -> f64;

    /// Force magnitude due to an isotropic interaction potential, 𝐹(𝑟) = -∇𝑈(𝑟)
    ///
    /// The default implementation uses a central difference to calculate the force
    /// and should be overridden with the exact analytical expression for better speed
    /// and accuracy.
    fn isotropic_twobody_force(&self, distance_squared: f64) -> f64 {
        const EPS: f64 = 1e-6;
        let distance = distance_squared.sqrt();
        let delta_u = self.isotropic_twobody_energy((distance + EPS).powi(2))
            - self.isotropic_twobody_energy((distance - EPS).powi(2));
        -delta_u / (2.0 * EPS)
    }

    /// Energy and the radial gradient factor, 𝑈(𝑟) and (d𝑈/d𝑟)/𝑟.
    ///
    /// Multiplying the gradient factor with the displacement 𝒓ᵢ - 𝒓ⱼ gives ∇ᵢ𝑈.
    /// Pair loops call this once per pair, so potentials should override it
    /// to share intermediate terms between energy and gradient.
    fn isotropic_twobody_energy_and_gradient(&self, distance_squared: f64) -> (f64, f64) {
        let energy = self.isotropic_twobody_energy(distance_squared);
        let gradient = -self.isotropic_twobody_force(distance_squared) / distance_squared.sqrt();
        (energy, gradient)
    }
}

/// Radial force vector on particle i from particle j, given 𝒓ᵢ - 𝒓ⱼ
pub fn isotropic_twobody_force_vector<T: IsotropicTwobodyEnergy + ?Sized>(
    potential: &T,
    displacement: &Vector3,
) -> Vector3 {
    let r_squared = displacement.norm_squared();
    let r_hat = displacement / r_squared.sqrt();
    potential.isotropic_twobody_force(r_squared) * r_hat
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Harmonic spring without an analytical force, to exercise the default methods
    #[derive(Debug)]
    struct Spring(f64);

    impl IsotropicTwobodyEnergy for Spring {
        fn isotropic_twobody_energy(&self, distance_squared: f64) -> f64 {
            0.5 * self.0 * distance_squared
        }
    }

    #[test]
    fn test_default_force() {
        let spring = Spring(2.0);
        // U = k r²/2, F = -k r
        assert_relative_eq!(
            spring.isotropic_twobody_force(9.0),
            -6.0,
            epsilon = 1e-6
        );
        let (energy, gradient) = spring.isotropic_twobody_energy_and_gradient(9.0);
        assert_relative_eq!(energy, 9.0);
        assert_relative_eq!(gradient, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_force_vector() {
        let spring = Spring(1.0);
        let force = isotropic_twobody_force_vector(&spring, &Vector3::new(0.0, 3.0, 4.0));
        assert_relative_eq!(force, Vector3::new(0.0, -3.0, -4.0), epsilon = 1e-6);
    }
}
