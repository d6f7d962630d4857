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

use crate::twobody::IsotropicTwobodyEnergy;
use crate::Cutoff;
#[cfg(feature = "serde")]
use crate::{divide4_serialize, multiply4_deserialize, sqrt_serialize, square_deserialize};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lennard-Jones potential
///
/// $$ u(r) = 4\epsilon \left [\left (\frac{\sigma}{r}\right )^{12} - \left (\frac{\sigma}{r}\right )^6 \right ]$$
///
/// Originally by J. E. Lennard-Jones, see
/// [doi:10/cqhgm7](https://dx.doi.org/10/cqhgm7) or
/// [Wikipedia](https://en.wikipedia.org/wiki/Lennard-Jones_potential).
///
/// # Examples:
/// ~~~
/// use ljmic::twobody::*;
/// let (epsilon, sigma) = (1.5, 2.0);
/// let lj = LennardJones::new(epsilon, sigma);
/// let (r_min, u_min) = (f64::powf(2.0, 1.0 / 6.0) * sigma, -epsilon);
/// assert!((lj.isotropic_twobody_energy(r_min.powi(2)) - u_min).abs() < 1e-12);
/// assert_eq!(lj.isotropic_twobody_energy(sigma * sigma), 0.0);
/// ~~~
#[derive(Debug, Clone, PartialEq, Default, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(deny_unknown_fields)
)]
pub struct LennardJones {
    /// Four times epsilon, 4ε
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "eps",
            serialize_with = "divide4_serialize",
            deserialize_with = "multiply4_deserialize"
        )
    )]
    four_times_epsilon: f64,
    /// Squared diameter, σ²
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "sigma",
            serialize_with = "sqrt_serialize",
            deserialize_with = "square_deserialize"
        )
    )]
    sigma_squared: f64,
}

impl LennardJones {
    pub fn new(epsilon: f64, sigma: f64) -> Self {
        Self {
            four_times_epsilon: 4.0 * epsilon,
            sigma_squared: sigma * sigma,
        }
    }
    /// Construct from AB form, u = A/r¹² - B/r⁶
    pub fn from_ab(a: f64, b: f64) -> Self {
        Self {
            four_times_epsilon: b * b / a,
            sigma_squared: (a / b).cbrt(),
        }
    }
    /// Well depth, ε
    pub fn epsilon(&self) -> f64 {
        self.four_times_epsilon / 4.0
    }
    /// Diameter, σ
    pub fn sigma(&self) -> f64 {
        self.sigma_squared.sqrt()
    }
}

impl Cutoff for LennardJones {
    fn cutoff(&self) -> f64 {
        f64::INFINITY
    }
    fn cutoff_squared(&self) -> f64 {
        f64::INFINITY
    }
}

impl IsotropicTwobodyEnergy for LennardJones {
    #[inline]
    fn isotropic_twobody_energy(&self, squared_distance: f64) -> f64 {
        let x = self.sigma_squared / squared_distance; // σ²/r²
        let x = x * x * x; // σ⁶/r⁶
        self.four_times_epsilon * (x * x - x)
    }

    /// 𝐹(𝑟) = 24ε/𝑟 [2(σ/𝑟)¹² - (σ/𝑟)⁶]
    #[inline]
    fn isotropic_twobody_force(&self, squared_distance: f64) -> f64 {
        let (_, gradient) = self.isotropic_twobody_energy_and_gradient(squared_distance);
        -gradient * squared_distance.sqrt()
    }

    /// (d𝑈/d𝑟)/𝑟 = -24ε/𝑟² [2(σ/𝑟)¹² - (σ/𝑟)⁶], sharing (σ/𝑟)⁶ with the energy
    #[inline(always)]
    fn isotropic_twobody_energy_and_gradient(&self, squared_distance: f64) -> (f64, f64) {
        let x = self.sigma_squared / squared_distance;
        let x6 = x * x * x;
        let energy = self.four_times_epsilon * (x6 * x6 - x6);
        let gradient = -6.0 * self.four_times_epsilon / squared_distance * (2.0 * x6 * x6 - x6);
        (energy, gradient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lennard_jones() {
        let (epsilon, sigma) = (1.5, 2.0);
        let lj = LennardJones::new(epsilon, sigma);
        assert_eq!(lj.epsilon(), epsilon);
        assert_eq!(lj.sigma(), sigma);
        assert_eq!(lj.isotropic_twobody_energy(sigma * sigma), 0.0);
        // r = 2σ: 4ε[(1/2)¹² - (1/2)⁶]
        assert_relative_eq!(lj.isotropic_twobody_energy(16.0), -0.09228515625);
        assert!(lj.cutoff().is_infinite());
    }

    #[test]
    fn test_force_and_gradient() {
        let (epsilon, sigma) = (0.8, 1.1);
        let lj = LennardJones::new(epsilon, sigma);

        // force vanishes at the minimum, r = 2^(1/6)σ
        let r_min = f64::powf(2.0, 1.0 / 6.0) * sigma;
        assert_relative_eq!(lj.isotropic_twobody_force(r_min * r_min), 0.0, epsilon = 1e-12);

        // repulsive inside, attractive outside
        assert!(lj.isotropic_twobody_force(sigma * sigma) > 0.0);
        assert!(lj.isotropic_twobody_force(4.0 * sigma * sigma) < 0.0);

        // analytical force agrees with a central difference of the energy
        for r in [0.95, 1.2, 1.7, 3.0] {
            let h = 1e-6;
            let numerical = -(lj.isotropic_twobody_energy((r + h) * (r + h))
                - lj.isotropic_twobody_energy((r - h) * (r - h)))
                / (2.0 * h);
            assert_relative_eq!(
                lj.isotropic_twobody_force(r * r),
                numerical,
                max_relative = 1e-6,
                epsilon = 1e-9
            );
        }

        // energy part equals the plain energy, bit for bit
        let r2 = 1.3;
        let (energy, gradient) = lj.isotropic_twobody_energy_and_gradient(r2);
        assert_eq!(energy, lj.isotropic_twobody_energy(r2));
        let x6 = (sigma * sigma / r2).powi(3);
        assert_relative_eq!(
            gradient,
            -24.0 * epsilon / r2 * (2.0 * x6 * x6 - x6),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_from_ab() {
        let lj = LennardJones::new(0.5, 3.0);
        let a = 4.0 * 0.5 * 3.0_f64.powi(12);
        let b = 4.0 * 0.5 * 3.0_f64.powi(6);
        let lj_ab = LennardJones::from_ab(a, b);
        assert_relative_eq!(lj_ab.epsilon(), lj.epsilon());
        assert_relative_eq!(lj_ab.sigma(), lj.sigma(), max_relative = 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let lj = LennardJones::new(0.5, 3.0);
        let json = serde_json::to_string(&lj).unwrap();
        assert_eq!(json, "{\"eps\":0.5,\"sigma\":3.0}");
        let lj_back: LennardJones = serde_json::from_str(&json).unwrap();
        assert_eq!(lj_back, lj);
        let unknown_field = "{\"eps\":0.5,\"sigma\":3.0,\"rc\":9.0}";
        assert!(serde_json::from_str::<LennardJones>(unknown_field).is_err());
    }
}
