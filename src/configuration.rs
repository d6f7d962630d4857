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

//! Starting configurations for small periodic systems.

use crate::{Error, PeriodicBox, Result, Vector3};
use itertools::Itertools;
use rand::Rng;

/// Default number of consecutive rejected trial positions before giving up
pub const DEFAULT_MAX_TRIES: usize = 1000;

/// Place `natom` atoms at random in the box, no two closer than `min_distance`.
///
/// Trial positions are drawn uniformly in [0, L) along each axis and rejected
/// if the minimum image distance to an already placed atom is below
/// `min_distance`. If more than `max_tries` trials in a row are rejected,
/// [`Error::Initialization`] is returned.
///
/// # Examples
/// ~~~
/// use ljmic::{configuration::*, PeriodicBox};
/// use rand::{rngs::StdRng, SeedableRng};
/// let cell = PeriodicBox::cube(10.0);
/// let mut rng = StdRng::seed_from_u64(42);
/// let positions = random_configuration(&cell, 50, 1.0, DEFAULT_MAX_TRIES, &mut rng).unwrap();
/// assert_eq!(positions.len(), 50);
/// assert!(min_pair_distance(&positions, &cell).unwrap() >= 1.0);
/// ~~~
pub fn random_configuration<R: Rng + ?Sized>(
    cell: &PeriodicBox,
    natom: usize,
    min_distance: f64,
    max_tries: usize,
    rng: &mut R,
) -> Result<Vec<Vector3>> {
    if natom == 0 {
        return Err(Error::InvalidArgument(
            "the number of atoms must be strictly positive".to_string(),
        ));
    }
    let min_distance_squared = min_distance * min_distance;
    let mut positions: Vec<Vector3> = Vec::with_capacity(natom);
    let mut rejected = 0;
    while positions.len() < natom {
        let trial = cell.lengths().map(|length| rng.gen::<f64>() * length);
        let too_close = positions
            .iter()
            .any(|other| cell.distance_squared(&trial, other) < min_distance_squared);
        if !too_close {
            positions.push(trial);
            rejected = 0;
            continue;
        }
        rejected += 1;
        if rejected > max_tries {
            log::warn!(
                "gave up after placing {} of {} atoms",
                positions.len(),
                natom
            );
            return Err(Error::Initialization(format!(
                "could not add atom {} in less than {} attempts",
                positions.len() + 1,
                max_tries
            )));
        }
    }
    log::debug!(
        "placed {} atoms in a box of volume {:.3}",
        natom,
        cell.volume()
    );
    Ok(positions)
}

/// Shortest minimum image distance between any two atoms, or `None` for fewer than two atoms
pub fn min_pair_distance(positions: &[Vector3], cell: &PeriodicBox) -> Option<f64> {
    positions
        .iter()
        .tuple_combinations()
        .map(|(a, b)| cell.distance_squared(a, b))
        .min_by(f64::total_cmp)
        .map(f64::sqrt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_configuration() {
        let cell = PeriodicBox::new(6.0, 7.0, 8.0);
        let mut rng = StdRng::seed_from_u64(7);
        let positions = random_configuration(&cell, 40, 1.2, DEFAULT_MAX_TRIES, &mut rng).unwrap();
        assert_eq!(positions.len(), 40);
        assert!(min_pair_distance(&positions, &cell).unwrap() >= 1.2);
        for position in &positions {
            for axis in 0..3 {
                assert!(position[axis] >= 0.0);
                assert!(position[axis] < cell.lengths()[axis]);
            }
        }
        // atoms are not confined to the box diagonal
        assert!(positions.iter().any(|p| (p.x / 6.0 - p.y / 7.0).abs() > 0.1));
    }

    #[test]
    fn test_reproducible() {
        let cell = PeriodicBox::cube(5.0);
        let first = random_configuration(&cell, 10, 1.0, 100, &mut StdRng::seed_from_u64(3));
        let second = random_configuration(&cell, 10, 1.0, 100, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_overcrowded_box() {
        // far fewer than 20 non-overlapping atoms fit
        let cell = PeriodicBox::cube(2.0);
        let mut rng = StdRng::seed_from_u64(11);
        assert!(matches!(
            random_configuration(&cell, 20, 1.0, 200, &mut rng),
            Err(Error::Initialization(_))
        ));
    }

    #[test]
    fn test_no_atoms() {
        let cell = PeriodicBox::cube(2.0);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            random_configuration(&cell, 0, 1.0, 10, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_min_pair_distance() {
        let cell = PeriodicBox::cube(10.0);
        assert_eq!(min_pair_distance(&[], &cell), None);
        assert_eq!(min_pair_distance(&[Vector3::zeros()], &cell), None);
        let positions = [
            Vector3::new(0.5, 0.0, 0.0),
            Vector3::new(5.0, 5.0, 5.0),
            Vector3::new(9.0, 0.0, 0.0),
        ];
        assert_relative_eq!(min_pair_distance(&positions, &cell).unwrap(), 1.5);
    }
}
