// factory.rs - Construction of empty and randomized grids

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GridError;
use crate::grid::{Dimensions, Grid};

/// Fills a grid with cells that are independently alive with probability `alive_probability`.
pub fn random_grid<R: Rng + ?Sized>(
    rng: &mut R,
    dims: Dimensions,
    alive_probability: f64,
) -> Result<Grid, GridError> {
    // NaN fails the range check too.
    if !(0.0..=1.0).contains(&alive_probability) {
        return Err(GridError::InvalidProbability(alive_probability));
    }
    Ok(Grid::from_fn(dims, |_, _| rng.gen_bool(alive_probability)))
}

/// Produces fresh grids. Owns the RNG used for random seeding so that a
/// configured seed gives a reproducible sequence of random grids.
#[derive(Debug, Clone)]
pub struct GridFactory {
    rng: ChaCha8Rng,
}

impl GridFactory {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }

    pub fn make_empty(rows: i64, cols: i64) -> Result<Grid, GridError> {
        Ok(Grid::empty(Dimensions::new(rows, cols)?))
    }

    pub fn make_random(
        &mut self,
        rows: i64,
        cols: i64,
        alive_probability: f64,
    ) -> Result<Grid, GridError> {
        let dims = Dimensions::new(rows, cols)?;
        random_grid(&mut self.rng, dims, alive_probability)
    }

    pub(crate) fn random(&mut self, dims: Dimensions, alive_probability: f64) -> Result<Grid, GridError> {
        random_grid(&mut self.rng, dims, alive_probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_empty_is_dead() {
        let grid = GridFactory::make_empty(6, 9).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (6, 9));
        assert!(grid.is_dead());
    }

    #[test]
    fn test_make_empty_negative() {
        assert_eq!(
            GridFactory::make_empty(-3, 4),
            Err(GridError::InvalidDimension { rows: -3, cols: 4 })
        );
    }

    #[test]
    fn test_boundary_probabilities() {
        let mut factory = GridFactory::new(Some(7));
        assert!(factory.make_random(10, 12, 0.0).unwrap().is_dead());
        assert_eq!(factory.make_random(10, 12, 1.0).unwrap().live_count(), 120);
    }

    #[test]
    fn test_invalid_probability() {
        let mut factory = GridFactory::new(Some(7));
        assert_eq!(
            factory.make_random(3, 3, 1.5),
            Err(GridError::InvalidProbability(1.5))
        );
        assert!(factory.make_random(3, 3, -0.1).is_err());
        assert!(factory.make_random(3, 3, f64::NAN).is_err());
    }

    #[test]
    fn test_seed_is_reproducible() {
        let mut a = GridFactory::new(Some(42));
        let mut b = GridFactory::new(Some(42));
        for _ in 0..3 {
            assert_eq!(
                a.make_random(20, 20, 0.3).unwrap(),
                b.make_random(20, 20, 0.3).unwrap()
            );
        }
    }

    #[test]
    fn test_default_density_is_sparse() {
        let mut factory = GridFactory::new(Some(1));
        let grid = factory.make_random(100, 100, 0.3).unwrap();
        let live = grid.live_count();
        assert!((2000..4000).contains(&live), "live = {live}");
    }
}
