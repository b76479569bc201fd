//! Gaussian vertex perturbation.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{GeomError, Result};
use crate::mesh::Mesh;

/// Perturb every vertex component with zero-mean Gaussian noise of standard
/// deviation `sigma`.
///
/// Each component is resampled from a normal distribution centered on its
/// current value. The random source is injected so callers (and tests) can
/// seed it for reproducible output; everything else in this crate is
/// deterministic.
///
/// # Errors
///
/// `sigma` must be finite and non-negative.
///
/// # Example
///
/// ```
/// use sliver::algo::noise::gaussian_noise;
/// use sliver::mesh::Mesh;
/// use rand::{rngs::StdRng, SeedableRng};
/// use nalgebra::Point3;
///
/// let mut mesh = Mesh::new();
/// mesh.vertices = vec![Point3::new(0.0, 0.0, 0.0)];
///
/// let mut rng = StdRng::seed_from_u64(7);
/// gaussian_noise(&mut mesh, 0.1, &mut rng).unwrap();
/// ```
pub fn gaussian_noise<R: Rng + ?Sized>(mesh: &mut Mesh, sigma: f64, rng: &mut R) -> Result<()> {
    // Normal::new tolerates a negative standard deviation, so the contract
    // is enforced here rather than delegated to the distribution.
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(GeomError::invalid_param(
            "sigma",
            sigma,
            "standard deviation must be finite and >= 0",
        ));
    }

    let normal = Normal::new(0.0, sigma).map_err(|_| {
        GeomError::invalid_param("sigma", sigma, "standard deviation must be finite and >= 0")
    })?;

    for vertex in &mut mesh.vertices {
        for k in 0..3 {
            vertex[k] += normal.sample(rng);
        }
    }

    Ok(())
}
