//! Noise generation for the synthetic sample source.

use rand::Rng;

/// Generate random noise in range [-1, 1] (uniform distribution).
#[inline]
pub fn rand_noise<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    2.0 * (rng.gen::<f64>() - 0.5)
}

/// Generate Gaussian noise with the specified standard deviation.
///
/// Uses the Box-Muller transform to generate normally distributed values.
pub fn gaussian_noise<R: Rng + ?Sized>(rng: &mut R, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();

    // Avoid log(0)
    let u1 = u1.max(1e-10);

    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    z0 * std_dev
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rand_noise_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let n = rand_noise(&mut rng);
            assert!((-1.0..=1.0).contains(&n));
        }
    }

    #[test]
    fn test_gaussian_noise_distribution() {
        let mut rng = StdRng::seed_from_u64(7);
        let std_dev = 1.0;
        let n_samples = 10000;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;

        for _ in 0..n_samples {
            let n = gaussian_noise(&mut rng, std_dev);
            sum += n;
            sum_sq += n * n;
        }

        let mean = sum / n_samples as f64;
        let variance = sum_sq / n_samples as f64 - mean * mean;

        // Mean should be close to 0
        assert!(mean.abs() < 0.1);
        // Variance should be close to std_dev^2
        assert!((variance - std_dev * std_dev).abs() < 0.2);
    }

    #[test]
    fn test_zero_std_dev() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(gaussian_noise(&mut rng, 0.0), 0.0);
    }
}
