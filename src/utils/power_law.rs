use rand::Rng;
use rand_distr::Distribution;

use crate::{
    error::{invalid_argument_unless, Result},
    NumNodes,
};

/// A discrete power-law distribution over `1..=max_value` with mass proportional to
/// `k^(-gamma)`, normalized over that support.
///
/// Sampling uses inverse-CDF lookup against the precomputed cumulative probabilities.
/// This is the degree distribution of the configuration model, where the support is
/// bounded by `floor(sqrt(n))`, but it is also useful on its own, e.g. to feed exact
/// power-law degree sequences into
/// [`estimate_exponent`](crate::algo::estimate_exponent).
#[derive(Debug, Clone)]
pub struct TruncatedPowerLaw {
    /// `cumulative[i]` is the probability of drawing a value `<= i + 1`
    cumulative: Vec<f64>,
}

impl TruncatedPowerLaw {
    /// Creates the distribution with mass `P(k) ~ k^(-gamma)` for `k` in `1..=max_value`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`](crate::Error::InvalidArgument) if `gamma <= 1` or
    /// `max_value == 0`.
    pub fn new(gamma: f64, max_value: NumNodes) -> Result<Self> {
        invalid_argument_unless!(gamma > 1.0, "power-law exponent must exceed 1, got {gamma}");
        invalid_argument_unless!(max_value > 0, "power-law support must not be empty");

        let weights: Vec<f64> = (1..=max_value).map(|k| f64::from(k).powf(-gamma)).collect();
        let total: f64 = weights.iter().sum();

        let mut acc = 0.0;
        let cumulative = weights
            .into_iter()
            .map(|w| {
                acc += w / total;
                acc
            })
            .collect();

        Ok(Self { cumulative })
    }

    /// Returns the largest value the distribution can produce
    pub fn max_value(&self) -> NumNodes {
        self.cumulative.len() as NumNodes
    }

    /// Returns the probability of drawing `k`, or `0` outside the support
    pub fn pmf(&self, k: NumNodes) -> f64 {
        match k {
            0 => 0.0,
            1 => self.cumulative[0],
            k if k <= self.max_value() => {
                self.cumulative[k as usize - 1] - self.cumulative[k as usize - 2]
            }
            _ => 0.0,
        }
    }
}

impl Distribution<NumNodes> for TruncatedPowerLaw {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NumNodes {
        let r = rng.random::<f64>();

        // Index of the first cumulative probability exceeding `r`; the final clamp only
        // matters when rounding keeps the last cumulative value slightly below 1.
        let idx = self.cumulative.partition_point(|&c| c <= r);
        (idx as NumNodes).min(self.max_value() - 1) + 1
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn invalid_parameters() {
        assert!(TruncatedPowerLaw::new(1.0, 10).is_err());
        assert!(TruncatedPowerLaw::new(0.5, 10).is_err());
        assert!(TruncatedPowerLaw::new(2.5, 0).is_err());
    }

    #[test]
    fn cumulative_reaches_one() {
        for gamma in [1.5, 2.5, 3.0] {
            let distr = TruncatedPowerLaw::new(gamma, 25).unwrap();
            assert!((distr.cumulative.last().unwrap() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn samples_stay_in_support() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let distr = TruncatedPowerLaw::new(2.2, 7).unwrap();

        for _ in 0..10_000 {
            let k = distr.sample(rng);
            assert!((1..=7).contains(&k));
        }
    }

    #[test]
    fn occurences() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let distr = TruncatedPowerLaw::new(2.0, 4).unwrap();

        let runs = 10_000u32;
        let mut occurences = [0u32; 4];
        for _ in 0..runs {
            occurences[distr.sample(rng) as usize - 1] += 1;
        }

        // weights 1, 1/4, 1/9, 1/16 normalize to masses of roughly 0.70, 0.18, 0.08, 0.04
        for k in 1..=4u32 {
            let expected = distr.pmf(k) * f64::from(runs);
            let observed = f64::from(occurences[k as usize - 1]);
            assert!(
                (observed - expected).abs() < 250.0,
                "degree {k}: observed {observed} vs expected {expected}"
            );
        }

        assert_eq!(distr.pmf(0), 0.0);
        assert_eq!(distr.pmf(5), 0.0);
    }
}
