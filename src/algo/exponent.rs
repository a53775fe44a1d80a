use crate::{
    error::{invalid_argument_unless, Error, Result},
    ops::AdjacencyList,
    NumNodes,
};

/// A degree histogram over logarithmically spaced bins.
///
/// The `num_bins + 1` bin edges are log-spaced between the smallest positive degree and
/// the largest degree plus one. Each bin stores the probability mass of the degrees
/// falling into it, normalized by the total number of nodes. Zero degrees have no place on
/// a logarithmic axis and contribute to the normalization only.
#[derive(Debug, Clone)]
pub struct LogBinnedPdf {
    /// Bin edges in degree space; bin `i` covers `[edges[i], edges[i + 1])`
    edges: Vec<f64>,
    /// Probability mass per bin
    mass: Vec<f64>,
}

impl LogBinnedPdf {
    /// Bins the given degree sequence into `num_bins` log-spaced bins.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `num_bins < 2`,
    /// - [`Error::InsufficientData`] if no degree is positive.
    pub fn from_degrees(degrees: &[NumNodes], num_bins: usize) -> Result<Self> {
        invalid_argument_unless!(
            num_bins >= 2,
            "at least two bins are needed, got {num_bins}"
        );

        let positive = degrees.iter().copied().filter(|&d| d > 0);
        let (kmin, kmax) = match positive.clone().fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        }) {
            Some(bounds) => bounds,
            None => {
                return Err(Error::InsufficientData(
                    "degree sequence contains no positive degree".into(),
                ))
            }
        };

        let lo = f64::from(kmin).log10();
        let hi = f64::from(kmax + 1).log10();
        let edges: Vec<f64> = (0..=num_bins)
            .map(|i| 10f64.powf(lo + (hi - lo) * i as f64 / num_bins as f64))
            .collect();

        let weight = 1.0 / degrees.len() as f64;
        let mut mass = vec![0.0; num_bins];
        for d in positive {
            // index of the last edge not exceeding `d`, clamped against float rounding at
            // the boundaries
            let bin = edges
                .partition_point(|&e| e <= f64::from(d))
                .saturating_sub(1)
                .min(num_bins - 1);
            mass[bin] += weight;
        }

        Ok(Self { edges, mass })
    }

    /// Returns the bin edges in degree space
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Returns the probability mass per bin
    pub fn mass(&self) -> &[f64] {
        &self.mass
    }

    /// Returns the number of bins carrying mass
    pub fn non_empty_bins(&self) -> usize {
        self.mass.iter().filter(|&&m| m > 0.0).count()
    }

    /// Returns `(log10(left edge), log10(density))` for every non-empty bin, where the
    /// density is the bin mass divided by the bin width.
    ///
    /// Fitting densities instead of raw masses is what makes the regression recover the
    /// power-law exponent: on log-spaced bins the raw mass of an exact `k^(-gamma)` law
    /// scales as `k^(1-gamma)`, the density as `k^(-gamma)`.
    pub fn log_densities(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mass.iter().enumerate().filter_map(move |(i, &m)| {
            (m > 0.0).then(|| {
                let width = self.edges[i + 1] - self.edges[i];
                (self.edges[i].log10(), (m / width).log10())
            })
        })
    }
}

/// Estimates the power-law exponent of a degree sequence.
///
/// The degrees are log-binned via [`LogBinnedPdf`], and an ordinary-least-squares line is
/// fitted through `log10(density)` over `log10(left bin edge)` of the non-empty bins.
///
/// The returned value is the **negated slope**: a sequence following `P(k) ~ k^(-gamma)`
/// estimates approximately `+gamma`.
///
/// # Errors
/// - [`Error::InvalidArgument`] if `num_bins < 2`,
/// - [`Error::InsufficientData`] if fewer than two bins carry mass (the regression is
///   undefined) or no degree is positive.
pub fn estimate_exponent(degrees: &[NumNodes], num_bins: usize) -> Result<f64> {
    let pdf = LogBinnedPdf::from_degrees(degrees, num_bins)?;
    let slope = fit_slope(pdf.log_densities())?;
    Ok(-slope)
}

/// Ordinary least squares through the given points, returning the slope.
fn fit_slope(points: impl Iterator<Item = (f64, f64)>) -> Result<f64> {
    let points: Vec<(f64, f64)> = points.collect();

    if points.len() < 2 {
        return Err(Error::InsufficientData(format!(
            "regression needs at least two non-empty bins, got {}",
            points.len()
        )));
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let covariance: f64 = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let variance: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();

    Ok(covariance / variance)
}

/// Trait for estimating the power-law exponent of a graph's degree distribution.
///
/// Implemented for every [`AdjacencyList`] graph; see [`estimate_exponent`] for the
/// estimation procedure and sign convention.
pub trait ExponentEstimation {
    /// Estimates the power-law exponent of the degree distribution using `num_bins`
    /// log-spaced histogram bins.
    ///
    /// # Errors
    /// See [`estimate_exponent`].
    fn estimate_exponent(&self, num_bins: usize) -> Result<f64>;
}

impl<G> ExponentEstimation for G
where
    G: AdjacencyList,
{
    fn estimate_exponent(&self, num_bins: usize) -> Result<f64> {
        estimate_exponent(&self.degree_sequence(), num_bins)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_distr::Distribution;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::utils::TruncatedPowerLaw;

    #[test]
    fn invalid_parameters() {
        assert!(estimate_exponent(&[1, 2, 3], 0).is_err());
        assert!(estimate_exponent(&[1, 2, 3], 1).is_err());
    }

    #[test]
    fn insufficient_data() {
        // no positive degree at all
        assert!(matches!(
            estimate_exponent(&[0, 0, 0], 10),
            Err(Error::InsufficientData(_))
        ));

        // all mass collapses into a single bin
        assert!(matches!(
            estimate_exponent(&[5, 5, 5, 5], 10),
            Err(Error::InsufficientData(_))
        ));
    }

    #[test]
    fn binning_covers_all_degrees() {
        let degrees = [1u32, 1, 2, 3, 4, 8, 16, 31];
        let pdf = LogBinnedPdf::from_degrees(&degrees, 5).unwrap();

        let total: f64 = pdf.mass().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(pdf.edges().len(), 6);
        assert!(pdf.non_empty_bins() >= 2);
        assert_eq!(pdf.log_densities().count(), pdf.non_empty_bins());
    }

    #[test]
    fn zero_degrees_dilute_the_mass() {
        let pdf = LogBinnedPdf::from_degrees(&[0, 0, 1, 2], 2).unwrap();
        let total: f64 = pdf.mass().iter().sum();
        assert!((total - 0.5).abs() < 1e-9);
    }

    #[test]
    fn recovers_known_exponent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);

        for gamma in [2.2, 2.5] {
            let distr = TruncatedPowerLaw::new(gamma, 100).unwrap();
            let degrees: Vec<NumNodes> = (0..50_000).map(|_| distr.sample(rng)).collect();

            let estimate = estimate_exponent(&degrees, 10).unwrap();
            assert!(
                (estimate - gamma).abs() < 0.3,
                "estimated {estimate} for gamma {gamma}"
            );
        }
    }

    #[test]
    fn perfect_line_is_fit_exactly() {
        // y = 3 - 2x
        let points = [(0.0, 3.0), (1.0, 1.0), (2.0, -1.0), (3.0, -3.0)];
        let slope = fit_slope(points.into_iter()).unwrap();
        assert!((slope + 2.0).abs() < 1e-12);
    }
}
