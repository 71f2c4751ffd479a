//! Density-aware reduction of the field to a renderable point set:
//! normalization, the visibility cutoff, weighted subsampling, and contrast
//! enhancement.

use lin_alg::f64::Vec3;
use rand::{seq::index, Rng};

use crate::{
    error::SampleError,
    grid_setup::{Arr3dReal, Grid},
    iter_arr,
    util::{EPS_CONTRAST, EPS_DIV0},
};

/// Every surviving point keeps at least this share of the top selection
/// weight, so low-density regions are thinned, not starved.
const WEIGHT_FLOOR: f64 = 0.1;

/// Points that survived the visibility cutoff, as parallel position/value
/// arrays.
#[derive(Clone, Debug)]
pub struct VisiblePoints {
    pub posits: Vec<Vec3>,
    pub vals: Vec<f64>,
}

impl VisiblePoints {
    pub fn len(&self) -> usize {
        self.posits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posits.is_empty()
    }
}

/// Scale the field so its max is 1. A zero (or near-zero) max means a
/// degenerate field, eg numeric underflow for an extreme state; we return
/// the field unchanged so downstream stages degrade to "no visible points"
/// instead of dividing by zero.
pub fn normalize_density(density: &Arr3dReal) -> Arr3dReal {
    let mut max_val: f64 = 0.;
    for plane in density {
        for row in plane {
            for val in row {
                max_val = max_val.max(*val);
            }
        }
    }

    if max_val < EPS_DIV0 {
        return density.clone();
    }

    let mut result = density.clone();
    for plane in &mut result {
        for row in plane {
            for val in row {
                *val /= max_val;
            }
        }
    }

    result
}

/// Keep only points whose normalized density exceeds the threshold. A hard
/// cutoff, not an alpha fade: this determines the shape of the rendered
/// cloud. Monotonic: raising the threshold never adds points.
pub fn select_visible(grid: &Grid, normalized: &Arr3dReal, threshold: f64) -> VisiblePoints {
    let mut posits = Vec::new();
    let mut vals = Vec::new();

    for (i, j, k) in iter_arr!(grid.grid_n) {
        let val = normalized[i][j][k];
        if val > threshold {
            posits.push(grid.posits[i][j][k]);
            vals.push(val);
        }
    }

    VisiblePoints { posits, vals }
}

/// Reduce the visible set to at most `budget` points, by weighted sampling
/// without replacement. The weight of a point is 0.1 + 0.9 · (val / max),
/// so dense regions dominate but no surviving point has zero selection
/// probability. Inputs at or under budget pass through unchanged.
///
/// The RNG is injected so callers can seed for reproducibility.
pub fn subsample<R: Rng + ?Sized>(
    points: VisiblePoints,
    budget: usize,
    rng: &mut R,
) -> Result<VisiblePoints, SampleError> {
    if points.len() <= budget {
        return Ok(points);
    }

    let mut max_val: f64 = 0.;
    for val in &points.vals {
        max_val = max_val.max(*val);
    }
    // select_visible only passes positive values, but guard anyway.
    if max_val < EPS_DIV0 {
        max_val = 1.;
    }

    let vals = &points.vals;
    let chosen = index::sample_weighted(
        rng,
        points.len(),
        |i| WEIGHT_FLOOR + (1. - WEIGHT_FLOOR) * vals[i] / max_val,
        budget,
    )?;

    let mut posits = Vec::with_capacity(budget);
    let mut vals_out = Vec::with_capacity(budget);
    for i in chosen {
        posits.push(points.posits[i]);
        vals_out.push(points.vals[i]);
    }

    Ok(VisiblePoints {
        posits,
        vals: vals_out,
    })
}

/// Gamma transform (exponent 0.5) plus min-max renormalization to [0, 1].
/// Compresses the dynamic range so faint regions stay visible. The epsilon
/// in the denominator guards the max == min case.
pub fn enhance_contrast(vals: &[f64]) -> Vec<f64> {
    let enhanced: Vec<f64> = vals.iter().map(|v| v.powf(0.5)).collect();

    let mut min_val = f64::MAX;
    let mut max_val = f64::MIN;
    for val in &enhanced {
        min_val = min_val.min(*val);
        max_val = max_val.max(*val);
    }

    enhanced
        .iter()
        .map(|v| (v - min_val) / (max_val - min_val + EPS_CONTRAST))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        grid_setup::generate_grid,
        wf_ops::{probability_density, QuantumNums},
    };

    use super::*;

    fn test_field() -> (crate::grid_setup::Grid, Arr3dReal) {
        let state = QuantumNums::new(2, 1, 0).unwrap();
        let grid = generate_grid(12., 21);
        let density = probability_density(&state, &grid);
        (grid, density)
    }

    #[test]
    fn test_normalize_range_and_idempotence() {
        let (_, density) = test_field();
        let normalized = normalize_density(&density);

        let mut max_val: f64 = 0.;
        for plane in &normalized {
            for row in plane {
                for val in row {
                    assert!(*val >= 0. && *val <= 1.);
                    max_val = max_val.max(*val);
                }
            }
        }
        assert!((max_val - 1.).abs() < 1e-12);

        // Normalizing an already-normalized field is a no-op.
        let again = normalize_density(&normalized);
        for (i, j, k) in iter_arr!(21) {
            assert!((again[i][j][k] - normalized[i][j][k]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalize_zero_field_unchanged() {
        let density = crate::grid_setup::new_data_real(5);
        let normalized = normalize_density(&density);

        for (i, j, k) in iter_arr!(5) {
            assert_eq!(normalized[i][j][k], 0.);
        }
    }

    #[test]
    fn test_threshold_monotonic() {
        let (grid, density) = test_field();
        let normalized = normalize_density(&density);

        let mut prev_count = usize::MAX;
        for threshold in [0.01, 0.03, 0.05, 0.2, 0.5] {
            let visible = select_visible(&grid, &normalized, threshold);
            assert!(visible.len() <= prev_count);
            prev_count = visible.len();
        }
    }

    #[test]
    fn test_subsample_budget() {
        let (grid, density) = test_field();
        let normalized = normalize_density(&density);
        let visible = select_visible(&grid, &normalized, 0.05);
        assert!(visible.len() > 100);

        let mut rng = StdRng::seed_from_u64(1);
        let sampled = subsample(visible.clone(), 100, &mut rng).unwrap();
        assert_eq!(sampled.len(), 100);

        // At or under budget: unchanged, no sampling loss.
        let mut rng = StdRng::seed_from_u64(1);
        let passthrough = subsample(visible.clone(), visible.len(), &mut rng).unwrap();
        assert_eq!(passthrough.len(), visible.len());
    }

    #[test]
    fn test_subsample_deterministic_for_seed() {
        let (grid, density) = test_field();
        let normalized = normalize_density(&density);
        let visible = select_visible(&grid, &normalized, 0.05);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = subsample(visible.clone(), 50, &mut rng_a).unwrap();
        let b = subsample(visible, 50, &mut rng_b).unwrap();

        assert_eq!(a.vals, b.vals);
    }

    #[test]
    fn test_selection_weights_strictly_positive() {
        let (grid, density) = test_field();
        let normalized = normalize_density(&density);
        let visible = select_visible(&grid, &normalized, 0.05);

        let mut max_val: f64 = 0.;
        for val in &visible.vals {
            max_val = max_val.max(*val);
        }

        // The floor term guarantees every surviving point can be drawn.
        for val in &visible.vals {
            let weight = WEIGHT_FLOOR + (1. - WEIGHT_FLOOR) * val / max_val;
            assert!(weight > 0.);
        }
    }

    #[test]
    fn test_enhance_contrast_range() {
        let vals = [0.05, 0.2, 0.5, 1.];
        let enhanced = enhance_contrast(&vals);

        assert!(enhanced[0].abs() < 1e-9);
        assert!((enhanced[3] - 1.).abs() < 1e-9);
        for val in &enhanced {
            assert!(*val >= 0. && *val <= 1.);
        }

        // Degenerate: all values equal. Epsilon keeps this finite.
        let flat = enhance_contrast(&[0.3, 0.3, 0.3]);
        for val in &flat {
            assert!(val.is_finite());
            assert!(val.abs() < 1e-6);
        }
    }
}
