//! Cross-section views: restrict the visible field to a half-space or thin
//! slab. Two modes with the same visual intent, differing in whether the
//! array shape is preserved (volume renderers) or the point list shrinks
//! (scatter renderers).

use itertools::izip;
use lin_alg::f64::Vec3;

use crate::{
    grid_setup::{Arr3dReal, Grid},
    iter_arr,
    sampling::VisiblePoints,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn component(&self, posit: Vec3) -> f64 {
        match self {
            Axis::X => posit.x,
            Axis::Y => posit.y,
            Axis::Z => posit.z,
        }
    }
}

/// The region of space a slice keeps visible.
#[derive(Clone, Copy, Debug)]
pub enum SliceRegion {
    /// One sign of a coordinate. `positive` keeps coord >= 0, so points on
    /// the cut plane itself stay visible.
    HalfSpace { axis: Axis, positive: bool },
    /// A thin slab around the cut plane: |coord| < half_width.
    Slab { axis: Axis, half_width: f64 },
}

impl SliceRegion {
    pub fn contains(&self, posit: Vec3) -> bool {
        match self {
            SliceRegion::HalfSpace { axis, positive } => {
                let coord = axis.component(posit);
                if *positive {
                    coord >= 0.
                } else {
                    coord <= 0.
                }
            }
            SliceRegion::Slab { axis, half_width } => {
                axis.component(posit).abs() < *half_width
            }
        }
    }
}

/// Hard-zero mode: zero out density outside the region, preserving the array
/// shape. For volume renderers, which need the full grid-shaped field; the
/// zeroed cells render as transparent rather than being removed.
pub fn zero_outside(density: &Arr3dReal, grid: &Grid, region: &SliceRegion) -> Arr3dReal {
    let mut result = density.clone();

    for (i, j, k) in iter_arr!(grid.grid_n) {
        if !region.contains(grid.posits[i][j][k]) {
            result[i][j][k] = 0.;
        }
    }

    result
}

/// Point-removal mode: drop sampled points outside the region. For scatter
/// renderers, where point lists can shrink freely.
pub fn drop_outside(points: VisiblePoints, region: &SliceRegion) -> VisiblePoints {
    let (posits, vals) = izip!(points.posits, points.vals)
        .filter(|(posit, _)| region.contains(*posit))
        .unzip();

    VisiblePoints { posits, vals }
}
