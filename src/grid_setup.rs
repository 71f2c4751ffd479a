//! This module contains code for setting up the sample grid: a cubic lattice
//! of Cartesian points, with spherical coordinates derived per point.

use lin_alg::f64::Vec3;

use crate::{iter_arr, util};

pub type Arr3dReal = Vec<Vec<Vec<f64>>>;
pub type Arr3dVec = Vec<Vec<Vec<Vec3>>>;

/// Make a new 3D grid of f64, as a nested Vec
pub fn new_data_real(n: usize) -> Arr3dReal {
    let mut z = Vec::new();
    z.resize(n, 0.);

    let mut y = Vec::new();
    y.resize(n, z);

    let mut x = Vec::new();
    x.resize(n, y);

    x
}

/// Make a new 3D grid of position vectors, as a nested Vec
pub fn new_data_vec(n: usize) -> Arr3dVec {
    let mut z = Vec::new();
    z.resize(n, Vec3::new_zero());

    let mut y = Vec::new();
    y.resize(n, z);

    let mut x = Vec::new();
    x.resize(n, y);

    x
}

/// Sample positions over a cube, with spherical coordinates derived from the
/// Cartesian ones. Created once per visualization request; immutable after.
///
/// Invariants: r >= 0; θ in [0, π], with θ = 0 at the origin (see
/// `generate_grid`); ϕ in (-π, π].
pub struct Grid {
    pub posits: Arr3dVec,
    /// Radial distance from the origin.
    pub r: Arr3dReal,
    /// Polar angle, from the +z axis. Physics (ISO) convention.
    pub θ: Arr3dReal,
    /// Azimuthal angle, from atan2.
    pub ϕ: Arr3dReal,
    /// Points per side.
    pub grid_n: usize,
    pub extent: f64,
}

impl Grid {
    /// Volume of a single cell, for discrete integration over the field.
    pub fn cell_volume(&self) -> f64 {
        if self.grid_n < 2 {
            return 0.;
        }

        let spacing = 2. * self.extent / (self.grid_n - 1) as f64;
        spacing.powi(3)
    }
}

/// Build the cubic lattice: `resolution` evenly spaced samples per axis over
/// [-extent, extent], fully crossed into resolution³ points. This cubic
/// growth is the dominant cost driver; interactive callers cap resolution.
///
/// At r = 0, arccos(z/r) is undefined; we set θ = 0 there rather than let a
/// NaN propagate into the angular part.
pub fn generate_grid(extent: f64, resolution: usize) -> Grid {
    debug_assert!(extent > 0.);
    debug_assert!(resolution > 0);

    let grid_lin = util::linspace((-extent, extent), resolution);

    let mut posits = new_data_vec(resolution);
    let mut r = new_data_real(resolution);
    let mut θ = new_data_real(resolution);
    let mut ϕ = new_data_real(resolution);

    for (i, j, k) in iter_arr!(resolution) {
        let posit = Vec3::new(grid_lin[i], grid_lin[j], grid_lin[k]);

        let r_ = (posit.x.powi(2) + posit.y.powi(2) + posit.z.powi(2)).sqrt();

        let θ_ = if r_ < util::EPS_DIV0 {
            0.
        } else {
            // Clamp against float error pushing |z/r| past 1.
            (posit.z / r_).clamp(-1., 1.).acos()
        };

        posits[i][j][k] = posit;
        r[i][j][k] = r_;
        θ[i][j][k] = θ_;
        ϕ[i][j][k] = posit.y.atan2(posit.x);
    }

    Grid {
        posits,
        r,
        θ,
        ϕ,
        grid_n: resolution,
        extent,
    }
}

/// Flatten 3D position data, prior to passing to a renderer.
pub(crate) fn flatten_arr(vals_3d: &Arr3dVec, grid_n: usize) -> Vec<Vec3> {
    let mut result = Vec::new();

    for (i, j, k) in iter_arr!(grid_n) {
        result.push(vals_3d[i][j][k]);
    }

    result
}

/// Flatten 3D scalar data, prior to passing to a renderer.
pub(crate) fn flatten_arr_real(vals_3d: &Arr3dReal, grid_n: usize) -> Vec<f64> {
    let mut result = Vec::new();

    for (i, j, k) in iter_arr!(grid_n) {
        result.push(vals_3d[i][j][k]);
    }

    result
}
