//! Renderer payload contracts. The renderers themselves are external
//! collaborators: a volume renderer consuming a grid-shaped scalar field,
//! and a 3D scatter renderer consuming a colored point cloud. This module
//! assembles their inputs from the pipeline stages; it holds no rendering
//! state.

use lin_alg::f64::Vec3;
use rand::Rng;

use crate::{
    color_maps::{map_colors, ColorScheme, Rgba},
    error::SampleError,
    grid_setup::{flatten_arr, flatten_arr_real, Arr3dReal, Grid},
    presets::RenderConfig,
    sampling::{enhance_contrast, normalize_density, select_visible, subsample},
    slicing::{drop_outside, zero_outside, SliceRegion},
};

/// Presentation-layer length conversion. Applied to exported coordinates and
/// axis labels only, never to the physics (which stays in Bohr units).
pub const BOHR_TO_ANGSTROM: f64 = 0.529177;

/// Scalar hints passed through to the volume renderer.
#[derive(Clone, Copy, Debug)]
pub struct VolumeHints {
    pub iso_min: f64,
    pub iso_max: f64,
    pub opacity: f64,
    pub surface_count: u16,
    pub scheme: ColorScheme,
}

impl Default for VolumeHints {
    fn default() -> Self {
        Self {
            iso_min: 0.03,
            iso_max: 0.5,
            opacity: 0.15,
            surface_count: 25,
            scheme: ColorScheme::Viridis,
        }
    }
}

/// Input contract for the volume renderer: flattened coordinates plus a
/// same-length value array in [0, 1]. The grid shape is preserved even when
/// sliced; zeroed cells render as transparent.
#[derive(Debug)]
pub struct VolumePayload {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub values: Vec<f64>,
    pub hints: VolumeHints,
}

/// Input contract for the scatter renderer: parallel per-point arrays.
#[derive(Debug)]
pub struct ScatterPayload {
    pub posits: Vec<Vec3>,
    /// Contrast-enhanced values in [0, 1].
    pub vals: Vec<f64>,
    pub colors: Vec<Rgba>,
    pub marker_size: f32,
}

/// Convert exported coordinates to angstroms for presentation.
pub fn to_angstrom(posits: &[Vec3]) -> Vec<Vec3> {
    posits.iter().map(|p| *p * BOHR_TO_ANGSTROM).collect()
}

/// Build the volume-renderer payload: normalize, optionally hard-zero a
/// slice region, flatten.
pub fn volume_payload(
    grid: &Grid,
    density: &Arr3dReal,
    slice: Option<&SliceRegion>,
    hints: VolumeHints,
) -> VolumePayload {
    let mut normalized = normalize_density(density);

    if let Some(region) = slice {
        normalized = zero_outside(&normalized, grid, region);
    }

    let posits = flatten_arr(&grid.posits, grid.grid_n);

    VolumePayload {
        x: posits.iter().map(|p| p.x).collect(),
        y: posits.iter().map(|p| p.y).collect(),
        z: posits.iter().map(|p| p.z).collect(),
        values: flatten_arr_real(&normalized, grid.grid_n),
        hints,
    }
}

/// Adaptive marker size: smaller markers for denser clouds.
fn marker_size(count: usize) -> f32 {
    if count == 0 {
        return 3.;
    }

    (50_000. / count as f32).clamp(3., 15.)
}

/// Build the scatter-renderer payload: normalize, cut by visibility
/// threshold, subsample to budget, optionally remove a slice region, enhance
/// contrast, and color.
pub fn scatter_payload<R: Rng + ?Sized>(
    grid: &Grid,
    density: &Arr3dReal,
    config: &RenderConfig,
    slice: Option<&SliceRegion>,
    rng: &mut R,
) -> Result<ScatterPayload, SampleError> {
    let normalized = normalize_density(density);
    let visible = select_visible(grid, &normalized, config.threshold);

    let mut points = subsample(visible, config.point_budget, rng)?;

    if let Some(region) = slice {
        points = drop_outside(points, region);
    }

    let vals = enhance_contrast(&points.vals);
    let colors = map_colors(&vals, &points.posits, config.scheme, config.alpha);
    let size = marker_size(points.len());

    Ok(ScatterPayload {
        posits: points.posits,
        vals,
        colors,
        marker_size: size,
    })
}
