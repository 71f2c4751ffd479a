//! Perceptual color scales and the value → RGBA mapping for point clouds.
//!
//! Scales are 9-stop ramps with linear interpolation, monotonic in perceived
//! brightness. Alpha combines a value term with a cheap view-diagonal depth
//! cue; the renderer is expected to disable its own depth shading.

use itertools::izip;
use lin_alg::f64::Vec3;

pub type Color = (f32, f32, f32);
pub type Rgba = [f32; 4];

// Control points, dark to bright.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

const PLASMA: [(u8, u8, u8); 9] = [
    (13, 8, 135),
    (70, 3, 159),
    (114, 1, 168),
    (156, 23, 158),
    (189, 55, 134),
    (216, 87, 107),
    (237, 121, 83),
    (251, 159, 58),
    (240, 249, 33),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Viridis,
    Plasma,
}

impl ColorScheme {
    /// Name understood by volume-rendering collaborators.
    pub fn descrip(&self) -> &'static str {
        match self {
            ColorScheme::Viridis => "Viridis",
            ColorScheme::Plasma => "Plasma",
        }
    }

    fn stops(&self) -> &'static [(u8, u8, u8); 9] {
        match self {
            ColorScheme::Viridis => &VIRIDIS,
            ColorScheme::Plasma => &PLASMA,
        }
    }

    /// Sample the ramp at t in [0, 1]; out-of-range t is clamped.
    pub fn sample(&self, t: f64) -> Color {
        let stops = self.stops();
        let t = t.clamp(0., 1.);

        let scaled = t * (stops.len() - 1) as f64;
        let i = (scaled as usize).min(stops.len() - 2);
        let frac = (scaled - i as f64) as f32;

        let (r0, g0, b0) = stops[i];
        let (r1, g1, b1) = stops[i + 1];

        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * frac) / 255.;

        (lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }
}

/// How per-point opacity is computed from the normalized value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaMode {
    /// alpha = (0.4 + 0.5·v) · (0.4 + 1.2·depth), clipped to [0, 1], where
    /// depth is the min-max-normalized x+y+z diagonal. Points further along
    /// the viewing diagonal appear brighter.
    DepthWeighted,
    /// alpha = 0.4 + 0.4·v, clipped to [0.1, 0.8]. No depth term; used for
    /// small thumbnail renders.
    Preview,
}

/// Normalized x+y+z per point: a view-independent depth proxy, not true
/// depth sorting.
fn norm_depths(posits: &[Vec3]) -> Vec<f64> {
    let depths: Vec<f64> = posits.iter().map(|p| p.x + p.y + p.z).collect();

    let mut d_min = f64::MAX;
    let mut d_max = f64::MIN;
    for d in &depths {
        d_min = d_min.min(*d);
        d_max = d_max.max(*d);
    }

    if d_max > d_min {
        depths.iter().map(|d| (d - d_min) / (d_max - d_min)).collect()
    } else {
        vec![1.; depths.len()]
    }
}

/// Map normalized values (and positions, for the depth cue) to RGBA, one per
/// point.
pub fn map_colors(
    vals: &[f64],
    posits: &[Vec3],
    scheme: ColorScheme,
    alpha_mode: AlphaMode,
) -> Vec<Rgba> {
    let depths = norm_depths(posits);

    izip!(vals, &depths)
        .map(|(v, depth)| {
            let (r, g, b) = scheme.sample(*v);

            let alpha = match alpha_mode {
                AlphaMode::DepthWeighted => {
                    let brightness = 0.4 + 1.2 * depth;
                    ((0.4 + 0.5 * v) * brightness).clamp(0., 1.)
                }
                AlphaMode::Preview => (0.4 + 0.4 * v).clamp(0.1, 0.8),
            };

            [r, g, b, alpha as f32]
        })
        .collect()
}
