//! Configuration presets: the quick-pick orbital table, sizing heuristics,
//! and render-stage tuning knobs.

use crate::{
    color_maps::{AlphaMode, ColorScheme},
    wf_ops::QuantumNums,
};

/// Grid resolution for card/thumbnail previews.
pub const RES_PREVIEW: usize = 42;
/// Grid resolution for the interactive scatter view.
pub const RES_INTERACTIVE: usize = 55;
/// Grid resolution for the volume-rendered view.
pub const RES_VOLUME: usize = 60;

#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    pub state: QuantumNums,
}

/// The quick-pick orbital table.
pub fn all() -> Vec<Preset> {
    [
        ("1s ground state", 1, 0, 0),
        ("2p polar state", 2, 1, 0),
        ("3d complex", 3, 2, 0),
        ("4f advanced", 4, 3, 0),
        ("2p (m=1) state", 2, 1, 1),
        ("3p orbital", 3, 1, 0),
        ("3d (m=2) state", 3, 2, 2),
        ("4d orbital", 4, 2, 0),
        ("5g theoretical", 5, 4, 0),
    ]
    .into_iter()
    .map(|(name, n, l, m)| Preset {
        name,
        state: QuantumNums { n, l, m },
    })
    .collect()
}

/// Grid extent that comfortably contains the orbital: outer lobes scale
/// with n².
pub fn auto_extent(n: u16) -> f64 {
    3.0 * (n as f64).powi(2)
}

/// Slightly padded variant used for the volume view, where the iso surfaces
/// reach further into the tail.
pub fn auto_extent_volume(n: u16) -> f64 {
    3.2 * (n as f64).powi(2)
}

/// Tuning for the scatter pipeline. Historical variants of the plotting
/// stage differed on threshold, budget, and alpha; they are knobs here
/// rather than hard-coded.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Visibility cutoff on normalized density.
    pub threshold: f64,
    /// Max points handed to the renderer.
    pub point_budget: usize,
    pub scheme: ColorScheme,
    pub alpha: AlphaMode,
}

impl RenderConfig {
    /// Full interactive view.
    pub fn interactive() -> Self {
        Self {
            threshold: 0.05,
            point_budget: 100_000,
            scheme: ColorScheme::Plasma,
            alpha: AlphaMode::DepthWeighted,
        }
    }

    /// Small thumbnail previews: tighter budget, flat alpha.
    pub fn preview() -> Self {
        Self {
            threshold: 0.05,
            point_budget: 12_000,
            scheme: ColorScheme::Plasma,
            alpha: AlphaMode::Preview,
        }
    }
}
