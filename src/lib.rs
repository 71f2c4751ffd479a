#![allow(non_snake_case)]
#![allow(mixed_script_confusables)]
#![allow(uncommon_codepoints)]
#![allow(confusable_idents)]
#![allow(clippy::needless_range_loop)]

//! Hydrogen-orbital probability clouds: evaluate |ψ|² for a (n, l, m)
//! eigenstate over a cubic grid, and reduce the field to payloads an
//! external volume or scatter renderer can consume.
//!
//! Pipeline: grid → wave function → density sampler → slice → colors.
//! Every stage is a pure function of its inputs; nothing here touches UI or
//! rendering state.

pub mod color_maps;
pub mod complex_nums;
pub mod error;
pub mod grid_setup;
pub mod presets;
pub mod render;
pub mod sampling;
pub mod slicing;
pub mod util;
pub mod wf_ops;

use std::sync::mpsc;
use std::thread;

use rand::{rngs::StdRng, SeedableRng};

use error::SampleError;
use grid_setup::{generate_grid, Arr3dReal, Grid};
use presets::RenderConfig;
use render::{scatter_payload, ScatterPayload};
use slicing::SliceRegion;
use wf_ops::{probability_density, QuantumNums};

/// A single visualization request: which state, over what volume, at what
/// resolution. The state is validated on construction; extent and resolution
/// are caller contract (positive) per `generate_grid`.
#[derive(Clone, Copy, Debug)]
pub struct OrbitalRequest {
    pub state: QuantumNums,
    pub extent: f64,
    pub resolution: usize,
}

impl OrbitalRequest {
    /// Request with the sizing heuristic for the interactive view.
    pub fn interactive(state: QuantumNums) -> Self {
        Self {
            state,
            extent: presets::auto_extent(state.n),
            resolution: presets::RES_INTERACTIVE,
        }
    }
}

/// Run the compute half of the pipeline: grid generation plus density
/// evaluation. The dominant O(resolution³) cost lives here.
pub fn compute_density(req: &OrbitalRequest) -> (Grid, Arr3dReal) {
    let grid = generate_grid(req.extent, req.resolution);
    let density = probability_density(&req.state, &grid);

    (grid, density)
}

/// Run the full scatter pipeline on a worker thread, so a long computation
/// doesn't block a responsive caller. The payload arrives on the returned
/// channel once complete; there is no cancellation, so a running computation
/// always completes. Each call owns its arrays; nothing is shared between
/// invocations.
pub fn spawn_compute(
    req: OrbitalRequest,
    config: RenderConfig,
    slice: Option<SliceRegion>,
    seed: u64,
) -> mpsc::Receiver<Result<ScatterPayload, SampleError>> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (grid, density) = compute_density(&req);

        let mut rng = StdRng::seed_from_u64(seed);
        let result = scatter_payload(&grid, &density, &config, slice.as_ref(), &mut rng);

        // The caller may have dropped the receiver; nothing to do then.
        let _ = tx.send(result);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_compute_delivers_payload() {
        let state = QuantumNums::new(2, 1, 0).unwrap();
        let req = OrbitalRequest {
            state,
            extent: 12.,
            resolution: 21,
        };

        let mut config = RenderConfig::interactive();
        config.point_budget = 1_000;

        let rx = spawn_compute(req, config, None, 99);
        let payload = rx.recv().unwrap().unwrap();

        assert!(!payload.posits.is_empty());
        assert!(payload.posits.len() <= 1_000);
    }

    #[test]
    fn test_spawn_compute_deterministic_for_seed() {
        let state = QuantumNums::new(3, 2, 0).unwrap();
        let req = OrbitalRequest {
            state,
            extent: 27.,
            resolution: 25,
        };

        let mut config = RenderConfig::interactive();
        config.point_budget = 200;

        let a = spawn_compute(req, config, None, 5).recv().unwrap().unwrap();
        let b = spawn_compute(req, config, None, 5).recv().unwrap().unwrap();

        assert_eq!(a.vals, b.vals);
    }
}
