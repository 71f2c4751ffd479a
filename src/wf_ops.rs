//! Hydrogen wave-function evaluation: the radial part, the angular part
//! (spherical harmonics), and the probability density |ψ|² over a grid.
//!
//! For the analytic H wave fns:
//! https://chem.libretexts.org/Courses/University_of_California_Davis/
//! UCD_Chem_107B%3A_Physical_Chemistry_for_Life_Scientists/Chapters/4%3A_Quantum_Theory/
//! 4.10%3A_The_Schr%C3%B6dinger_Wave_Equation_for_the_Hydrogen_Atom

use rayon::prelude::*;

use crate::{
    complex_nums::Cplx,
    error::StateError,
    grid_setup::{new_data_real, Arr3dReal, Grid},
    util::{self, factorial},
};

// Hartree units.
pub const A_0: f64 = 1.;

/// Largest supported principal quantum number. The radial prefactor takes
/// (n+l)!, and with l <= n-1 this bound keeps it inside the u64 factorial
/// LUT. Presets only exercise n <= 5.
pub const MAX_N: u16 = 10;

/// The (n, l, m) triple indexing a Hydrogen eigenstate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantumNums {
    pub n: u16,
    pub l: u16,
    pub m: i16,
}

impl QuantumNums {
    /// Validate at the request boundary. Invalid combinations are rejected
    /// here, before any grid or density work.
    pub fn new(n: u16, l: u16, m: i16) -> Result<Self, StateError> {
        if n < 1 {
            return Err(StateError::InvalidN { n });
        }
        if n > MAX_N {
            return Err(StateError::NAboveSupported { n });
        }
        if l >= n {
            return Err(StateError::InvalidL { n, l });
        }
        if m.unsigned_abs() > l {
            return Err(StateError::InvalidM { l, m });
        }

        Ok(Self { n, l, m })
    }

    /// Spectroscopic name, eg "2p (m=0)".
    pub fn descrip(&self) -> String {
        let l_char = match self.l {
            0 => 's',
            1 => 'p',
            2 => 'd',
            3 => 'f',
            4 => 'g',
            5 => 'h',
            _ => '?',
        };

        format!("{}{} (m={})", self.n, l_char, self.m)
    }
}

/// Calculate the radial part of the wave function.
///
/// Structure: a normalization term built from factorials of (n-l-1) and
/// (n+l), exponential decay exp(-ρ/2), the power term ρ^l, and the
/// associated Laguerre polynomial of degree n-l-1 and order 2l+1, where
/// ρ = 2r/(n a₀).
///
/// [This ref](http://staff.ustc.edu.cn/~zqj/posts/Hydrogen-Wavefunction/) has a general equation
/// at its top, separated into radial and angular parts.
pub fn radial(n: u16, l: u16, r: f64) -> f64 {
    let nf = n as f64;

    let norm_term_num = (2. / (nf * A_0)).powi(3) * factorial(n - l - 1) as f64;
    let norm_term_denom = 2. * nf * factorial(n + l) as f64;
    let norm_term = (norm_term_num / norm_term_denom).sqrt();

    let ρ = 2. * r / (nf * A_0);

    let L = util::make_laguerre(n - l - 1, 2 * l + 1);

    norm_term * (-ρ / 2.).exp() * ρ.powi(l.into()) * L(ρ)
}

/// Calculate the angular part: the spherical harmonic of degree l, order m.
///
/// We use the "physics" (ISO) convention, where θ is the polar angle from
/// the +z axis covering half a turn, and ϕ the azimuth covering the full
/// way around, with the Condon-Shortley phase on m.
///
/// https://docs.rs/scilib/latest/scilib/quantum/fn.spherical_harmonics.html
pub fn angular(l: u16, m: i16, θ: f64, ϕ: f64) -> Cplx {
    let result = scilib::quantum::spherical_harmonics(l.into(), m.into(), θ, ϕ);

    Cplx {
        real: result.re,
        im: result.im,
    }
}

/// Evaluate ψ = R(r) · Y(θ, ϕ) at a single point.
pub fn psi(state: &QuantumNums, r: f64, θ: f64, ϕ: f64) -> Cplx {
    let radial_part = radial(state.n, state.l, r);
    let angular_part = angular(state.l, state.m, θ, ϕ);

    angular_part * radial_part
}

/// Evaluate |ψ|² over the full grid. Real and non-negative everywhere; the
/// result is unnormalized (downstream stages max-normalize for display).
///
/// Pure over its inputs; the outer grid axis is parallelized, since this is
/// the O(resolution³) hot loop.
pub fn probability_density(state: &QuantumNums, grid: &Grid) -> Arr3dReal {
    let grid_n = grid.grid_n;
    let mut result = new_data_real(grid_n);

    result.par_iter_mut().enumerate().for_each(|(i, plane)| {
        for j in 0..grid_n {
            for k in 0..grid_n {
                let ψ = psi(state, grid.r[i][j][k], grid.θ[i][j][k], grid.ϕ[i][j][k]);
                plane[j][k] = ψ.abs_sq();
            }
        }
    });

    result
}

/// Discrete estimate of ∫|ψ|² dV over the grid, weighting each sample by the
/// cell volume. Approaches 1 for extents that capture the orbital's tail.
pub fn norm_estimate(density: &Arr3dReal, grid: &Grid) -> f64 {
    let mut sum = 0.;

    for plane in density {
        for row in plane {
            for val in row {
                sum += val;
            }
        }
    }

    sum * grid.cell_volume()
}

#[cfg(test)]
mod tests {
    use crate::{grid_setup::generate_grid, iter_arr};

    use super::*;

    #[test]
    fn test_state_validation() {
        assert!(QuantumNums::new(1, 0, 0).is_ok());
        assert!(QuantumNums::new(5, 4, -4).is_ok());

        assert_eq!(
            QuantumNums::new(0, 0, 0),
            Err(StateError::InvalidN { n: 0 })
        );
        assert_eq!(
            QuantumNums::new(2, 2, 0),
            Err(StateError::InvalidL { n: 2, l: 2 })
        );
        assert_eq!(
            QuantumNums::new(2, 1, 2),
            Err(StateError::InvalidM { l: 1, m: 2 })
        );
        assert_eq!(
            QuantumNums::new(11, 0, 0),
            Err(StateError::NAboveSupported { n: 11 })
        );
    }

    #[test]
    fn test_radial_ground_state_at_origin() {
        // R₁₀(r) = 2 e^-r in Bohr units; R₁₀(0) = 2.
        assert!((radial(1, 0, 0.) - 2.).abs() < 1e-12);
        assert!((radial(1, 0, 1.) - 2. * (-1.0_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_density_non_negative() {
        let state = QuantumNums::new(3, 1, -1).unwrap();
        let grid = generate_grid(15., 15);
        let density = probability_density(&state, &grid);

        for (i, j, k) in iter_arr!(15) {
            assert!(density[i][j][k] >= 0.);
        }
    }

    #[test]
    fn test_ground_state_radial_symmetry() {
        let state = QuantumNums::new(1, 0, 0).unwrap();
        let grid = generate_grid(3., 11);
        let density = probability_density(&state, &grid);

        let c = 5;
        // Equal radius from the origin, along different axes and signs.
        let probe = [
            density[c + 1][c][c],
            density[c - 1][c][c],
            density[c][c + 1][c],
            density[c][c][c + 1],
            density[c][c][c - 1],
        ];

        for val in &probe[1..] {
            assert!((val - probe[0]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_2pz_nodal_plane_and_lobes() {
        let state = QuantumNums::new(2, 1, 0).unwrap();
        let grid = generate_grid(12., 21);
        let density = probability_density(&state, &grid);

        let c = 10; // z = 0 at index 10.

        // Density vanishes in the z = 0 plane.
        for i in 0..21 {
            for j in 0..21 {
                assert!(density[i][j][c] < 1e-10);
            }
        }

        // Two symmetric lobes along ±z.
        let mut max_on_axis = 0.;
        for k in 0..21 {
            if density[c][c][k] > max_on_axis {
                max_on_axis = density[c][c][k];
            }
            assert!((density[c][c][k] - density[c][c][20 - k]).abs() < 1e-10);
        }
        assert!(max_on_axis > 0.);
    }

    #[test]
    fn test_norm_estimates_near_one() {
        // (state, extent, resolution) sized so the grid captures the tail.
        let cases = [
            (QuantumNums { n: 1, l: 0, m: 0 }, 7., 41),
            (QuantumNums { n: 2, l: 1, m: 0 }, 14., 41),
            (QuantumNums { n: 3, l: 0, m: 0 }, 30., 45),
            (QuantumNums { n: 3, l: 2, m: 1 }, 24., 45),
            (QuantumNums { n: 5, l: 4, m: 2 }, 75., 61),
        ];

        for (state, extent, res) in cases {
            let grid = generate_grid(extent, res);
            let density = probability_density(&state, &grid);
            let norm = norm_estimate(&density, &grid);

            assert!(
                (norm - 1.).abs() < 0.1,
                "norm {} out of tolerance for {:?}",
                norm,
                state
            );
        }
    }
}
