//! Numerical helpers shared across the pipeline: factorials, Laguerre
//! polynomials, linspace, and iteration macros for our nested-Vec arrays.

pub(crate) const EPS_DIV0: f64 = 0.0000000000001;

// Epsilon added to the min-max denominator during contrast enhancement.
pub(crate) const EPS_CONTRAST: f64 = 1e-10;

// This is an abstraction over a triple-nested loop. We use it to iterate over 3d arrays.
#[macro_export]
macro_rules! iter_arr {
    ($n:expr) => {
        (0..$n).flat_map(move |i| (0..$n).flat_map(move |j| (0..$n).map(move |k| (i, j, k))))
    };
}

/// Evenly-spaced values over a closed range, including both endpoints.
pub fn linspace(range: (f64, f64), num: usize) -> Vec<f64> {
    if num < 2 {
        return vec![range.0];
    }

    let step = (range.1 - range.0) / (num - 1) as f64;
    (0..num).map(|i| range.0 + step * i as f64).collect()
}

/// Compute factorial using a LUT. Inputs above 20 would overflow u64; the
/// quantum-number validation bounds n so we never see them.
pub(crate) fn factorial(val: u16) -> u64 {
    match val {
        0 => 1,
        1 => 1,
        2 => 2,
        3 => 6,
        4 => 24,
        5 => 120,
        6 => 720,
        7 => 5040,
        8 => 40_320,
        9 => 362_880,
        10 => 3_628_800,
        11 => 39_916_800,
        12 => 479_001_600,
        13 => 6_227_020_800,
        14 => 87_178_291_200,
        15 => 1_307_674_368_000,
        16 => 20_922_789_888_000,
        17 => 355_687_428_096_000,
        18 => 6_402_373_705_728_000,
        19 => 121_645_100_408_832_000,
        20 => 2_432_902_008_176_640_000,
        _ => unimplemented!(),
    }
}

/// Binomial coefficient as f64, via the multiplicative formula. Avoids the
/// factorial LUT's range limit for the Laguerre coefficients.
pub(crate) fn binom(n: u64, k: u64) -> f64 {
    let k = k.min(n - k);

    let mut result = 1.;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }

    result
}

/// Generate an associated Laguerre polynomial Lₙ^(α). Used in the radial
/// component of Hydrogen wave functions.
///
/// Uses the closed form Lₙ^(α)(x) = Σₖ (-1)^k C(n+α, n-k) x^k / k!, so it
/// covers arbitrary degree rather than a hard-coded low-order table.
/// https://en.wikipedia.org/wiki/Laguerre_polynomials
pub(crate) fn make_laguerre(n: u16, α: u16) -> impl Fn(f64) -> f64 {
    let mut coeffs = Vec::with_capacity(n as usize + 1);

    for k in 0..=n {
        let sign = if k % 2 == 0 { 1. } else { -1. };
        let c = binom((n + α) as u64, (n - k) as u64) / factorial(k) as f64;
        coeffs.push(sign * c);
    }

    move |x| {
        let mut sum = 0.;
        let mut x_pow = 1.;

        for c in &coeffs {
            sum += c * x_pow;
            x_pow *= x;
        }

        sum
    }
}
