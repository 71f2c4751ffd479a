//! This module contains a `Complex` number type, and methods for it.

use std::fmt;
use std::ops::{Add, Mul, Sub};

pub const IM: Cplx = Cplx::new(0., 1.);

#[derive(Copy, Clone)]
pub struct Cplx {
    pub real: f64,
    pub im: f64,
}

impl Cplx {
    pub const fn new(real: f64, im: f64) -> Self {
        Self { real, im }
    }

    pub const fn new_zero() -> Self {
        Self { real: 0., im: 0. }
    }

    pub const fn from_real(real: f64) -> Self {
        Self { real, im: 0. }
    }

    pub fn conj(&self) -> Self {
        Self {
            real: self.real,
            im: -self.im,
        }
    }

    /// ψ* ψ; the quantity we turn into a probability density.
    pub fn abs_sq(&self) -> f64 {
        self.real.powi(2) + self.im.powi(2)
    }

    pub fn mag(&self) -> f64 {
        self.abs_sq().sqrt()
    }

    pub fn phase(&self) -> f64 {
        (self.im).atan2(self.real)
    }
}

impl Add for Cplx {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            im: self.im + other.im,
        }
    }
}

impl Sub for Cplx {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            im: self.im - other.im,
        }
    }
}

impl Mul for Cplx {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.im * other.im,
            im: self.real * other.im + self.im * other.real,
        }
    }
}

impl Mul<f64> for Cplx {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Self {
            real: self.real * other,
            im: self.im * other,
        }
    }
}

impl fmt::Display for Cplx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} + {}i", self.real, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_sq() {
        let z = Cplx::new(3., 4.);
        assert!((z.abs_sq() - 25.).abs() < 1e-12);
        assert!((z.mag() - 5.).abs() < 1e-12);
    }

    #[test]
    fn test_mul() {
        let z = IM * IM;
        assert!((z.real + 1.).abs() < 1e-12);
        assert!(z.im.abs() < 1e-12);
    }
}
