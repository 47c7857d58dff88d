// Complex values used throughout the generator.
//
// `num`'s Complex<f64> already has value semantics, exact field equality and
// the textbook field operations (division multiplies by the conjugate and
// divides by the squared norm, with no guard against a zero divisor). What it
// lacks is the plain sqrt magnitude and the single quadrant angle, which live
// on the extension trait below.

use num::complex::Complex;

pub type ComplexNumber = Complex<f64>;

pub const ZERO : ComplexNumber = Complex::new(0.0, 0.0);

pub trait ComplexMagnitude {
    /// sqrt(re^2 + im^2), deliberately not `hypot`.
    fn absolute_value(&self) -> f64;

    /// atan(im / re). Only covers the right half plane, `arg` is the
    /// four quadrant version.
    fn angle(&self) -> f64;
}

impl ComplexMagnitude for ComplexNumber {
    fn absolute_value(&self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    fn angle(&self) -> f64 {
        (self.im / self.re).atan()
    }
}

pub fn describe(z : &ComplexNumber) -> String {
    format!("({} + {}i)", z.re, z.im)
}
