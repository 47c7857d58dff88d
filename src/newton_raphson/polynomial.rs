// Polynomials with complex coefficients.
//
// Coefficient i belongs to the x^i term, so index 0 is the constant. An empty
// coefficient list is the zero polynomial and trailing zeros are never trimmed.

use std::fmt;

use json::JsonValue;
use num::complex::Complex;

use crate::error::{FractalError, Result};
use super::complex::{ComplexNumber, ZERO, describe};

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients : Vec<ComplexNumber>
}

fn coefficient_from_json(input : &JsonValue) -> Result<ComplexNumber> {
    if let Some(re) = input.as_f64() {
        return Ok(Complex::new(re, 0.0));
    }
    if input.is_array() && input.len() == 2 {
        if let (Some(re), Some(im)) = (input[0].as_f64(), input[1].as_f64()) {
            return Ok(Complex::new(re, im));
        }
    }
    Err(FractalError::Config(format!("Bad polynomial coefficient {}", input.dump())))
}

impl Polynomial {
    pub fn new(coefficients : Vec<ComplexNumber>) -> Polynomial {
        Polynomial { coefficients }
    }

    pub fn from_real(coefficients : &[f64]) -> Polynomial {
        Polynomial {
            coefficients : coefficients.iter().map(|re| Complex::new(*re, 0.0)).collect()
        }
    }

    // x^3 + 1
    pub fn reference() -> Polynomial {
        Polynomial::from_real(&[1.0, 0.0, 0.0, 1.0])
    }

    // Coefficients are listed highest degree first in job files
    pub fn from_json(input : &JsonValue) -> Result<Polynomial> {
        if !input.is_array() {
            return Err(FractalError::Config("Missing coefficients".to_string()))
        }
        let mut coefficients = input.members().map(
            coefficient_from_json
        ).collect::<Result<Vec<ComplexNumber>>>()?;
        coefficients.reverse();
        Ok(Polynomial { coefficients })
    }

    pub fn push(&mut self, coefficient : ComplexNumber) {
        self.coefficients.push(coefficient);
    }

    pub fn coefficients(&self) -> &[ComplexNumber] {
        &self.coefficients
    }

    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    // Coefficient q of the derivative is q+1 times coefficient q+1 here.
    pub fn derive(&self) -> Polynomial {
        Polynomial {
            coefficients : self.coefficients.iter().enumerate().skip(1).map(
                |(q, c)| c * Complex::new(q as f64, 0.0)
            ).collect()
        }
    }

    // Each power is built up by repeated multiplication rather than Horner's
    // rule; the rounding of the rendered image depends on it.
    pub fn evaluate(&self, x : ComplexNumber) -> ComplexNumber {
        let mut acc = ZERO;
        for (i, coeff) in self.coefficients.iter().enumerate() {
            let mut term = *coeff;
            if i > 0 {
                let mut power = x;
                for _ in 0..(i - 1) {
                    power = power * x;
                }
                term = term * power;
            }
            acc = acc + term;
        }
        acc
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms : Vec<String> = self.coefficients.iter().enumerate().map(
            |(i, c)| format!("{}{}", describe(c), "x".repeat(i))
        ).collect();
        write!(f, "{}", terms.join(" + "))
    }
}
