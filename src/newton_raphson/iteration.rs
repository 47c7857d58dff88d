// Newton's method for a single starting point.
//
// Only steps whose correction is below the tolerance use up the iteration
// budget, a large step is free. So a point keeps being refined until it has
// made `max_iterations` small steps, however many large ones that takes.
// A non-finite correction compares false against the tolerance and so counts
// as a small step, which is what stops a point that hit a zero derivative.

use super::complex::{ComplexNumber, ComplexMagnitude};
use super::polynomial::Polynomial;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewtonStep {
    pub point : ComplexNumber,
    pub correction : ComplexNumber
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvergenceState {
    Converged,
    // Only reachable with a step limit
    Exhausted
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Convergence {
    pub point : ComplexNumber,
    pub iterations : usize,
    pub state : ConvergenceState
}

pub struct NewtonIterator<'a> {
    polynomial : &'a Polynomial,
    derivative : &'a Polynomial,
    max_iterations : usize,
    tolerance : f64,
    step_limit : Option<usize>
}

// Endless sequence of Newton steps from a starting point.
pub struct NewtonSteps<'a> {
    polynomial : &'a Polynomial,
    derivative : &'a Polynomial,
    z : ComplexNumber
}

impl<'a> Iterator for NewtonSteps<'a> {
    type Item = NewtonStep;

    fn next(&mut self) -> Option<NewtonStep> {
        let correction = self.polynomial.evaluate(self.z) / self.derivative.evaluate(self.z);
        self.z = self.z - correction;
        Some(NewtonStep { point : self.z, correction })
    }
}

impl<'a> NewtonIterator<'a> {
    pub fn new(
        polynomial : &'a Polynomial,
        derivative : &'a Polynomial,
        max_iterations : usize,
        tolerance : f64
    ) -> NewtonIterator<'a> {
        NewtonIterator { polynomial, derivative, max_iterations, tolerance, step_limit : None }
    }

    pub fn with_step_limit(self, step_limit : Option<usize>) -> NewtonIterator<'a> {
        NewtonIterator { step_limit, ..self }
    }

    pub fn steps(&self, initial : ComplexNumber) -> NewtonSteps<'a> {
        NewtonSteps {
            polynomial : self.polynomial,
            derivative : self.derivative,
            z : initial
        }
    }

    pub fn converge(&self, initial : ComplexNumber) -> Convergence {
        let mut z = initial;
        let mut iterations : usize = 0;
        let mut settled : usize = 0;
        let mut steps = self.steps(initial);
        while settled < self.max_iterations {
            if self.step_limit.map_or(false, |limit| iterations >= limit) {
                return Convergence { point : z, iterations, state : ConvergenceState::Exhausted };
            }
            let step = match steps.next() {
                Some(step) => step,
                None => break
            };
            z = step.point;
            iterations += 1;
            if !(step.correction.absolute_value() >= self.tolerance) {
                settled += 1;
            }
        }
        Convergence { point : z, iterations, state : ConvergenceState::Converged }
    }
}
