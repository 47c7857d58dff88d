// One render of a config: grid mapping, the per pixel pipeline and the scan.
//
// A session owns the root registry, and rendering consumes the session, so
// nothing discovered in one render leaks into the next.
//
// Root indices depend on the order pixels are classified in. The scan is
// row-major (rows outer, columns inner) in both render modes. The parallel
// mode only farms out the Newton iteration, which is pure; classification
// and colouring still run afterwards in scan order, so both modes produce the
// same image.

use cgmath::Vector2;
use image::{Rgb, RgbImage};
use num::complex::Complex;
use rayon::prelude::*;

use super::complex::ComplexNumber;
use super::config::RenderConfig;
use super::iteration::{Convergence, ConvergenceState, NewtonIterator};
use super::polynomial::Polynomial;
use super::roots::RootRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelShade {
    pub root_index : usize,
    pub iterations : usize,
    pub colour : Rgb<u8>
}

pub struct RenderOutput {
    pub image : RgbImage,
    // Row-major, one per pixel
    pub pixels : Vec<PixelShade>,
    pub roots : Vec<ComplexNumber>,
    pub max_root_index : usize,
    pub exhausted : usize
}

pub struct RenderSession<'a> {
    config : &'a RenderConfig,
    derivative : Polynomial,
    step : Vector2<f64>,
    registry : RootRegistry,
    exhausted : usize
}

impl<'a> RenderSession<'a> {
    pub fn new(config : &'a RenderConfig) -> RenderSession<'a> {
        let (width, height) = config.resolution;
        RenderSession {
            config,
            derivative : config.polynomial.derive(),
            step : config.bounds.step(width, height),
            registry : RootRegistry::new(config.proximity, config.indexing),
            exhausted : 0
        }
    }

    pub fn derivative(&self) -> &Polynomial {
        &self.derivative
    }

    fn iterator(&self) -> NewtonIterator<'_> {
        NewtonIterator::new(
            &self.config.polynomial,
            &self.derivative,
            self.config.max_iterations,
            self.config.tolerance
        ).with_step_limit(self.config.step_limit)
    }

    // Coordinates that land exactly on an axis are nudged off it, the
    // origin is a critical point of the reference polynomial.
    pub fn point_at(&self, row : usize, col : usize) -> ComplexNumber {
        let mut x = self.config.bounds.min.x + col as f64 * self.step.x;
        let mut y = self.config.bounds.min.y + row as f64 * self.step.y;
        if x == 0.0 {
            x = self.config.coordinate_epsilon;
        }
        if y == 0.0 {
            y = self.config.coordinate_epsilon;
        }
        Complex::new(x, y)
    }

    fn converge_at(&self, row : usize, col : usize) -> Convergence {
        self.iterator().converge(self.point_at(row, col))
    }

    fn classify(&mut self, convergence : &Convergence) -> PixelShade {
        if convergence.state == ConvergenceState::Exhausted {
            self.exhausted += 1;
        }
        let root_index = self.registry.classify(&convergence.point);
        PixelShade {
            root_index,
            iterations : convergence.iterations,
            colour : self.config.palette.colourise(root_index, convergence.iterations)
        }
    }

    pub fn shade(&mut self, row : usize, col : usize) -> PixelShade {
        let convergence = self.converge_at(row, col);
        self.classify(&convergence)
    }

    pub fn render(mut self) -> RenderOutput {
        let (width, height) = self.config.resolution;
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(self.shade(row, col));
            }
        }
        self.finish(pixels)
    }

    pub fn render_parallel(mut self) -> RenderOutput {
        let (width, height) = self.config.resolution;
        let convergences : Vec<Convergence> = (0..(width * height)).into_par_iter().map(
            |n| self.converge_at(n / width, n % width)
        ).collect();
        let pixels : Vec<PixelShade> = convergences.iter().map(
            |convergence| self.classify(convergence)
        ).collect();
        self.finish(pixels)
    }

    fn finish(self, pixels : Vec<PixelShade>) -> RenderOutput {
        let (width, height) = self.config.resolution;
        let mut img = RgbImage::new(width as u32, height as u32);
        for (n, shade) in pixels.iter().enumerate() {
            img.put_pixel((n % width) as u32, (n / width) as u32, shade.colour);
        }
        RenderOutput {
            image : img,
            pixels,
            max_root_index : self.registry.max_root_index(),
            roots : self.registry.into_roots(),
            exhausted : self.exhausted
        }
    }
}
