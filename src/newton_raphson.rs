// Make an image out of the newton raphson root finding for a complex polynomial
//
// For each pixel track the number of iterations taken to converge and the
// root converged to, and use these to pick the colour and how dark it is.

use image::RgbImage;
use json::JsonValue;
use log::{debug, info, warn};

use crate::error::Result;

mod colour;
mod complex;
mod config;
mod iteration;
mod polynomial;
mod roots;
mod session;

use complex::{ComplexMagnitude, describe};
use config::RenderConfig;
use session::{RenderOutput, RenderSession};

fn render(config : &RenderConfig) -> RenderOutput {
    let session = RenderSession::new(config);
    info!("Polynomial: {}", config.polynomial);
    info!("Derivative: {}", session.derivative());
    if config.polynomial.degree().map_or(true, |degree| degree == 0) {
        warn!("Constant polynomial, every newton step divides by zero");
    }
    info!(
        "Rendering {}x{} ({})",
        config.resolution.0,
        config.resolution.1,
        if config.parallel { "parallel" } else { "sequential" }
    );
    if config.parallel {
        session.render_parallel()
    } else {
        session.render()
    }
}

pub fn generate(input : &JsonValue) -> Result<RgbImage> {
    info!("Generating newton raphson image");
    let config = RenderConfig::from_json(input)?;
    let output = render(&config);
    info!("Found {} roots, max root index {}", output.roots.len(), output.max_root_index);
    for root in output.roots.iter() {
        debug!("Root {} at angle {}", describe(root), root.angle());
    }
    if output.exhausted > 0 {
        warn!("{} pixels hit the step limit before converging", output.exhausted);
    }
    Ok(output.image)
}
