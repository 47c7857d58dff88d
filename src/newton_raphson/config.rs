// Everything a render needs, fixed before the first pixel is computed.

use cgmath::{point2, vec2, Point2, Vector2};
use json::JsonValue;

use crate::error::{FractalError, Result};
use super::colour::Palette;
use super::polynomial::Polynomial;
use super::roots::IndexPolicy;

pub const MAX_ITERATIONS : usize = 30;
pub const CONVERGENCE_TOLERANCE : f64 = 0.5;
pub const ROOT_PROXIMITY : f64 = 0.01;
pub const COORDINATE_EPSILON : f64 = 1e-4;

// Region of the complex plane covered by the image
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneBounds {
    pub min : Point2<f64>,
    pub max : Point2<f64>
}

impl PlaneBounds {
    pub fn new(x_min : f64, x_max : f64, y_min : f64, y_max : f64) -> PlaneBounds {
        PlaneBounds { min : point2(x_min, y_min), max : point2(x_max, y_max) }
    }

    // Plane distance between neighbouring pixels
    pub fn step(&self, width : usize, height : usize) -> Vector2<f64> {
        let size = self.max - self.min;
        vec2(size.x / width as f64, size.y / height as f64)
    }
}

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub resolution : (usize, usize),
    pub bounds : PlaneBounds,
    pub polynomial : Polynomial,
    pub palette : Palette,
    pub max_iterations : usize,
    pub tolerance : f64,
    pub proximity : f64,
    pub coordinate_epsilon : f64,
    pub step_limit : Option<usize>,
    pub indexing : IndexPolicy,
    pub parallel : bool
}

impl RenderConfig {
    pub fn reference(width : usize, height : usize, bounds : PlaneBounds) -> RenderConfig {
        RenderConfig {
            resolution : (width, height),
            bounds,
            polynomial : Polynomial::reference(),
            palette : Palette::reference(),
            max_iterations : MAX_ITERATIONS,
            tolerance : CONVERGENCE_TOLERANCE,
            proximity : ROOT_PROXIMITY,
            coordinate_epsilon : COORDINATE_EPSILON,
            step_limit : None,
            indexing : IndexPolicy::Reference,
            parallel : false
        }
    }

    pub fn from_json(input : &JsonValue) -> Result<RenderConfig> {
        let res_x = input["resolution_x"].as_usize().unwrap_or(1024);
        let res_y = input["resolution_y"].as_usize().unwrap_or(1024);
        if res_x == 0 || res_y == 0 {
            return Err(FractalError::Config(format!("Empty resolution {}x{}", res_x, res_y)));
        }
        let bounds = PlaneBounds::new(
            input["x_min"].as_f64().unwrap_or(-1.0),
            input["x_max"].as_f64().unwrap_or(1.0),
            input["y_min"].as_f64().unwrap_or(-1.0),
            input["y_max"].as_f64().unwrap_or(1.0)
        );
        let polynomial = if input["polynomial"].is_null() {
            Polynomial::reference()
        } else {
            Polynomial::from_json(&input["polynomial"])?
        };
        let palette = Palette::from_json(&input["palette"])?;
        let indexing_name = input["root_indexing"].as_str().unwrap_or("reference");
        let indexing = IndexPolicy::from_name(indexing_name).ok_or_else(
            || FractalError::Config(format!("Unknown root indexing {}", indexing_name))
        )?;
        Ok(RenderConfig {
            resolution : (res_x, res_y),
            bounds,
            polynomial,
            palette,
            max_iterations : input["max_iterations"].as_usize().unwrap_or(MAX_ITERATIONS),
            tolerance : input["convergence_tolerance"].as_f64().unwrap_or(CONVERGENCE_TOLERANCE),
            proximity : input["root_proximity"].as_f64().unwrap_or(ROOT_PROXIMITY),
            coordinate_epsilon : input["coordinate_epsilon"].as_f64().unwrap_or(COORDINATE_EPSILON),
            step_limit : input["step_limit"].as_usize(),
            indexing,
            parallel : input["parallel"].as_bool().unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use cgmath::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::from_json(&json::parse("{}").unwrap()).unwrap();
        assert_eq!(config.resolution, (1024, 1024));
        assert_eq!(config.bounds, PlaneBounds::new(-1.0, 1.0, -1.0, 1.0));
        assert_eq!(config.polynomial, Polynomial::reference());
        assert_eq!(config.palette, Palette::reference());
        assert_eq!(config.max_iterations, 30);
        assert_eq!(config.step_limit, None);
        assert_eq!(config.indexing, IndexPolicy::Reference);
        assert!(!config.parallel);
    }

    #[test]
    fn test_overrides() {
        let input = json::parse(r#"{
            "resolution_x": 64, "resolution_y": 32,
            "x_min": -2, "x_max": 2, "y_min": -1.5, "y_max": 1.5,
            "polynomial": [1, 0, 0, -1],
            "palette": {"hues": 4},
            "max_iterations": 10,
            "convergence_tolerance": 0.1,
            "step_limit": 500,
            "root_indexing": "consistent",
            "parallel": true
        }"#).unwrap();
        let config = RenderConfig::from_json(&input).unwrap();
        assert_eq!(config.resolution, (64, 32));
        assert_eq!(config.polynomial, Polynomial::from_real(&[-1.0, 0.0, 0.0, 1.0]));
        assert_eq!(config.palette.len(), 4);
        assert_eq!(config.max_iterations, 10);
        assert_abs_diff_eq!(config.tolerance, 0.1);
        assert_eq!(config.step_limit, Some(500));
        assert_eq!(config.indexing, IndexPolicy::Consistent);
        assert!(config.parallel);
        let step = config.bounds.step(64, 32);
        assert_abs_diff_eq!(step.x, 0.0625);
        assert_abs_diff_eq!(step.y, 0.09375);
    }

    #[test]
    fn test_rejects_bad_config() {
        for bad in [
            r#"{"resolution_x": 0}"#,
            r#"{"root_indexing": "first"}"#,
            r#"{"polynomial": "x^3"}"#,
            r#"{"palette": []}"#
        ] {
            assert!(RenderConfig::from_json(&json::parse(bad).unwrap()).is_err(), "{}", bad);
        }
    }
}
