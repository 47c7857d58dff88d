// Load a json file that specifies the newton fractal we are going to make and
// its parameters, render it and write it out as an image

use std::env;
use std::fs::{self, create_dir_all};
use std::path::Path;

use image::RgbImage;
use json::JsonValue;
use log::info;

mod error;
mod newton_raphson;

use error::{FractalError, Result};

fn make_directory_for_image(path_str : &str) -> std::io::Result<()> {
    let path = Path::new(path_str);
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => create_dir_all(dir),
        _ => Ok(())
    }
}

fn make_image(input : &JsonValue) -> Result<RgbImage> {
    let algorithm = input["algorithm"].as_str().unwrap_or("newton-raphson");
    match algorithm {
        "newton-raphson" => newton_raphson::generate(input),
        _ => Err(FractalError::UnknownAlgorithm(algorithm.to_string()))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    // Get file to use else default
    let in_filename = env::args().nth(1).unwrap_or("input.json".to_string());
    let out_filename = env::args().nth(2).unwrap_or("output.png".to_string());
    info!("Loading input file: {}", in_filename);
    let contents = fs::read_to_string(&in_filename)?;
    info!("Parsing input file");
    let input = json::parse(&contents)?;
    let image = make_image(&input)?;
    info!("Writing output to {}", out_filename);
    make_directory_for_image(&out_filename)?;
    image.save(&out_filename)?;
    Ok(())
}
