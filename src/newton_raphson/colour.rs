// Turn a root index and an iteration count into a pixel colour.
//
// The root picks a palette entry (wrapping round the palette) and every
// iteration darkens each channel by two, bottoming out at black.

use image::Rgb;
use json::JsonValue;

use crate::error::{FractalError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colours : Vec<Rgb<u8>>
}

fn mod2(val : f64) -> f64 {
    (val / 2.0).fract() * 2.0
}

// Fully saturated colour for a hue in degrees
fn make_base_rgb(hue : f64) -> Rgb<u8> {
    let x_val : f64 = 1.0 - (mod2(hue / 60.0) - 1.0).abs();
    let x = (255.0 * x_val) as u8;
    if hue < 60.0 {
        Rgb([255, x, 0])
    } else if hue < 120.0 {
        Rgb([x, 255, 0])
    } else if hue < 180.0 {
        Rgb([0, 255, x])
    } else if hue < 240.0 {
        Rgb([0, x, 255])
    } else if hue < 300.0 {
        Rgb([x, 0, 255])
    } else {
        Rgb([255, 0, x])
    }
}

fn channel_from_json(input : &JsonValue) -> Option<u8> {
    input.as_u64().filter(|c| *c <= 255).map(|c| c as u8)
}

fn colour_from_json(input : &JsonValue) -> Result<Rgb<u8>> {
    if input.is_array() && input.len() == 3 {
        if let (Some(r), Some(g), Some(b)) = (
            channel_from_json(&input[0]),
            channel_from_json(&input[1]),
            channel_from_json(&input[2])
        ) {
            return Ok(Rgb([r, g, b]));
        }
    }
    Err(FractalError::Config(format!("Bad palette colour {}", input.dump())))
}

impl Palette {
    pub fn new(colours : Vec<Rgb<u8>>) -> Result<Palette> {
        if colours.is_empty() {
            return Err(FractalError::Config("Palette needs at least one colour".to_string()));
        }
        Ok(Palette { colours })
    }

    // red, blue, green, yellow, orange, fuchsia, gold, cyan, magenta
    pub fn reference() -> Palette {
        Palette {
            colours : vec![
                Rgb([255, 0, 0]),
                Rgb([0, 0, 255]),
                Rgb([0, 128, 0]),
                Rgb([255, 255, 0]),
                Rgb([255, 165, 0]),
                Rgb([255, 0, 255]),
                Rgb([255, 215, 0]),
                Rgb([0, 255, 255]),
                Rgb([255, 0, 255])
            ]
        }
    }

    pub fn from_hues(count : usize) -> Result<Palette> {
        Palette::new((0..count).map(
            |i| make_base_rgb(360.0 * i as f64 / count as f64)
        ).collect())
    }

    // Either a list of [r, g, b] or {"hues": n}
    pub fn from_json(input : &JsonValue) -> Result<Palette> {
        if input.is_null() {
            Ok(Palette::reference())
        } else if input.is_array() {
            Palette::new(input.members().map(colour_from_json).collect::<Result<Vec<Rgb<u8>>>>()?)
        } else if let Some(count) = input["hues"].as_usize() {
            Palette::from_hues(count)
        } else {
            Err(FractalError::Config(format!("Bad palette {}", input.dump())))
        }
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn colourise(&self, root_index : usize, iterations : usize) -> Rgb<u8> {
        let base = self.colours[root_index % self.colours.len()];
        let darken = iterations.saturating_mul(2);
        Rgb(base.0.map(
            |c| (c as usize).saturating_sub(darken).min(255) as u8
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_iterations_is_base_colour() {
        let palette = Palette::reference();
        assert_eq!(palette.colourise(0, 0), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_darkening() {
        let palette = Palette::reference();
        // Gold, darkened by 2 * 30
        assert_eq!(palette.colourise(6, 30), Rgb([195, 155, 0]));
    }

    #[test]
    fn test_darkening_clamps_to_black() {
        let palette = Palette::reference();
        assert_eq!(palette.colourise(3, 128), Rgb([0, 0, 0]));
        assert_eq!(palette.colourise(3, usize::MAX), Rgb([0, 0, 0]));
        // Only the channels that run out clamp
        assert_eq!(palette.colourise(4, 100), Rgb([55, 0, 0]));
    }

    #[test]
    fn test_index_wraps() {
        let palette = Palette::reference();
        assert_eq!(palette.len(), 9);
        assert_eq!(palette.colourise(10, 0), palette.colourise(1, 0));
    }

    #[test]
    fn test_hues() {
        let palette = Palette::from_hues(3).unwrap();
        assert_eq!(palette.colourise(0, 0), Rgb([255, 0, 0]));
        assert_eq!(palette.colourise(1, 0), Rgb([0, 255, 0]));
        assert_eq!(palette.colourise(2, 0), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(Palette::new(vec![]).is_err());
        assert!(Palette::from_hues(0).is_err());
        assert!(Palette::from_json(&json::parse("[]").unwrap()).is_err());
    }

    #[test]
    fn test_from_json() {
        let listed = Palette::from_json(&json::parse("[[1, 2, 3], [255, 255, 255]]").unwrap()).unwrap();
        assert_eq!(listed, Palette::new(vec![Rgb([1, 2, 3]), Rgb([255, 255, 255])]).unwrap());
        let hues = Palette::from_json(&json::parse("{\"hues\": 6}").unwrap()).unwrap();
        assert_eq!(hues.len(), 6);
        assert_eq!(Palette::from_json(&JsonValue::Null).unwrap(), Palette::reference());
        assert!(Palette::from_json(&json::parse("[[256, 0, 0]]").unwrap()).is_err());
        assert!(Palette::from_json(&json::parse("\"red\"").unwrap()).is_err());
    }
}
