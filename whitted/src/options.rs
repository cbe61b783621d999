use custom_error::custom_error;

use crate::scenes::SCENE_NAMES;

const DEFAULT_WIDTH: usize = 640;
const DEFAULT_HEIGHT: usize = 480;
const DEFAULT_SCENE: &str = "demo";
const DEFAULT_OUTPUT: &str = "result.bmp";

custom_error! {pub OptionsError
    InvalidNumber {name: String, value: String} = "Expected --{name} to be a positive number, got \"{value}\"",
    UnknownScene {name: String} = "Unknown scene \"{name}\"",
}

/// Options are passed as `--name=value`.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: usize,
    pub height: usize,
    pub scene: String,
    pub output: String,
}

impl RenderOptions {

    pub fn from_args(args: &[String]) -> Result<Self, OptionsError> {
        let scene = argument_value(args, "scene").unwrap_or_else(|| DEFAULT_SCENE.to_string());
        if !SCENE_NAMES.contains(&scene.as_str()) {
            return Err(OptionsError::UnknownScene {
                name: scene,
            });
        }

        Ok(Self {
            width: size_argument(args, "width", DEFAULT_WIDTH)?,
            height: size_argument(args, "height", DEFAULT_HEIGHT)?,
            scene,
            output: argument_value(args, "output").unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        })
    }
}

impl Default for RenderOptions {

    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scene: DEFAULT_SCENE.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
        }
    }
}

fn size_argument(args: &[String], argument_name: &str, default: usize) -> Result<usize, OptionsError> {
    let value = match argument_value(args, argument_name) {
        Some(v) => v,
        None => return Ok(default),
    };

    match value.trim().parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(OptionsError::InvalidNumber {
            name: argument_name.to_string(),
            value,
        }),
    }
}

fn argument_value(args: &[String], argument_name: &str) -> Option<String> {
    let prefix = format!("--{}=", argument_name);

    args.iter()
        .find(|s| s.starts_with(&prefix))
        .map(|s| s[prefix.len()..].to_string())
}
