use custom_error::custom_error;

use whitted_core::models::image::Image;
use whitted_core::models::io::ImageIOError;

use crate::scene::{camera::Camera, scene::Scene};

custom_error! {pub RenderError
    EmptyImage {description: String} = "Nothing to render: {description}",
    UnknownScene {name: String} = "No scene named \"{name}\"",
    FailedToEncode {source: ImageIOError} = "Failed to encode rendered image: {source}",
    FailedToSave {source: std::io::Error} = "Failed to save rendered image: {source}",
}

pub trait Render {

    fn render(&self, scene: &Scene, camera: &Camera, render_to: &mut Image) -> Result<(), RenderError>;
}
