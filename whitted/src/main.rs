#[macro_use]
extern crate log;

use std::{env, fs, process};

use env_logger::Env;

use bmp_support::BMPWriter;
use whitted_core::models::image::Image;
use whitted_core::models::io::ImageWriter;
use whitted_core::utils::print_intro;

use whitted::options::RenderOptions;
use whitted::render::basic::BasicRender;
use whitted::render::render::{Render, RenderError};
use whitted::scenes::scene_provider;

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().collect();
    debug!("args are: {:?}", args);

    let options = match RenderOptions::from_args(&args) {
        Ok(v) => v,
        Err(err) => {
            error!("{}", err);
            error!("usage: whitted --width=640 --height=480 --scene=demo --output=result.bmp");
            process::exit(1);
        }
    };

    if let Err(err) = render_scene(&options) {
        error!("{}", err);
        process::exit(1);
    }

    info!("done");
}

fn render_scene(options: &RenderOptions) -> Result<(), RenderError> {
    let scene_provider = scene_provider(&options.scene).ok_or_else(|| RenderError::UnknownScene {
        name: options.scene.clone(),
    })?;
    let output_writer = BMPWriter::new();

    info!("building scene \"{}\"", options.scene);
    let scene = scene_provider.scene();
    let camera = scene_provider.camera();
    let mut output = Image::new(options.width, options.height);

    info!("rendering {}x{} image", options.width, options.height);
    BasicRender::new().render(&scene, &camera, &mut output)?;

    info!("saving rendered image as {}", output_writer.format_name());
    let image_bytes = output_writer.write(&output)?;
    fs::write(&options.output, &image_bytes)?;
    info!("result saved to {}", options.output);

    Ok(())
}
