use indicatif::{ProgressBar, ProgressStyle};

use whitted_core::models::image::Image;
use whitted_core::models::pixel::Pixel;

use crate::materials::material::Color;
use crate::render::render::{Render, RenderError};
use crate::scene::{camera::Camera, scene::Scene};

/// Traces one ray per pixel, row by row.
pub struct BasicRender {
    show_progress: bool,
}

impl BasicRender {

    pub fn new() -> Self {
        Self {
            show_progress: true,
        }
    }

    pub fn without_progress() -> Self {
        Self {
            show_progress: false,
        }
    }

    fn progress_bar(&self, rows: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new(rows as u64);
        progress.set_style(ProgressStyle::default_bar().template("{elapsed_precise} [{bar:40}] {pos}/{len} rows"));
        progress
    }
}

impl Render for BasicRender {

    fn render(&self, scene: &Scene, camera: &Camera, render_to: &mut Image) -> Result<(), RenderError> {
        if render_to.is_empty() {
            return Err(RenderError::EmptyImage {
                description: format!("image is {}x{}", render_to.width, render_to.height),
            });
        }

        let width = render_to.width;
        let height = render_to.height;
        debug!("tracing {}x{} rays", width, height);

        let progress = self.progress_bar(height);
        for y in 0..height {
            for x in 0..width {
                let ray = camera.ray_for_pixel(x, y, width, height);
                render_to.set_pixel_bottom_left_origin(x, y, color_to_pixel(&scene.trace_ray(&ray)));
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(())
    }
}

pub fn color_to_pixel(color: &Color) -> Pixel {
    Pixel::from_intensity(color.x, color.y, color.z)
}
