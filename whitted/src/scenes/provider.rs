use crate::scene::{camera::Camera, scene::Scene};

pub trait SceneProvider {

    fn scene(&self) -> Scene;

    fn camera(&self) -> Camera {
        Camera::default()
    }
}
