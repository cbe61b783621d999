pub mod camera;
pub mod directional_light;
pub mod light;
pub mod scene;
pub mod scene_object;
