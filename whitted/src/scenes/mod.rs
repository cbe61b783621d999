pub mod demo;
pub mod mirrors;
pub mod provider;

use demo::DemoSceneProvider;
use mirrors::MirrorsSceneProvider;
use provider::SceneProvider;

pub const SCENE_NAMES: [&str; 2] = ["demo", "mirrors"];

pub fn scene_provider(name: &str) -> Option<Box<dyn SceneProvider>> {
    match name {
        "demo" => Some(Box::new(DemoSceneProvider)),
        "mirrors" => Some(Box::new(MirrorsSceneProvider)),
        _ => None,
    }
}
