pub mod material;
pub mod texture;
