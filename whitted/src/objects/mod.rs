pub mod plane;
pub mod sphere;
pub mod triangle;
