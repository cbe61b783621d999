extern crate custom_error;

mod common;
pub mod writer;

pub use writer::BMPWriter;
