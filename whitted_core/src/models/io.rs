use custom_error::custom_error;

use super::image::Image;

custom_error! {pub ImageIOError
    FailedToWrite {description: String} = "Failed to write image: {description}",
}

pub trait ImageWriter {

    fn format_name(&self) -> String;

    fn write(&self, image: &Image) -> Result<Vec<u8>, ImageIOError>;
}
