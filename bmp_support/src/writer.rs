use std::convert::TryFrom;
use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use custom_error::custom_error;

use whitted_core::models::image::Image;
use whitted_core::models::io::{ImageIOError, ImageWriter};

use crate::common::{row_size, BITS_PER_PIXEL, DIB_HEADER_SIZE, FILE_HEADER_SIZE, PIXELS_PER_METER};

custom_error! {pub BMPWriterError
    TooLarge {description: String} = "Image is too large: {description}",
    Io {source: std::io::Error} = "Failed to write bytes: {source}",
}

pub struct BMPWriter {
}

impl BMPWriter {

    pub fn new() -> Self {
        BMPWriter {}
    }
}

impl ImageWriter for BMPWriter {

    fn format_name(&self) -> String {
        "BMP".to_string()
    }

    fn write(&self, image: &Image) -> Result<Vec<u8>, ImageIOError> {
        write_bmp(image).map_err(|err| ImageIOError::FailedToWrite {
            description: format!("failed to write as bmp: {}", err),
        })
    }
}

fn write_bmp(image: &Image) -> Result<Vec<u8>, BMPWriterError> {
    let row_size = row_size(image.width);
    let pixel_array_size = row_size * image.height;
    let offset = FILE_HEADER_SIZE + DIB_HEADER_SIZE;

    let file_size = u32::try_from(offset as usize + pixel_array_size).map_err(|_| BMPWriterError::TooLarge {
        description: format!("{}x{} does not fit into a bmp file", image.width, image.height),
    })?;
    let width = to_i32(image.width)?;
    let height = to_i32(image.height)?;

    let mut bytes = Vec::with_capacity(file_size as usize);

    // header
    bytes.write_all(b"BM")?;
    bytes.write_u32::<LittleEndian>(file_size)?;
    bytes.write_u16::<LittleEndian>(0)?;
    bytes.write_u16::<LittleEndian>(0)?;
    bytes.write_u32::<LittleEndian>(offset)?;

    // BITMAPINFOHEADER, positive height means bottom-up rows
    bytes.write_u32::<LittleEndian>(DIB_HEADER_SIZE)?;
    bytes.write_i32::<LittleEndian>(width)?;
    bytes.write_i32::<LittleEndian>(height)?;
    bytes.write_u16::<LittleEndian>(1)?;
    bytes.write_u16::<LittleEndian>(BITS_PER_PIXEL)?;
    bytes.write_u32::<LittleEndian>(0)?; // uncompressed
    bytes.write_u32::<LittleEndian>(pixel_array_size as u32)?;
    bytes.write_i32::<LittleEndian>(PIXELS_PER_METER)?;
    bytes.write_i32::<LittleEndian>(PIXELS_PER_METER)?;
    bytes.write_u32::<LittleEndian>(0)?;
    bytes.write_u32::<LittleEndian>(0)?;

    let padding = row_size - image.width * 3;
    for y in 0..image.height {
        for x in 0..image.width {
            let pixel = image.get_pixel_bottom_left_origin(x, y);
            bytes.write_all(&[pixel.blue, pixel.green, pixel.red])?;
        }
        for _ in 0..padding {
            bytes.push(0);
        }
    }

    Ok(bytes)
}

fn to_i32(size: usize) -> Result<i32, BMPWriterError> {
    i32::try_from(size).map_err(|_| BMPWriterError::TooLarge {
        description: format!("dimension {} does not fit into i32", size),
    })
}
