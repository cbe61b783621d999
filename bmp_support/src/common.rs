pub const FILE_HEADER_SIZE: u32 = 14;
pub const DIB_HEADER_SIZE: u32 = 40;
pub const BITS_PER_PIXEL: u16 = 24;
pub const BYTES_PER_PIXEL: usize = 3;

// 72 DPI
pub const PIXELS_PER_METER: i32 = 2835;

/// Rows of the pixel array are padded to a multiple of 4 bytes.
pub fn row_size(width: usize) -> usize {
    (width * BYTES_PER_PIXEL + 3) / 4 * 4
}
