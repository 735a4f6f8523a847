//! PNG encoding for rendered RGBA frames.
//!
//! Minimal encoder: color type 6 (RGBA), bit depth 8, filter type none,
//! zlib-compressed IDAT. Animated gradient frames rarely fit a 256-color
//! palette, so there is no indexed mode.

use field_common::{FieldError, FieldResult};
use std::io::Write;

/// Encode RGBA pixel data as a PNG image.
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> FieldResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(FieldError::PngEncode("empty image".to_string()));
    }
    if pixels.len() != width * height * 4 {
        return Err(FieldError::PngEncode(format!(
            "pixel buffer length {} does not match {}x{} RGBA",
            pixels.len(),
            width,
            height
        )));
    }

    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(6); // color type (RGBA)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // IDAT chunk (image data)
    let idat_data = deflate_idat_rgba(pixels, width, height)
        .map_err(|e| FieldError::PngEncode(format!("IDAT compression failed: {e}")))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write a PNG chunk: length, type, data, CRC over type + data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate RGBA scanlines (filter type none) for the IDAT chunk.
fn deflate_idat_rgba(pixels: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    let row_bytes = width * 4;
    let mut uncompressed = Vec::with_capacity(height * (1 + row_bytes));

    for y in 0..height {
        uncompressed.push(0); // filter type: none
        let row_start = y * row_bytes;
        uncompressed.extend_from_slice(&pixels[row_start..row_start + row_bytes]);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_signature_and_ihdr() {
        let pixels = vec![0u8; 3 * 2 * 4];
        let png = create_png(&pixels, 3, 2).unwrap();

        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        // IHDR is the first chunk: 4-byte length, then type
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(&png[16..20], &3u32.to_be_bytes());
        assert_eq!(&png[20..24], &2u32.to_be_bytes());
        assert_eq!(png[24], 8); // bit depth
        assert_eq!(png[25], 6); // color type RGBA
    }

    #[test]
    fn test_png_ends_with_iend() {
        let pixels = vec![255u8; 4 * 4 * 4];
        let png = create_png(&pixels, 4, 4).unwrap();
        // last 12 bytes: length 0, "IEND", CRC
        let tail = &png[png.len() - 12..];
        assert_eq!(&tail[0..4], &0u32.to_be_bytes());
        assert_eq!(&tail[4..8], b"IEND");
    }

    #[test]
    fn test_rejects_empty_image() {
        assert!(create_png(&[], 0, 0).is_err());
    }

    #[test]
    fn test_rejects_mismatched_buffer() {
        let pixels = vec![0u8; 10];
        assert!(create_png(&pixels, 4, 4).is_err());
    }
}
