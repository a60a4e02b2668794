use chroma_analysis::frame::{Frame, FrameConfig, FrameError, PixelFormat};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("could not decode image bytes: {0}")]
    Malformed(#[from] image::ImageError),

    #[error(transparent)]
    Frame(#[from] FrameError),
}

// Decodes encoded image bytes into a blue-green-red frame.
pub fn decode_frame(bytes: &[u8]) -> Result<Frame, DecodeError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for pixel in rgb.pixels() {
        data.extend([pixel[2], pixel[1], pixel[0]]);
    }

    let frame = Frame::new(FrameConfig {
        data,
        width,
        height,
        format: PixelFormat::BGR8,
    })?;
    Ok(frame)
}
