/// Photo image preparation
///
/// Downloads a photo's display variant and turns it into the two
/// handles the screen needs: the sharp card image and a small, heavily
/// blurred copy for the fullscreen backdrop.
use iced::widget::image::Handle;
use image::DynamicImage;

use crate::api::{FetchError, SearchClient};
use crate::state::data::PhotoId;

/// Longest side of the backdrop before blurring
const BACKDROP_MAX_DIM: u32 = 256;

/// Gaussian sigma on the downscaled backdrop (roughly a 50px blur at phone width)
const BACKDROP_SIGMA: f32 = 12.0;

/// Decoded images for one photo
#[derive(Debug, Clone)]
pub struct PhotoImages {
    pub card: Handle,
    pub backdrop: Handle,
}

/// Download and prepare the images of one photo
pub async fn load_photo_images(
    client: SearchClient,
    id: PhotoId,
    uri: String,
) -> (PhotoId, Result<PhotoImages, FetchError>) {
    (id, download_and_prepare(&client, &uri).await)
}

async fn download_and_prepare(client: &SearchClient, uri: &str) -> Result<PhotoImages, FetchError> {
    let bytes = client.download(uri).await?;
    // Decoding and blurring are CPU-bound
    tokio::task::spawn_blocking(move || prepare(bytes)).await?
}

/// Decode downloaded bytes into card and backdrop handles
pub fn prepare(bytes: Vec<u8>) -> Result<PhotoImages, FetchError> {
    let decoded = image::load_from_memory(&bytes)?;
    let backdrop = blur_backdrop(&decoded);

    Ok(PhotoImages {
        card: Handle::from_bytes(bytes),
        backdrop: Handle::from_rgba(backdrop.width(), backdrop.height(), backdrop.into_raw()),
    })
}

/// Downscale then blur
pub fn blur_backdrop(image: &DynamicImage) -> image::RgbaImage {
    image
        .thumbnail(BACKDROP_MAX_DIM, BACKDROP_MAX_DIM)
        .blur(BACKDROP_SIGMA)
        .to_rgba8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn striped(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, _| {
            if (x / 10) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        })
    }

    #[test]
    fn test_backdrop_is_small_and_keeps_aspect() {
        let source = DynamicImage::ImageRgba8(striped(600, 1000));
        let blurred = blur_backdrop(&source);

        assert_eq!(blurred.height(), BACKDROP_MAX_DIM);
        assert!(blurred.width() >= 150 && blurred.width() <= 155);
    }

    #[test]
    fn test_backdrop_softens_edges() {
        let source = DynamicImage::ImageRgba8(striped(600, 1000));
        let blurred = blur_backdrop(&source);

        // Hard black/white stripes become mid greys
        let row = blurred.height() / 2;
        for x in 20..blurred.width() - 20 {
            let value = blurred.get_pixel(x, row)[0];
            assert!(value > 40 && value < 215, "pixel {x} not blurred: {value}");
        }
    }

    #[test]
    fn test_prepare_decodes_png() {
        let mut encoded = Cursor::new(Vec::new());
        striped(40, 70)
            .write_to(&mut encoded, ImageFormat::Png)
            .unwrap();

        assert!(prepare(encoded.into_inner()).is_ok());
    }

    #[test]
    fn test_prepare_rejects_garbage() {
        let err = prepare(b"definitely not an image".to_vec()).unwrap_err();
        assert_eq!(err.kind(), "image");
    }
}
