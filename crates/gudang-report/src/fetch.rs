//! Photo retrieval for report rendering.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use printpdf::image_crate::{DynamicImage, GenericImageView};
use tracing::warn;

use gudang_core::models::PHOTO_SECTIONS;

use crate::error::RenderError;

/// A photo decoded into pixels, ready for embedding.
pub struct DecodedPhoto {
    pub image: DynamicImage,
    pub width_px: u32,
    pub height_px: u32,
}

/// Fetches photo bytes by URL.
///
/// The pipeline talks to this trait so tests can feed images without a
/// network.
#[async_trait]
pub trait PhotoFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, RenderError>;
}

/// HTTP fetcher used in production.
pub struct HttpPhotoFetcher {
    client: reqwest::Client,
}

impl HttpPhotoFetcher {
    pub fn new() -> Self {
        HttpPhotoFetcher {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpPhotoFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhotoFetcher for HttpPhotoFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, RenderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RenderError::Fetch(format!("GET {}: {}", url, e)))?;
        if !response.status().is_success() {
            return Err(RenderError::Fetch(format!(
                "GET {}: status {}",
                url,
                response.status()
            )));
        }
        response
            .bytes()
            .await
            .map_err(|e| RenderError::Fetch(format!("GET {}: {}", url, e)))
    }
}

pub fn decode_photo(data: &[u8]) -> Result<DecodedPhoto, RenderError> {
    let image = printpdf::image_crate::load_from_memory(data)
        .map_err(|e| RenderError::Decode(e.to_string()))?;
    let (width_px, height_px) = image.dimensions();
    Ok(DecodedPhoto {
        image,
        width_px,
        height_px,
    })
}

/// Fetch and decode every photo in the mapping, one section at a time in
/// section order. A section whose fetch or decode fails is logged and left
/// out of the result; its cell renders empty.
pub async fn fetch_photos(
    fetcher: &dyn PhotoFetcher,
    photo_urls: &BTreeMap<String, String>,
) -> BTreeMap<String, DecodedPhoto> {
    let mut photos = BTreeMap::new();
    for section in PHOTO_SECTIONS {
        let Some(url) = photo_urls.get(section) else {
            continue;
        };
        match fetcher.fetch(url).await.and_then(|data| decode_photo(&data)) {
            Ok(photo) => {
                photos.insert(section.to_string(), photo);
            }
            Err(err) => {
                warn!(section = section, url = url.as_str(), error = %err, "Skipping photo");
            }
        }
    }
    photos
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeFetcher {
        good_url: String,
        payload: Bytes,
    }

    #[async_trait]
    impl PhotoFetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> Result<Bytes, RenderError> {
            if url == self.good_url {
                Ok(self.payload.clone())
            } else {
                Err(RenderError::Fetch("not found".to_string()))
            }
        }
    }

    fn one_pixel_png() -> Bytes {
        use printpdf::image_crate::{DynamicImage, ImageFormat, RgbImage};
        let image = DynamicImage::ImageRgb8(RgbImage::new(1, 1));
        let mut buf = std::io::Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png).unwrap();
        Bytes::from(buf.into_inner())
    }

    #[tokio::test]
    async fn test_failed_fetch_skips_section() {
        let fetcher = FakeFetcher {
            good_url: "http://x/segel.png".to_string(),
            payload: one_pixel_png(),
        };
        let urls: BTreeMap<String, String> = [
            ("segel".to_string(), "http://x/segel.png".to_string()),
            ("sampling kiri".to_string(), "http://x/gone.png".to_string()),
        ]
        .into();

        let photos = fetch_photos(&fetcher, &urls).await;
        assert_eq!(photos.len(), 1);
        assert!(photos.contains_key("segel"));
    }

    #[tokio::test]
    async fn test_undecodable_bytes_skip_section() {
        let fetcher = FakeFetcher {
            good_url: "http://x/bad.png".to_string(),
            payload: Bytes::from_static(b"not an image"),
        };
        let urls: BTreeMap<String, String> =
            [("segel".to_string(), "http://x/bad.png".to_string())].into();

        let photos = fetch_photos(&fetcher, &urls).await;
        assert!(photos.is_empty());
    }

    #[test]
    fn test_decode_reports_dimensions() {
        let photo = decode_photo(&one_pixel_png()).unwrap();
        assert_eq!((photo.width_px, photo.height_px), (1, 1));
    }
}
