use image::DynamicImage;
use rqrr::PreparedImage;
use tracing::{debug, warn};

use crate::error::Result;
use crate::{Detection, Point, SymbolType};

/// Barcode decoding capability used by the [`crate::Scanner`]
///
/// Implementations locate symbols in an image and return them in the order
/// they were found. Payloads are raw bytes; text validation is left to the
/// caller.
#[cfg_attr(test, mockall::automock)]
pub trait Decoder {
    /// Locate and decode every symbol in `image`
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScanError::Decoder`] if the underlying library fails
    fn decode(&self, image: &DynamicImage) -> Result<Vec<Detection>>;
}

/// QR decoder backed by `rqrr`
#[derive(Debug, Clone, Copy, Default)]
pub struct RqrrDecoder;

impl RqrrDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for RqrrDecoder {
    fn decode(&self, image: &DynamicImage) -> Result<Vec<Detection>> {
        let mut prepared = PreparedImage::prepare(image.to_luma8());
        let grids = prepared.detect_grids();
        debug!("Located {} candidate grid(s)", grids.len());

        let mut detections = Vec::with_capacity(grids.len());
        for (index, grid) in grids.iter().enumerate() {
            let mut payload = Vec::new();
            match grid.decode_to(&mut payload) {
                Ok(meta) => {
                    debug!("Grid {} decoded: version {}, {} byte(s)", index, meta.version.0, payload.len());
                    detections.push(Detection {
                        payload,
                        symbol_type: SymbolType::QrCode,
                        polygon: grid.bounds.iter().map(|p| Point::new(p.x, p.y)).collect(),
                        version: Some(meta.version.0),
                    });
                }
                Err(e) => warn!("Skipping grid {} that could not be decoded: {}", index, e),
            }
        }

        Ok(detections)
    }
}
