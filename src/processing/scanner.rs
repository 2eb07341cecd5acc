use image::{ImageError, ImageReader, RgbImage};
use std::path::Path;
use tracing::{debug, error, info, warn};

use super::annotate::{draw_outline, OutlineStyle};
use super::decoder::{Decoder, RqrrDecoder};
use super::geometry::outline;
use crate::error::{Result, ScanError};
use crate::viewer::{HeadlessViewer, Viewer};
use crate::{Config, DecodedCode, Detection, FailurePolicy};

/// Finds QR codes in an image file, reports them and shows them outlined
pub struct Scanner {
    config: Config,
    decoder: Box<dyn Decoder>,
    viewer: Box<dyn Viewer>,
    print_report: bool,
}

impl Scanner {
    /// Create a scanner using the `rqrr` decoder
    ///
    /// The annotated image is shown in a window when `config.display` is set
    /// and the `gui` feature is enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use qrscan::{Config, Scanner};
    ///
    /// let config = Config { display: false, ..Config::default() };
    /// let mut scanner = Scanner::new(config);
    /// assert!(scanner.scan_or_empty("does/not/exist.png").is_empty());
    /// ```
    #[must_use]
    pub fn new(config: Config) -> Self {
        let viewer = default_viewer(config.display);
        Self::with_parts(config, Box::new(RqrrDecoder::new()), viewer)
    }

    /// Create a scanner with explicit decoding and display capabilities
    #[must_use]
    pub fn with_parts(config: Config, decoder: Box<dyn Decoder>, viewer: Box<dyn Viewer>) -> Self {
        debug!(
            "Scanner configuration: color={:?}, thickness={}, policy={:?}",
            config.line_color, config.line_thickness, config.policy
        );
        Self {
            config,
            decoder,
            viewer,
            print_report: true,
        }
    }

    /// Stop printing the per-code report to stdout
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.print_report = false;
        self
    }

    /// Scan an image and return the decoded payloads in decoder order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image cannot be opened or decoded ([`ScanError::Load`])
    /// - The decoder fails ([`ScanError::Decoder`])
    /// - No QR code is found ([`ScanError::NoDetections`])
    /// - A payload is not UTF-8 under the strict policy ([`ScanError::Decode`])
    pub fn scan<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<String>> {
        Ok(self.scan_codes(path)?.into_iter().map(|code| code.data).collect())
    }

    /// Like [`Scanner::scan`], but every failure is logged and yields an
    /// empty list
    pub fn scan_or_empty<P: AsRef<Path>>(&mut self, path: P) -> Vec<String> {
        match self.scan(path) {
            Ok(payloads) => payloads,
            Err(e @ ScanError::NoDetections) => {
                info!("{}", e);
                Vec::new()
            }
            Err(e) => {
                error!("{}", e.report());
                Vec::new()
            }
        }
    }

    /// Scan an image and return the full report for every decoded code
    ///
    /// # Errors
    ///
    /// Same as [`Scanner::scan`]
    pub fn scan_codes<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<DecodedCode>> {
        let path = path.as_ref();
        info!("Starting image scan for: {}", path.display());

        // Format comes from the file contents, not the extension
        let img = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(ImageError::IoError)
            .and_then(ImageReader::decode)
            .map_err(|source| ScanError::Load {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Image loaded successfully: {}x{}", img.width(), img.height());

        let detections = self.decoder.decode(&img)?;
        if detections.is_empty() {
            return Err(ScanError::NoDetections);
        }
        debug!("Decoder reported {} detection(s)", detections.len());

        let codes = self.to_codes(detections)?;

        let mut canvas: RgbImage = img.to_rgb8();
        let style = OutlineStyle::from(&self.config);
        for code in &codes {
            if self.print_report {
                println!("{code}");
            }
            draw_outline(&mut canvas, &code.outline, &style);
        }

        // Payloads are already decoded, a display failure does not void them
        if let Err(e) = self.viewer.show(&self.config.window_title, &canvas) {
            warn!("{}", e);
        }

        info!("Scan complete: {} code(s)", codes.len());
        Ok(codes)
    }

    fn to_codes(&self, detections: Vec<Detection>) -> Result<Vec<DecodedCode>> {
        let mut codes = Vec::with_capacity(detections.len());

        for (index, detection) in detections.into_iter().enumerate() {
            let data = match String::from_utf8(detection.payload) {
                Ok(data) => data,
                Err(source) => match self.config.policy {
                    FailurePolicy::Strict => return Err(ScanError::Decode { index, source }),
                    FailurePolicy::Lenient => {
                        warn!("Skipping detection #{}: payload is not valid UTF-8", index);
                        continue;
                    }
                },
            };

            codes.push(DecodedCode {
                symbol_type: detection.symbol_type,
                data,
                outline: outline(&detection.polygon),
                version: detection.version,
            });
        }

        if codes.is_empty() {
            return Err(ScanError::NoDetections);
        }
        Ok(codes)
    }
}

#[cfg(feature = "gui")]
fn default_viewer(display: bool) -> Box<dyn Viewer> {
    if display {
        Box::new(crate::viewer::WindowViewer)
    } else {
        Box::new(HeadlessViewer)
    }
}

#[cfg(not(feature = "gui"))]
fn default_viewer(display: bool) -> Box<dyn Viewer> {
    if display {
        debug!("Built without the gui feature, display disabled");
    }
    Box::new(HeadlessViewer)
}
