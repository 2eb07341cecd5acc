use image::RgbImage;
use tracing::info;

use crate::error::Result;

/// Displays an annotated image to the user
///
/// `show` owns the whole lifetime of whatever it opens: any window is
/// created and torn down inside the call, so nothing outlives it on either
/// the success or the error path.
#[cfg_attr(test, mockall::automock)]
pub trait Viewer {
    /// Present `image` and return once the user dismisses it
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScanError::Display`] if the image cannot be shown
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()>;
}

/// Viewer for runs without a display
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessViewer;

impl Viewer for HeadlessViewer {
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()> {
        info!(
            "Display disabled, not showing '{}' ({}x{})",
            title,
            image.width(),
            image.height()
        );
        Ok(())
    }
}

#[cfg(feature = "gui")]
pub use window::WindowViewer;

#[cfg(feature = "gui")]
mod window {
    use eframe::egui;
    use image::RgbImage;
    use tracing::debug;

    use super::Viewer;
    use crate::error::{Result, ScanError};

    /// Shows the image in a native window until a key is pressed
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WindowViewer;

    impl Viewer for WindowViewer {
        fn show(&mut self, title: &str, image: &RgbImage) -> Result<()> {
            let size = [image.width() as usize, image.height() as usize];
            let pixels = egui::ColorImage::from_rgb(size, image.as_raw());

            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_title(title)
                    .with_inner_size([size[0] as f32, size[1] as f32]),
                ..Default::default()
            };

            debug!("Opening window '{}'", title);
            eframe::run_native(
                title,
                options,
                Box::new(|_cc| Ok(Box::new(ImageWindow::new(pixels)))),
            )
            .map_err(|e| ScanError::Display(e.to_string()))?;
            debug!("Window '{}' closed", title);

            Ok(())
        }
    }

    struct ImageWindow {
        pending: Option<egui::ColorImage>,
        texture: Option<egui::TextureHandle>,
    }

    impl ImageWindow {
        fn new(image: egui::ColorImage) -> Self {
            Self {
                pending: Some(image),
                texture: None,
            }
        }
    }

    impl eframe::App for ImageWindow {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            if let Some(image) = self.pending.take() {
                self.texture = Some(ctx.load_texture("annotated", image, egui::TextureOptions::NEAREST));
            }

            let key_pressed = ctx.input(|i| {
                i.events
                    .iter()
                    .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
            });
            if key_pressed {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }

            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    if let Some(texture) = &self.texture {
                        ui.image((texture.id(), texture.size_vec2()));
                    }
                });
        }
    }
}
