use image::{GrayImage, Luma};

const SCALE: u32 = 8;
const QUIET: u32 = 4;

/// Render `payload` as a QR code with a quiet zone, 8 pixels per module
pub fn qr_image(payload: &[u8]) -> GrayImage {
    let code = qrcode::QrCode::new(payload).unwrap();
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let size = (modules + 2 * QUIET) * SCALE;

    GrayImage::from_fn(size, size, |x, y| {
        let (mx, my) = (x / SCALE, y / SCALE);
        let inside = (QUIET..modules + QUIET).contains(&mx) && (QUIET..modules + QUIET).contains(&my);
        if inside && colors[((my - QUIET) * modules + (mx - QUIET)) as usize] == qrcode::Color::Dark {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

/// Place `codes` next to each other on a white canvas, left to right
pub fn side_by_side(codes: &[GrayImage]) -> GrayImage {
    let gap = 40;
    let width = codes.iter().map(|c| c.width() + gap).sum::<u32>() + gap;
    let height = codes.iter().map(GrayImage::height).max().unwrap_or(0) + 2 * gap;

    let mut canvas = GrayImage::from_pixel(width, height, Luma([255]));
    let mut x = gap;
    for code in codes {
        image::imageops::replace(&mut canvas, code, i64::from(x), i64::from(gap));
        x += code.width() + gap;
    }
    canvas
}
