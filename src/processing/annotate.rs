use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use tracing::debug;

use crate::{Config, Point};

/// How detection outlines are stroked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineStyle {
    pub color: Rgb<u8>,
    pub thickness: u32,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            color: Rgb([0, 255, 0]),
            thickness: 3,
        }
    }
}

impl From<&Config> for OutlineStyle {
    fn from(config: &Config) -> Self {
        Self {
            color: Rgb(config.line_color),
            thickness: config.line_thickness.max(1),
        }
    }
}

/// Draw `outline` onto `canvas` as a closed polyline
///
/// The last point is joined back to the first. Parts falling outside the
/// canvas are clipped.
pub fn draw_outline(canvas: &mut RgbImage, outline: &[Point], style: &OutlineStyle) {
    if outline.is_empty() {
        return;
    }
    debug!("Drawing {}-point outline", outline.len());

    let thickness = i32::try_from(style.thickness.max(1)).unwrap_or(i32::MAX);
    let low = -(thickness - 1) / 2;
    let high = thickness / 2;

    // a segment needs one edge, not a there-and-back pair
    let edge_count = if outline.len() <= 2 { 1 } else { outline.len() };
    let edges = outline.iter().zip(outline.iter().cycle().skip(1)).take(edge_count);

    for (start, end) in edges {
        for dx in low..=high {
            for dy in low..=high {
                draw_line_segment_mut(
                    canvas,
                    (start.x.saturating_add(dx) as f32, start.y.saturating_add(dy) as f32),
                    (end.x.saturating_add(dx) as f32, end.y.saturating_add(dy) as f32),
                    style.color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn thin() -> OutlineStyle {
        OutlineStyle {
            color: GREEN,
            thickness: 1,
        }
    }

    #[test]
    fn test_closed_square() {
        let mut canvas = RgbImage::new(20, 20);
        let square = [(2, 2), (10, 2), (10, 10), (2, 10)].map(Point::from);
        draw_outline(&mut canvas, &square, &thin());

        assert_eq!(*canvas.get_pixel(6, 2), GREEN);
        assert_eq!(*canvas.get_pixel(10, 6), GREEN);
        assert_eq!(*canvas.get_pixel(6, 10), GREEN);
        // closing edge back to the first point
        assert_eq!(*canvas.get_pixel(2, 6), GREEN);
        assert_eq!(*canvas.get_pixel(6, 6), BLACK);
    }

    #[test]
    fn test_thickness_widens_stroke() {
        let mut canvas = RgbImage::new(20, 20);
        let square = [(5, 5), (15, 5), (15, 15), (5, 15)].map(Point::from);
        draw_outline(&mut canvas, &square, &OutlineStyle::default());

        assert_eq!(*canvas.get_pixel(10, 4), GREEN);
        assert_eq!(*canvas.get_pixel(10, 5), GREEN);
        assert_eq!(*canvas.get_pixel(10, 6), GREEN);
        assert_eq!(*canvas.get_pixel(10, 8), BLACK);
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut canvas = RgbImage::new(10, 10);
        let outline = [(-5, -5), (50, -5), (50, 5), (-5, 5)].map(Point::from);
        draw_outline(&mut canvas, &outline, &thin());
        assert_eq!(*canvas.get_pixel(3, 5), GREEN);
    }

    #[test]
    fn test_empty_outline_draws_nothing() {
        let mut canvas = RgbImage::new(4, 4);
        draw_outline(&mut canvas, &[], &thin());
        assert!(canvas.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn test_single_point_draws_dot() {
        let mut canvas = RgbImage::new(8, 8);
        draw_outline(&mut canvas, &[Point::new(3, 3)], &thin());

        assert_eq!(*canvas.get_pixel(3, 3), GREEN);
        assert_eq!(canvas.pixels().filter(|p| **p == GREEN).count(), 1);
    }

    #[test]
    fn test_two_points_draw_one_segment() {
        let mut canvas = RgbImage::new(10, 4);
        let segment = [(1, 1), (8, 1)].map(Point::from);
        draw_outline(&mut canvas, &segment, &thin());

        assert!((1..=8).all(|x| *canvas.get_pixel(x, 1) == GREEN));
        assert_eq!(canvas.pixels().filter(|p| **p == GREEN).count(), 8);
    }

    #[test]
    fn test_style_from_config() {
        let config = Config {
            line_color: [255, 0, 0],
            line_thickness: 2,
            ..Config::default()
        };
        let style = OutlineStyle::from(&config);
        assert_eq!(style.color, Rgb([255, 0, 0]));
        assert_eq!(style.thickness, 2);
    }
}
