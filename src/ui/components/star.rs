// src/ui/components/star.rs
//! Star icons and tinting
//!
//! A [`StarImage`] describes the shape of an icon. A [`TintedIcon`] pairs an
//! image with the color it is painted in and the square box it fills, which
//! is what the rating bar hands to its draw loop.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::image::{GetPixel, ImageRaw};
use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Polyline, PrimitiveStyle, Triangle};

use crate::error::{RatingBarError, RatingBarResult};

/// Vertices of a five-pointed star, alternating outer and inner points,
/// starting at the top tip and going clockwise.
///
/// Units are thousandths of the outer radius, relative to the star center,
/// with y growing downwards.
const STAR_VERTICES: [(i32, i32); 10] = [
    (0, -1000),
    (225, -309),
    (951, -309),
    (363, 118),
    (588, 809),
    (0, 382),
    (-588, 809),
    (-363, 118),
    (-951, -309),
    (-225, -309),
];

/// Horizontal extent of [`STAR_VERTICES`] in thousandths of the radius.
const STAR_WIDTH_MILLI: i64 = 1902;

/// Vertical extent of [`STAR_VERTICES`] in thousandths of the radius.
const STAR_HEIGHT_MILLI: i64 = 1809;

/// A 1-bit-per-pixel mask image
///
/// Rows are stored top to bottom, each padded to a whole number of bytes,
/// most significant bit first. Set bits are painted with the icon tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskImage {
    raw: ImageRaw<'static, BinaryColor>,
}

impl MaskImage {
    /// Create a mask, checking that `data` holds exactly `width` x `height` bits.
    pub fn new(width: u32, height: u32, data: &'static [u8]) -> RatingBarResult<Self> {
        let stride = width.div_ceil(8) as usize;
        if width == 0 || height == 0 || data.len() != stride * height as usize {
            return Err(RatingBarError::InvalidMask {
                width,
                height,
                len: data.len(),
            });
        }

        Ok(Self {
            raw: ImageRaw::new(data, width),
        })
    }

    pub fn width(&self) -> u32 {
        self.raw.size().width
    }

    pub fn height(&self) -> u32 {
        self.raw.size().height
    }

    /// Whether the mask pixel at (`x`, `y`) is set. Out-of-range pixels are unset.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
            return false;
        };
        self.raw.pixel(Point::new(x, y)) == Some(BinaryColor::On)
    }
}

/// Shape of a star icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarImage {
    /// Built-in solid five-pointed star
    FilledStar,
    /// Built-in five-pointed star outline
    OutlineStar,
    /// Mask image scaled into the icon box
    Mask(MaskImage),
}

impl StarImage {
    /// Default image for filled (active) stars
    pub const DEFAULT_ACTIVE: StarImage = StarImage::FilledStar;

    /// Default image for empty (inactive) stars
    pub const DEFAULT_INACTIVE: StarImage = StarImage::OutlineStar;
}

/// A star image with its tint and box size applied
///
/// # Examples
/// ```ignore
/// let mut icon = TintedIcon::new(StarImage::FilledStar, COLOR_STAR_ACTIVE, 24);
/// icon.draw_at(Point::new(10, 10), &mut display)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintedIcon {
    image: StarImage,
    tint: Rgb565,
    size: u32,
}

impl TintedIcon {
    pub fn new(image: StarImage, tint: Rgb565, size: u32) -> Self {
        Self { image, tint, size }
    }

    pub fn image(&self) -> StarImage {
        self.image
    }

    pub fn tint(&self) -> Rgb565 {
        self.tint
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_tint(&mut self, tint: Rgb565) {
        self.tint = tint;
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size;
    }

    /// Replace the image and tint it with `tint`.
    pub fn replace_image(&mut self, image: StarImage, tint: Rgb565) {
        self.image = image;
        self.tint = tint;
    }

    /// Draw the icon with its top-left corner at `origin`.
    pub fn draw_at<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self.image {
            StarImage::FilledStar => self.draw_filled(origin, display),
            StarImage::OutlineStar => self.draw_outline(origin, display),
            StarImage::Mask(mask) => self.draw_mask(&mask, origin, display),
        }
    }

    /// Star vertices scaled to fit the icon box, plus the star center.
    fn star_points(&self, origin: Point) -> ([Point; 10], Point) {
        let size = self.size as i64;
        let radius = size * 1000 / STAR_WIDTH_MILLI;
        let center_x = size / 2;
        let center_y = radius + (size * 1000 - STAR_HEIGHT_MILLI * radius) / 2000;
        let center = origin + Point::new(center_x as i32, center_y as i32);

        let mut points = [Point::zero(); 10];
        for (point, (dx, dy)) in points.iter_mut().zip(STAR_VERTICES) {
            let x = dx as i64 * radius / 1000;
            let y = dy as i64 * radius / 1000;
            *point = center + Point::new(x as i32, y as i32);
        }
        (points, center)
    }

    fn draw_filled<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let (points, center) = self.star_points(origin);
        let style = PrimitiveStyle::with_fill(self.tint);

        // Triangle fan around the center covers the whole star
        for i in 0..points.len() {
            let next = points[(i + 1) % points.len()];
            Triangle::new(center, points[i], next)
                .into_styled(style)
                .draw(display)?;
        }
        Ok(())
    }

    fn draw_outline<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let (points, _) = self.star_points(origin);

        let mut closed = [Point::zero(); 11];
        closed[..10].copy_from_slice(&points);
        closed[10] = points[0];

        let stroke_width = (self.size / 20).max(1);
        Polyline::new(&closed)
            .into_styled(PrimitiveStyle::with_stroke(self.tint, stroke_width))
            .draw(display)
    }

    fn draw_mask<D: DrawTarget<Color = Rgb565>>(
        &self,
        mask: &MaskImage,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let size = self.size;
        let tint = self.tint;
        let pixels = (0..size).flat_map(move |y| {
            let src_y = (y as u64 * mask.height() as u64 / size as u64) as u32;
            (0..size).filter_map(move |x| {
                let src_x = (x as u64 * mask.width() as u64 / size as u64) as u32;
                mask.is_set(src_x, src_y)
                    .then(|| Pixel(origin + Point::new(x as i32, y as i32), tint))
            })
        });
        display.draw_iter(pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::styling::{COLOR_STAR_ACTIVE, COLOR_STAR_INACTIVE};

    // 4x2 checker: X.X. / .X.X
    static CHECKER: [u8; 2] = [0b1010_0000, 0b0101_0000];

    #[test]
    fn test_mask_rejects_mismatched_length() {
        assert_eq!(
            MaskImage::new(9, 2, &CHECKER),
            Err(RatingBarError::InvalidMask {
                width: 9,
                height: 2,
                len: 2
            })
        );
        assert!(MaskImage::new(0, 2, &CHECKER).is_err());
        assert!(MaskImage::new(4, 2, &CHECKER).is_ok());
    }

    #[test]
    fn test_mask_bit_lookup() {
        let mask = MaskImage::new(4, 2, &CHECKER).unwrap();
        assert!(mask.is_set(0, 0));
        assert!(!mask.is_set(1, 0));
        assert!(mask.is_set(1, 1));
        assert!(!mask.is_set(4, 0));
    }

    #[test]
    fn test_mask_rows_are_byte_padded() {
        static WIDE: [u8; 4] = [0xFF, 0xC0, 0x00, 0x40];
        let mask = MaskImage::new(10, 2, &WIDE).unwrap();

        assert_eq!((mask.width(), mask.height()), (10, 2));
        assert!(mask.is_set(9, 0));
        assert!(!mask.is_set(8, 1));
        assert!(mask.is_set(9, 1));
        assert!(!mask.is_set(10, 1));
        assert!(!mask.is_set(u32::MAX, 0));
    }

    #[test]
    fn test_mask_scales_into_icon_box() {
        let mask = MaskImage::new(4, 2, &CHECKER).unwrap();
        let icon = TintedIcon::new(StarImage::Mask(mask), COLOR_STAR_ACTIVE, 8);
        let mut fb = FrameBuffer::new(Size::new(8, 8));

        icon.draw_at(Point::zero(), &mut fb).unwrap();

        // Each mask pixel becomes a 2x4 block
        assert_eq!(fb.pixel(Point::new(0, 0)), Some(COLOR_STAR_ACTIVE));
        assert_eq!(fb.pixel(Point::new(1, 3)), Some(COLOR_STAR_ACTIVE));
        assert_eq!(fb.pixel(Point::new(2, 0)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(2, 4)), Some(COLOR_STAR_ACTIVE));
        assert_eq!(fb.pixel(Point::new(0, 4)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_filled_star_paints_center_with_tint() {
        let icon = TintedIcon::new(StarImage::FilledStar, COLOR_STAR_ACTIVE, 40);
        let mut fb = FrameBuffer::new(Size::new(40, 40));

        icon.draw_at(Point::zero(), &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(21, 18)), Some(COLOR_STAR_ACTIVE));
        // Corners are outside the star
        assert_eq!(fb.pixel(Point::new(0, 39)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(39, 0)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_outline_star_leaves_center_empty() {
        let icon = TintedIcon::new(StarImage::OutlineStar, COLOR_STAR_INACTIVE, 40);
        let mut fb = FrameBuffer::new(Size::new(40, 40));

        icon.draw_at(Point::zero(), &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(18, 24)), Some(Rgb565::BLACK));
        assert!(fb.count_color(COLOR_STAR_INACTIVE) > 0);
    }

    #[test]
    fn test_replace_image_applies_given_tint() {
        let mut icon = TintedIcon::new(StarImage::FilledStar, COLOR_STAR_ACTIVE, 10);
        icon.replace_image(StarImage::OutlineStar, COLOR_STAR_INACTIVE);

        assert_eq!(icon.image(), StarImage::OutlineStar);
        assert_eq!(icon.tint(), COLOR_STAR_INACTIVE);
    }
}
