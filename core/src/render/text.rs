use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};

/// Width and height of a glyph of the built-in font in pixels (at scale 1).
pub(crate) const GLYPH_SIZE: u32 = 8;

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or_default()
}

/// Size of the rendered text in pixels.
pub(crate) fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    let height = GLYPH_SIZE.saturating_mul(scale);
    (chars.saturating_mul(height), height)
}

/// Draw `text` with its upper left corner at `(left, top)`.
///
/// Every font pixel becomes a `scale`×`scale` block. Bold text widens each
/// block to the right. Pixels outside of the image are skipped.
pub(crate) fn draw_text_mut(
    img: &mut RgbImage,
    text: &str,
    left: i64,
    top: i64,
    scale: u32,
    bold: bool,
    color: Rgb<u8>,
) {
    let scale = scale.max(1) as i64;
    let extra = if bold { (scale / 4).max(1) } else { 0 };
    let advance = GLYPH_SIZE as i64 * scale;
    let (width, height) = (img.width() as i64, img.height() as i64);

    for (i, c) in text.chars().enumerate() {
        let glyph_left = left + i as i64 * advance;
        if glyph_left >= width {
            break;
        }
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_SIZE as i64 {
                if (*bits >> col) & 1 == 0 {
                    continue;
                }
                let x0 = glyph_left + col * scale;
                let y0 = top + row as i64 * scale;
                let columns = x0.max(0)..(x0 + scale + extra).min(width);
                for y in y0.max(0)..(y0 + scale).min(height) {
                    for x in columns.clone() {
                        img.put_pixel(x as u32, y as u32, color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn count_pixels(img: &RgbImage, color: Rgb<u8>) -> usize {
        img.pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn size_of_text() {
        assert_eq!((48, 16), text_size("abc", 2));
        assert_eq!((0, 8), text_size("", 1));
    }

    #[test]
    fn size_of_huge_text_saturates() {
        assert_eq!((u32::MAX, u32::MAX), text_size("Manager1", u32::MAX));
        assert_eq!((u32::MAX, 8 << 28), text_size(&"x".repeat(32), 1 << 28));
    }

    #[test]
    fn scaled_text_has_more_pixels() {
        let mut small = RgbImage::from_pixel(100, 40, WHITE);
        draw_text_mut(&mut small, "A1", 0, 0, 1, false, BLACK);
        let mut large = RgbImage::from_pixel(100, 40, WHITE);
        draw_text_mut(&mut large, "A1", 0, 0, 2, false, BLACK);

        let n = count_pixels(&small, BLACK);
        assert!(n > 0);
        assert_eq!(4 * n, count_pixels(&large, BLACK));
    }

    #[test]
    fn bold_text_is_wider() {
        let mut regular = RgbImage::from_pixel(100, 40, WHITE);
        draw_text_mut(&mut regular, "Manager1", 0, 0, 1, false, BLACK);
        let mut bold = RgbImage::from_pixel(100, 40, WHITE);
        draw_text_mut(&mut bold, "Manager1", 0, 0, 1, true, BLACK);
        assert!(count_pixels(&bold, BLACK) > count_pixels(&regular, BLACK));
    }

    #[test]
    fn unknown_characters_use_replacement() {
        let mut unknown = RgbImage::from_pixel(20, 20, WHITE);
        draw_text_mut(&mut unknown, "\u{4e2d}", 0, 0, 1, false, BLACK);
        let mut question_mark = RgbImage::from_pixel(20, 20, WHITE);
        draw_text_mut(&mut question_mark, "?", 0, 0, 1, false, BLACK);
        assert_eq!(question_mark, unknown);
    }

    #[test]
    fn text_is_clipped() {
        let mut img = RgbImage::from_pixel(10, 10, WHITE);
        draw_text_mut(&mut img, "Scientist1", -20, -3, 3, true, BLACK);
        draw_text_mut(&mut img, "Scientist1", 5, 5, 3, true, BLACK);
        assert!(count_pixels(&img, BLACK) > 0);
    }
}
