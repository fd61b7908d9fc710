//! Glyph strip packing for the panel's bilevel font assets
//!
//! A glyph strip is a 1-bit image holding fixed-size glyphs side by side,
//! 5 pixels wide and 7 pixels tall each. [`Strip::pack`] upscales every
//! glyph and packs it into the row-padded byte layout the display blits
//! directly, one bit per pixel, MSB first.
//!
//! Each source pixel becomes a [`GLYPH_SCALE`]-sized square cell with its
//! rightmost column and bottom row left blank, so neighbouring pixels stay
//! visually separated after scaling.

use alloc::vec::Vec;
use thiserror::Error;

/// Source glyph width, pixels
pub const GLYPH_IN_WIDTH: usize = 5;

/// Source glyph height, pixels
pub const GLYPH_IN_HEIGHT: usize = 7;

/// Upscaling factor applied to both axes
pub const GLYPH_SCALE: usize = 4;

/// Blank pixels on the right and bottom edge of each scaled cell
pub const GLYPH_PIX_BORDER: usize = 1;

/// Scaled glyph width, pixels
pub const GLYPH_OUT_WIDTH: usize = GLYPH_IN_WIDTH * GLYPH_SCALE;

/// Scaled glyph height, pixels
pub const GLYPH_OUT_HEIGHT: usize = GLYPH_IN_HEIGHT * GLYPH_SCALE;

/// Packed bytes per output row (rows are padded to a byte boundary)
pub const BYTES_PER_ROW: usize = GLYPH_OUT_WIDTH.div_ceil(8);

/// Packed bytes per glyph
pub const BYTES_PER_GLYPH: usize = BYTES_PER_ROW * GLYPH_OUT_HEIGHT;

/// Ways a pixel buffer can fail to describe a glyph strip
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    /// The strip is not exactly one glyph tall
    #[error("glyph strip must be {GLYPH_IN_HEIGHT} pixels tall, got {0}")]
    BadHeight(usize),
    /// The strip does not hold even a single glyph
    #[error("glyph strip must be at least {GLYPH_IN_WIDTH} pixels wide, got {0}")]
    TooNarrow(usize),
    /// The pixel buffer disagrees with the stated dimensions
    #[error("pixel buffer holds {got} entries, expected {expected}")]
    BufferMismatch {
        /// width * height
        expected: usize,
        /// actual buffer length
        got: usize,
    },
}

/// A borrowed bilevel glyph strip, one byte per pixel, non-zero meaning ink
pub struct Strip<'a> {
    pixels: &'a [u8],
    width: usize,
}

impl<'a> Strip<'a> {
    /// Wrap a pixel buffer, checking that it describes a well-formed strip
    pub fn new(pixels: &'a [u8], width: usize, height: usize) -> Result<Self, GlyphError> {
        if height != GLYPH_IN_HEIGHT {
            return Err(GlyphError::BadHeight(height));
        }
        if width < GLYPH_IN_WIDTH {
            return Err(GlyphError::TooNarrow(width));
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(GlyphError::BufferMismatch {
                expected,
                got: pixels.len(),
            });
        }
        Ok(Strip { pixels, width })
    }

    /// Number of complete glyphs in the strip; trailing columns are ignored
    pub fn glyph_count(&self) -> usize {
        self.width / GLYPH_IN_WIDTH
    }

    /// Scale and pack every glyph into the display's byte layout
    pub fn pack(&self) -> Vec<u8> {
        let count = self.glyph_count();
        log::debug!(
            "packing {} glyphs from a {}x{} strip",
            count,
            self.width,
            GLYPH_IN_HEIGHT
        );

        let mut packer = BitPacker::with_capacity(count * BYTES_PER_GLYPH);
        for glyph in 0..count {
            let glyph_x = glyph * GLYPH_IN_WIDTH;
            for y in 0..GLYPH_IN_HEIGHT {
                for _ in 0..(GLYPH_SCALE - GLYPH_PIX_BORDER) {
                    self.pack_row(&mut packer, glyph_x, y);
                }
                // Blank border row at the bottom of the cell
                for _ in 0..GLYPH_PIX_BORDER {
                    for _ in 0..GLYPH_OUT_WIDTH {
                        packer.push(false);
                    }
                    packer.pad_to_byte();
                }
            }
        }
        packer.finish()
    }

    fn pack_row(&self, packer: &mut BitPacker, glyph_x: usize, y: usize) {
        for x in 0..GLYPH_IN_WIDTH {
            let ink = self.pixels[y * self.width + glyph_x + x] != 0;
            for _ in 0..(GLYPH_SCALE - GLYPH_PIX_BORDER) {
                packer.push(ink);
            }
            // Blank border column on the right of the cell
            for _ in 0..GLYPH_PIX_BORDER {
                packer.push(false);
            }
        }
        packer.pad_to_byte();
    }
}

/// MSB-first bit accumulator
struct BitPacker {
    out: Vec<u8>,
    current: u8,
    filled: u8,
}

impl BitPacker {
    fn with_capacity(bytes: usize) -> Self {
        BitPacker {
            out: Vec::with_capacity(bytes),
            current: 0,
            filled: 0,
        }
    }

    fn push(&mut self, bit: bool) {
        self.current = (self.current << 1) | u8::from(bit);
        self.filled += 1;
        if self.filled == 8 {
            self.out.push(self.current);
            self.current = 0;
            self.filled = 0;
        }
    }

    fn pad_to_byte(&mut self) {
        while self.filled != 0 {
            self.push(false);
        }
    }

    fn finish(self) -> Vec<u8> {
        // Callers pad every row, so nothing may be left in flight
        debug_assert_eq!(self.filled, 0);
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_height() {
        let pixels = [0u8; GLYPH_IN_WIDTH * 6];
        let err = Strip::new(&pixels, GLYPH_IN_WIDTH, 6).err();
        assert_eq!(err, Some(GlyphError::BadHeight(6)));
    }

    #[test]
    fn rejects_narrow_strip() {
        let pixels = [0u8; 4 * GLYPH_IN_HEIGHT];
        let err = Strip::new(&pixels, 4, GLYPH_IN_HEIGHT).err();
        assert_eq!(err, Some(GlyphError::TooNarrow(4)));
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let pixels = [0u8; 10];
        let err = Strip::new(&pixels, GLYPH_IN_WIDTH, GLYPH_IN_HEIGHT).err();
        assert_eq!(
            err,
            Some(GlyphError::BufferMismatch {
                expected: GLYPH_IN_WIDTH * GLYPH_IN_HEIGHT,
                got: 10,
            })
        );
    }

    #[test]
    fn trailing_columns_are_ignored() {
        let pixels = [0u8; 12 * GLYPH_IN_HEIGHT];
        let strip = Strip::new(&pixels, 12, GLYPH_IN_HEIGHT).unwrap();
        assert_eq!(strip.glyph_count(), 2);
        assert_eq!(strip.pack().len(), 2 * BYTES_PER_GLYPH);
    }

    #[test]
    fn packs_a_solid_glyph() {
        let pixels = [1u8; GLYPH_IN_WIDTH * GLYPH_IN_HEIGHT];
        let strip = Strip::new(&pixels, GLYPH_IN_WIDTH, GLYPH_IN_HEIGHT).unwrap();
        let packed = strip.pack();
        assert_eq!(packed.len(), BYTES_PER_GLYPH);

        // A solid row scales to 11101110_11101110_1110 then zero padding
        let ink_row = [0b1110_1110, 0b1110_1110, 0b1110_0000];
        let blank_row = [0u8; BYTES_PER_ROW];
        for cell_row in packed.chunks(GLYPH_SCALE * BYTES_PER_ROW) {
            assert_eq!(&cell_row[0..3], &ink_row);
            assert_eq!(&cell_row[3..6], &ink_row);
            assert_eq!(&cell_row[6..9], &ink_row);
            assert_eq!(&cell_row[9..12], &blank_row);
        }
    }

    #[test]
    fn packs_a_single_corner_pixel() {
        let mut pixels = [0u8; GLYPH_IN_WIDTH * GLYPH_IN_HEIGHT];
        pixels[0] = 1;
        let strip = Strip::new(&pixels, GLYPH_IN_WIDTH, GLYPH_IN_HEIGHT).unwrap();
        let packed = strip.pack();

        // The lone pixel becomes a 3-bit run in the top-left cell only
        assert_eq!(&packed[0..3], &[0b1110_0000, 0, 0]);
        assert_eq!(&packed[3..6], &[0b1110_0000, 0, 0]);
        assert_eq!(&packed[6..9], &[0b1110_0000, 0, 0]);
        assert!(packed[9..].iter().all(|&b| b == 0));
    }
}
