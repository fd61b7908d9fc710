//! Board wiring profile for an ST7796 TFT panel
//!
//! This crate is the single place the hardware wiring lives: which GPIO
//! pins the display's control lines and the shared SPI bus sit on, and the
//! SPI clock rates for write and read transactions. A display driver built
//! on top of it reads these constants at compile time; there is no runtime
//! configuration, no initialization and no I/O in here.
//!
//! It also ships the panel's bilevel font assets: `build.rs` packs 5x7
//! glyph strips into the display's byte layout (see [`glyph`]), and the
//! bundled digit face is embedded as [`glyph::DIGITS`].
//!
//! ### Usage
//!
//! ```
//! use ltn_st7796::{Pins, PROFILE};
//!
//! assert_eq!(Pins::TFT_CS, 22);
//! assert_eq!(PROFILE.spi_frequency, 40_000_000);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

extern crate alloc;

pub mod glyph;
pub mod st7796;

pub use crate::st7796::pins::Pins;
pub use crate::st7796::{Driver, WiringProfile, PROFILE, SPI_FREQUENCY, SPI_READ_FREQUENCY};

/// Packed 5x7 digit glyphs 0-9, generated at build time from
/// `glyphs/digits.png` (see [`glyph`] for the layout). Empty when the asset
/// was absent at build time.
pub static DIGITS: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/digits.bin"));

#[cfg(test)]
mod tests {
    use crate::glyph::BYTES_PER_GLYPH;
    use crate::DIGITS;

    #[test]
    fn bundled_digits_hold_ten_glyphs() {
        assert_eq!(DIGITS.len(), 10 * BYTES_PER_GLYPH);
        // Every digit draws at least one pixel
        for glyph in DIGITS.chunks(BYTES_PER_GLYPH) {
            assert!(glyph.iter().any(|&b| b != 0));
        }
    }
}
