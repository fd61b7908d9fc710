//! Pin assignments for the ST7796 panel and the SPI bus it rides on
//!
//! This module contains all GPIO pin assignments used in the hardware
//! configuration. The display has no bus lines of its own: its MOSI, SCLK
//! and MISO constants alias the shared SPI bus pins, and that aliasing is
//! load-bearing — giving the display independent literals would wire it to
//! a different bus than the one declared here.

/// Pin configuration constants for the ST7796 display and the shared bus
pub struct Pins;

impl Pins {
    // Shared SPI bus pins
    /// SPI Master In Slave Out
    pub const SPI_MISO: u8 = 12;
    /// SPI Master Out Slave In
    pub const SPI_MOSI: u8 = 11;
    /// SPI Clock pin
    pub const SPI_SCLK: u8 = 13;

    // Display control pins
    /// Chip Select pin for the display
    pub const TFT_CS: u8 = 22;
    /// Reset pin for the display
    pub const TFT_RST: u8 = 21;
    /// Data/Command control pin (High for data, Low for command)
    pub const TFT_DC: u8 = 20;
    /// Backlight enable pin
    pub const TFT_BL: u8 = 23;

    // Bus aliases, shared lines rather than dedicated ones
    /// Display Master Out Slave In, same line as the shared bus
    pub const TFT_MOSI: u8 = Self::SPI_MOSI;
    /// Display clock, same line as the shared bus
    pub const TFT_SCLK: u8 = Self::SPI_SCLK;
    /// Display Master In Slave Out, same line as the shared bus
    pub const TFT_MISO: u8 = Self::SPI_MISO;
}
