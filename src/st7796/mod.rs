//! ST7796 TFT panel wiring profile
//!
//! One centralized, compile-time table of the pins and SPI clock rates an
//! external display driver needs to talk to the panel. Nothing here runs at
//! runtime: the profile is burned into the binary, never mutated, and safe
//! to reference from any execution context.
//!
//! Consumers either read individual constants ([`Pins::TFT_CS`],
//! [`SPI_FREQUENCY`]) or take the whole table as one record via [`PROFILE`].

pub mod pins;

pub use pins::Pins;

/// SPI clock rate for write transactions, Hz
pub const SPI_FREQUENCY: u32 = 40_000_000;

/// SPI clock rate for read transactions, Hz. Reads run at half the write
/// clock; the controller's read-back timing is the more conservative path.
pub const SPI_READ_FREQUENCY: u32 = 20_000_000;

/// Display controller variant a wiring profile targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// ST7796-family controller
    St7796,
}

/// The full wiring of one display: controller variant, pin numbers and bus
/// clock rates, as one plain-data record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WiringProfile {
    /// Controller variant
    pub driver: Driver,
    /// Shared SPI data-in pin
    pub spi_miso: u8,
    /// Shared SPI data-out pin
    pub spi_mosi: u8,
    /// Shared SPI clock pin
    pub spi_sclk: u8,
    /// Display chip-select pin
    pub tft_cs: u8,
    /// Display reset pin
    pub tft_rst: u8,
    /// Display data/command select pin
    pub tft_dc: u8,
    /// Display backlight enable pin
    pub tft_bl: u8,
    /// Display data-out line, aliases the shared bus
    pub tft_mosi: u8,
    /// Display clock line, aliases the shared bus
    pub tft_sclk: u8,
    /// Display data-in line, aliases the shared bus
    pub tft_miso: u8,
    /// Write transaction clock rate, Hz
    pub spi_frequency: u32,
    /// Read transaction clock rate, Hz
    pub spi_read_frequency: u32,
}

impl WiringProfile {
    /// True when the display's data and clock lines are the shared bus
    /// lines rather than dedicated ones
    pub const fn shares_bus(&self) -> bool {
        self.tft_mosi == self.spi_mosi
            && self.tft_sclk == self.spi_sclk
            && self.tft_miso == self.spi_miso
    }

    /// The physical pins the profile claims, aliases collapsed
    pub const fn physical_pins(&self) -> [u8; 7] {
        [
            self.spi_miso,
            self.spi_mosi,
            self.spi_sclk,
            self.tft_cs,
            self.tft_rst,
            self.tft_dc,
            self.tft_bl,
        ]
    }
}

/// The board's wiring profile. Alias fields reference the [`Pins`]
/// constants instead of repeating literals.
pub const PROFILE: WiringProfile = WiringProfile {
    driver: Driver::St7796,
    spi_miso: Pins::SPI_MISO,
    spi_mosi: Pins::SPI_MOSI,
    spi_sclk: Pins::SPI_SCLK,
    tft_cs: Pins::TFT_CS,
    tft_rst: Pins::TFT_RST,
    tft_dc: Pins::TFT_DC,
    tft_bl: Pins::TFT_BL,
    tft_mosi: Pins::TFT_MOSI,
    tft_sclk: Pins::TFT_SCLK,
    tft_miso: Pins::TFT_MISO,
    spi_frequency: SPI_FREQUENCY,
    spi_read_frequency: SPI_READ_FREQUENCY,
};
