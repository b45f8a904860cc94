//! # Display Mode Table
//!
//! Static enumeration of the legacy BIOS and VESA display modes the
//! library knows how to drive. Each entry maps a mode identifier to its
//! resolution, color count, and addressing class.

use crate::ScreenError;

/* Text display modes */
pub const TEXT_320X200_16_GREY: u16 = 0x00;
pub const TEXT_320X200_16_COLOR: u16 = 0x01;
pub const TEXT_640X200_16_GREY: u16 = 0x02;
pub const TEXT_640X200_16_COLOR: u16 = 0x03;
pub const TEXT_720X350_MONO: u16 = 0x07;
pub const TEXT_1056X200_16_COLOR: u16 = 0x08;

/* CGA display modes */
pub const CGA_320X200_4_COLOR: u16 = 0x04;
pub const CGA_320X200_MONO: u16 = 0x05;
pub const CGA_640X200_MONO: u16 = 0x06;

/* Tandy display modes */
pub const TGA_320X200_16_COLOR: u16 = 0x09;
pub const TGA_640X200_4_COLOR: u16 = 0x0A;

/* EGA display modes */
pub const EGA_320X200_16_COLOR: u16 = 0x0D;
pub const EGA_640X200_16_COLOR: u16 = 0x0E;
pub const EGA_640X350_MONO: u16 = 0x0F;
pub const EGA_640X350_4_COLOR: u16 = 0x10;

/* VGA display modes */
pub const VGA_640X480_MONO: u16 = 0x11;
pub const VGA_640X480_16_COLOR: u16 = 0x12;
pub const VGA_320X200_256_COLOR: u16 = 0x13;

/* SVGA display modes (VESA identifiers, >= 0x100) */
pub const SVGA_640X400_256_COLOR: u16 = 0x100;
pub const SVGA_640X480_256_COLOR: u16 = 0x101;
pub const SVGA_800X600_16_COLOR: u16 = 0x102;
pub const SVGA_800X600_256_COLOR: u16 = 0x103;
pub const SVGA_1024X768_16_COLOR: u16 = 0x104;
pub const SVGA_1024X768_256_COLOR: u16 = 0x105;
pub const SVGA_1280X1024_16_COLOR: u16 = 0x106;
pub const SVGA_1280X1024_256_COLOR: u16 = 0x107;

/// Addressing class of a display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeClass {
    /// Character-cell text mode
    Text,
    /// 4-color graphics
    FourColor,
    /// 16-color graphics
    SixteenColor,
    /// 256-color indexed graphics
    Color256,
    /// 2-color graphics
    Monochrome,
}

/// Display mode descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    /// Mode identifier
    pub id: u16,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Number of simultaneous colors
    pub colors: u16,
    /// Addressing class
    pub class: ModeClass,
}

impl DisplayMode {
    /// Returns the surface size in bytes (one palette index per pixel)
    pub const fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Looks up a mode identifier in the mode table
    pub fn find(id: u16) -> Result<DisplayMode, ScreenError> {
        MODE_TABLE
            .iter()
            .find(|mode| mode.id == id)
            .copied()
            .ok_or(ScreenError::InvalidMode(id))
    }
}

const fn entry(id: u16, width: u32, height: u32, colors: u16, class: ModeClass) -> DisplayMode {
    DisplayMode { id, width, height, colors, class }
}

/// Every mode the library can resolve
pub static MODE_TABLE: &[DisplayMode] = &[
    entry(TEXT_320X200_16_GREY, 320, 200, 16, ModeClass::Text),
    entry(TEXT_320X200_16_COLOR, 320, 200, 16, ModeClass::Text),
    entry(TEXT_640X200_16_GREY, 640, 200, 16, ModeClass::Text),
    entry(TEXT_640X200_16_COLOR, 640, 200, 16, ModeClass::Text),
    entry(CGA_320X200_4_COLOR, 320, 200, 4, ModeClass::FourColor),
    entry(CGA_320X200_MONO, 320, 200, 2, ModeClass::Monochrome),
    entry(CGA_640X200_MONO, 640, 200, 2, ModeClass::Monochrome),
    entry(TEXT_720X350_MONO, 720, 350, 2, ModeClass::Text),
    entry(TEXT_1056X200_16_COLOR, 1056, 200, 16, ModeClass::Text),
    entry(TGA_320X200_16_COLOR, 320, 200, 16, ModeClass::SixteenColor),
    entry(TGA_640X200_4_COLOR, 640, 200, 4, ModeClass::FourColor),
    entry(EGA_320X200_16_COLOR, 320, 200, 16, ModeClass::SixteenColor),
    entry(EGA_640X200_16_COLOR, 640, 200, 16, ModeClass::SixteenColor),
    entry(EGA_640X350_MONO, 640, 350, 2, ModeClass::Monochrome),
    entry(EGA_640X350_4_COLOR, 640, 350, 4, ModeClass::FourColor),
    entry(VGA_640X480_MONO, 640, 480, 2, ModeClass::Monochrome),
    entry(VGA_640X480_16_COLOR, 640, 480, 16, ModeClass::SixteenColor),
    entry(VGA_320X200_256_COLOR, 320, 200, 256, ModeClass::Color256),
    entry(SVGA_640X400_256_COLOR, 640, 400, 256, ModeClass::Color256),
    entry(SVGA_640X480_256_COLOR, 640, 480, 256, ModeClass::Color256),
    entry(SVGA_800X600_16_COLOR, 800, 600, 16, ModeClass::SixteenColor),
    entry(SVGA_800X600_256_COLOR, 800, 600, 256, ModeClass::Color256),
    entry(SVGA_1024X768_16_COLOR, 1024, 768, 16, ModeClass::SixteenColor),
    entry(SVGA_1024X768_256_COLOR, 1024, 768, 256, ModeClass::Color256),
    entry(SVGA_1280X1024_16_COLOR, 1280, 1024, 16, ModeClass::SixteenColor),
    entry(SVGA_1280X1024_256_COLOR, 1280, 1024, 256, ModeClass::Color256),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_resolves_every_table_entry() {
        for mode in MODE_TABLE {
            let found = DisplayMode::find(mode.id).unwrap();
            assert_eq!(found, *mode);
        }
    }

    #[test]
    fn test_find_unknown_mode() {
        assert_eq!(DisplayMode::find(0x0B), Err(ScreenError::InvalidMode(0x0B)));
        assert_eq!(DisplayMode::find(0x200), Err(ScreenError::InvalidMode(0x200)));
    }

    #[test]
    fn test_vga_256_entry() {
        let mode = DisplayMode::find(VGA_320X200_256_COLOR).unwrap();
        assert_eq!(mode.width, 320);
        assert_eq!(mode.height, 200);
        assert_eq!(mode.colors, 256);
        assert_eq!(mode.class, ModeClass::Color256);
        assert_eq!(mode.size(), 64000);
    }

    #[test]
    fn test_svga_identifiers_use_extended_range() {
        for mode in MODE_TABLE.iter().filter(|m| m.id >= 0x100) {
            assert!(matches!(
                mode.class,
                ModeClass::SixteenColor | ModeClass::Color256
            ));
        }
    }
}
