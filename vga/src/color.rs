//! # Color Types and Palette
//!
//! Pixels are stored as palette indices, not direct RGB values. The
//! palette maps each index to a 6-bit-per-channel RGB triple, the range
//! the VGA DAC accepts. Changing an entry recolors every pixel already
//! displayed with that index.

/* First 16 colors */
pub const BLACK: u8 = 0x00;
pub const BLUE: u8 = 0x01;
pub const GREEN: u8 = 0x02;
pub const CYAN: u8 = 0x03;
pub const RED: u8 = 0x04;
pub const MAGENTA: u8 = 0x05;
pub const BROWN: u8 = 0x06;
pub const LIGHT_GRAY: u8 = 0x07;
pub const DARK_GRAY: u8 = 0x08;
pub const LIGHT_BLUE: u8 = 0x09;
pub const LIGHT_GREEN: u8 = 0x0A;
pub const LIGHT_CYAN: u8 = 0x0B;
pub const LIGHT_RED: u8 = 0x0C;
pub const LIGHT_MAGENTA: u8 = 0x0D;
pub const YELLOW: u8 = 0x0E;
pub const WHITE: u8 = 0x0F;

/// RGB triple with 6 bits per channel (DAC range 0-63)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a new triple, clamping each channel to the DAC range
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: if r > 63 { 63 } else { r },
            g: if g > 63 { 63 } else { g },
            b: if b > 63 { 63 } else { b },
        }
    }
}

/// Color palette for indexed color modes
#[derive(Clone)]
pub struct Palette {
    colors: [Rgb; 256],
}

impl Palette {
    /// Creates a new palette with all black colors
    pub const fn new() -> Self {
        Self {
            colors: [Rgb::new(0, 0, 0); 256],
        }
    }

    /// Creates the standard 16-color table in the first 16 entries
    pub fn standard16() -> Self {
        let mut palette = Self::new();
        palette.colors[0] = Rgb::new(0, 0, 0);     // Black
        palette.colors[1] = Rgb::new(0, 0, 42);    // Blue
        palette.colors[2] = Rgb::new(0, 42, 0);    // Green
        palette.colors[3] = Rgb::new(0, 42, 42);   // Cyan
        palette.colors[4] = Rgb::new(42, 0, 0);    // Red
        palette.colors[5] = Rgb::new(42, 0, 42);   // Magenta
        palette.colors[6] = Rgb::new(42, 21, 0);   // Brown
        palette.colors[7] = Rgb::new(42, 42, 42);  // Light Gray
        palette.colors[8] = Rgb::new(21, 21, 21);  // Dark Gray
        palette.colors[9] = Rgb::new(21, 21, 63);  // Light Blue
        palette.colors[10] = Rgb::new(21, 63, 21); // Light Green
        palette.colors[11] = Rgb::new(21, 63, 63); // Light Cyan
        palette.colors[12] = Rgb::new(63, 21, 21); // Light Red
        palette.colors[13] = Rgb::new(63, 21, 63); // Light Magenta
        palette.colors[14] = Rgb::new(63, 63, 21); // Yellow
        palette.colors[15] = Rgb::new(63, 63, 63); // White
        palette
    }

    /// Gets a color from the palette
    pub fn get(&self, index: u8) -> Rgb {
        self.colors[index as usize]
    }

    /// Sets a color in the palette
    pub fn set(&mut self, index: u8, color: Rgb) {
        self.colors[index as usize] = color;
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_clamped_to_dac_range() {
        let rgb = Rgb::new(200, 64, 63);
        assert_eq!(rgb, Rgb::new(63, 63, 63));
    }

    #[test]
    fn test_standard_palette_endpoints() {
        let palette = Palette::default();
        assert_eq!(palette.get(BLACK), Rgb::new(0, 0, 0));
        assert_eq!(palette.get(WHITE), Rgb::new(63, 63, 63));
        assert_eq!(palette.get(YELLOW), Rgb::new(63, 63, 21));
        // Entries past the fixed 16 default to black
        assert_eq!(palette.get(16), Rgb::new(0, 0, 0));
        assert_eq!(palette.get(255), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_set_then_get() {
        let mut palette = Palette::new();
        palette.set(42, Rgb::new(10, 20, 30));
        assert_eq!(palette.get(42), Rgb::new(10, 20, 30));
    }
}
