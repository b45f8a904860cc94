//! # Video Backend
//!
//! The seam between the screen abstraction and a concrete display. A
//! backend performs the three things the library cannot do portably:
//! switch the adapter between modes, signal vertical retrace, and write
//! palette entries into the DAC.
//!
//! `SoftwareDisplay` implements the trait entirely in memory so the
//! full rendering pipeline can run headless, e.g. under tests.

use crate::color::{Palette, Rgb};
use crate::mode::DisplayMode;
use crate::ScreenError;

/// Display hardware abstraction
pub trait VideoBackend {
    /// Switches the display into the given mode
    fn enter_mode(&mut self, mode: &DisplayMode) -> Result<(), ScreenError>;

    /// Restores the default text mode
    fn restore_text_mode(&mut self);

    /// Blocks until the next vertical retrace interval
    ///
    /// A bounded busy-wait tied to the refresh rate; not cancellable.
    fn wait_retrace(&mut self);

    /// Writes one palette entry into the DAC
    fn write_dac(&mut self, index: u8, color: Rgb);
}

/// In-memory display used for headless rendering and tests
pub struct SoftwareDisplay {
    mode: Option<DisplayMode>,
    dac: Palette,
    retrace_waits: u64,
}

impl SoftwareDisplay {
    pub fn new() -> Self {
        Self {
            mode: None,
            dac: Palette::default(),
            retrace_waits: 0,
        }
    }

    /// Returns the mode the display is currently in, if any
    pub fn active_mode(&self) -> Option<DisplayMode> {
        self.mode
    }

    /// Number of retrace waits performed so far
    pub fn retrace_waits(&self) -> u64 {
        self.retrace_waits
    }

    /// Returns the DAC state
    pub fn dac(&self) -> &Palette {
        &self.dac
    }
}

impl Default for SoftwareDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoBackend for SoftwareDisplay {
    fn enter_mode(&mut self, mode: &DisplayMode) -> Result<(), ScreenError> {
        log::info!(
            "display entering mode {:#04x} ({}x{}, {} colors)",
            mode.id,
            mode.width,
            mode.height,
            mode.colors
        );
        self.mode = Some(*mode);
        Ok(())
    }

    fn restore_text_mode(&mut self) {
        log::info!("display restored to text mode");
        self.mode = None;
    }

    fn wait_retrace(&mut self) {
        // Software retrace is always immediately satisfied
        self.retrace_waits += 1;
    }

    fn write_dac(&mut self, index: u8, color: Rgb) {
        self.dac.set(index, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{self, DisplayMode};

    #[test]
    fn test_mode_cycle() {
        let mut display = SoftwareDisplay::new();
        assert!(display.active_mode().is_none());

        let mode = DisplayMode::find(mode::VGA_320X200_256_COLOR).unwrap();
        display.enter_mode(&mode).unwrap();
        assert_eq!(display.active_mode(), Some(mode));

        display.restore_text_mode();
        assert!(display.active_mode().is_none());
    }

    #[test]
    fn test_retrace_counter() {
        let mut display = SoftwareDisplay::new();
        display.wait_retrace();
        display.wait_retrace();
        assert_eq!(display.retrace_waits(), 2);
    }

    #[test]
    fn test_dac_write() {
        let mut display = SoftwareDisplay::new();
        display.write_dac(7, Rgb::new(1, 2, 3));
        assert_eq!(display.dac().get(7), Rgb::new(1, 2, 3));
    }
}
