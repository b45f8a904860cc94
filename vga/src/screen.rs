//! # Screen
//!
//! The central entity of the library. A `Screen` owns the visible
//! framebuffer, an optional back buffer, the current drawing color, and
//! the option flags, and drives a [`VideoBackend`] through its
//! lifecycle: create → initialize → draw/update → destroy.
//!
//! Surfaces store one palette index per pixel. All mutation happens on
//! the caller's thread; the screen is an owned value and the library
//! adds no locking of its own.

use alloc::vec::Vec;

use crate::backend::VideoBackend;
use crate::color::{self, Palette, Rgb};
use crate::mode::DisplayMode;
use crate::ScreenError;

bitflags::bitflags! {
    /// Screen option flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ScreenOptions: u8 {
        /// Wait for vertical retrace before presenting
        const VSYNC = 0x01;
        /// Stage all drawing in an off-screen back buffer
        const DOUBLE_BUFFER = 0x02;
    }
}

/// Allocates a zeroed surface, surfacing allocation failure to the caller
fn alloc_surface(len: usize) -> Result<Vec<u8>, ScreenError> {
    let mut surface = Vec::new();
    surface
        .try_reserve_exact(len)
        .map_err(|_| ScreenError::OutOfMemory)?;
    surface.resize(len, 0);
    Ok(surface)
}

/// An indexed-color drawing surface bound to a display mode
pub struct Screen<B: VideoBackend> {
    mode: DisplayMode,
    draw_color: u8,
    options: ScreenOptions,
    /// Visible framebuffer; `Some` iff the screen is initialized
    frame: Option<Vec<u8>>,
    /// Back buffer; `Some` iff `DOUBLE_BUFFER` is set
    back: Option<Vec<u8>>,
    palette: Palette,
    backend: B,
}

impl<B: VideoBackend> Screen<B> {
    /// Creates a screen for the given mode identifier.
    ///
    /// Resolves the mode against the mode table and takes ownership of
    /// the backend. The display hardware is not touched until
    /// [`initialize_video`](Self::initialize_video).
    pub fn create(mode_id: u16, backend: B) -> Result<Self, ScreenError> {
        let mode = DisplayMode::find(mode_id)?;
        log::debug!(
            "screen created for mode {:#04x} ({}x{}, {} colors)",
            mode.id,
            mode.width,
            mode.height,
            mode.colors
        );
        Ok(Self {
            mode,
            draw_color: color::BLACK,
            options: ScreenOptions::empty(),
            frame: None,
            back: None,
            palette: Palette::default(),
            backend,
        })
    }

    /// Switches the display into the screen's mode and maps the surface.
    ///
    /// Precondition: must be called exactly once per screen. A second
    /// call is a contract violation, not a supported operation.
    pub fn initialize_video(&mut self) -> Result<(), ScreenError> {
        debug_assert!(
            self.frame.is_none(),
            "initialize_video called on an initialized screen"
        );
        self.backend.enter_mode(&self.mode)?;
        match alloc_surface(self.mode.size()) {
            Ok(frame) => self.frame = Some(frame),
            Err(err) => {
                self.backend.restore_text_mode();
                return Err(err);
            }
        }
        log::info!("screen initialized in mode {:#04x}", self.mode.id);
        Ok(())
    }

    /// Tears the screen down, restoring the default text mode.
    ///
    /// Consumes the screen; buffers are released and the backend is
    /// handed back to the caller.
    pub fn destroy(mut self) -> B {
        self.backend.restore_text_mode();
        log::info!("screen destroyed, display returned to text mode");
        self.backend
    }

    /// Enables option flags.
    ///
    /// Enabling `DOUBLE_BUFFER` lazily allocates the back buffer.
    /// Never touches framebuffer contents.
    pub fn enable_options(&mut self, options: ScreenOptions) -> Result<(), ScreenError> {
        if options.contains(ScreenOptions::DOUBLE_BUFFER) && self.back.is_none() {
            self.back = Some(alloc_surface(self.mode.size())?);
        }
        self.options.insert(options);
        log::debug!("screen options now {:?}", self.options);
        Ok(())
    }

    /// Disables option flags, releasing the back buffer if
    /// `DOUBLE_BUFFER` is among them. Never touches framebuffer
    /// contents.
    pub fn disable_options(&mut self, options: ScreenOptions) {
        self.options.remove(options);
        if options.contains(ScreenOptions::DOUBLE_BUFFER) {
            self.back = None;
        }
        log::debug!("screen options now {:?}", self.options);
    }

    /// Fills the active drawing target with color index 0.
    ///
    /// No-op before [`initialize_video`](Self::initialize_video).
    pub fn clear(&mut self) {
        if let Some(target) = self.target_mut() {
            target.fill(color::BLACK);
        }
    }

    /// Presents staged drawing.
    ///
    /// With `DOUBLE_BUFFER` the whole back buffer is copied into the
    /// visible frame; with `VSYNC` the copy is deferred until the
    /// retrace interval. `VSYNC` alone still blocks on retrace, giving
    /// callers drawing directly into the frame a tear-free window.
    /// With neither flag set this is a no-op, as is calling it before
    /// [`initialize_video`](Self::initialize_video).
    pub fn update(&mut self) {
        let Some(frame) = self.frame.as_deref_mut() else {
            return;
        };
        if self.options.contains(ScreenOptions::VSYNC) {
            self.backend.wait_retrace();
        }
        if self.options.contains(ScreenOptions::DOUBLE_BUFFER) {
            if let Some(back) = self.back.as_deref() {
                frame.copy_from_slice(back);
            }
        }
    }

    /// Sets the drawing color, masked to the mode's color count
    pub fn set_draw_color(&mut self, color: u8) {
        self.draw_color = color & (self.mode.colors - 1) as u8;
    }

    /// Modifies one entry of the color lookup table.
    ///
    /// Channels are clamped to the DAC range 0-63. Recolors every pixel
    /// currently displayed with that index. Fails before
    /// [`initialize_video`](Self::initialize_video).
    pub fn modify_palette_color(
        &mut self,
        index: u8,
        red: u8,
        green: u8,
        blue: u8,
    ) -> Result<(), ScreenError> {
        if self.frame.is_none() {
            return Err(ScreenError::NotInitialized);
        }
        let entry = Rgb::new(red, green, blue);
        self.palette.set(index, entry);
        self.backend.write_dac(index, entry);
        Ok(())
    }

    /// Returns the display mode the screen was created for
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.mode.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.mode.height
    }

    /// Number of simultaneous colors in the active mode
    pub fn color_count(&self) -> u16 {
        self.mode.colors
    }

    /// Current drawing color
    pub fn draw_color(&self) -> u8 {
        self.draw_color
    }

    /// Currently enabled option flags
    pub fn options(&self) -> ScreenOptions {
        self.options
    }

    /// Whether `initialize_video` has completed
    pub fn is_initialized(&self) -> bool {
        self.frame.is_some()
    }

    /// The logical color lookup table
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The owned backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Raw view of the visible framebuffer, if initialized
    pub fn frame(&self) -> Option<&[u8]> {
        self.frame.as_deref()
    }

    /// Raw view of the back buffer, if double buffering is enabled
    pub fn back(&self) -> Option<&[u8]> {
        self.back.as_deref()
    }

    /// Bounds-checked read of the active drawing target
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        if self.frame.is_none() {
            return None;
        }
        if x < 0 || y < 0 || x >= self.mode.width as i32 || y >= self.mode.height as i32 {
            return None;
        }
        let target = if self.options.contains(ScreenOptions::DOUBLE_BUFFER) {
            self.back.as_deref()
        } else {
            self.frame.as_deref()
        }?;
        Some(target[y as usize * self.mode.width as usize + x as usize])
    }

    /// The active drawing target: back buffer when double buffering,
    /// else the visible frame. `None` until the screen is initialized.
    pub(crate) fn target_mut(&mut self) -> Option<&mut [u8]> {
        if self.frame.is_none() {
            return None;
        }
        if self.options.contains(ScreenOptions::DOUBLE_BUFFER) {
            self.back.as_deref_mut()
        } else {
            self.frame.as_deref_mut()
        }
    }
}
