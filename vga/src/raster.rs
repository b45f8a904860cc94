//! # 2D Rasterization Primitives
//!
//! Point, line, rectangle, and polygon-outline drawing over a
//! [`Screen`]. Every primitive plots through the same bounds-checked
//! point write: coordinates outside the surface are dropped silently,
//! with no wraparound and no error.

use crate::backend::VideoBackend;
use crate::screen::Screen;
use crate::{Rect, ScreenError, Vertex};

/// Writes the current drawing color at (x, y).
///
/// Out-of-bounds coordinates are silently dropped. This is the one
/// primitive every other drawing routine funnels through.
pub fn draw_point<B: VideoBackend>(screen: &mut Screen<B>, x: i32, y: i32) {
    let width = screen.width() as i32;
    let height = screen.height() as i32;
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }
    let color = screen.draw_color();
    let offset = y as usize * width as usize + x as usize;
    if let Some(target) = screen.target_mut() {
        target[offset] = color;
    }
}

/// Draws a straight line using Bresenham's algorithm.
///
/// Integer-only, symmetric in all eight octants, endpoints inclusive.
/// Coincident endpoints draw a single point.
pub fn draw_line<B: VideoBackend>(
    screen: &mut Screen<B>,
    x_start: i32,
    y_start: i32,
    x_end: i32,
    y_end: i32,
) {
    let dx = (x_end - x_start).abs();
    let dy = -(y_end - y_start).abs();
    let sx = if x_start < x_end { 1 } else { -1 };
    let sy = if y_start < y_end { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x_start;
    let mut y = y_start;

    loop {
        draw_point(screen, x, y);

        if x == x_end && y == y_end {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draws the four boundary edges of a rectangle.
///
/// The outline lies inside the width x height pixel extent covered by
/// [`draw_filled_rectangle`]. Negative extents are normalized first; a
/// zero extent draws nothing.
pub fn draw_rectangle<B: VideoBackend>(screen: &mut Screen<B>, rectangle: &Rect) {
    let r = rectangle.normalized();
    if r.width == 0 || r.height == 0 {
        return;
    }
    let x_end = r.x.saturating_add(r.width - 1);
    let y_end = r.y.saturating_add(r.height - 1);

    draw_line(screen, r.x, r.y, x_end, r.y);
    draw_line(screen, r.x, y_end, x_end, y_end);
    draw_line(screen, r.x, r.y, r.x, y_end);
    draw_line(screen, x_end, r.y, x_end, y_end);
}

/// Fills a rectangle's interior.
///
/// Clips to the surface, then writes contiguous horizontal spans per
/// scanline rather than going through the point primitive per pixel.
pub fn draw_filled_rectangle<B: VideoBackend>(screen: &mut Screen<B>, rectangle: &Rect) {
    let r = rectangle.normalized();
    let width = screen.width() as i32;
    let height = screen.height() as i32;

    // Clip to surface bounds
    let x_start = r.x.max(0);
    let y_start = r.y.max(0);
    let x_end = r.x.saturating_add(r.width).min(width);
    let y_end = r.y.saturating_add(r.height).min(height);
    if x_start >= x_end || y_start >= y_end {
        return;
    }

    let color = screen.draw_color();
    let pitch = width as usize;
    if let Some(target) = screen.target_mut() {
        for y in y_start..y_end {
            let row = y as usize * pitch;
            target[row + x_start as usize..row + x_end as usize].fill(color);
        }
    }
}

/// Draws a polygonal outline through a series of vertices.
///
/// Connects consecutive vertices and closes the shape from the last
/// vertex back to the first. Two vertices degenerate to a single line;
/// fewer are rejected.
pub fn draw_polygon<B: VideoBackend>(
    screen: &mut Screen<B>,
    vertices: &[Vertex],
) -> Result<(), ScreenError> {
    if vertices.len() < 2 {
        return Err(ScreenError::InvalidGeometry);
    }

    for edge in vertices.windows(2) {
        draw_line(screen, edge[0].x, edge[0].y, edge[1].x, edge[1].y);
    }

    if vertices.len() > 2 {
        let first = vertices[0];
        let last = vertices[vertices.len() - 1];
        draw_line(screen, last.x, last.y, first.x, first.y);
    }

    Ok(())
}
