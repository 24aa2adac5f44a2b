//! Presentation module
//!
//! `render` draws one `GameState` snapshot through the `Surface` primitives.
//! `BufferedDisplay` implements `Surface` on top of any RGB565
//! `embedded-graphics` target, drawing into an off-screen `Framebuffer` and
//! flushing it in one pass on `present`.

pub mod display;
pub mod framebuffer;
pub mod scene;

pub use display::BufferedDisplay;
pub use framebuffer::Framebuffer;
pub use scene::render;

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X18, FONT_10X20};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;

use crate::error::Result;

pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const BALL_COLOR: Rgb565 = Rgb565::WHITE;
pub const PADDLE_COLOR: Rgb565 = Rgb565::BLUE;
pub const REWARD_COLOR: Rgb565 = Rgb565::RED;
pub const TITLE_COLOR: Rgb565 = Rgb565::GREEN;
pub const SCORE_COLOR: Rgb565 = Rgb565::YELLOW;
pub const GAME_OVER_COLOR: Rgb565 = Rgb565::RED;

/// Primitive drawing operations the game needs from a display
pub trait Surface {
    fn clear(&mut self, color: Rgb565);

    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb565);

    fn fill_round_rect(&mut self, area: Rectangle, corner_radius: u32, color: Rgb565);

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565);

    /// Draw `text` with its top-left corner at `at`. `size` is a 1-based text scale.
    fn draw_text(
        &mut self,
        text: &str,
        at: Point,
        size: u8,
        color: Rgb565,
        background: Option<Rgb565>,
    );

    /// Show everything drawn since the last `present`
    fn present(&mut self) -> Result<()>;
}

/// Closest built-in font for a text scale
///
/// The panel library draws text scale `N` as its 6x8 font magnified N times
/// (12x16 at 2, 18x24 at 3). `embedded-graphics` ships fixed-size mono fonts
/// instead, so this picks the nearest one: 6x10, 9x18 and 10x20. Text at
/// scale 3 comes out narrower and shorter than on the panel, and anchors
/// stay where the panel would put them.
pub fn font_for(size: u8) -> &'static MonoFont<'static> {
    match size {
        0 | 1 => &FONT_6X10,
        2 => &FONT_9X18,
        _ => &FONT_10X20,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::Size;

    #[test]
    fn test_font_for_scale() {
        assert_eq!(font_for(1).character_size, Size::new(6, 10));
        assert_eq!(font_for(2).character_size, Size::new(9, 18));
        assert_eq!(font_for(3).character_size, Size::new(10, 20));
        // Larger scales fall back to the biggest font
        assert_eq!(font_for(7).character_size, Size::new(10, 20));
    }
}
