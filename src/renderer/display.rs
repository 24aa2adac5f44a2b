//! Double-buffered display over an `embedded-graphics` target
//!
//! Every primitive lands in the off-screen `Framebuffer`. `present` pushes the
//! whole buffer to the front target with a single contiguous fill, so the
//! panel never shows a half-drawn frame.

use std::fmt::Debug;

use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Baseline, Text};

use super::framebuffer::Framebuffer;
use super::{Surface, font_for};
use crate::error::{Error, Result};

pub struct BufferedDisplay<D> {
    back: Framebuffer,
    front: D,
    frames: u64,
}

impl<D> BufferedDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap `front`, with a back buffer matching its size
    pub fn new(front: D) -> Self {
        let size = front.bounding_box().size;
        Self {
            back: Framebuffer::new(size.width, size.height),
            front,
            frames: 0,
        }
    }

    /// The buffer being drawn into
    pub fn back(&self) -> &Framebuffer {
        &self.back
    }

    /// The target frames are presented to
    pub fn front(&self) -> &D {
        &self.front
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<D> Surface for BufferedDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    fn clear(&mut self, color: Rgb565) {
        let Ok(()) = self.back.clear(color);
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb565) {
        let Ok(()) = Circle::with_center(center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.back);
    }

    fn fill_round_rect(&mut self, area: Rectangle, corner_radius: u32, color: Rgb565) {
        let corners = Size::new(corner_radius, corner_radius);
        let Ok(()) = RoundedRectangle::with_equal_corners(area, corners)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.back);
    }

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) {
        let Ok(()) = self.back.fill_solid(&area, color);
    }

    fn draw_text(
        &mut self,
        text: &str,
        at: Point,
        size: u8,
        color: Rgb565,
        background: Option<Rgb565>,
    ) {
        let builder = MonoTextStyleBuilder::new()
            .font(font_for(size))
            .text_color(color);
        let style = match background {
            Some(bg) => builder.background_color(bg).build(),
            None => builder.build(),
        };
        let Ok(_) = Text::with_baseline(text, at, style, Baseline::Top).draw(&mut self.back);
    }

    fn present(&mut self) -> Result<()> {
        let area = self.back.bounding_box();
        self.front
            .fill_contiguous(&area, self.back.pixels().iter().copied())
            .map_err(|e| Error::Present(format!("{e:?}")))?;
        self.frames += 1;
        Ok(())
    }
}
