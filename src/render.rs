//! Draw commands and the drawing surface they are issued to.

use crate::geometry::Rect;
use crate::items::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: [f32; 2],
        radius: f32,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
}

impl DrawCommand {
    pub fn issue<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        match self {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => surface.fill_circle(*center, *radius, *color),
            DrawCommand::Rect { rect, color } => surface.fill_rect(rect, *color),
        }
    }
}

/// A presentation target able to draw the two primitives the game needs.
///
/// A frame is `clear`, any number of fills, then `present`.
pub trait Surface {
    type Error;

    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: [f32; 2],
        radius: f32,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, rect: &Rect, color: Color) -> Result<(), Self::Error>;

    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Keeps every presented frame in memory. Used for headless runs and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pending: Vec<DrawCommand>,
    pub frames: Vec<Vec<DrawCommand>>,
}

impl RecordingSurface {
    pub fn new() -> RecordingSurface {
        RecordingSurface::default()
    }

    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Surface for RecordingSurface {
    type Error = std::convert::Infallible;

    fn clear(&mut self, _color: Color) -> Result<(), Self::Error> {
        self.pending.clear();
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: [f32; 2],
        radius: f32,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.pending.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) -> Result<(), Self::Error> {
        self.pending.push(DrawCommand::Rect { rect: *rect, color });
        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}
