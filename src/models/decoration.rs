use crate::models::document::Color;

/// Drawing instruction recorded by a [`PageDecorator`]. Coordinates and
/// sizes are in points, origin at the top-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        thickness: f32,
    },
}

/// Full-page drawing surface offered to a page decorator. The renderer
/// replays the recorded ops under the content layer of every page.
#[derive(Debug)]
pub struct PageCanvas {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
}

impl PageCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        PageCanvas {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        thickness: f32,
    ) {
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            width,
            height,
            color,
            thickness,
        });
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

/// Strategy invoked by the renderer to paint page backgrounds. Decorations
/// live outside the content flow: whatever is drawn here appears on every
/// page of the output, including pages created by content overflow.
pub trait PageDecorator: Send + Sync {
    fn decorate(&self, canvas: &mut PageCanvas);
}
