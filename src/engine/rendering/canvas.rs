use crate::rendering::{Primitive, Projection};
use crate::utils::Color;
use itertools::Itertools;
use log::trace;

/// Drawing backend. Draw calls are issued in world coordinates between
/// [`Canvas::begin`] and [`Canvas::end`], the projection passed to `begin`
/// tells the backend how those map to pixels.
#[allow(unused_variables)]
pub trait Canvas {
    fn begin(&mut self, projection: &Projection) {}
    fn circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
    fn polygon(&mut self, xs: &[f32], ys: &[f32], color: Color);
    fn end(&mut self) {}
}

/// Emits one frame worth of primitives.
pub fn draw<C: Canvas + ?Sized>(canvas: &mut C, projection: &Projection, primitives: &[Primitive]) {
    canvas.begin(projection);

    for primitive in primitives {
        match primitive {
            Primitive::Circle {
                center,
                radius,
                color,
            } => canvas.circle(center.x, center.y, *radius, *color),
            Primitive::Polygon { vertices, color } => {
                let (xs, ys): (Vec<f32>, Vec<f32>) = vertices.iter().map(|v| (v.x, v.y)).unzip();
                canvas.polygon(&xs, &ys, *color);
            }
        }
    }

    canvas.end();
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Begin(Projection),
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
    Polygon {
        xs: Vec<f32>,
        ys: Vec<f32>,
        color: Color,
    },
    End,
}

/// Keeps every call it receives. Useful for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    /// Calls of the most recent complete frame, without the begin/end markers.
    pub fn last_frame(&self) -> &[DrawCall] {
        let Some(end) = self.calls.iter().rposition(|c| *c == DrawCall::End) else {
            return &[];
        };
        let begin = self.calls[..end]
            .iter()
            .rposition(|c| matches!(c, DrawCall::Begin(_)))
            .map_or(0, |b| b + 1);

        &self.calls[begin..end]
    }

    pub fn frames(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::End).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn begin(&mut self, projection: &Projection) {
        self.calls.push(DrawCall::Begin(*projection));
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn polygon(&mut self, xs: &[f32], ys: &[f32], color: Color) {
        self.calls.push(DrawCall::Polygon {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            color,
        });
    }

    fn end(&mut self) {
        self.calls.push(DrawCall::End);
    }
}

/// Traces draw calls instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct LogCanvas {
    calls_this_frame: usize,
}

impl Canvas for LogCanvas {
    fn begin(&mut self, projection: &Projection) {
        self.calls_this_frame = 0;
        trace!(
            "begin frame, {}x{} world onto {}x{} pixels",
            projection.extent.width,
            projection.extent.height,
            projection.viewport.x,
            projection.viewport.y
        );
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.calls_this_frame += 1;
        trace!("circle ({cx:.2}, {cy:.2}) r={radius:.2} {color:?}");
    }

    fn polygon(&mut self, xs: &[f32], ys: &[f32], color: Color) {
        self.calls_this_frame += 1;
        let points = xs.iter().zip(ys).map(|(x, y)| format!("({x:.2}, {y:.2})")).join(" ");
        trace!("polygon {points} {color:?}");
    }

    fn end(&mut self) {
        trace!("end frame, {} draw calls", self.calls_this_frame);
    }
}
