use crate::{
    compile::draw::{DrawOp, Role, Stroke, TextAnchor, TextStyle},
    foundation::core::{BezPath, Color, Point},
    scale::linear::{LinearScale, format_fixed},
};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const LABEL_FONT_PX: f64 = 10.0;

/// Side of the plot an axis is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis, ticks and labels below the line.
    Bottom,
    /// Vertical axis, ticks and labels left of the line.
    Left,
}

/// How tick values are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Rounded to a whole number.
    Integer,
    /// Fixed precision derived from the tick step.
    Auto,
}

/// Axis description; [`Axis::draw_ops`] turns it into draw operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub scale: LinearScale,
    pub orient: AxisOrient,
    /// Requested tick count.
    pub ticks: usize,
    pub format: TickFormat,
    /// Position of the axis line: `y` for bottom axes, `x` for left axes.
    pub offset: f64,
    pub ink: Color,
}

impl Axis {
    /// Horizontal axis along `y`.
    pub fn bottom(scale: LinearScale, y: f64, ticks: usize) -> Self {
        Self {
            scale,
            orient: AxisOrient::Bottom,
            ticks,
            format: TickFormat::Auto,
            offset: y,
            ink: Color::BLACK,
        }
    }

    /// Vertical axis along `x`.
    pub fn left(scale: LinearScale, x: f64, ticks: usize) -> Self {
        Self {
            scale,
            orient: AxisOrient::Left,
            ticks,
            format: TickFormat::Auto,
            offset: x,
            ink: Color::BLACK,
        }
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_ink(mut self, ink: Color) -> Self {
        self.ink = ink;
        self
    }

    /// Printed tick labels, in tick order.
    pub fn tick_labels(&self) -> Vec<String> {
        let precision = self.scale.tick_precision(self.ticks);
        self.scale
            .ticks(self.ticks)
            .into_iter()
            .map(|v| match self.format {
                TickFormat::Integer => format!("{}", v.round() as i64),
                TickFormat::Auto => format_fixed(v, precision),
            })
            .collect()
    }

    /// Domain line with outer ticks, then one tick mark and label per tick.
    pub fn draw_ops(&self) -> Vec<DrawOp> {
        let stroke = Stroke {
            color: self.ink,
            width: 1.0,
        };
        let [r0, r1] = self.scale.range;
        let o = self.offset;

        let mut domain = BezPath::new();
        match self.orient {
            AxisOrient::Bottom => {
                domain.move_to((r0, o + TICK_SIZE));
                domain.line_to((r0, o));
                domain.line_to((r1, o));
                domain.line_to((r1, o + TICK_SIZE));
            }
            AxisOrient::Left => {
                domain.move_to((o - TICK_SIZE, r0));
                domain.line_to((o, r0));
                domain.line_to((o, r1));
                domain.line_to((o - TICK_SIZE, r1));
            }
        }

        let mut ops = vec![DrawOp::Path {
            role: Role::Axis,
            path: domain,
            fill: None,
            stroke: Some(stroke),
        }];

        let label_style = TextStyle::plain(LABEL_FONT_PX, self.ink);
        let values = self.scale.ticks(self.ticks);
        for (v, label) in values.into_iter().zip(self.tick_labels()) {
            let p = self.scale.map(v);
            let (tick_end, origin, style) = match self.orient {
                AxisOrient::Bottom => (
                    Point::new(p, o + TICK_SIZE),
                    Point::new(p, o + TICK_SIZE + TICK_PADDING),
                    label_style.anchored(TextAnchor::Middle).shifted(0.71),
                ),
                AxisOrient::Left => (
                    Point::new(o - TICK_SIZE, p),
                    Point::new(o - TICK_SIZE - TICK_PADDING, p),
                    label_style.anchored(TextAnchor::End).shifted(0.32),
                ),
            };
            let tick_start = match self.orient {
                AxisOrient::Bottom => Point::new(p, o),
                AxisOrient::Left => Point::new(o, p),
            };
            ops.push(DrawOp::line(Role::Axis, tick_start, tick_end, stroke));
            ops.push(DrawOp::Text {
                role: Role::Axis,
                origin,
                content: label,
                style,
            });
        }
        ops
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/axis.rs"]
mod tests;
