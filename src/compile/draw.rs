use crate::{
    compile::annotation::Annotation,
    config::story::SceneText,
    foundation::core::{BezPath, Canvas, Color, Point},
    scenes::Scene,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
/// What a draw operation represents. Adapters use it for element ids and classes; tests use it
/// to count elements.
pub enum Role {
    /// Axis domain line, tick or tick label.
    Axis,
    /// Connected line through the series.
    Series,
    /// Per-observation point in the line charts.
    Dot,
    /// Emphasized point in the year-focus scene.
    FocusDot,
    /// Part of the annotation at this index in [`DrawList::annotations`].
    Annotation(usize),
    /// Base map polygon.
    Land,
    /// Map marker for the observation at this dataset index.
    Marker(usize),
    /// Floating hover label.
    Tooltip,
    /// Persistent click info line.
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Outline paint.
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Horizontal text alignment relative to the origin.
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Sans-serif text styling.
pub struct TextStyle {
    pub size_px: f64,
    pub weight: FontWeight,
    pub anchor: TextAnchor,
    pub fill: Color,
    /// Baseline shift in em units.
    pub dy_em: f64,
}

impl TextStyle {
    /// Regular weight, start-anchored, no baseline shift.
    pub fn plain(size_px: f64, fill: Color) -> Self {
        Self {
            size_px,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Start,
            fill,
            dy_em: 0.0,
        }
    }

    /// Bold variant.
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Change the anchor.
    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Shift the baseline by `dy_em`.
    pub fn shifted(mut self, dy_em: f64) -> Self {
        self.dy_em = dy_em;
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Draw operation emitted by the scene renderers, in painter's order.
pub enum DrawOp {
    Path {
        role: Role,
        path: BezPath,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Circle {
        role: Role,
        center: Point,
        radius: f64,
        fill: Color,
    },
    Text {
        role: Role,
        origin: Point,
        content: String,
        style: TextStyle,
    },
}

impl DrawOp {
    pub fn role(&self) -> Role {
        match self {
            DrawOp::Path { role, .. } | DrawOp::Circle { role, .. } | DrawOp::Text { role, .. } => {
                *role
            }
        }
    }

    /// Straight stroked segment.
    pub fn line(role: Role, from: Point, to: Point, stroke: Stroke) -> Self {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        DrawOp::Path {
            role,
            path,
            fill: None,
            stroke: Some(stroke),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything one scene draws: the surface content plus the two host labels.
///
/// A draw list always describes the whole surface. Applying one replaces whatever the
/// previous list drew.
pub struct DrawList {
    pub scene: Scene,
    pub canvas: Canvas,
    pub title: String,
    pub description: String,
    pub ops: Vec<DrawOp>,
    pub annotations: Vec<Annotation>,
}

impl DrawList {
    /// Empty surface for `scene` with its texts set.
    pub fn new(scene: Scene, canvas: Canvas, text: &SceneText) -> Self {
        Self {
            scene,
            canvas,
            title: text.title.clone(),
            description: text.description.clone(),
            ops: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn extend(&mut self, ops: impl IntoIterator<Item = DrawOp>) {
        self.ops.extend(ops);
    }

    /// Record an annotation and emit its ops.
    pub fn annotate(&mut self, annotation: Annotation, ink: Color) {
        let id = self.annotations.len();
        self.ops.extend(annotation.draw_ops(id, ink));
        self.annotations.push(annotation);
    }

    /// Operations carrying `role`, in painter's order.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(move |op| op.role() == role)
    }

    /// Number of operations carrying `role`.
    pub fn count(&self, role: Role) -> usize {
        self.with_role(role).count()
    }

    /// Number of map markers, whatever their index.
    pub fn marker_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op.role(), Role::Marker(_)))
            .count()
    }

    /// The circle drawn for `role`, if any.
    pub fn circle(&self, role: Role) -> Option<(Point, f64, Color)> {
        self.with_role(role).find_map(|op| match op {
            DrawOp::Circle {
                center,
                radius,
                fill,
                ..
            } => Some((*center, *radius, *fill)),
            _ => None,
        })
    }

    /// The text drawn for `role`, if any.
    pub fn text(&self, role: Role) -> Option<&str> {
        self.with_role(role).find_map(|op| match op {
            DrawOp::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/draw.rs"]
mod tests;
