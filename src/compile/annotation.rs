use crate::{
    compile::draw::{DrawOp, Role, Stroke, TextAnchor, TextStyle},
    foundation::core::{Color, Point, Vec2},
};

const NOTE_WIDTH: f64 = 110.0;
const TITLE_RISE: f64 = 22.0;
const LABEL_RISE: f64 = 6.0;
const NOTE_FONT_PX: f64 = 12.0;

/// Labeled callout pointing at a plotted position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Annotation {
    /// Plotted position the callout points at, in surface units.
    pub subject: Point,
    /// Horizontal offset from subject to note.
    pub dx: f64,
    /// Vertical offset from subject to note.
    pub dy: f64,
    pub title: String,
    pub label: String,
}

impl Annotation {
    pub fn new(
        subject: Point,
        dx: f64,
        dy: f64,
        title: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            subject,
            dx,
            dy,
            title: title.into(),
            label: label.into(),
        }
    }

    /// Where the note text sits.
    pub fn note(&self) -> Point {
        self.subject + Vec2::new(self.dx, self.dy)
    }

    /// Connector, note underline, title and label, all tagged `Role::Annotation(id)`.
    ///
    /// Notes to the right of the subject are left-aligned, notes to the left right-aligned.
    pub(crate) fn draw_ops(&self, id: usize, ink: Color) -> Vec<DrawOp> {
        let role = Role::Annotation(id);
        let stroke = Stroke {
            color: ink,
            width: 1.0,
        };
        let note = self.note();
        let (anchor, dir) = if self.dx >= 0.0 {
            (TextAnchor::Start, 1.0)
        } else {
            (TextAnchor::End, -1.0)
        };

        vec![
            DrawOp::line(role, self.subject, note, stroke),
            DrawOp::line(
                role,
                note,
                note + Vec2::new(dir * NOTE_WIDTH, 0.0),
                stroke,
            ),
            DrawOp::Text {
                role,
                origin: note - Vec2::new(0.0, TITLE_RISE),
                content: self.title.clone(),
                style: TextStyle::plain(NOTE_FONT_PX, ink).bold().anchored(anchor),
            },
            DrawOp::Text {
                role,
                origin: note - Vec2::new(0.0, LABEL_RISE),
                content: self.label.clone(),
                style: TextStyle::plain(NOTE_FONT_PX, ink).anchored(anchor),
            },
        ]
    }
}
