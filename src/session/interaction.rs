use crate::foundation::core::Point;

/// Pointer input in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a position.
    Move(Point),
    /// Primary button clicked at a position.
    Click(Point),
    /// Pointer left the surface.
    Leave,
}

/// Marker currently under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    /// Dataset index of the hovered marker.
    pub marker: usize,
    /// Pointer position when the hover started.
    pub cursor: Point,
}

/// Pointer-driven state of the map scene: at most one hovered marker (and so at most one
/// floating label) and at most one info line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapState {
    hover: Option<Hover>,
    info: Option<usize>,
}

impl MapState {
    /// Nothing hovered, nothing clicked.
    pub const IDLE: MapState = MapState {
        hover: None,
        info: None,
    };

    /// Marker under the pointer, if any.
    pub fn hover(&self) -> Option<Hover> {
        self.hover
    }

    /// Dataset index whose info line is shown.
    pub fn info(&self) -> Option<usize> {
        self.info
    }

    /// Pointer entered `marker`. Any previous hover is replaced. Returns `true` if state changed.
    pub fn hover_enter(&mut self, marker: usize, cursor: Point) -> bool {
        let next = Some(Hover { marker, cursor });
        if self.hover == next {
            return false;
        }
        self.hover = next;
        true
    }

    /// Pointer left `marker`. Ignored unless `marker` is the hovered one.
    pub fn hover_exit(&mut self, marker: usize) -> bool {
        match self.hover {
            Some(h) if h.marker == marker => {
                self.hover = None;
                true
            }
            _ => false,
        }
    }

    /// `marker` was clicked; its info line replaces any previous one.
    pub fn click(&mut self, marker: usize) -> bool {
        if self.info == Some(marker) {
            return false;
        }
        self.info = Some(marker);
        true
    }

    /// Translate raw pointer input into enter/exit/click transitions.
    ///
    /// `markers` are marker centers in painter's order; later markers sit on top.
    pub fn apply(&mut self, event: PointerEvent, markers: &[Point], radius: f64) -> bool {
        match event {
            PointerEvent::Move(p) => {
                let hit = hit_test(markers, radius, p);
                let current = self.hover.map(|h| h.marker);
                match (current, hit) {
                    (Some(cur), Some(next)) if cur == next => false,
                    (Some(cur), Some(next)) => {
                        self.hover_exit(cur);
                        self.hover_enter(next, p)
                    }
                    (None, Some(next)) => self.hover_enter(next, p),
                    (Some(cur), None) => self.hover_exit(cur),
                    (None, None) => false,
                }
            }
            PointerEvent::Click(p) => match hit_test(markers, radius, p) {
                Some(i) => self.click(i),
                None => false,
            },
            PointerEvent::Leave => match self.hover {
                Some(h) => self.hover_exit(h.marker),
                None => false,
            },
        }
    }
}

/// Topmost marker whose disc contains `p`.
pub fn hit_test(markers: &[Point], radius: f64, p: Point) -> Option<usize> {
    markers
        .iter()
        .rposition(|c| c.distance(p) <= radius)
}

#[cfg(test)]
#[path = "../../tests/unit/session/interaction.rs"]
mod tests;
