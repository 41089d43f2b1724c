//! Drag state machine: `Idle` → (`Resizing` | `Repositioning`) → `Idle`.

use tracing::debug;

use crate::geometry::{Bounds, Point};
use crate::mapper::ScaledDimensions;
use crate::shape::Marquee;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragMode {
    #[default]
    Idle,
    /// Moving an existing marquee. `offset` is the press point relative to
    /// its top-left corner.
    Repositioning { offset: Point },
    /// Dragging out a new marquee from a fixed corner. `committed` turns true
    /// once the drag has produced a marquee with area.
    Resizing {
        anchor: Option<Point>,
        committed: bool,
    },
}

/// Geometry produced by one drag step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionUpdate {
    Repositioned(Bounds),
    /// `commit` is false while a fresh drag has not yet produced any area;
    /// the previous marquee stays in place until then.
    Resized { bounds: Bounds, commit: bool },
}

#[derive(Clone, Debug, Default)]
pub struct InteractionSession {
    mode: DragMode,
    shift_held: bool,
}

impl InteractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode != DragMode::Idle
    }

    pub fn is_repositioning(&self) -> bool {
        matches!(self.mode, DragMode::Repositioning { .. })
    }

    pub fn shift_held(&self) -> bool {
        self.shift_held
    }

    pub fn set_shift_held(&mut self, held: bool) {
        self.shift_held = held;
    }

    /// Start a drag. Pressing inside `marquee` moves it, anywhere else starts
    /// a new one anchored at `point`.
    pub fn press(&mut self, point: Point, marquee: Option<&Marquee>) -> DragMode {
        self.mode = match marquee {
            Some(m) if m.contains(point) => DragMode::Repositioning {
                offset: point - m.bounds().top_left(),
            },
            _ => DragMode::Resizing {
                anchor: Some(point),
                committed: false,
            },
        };
        debug!(mode = ?self.mode, x = point.x, y = point.y, "Drag started");
        self.mode
    }

    /// Advance the drag to `point`. Returns `None` when idle.
    pub fn drag(
        &mut self,
        point: Point,
        marquee: Option<&Marquee>,
        dims: &ScaledDimensions,
        constrain: bool,
    ) -> Option<SessionUpdate> {
        let constrain = constrain || self.shift_held;

        match &mut self.mode {
            DragMode::Idle => None,
            DragMode::Repositioning { offset } => {
                let b = marquee?.bounds();
                let moved = Bounds::normalized(point.x - offset.x, point.y - offset.y, b.w, b.h);
                Some(SessionUpdate::Repositioned(dims.fit(&moved)))
            }
            DragMode::Resizing { anchor, committed } => {
                let anchor = *anchor.get_or_insert(point);
                let bounds = resize_bounds(anchor, point, dims, constrain);
                *committed |= bounds.has_area();
                Some(SessionUpdate::Resized {
                    bounds,
                    commit: *committed,
                })
            }
        }
    }

    /// End the drag, returning the mode that was left.
    pub fn release(&mut self) -> DragMode {
        let left = std::mem::take(&mut self.mode);
        if left != DragMode::Idle {
            debug!(mode = ?left, "Drag released");
        }
        left
    }

    /// Abandon the drag without finishing it.
    pub fn cancel(&mut self) {
        self.mode = DragMode::Idle;
    }
}

/// Marquee spanned from `anchor` to `point`, kept inside the displayed image.
///
/// The anchor itself is clamped first, so a drag started in the letterbox
/// margin begins at the nearest image edge.
fn resize_bounds(anchor: Point, point: Point, dims: &ScaledDimensions, constrain: bool) -> Bounds {
    let x = dims.clamp_x(anchor.x);
    let y = dims.clamp_y(anchor.y);

    let mut w = if point.x < x {
        (point.x - x).max(dims.x - x)
    } else {
        (point.x - x).max(0.0).min(dims.x2 - x)
    };

    let mut h = if point.y < y {
        (point.y - y).max(dims.y - y)
    } else {
        (point.y - y).max(0.0).min(dims.y2 - y)
    };

    if constrain {
        let min = w.abs().min(h.abs());
        w = if w < 0.0 { -min } else { min };
        h = if h < 0.0 { -min } else { min };
    }

    Bounds::normalized(x, y, w, h)
}
