//! Input abstraction layer.
//!
//! Normalizes pointer events into view-local `InputEvent`s consumed by the
//! stroke renderer. Hosts deliver client (page) coordinates; the view's
//! on-screen bounding rectangle turns them into surface coordinates.

use rsk_render::Point;

/// A normalized pointer event in view-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down).
    PointerDown { x: f64, y: f64 },

    /// Pointer moved, pressed or not.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64 },

    /// Pointer left the view. Ends a stroke like a release does.
    PointerLeave,
}

/// Which pointer event a host is reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
}

/// The view's bounding rectangle in client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewRect {
    pub left: f64,
    pub top: f64,
}

impl ViewRect {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Translate an absolute client position into view-local space.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }
}

impl InputEvent {
    pub fn from_pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp { x, y }
    }

    /// Build an event from client coordinates and the view's bounding rect.
    pub fn from_client(phase: PointerPhase, client_x: f64, client_y: f64, view: &ViewRect) -> Self {
        let local = view.to_local(client_x, client_y);
        match phase {
            PointerPhase::Down => Self::from_pointer_down(local.x, local.y),
            PointerPhase::Move => Self::from_pointer_move(local.x, local.y),
            PointerPhase::Up => Self::from_pointer_up(local.x, local.y),
            PointerPhase::Leave => Self::PointerLeave,
        }
    }

    /// Extract position if the event carries one.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Some(Point::new(*x, *y))
            }
            Self::PointerLeave => None,
        }
    }
}
