//! Pointer event types delivered by the platform layer.

use crate::draw::Point;

/// One pointer event of a gesture, in surface-local coordinates.
///
/// Platform code maps its native touch or mouse events onto these three phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer went down: a gesture starts
    Down(Point),
    /// Pointer moved while down
    Move(Point),
    /// Pointer was released: the gesture is committed
    Up(Point),
}

impl GestureEvent {
    /// Position carried by the event.
    pub fn point(&self) -> Point {
        match *self {
            GestureEvent::Down(p) | GestureEvent::Move(p) | GestureEvent::Up(p) => p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_is_the_same_for_every_phase() {
        let at = Point::new(7.0, -3.5);
        for event in [GestureEvent::Down(at), GestureEvent::Move(at), GestureEvent::Up(at)] {
            assert_eq!(event.point(), at);
        }
    }
}
