//! Map a screen cell back to the boxes occupying it.

use crate::boxes::CounterBox;
use crate::geometry::{Point, Rect};

/// Inclusive containment test between a pointer cell and a box rectangle.
pub fn contains(point: Point, rect: Rect) -> bool {
    rect.contains(point)
}

/// First box in creation order containing `point`.
pub fn hit_test(point: Point, boxes: &[CounterBox]) -> Option<usize> {
    hits(point, boxes).next()
}

/// Every box containing `point`, in creation order. The pack pass never
/// produces overlaps, but callers must not assume at most one hit.
pub fn hits(point: Point, boxes: &[CounterBox]) -> impl Iterator<Item = usize> + '_ {
    boxes
        .iter()
        .enumerate()
        .filter(move |(_, counter)| contains(point, counter.rect()))
        .map(|(idx, _)| idx)
}
