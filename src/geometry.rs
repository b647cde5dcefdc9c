/// Integer size measured in terminal character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Zero-indexed cell coordinate, as reported by the terminal for mouse events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Rectangle area anchored within the terminal grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the last row covered by the rectangle.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// One past the last column covered by the rectangle.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Inclusive cell containment: `x <= px <= x + width - 1` and likewise
    /// for rows. A rectangle with zero width or height contains nothing.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_inside() {
        let rect = Rect::new(4, 2, 20, 5);
        assert!(rect.contains(Point::new(4, 2)));
        assert!(rect.contains(Point::new(23, 2)));
        assert!(rect.contains(Point::new(4, 6)));
        assert!(rect.contains(Point::new(23, 6)));
    }

    #[test]
    fn one_cell_beyond_each_edge_is_outside() {
        let rect = Rect::new(4, 2, 20, 5);
        assert!(!rect.contains(Point::new(3, 2)));
        assert!(!rect.contains(Point::new(4, 1)));
        assert!(!rect.contains(Point::new(24, 2)));
        assert!(!rect.contains(Point::new(4, 7)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = Rect::new(3, 3, 0, 4);
        assert!(!rect.contains(Point::new(3, 3)));
        let flat = Rect::new(3, 3, 4, 0);
        assert!(!flat.contains(Point::new(3, 3)));
    }

    #[test]
    fn edges_saturate_at_grid_limit() {
        let rect = Rect::new(u16::MAX - 1, 0, 10, 1);
        assert_eq!(rect.right(), u16::MAX);
        assert!(rect.contains(Point::new(u16::MAX - 1, 0)));
    }
}
