/// Axis-aligned box in pixel space, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Bounding box overlap. Edges that only touch do not overlap.
///
/// Both boxes must have positive width and height.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.right() > b.x && a.x < b.right() && a.bottom() > b.y && a.y < b.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let paddle = Rect::new(1, 68, 8, 24);
        let ball = Rect::new(5, 80, 8, 8);
        assert!(overlaps(paddle, ball));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 8, 8);
        assert!(!overlaps(a, Rect::new(8, 0, 8, 8)), "right edge");
        assert!(!overlaps(a, Rect::new(0, 8, 8, 8)), "bottom edge");
        assert!(!overlaps(a, Rect::new(-8, 0, 8, 8)), "left edge");
        assert!(!overlaps(a, Rect::new(0, -8, 8, 8)), "top edge");
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = Rect::new(0, 0, 8, 8);
        assert!(!overlaps(a, Rect::new(4, 20, 8, 8)), "x overlaps only");
        assert!(!overlaps(a, Rect::new(20, 4, 8, 8)), "y overlaps only");
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0, 0, 24, 24);
        let inner = Rect::new(8, 8, 2, 2);
        assert!(overlaps(outer, inner));
        assert!(overlaps(inner, outer));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let paddle = Rect::new(1, 68, 8, 24);
        for x in -10..20 {
            for y in 55..100 {
                let ball = Rect::new(x, y, 8, 8);
                assert_eq!(
                    overlaps(paddle, ball),
                    overlaps(ball, paddle),
                    "asymmetric at ({x}, {y})"
                );
            }
        }
    }
}
