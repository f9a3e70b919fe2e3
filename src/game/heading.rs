/// Direction the snake's head will move on the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Heading) -> bool {
        matches!(
            (self, other),
            (Heading::Up, Heading::Down)
                | (Heading::Down, Heading::Up)
                | (Heading::Left, Heading::Right)
                | (Heading::Right, Heading::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this heading
    ///
    /// y grows downward, matching the row order the renderer draws in.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_headings() {
        assert!(Heading::Up.is_opposite(Heading::Down));
        assert!(Heading::Down.is_opposite(Heading::Up));
        assert!(Heading::Left.is_opposite(Heading::Right));
        assert!(Heading::Right.is_opposite(Heading::Left));

        assert!(!Heading::Up.is_opposite(Heading::Left));
        assert!(!Heading::Up.is_opposite(Heading::Right));
        assert!(!Heading::Up.is_opposite(Heading::Up));
    }

    #[test]
    fn test_heading_delta() {
        assert_eq!(Heading::Up.delta(), (0, -1));
        assert_eq!(Heading::Down.delta(), (0, 1));
        assert_eq!(Heading::Left.delta(), (-1, 0));
        assert_eq!(Heading::Right.delta(), (1, 0));
    }
}
