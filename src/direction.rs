use crate::direction::Direction::{Down, DownLeft, DownRight, Left, Right, Up, UpLeft, UpRight};

/// One of the eight straight-line directions a word can run in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
    Up,
    UpRight,
    UpLeft,
    Left,
}

impl Direction {
    /// Every direction, in the order the search tries them.
    pub const ALL: [Direction; 8] = [Right, Down, DownRight, DownLeft, Up, UpRight, UpLeft, Left];

    /// Unit step as `(Δrow, Δcol)`; rows grow downward.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Right => (0, 1),
            Down => (1, 0),
            DownRight => (1, 1),
            DownLeft => (1, -1),
            Up => (-1, 0),
            UpRight => (-1, 1),
            UpLeft => (-1, -1),
            Left => (0, -1),
        }
    }
}
