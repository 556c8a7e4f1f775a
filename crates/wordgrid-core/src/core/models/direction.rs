use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Horizontal,       // left to right along a row
    Vertical,         // top to bottom along a column
    DiagonalForward,  // down and to the right
    DiagonalBackward, // up and to the left
    HorizontalReverse,
    VerticalReverse,
}

impl Direction {
    pub const FORWARD: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalForward,
        Direction::DiagonalBackward,
    ];

    pub const WITH_REVERSED: [Direction; 6] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalForward,
        Direction::DiagonalBackward,
        Direction::HorizontalReverse,
        Direction::VerticalReverse,
    ];

    /// Row and column delta between consecutive letters.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalForward => (1, 1),
            Direction::DiagonalBackward => (-1, -1),
            Direction::HorizontalReverse => (0, -1),
            Direction::VerticalReverse => (-1, 0),
        }
    }
}

/// The directions a generation run may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionSet {
    #[default]
    Forward,
    WithReversed,
}

impl DirectionSet {
    pub fn directions(self) -> &'static [Direction] {
        match self {
            DirectionSet::Forward => &Direction::FORWARD,
            DirectionSet::WithReversed => &Direction::WITH_REVERSED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_set_contains_exactly_four_directions() {
        let dirs = DirectionSet::Forward.directions();
        assert_eq!(dirs.len(), 4);
        assert!(!dirs.contains(&Direction::HorizontalReverse));
        assert!(!dirs.contains(&Direction::VerticalReverse));
    }

    #[test]
    fn reversed_set_extends_forward_set() {
        let dirs = DirectionSet::WithReversed.directions();
        assert_eq!(dirs.len(), 6);
        for d in Direction::FORWARD {
            assert!(dirs.contains(&d));
        }
    }

    #[test]
    fn backward_diagonal_steps_up_and_left() {
        assert_eq!(Direction::DiagonalBackward.step(), (-1, -1));
    }

    #[test]
    fn default_direction_set_is_forward() {
        assert_eq!(DirectionSet::default(), DirectionSet::Forward);
    }

    #[test]
    fn direction_set_deserializes_from_kebab_case() {
        let set: DirectionSet = serde_json::from_str("\"with-reversed\"").unwrap();
        assert_eq!(set, DirectionSet::WithReversed);
    }
}
