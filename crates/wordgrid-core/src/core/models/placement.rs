use super::direction::Direction;
use serde::Serialize;

/// Where a word sits in a grid: its first letter, the direction it runs in,
/// and how many cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Placement {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Whether every cell of the span lies inside a `size`×`size` grid.
    ///
    /// For the backward diagonal this reduces to `row - length + 1 >= 0` and
    /// `col - length + 1 >= 0`.
    pub fn fits(&self, size: usize) -> bool {
        if self.length == 0 || self.row >= size || self.col >= size {
            return false;
        }
        let (dr, dc) = self.direction.step();
        let reach = self.length as isize - 1;
        let bounds = 0..size as isize;
        bounds.contains(&(self.row as isize + dr * reach))
            && bounds.contains(&(self.col as isize + dc * reach))
    }

    /// Cell coordinates covered by the span, first letter first.
    ///
    /// Only meaningful when [`Placement::fits`] holds for the grid in question.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let Placement {
            row,
            col,
            direction,
            length,
        } = *self;
        let (dr, dc) = direction.step();
        (0..length as isize).map(move |i| {
            (
                (row as isize + dr * i) as usize,
                (col as isize + dc * i) as usize,
            )
        })
    }
}
