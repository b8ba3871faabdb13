/// Position of a single cell on the unbounded grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Adjacent cells, eight of them away from the edges of the `i64` range.
    ///
    /// Ordered by x-offset first, then y-offset: `(-1,-1), (-1,0), (-1,1), (0,-1), ...`
    /// Offsets that would leave the `i64` range are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter(|&offset| offset != (0, 0))
            .filter_map(move |(dx, dy)| self.checked_translated(dx, dy))
    }

    pub fn checked_translated(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Shift clamped to the `i64` range.
    pub const fn translated(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
