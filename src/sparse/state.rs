use super::Coord;
use ahash::AHashSet;

/// Smallest axis-aligned rectangle containing every living cell.
///
/// For an empty state both corners are `(0, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub top_right: Coord,
    pub bottom_left: Coord,
}

impl BoundingBox {
    pub fn of(state: &State) -> Self {
        let mut cells = state.cells.iter();
        let Some(&first) = cells.next() else {
            return Self::default();
        };
        let (mut min, mut max) = (first, first);
        for c in cells {
            min.x = min.x.min(c.x);
            min.y = min.y.min(c.y);
            max.x = max.x.max(c.x);
            max.y = max.y.max(c.y);
        }
        Self {
            top_right: max,
            bottom_left: min,
        }
    }

    /// Saturates at `u64::MAX` for a box spanning the whole `i64` range.
    pub fn width(&self) -> u64 {
        self.top_right.x.abs_diff(self.bottom_left.x).saturating_add(1)
    }

    pub fn height(&self) -> u64 {
        self.top_right.y.abs_diff(self.bottom_left.y).saturating_add(1)
    }

    /// Same box grown by `margin` cells on every side, clamped to the `i64` range.
    pub fn expanded(&self, margin: i64) -> Self {
        Self {
            top_right: self.top_right.translated(margin, margin),
            bottom_left: self.bottom_left.translated(-margin, -margin),
        }
    }
}

/// Set of living cells of one generation.
#[derive(Clone, Debug, Default)]
pub struct State {
    cells: AHashSet<Coord>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from any sequence of cells; repeated cells collapse into one.
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    pub fn insert(&mut self, cell: Coord) -> bool {
        self.cells.insert(cell)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Cells sorted row-major: ascending `y`, then ascending `x`.
    pub fn cells(&self) -> Vec<Coord> {
        let mut result = self.cells.iter().copied().collect::<Vec<_>>();
        result.sort_unstable_by_key(|c| (c.y, c.x));
        result
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::of(self)
    }

    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        Self::from_cells(self.iter().map(|c| c.translated(dx, dy)))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.population() == other.population() && self.iter().all(|c| other.contains(c))
    }
}

impl Eq for State {}

impl<C: Into<Coord>> FromIterator<C> for State {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}
