use crate::{Coord, LifeError, State};
use std::path::Path;

/// Named seed pattern.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

impl Pattern {
    pub fn state(&self) -> State {
        State::from_cells(self.cells.iter().copied())
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "rpentomino",
        cells: &[(3, 2), (2, 3), (3, 3), (3, 4), (4, 4)],
    },
    Pattern {
        name: "glider",
        cells: &[
            (-2, -2),
            (-1, -2),
            (-2, -1),
            (-1, -1),
            (1, 1),
            (2, 1),
            (3, 1),
            (3, 2),
            (2, 3),
        ],
    },
    Pattern {
        name: "square",
        cells: &[(1, 1), (2, 1), (1, 2), (2, 2)],
    },
];

/// Name accepted by [`resolve_seed`] for a random soup.
pub const RANDOM: &str = "random";

pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name == name)
}

pub fn pattern_names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

/// Square soup of `side x side` cells in the first quadrant.
///
/// Each cell is alive with probability `fill_rate`.
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn random_soup(side: i64, fill_rate: f64, seed: Option<u64>) -> State {
    use rand::{Rng, SeedableRng};
    let mut rng = if let Some(x) = seed {
        rand_chacha::ChaCha8Rng::seed_from_u64(x)
    } else {
        rand_chacha::ChaCha8Rng::from_entropy()
    };
    let mut state = State::new();
    for y in 0..side {
        for x in 0..side {
            if rng.gen_bool(fill_rate) {
                state.insert(Coord::new(x, y));
            }
        }
    }
    state
}

/// Turns a pattern argument into a seed: a catalog name, `random`, or a path to an `.rle` file.
pub fn resolve_seed(name: &str, seed: Option<u64>) -> Result<State, LifeError> {
    if let Some(pattern) = find_pattern(name) {
        return Ok(pattern.state());
    }
    if name == RANDOM {
        return Ok(random_soup(
            crate::Config::RANDOM_SIDE,
            crate::Config::RANDOM_FILL_RATE,
            seed,
        ));
    }
    let path = Path::new(name);
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("rle")) {
        let data = std::fs::read(path)?;
        return crate::parse_rle(&data);
    }
    Err(LifeError::UnknownPattern(name.to_string()))
}
