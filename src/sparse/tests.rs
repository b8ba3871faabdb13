#[cfg(test)]
mod tests {
    use crate::{generations, is_alive, iterate, living_neighbors, step, BoundingBox, Coord, State};

    fn state(cells: &[(i64, i64)]) -> State {
        State::from_cells(cells.iter().copied())
    }

    const GLIDER: [(i64, i64); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    const BLOCK: [(i64, i64); 4] = [(1, 1), (2, 1), (1, 2), (2, 2)];
    const BLINKER: [(i64, i64); 3] = [(0, 1), (1, 1), (2, 1)];

    #[test]
    fn test_coord_equality() {
        assert_eq!(Coord::new(3, -4), Coord::new(3, -4));
        assert_ne!(Coord::new(3, -4), Coord::new(-4, 3));
        assert_ne!(Coord::new(0, 1), Coord::new(0, 2));
    }

    #[test]
    fn test_neighbors_order() {
        let n = Coord::new(10, 20).neighbors().collect::<Vec<_>>();
        let expected = [
            (9, 19),
            (9, 20),
            (9, 21),
            (10, 19),
            (10, 21),
            (11, 19),
            (11, 20),
            (11, 21),
        ]
        .map(Coord::from);
        assert_eq!(n, expected);
        assert!(!n.contains(&Coord::new(10, 20)));
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(
            State::new().bounding_box(),
            BoundingBox {
                top_right: Coord::ORIGIN,
                bottom_left: Coord::ORIGIN
            }
        );

        let single = state(&[(5, 5)]).bounding_box();
        assert_eq!(single.top_right, Coord::new(5, 5));
        assert_eq!(single.bottom_left, Coord::new(5, 5));
        assert_eq!((single.width(), single.height()), (1, 1));

        // extremes on different cells, negative coordinates
        let b = state(&[(3, -7), (-2, 4), (0, 0)]).bounding_box();
        assert_eq!(b.top_right, Coord::new(3, 4));
        assert_eq!(b.bottom_left, Coord::new(-2, -7));
        assert_eq!((b.width(), b.height()), (6, 12));
    }

    #[test]
    fn test_state_collapses_duplicates() {
        let s = state(&[(1, 1), (1, 1), (2, 2)]);
        assert_eq!(s.population(), 2);
        assert_eq!(s, state(&[(2, 2), (1, 1)]));
    }

    #[test]
    fn test_cells_row_major() {
        let s = state(&[(2, 1), (0, 0), (-1, 1), (5, 0)]);
        let expected = [(0, 0), (5, 0), (-1, 1), (2, 1)].map(Coord::from);
        assert_eq!(s.cells(), expected);
    }

    #[test]
    fn test_liveness_rule() {
        let s = state(&BLINKER);
        // middle of the blinker: 2 neighbors, alive -> survives
        assert_eq!(living_neighbors(Coord::new(1, 1), &s), 2);
        assert!(is_alive(Coord::new(1, 1), &s));
        // end of the blinker: 1 neighbor -> dies
        assert_eq!(living_neighbors(Coord::new(0, 1), &s), 1);
        assert!(!is_alive(Coord::new(0, 1), &s));
        // above the middle: 3 neighbors, dead -> birth
        assert_eq!(living_neighbors(Coord::new(1, 0), &s), 3);
        assert!(is_alive(Coord::new(1, 0), &s));
        // dead cell with 2 neighbors stays dead
        assert_eq!(living_neighbors(Coord::new(0, 0), &s), 2);
        assert!(!is_alive(Coord::new(0, 0), &s));
    }

    #[test]
    fn test_liveness_overcrowding() {
        let s = state(&[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
        assert_eq!(living_neighbors(Coord::new(1, 1), &s), 4);
        assert!(!is_alive(Coord::new(1, 1), &s));
    }

    #[test]
    fn test_liveness_exhaustive_neighborhood() {
        // every subset of the 3x3 neighborhood around the origin
        let center = Coord::ORIGIN;
        let mut around = center.neighbors().collect::<Vec<_>>();
        around.push(center);
        for mask in 0u32..(1 << 9) {
            let s = State::from_cells(
                around
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask >> i & 1 == 1)
                    .map(|(_, &c)| c),
            );
            let count = (mask & 0xff).count_ones();
            let alive = mask >> 8 & 1 == 1;
            let expected = count == 3 || (count == 2 && alive);
            assert_eq!(is_alive(center, &s), expected, "mask={:09b}", mask);
        }
    }

    #[test]
    fn test_step_empty() {
        let next = step(&State::new());
        assert!(next.is_empty());
        assert_eq!(next.bounding_box(), BoundingBox::default());
    }

    #[test]
    fn test_step_single_cell_dies() {
        assert!(step(&state(&[(5, 5)])).is_empty());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = state(&BLOCK);
        assert_eq!(step(&block), block);
        assert_eq!(step(&step(&block)), block);
    }

    #[test]
    fn test_blinker_period_2() {
        let blinker = state(&BLINKER);
        let once = step(&blinker);
        assert_eq!(once, state(&[(1, 0), (1, 1), (1, 2)]));
        assert_eq!(step(&once), blinker);
    }

    #[test]
    fn test_glider_translation() {
        let glider = state(&GLIDER);
        let mut s = glider.clone();
        for _ in 0..4 {
            s = step(&s);
        }
        assert_eq!(s.population(), 5);
        assert_eq!(s.translated(-1, -1), glider);
        assert_eq!(s, glider.translated(1, 1));
    }

    #[test]
    fn test_step_results_are_distinct() {
        let mut s = state(&[(3, 2), (2, 3), (3, 3), (3, 4), (4, 4)]);
        for _ in 0..50 {
            s = step(&s);
            let mut cells = s.cells();
            assert_eq!(cells.len(), s.population());
            cells.dedup();
            assert_eq!(cells.len(), s.population());
        }
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let glider = state(&GLIDER);
        let copy = glider.clone();
        let _ = step(&glider);
        assert_eq!(glider, copy);
    }

    #[test]
    fn test_iterate_zero() {
        let seed = state(&GLIDER);
        assert_eq!(iterate(&seed, 0), vec![seed]);
    }

    #[test]
    fn test_iterate_length_and_chain() {
        let seed = state(&GLIDER);
        for n in 0..10 {
            let states = iterate(&seed, n);
            assert_eq!(states.len(), n + 1);
            assert_eq!(states[0], seed);
            for w in states.windows(2) {
                assert_eq!(step(&w[0]), w[1]);
            }
        }
    }

    #[test]
    fn test_iterate_empty_seed() {
        let states = iterate(&State::new(), 3);
        assert_eq!(states.len(), 4);
        assert!(states.iter().all(State::is_empty));
    }

    #[test]
    fn test_generations_restartable() {
        let mut gens = generations(state(&BLINKER));
        gens.next();
        let resumed = gens.clone();
        let a = gens.take(4).collect::<Vec<_>>();
        let b = resumed.take(4).collect::<Vec<_>>();
        assert_eq!(a, b);
        assert_eq!(a[0], state(&[(1, 0), (1, 1), (1, 2)]));
        assert_eq!(a[1], state(&BLINKER));
    }

    #[test]
    fn test_neighbors_at_range_edges() {
        let corner = Coord::new(i64::MAX, i64::MIN);
        let n = corner.neighbors().collect::<Vec<_>>();
        let expected = [
            (i64::MAX - 1, i64::MIN),
            (i64::MAX - 1, i64::MIN + 1),
            (i64::MAX, i64::MIN + 1),
        ]
        .map(Coord::from);
        assert_eq!(n, expected);
        assert_eq!(Coord::new(i64::MIN, 0).neighbors().count(), 5);
    }

    #[test]
    fn test_block_still_life_at_range_edges() {
        const MAX: i64 = i64::MAX;
        const MIN: i64 = i64::MIN;
        let blocks = [
            [(MAX - 1, 0), (MAX, 0), (MAX - 1, 1), (MAX, 1)],
            [(MIN, 0), (MIN + 1, 0), (MIN, 1), (MIN + 1, 1)],
            [(0, MAX - 1), (1, MAX - 1), (0, MAX), (1, MAX)],
            [(0, MIN), (1, MIN), (0, MIN + 1), (1, MIN + 1)],
            [(MAX - 1, MAX - 1), (MAX, MAX - 1), (MAX - 1, MAX), (MAX, MAX)],
        ];
        for cells in blocks {
            let block = state(&cells);
            assert_eq!(step(&block), block, "cells={:?}", cells);
        }
    }

    #[test]
    fn test_bounding_box_full_range() {
        let b = state(&[(i64::MIN, i64::MIN), (i64::MAX, i64::MAX)]).bounding_box();
        assert_eq!((b.width(), b.height()), (u64::MAX, u64::MAX));
        let grown = b.expanded(1);
        assert_eq!(grown.top_right, Coord::new(i64::MAX, i64::MAX));
        assert_eq!(grown.bottom_left, Coord::new(i64::MIN, i64::MIN));
    }
}
