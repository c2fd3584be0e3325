//! Unit tests for gn-grid.

#[cfg(test)]
mod helpers {
    use gn_core::{CellCode, Position};

    use crate::{DistanceField, Grid};

    /// Build a grid from ASCII rows listed bottom-up (`rows[y]`): `#` is a
    /// wall, `.` a dot, `o` a power item, anything else empty.
    pub fn grid(rows: &[&str], cyclic: bool) -> Grid {
        let height = rows.len() as i32;
        let width = rows[0].len() as i32;
        let mut g = Grid::new(width, height, CellCode::EMPTY).unwrap().with_cyclic(cyclic);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let code = match ch {
                    '#' => CellCode::WALL,
                    '.' => CellCode::DOT,
                    'o' => CellCode::POWER,
                    _   => CellCode::EMPTY,
                };
                g.set(x as i32, y as i32, code).unwrap();
            }
        }
        g
    }

    /// Check the BFS invariant for a wall-blocked field: sources hold 0,
    /// every other reached cell is 1 + the minimum over its reached
    /// neighbors, and no passable cell next to a reached one is left
    /// unreached.
    pub fn assert_bfs_consistent(g: &Grid, field: &DistanceField, sources: &[Position]) {
        for p in g.positions() {
            let d = field.raw(p);
            let wall = g.get_at(p).unwrap().is_wall();
            if wall {
                assert_eq!(d, -1, "wall {p} must be unreached");
                continue;
            }
            if sources.contains(&p) {
                assert_eq!(d, 0, "source {p}");
                continue;
            }
            let best = g.neighbors(p).filter_map(|n| field.get(n)).min();
            match best {
                Some(m) => assert_eq!(d, m as i32 + 1, "cell {p}"),
                None    => assert_eq!(d, -1, "isolated cell {p}"),
            }
        }
    }
}

#[cfg(test)]
mod construction {
    use gn_core::{CellCode, Position};

    use crate::{Grid, GridError};

    #[test]
    fn new_rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 3, CellCode::EMPTY),
            Err(GridError::InvalidDimensions { width: 0, height: 3 })
        );
        assert!(matches!(Grid::new(4, -1, CellCode::EMPTY), Err(GridError::InvalidDimensions { .. })));
    }

    #[test]
    fn new_fills_uniformly() {
        let g = Grid::new(3, 2, CellCode::DOT).unwrap();
        assert_eq!(g.dims(), (3, 2));
        assert_eq!(g.cell_count(), 6);
        assert_eq!(g.count(CellCode::DOT), 6);
        assert!(!g.is_cyclic());
    }

    #[test]
    fn from_matrix_is_column_major() {
        let m = vec![
            vec![CellCode::EMPTY, CellCode::DOT],
            vec![CellCode::WALL, CellCode::POWER],
            vec![CellCode::EMPTY, CellCode::EMPTY],
        ];
        let g = Grid::from_matrix(&m).unwrap();
        assert_eq!(g.dims(), (3, 2));
        assert_eq!(g.get(0, 1).unwrap(), CellCode::DOT);
        assert_eq!(g.get(1, 0).unwrap(), CellCode::WALL);
        assert_eq!(g.get(1, 1).unwrap(), CellCode::POWER);
        assert_eq!(g.to_matrix(), m);
    }

    #[test]
    fn from_matrix_rejects_empty_input() {
        let none: Vec<Vec<CellCode>> = Vec::new();
        assert_eq!(Grid::from_matrix(&none), Err(GridError::NullOrEmptyInput));
        let empty_column: Vec<Vec<CellCode>> = vec![Vec::new()];
        assert_eq!(Grid::from_matrix(&empty_column), Err(GridError::NullOrEmptyInput));
    }

    #[test]
    fn from_matrix_rejects_ragged_input() {
        let m = vec![vec![CellCode::EMPTY; 3], vec![CellCode::EMPTY; 2]];
        assert_eq!(
            Grid::from_matrix(&m),
            Err(GridError::RaggedInput { column: 1, expected: 3, got: 2 })
        );
    }

    #[test]
    fn reset_keeps_cyclic_flag_and_is_atomic_on_error() {
        let mut g = Grid::new(2, 2, CellCode::DOT).unwrap().with_cyclic(true);
        assert!(g.reset(0, 5, CellCode::EMPTY).is_err());
        assert_eq!(g.dims(), (2, 2));
        g.reset(4, 1, CellCode::EMPTY).unwrap();
        assert_eq!(g.dims(), (4, 1));
        assert!(g.is_cyclic());
        assert_eq!(g.get_at(Position::new(3, 0)).unwrap(), CellCode::EMPTY);
    }

    #[test]
    fn reset_from_matrix_replaces_contents() {
        let mut g = Grid::new(5, 5, CellCode::EMPTY).unwrap();
        g.reset_from_matrix(&[[CellCode::WALL]]).unwrap();
        assert_eq!(g.dims(), (1, 1));
        assert_eq!(g.get(0, 0).unwrap(), CellCode::WALL);
    }
}

#[cfg(test)]
mod access {
    use gn_core::{CellCode, Direction, Position};

    use crate::{Grid, GridError};

    #[test]
    fn get_set_never_wrap() {
        let mut g = Grid::new(3, 3, CellCode::EMPTY).unwrap().with_cyclic(true);
        assert_eq!(
            g.get(-1, 0),
            Err(GridError::OutOfBounds { pos: Position::new(-1, 0), width: 3, height: 3 })
        );
        assert!(g.set(3, 0, CellCode::DOT).is_err());
        g.set(2, 1, CellCode::DOT).unwrap();
        assert_eq!(g.get(2, 1).unwrap(), CellCode::DOT);
    }

    #[test]
    fn is_inside_is_pure() {
        let g = Grid::new(2, 3, CellCode::EMPTY).unwrap();
        assert!(g.is_inside(Position::new(1, 2)));
        assert!(!g.is_inside(Position::new(2, 0)));
        assert!(!g.is_inside(Position::new(0, -1)));
    }

    #[test]
    fn set_cyclic_does_not_touch_contents() {
        let mut g = Grid::new(2, 2, CellCode::DOT).unwrap();
        let before = g.to_matrix();
        g.set_cyclic(true);
        assert!(g.is_cyclic());
        assert_eq!(g.to_matrix(), before);
    }

    #[test]
    fn normalize_wraps_or_rejects() {
        let bounded = Grid::new(4, 3, CellCode::EMPTY).unwrap();
        assert!(matches!(bounded.normalize(Position::new(4, 0)), Err(GridError::OutOfBounds { .. })));
        let cyclic = bounded.clone().with_cyclic(true);
        assert_eq!(cyclic.normalize(Position::new(4, -1)).unwrap(), Position::new(0, 2));
    }

    #[test]
    fn neighbor_scan_order() {
        let bounded = Grid::new(3, 3, CellCode::EMPTY).unwrap();
        let ns: Vec<_> = bounded.neighbors(Position::new(0, 0)).collect();
        assert_eq!(ns, vec![Position::new(1, 0), Position::new(0, 1)]);

        let cyclic = bounded.with_cyclic(true);
        let ns: Vec<_> = cyclic.neighbors(Position::new(0, 0)).collect();
        assert_eq!(
            ns,
            vec![Position::new(1, 0), Position::new(2, 0), Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn step_respects_topology() {
        let g = Grid::new(3, 3, CellCode::EMPTY).unwrap();
        assert_eq!(g.step(Position::new(1, 2), Direction::Up), None);
        let g = g.with_cyclic(true);
        assert_eq!(g.step(Position::new(1, 2), Direction::Up), Some(Position::new(1, 0)));
    }

    #[test]
    fn open_neighbors_counts_passable() {
        let g = super::helpers::grid(&["   ", " # ", "   "], false);
        assert_eq!(g.open_neighbors(Position::new(1, 0), CellCode::is_wall), 2);
        assert_eq!(g.open_neighbors(Position::new(0, 0), CellCode::is_wall), 2);
    }
}

#[cfg(test)]
mod fill {
    use gn_core::{CellCode, Position};

    use super::helpers::grid;
    use crate::{Grid, GridError};

    #[test]
    fn uniform_five_by_five_repaints_everything() {
        for x in 1..4 {
            for y in 1..4 {
                let mut g = Grid::new(5, 5, CellCode::EMPTY).unwrap();
                assert_eq!(g.fill(Position::new(x, y), CellCode::DOT).unwrap(), 25);
                assert_eq!(g.count(CellCode::DOT), 25);
            }
        }
    }

    #[test]
    fn second_fill_is_a_no_op() {
        let mut g = grid(&["..#..", "..#..", "....."], false);
        let first = g.fill(Position::new(0, 0), CellCode::POWER).unwrap();
        assert!(first > 0);
        let snapshot = g.clone();
        assert_eq!(g.fill(Position::new(0, 0), CellCode::POWER).unwrap(), 0);
        assert_eq!(g, snapshot);
    }

    #[test]
    fn walls_split_regions_unless_wrapped() {
        let mut bounded = grid(&["..#.."], false);
        assert_eq!(bounded.fill(Position::new(0, 0), CellCode::EMPTY).unwrap(), 2);
        assert_eq!(bounded.get(3, 0).unwrap(), CellCode::DOT);

        let mut cyclic = grid(&["..#.."], true);
        assert_eq!(cyclic.fill(Position::new(0, 0), CellCode::EMPTY).unwrap(), 4);
        assert_eq!(cyclic.get(2, 0).unwrap(), CellCode::WALL);
    }

    #[test]
    fn start_wraps_on_cyclic_and_fails_on_bounded() {
        let mut bounded = Grid::new(3, 3, CellCode::EMPTY).unwrap();
        assert!(matches!(
            bounded.fill(Position::new(-1, 0), CellCode::DOT),
            Err(GridError::OutOfBounds { .. })
        ));
        let mut cyclic = bounded.with_cyclic(true);
        assert_eq!(cyclic.fill(Position::new(-1, 0), CellCode::DOT).unwrap(), 9);
    }
}

#[cfg(test)]
mod distances {
    use gn_core::{CellCode, Position};

    use super::helpers::{assert_bfs_consistent, grid};
    use crate::{Grid, GridError, UNREACHABLE};

    #[test]
    fn bfs_invariant_holds_on_walled_grid() {
        let g = grid(
            &[
                "  #  # ",
                "  # ## ",
                "  #  # ",
                "     # ",
                "###  # ",
            ],
            false,
        );
        let start = Position::new(0, 0);
        let field = g.all_distances(start, CellCode::WALL).unwrap();
        assert_bfs_consistent(&g, &field, &[start]);
        // Column x=6 is sealed off by the wall column at x=5.
        assert_eq!(field.raw(Position::new(6, 0)), UNREACHABLE);
    }

    #[test]
    fn bfs_invariant_holds_on_cyclic_grid() {
        let g = grid(&[" #  ", " # #", "    "], true);
        let start = Position::new(0, 0);
        let field = g.all_distances(start, CellCode::WALL).unwrap();
        assert_bfs_consistent(&g, &field, &[start]);
    }

    #[test]
    fn obstacle_free_distance_is_manhattan() {
        let g = Grid::new(7, 5, CellCode::EMPTY).unwrap();
        let start = Position::new(2, 1);
        let field = g.all_distances(start, CellCode::WALL).unwrap();
        for p in g.positions() {
            assert_eq!(field.get(p), Some(start.manhattan(p)), "at {p}");
        }
    }

    #[test]
    fn obstacle_free_cyclic_distance_is_toroidal_manhattan() {
        let g = Grid::new(7, 5, CellCode::EMPTY).unwrap().with_cyclic(true);
        let start = Position::new(6, 0);
        let field = g.all_distances(start, CellCode::WALL).unwrap();
        for p in g.positions() {
            assert_eq!(field.get(p), Some(start.toroidal_manhattan(p, 7, 5)), "at {p}");
        }
    }

    #[test]
    fn obstacle_start_reaches_nothing() {
        let g = grid(&["#.."], false);
        let field = g.all_distances(Position::new(0, 0), CellCode::WALL).unwrap();
        assert_eq!(field.reached(), 0);
        assert_eq!(field.max_distance(), None);
    }

    #[test]
    fn custom_obstacle_code() {
        let g = grid(&[" . "], false);
        let field = g.all_distances(Position::new(0, 0), CellCode::DOT).unwrap();
        assert_eq!(field.get(Position::new(2, 0)), None);
    }

    #[test]
    fn start_errors() {
        let g = Grid::new(3, 3, CellCode::EMPTY).unwrap();
        assert!(matches!(
            g.all_distances(Position::new(3, 3), CellCode::WALL),
            Err(GridError::OutOfBounds { .. })
        ));
        assert_eq!(g.all_distances_from(None, CellCode::WALL), Err(GridError::NullStart));
        assert!(g.all_distances_from(Some(Position::new(1, 1)), CellCode::WALL).is_ok());
    }

    #[test]
    fn clamp_treats_unreached_as_horizon() {
        let g = grid(&["  #  "], false);
        let field = g.all_distances(Position::new(0, 0), CellCode::WALL).unwrap();
        assert_eq!(field.clamped(Position::new(1, 0), 50), 1);
        assert_eq!(field.clamped(Position::new(4, 0), 50), 50);
        assert_eq!(field.clamped(Position::new(1, 0), 0), 0);
        assert_eq!(field.clamped(Position::new(99, 0), 7), 7);
    }

    #[test]
    fn cyclic_field_lookup_wraps() {
        let g = Grid::new(4, 4, CellCode::EMPTY).unwrap().with_cyclic(true);
        let field = g.all_distances(Position::new(0, 0), CellCode::WALL).unwrap();
        assert_eq!(field.get(Position::new(-1, 0)), Some(1));
    }
}

#[cfg(test)]
mod paths {
    use gn_core::{CellCode, Direction, Position};

    use super::helpers::grid;
    use crate::{Grid, GridError, parse_start};

    fn adjacent(g: &Grid, a: Position, b: Position) -> bool {
        g.neighbors(a).any(|n| n == b)
    }

    #[test]
    fn path_matches_distance_and_is_connected() {
        let g = grid(&["   # ", " # # ", " #   ", " ### ", "     "], false);
        let (p1, p2) = (Position::new(0, 0), Position::new(4, 0));
        let field = g.all_distances(p1, CellCode::WALL).unwrap();
        let path = g.shortest_path(p1, p2, CellCode::WALL).unwrap().unwrap();
        assert_eq!(path.len() as u32, field.get(p2).unwrap() + 1);
        assert_eq!(path.start(), Some(p1));
        assert_eq!(path.end(), Some(p2));
        for w in path.cells().windows(2) {
            assert!(adjacent(&g, w[0], w[1]), "{} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn cyclic_path_wraps() {
        let g = Grid::new(5, 5, CellCode::EMPTY).unwrap().with_cyclic(true);
        let path = g
            .shortest_path(Position::new(0, 0), Position::new(4, 4), CellCode::WALL)
            .unwrap()
            .unwrap();
        assert_eq!(path.hops(), 2);
        for w in path.cells().windows(2) {
            assert!(adjacent(&g, w[0], w[1]));
        }
    }

    #[test]
    fn trivial_path() {
        let g = Grid::new(2, 2, CellCode::EMPTY).unwrap();
        let p = Position::new(1, 1);
        let path = g.shortest_path(p, p, CellCode::WALL).unwrap().unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.first_step(), None);
        assert_eq!(path.first_direction(&g), None);
    }

    #[test]
    fn first_direction_on_straight_corridor() {
        let g = Grid::new(1, 4, CellCode::EMPTY).unwrap();
        let path = g
            .shortest_path(Position::new(0, 0), Position::new(0, 3), CellCode::WALL)
            .unwrap()
            .unwrap();
        assert_eq!(path.first_direction(&g), Some(Direction::Up));
        assert_eq!(path.into_vec().len(), 4);
    }

    #[test]
    fn none_for_obstacle_endpoints_or_unreachable_target() {
        let g = grid(&["# #  "], false);
        let p = |x| Position::new(x, 0);
        assert_eq!(g.shortest_path(p(0), p(1), CellCode::WALL).unwrap(), None);
        assert_eq!(g.shortest_path(p(1), p(2), CellCode::WALL).unwrap(), None);
        assert_eq!(g.shortest_path(p(1), p(4), CellCode::WALL).unwrap(), None);
        assert!(g.shortest_path(p(3), p(4), CellCode::WALL).unwrap().is_some());
    }

    #[test]
    fn out_of_bounds_endpoint_on_bounded_grid() {
        let g = Grid::new(2, 2, CellCode::EMPTY).unwrap();
        assert!(matches!(
            g.shortest_path(Position::new(0, 0), Position::new(2, 0), CellCode::WALL),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn inconsistent_field_is_reported() {
        // A cyclic field on a 3x1 strip reaches x=2 across the wrap; walking
        // it back on the bounded strip finds no predecessor.
        let cyclic = Grid::new(3, 1, CellCode::EMPTY).unwrap().with_cyclic(true);
        let field = cyclic.all_distances(Position::new(0, 0), CellCode::WALL).unwrap();
        let bounded = Grid::new(3, 1, CellCode::EMPTY).unwrap();
        assert_eq!(
            bounded.path_in_field(&field, Position::new(2, 0)),
            Err(GridError::PathReconstructionInconsistency { at: Position::new(2, 0), expected: 0 })
        );
    }

    #[test]
    fn parse_start_reports_missing_input() {
        assert_eq!(parse_start(None), Err(GridError::NullStart));
        assert_eq!(parse_start(Some("   ")), Err(GridError::NullStart));
        assert_eq!(parse_start(Some(" 3 , 4 ")).unwrap(), Position::new(3, 4));
        assert!(matches!(parse_start(Some("3;4")), Err(GridError::Core(_))));
    }
}

#[cfg(test)]
mod fields {
    use gn_core::{CellCode, Position};

    use super::helpers::{assert_bfs_consistent, grid};
    use crate::{DistanceFieldBuilder, Grid, GridError};

    #[test]
    fn nearest_code_seeds_every_matching_cell() {
        let g = grid(&[".   .", " ### ", "     "], false);
        let field = DistanceFieldBuilder::new(&g).nearest_code(CellCode::DOT);
        assert_bfs_consistent(&g, &field, &[Position::new(0, 0), Position::new(4, 0)]);
        assert_eq!(field.get(Position::new(2, 0)), Some(2));
        assert_eq!(field.get(Position::new(2, 2)), Some(4));
    }

    #[test]
    fn no_sources_means_nothing_reached() {
        let g = Grid::new(3, 3, CellCode::EMPTY).unwrap();
        let field = DistanceFieldBuilder::new(&g).nearest_code(CellCode::POWER);
        assert_eq!(field.reached(), 0);
    }

    #[test]
    fn source_order_does_not_matter() {
        let g = grid(&["     ", " # # ", "     ", " #   "], true);
        let sources = [Position::new(0, 0), Position::new(4, 3), Position::new(2, 2), Position::new(2, 2)];
        let builder = DistanceFieldBuilder::new(&g);
        let forward = builder.nearest_positions(sources).unwrap();
        let mut reversed = sources;
        reversed.reverse();
        let backward = builder.nearest_positions(reversed).unwrap();
        assert_eq!(forward, backward);

        // Equal to the pointwise minimum of single-source fields.
        for p in g.positions() {
            let min = sources
                .iter()
                .filter_map(|&s| g.all_distances(s, CellCode::WALL).unwrap().get(p))
                .min();
            assert_eq!(forward.get(p), min, "at {p}");
        }
    }

    #[test]
    fn blocked_sources_are_skipped() {
        let g = grid(&["#  "], false);
        let field = DistanceFieldBuilder::new(&g)
            .nearest_positions([Position::new(0, 0)])
            .unwrap();
        assert_eq!(field.reached(), 0);
    }

    #[test]
    fn sources_wrap_or_fail() {
        let bounded = Grid::new(3, 3, CellCode::EMPTY).unwrap();
        assert!(matches!(
            DistanceFieldBuilder::new(&bounded).nearest_positions([Position::new(-1, 0)]),
            Err(GridError::OutOfBounds { .. })
        ));
        let cyclic = bounded.with_cyclic(true);
        let field = DistanceFieldBuilder::new(&cyclic)
            .nearest_positions([Position::new(-1, 0)])
            .unwrap();
        assert_eq!(field.get(Position::new(2, 0)), Some(0));
    }

    #[test]
    fn custom_blocked_predicate() {
        let g = grid(&[" . o"], false);
        let field = DistanceFieldBuilder::new(&g)
            .with_blocked(|c: CellCode| c.is_wall() || c == CellCode::DOT)
            .nearest_code(CellCode::POWER);
        assert_eq!(field.get(Position::new(2, 0)), Some(1));
        assert_eq!(field.get(Position::new(0, 0)), None);
    }
}
