//! Unit tests for gn-core primitives.

#[cfg(test)]
mod ids {
    use crate::ThreatId;

    #[test]
    fn index_roundtrip() {
        let id = ThreatId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ThreatId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(ThreatId::INVALID.0, u32::MAX);
        assert_eq!(ThreatId::default(), ThreatId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(ThreatId(7).to_string(), "ThreatId(7)");
    }
}

#[cfg(test)]
mod pos {
    use crate::{Direction, GnError, Position};

    #[test]
    fn display_is_bare_x_comma_y() {
        assert_eq!(Position::new(3, -4).to_string(), "3,-4");
    }

    #[test]
    fn parse_plain() {
        assert_eq!("5,7".parse::<Position>().unwrap(), Position::new(5, 7));
    }

    #[test]
    fn parse_trims_whole_string_and_components() {
        assert_eq!("  5 , 7 \n".parse::<Position>().unwrap(), Position::new(5, 7));
    }

    #[test]
    fn parse_rejects_other_separators() {
        assert!(matches!("5;7".parse::<Position>(), Err(GnError::Parse(_))));
        assert!(matches!("5 7".parse::<Position>(), Err(GnError::Parse(_))));
        assert!(matches!("(5,7)".parse::<Position>(), Err(GnError::Parse(_))));
        assert!(matches!("5,7,9".parse::<Position>(), Err(GnError::Parse(_))));
        assert!(matches!("".parse::<Position>(), Err(GnError::Parse(_))));
    }

    #[test]
    fn display_parse_agree() {
        let p = Position::new(-12, 30);
        assert_eq!(p.to_string().parse::<Position>().unwrap(), p);
    }

    #[test]
    fn up_increases_y() {
        let p = Position::new(2, 2);
        assert_eq!(p.offset(Direction::Up), Position::new(2, 3));
        assert_eq!(p.offset(Direction::Down), Position::new(2, 1));
        assert_eq!(p.offset(Direction::Left), Position::new(1, 2));
        assert_eq!(p.offset(Direction::Right), Position::new(3, 2));
        assert_eq!(p.offset(Direction::Stay), p);
    }

    #[test]
    fn opposite_is_involution() {
        for d in Direction::MOVES {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
        assert_eq!(Direction::Stay.opposite(), Direction::Stay);
    }

    #[test]
    fn wrapped_handles_negatives() {
        assert_eq!(Position::new(-1, 5).wrapped(4, 5), Position::new(3, 0));
        assert_eq!(Position::new(9, -6).wrapped(4, 5), Position::new(1, 4));
    }

    #[test]
    fn toroidal_manhattan_takes_short_way_round() {
        let a = Position::new(0, 0);
        let b = Position::new(9, 1);
        assert_eq!(a.manhattan(b), 10);
        assert_eq!(a.toroidal_manhattan(b, 10, 10), 2);
    }
}

#[cfg(test)]
mod cell {
    use crate::CellCode;

    #[test]
    fn well_known_codes() {
        assert!(CellCode::WALL.is_wall());
        assert!(!CellCode::EMPTY.is_wall());
        assert!(CellCode::DOT.is_consumable());
        assert!(CellCode::POWER.is_consumable());
        assert!(!CellCode(42).is_consumable());
    }

    #[test]
    fn display() {
        assert_eq!(CellCode::DOT.to_string(), "dot");
        assert_eq!(CellCode(42).to_string(), "code(42)");
    }
}

#[cfg(test)]
mod threat {
    use crate::{Position, Threat, ThreatId};

    #[test]
    fn dangerous_iff_timer_not_positive() {
        let p = Position::new(1, 1);
        assert!(Threat::new(ThreatId(0), p, 0.0).is_dangerous());
        assert!(Threat::new(ThreatId(0), p, -1.0).is_dangerous());
        assert!(Threat::new(ThreatId(0), p, 0.5).is_vulnerable());
        assert!(Threat::dangerous(ThreatId(1), p).is_dangerous());
    }
}

#[cfg(test)]
mod time {
    use crate::time::whole_ticks;
    use crate::{GameClock, Tick};

    #[test]
    fn advance() {
        let mut c = GameClock::new(0.5);
        c.advance();
        c.advance();
        assert_eq!(c.current_tick, Tick(2));
        assert!((c.elapsed_time() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn whole_ticks_rounds_down_and_absorbs_float_error() {
        assert_eq!(whole_ticks(1.0, 0.1), 10);
        assert_eq!(whole_ticks(1.05, 0.1), 10);
        assert_eq!(whole_ticks(0.0, 0.1), 0);
        assert_eq!(whole_ticks(-3.0, 0.1), 0);
        assert_eq!(whole_ticks(6.0, GameClock::default().time_per_tick), 60);
    }
}

#[cfg(test)]
mod rng {
    use crate::{ThreatId, ThreatRng};

    fn pool() -> Vec<u32> {
        (0..1000).collect()
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = ThreatRng::new(7, ThreatId(3));
        let mut b = ThreatRng::new(7, ThreatId(3));
        let pool = pool();
        for _ in 0..16 {
            assert_eq!(a.choose(&pool), b.choose(&pool));
        }
    }

    #[test]
    fn different_threats_diverge() {
        let mut a = ThreatRng::new(7, ThreatId(0));
        let mut b = ThreatRng::new(7, ThreatId(1));
        let pool = pool();
        let xs: Vec<u32> = (0..32).filter_map(|_| a.choose(&pool).copied()).collect();
        let ys: Vec<u32> = (0..32).filter_map(|_| b.choose(&pool).copied()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut r = ThreatRng::new(1, ThreatId(0));
        let empty: [u8; 0] = [];
        assert!(r.choose(&empty).is_none());
    }
}
