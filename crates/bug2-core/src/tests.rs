//! Unit tests for bug2-core primitives.

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction};

    #[test]
    fn offset_moves_one_step() {
        let c = Cell::new(3, 3);
        assert_eq!(c.offset(Direction::North), Some(Cell::new(2, 3)));
        assert_eq!(c.offset(Direction::SouthEast), Some(Cell::new(4, 4)));
        assert_eq!(c.offset(Direction::West), Some(Cell::new(3, 2)));
    }

    #[test]
    fn offset_below_zero_is_none() {
        let c = Cell::new(0, 0);
        assert_eq!(c.offset(Direction::North), None);
        assert_eq!(c.offset(Direction::West), None);
        assert_eq!(c.offset(Direction::South), Some(Cell::new(1, 0)));
    }

    #[test]
    fn direction_to_neighbours() {
        let c = Cell::new(5, 5);
        assert_eq!(c.direction_to(Cell::new(4, 6)), Some(Direction::NorthEast));
        assert_eq!(c.direction_to(Cell::new(5, 5)), None);
        assert_eq!(c.direction_to(Cell::new(7, 5)), None);
        assert!(c.is_adjacent(Cell::new(6, 4)));
    }

    #[test]
    fn signed_conversion_rejects_negative() {
        assert!(Cell::try_from_signed(-1, 0).is_err());
        assert_eq!(Cell::try_from_signed(2, 9).unwrap(), Cell::new(2, 9));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(4, 7).to_string(), "(4, 7)");
    }
}

#[cfg(test)]
mod direction {
    use crate::{Connectivity, Direction};

    #[test]
    fn clockwise_table_is_a_cycle() {
        for (i, &d) in Direction::CLOCKWISE.iter().enumerate() {
            assert_eq!(d.rotate_cw(1), Direction::CLOCKWISE[(i + 1) % 8]);
            assert_eq!(d.rotate_ccw(1).rotate_cw(1), d);
            assert_eq!(d.rotate_cw(8), d);
        }
    }

    #[test]
    fn quarter_turns() {
        assert_eq!(Direction::North.rotate_cw(2), Direction::East);
        assert_eq!(Direction::North.rotate_ccw(2), Direction::West);
        assert_eq!(Direction::SouthWest.rotate_ccw(2), Direction::SouthEast);
    }

    #[test]
    fn reverse_is_half_turn() {
        assert_eq!(Direction::North.reverse(), Direction::South);
        assert_eq!(Direction::NorthEast.reverse(), Direction::SouthWest);
        for d in Direction::CLOCKWISE {
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[test]
    fn delta_round_trips() {
        for d in Direction::CLOCKWISE {
            let (dr, dc) = d.delta();
            assert_eq!(Direction::from_delta(dr, dc), Some(d));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn cardinals() {
        let cardinal: Vec<_> = Direction::CLOCKWISE.iter().filter(|d| d.is_cardinal()).collect();
        assert_eq!(cardinal.len(), 4);
        assert_eq!(Connectivity::Four.moves(), &Direction::CARDINALS);
        assert!(!Connectivity::Four.allows(Direction::NorthEast));
        assert!(Connectivity::Eight.allows(Direction::NorthEast));
    }

    #[test]
    fn quantize_snaps_to_allowed_headings() {
        assert_eq!(Direction::quantize(0.0, 1.0, Connectivity::Four), Some(Direction::East));
        assert_eq!(Direction::quantize(1.0, 1.0, Connectivity::Eight), Some(Direction::SouthEast));
        // Exactly between east and south: the earlier table entry wins.
        assert_eq!(Direction::quantize(1.0, 1.0, Connectivity::Four), Some(Direction::East));
        assert_eq!(Direction::quantize(0.0, 0.0, Connectivity::Eight), None);
    }

    #[test]
    fn parse_connectivity() {
        assert_eq!("4".parse::<Connectivity>().unwrap(), Connectivity::Four);
        assert_eq!("eight".parse::<Connectivity>().unwrap(), Connectivity::Eight);
        assert!("6".parse::<Connectivity>().is_err());
    }
}

#[cfg(test)]
mod metric {
    use crate::{Cell, Metric};

    #[test]
    fn metrics_agree_on_axis() {
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 5);
        for m in [Metric::Manhattan, Metric::Chebyshev, Metric::Euclidean] {
            assert_eq!(m.distance(a, b), 5.0, "{m}");
        }
    }

    #[test]
    fn metrics_differ_on_diagonal() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(Metric::Manhattan.distance(a, b), 7.0);
        assert_eq!(Metric::Chebyshev.distance(a, b), 4.0);
        assert!((Metric::Euclidean.distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Cell::new(2, 9);
        let b = Cell::new(7, 1);
        assert_eq!(Metric::Manhattan.distance(a, b), Metric::Manhattan.distance(b, a));
    }
}

#[cfg(test)]
mod config {
    use crate::{Connectivity, Metric, PlannerConfig};

    #[test]
    fn default_is_four_manhattan() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.connectivity, Connectivity::Four);
        assert_eq!(cfg.metric, Metric::Manhattan);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn tolerance_out_of_range_rejected() {
        assert!(PlannerConfig::default().with_mline_tolerance(1.5).validate().is_err());
        assert!(PlannerConfig::default().with_mline_tolerance(-0.1).validate().is_err());
        assert!(PlannerConfig::default().with_mline_tolerance(f64::NAN).validate().is_err());
        assert!(PlannerConfig::default().with_mline_tolerance(1.0).validate().is_ok());
    }

    #[test]
    fn arrival_tolerance_must_be_non_negative() {
        assert!(PlannerConfig::default().with_arrival_tolerance(-1.0).validate().is_err());
        assert!(PlannerConfig::default().with_arrival_tolerance(f64::INFINITY).validate().is_err());
        assert!(PlannerConfig::eight_connected().with_arrival_tolerance(0.5).validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::SeedRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeedRng::new(7);
        let mut b = SeedRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn pick_is_deterministic() {
        let items = [10, 20, 30, 40, 50];
        let mut a = SeedRng::new(11);
        let mut b = SeedRng::new(11);
        for _ in 0..16 {
            assert_eq!(a.pick(&items), b.pick(&items));
        }
        let empty: [u8; 0] = [];
        assert!(a.pick(&empty).is_none());
    }

    #[test]
    fn gen_bool_clamps() {
        let mut r = SeedRng::new(1);
        assert!(r.gen_bool(2.0));
        assert!(!r.gen_bool(-1.0));
    }
}
