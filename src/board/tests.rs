use super::*;

#[test]
fn test_color_opponent() {
    assert_eq!(Color::White.opponent(), Color::Black);
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.to_string(), "WHITE");
}

#[test]
fn test_board_constants() {
    assert_eq!(NUM_VERTICES, 23);
    assert_eq!(NUM_EDGES, 42);
    assert_eq!(Vertex::all().count(), NUM_VERTICES);
}

#[test]
fn test_vertex_index_conversion() {
    for (i, v) in Vertex::all().enumerate() {
        assert_eq!(v.to_index(), i);
        assert_eq!(Vertex::from_index(i), v);
    }
    assert_eq!(Vertex::C12.to_index(), 18);
    assert_eq!(Vertex::D4.to_index(), 22);
}

#[test]
fn test_vertex_names() {
    assert_eq!(Vertex::A1.to_string(), "A1");
    assert_eq!(Vertex::C10.name(), "C10");
    assert_eq!("c10".parse::<Vertex>().unwrap(), Vertex::C10);
    assert_eq!(" d2 ".parse::<Vertex>().unwrap(), Vertex::D2);
    assert!(matches!("C13".parse::<Vertex>(), Err(TaratiError::InvalidVertex(_))));
    assert!("".parse::<Vertex>().is_err());
}

#[test]
fn test_ring_partition() {
    let count = |ring: Ring| Vertex::all().filter(|v| v.ring() == ring).count();
    assert_eq!(count(Ring::Center), 1);
    assert_eq!(count(Ring::Boundary), 6);
    assert_eq!(count(Ring::Circumference), 12);
    assert_eq!(count(Ring::Domestic), 4);
}

#[test]
fn test_checker_state_index() {
    let states = [
        Checker::new(Color::White),
        Checker::upgraded(Color::White),
        Checker::new(Color::Black),
        Checker::upgraded(Color::Black),
    ];
    for (i, c) in states.iter().enumerate() {
        assert_eq!(c.state_index(), i);
    }
}

#[test]
fn test_move_parse_and_display() {
    let mv: Move = "C1-B1".parse().unwrap();
    assert_eq!(mv, Move::new(Vertex::C1, Vertex::B1));
    assert_eq!(mv.to_string(), "C1-B1");

    let spaced: Move = "d1 c1".parse().unwrap();
    assert_eq!(spaced, Move::new(Vertex::D1, Vertex::C1));

    assert!(matches!("C1".parse::<Move>(), Err(TaratiError::InvalidMove(_))));
    assert!(matches!("C1-B1-A1".parse::<Move>(), Err(TaratiError::InvalidMove(_))));
    assert!(matches!("C1-X9".parse::<Move>(), Err(TaratiError::InvalidVertex(_))));
}

#[test]
fn test_initial_position() {
    let pos = Position::initial();
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.checker_count(), 2 * CHECKERS_PER_SIDE);
    assert_eq!(pos.count(Color::White), 4);
    assert_eq!(pos.count(Color::Black), 4);
    assert_eq!(pos.upgraded_count(Color::White), 0);

    for v in [Vertex::C1, Vertex::C2, Vertex::D1, Vertex::D2] {
        assert_eq!(pos.get(v), Some(Checker::new(Color::White)));
    }
    for v in [Vertex::C7, Vertex::C8, Vertex::D3, Vertex::D4] {
        assert_eq!(pos.get(v), Some(Checker::new(Color::Black)));
    }
    assert!(pos.is_empty(Vertex::A1));
    assert_eq!(pos.occupied_by(Color::White), home_base(Color::White));
}

#[test]
fn test_place_remove() {
    let mut pos = Position::empty(Color::Black);
    assert_eq!(pos.checker_count(), 0);
    assert_eq!(pos.sole_color(), None);

    pos.place(Vertex::A1, Checker::new(Color::Black));
    assert_eq!(pos.sole_color(), Some(Color::Black));

    pos.place(Vertex::B1, Checker::new(Color::White));
    assert_eq!(pos.sole_color(), None);

    assert_eq!(pos.remove(Vertex::A1), Some(Checker::new(Color::Black)));
    assert_eq!(pos.remove(Vertex::A1), None);
    assert_eq!(pos.sole_color(), Some(Color::White));
}

#[test]
fn test_checkers_canonical_order() {
    let vertices: Vec<Vertex> = Position::initial().checkers().map(|(v, _)| v).collect();
    assert_eq!(
        vertices,
        vec![
            Vertex::C1,
            Vertex::C2,
            Vertex::C7,
            Vertex::C8,
            Vertex::D1,
            Vertex::D2,
            Vertex::D3,
            Vertex::D4
        ]
    );
}

#[test]
fn test_position_is_value() {
    let original = Position::initial();
    let mut copy = original;
    copy.remove(Vertex::C1);
    assert!(original.get(Vertex::C1).is_some());
    assert_ne!(original, copy);
}
