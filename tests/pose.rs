// tests/pose.rs
use glam::IVec2;
use mars_rover_core::{Direction, Error, Pose, Side};

const ALL: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

#[test]
fn left_and_right_are_inverse() {
    for d in ALL {
        assert_eq!(d.rotated(Side::Left).rotated(Side::Right), d);
        assert_eq!(d.rotated(Side::Right).rotated(Side::Left), d);
    }
}

#[test]
fn four_turns_complete_the_cycle() {
    for d in ALL {
        let mut left = d;
        let mut right = d;
        for _ in 0..4 {
            left = left.rotated(Side::Left);
            right = right.rotated(Side::Right);
        }
        assert_eq!(left, d, "four left turns must be the identity");
        assert_eq!(right, d, "four right turns must be the identity");
    }
}

#[test]
fn advance_moves_exactly_one_axis() {
    let cases = [
        (Direction::North, IVec2::new(0, 3)),
        (Direction::South, IVec2::new(0, -3)),
        (Direction::East, IVec2::new(3, 0)),
        (Direction::West, IVec2::new(-3, 0)),
    ];

    for (direction, expected) in cases {
        let mut pose = Pose::new(0, 0, direction);
        for _ in 0..3 {
            pose.advance();
        }
        assert_eq!(pose.location, expected);
        assert_eq!(pose.direction, direction, "advance must not change facing");
    }
}

#[test]
fn parses_origin_facing_north() {
    let pose: Pose = "0 0 N".parse().unwrap();
    assert_eq!(pose, Pose::new(0, 0, Direction::North));
}

#[test]
fn parses_negative_coordinates() {
    let pose: Pose = "3 -2 E".parse().unwrap();
    assert_eq!(pose, Pose::new(3, -2, Direction::East));
}

#[test]
fn tolerates_runs_of_whitespace() {
    let pose: Pose = "  4 \t 7   W ".parse().unwrap();
    assert_eq!(pose, Pose::new(4, 7, Direction::West));
}

#[test]
fn rejects_unknown_compass_letter() {
    let err = "1 1 Q".parse::<Pose>().unwrap_err();
    assert!(matches!(err, Error::UnknownDirection('Q')), "{err:?}");
}

#[test]
fn rejects_missing_field() {
    let err = "7".parse::<Pose>().unwrap_err();
    assert!(matches!(err, Error::MalformedPose(_)), "{err:?}");
}

#[test]
fn rejects_letter_in_coordinate_position() {
    // "N" is consumed as the Y coordinate, so this is a coordinate fault,
    // not a missing field.
    let err = "7 N".parse::<Pose>().unwrap_err();
    assert!(matches!(err, Error::InvalidCoordinate { .. }), "{err:?}");
}

#[test]
fn rejects_non_integer_coordinate() {
    let err = "a 1 N".parse::<Pose>().unwrap_err();
    assert!(matches!(err, Error::InvalidCoordinate { .. }), "{err:?}");
}

#[test]
fn rejects_trailing_field() {
    let err = "1 1 N N".parse::<Pose>().unwrap_err();
    assert!(matches!(err, Error::MalformedPose(_)), "{err:?}");
}

#[test]
fn report_is_space_separated_with_compass_letter() {
    assert_eq!(Pose::new(2, -5, Direction::South).to_string(), "2 -5 S");
    assert_eq!(Pose::default().to_string(), "0 0 N");
}
