// tests/interpretation.rs
use glam::DVec2;
use lsystem_turtle::{
    CommandTable, InvalidGeometryInput, TurtleConfig, TurtleInterpreter, TurtleOp, interpret,
};

const EPS: f64 = 1e-9;

fn assert_point(actual: DVec2, expected: DVec2) {
    assert!(
        actual.abs_diff_eq(expected, EPS),
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_empty_sequence_yields_origin() {
    let trace = interpret("", 1.0, 0.0, 90.0).unwrap();
    assert_eq!(trace.points, vec![DVec2::ZERO]);
    assert!(trace.is_well_formed());
}

#[test]
fn test_draw_class_advances() {
    let trace = interpret("FGRL", 2.0, 0.0, 90.0).unwrap();
    assert_eq!(trace.len(), 5);
    assert_point(trace.points[4], DVec2::new(8.0, 0.0));
}

#[test]
fn test_initial_heading() {
    let trace = interpret("F", 1.0, 90.0, 90.0).unwrap();
    assert_point(trace.points[1], DVec2::new(0.0, 1.0));
}

#[test]
fn test_plus_turns_clockwise_minus_counter_clockwise() {
    // Heading 0, `+` by 90 points down (-Y); `-` by 90 points up (+Y).
    let trace = interpret("+F", 1.0, 0.0, 90.0).unwrap();
    assert_point(trace.points[1], DVec2::new(0.0, -1.0));

    let trace = interpret("-F", 1.0, 0.0, 90.0).unwrap();
    assert_point(trace.points[1], DVec2::new(0.0, 1.0));
}

#[test]
fn test_square_closes() {
    let trace = interpret("F-F-F-F", 1.0, 0.0, 90.0).unwrap();
    assert_eq!(trace.len(), 5);
    assert_point(trace.points[2], DVec2::new(1.0, 1.0));
    assert_point(trace.points[4], DVec2::ZERO);
}

#[test]
fn test_unknown_symbols_are_ignored() {
    let plain = interpret("F+F", 1.0, 0.0, 60.0).unwrap();
    let noisy = interpret("XFx+Yf F?", 1.0, 0.0, 60.0).unwrap();
    assert_eq!(plain.len(), noisy.len());
    for (a, b) in plain.points.iter().zip(&noisy.points) {
        assert_point(*b, *a);
    }
}

#[test]
fn test_branch_returns_pen() {
    let trace = interpret("F[+F]F", 1.0, 0.0, 90.0).unwrap();
    // origin, F, branch tip, restored, final F
    assert_eq!(trace.len(), 5);
    let before_push = trace.points[1];
    assert_point(trace.points[2], DVec2::new(1.0, -1.0));
    assert_point(trace.points[3], before_push);
    // Heading is restored as well.
    assert_point(trace.points[4], DVec2::new(2.0, 0.0));
    assert!(trace.is_well_formed());
}

#[test]
fn test_nested_branches() {
    let trace = interpret("F[-F[-F]F]F", 1.0, 0.0, 90.0).unwrap();
    assert!(trace.is_well_formed());
    assert_point(*trace.points.last().unwrap(), DVec2::new(2.0, 0.0));
}

#[test]
fn test_unmatched_close_is_counted_not_fatal() {
    let trace = interpret("F]F", 1.0, 0.0, 90.0).unwrap();
    assert_eq!(trace.unmatched_closes, 1);
    assert_eq!(trace.unmatched_opens, 0);
    // The stray `]` leaves the pen untouched.
    assert_eq!(trace.len(), 3);
    assert_point(trace.points[2], DVec2::new(2.0, 0.0));
}

#[test]
fn test_unmatched_open_is_counted_not_fatal() {
    let trace = interpret("F[F", 1.0, 0.0, 90.0).unwrap();
    assert_eq!(trace.unmatched_opens, 1);
    assert_eq!(trace.unmatched_closes, 0);
    assert_eq!(trace.len(), 3);
    assert!(!trace.is_well_formed());
}

#[test]
fn test_zero_segment_length_is_rejected() {
    assert_eq!(
        interpret("F", 0.0, 0.0, 90.0).unwrap_err(),
        InvalidGeometryInput::InvalidSegmentLength(0.0)
    );
    assert!(interpret("F", -1.0, 0.0, 90.0).is_err());
    assert!(interpret("F", f64::NAN, 0.0, 90.0).is_err());
    assert!(interpret("F", f64::INFINITY, 0.0, 90.0).is_err());
}

#[test]
fn test_non_finite_angles_are_rejected() {
    assert!(matches!(
        interpret("F", 1.0, f64::NAN, 90.0),
        Err(InvalidGeometryInput::NonFiniteAngle { .. })
    ));
    assert!(matches!(
        interpret("F", 1.0, 0.0, f64::INFINITY),
        Err(InvalidGeometryInput::NonFiniteAngle { .. })
    ));
}

#[test]
fn test_custom_command_table() {
    let commands = CommandTable::standard()
        .with_op('A', TurtleOp::Draw)
        .with_op('F', TurtleOp::Ignore)
        .with_op('→', TurtleOp::Draw);
    let interpreter = TurtleInterpreter::new(TurtleConfig::default())
        .unwrap()
        .with_commands(commands);

    let trace = interpreter.interpret("AF→");
    assert_eq!(trace.len(), 3);
    assert_point(trace.points[2], DVec2::new(2.0, 0.0));
}

#[test]
fn test_standard_table_classification() {
    let table = CommandTable::standard();
    for sym in ['F', 'G', 'R', 'L'] {
        assert_eq!(table.op(sym), TurtleOp::Draw);
    }
    assert_eq!(table.op('+'), TurtleOp::Turn(-1.0));
    assert_eq!(table.op('-'), TurtleOp::Turn(1.0));
    assert_eq!(table.op('['), TurtleOp::Push);
    assert_eq!(table.op(']'), TurtleOp::Pop);
    assert_eq!(table.op('f'), TurtleOp::Ignore);
    assert_eq!(table.op('ß'), TurtleOp::Ignore);
    assert_eq!(CommandTable::empty().op('F'), TurtleOp::Ignore);
}

#[test]
fn test_bounds() {
    let trace = interpret("F-F-F", 1.0, 0.0, 90.0).unwrap();
    let (lo, hi) = trace.bounds().unwrap();
    assert_point(lo, DVec2::new(0.0, 0.0));
    assert_point(hi, DVec2::new(1.0, 1.0));
}
