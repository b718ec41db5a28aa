// tests/interpreter.rs
use glam::IVec2;
use grid_rover::{CommandInterpreter, Heading, Robot, RobotError, RoverOp, parse_script};
use symbios::{SymbiosState, SymbolTable};

fn setup() -> (CommandInterpreter, SymbolTable) {
    let mut interner = SymbolTable::new();
    let mut interpreter = CommandInterpreter::new();

    interner.intern("F").unwrap();
    interner.intern("R").unwrap();
    interner.intern("X").unwrap(); // No meaning

    interpreter.set_op(interner.resolve_id("F").unwrap(), RoverOp::Forward);
    interpreter.set_op(interner.resolve_id("R").unwrap(), RoverOp::TurnRight);

    (interpreter, interner)
}

#[test]
fn test_symbol_state_queues_commands() {
    let (interpreter, interner) = setup();
    let f_id = interner.resolve_id("F").unwrap();
    let r_id = interner.resolve_id("R").unwrap();
    let x_id = interner.resolve_id("X").unwrap();

    // F(2) R X F
    let mut state = SymbiosState::new();
    state.push(f_id, 0.0, &[2.0]).unwrap();
    state.push(r_id, 0.0, &[]).unwrap();
    state.push(x_id, 0.0, &[]).unwrap();
    state.push(f_id, 0.0, &[]).unwrap(); // Default speed

    let mut robot = Robot::new();
    let summary = interpreter.queue_state(&mut robot, &state);

    assert_eq!(summary.queued, 3);
    assert_eq!(summary.ignored, 1);
    assert!(summary.is_clean());

    // Nothing moves until the queue is replayed.
    assert_eq!(robot.position(), IVec2::ZERO);

    robot.execute();
    assert_eq!(robot.position(), IVec2::new(1, 2));
    assert_eq!(robot.heading(), Heading::East);
}

#[test]
fn test_out_of_range_parameters_are_collected() {
    let (interpreter, interner) = setup();
    let f_id = interner.resolve_id("F").unwrap();

    let mut state = SymbiosState::new();
    state.push(f_id, 0.0, &[5.0]).unwrap();
    state.push(f_id, 0.0, &[3.0]).unwrap();
    state.push(f_id, 0.0, &[0.0]).unwrap();

    let mut robot = Robot::new();
    let summary = interpreter.queue_state(&mut robot, &state);

    assert_eq!(summary.queued, 1);
    assert_eq!(summary.rejected.len(), 2);
    assert!(matches!(
        summary.rejected[0],
        RobotError::InvalidSpeed { steps: 5, min: 1, max: 3 }
    ));
    assert_eq!(robot.commands().len(), 1);
}

#[test]
fn test_unmapped_ids_are_ignored() {
    let interpreter = CommandInterpreter::new().with_map(vec![RoverOp::TurnLeft]);
    assert_eq!(interpreter.op(0), RoverOp::TurnLeft);
    assert_eq!(interpreter.op(7), RoverOp::Ignore);
}

#[test]
fn test_script_demo_program() {
    let mut interner = SymbolTable::new();
    let state = parse_script("R F R B", &mut interner).unwrap();

    let mut interpreter = CommandInterpreter::new();
    interpreter.populate_standard_symbols(&interner);

    let mut robot = Robot::at(2, 5, Heading::West);
    let summary = interpreter.queue_state(&mut robot, &state);
    assert_eq!(summary.queued, 4);

    robot.execute();
    assert_eq!(robot.report_state().to_string(), "Now facing \"EAST\" at (1,6)");
}

#[test]
fn test_script_step_counts_and_separators() {
    let mut interner = SymbolTable::new();
    let state = parse_script("f3,l F(2)\nb1 Q", &mut interner).unwrap();
    assert_eq!(state.len(), 5);

    let mut interpreter = CommandInterpreter::new();
    interpreter.populate_standard_symbols(&interner);

    let mut robot = Robot::new();
    let summary = interpreter.queue_state(&mut robot, &state);
    assert_eq!(summary.queued, 4);
    assert_eq!(summary.ignored, 1);

    let rendered: Vec<String> = robot.commands().iter().map(|c| c.to_string()).collect();
    assert_eq!(rendered, ["f3", "l", "f2", "b1"]);

    // f3 -> (0, 3); l -> WEST; F2 -> (-2, 3); b1 -> (-1, 3).
    robot.execute();
    assert_eq!(robot.position(), IVec2::new(-1, 3));
    assert_eq!(robot.heading(), Heading::West);
}

#[test]
fn test_script_negative_speed_is_rejected_at_queue_time() {
    let mut interner = SymbolTable::new();
    let state = parse_script("F(-1) B9 R", &mut interner).unwrap();

    let mut interpreter = CommandInterpreter::new();
    interpreter.populate_standard_symbols(&interner);

    let mut robot = Robot::new();
    let summary = interpreter.queue_state(&mut robot, &state);
    assert_eq!(summary.queued, 1);
    assert_eq!(summary.rejected.len(), 2);
    assert!(summary.rejected.iter().all(RobotError::is_invalid_speed));
}

#[test]
fn test_script_syntax_errors() {
    let mut interner = SymbolTable::new();

    assert!(matches!(
        parse_script("F R ?", &mut interner),
        Err(RobotError::Script { offset: 4, found: '?' })
    ));
    assert!(matches!(
        parse_script("F(2", &mut interner),
        Err(RobotError::ScriptEnd)
    ));
    assert!(matches!(
        parse_script("F(x)", &mut interner),
        Err(RobotError::Script { offset: 2, found: 'x' })
    ));
}

#[test]
fn test_fractional_step_counts_are_rejected() {
    let mut interner = SymbolTable::new();
    let f_id = interner.intern("F").unwrap();
    let b_id = interner.intern("B").unwrap();
    let r_id = interner.intern("R").unwrap();

    let mut interpreter = CommandInterpreter::new();
    interpreter.populate_standard_symbols(&interner);

    // F(3.9) B(1.5) F(0.25) R(0.5) F(2.0)
    let mut state = SymbiosState::new();
    state.push(f_id, 0.0, &[3.9]).unwrap();
    state.push(b_id, 0.0, &[1.5]).unwrap();
    state.push(f_id, 0.0, &[0.25]).unwrap();
    state.push(r_id, 0.0, &[0.5]).unwrap(); // Turns ignore parameters
    state.push(f_id, 0.0, &[2.0]).unwrap();

    let mut robot = Robot::new();
    let summary = interpreter.queue_state(&mut robot, &state);

    assert_eq!(summary.queued, 2);
    assert_eq!(summary.rejected.len(), 3);
    assert!(matches!(
        summary.rejected[0],
        RobotError::FractionalSpeed { value } if value == 3.9
    ));
    assert!(matches!(
        summary.rejected[1],
        RobotError::FractionalSpeed { value } if value == 1.5
    ));
    assert!(matches!(
        summary.rejected[2],
        RobotError::FractionalSpeed { value } if value == 0.25
    ));

    robot.execute();
    assert_eq!(robot.heading(), Heading::East);
    assert_eq!(robot.position(), IVec2::new(2, 0));
}
