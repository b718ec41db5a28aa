// tests/config.rs
use glam::IVec2;
use grid_rover::{Heading, Robot, RobotConfig, RobotError, SpeedLimits};

#[test]
fn test_defaults() {
    let config = RobotConfig::default();
    assert_eq!(config.origin, IVec2::ZERO);
    assert_eq!(config.heading, Heading::North);
    assert_eq!(
        config.speed,
        SpeedLimits {
            min: 1,
            max: 3,
            default: 1
        }
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = RobotConfig::from_toml_str(
        r#"
        origin = [2, 5]
        heading = "WEST"
        "#,
    )
    .unwrap();

    assert_eq!(config.origin, IVec2::new(2, 5));
    assert_eq!(config.heading, Heading::West);
    assert_eq!(config.speed, SpeedLimits::default());
}

#[test]
fn test_speed_limits_from_toml_apply_to_queueing() {
    let config = RobotConfig::from_toml_str(
        r#"
        [speed]
        max = 5
        default = 2
        "#,
    )
    .unwrap();

    let mut robot = Robot::with_config(&config);
    robot.queue_forward(5).unwrap();
    robot.queue_forward_default().unwrap();
    assert!(robot.queue_forward(6).unwrap_err().is_invalid_speed());

    robot.execute();
    assert_eq!(robot.position(), IVec2::new(0, 7));
}

#[test]
fn test_invalid_limits_are_rejected() {
    for src in [
        "[speed]\nmin = 0",
        "[speed]\nmin = 3\nmax = 2\ndefault = 3",
        "[speed]\ndefault = 4",
    ] {
        assert!(
            matches!(RobotConfig::from_toml_str(src), Err(RobotError::InvalidConfig(_))),
            "{src:?} should be rejected"
        );
    }
}

#[test]
fn test_malformed_toml() {
    assert!(matches!(
        RobotConfig::from_toml_str("heading = \"UP\""),
        Err(RobotError::ConfigParse(_))
    ));
    assert!(matches!(
        RobotConfig::load("/nonexistent/grid-rover.toml"),
        Err(RobotError::ConfigIo(_))
    ));
}
