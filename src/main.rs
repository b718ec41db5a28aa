use anyhow::Context;
use clap::Parser;
use grid_rover::{CommandInterpreter, Heading, Robot, RobotConfig, parse_script};
use std::path::PathBuf;
use symbios::SymbolTable;

/// Queue a command script on a grid robot, replay it, and print where it ends up.
#[derive(Parser, Debug)]
#[command(name = "grid-rover", version, about)]
struct Cli {
    /// TOML file with origin, heading and speed limits.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting x coordinate (overrides the config file).
    #[arg(long, allow_hyphen_values = true)]
    x: Option<i32>,

    /// Starting y coordinate (overrides the config file).
    #[arg(long, allow_hyphen_values = true)]
    y: Option<i32>,

    /// Starting heading: NORTH, EAST, SOUTH or WEST. Anything else means NORTH.
    #[arg(long)]
    heading: Option<String>,

    /// How many times to replay the queue.
    #[arg(short, long, default_value_t = 1)]
    repeat: u32,

    /// Commands such as `R F R B2` or `F(3) L`. Runs a short demo when omitted.
    program: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grid_rover=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RobotConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RobotConfig::default(),
    };

    let demo = cli.program.is_empty();
    if demo && cli.config.is_none() {
        config.origin = glam::IVec2::new(2, 5);
        config.heading = Heading::West;
    }
    if let Some(x) = cli.x {
        config.origin.x = x;
    }
    if let Some(y) = cli.y {
        config.origin.y = y;
    }

    if let Some(name) = &cli.heading {
        config.heading = Heading::from_name_or_north(name);
    }
    let mut robot = Robot::with_config(&config);

    let source = if demo {
        "R F R B".to_string()
    } else {
        cli.program.join(" ")
    };

    let mut interner = SymbolTable::new();
    let state = parse_script(&source, &mut interner).context("parsing command script")?;
    let mut interpreter = CommandInterpreter::new();
    interpreter.populate_standard_symbols(&interner);

    let summary = interpreter.queue_state(&mut robot, &state);
    for rejected in &summary.rejected {
        eprintln!("skipped: {rejected}");
    }
    tracing::info!(
        queued = summary.queued,
        ignored = summary.ignored,
        rejected = summary.rejected.len(),
        "command queue ready"
    );

    for _ in 0..cli.repeat {
        robot.execute();
    }

    println!("{}", robot.report_state());
    Ok(())
}
