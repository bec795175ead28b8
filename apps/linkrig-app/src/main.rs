//! Linkrig headless simulation CLI.
//!
//! Provides two modes of operation:
//! - `headless`: Step the mechanism for N ticks in a chosen simulation mode
//!   and print periodic status lines plus final statistics
//! - `info`: Print workspace crate versions and the active configuration

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Vector3;

use linkrig_core::LinkrigError;
use linkrig_sim::{HeadlessSimulation, Mechanism, MechanismConfig, SimulationMode};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Headless simulation for a 3-DOF servo-horn mechanism.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Step the mechanism for N ticks and print statistics.
    Headless {
        /// Number of ticks to run.
        #[arg(short = 'n', long, default_value_t = 300)]
        ticks: u32,

        /// Tick duration in seconds.
        #[arg(long, default_value_t = 0.016)]
        dt: f64,

        /// Simulation mode.
        #[arg(short, long, value_enum, default_value = "motion")]
        mode: ModeArg,

        /// Tracked target position, world frame (x y z).
        #[arg(
            long,
            num_args = 3,
            allow_negative_numbers = true,
            default_values_t = [4.0, 1.0, 2.5]
        )]
        target: Vec<f64>,

        /// Optional TOML mechanism configuration.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print crate information.
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Hold the neutral orientation.
    Idle,
    /// Scripted sinusoidal motion.
    Motion,
    /// Track a fixed target position.
    Track,
}

impl From<ModeArg> for SimulationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Idle => Self::Idle,
            ModeArg::Motion => Self::SimulateMotion,
            ModeArg::Track => Self::TrackTarget,
        }
    }
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_headless(
    ticks: u32,
    dt: f64,
    mode: ModeArg,
    target: &[f64],
    config_path: Option<&PathBuf>,
) -> Result<(), LinkrigError> {
    let config = match config_path {
        Some(path) => MechanismConfig::from_toml_file(path)?,
        None => MechanismConfig::default(),
    };

    let mut sim = HeadlessSimulation::new(Mechanism::new(config)?);
    sim.set_mode(mode.into());
    sim.set_target_position(Vector3::new(target[0], target[1], target[2]));

    for tick in 0..ticks {
        sim.step(dt);

        if tick % 25 == 0 {
            let mech = sim.mechanism();
            let o = mech.orientation();
            let angles = mech.joint_angles();
            let yaw_err = mech
                .last_yaw_solve()
                .map_or(f64::NAN, |solve| solve.error);
            println!(
                "  tick {tick:>5}  pry [{:+.3}, {:+.3}, {:+.3}]  servos [{:+.3}, {:+.3}]  yaw {:+.3} (err {:.1e})",
                o.x, o.y, o.z, angles.left, angles.right, angles.yaw, yaw_err,
            );
        }
    }

    let stats = sim.stats();
    println!("\n=== Simulation complete ===");
    println!("  ticks:         {}", stats.ticks);
    println!("  solves:        {}", stats.solves);
    println!("  failed solves: {}", stats.failed_solves);
    if let Some(rate) = stats.failure_rate() {
        println!("  failure rate:  {:.2}%", rate * 100.0);
    }
    if let Some(worst) = stats.worst_yaw_error {
        println!("  worst yaw err: {worst:.2e}");
    }
    if let Some(failure) = sim.mechanism().last_failure() {
        println!("  last failure:  {failure}");
    }

    Ok(())
}

fn run_info() {
    println!("linkrig {}", env!("CARGO_PKG_VERSION"));
    println!("  linkrig-core  errors + vector math utilities");
    println!("  linkrig-ik    servo horn / planar / constrained-plane solvers");
    println!("  linkrig-sim   mechanism model + headless driver");
    println!("\nDefault configuration:\n{:#?}", MechanismConfig::default());
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Headless {
            ticks,
            dt,
            mode,
            target,
            config,
        }) => run_headless(ticks, dt, mode, &target, config.as_ref()),
        Some(Commands::Info) | None => {
            run_info();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
