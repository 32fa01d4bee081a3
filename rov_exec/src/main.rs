//! Main rover-side executable entry point.
//!
//! # Architecture
//!
//! The executable is a thin driver around `rov_lib::rover_ctrl::Rover`:
//!
//!     - Initialise the session and logging
//!     - Load the scenario parameters and build the rover
//!     - Main loop:
//!         - Acquire a line of commands, either from the console or a script
//!         - Strip delimiters and pass the commands to the rover
//!         - Report the rover's pose and status
//!
//! # Scripts
//!
//! If a script path is given each non-empty line that doesn't start with `#`
//! is executed as one command string, after which the executable exits.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::path::PathBuf;
use structopt::StructOpt;

// Internal
use rov_lib::{
    loc::Position,
    map::ObstacleDetector,
    rover_ctrl::{Params, Rover, RoverState, RoverStatus},
};
use util::{
    logger::{logger_init, LevelFilter},
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

const PROMPT: &str = "Rover $ ";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Drive a rover around a wrap-around grid.
#[derive(Debug, StructOpt)]
#[structopt(name = "rov_exec")]
struct Opt {
    /// Scenario parameter file, relative paths are looked up in the params
    /// directory.
    #[structopt(short, long, default_value = "rover.toml")]
    params: String,

    /// Minimum level to log at (info, debug or trace).
    #[structopt(short, long, default_value = "info")]
    log_level: LevelFilter,

    /// Print only the rover state, as one line of JSON after each command
    /// string.
    #[structopt(long)]
    json: bool,

    /// Script of command strings to execute instead of prompting.
    #[structopt(parse(from_os_str))]
    script: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opt = Opt::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("rov_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(opt.log_level, &session).wrap_err("Failed to initialise logging")?;

    info!("Mars Rover Executable\n");
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI arguments: {:?}", opt);

    // ---- LOAD PARAMETERS ----

    let params: Params = util::params::load(&opt.params)
        .wrap_err_with(|| format!("Could not load rover params from {:?}", opt.params))?;

    let mut rover = params.build();

    info!("Rover initialised");

    // ---- MAIN LOOP ----

    if !opt.json {
        println!("Hello Mars!\n");
        println!("your {}.", rover.pose());
        println!("Watch out for obstacles{}!\n", obstacle_list(rover.detector().iter()));
    }

    match opt.script {
        Some(ref path) => {
            info!("Loading script from {:?}", path);

            let script = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Could not read script {:?}", path))?;

            for line in script_lines(&script) {
                if !opt.json {
                    println!("{}{}", PROMPT, line);
                }
                drive(&mut rover, line, opt.json)?;
            }

            info!("End of script reached, stopping");
        }
        None => interactive(&mut rover, opt.json)?,
    }

    if !opt.json {
        println!("Exiting...");
    }

    Ok(())
}

/// Prompt for command strings until the user quits.
fn interactive<D: ObstacleDetector>(rover: &mut Rover<D>, json: bool) -> Result<(), Report> {
    let mut rl = DefaultEditor::new().wrap_err("Could not open the console")?;

    loop {
        if !json {
            println!("enter a list of comma separated commands to move around mars:");
        }

        match rl.readline(PROMPT) {
            Ok(line) => {
                rl.add_history_entry(line.as_str()).ok();
                drive(rover, &line, json)?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).wrap_err("Could not read from the console"),
        }
    }

    Ok(())
}

/// Execute one line of commands and print the outcome.
fn drive<D: ObstacleDetector>(rover: &mut Rover<D>, line: &str, json: bool) -> Result<(), Report> {
    let cmds = strip_delimiters(line);

    rover.execute(&cmds);

    if json {
        let state =
            serde_json::to_string(rover.state()).wrap_err("Could not serialize rover state")?;
        println!("{}", state);
    } else {
        println!("{}", report(rover.state()));
    }

    Ok(())
}

/// Describe the outcome of the last command string for the console.
fn report(state: &RoverState) -> String {
    match &state.status {
        RoverStatus::Ok => format!("rover is in position: {}", state.pose),
        RoverStatus::Fail { message, .. } => format!(
            "rover failed to move. rover is in position: {}\nrover status is: {}",
            state.pose, message
        ),
        RoverStatus::Error { message } => format!("rover encountered an error: {}", message),
    }
}

/// Remove the commas and whitespace users put between commands.
fn strip_delimiters(line: &str) -> String {
    line.chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

/// Command string lines in a script, skipping blanks and `#` comments.
fn script_lines(script: &str) -> impl Iterator<Item = &str> {
    script
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
}

/// List obstacles in a stable order, bottom row first.
fn obstacle_list<'a, I>(obstacles: I) -> String
where
    I: IntoIterator<Item = &'a Position>,
{
    let mut obs: Vec<&Position> = obstacles.into_iter().collect();
    if obs.is_empty() {
        return String::new();
    }

    obs.sort_by_key(|p| (p.y, p.x));

    let list = obs
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(" at: {}", list)
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rov_lib::loc::{Facing, Pose};

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("f,f,r, b"), "ffrb");
        assert_eq!(strip_delimiters("  "), "");
        assert_eq!(strip_delimiters("f,x"), "fx");
    }

    #[test]
    fn test_script_lines() {
        let script = "# drive to the crater\nf,f\n\n  r  \n#done\nb";
        let lines: Vec<&str> = script_lines(script).collect();
        assert_eq!(lines, vec!["f,f", "r", "b"]);
    }

    #[test]
    fn test_obstacle_list() {
        assert_eq!(obstacle_list(std::iter::empty::<&Position>()), "");
        assert_eq!(
            obstacle_list(&[Position::new(1, 1), Position::new(4, 0)]),
            " at: (4, 0), (1, 1)"
        );
    }

    #[test]
    fn test_obstacle_list_shows_wrapped_cells() {
        let params: Params = util::params::from_str(
            "obstacles = [{ x = 9, y = -1 }, { x = 1, y = 1 }]\n\n\
             [grid]\nwidth = 8\nheight = 8\n\n\
             [start]\nx = 0\ny = 0\nfacing = \"East\"\n",
        )
        .unwrap();
        let rover = params.build();

        assert_eq!(obstacle_list(rover.detector().iter()), " at: (1, 1), (1, 7)");
    }

    #[test]
    fn test_report() {
        let pose = Pose::new(Position::new(1, 0), Facing::North);

        let ok = RoverState {
            pose,
            status: RoverStatus::Ok,
        };
        assert_eq!(report(&ok), "rover is in position: rover is at (1, 0) facing North");

        let fail = RoverState {
            pose,
            status: RoverStatus::Fail {
                message: String::from("obstacle detected at: (1, 1)"),
                obstacle: Position::new(1, 1),
            },
        };
        assert_eq!(
            report(&fail),
            "rover failed to move. rover is in position: rover is at (1, 0) facing North\n\
             rover status is: obstacle detected at: (1, 1)"
        );

        let error = RoverState {
            pose,
            status: RoverStatus::Error {
                message: String::from("invalid command character: x"),
            },
        };
        assert_eq!(report(&error), "rover encountered an error: invalid command character: x");
    }

    #[test]
    fn test_drive_reports_rover_outcome() {
        let mut rover = Rover::on_default_grid(Position::new(0, 0), Facing::East);

        drive(&mut rover, "f, f, x", false).unwrap();

        assert_eq!(
            report(rover.state()),
            "rover encountered an error: invalid command character: x"
        );
        assert_eq!(rover.position(), Position::new(2, 0));
    }
}
