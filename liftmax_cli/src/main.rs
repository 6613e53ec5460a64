//! # Liftmax CLI Application
//!
//! Line-oriented front-end for the one-rep-max calculator. Each input line is
//! parsed into a core command, applied to a [`Session`], and the resulting
//! state is printed. Works interactively or with commands piped on stdin:
//!
//! ```text
//! $ printf 'calc 100 8 2\ntoggle epley\n' | liftmax
//! ```
//!
//! Settings are read from the JSON file named by `LIFTMAX_CONFIG`; log output
//! goes to stderr and is filtered by `RUST_LOG`.

mod parse;
mod render;

use std::io::{self, BufRead, Write};

use liftmax_core::errors::CalcError;
use liftmax_core::session::{Outcome, Session};
use liftmax_core::settings::{load_settings_from_env, CalculatorSettings};
use tracing_subscriber::EnvFilter;

use parse::{parse_line, CliAction, HELP};

fn init_logging(settings: &CalculatorSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_error(err: &mut impl Write, error: &CalcError) -> io::Result<()> {
    writeln!(err, "Error: {}", render::error_message(error))?;
    if !error.is_validation() {
        if let Ok(json) = serde_json::to_string_pretty(error) {
            writeln!(err)?;
            writeln!(err, "Error JSON:")?;
            writeln!(err, "{}", json)?;
        }
    }
    Ok(())
}

/// Summary of closed formulas followed by every open table
fn write_results(out: &mut impl Write, err: &mut impl Write, session: &Session) -> io::Result<()> {
    let Some(summary) = render::results(session) else {
        return writeln!(out, "No estimate yet. Try: calc <weight> <reps> [rir]");
    };
    write!(out, "{}", summary)?;
    match session.open_table_views() {
        Ok(tables) => {
            for table in &tables {
                writeln!(out)?;
                write!(out, "{}", render::table(table))?;
            }
        }
        Err(e) => write_error(err, &e)?,
    }
    Ok(())
}

/// Apply one parsed action. Returns false when the session should end.
fn handle(
    session: &mut Session,
    action: CliAction,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match action {
        CliAction::Core(command) => match session.apply(command) {
            Ok(Outcome::Calculated(_)) => write_results(out, err, session)?,
            Ok(Outcome::Toggled(toggle)) => {
                if !toggle.opened {
                    writeln!(out, "Closed {} table", toggle.formula.display_name())?;
                }
                write_results(out, err, session)?;
            }
            Ok(Outcome::FormChanged(form)) => writeln!(out, "{}", render::form(&form))?,
            Err(e) => write_error(err, &e)?,
        },
        CliAction::Show => {
            writeln!(out, "{}", render::form(&session.form))?;
            writeln!(out)?;
            write_results(out, err, session)?;
        }
        CliAction::Json => match serde_json::to_string_pretty(session) {
            Ok(json) => writeln!(out, "{}", json)?,
            Err(e) => write_error(err, &CalcError::from(e))?,
        },
        CliAction::Help => writeln!(out, "{}", HELP)?,
        CliAction::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() {
    let settings = match load_settings_from_env() {
        Ok(settings) => settings,
        Err(e) => {
            let _ = write_error(&mut io::stderr(), &e);
            eprintln!("Falling back to default settings.");
            CalculatorSettings::default()
        }
    };
    init_logging(&settings);
    tracing::info!(unit = %settings.default_unit, movement = %settings.default_movement, "starting session");

    let mut session = Session::with_settings(&settings);

    println!("Liftmax - One-Rep-Max Calculator");
    println!("================================");
    println!("{}", render::form(&session.form));
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();
    let mut err = io::stderr();
    loop {
        print!("> ");
        if out.flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                tracing::error!("failed to read input: {}", e);
                break;
            }
            None => break,
        };

        let keep_going = match parse_line(&line, &session.form) {
            Ok(Some(action)) => handle(&mut session, action, &mut out, &mut err),
            Ok(None) => Ok(true),
            Err(e) => write_error(&mut err, &e).map(|_| true),
        };
        match keep_going {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                tracing::error!("failed to write output: {}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftmax_core::Formula;

    /// Feed lines through parse + handle, returning (stdout, stderr)
    fn run(session: &mut Session, script: &[&str]) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        for line in script {
            match parse_line(line, &session.form) {
                Ok(Some(action)) => {
                    handle(session, action, &mut out, &mut err).unwrap();
                }
                Ok(None) => {}
                Err(e) => write_error(&mut err, &e).unwrap(),
            }
        }
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_calc_then_toggle_renders_table() {
        let mut session = Session::new();
        run(&mut session, &["calc 100 10"]);

        let (out, err) = run(&mut session, &["toggle epley"]);
        assert!(err.is_empty());
        assert!(out.contains("Based on Epley 1RM: 133.3 kg"));
        assert!(!out.contains("  Epley "));
        assert!(out.contains("Brzycki"));
        assert!(session.is_open(Formula::Epley));
    }

    #[test]
    fn test_toggle_close_restores_summary() {
        let mut session = Session::new();
        run(&mut session, &["calc 100 10", "toggle epley"]);

        let (out, _) = run(&mut session, &["toggle epley"]);
        assert!(out.contains("Closed Epley table"));
        assert!(out.contains("  Epley "));
        assert!(!out.contains("RPE-Based Training Table"));
    }

    #[test]
    fn test_form_change_prints_form() {
        let mut session = Session::new();
        let (out, _) = run(&mut session, &["movement bodyweight", "unit lb"]);
        assert!(out.contains("Added Weight"));
        assert!(out.contains("Bodyweight (lb) required"));
    }

    #[test]
    fn test_validation_errors_go_to_stderr() {
        let mut session = Session::new();
        let (out, err) = run(&mut session, &["calc 100 0", "toggle lander"]);
        assert!(out.is_empty());
        assert!(err.contains("Please enter valid reps value."));
        assert!(err.contains("Calculate a 1RM before opening a table."));
        assert!(session.result().is_none());
    }

    #[test]
    fn test_quit_stops() {
        let mut session = Session::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert!(!handle(&mut session, CliAction::Quit, &mut out, &mut err).unwrap());
        assert!(handle(&mut session, CliAction::Help, &mut out, &mut err).unwrap());
    }
}
