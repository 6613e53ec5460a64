//! Command-line parsing for the interactive prompt.
//!
//! Each input line becomes one [`CliAction`]. Calculator actions are wrapped
//! core [`Command`]s; the rest only affect what the CLI prints.

use liftmax_core::errors::{CalcError, CalcResult};
use liftmax_core::session::{Command, FormState};
use liftmax_core::{Formula, LiftInput, MovementType, WeightUnit};

#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    Core(Command),
    Show,
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  calc <weight> <reps> [rir] [bw=<bodyweight>]   estimate 1RM (rir defaults to 0)
  toggle <epley|brzycki|lander|average>          open/close an RPE table
  unit <kg|lb>                                   select the weight unit
  movement <standard|bodyweight>                 select the movement type
  show                                           print results and open tables
  json                                           print the session as JSON
  help                                           show this help
  quit                                           exit";

/// Parse one line. Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str, form: &FormState) -> CalcResult<Option<CliAction>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let action = match verb.to_ascii_lowercase().as_str() {
        "calc" | "c" => CliAction::Core(Command::Submit(parse_lift(&args, form)?)),
        "toggle" | "t" => {
            let formula: Formula = single_arg("formula", &args)?.parse()?;
            CliAction::Core(Command::ToggleTable(formula))
        }
        "unit" | "u" => {
            let unit: WeightUnit = single_arg("unit", &args)?.parse()?;
            CliAction::Core(Command::ChangeUnit(unit))
        }
        "movement" | "m" => {
            let movement: MovementType = single_arg("movement", &args)?.parse()?;
            CliAction::Core(Command::ChangeMovementType(movement))
        }
        "show" | "s" => CliAction::Show,
        "json" => CliAction::Json,
        "help" | "h" | "?" => CliAction::Help,
        "quit" | "q" | "exit" => CliAction::Quit,
        other => {
            return Err(CalcError::invalid_input("command", other, "Unknown command, try 'help'"));
        }
    };
    Ok(Some(action))
}

fn single_arg<'a>(field: &str, args: &[&'a str]) -> CalcResult<&'a str> {
    match args {
        [value] => Ok(*value),
        [] => Err(CalcError::invalid_input(field, "", "Missing value")),
        _ => Err(CalcError::invalid_input(field, args.join(" "), "Expected a single value")),
    }
}

/// Build a [`LiftInput`] from `calc` arguments using the selected form options.
///
/// Reps keep only their leading integer ("5.5" is 5); missing or non-numeric
/// reps become 0 and are reported as invalid reps. A missing bodyweight is left at 0 so the core reports it for bodyweight movements.
fn parse_lift(args: &[&str], form: &FormState) -> CalcResult<LiftInput> {
    let mut positional = Vec::new();
    let mut bodyweight = 0.0;

    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) if key.eq_ignore_ascii_case("bw") => {
                bodyweight = parse_number("bodyweight", value)?;
            }
            Some((key, _)) => {
                return Err(CalcError::invalid_input(key, *arg, "Unknown option"));
            }
            None => positional.push(*arg),
        }
    }

    let added_weight = match positional.first() {
        Some(w) => parse_number("weight", w)?,
        None => 0.0,
    };
    let reps_performed = positional.get(1).map_or(0, |r| leading_int(r));
    let rir = match positional.get(2) {
        Some(r) => parse_number("rir", r)?,
        None => 0.0,
    };
    if positional.len() > 3 {
        return Err(CalcError::invalid_input(
            "calc",
            positional[3..].join(" "),
            "Too many values",
        ));
    }

    Ok(LiftInput {
        added_weight,
        bodyweight,
        reps_performed,
        rir,
        unit: form.unit,
        movement_type: form.movement_type,
    })
}

/// Optional sign followed by leading digits; anything after them is dropped.
fn leading_int(value: &str) -> i64 {
    let value = value.trim();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(0);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn parse_number(field: &str, value: &str) -> CalcResult<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Ok(_) => Err(CalcError::invalid_input(field, value, "Must be a non-negative number")),
        Err(_) => Err(CalcError::invalid_input(field, value, "Not a number")),
    }
}
