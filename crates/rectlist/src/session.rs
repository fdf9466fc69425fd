//! Interactive collection of rectangles and the final report.

use std::io::Write;

use anyhow::Result;
use log::{debug, warn};
use rectlist_geom::Rectangle;

use crate::input::{self, Command, InputError};
use crate::list::RectangleList;
use crate::prompt::Prompter;
use crate::report;
use crate::OutputFormat;

const BANNER: [&str; 3] = [
    "Welcome! Create your own list of rectangles.",
    "You will be asked to provide information about each rectangle in your list by name.",
    "Type the word 'stop' for the rectangle name when you are done.",
];

const FIRST_PROMPT: &str = "Enter the name of the first rectangle: ";
const NEXT_PROMPT: &str = "Enter the name of the next rectangle: ";
const TRY_AGAIN: &str = "Try again! ";
const THANK_YOU: &str = "Thank you! ";

/// Run a whole session: banner, rectangle entry, then the report on `out`.
pub fn run<P: Prompter, W: Write>(prompter: &mut P, out: &mut W, format: OutputFormat) -> Result<()> {
    print_welcome_banner(prompter)?;
    let rectangles = collect(prompter)?;

    match format {
        OutputFormat::Text => report::write_text(out, &rectangles)?,
        OutputFormat::Json => {
            if rectangles.is_empty() {
                prompter.say(report::NO_RECTANGLES)?;
            }
            report::write_json(out, &rectangles)?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn print_welcome_banner<P: Prompter>(prompter: &mut P) -> Result<()> {
    for line in BANNER {
        prompter.say(line)?;
    }
    prompter.say("")
}

/// Ask for rectangles until the user types `stop` or the input runs out.
///
/// A rectangle only joins the list once its name, corner and dimensions have
/// all been accepted; a partially described rectangle at end of input is dropped.
pub fn collect<P: Prompter>(prompter: &mut P) -> Result<RectangleList> {
    let mut rectangles = RectangleList::new();
    let mut greeting = "";

    loop {
        let prompt = if rectangles.is_empty() {
            FIRST_PROMPT
        } else {
            NEXT_PROMPT
        };

        let name = match read_command(prompter, &rectangles, greeting, prompt)? {
            Some(Command::Add(name)) => name,
            Some(Command::Stop) => break,
            None => {
                warn!(
                    "Input ended without 'stop'; keeping {} rectangle(s)",
                    rectangles.len()
                );
                break;
            }
        };

        let Some(rectangle) = read_rectangle(prompter, name)? else {
            warn!("Input ended while describing a rectangle; it was not added");
            break;
        };

        debug!(
            "Added rectangle '{}' at {} ({} x {})",
            rectangle.name(),
            rectangle.bottom_left(),
            rectangle.length(),
            rectangle.height()
        );
        rectangles.push(rectangle)?;

        prompter.say("")?;
        greeting = THANK_YOU;
    }

    Ok(rectangles)
}

/// Read a name command, re-prompting on bad syntax or a name already in use.
fn read_command<P: Prompter>(
    prompter: &mut P,
    rectangles: &RectangleList,
    greeting: &str,
    prompt: &str,
) -> Result<Option<Command>> {
    let mut prefix = greeting;
    loop {
        let Some(line) = prompter.read_line(&format!("{prefix}{prompt}"))? else {
            return Ok(None);
        };

        let parsed = input::parse_command(&line).and_then(|command| {
            if let Command::Add(name) = &command {
                rectangles.check_name(name)?;
            }
            Ok(command)
        });

        match parsed {
            Ok(command) => return Ok(Some(command)),
            Err(e) => {
                debug!("Rejected name input {line:?}: {e:?}");
                prompter.warn(&e.to_string())?;
                prefix = TRY_AGAIN;
            }
        }
    }
}

fn read_rectangle<P: Prompter>(prompter: &mut P, name: String) -> Result<Option<Rectangle>> {
    let coords_prompt = format!("Enter {name}'s bottom left x and y coords: ");
    let Some((x, y)) = read_pair(prompter, &coords_prompt, input::parse_pair)? else {
        return Ok(None);
    };

    let dims_prompt = format!("Enter {name}'s length and height: ");
    let Some((length, height)) = read_pair(prompter, &dims_prompt, input::parse_dimensions)?
    else {
        return Ok(None);
    };

    let mut rectangle = Rectangle::default();
    rectangle.set_name(name);
    rectangle.set_bottom_left(x, y);
    rectangle.set_dimensions(length, height);
    Ok(Some(rectangle))
}

fn read_pair<P, F>(prompter: &mut P, prompt: &str, parse: F) -> Result<Option<(f64, f64)>>
where
    P: Prompter,
    F: Fn(&str) -> Result<(f64, f64), InputError>,
{
    loop {
        let Some(line) = prompter.read_line(prompt)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(pair) => return Ok(Some(pair)),
            Err(e) => {
                debug!("Rejected numeric input {line:?}: {e:?}");
                prompter.warn(&e.to_string())?;
            }
        }
    }
}
