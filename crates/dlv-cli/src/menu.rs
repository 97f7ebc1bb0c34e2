//! The interactive text menu.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::warn;

use dlv_core::ParcelId;
use dlv_dispatch::RoutePlanner;
use dlv_query::{QueryFacade, QueryKind, QueryRequest};

const MENU: &str = "\
Welcome to the WGUPS System, enter the number for the operation you wish to choose:
1: view single package details.
2: view all package details.
3: view total miles driven.
4: exit program.";

const TIME_PROMPT: &str = "What time in military time would you like to view HH:MM:SS? ";

/// Run the menu until the user exits or input ends.
///
/// Bad input is reported on `output` and the menu is shown again; only I/O
/// failures end the loop early.
pub fn run<P, R, W>(facade: &mut QueryFacade<P>, input: &mut R, output: &mut W) -> Result<()>
where
    P: RoutePlanner,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt(input, output, "Which number option would you like to choose? ")?
        else {
            return Ok(());
        };

        let kind = match choice.as_str() {
            "1" => {
                let Some(raw) = prompt(input, output, "What package number would you like to look up? ")?
                else {
                    return Ok(());
                };
                match raw.parse::<u32>() {
                    Ok(id) => QueryKind::Single(ParcelId(id)),
                    Err(_) => {
                        writeln!(output, "{raw:?} is not a package number.\n")?;
                        continue;
                    }
                }
            }
            "2" => QueryKind::All,
            "3" => QueryKind::Mileage,
            "4" => return Ok(()),
            other => {
                writeln!(output, "{other:?} is not a menu option.\n")?;
                continue;
            }
        };

        let Some(time) = prompt(input, output, TIME_PROMPT)? else {
            return Ok(());
        };
        match QueryRequest::parse(&time, kind).and_then(|request| facade.query(&request)) {
            Ok(report) => writeln!(output, "{report}\n")?,
            Err(e) => {
                warn!(error = %e, "query rejected");
                writeln!(output, "{e}\n")?;
            }
        }

        match prompt(input, output, "Would you like to continue? 1 to continue, 2 to exit: ")?
            .as_deref()
        {
            Some("2") | None => return Ok(()),
            _ => {}
        }
    }
}

/// Print `text` and read one trimmed line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
