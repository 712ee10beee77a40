//! `interactive` command: menu-driven prompt loop over stdin.
//!
//! Options: `b` lists buildings, `r` asks for two short names and prints the
//! route between them, `m` shows the menu and `q` quits. Lines starting with
//! `#` are treated as comments and echoed so scripted sessions stay readable.
//! Reaching end of input ends the session like `q`.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use campuspaths_lib::{CampusMap, Error as CampusError, RouteSummary};

use crate::output::render_buildings_text;

const PROMPT: &str = "Enter an option ('m' to see the menu): ";

/// Run the prompt loop against the process's stdin and stdout.
pub fn handle_interactive(map: &CampusMap) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(map, stdin.lock(), &mut stdout.lock()).context("interactive session failed")
}

/// Run the prompt loop until `q` or end of input.
pub fn run_session<R, W>(map: &CampusMap, input: R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    print_menu(out)?;

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            return Ok(());
        };
        let command = line.trim();

        if command.is_empty() {
            continue;
        }
        if command.starts_with('#') {
            writeln!(out, "{command}")?;
            continue;
        }

        debug!(command, "interactive command");
        match command {
            "b" => render_buildings_text(&map.buildings(), out)?,
            "r" => {
                let start = ask(&mut lines, out, "Abbreviated name of starting building: ")?;
                let end = match start {
                    Some(_) => ask(&mut lines, out, "Abbreviated name of ending building: ")?,
                    None => None,
                };
                match (start, end) {
                    (Some(start), Some(end)) => print_route(map, &start, &end, out)?,
                    _ => {
                        writeln!(out)?;
                        return Ok(());
                    }
                }
            }
            "m" => print_menu(out)?,
            "q" => return Ok(()),
            other => writeln!(out, "Unknown option: {other}")?,
        }
        writeln!(out)?;
    }
}

fn ask<I, W>(lines: &mut I, out: &mut W, prompt: &str) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(out, "{prompt}")?;
    out.flush()?;
    lines
        .next()
        .transpose()
        .map(|line| line.map(|l| l.trim().to_string()))
}

fn print_route<W: Write>(
    map: &CampusMap,
    start: &str,
    end: &str,
    out: &mut W,
) -> io::Result<()> {
    let route = map
        .find_route(start, end)
        .and_then(|path| RouteSummary::from_path(map, start, end, &path));

    match route {
        Ok(summary) => out.write_all(summary.render_plain().as_bytes()),
        Err(CampusError::UnknownLocation { name, suggestions }) => {
            writeln!(out, "Unknown building: {name}")?;
            if !suggestions.is_empty() {
                writeln!(out, "Did you mean: {}?", suggestions.join(", "))?;
            }
            Ok(())
        }
        Err(CampusError::RouteNotFound { start, goal }) => {
            writeln!(out, "No walking route from {start} to {goal}.")
        }
        Err(other) => writeln!(out, "Error: {other}"),
    }
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Menu:")?;
    writeln!(out, "\tr to find a route")?;
    writeln!(out, "\tb to see a list of all buildings")?;
    writeln!(out, "\tm to see this menu")?;
    writeln!(out, "\tq to quit")?;
    writeln!(out)
}
