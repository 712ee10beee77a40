//! Output formatting for building listings and routes.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use campuspaths_lib::{Building, RouteSummary};

/// Output style selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Serialize)]
struct BuildingEntry<'a> {
    short_name: &'a str,
    long_name: &'a str,
}

impl OutputFormat {
    /// Write the building listing in this format.
    pub fn render_buildings<W: Write>(
        self,
        buildings: &[&Building],
        out: &mut W,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => render_buildings_text(buildings, out),
            OutputFormat::Json => {
                let entries: Vec<BuildingEntry<'_>> = buildings
                    .iter()
                    .map(|b| BuildingEntry {
                        short_name: &b.short_name,
                        long_name: &b.long_name,
                    })
                    .collect();
                write_json(&entries, out)
            }
        }
    }

    /// Write the route summary in this format.
    pub fn render_route<W: Write>(self, summary: &RouteSummary, out: &mut W) -> io::Result<()> {
        match self {
            OutputFormat::Text => out.write_all(summary.render_plain().as_bytes()),
            OutputFormat::Json => write_json(summary, out),
        }
    }
}

/// Text listing: one `SHORT: Long Name` line per building.
pub fn render_buildings_text<W: Write>(buildings: &[&Building], out: &mut W) -> io::Result<()> {
    if buildings.is_empty() {
        return writeln!(out, "No buildings available.");
    }
    writeln!(out, "Buildings:")?;
    for building in buildings {
        writeln!(out, "\t{}: {}", building.short_name, building.long_name)?;
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campuspaths_lib::Point;

    fn building(short: &str, long: &str) -> Building {
        Building {
            short_name: short.to_string(),
            long_name: long.to_string(),
            location: Point::new(0.0, 0.0),
        }
    }

    #[test]
    fn text_listing_has_one_line_per_building() {
        let kane = building("KNE", "Kane Hall");
        let mary = building("MGH", "Mary Gates Hall");
        let mut out = Vec::new();
        OutputFormat::Text
            .render_buildings(&[&kane, &mary], &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Buildings:\n\tKNE: Kane Hall\n\tMGH: Mary Gates Hall\n");
    }

    #[test]
    fn json_listing_uses_snake_case_keys() {
        let kane = building("KNE", "Kane Hall");
        let mut out = Vec::new();
        OutputFormat::Json.render_buildings(&[&kane], &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["short_name"], "KNE");
        assert_eq!(value[0]["long_name"], "Kane Hall");
    }

    #[test]
    fn empty_listing_is_explained() {
        let mut out = Vec::new();
        OutputFormat::Text.render_buildings(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No buildings available.\n");
    }
}
