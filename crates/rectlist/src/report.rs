use std::io::Write;

use anyhow::Result;
use rectlist_geom::Summary;
use serde::Serialize;

use crate::list::RectangleList;

pub const NO_RECTANGLES: &str = "You have no rectangles in your list.";

/// One rectangle observed before and after scaling by 3
#[derive(Debug, Clone, Serialize)]
pub struct ScaledEntry<'a> {
    pub name: &'a str,
    pub before: Summary,
    pub after: Summary,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    rectangles: Vec<ScaledEntry<'a>>,
}

/// Summaries of every rectangle in insertion order.
///
/// Scaling happens on a copy between the two observations, so the list
/// itself is left as entered.
pub fn scaled_entries(rectangles: &RectangleList) -> Vec<ScaledEntry<'_>> {
    rectangles
        .iter()
        .map(|rect| ScaledEntry {
            name: rect.name(),
            before: rect.summary(),
            after: rect.scaled_by_3().summary(),
        })
        .collect()
}

pub fn write_text<W: Write>(out: &mut W, rectangles: &RectangleList) -> Result<()> {
    if rectangles.is_empty() {
        writeln!(out, "{NO_RECTANGLES}")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "You have {} rectangle(s) in your list.", rectangles.len())?;
    writeln!(out)?;

    let entries = scaled_entries(rectangles);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Rectangle '{}': {}", entry.name, entry.before)?;
        writeln!(out, "After scale by 3: {}", entry.after)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, rectangles: &RectangleList) -> Result<()> {
    let report = JsonReport {
        rectangles: scaled_entries(rectangles),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
