use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::error;

use crate::models::stats::StandingsEntry;

pub const CSV_HEADER: [&str; 9] = [
    "Position",
    "Driver",
    "Points",
    "Wins",
    "Podiums",
    "Poles",
    "Fastest Laps",
    "DNFs",
    "Average Position",
];

/// Writes the standings as comma separated rows, header first.
///
/// Fields are never quoted: a driver name containing a comma will shift the
/// remaining columns of its row. Line breaks in names become spaces so every
/// entry stays on one line.
pub fn write_csv<W: Write>(standings: &[StandingsEntry], writer: W) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for entry in standings {
        let stats = &entry.stats;
        writer.write_record([
            entry.position.to_string(),
            entry.driver.name.replace(['\r', '\n'], " "),
            stats.total_points.to_string(),
            stats.wins.to_string(),
            stats.podiums.to_string(),
            stats.poles.to_string(),
            stats.fastest_laps.to_string(),
            stats.dnfs.to_string(),
            stats
                .average_position
                .map(|average| format!("{average:.1}"))
                .unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// The standings as CSV text: `standings.len() + 1` lines, no trailing newline.
pub fn to_csv(standings: &[StandingsEntry]) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = write_csv(standings, &mut buffer) {
        error!("Failed to render standings CSV: {err}");
    }
    let mut text = String::from_utf8_lossy(&buffer).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Download name for a championship's standings, e.g. `F2_2024_standings.csv`.
pub fn export_file_name(championship: Option<&str>) -> String {
    let stem: String = championship
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("championship")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{stem}_standings.csv")
}
