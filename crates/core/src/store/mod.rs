//! Line-oriented persistence for epicycle sets.
//!
//! One record per line, in set order, no header and no trailing delimiter:
//!
//! ```text
//! Frequency: <int>, Radius: <float>, Phase: <float>
//! ```
//!
//! Consumers parse by splitting on commas, then on the first colon per
//! field. The format round-trips exactly: parsing a rendered set yields the
//! same triples in the same order.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::{CurveVizError, Epicycle, EpicycleSet, Result};

/// Renders an epicycle set in the text format.
pub fn serialize(set: &EpicycleSet) -> String {
    let mut out = String::new();
    for epicycle in set {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "Frequency: {}, Radius: {}, Phase: {}",
            epicycle.frequency, epicycle.radius, epicycle.phase
        );
    }
    out
}

/// Parses an epicycle set back from its text form.
///
/// The whole call fails on the first unparsable line; skipping records
/// would hand reconstruction a silently incomplete set.
pub fn deserialize(text: &str) -> Result<EpicycleSet> {
    let mut components = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let record = parse_record(line).map_err(|reason| CurveVizError::MalformedRecord {
            line: index + 1,
            reason,
        })?;
        components.push(record);
    }
    Ok(EpicycleSet::from(components))
}

/// Writes the set to `path` in the text format.
pub fn save(set: &EpicycleSet, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, serialize(set))?;
    Ok(())
}

/// Loads a set previously written with [`save`].
pub fn load(path: impl AsRef<Path>) -> Result<EpicycleSet> {
    deserialize(&fs::read_to_string(path)?)
}

fn parse_record(line: &str) -> std::result::Result<Epicycle, String> {
    let mut fields = line.split(',');
    let frequency = parse_field(fields.next(), "Frequency")?;
    let radius = parse_field(fields.next(), "Radius")?;
    let phase = parse_field(fields.next(), "Phase")?;
    if fields.next().is_some() {
        return Err("unexpected trailing field".to_string());
    }
    Ok(Epicycle {
        frequency,
        radius,
        phase,
    })
}

fn parse_field<T: std::str::FromStr>(
    field: Option<&str>,
    label: &str,
) -> std::result::Result<T, String> {
    let field = field.ok_or_else(|| format!("missing {label} field"))?;
    let (_, value) = field
        .split_once(':')
        .ok_or_else(|| format!("{label} field has no `:` separator"))?;
    let value = value.trim();
    value
        .parse()
        .map_err(|_| format!("invalid {label} value `{value}`"))
}
