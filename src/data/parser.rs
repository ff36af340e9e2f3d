use std::sync::LazyLock;

use regex::Regex;

use super::model::{MetricRecord, MetricTable};

// ---------------------------------------------------------------------------
// Line pattern
// ---------------------------------------------------------------------------

/// `Iter: <n> | Avg Reward: <x> | Avg Return: <x> | Avg Value: <x> | Avg Episode Length: <x>`
///
/// Searched anywhere in the line, so timestamps or other prefixes are fine.
/// All five fields must be present, in this order. Digits are ASCII only,
/// so every capture converts.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    const NUM: &str = r"(-?[0-9]+(?:\.[0-9]+)?)";
    let pattern = format!(
        r"Iter:\s+([0-9]+)\s+\|\s+Avg Reward:\s+{NUM}\s+\|\s+Avg Return:\s+{NUM}\s+\|\s+Avg Value:\s+{NUM}\s+\|\s+Avg Episode Length:\s+{NUM}"
    );
    Regex::new(&pattern).expect("log line pattern is valid")
});

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Extract a record from a single line, or `None` if the line does not
/// carry the full set of fields.
pub fn parse_line(line: &str) -> Option<MetricRecord> {
    let caps = LINE_PATTERN.captures(line)?;
    let float = |i: usize| caps[i].parse::<f64>().ok();

    Some(MetricRecord {
        // Digits only, so this fails solely on u64 overflow.
        iteration: caps[1].parse().ok()?,
        avg_reward: float(2)?,
        avg_return: float(3)?,
        avg_value: float(4)?,
        avg_episode_length: float(5)?,
    })
}

/// Parse every matching line into a [`MetricTable`], skipping the rest.
pub fn parse<I, S>(lines: I) -> MetricTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records = lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect();
    MetricTable::from_records(records)
}
