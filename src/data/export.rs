use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Serialize;

use super::model::{Column, MetricTable, SmoothedTable};

/// One CSV row: each raw value followed by its moving average.
#[derive(Serialize)]
struct ExportRow {
    iteration: u64,
    avg_reward: f64,
    avg_reward_ma: Option<f64>,
    avg_return: f64,
    avg_return_ma: Option<f64>,
    avg_value: f64,
    avg_value_ma: Option<f64>,
    avg_episode_length: f64,
    avg_episode_length_ma: Option<f64>,
}

/// `Iteration`, then each metric name followed by `<name> (MA)`.
fn header() -> Vec<String> {
    let mut names = vec![Column::Iteration.name().to_string()];
    for metric in Column::METRICS {
        names.push(metric.name().to_string());
        names.push(format!("{} (MA)", metric.name()));
    }
    names
}

/// Write `table` and its smoothed columns as CSV. The header is always
/// written, even for an empty table. Missing averages are written as
/// empty fields.
pub fn write_csv<W: Write>(writer: W, table: &MetricTable, smoothed: &SmoothedTable) -> Result<()> {
    ensure!(
        table.len() == smoothed.len(),
        "table has {} rows but smoothed table has {}",
        table.len(),
        smoothed.len()
    );

    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    out.write_record(header()).context("writing CSV header")?;
    for (i, rec) in table.records().iter().enumerate() {
        let ma = |col: Column| smoothed.column(col)[i];
        out.serialize(ExportRow {
            iteration: rec.iteration,
            avg_reward: rec.avg_reward,
            avg_reward_ma: ma(Column::AvgReward),
            avg_return: rec.avg_return,
            avg_return_ma: ma(Column::AvgReturn),
            avg_value: rec.avg_value,
            avg_value_ma: ma(Column::AvgValue),
            avg_episode_length: rec.avg_episode_length,
            avg_episode_length_ma: ma(Column::AvgEpisodeLength),
        })
        .with_context(|| format!("writing CSV row {i}"))?;
    }
    out.flush().context("flushing CSV")?;
    Ok(())
}

/// Export to a file at `path`, replacing it if present.
pub fn export_csv(path: &Path, table: &MetricTable, smoothed: &SmoothedTable) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, table, smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse;
    use crate::data::smooth::{WindowSize, smooth};

    fn sample_table() -> MetricTable {
        parse([
            "Iter: 1 | Avg Reward: 1.0 | Avg Return: 2.0 | Avg Value: 0.5 | Avg Episode Length: 10.0",
            "Iter: 2 | Avg Reward: 3.0 | Avg Return: 4.0 | Avg Value: 1.5 | Avg Episode Length: 20.0",
        ])
    }

    #[test]
    fn writes_header_and_blank_missing_cells() {
        let table = sample_table();
        let smoothed = smooth(&table, WindowSize::new(2).unwrap());

        let mut buf = Vec::new();
        write_csv(&mut buf, &table, &smoothed).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Iteration,Avg Reward,Avg Reward (MA),Avg Return,Avg Return (MA),\
             Avg Value,Avg Value (MA),Avg Episode Length,Avg Episode Length (MA)"
        );
        assert_eq!(lines[1], "1,1.0,,2.0,,0.5,,10.0,");
        assert_eq!(lines[2], "2,3.0,2.0,4.0,3.0,1.5,1.0,20.0,15.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_table_writes_header_only() {
        let table = MetricTable::default();
        let smoothed = smooth(&table, WindowSize::default());
        let mut buf = Vec::new();
        write_csv(&mut buf, &table, &smoothed).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].split(',').count(), 9);
        assert!(lines[0].starts_with("Iteration,Avg Reward,Avg Reward (MA),"));
    }

    #[test]
    fn rejects_misaligned_tables() {
        let smoothed = smooth(&MetricTable::default(), WindowSize::default());
        assert!(write_csv(Vec::new(), &sample_table(), &smoothed).is_err());
    }

    #[test]
    fn exports_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = sample_table();
        export_csv(&path, &table, &smooth(&table, WindowSize::default())).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
