use std::fmt;

use super::smooth::WindowSize;

// ---------------------------------------------------------------------------
// Column – the fixed schema of a training log
// ---------------------------------------------------------------------------

/// One of the five named columns extracted from every matching log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Iteration,
    AvgReward,
    AvgReturn,
    AvgValue,
    AvgEpisodeLength,
}

impl Column {
    /// All columns in table order.
    pub const ALL: [Column; 5] = [
        Column::Iteration,
        Column::AvgReward,
        Column::AvgReturn,
        Column::AvgValue,
        Column::AvgEpisodeLength,
    ];

    /// The charted metrics, in display order.
    pub const METRICS: [Column; 4] = [
        Column::AvgReward,
        Column::AvgReturn,
        Column::AvgValue,
        Column::AvgEpisodeLength,
    ];

    /// Column name as it appears in the log and in exported headers.
    pub fn name(self) -> &'static str {
        match self {
            Column::Iteration => "Iteration",
            Column::AvgReward => "Avg Reward",
            Column::AvgReturn => "Avg Return",
            Column::AvgValue => "Avg Value",
            Column::AvgEpisodeLength => "Avg Episode Length",
        }
    }

    /// Human-readable section heading.
    pub fn heading(self) -> &'static str {
        match self {
            Column::Iteration => "Iteration",
            Column::AvgReward => "Average Reward",
            Column::AvgReturn => "Average Return",
            Column::AvgValue => "Average Value",
            Column::AvgEpisodeLength => "Average Episode Length",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// MetricRecord – one parsed log line
// ---------------------------------------------------------------------------

/// A single training iteration as reported by one log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRecord {
    pub iteration: u64,
    pub avg_reward: f64,
    pub avg_return: f64,
    pub avg_value: f64,
    pub avg_episode_length: f64,
}

impl MetricRecord {
    /// Numeric value of `column` for this record.
    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::Iteration => self.iteration as f64,
            Column::AvgReward => self.avg_reward,
            Column::AvgReturn => self.avg_return,
            Column::AvgValue => self.avg_value,
            Column::AvgEpisodeLength => self.avg_episode_length,
        }
    }
}

// ---------------------------------------------------------------------------
// MetricTable – records in input order
// ---------------------------------------------------------------------------

/// Parsed records, kept in the order they appeared in the log.
///
/// Duplicate or out-of-order iteration numbers are kept as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricTable {
    records: Vec<MetricRecord>,
}

impl MetricTable {
    pub fn from_records(records: Vec<MetricRecord>) -> Self {
        MetricTable { records }
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    /// Column names, present even when the table has no rows.
    pub fn column_names(&self) -> [&'static str; 5] {
        Column::ALL.map(Column::name)
    }

    /// All values of one column, row-aligned.
    pub fn column(&self, column: Column) -> Vec<f64> {
        self.records.iter().map(|r| r.value(column)).collect()
    }

    pub fn iterations(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.iteration).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SmoothedTable – rolling means of every column
// ---------------------------------------------------------------------------

/// Row-aligned moving averages; `None` where the window is not yet full.
pub type SmoothedColumn = Vec<Option<f64>>;

/// Every column of a [`MetricTable`] smoothed with the same window.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedTable {
    pub window: WindowSize,
    columns: [SmoothedColumn; 5],
}

impl SmoothedTable {
    pub(crate) fn new(window: WindowSize, columns: [SmoothedColumn; 5]) -> Self {
        SmoothedTable { window, columns }
    }

    pub fn column(&self, column: Column) -> &SmoothedColumn {
        &self.columns[column as usize]
    }

    pub fn len(&self) -> usize {
        self.columns[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(iteration: u64, reward: f64) -> MetricRecord {
        MetricRecord {
            iteration,
            avg_reward: reward,
            avg_return: reward * 2.0,
            avg_value: 0.1,
            avg_episode_length: 100.0,
        }
    }

    #[test]
    fn display_uses_column_name() {
        assert_eq!(Column::AvgEpisodeLength.to_string(), "Avg Episode Length");
        assert_eq!(format!("{}", Column::Iteration), "Iteration");
    }

    #[test]
    fn metric_headings_in_display_order() {
        let headings: Vec<_> = Column::METRICS.iter().map(|c| c.heading()).collect();
        assert_eq!(
            headings,
            [
                "Average Reward",
                "Average Return",
                "Average Value",
                "Average Episode Length"
            ]
        );
    }

    #[test]
    fn empty_table_still_has_all_columns() {
        let table = MetricTable::default();
        assert!(table.is_empty());
        assert_eq!(
            table.column_names(),
            ["Iteration", "Avg Reward", "Avg Return", "Avg Value", "Avg Episode Length"]
        );
        for col in Column::ALL {
            assert!(table.column(col).is_empty());
        }
    }

    #[test]
    fn columns_follow_record_order() {
        let table = MetricTable::from_records(vec![record(7, 0.5), record(3, -1.0)]);
        assert_eq!(table.iterations(), vec![7, 3]);
        assert_eq!(table.column(Column::Iteration), vec![7.0, 3.0]);
        assert_eq!(table.column(Column::AvgReturn), vec![1.0, -2.0]);
    }
}
