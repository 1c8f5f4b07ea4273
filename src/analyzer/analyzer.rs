use std::collections::{BTreeMap, HashMap};

use crate::transactions::TransactionRecord;
use crate::users::user_stats::UserStats;

pub struct PercentileAnalyzer {
    pub user_stats: HashMap<String, UserStats>,
}

impl PercentileAnalyzer {
    pub fn new() -> Self {
        Self {
            user_stats: HashMap::new(),
        }
    }

    pub fn from_records(records: &[TransactionRecord]) -> Self {
        let mut analyzer = Self::new();
        for record in records {
            analyzer.ingest(record);
        }
        analyzer
    }

    /// Fold one transaction into its user's counters.
    pub fn ingest(&mut self, record: &TransactionRecord) {
        self.user_stats
            .entry(record.user_id.clone())
            .or_insert_with(UserStats::new)
            .observe(record.card_present);
    }

    pub fn user_count(&self) -> usize {
        self.user_stats.len()
    }

    /// Card-present percentages, one per unique user, sorted ascending.
    pub fn percentages(&self) -> Vec<u8> {
        let mut percentages: Vec<u8> = self
            .user_stats
            .values()
            .map(UserStats::percent_card_present)
            .collect();
        percentages.sort_unstable();
        percentages
    }

    /// Nearest-rank percentile table: maps each percentile 1 through 99 to
    /// the percentage value at its rank in the sorted list. Empty input
    /// yields an empty table.
    pub fn percentile_table(&self) -> BTreeMap<u8, u8> {
        let percentages = self.percentages();
        let mut table = BTreeMap::new();
        if percentages.is_empty() {
            return table;
        }
        for percentile in 1..=99 {
            let position = nearest_rank_position(percentile, percentages.len());
            table.insert(percentile, percentages[position - 1]);
        }
        table
    }
}

/// 1-based rank holding the given percentile in a sorted list of `len`
/// observations: round(p/100 * len + 0.5), rounding half away from zero.
/// The rounding can land outside the list for very short inputs, so the
/// rank is clamped into bounds.
fn nearest_rank_position(percentile: u8, len: usize) -> usize {
    let raw = (f64::from(percentile) / 100.0 * len as f64 + 0.5).round() as usize;
    raw.clamp(1, len)
}
