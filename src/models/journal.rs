use serde::{Deserialize, Serialize};

/// A single day's entry as delivered by the external journal store.
/// Entries are read-only inputs; the derived karma score is recomputed
/// wherever it is needed and never written back onto the entry.
///
/// Field names follow the store's wire contract (`createdAt` is the one
/// camelCase holdout there).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    /// Calendar date in `YYYY-MM-DD` form, already local to the author.
    pub local_date: String,
    /// Free text describing what the day was spent on.
    pub topics: String,
    /// 1-10 self-rating of how well the day matched the stated goal.
    pub alignment_rating: i64,
    /// 1-10 self-rating of subjective satisfaction with the day.
    pub contentment_rating: i64,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

/// An entry paired with its computed karma, used for the ranked extremes.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub entry: JournalEntry,
    pub karma: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Declining => "declining",
            TrendDirection::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub direction: TrendDirection,
    /// Second-half mean karma vs first-half mean karma, rounded to one
    /// decimal. Always finite.
    pub change_percentage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemporalPatterns {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_day_of_week: Option<String>,
    /// `"weekends"` or `"weekdays"`; present only when both groups have
    /// at least one entry to compare.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_productive_time: Option<String>,
}

/// Descriptive statistics for a set of entries, before trend and temporal
/// analysis are attached.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntryStatistics {
    pub entry_count: i64,
    pub avg_alignment_rating: f64,
    pub avg_contentment_rating: f64,
    pub avg_karma: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_entry: Option<RankedEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_entry: Option<RankedEntry>,
}

/// Full analytics block of an enriched journal.
///
/// Invariant: `avg_karma == (avg_alignment_rating + avg_contentment_rating) / 2`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalAnalytics {
    pub entry_count: i64,
    pub avg_alignment_rating: f64,
    pub avg_contentment_rating: f64,
    pub avg_karma: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_entry: Option<RankedEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_entry: Option<RankedEntry>,
    pub trend_analysis: TrendAnalysis,
    pub temporal_patterns: TemporalPatterns,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Entries plus their derived analytics, computed fresh per analysis
/// request. Never constructed for an empty entry list.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedJournalData {
    pub entries: Vec<JournalEntry>,
    pub date_range: DateRange,
    pub analytics: JournalAnalytics,
}
