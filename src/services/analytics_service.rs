use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::journal::{
    DateRange, EnrichedJournalData, EntryStatistics, JournalAnalytics, JournalEntry, RankedEntry,
    TemporalPatterns, TrendAnalysis, TrendDirection,
};

const TREND_IMPROVING_THRESHOLD: f64 = 5.0;
const TREND_DECLINING_THRESHOLD: f64 = -5.0;
const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Derived karma for one entry: the mean of its two ratings.
pub fn entry_karma(entry: &JournalEntry) -> f64 {
    (entry.alignment_rating + entry.contentment_rating) as f64 / 2.0
}

/// Descriptive statistics over a set of entries.
///
/// `avg_karma` is derived from the two rating averages; with a uniform
/// entry count this equals the mean of per-entry karma, so only the
/// derived formulation is kept.
pub fn calculate_analytics(entries: &[JournalEntry]) -> EntryStatistics {
    if entries.is_empty() {
        return EntryStatistics {
            entry_count: 0,
            avg_alignment_rating: 0.0,
            avg_contentment_rating: 0.0,
            avg_karma: 0.0,
            highest_entry: None,
            lowest_entry: None,
        };
    }

    let count = entries.len() as f64;
    let alignment_sum: i64 = entries.iter().map(|entry| entry.alignment_rating).sum();
    let contentment_sum: i64 = entries.iter().map(|entry| entry.contentment_rating).sum();
    let avg_alignment_rating = alignment_sum as f64 / count;
    let avg_contentment_rating = contentment_sum as f64 / count;

    let mut ranked: Vec<RankedEntry> = entries
        .iter()
        .map(|entry| RankedEntry {
            entry: entry.clone(),
            karma: entry_karma(entry),
        })
        .collect();
    // Stable sort: equal-karma entries keep their input order.
    ranked.sort_by(|a, b| b.karma.total_cmp(&a.karma));

    EntryStatistics {
        entry_count: entries.len() as i64,
        avg_alignment_rating,
        avg_contentment_rating,
        avg_karma: (avg_alignment_rating + avg_contentment_rating) / 2.0,
        highest_entry: ranked.first().cloned(),
        lowest_entry: ranked.last().cloned(),
    }
}

/// Karma movement between the two halves of the entry list.
///
/// The split index is `n / 2`: on odd lengths the second half gets the
/// extra entry. Inherited behavior, kept as-is.
pub fn analyze_trends(entries: &[JournalEntry]) -> TrendAnalysis {
    if entries.len() < 2 {
        return TrendAnalysis {
            direction: TrendDirection::Stable,
            change_percentage: 0.0,
        };
    }

    let mid = entries.len() / 2;
    let first_avg = mean_karma(&entries[..mid]);
    let second_avg = mean_karma(&entries[mid..]);

    if first_avg == 0.0 {
        // Degenerate baseline: report no movement rather than a
        // non-finite percentage.
        return TrendAnalysis {
            direction: TrendDirection::Stable,
            change_percentage: 0.0,
        };
    }

    let change = (second_avg - first_avg) / first_avg * 100.0;
    let direction = if change > TREND_IMPROVING_THRESHOLD {
        TrendDirection::Improving
    } else if change < TREND_DECLINING_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    TrendAnalysis {
        direction,
        change_percentage: (change * 10.0).round() / 10.0,
    }
}

/// Day-of-week and weekend/weekday karma patterns.
///
/// Weekday names are fixed to canonical English via `chrono::Weekday`,
/// independent of the host locale. The best day wins on strict `>` while
/// groups are scanned in first-encounter order, so ties resolve to the
/// weekday seen first. The weekend/weekday comparison is only reported
/// when both groups are non-empty.
pub fn identify_temporal_patterns(entries: &[JournalEntry]) -> TemporalPatterns {
    let mut weekday_groups: Vec<(&'static str, Vec<f64>)> = Vec::new();
    let mut weekend_karma: Vec<f64> = Vec::new();
    let mut workday_karma: Vec<f64> = Vec::new();

    for entry in entries {
        let weekday = match NaiveDate::parse_from_str(&entry.local_date, ENTRY_DATE_FORMAT) {
            Ok(date) => date.weekday(),
            Err(_) => {
                debug!(
                    target: "app::analytics",
                    date = %entry.local_date,
                    "skipping entry with unparseable date"
                );
                continue;
            }
        };

        let karma = entry_karma(entry);
        let name = weekday_name(weekday);
        match weekday_groups.iter_mut().find(|(label, _)| *label == name) {
            Some((_, values)) => values.push(karma),
            None => weekday_groups.push((name, vec![karma])),
        }

        if matches!(weekday, Weekday::Sat | Weekday::Sun) {
            weekend_karma.push(karma);
        } else {
            workday_karma.push(karma);
        }
    }

    let mut best_day: Option<(&'static str, f64)> = None;
    for (name, values) in &weekday_groups {
        let avg = mean(values);
        if best_day.map(|(_, best)| avg > best).unwrap_or(true) {
            best_day = Some((name, avg));
        }
    }

    let most_productive_time = if weekend_karma.is_empty() || workday_karma.is_empty() {
        None
    } else if mean(&weekend_karma) > mean(&workday_karma) {
        Some("weekends".to_string())
    } else {
        Some("weekdays".to_string())
    };

    TemporalPatterns {
        best_day_of_week: best_day.map(|(name, _)| name.to_string()),
        most_productive_time,
    }
}

/// Compose the full analytics block for a set of entries. Returns `None`
/// when the list is empty: no statistics are computed on zero entries and
/// callers must short-circuit instead of composing a prompt.
pub fn enrich_journal_data(
    entries: &[JournalEntry],
    start_date: &str,
    end_date: &str,
) -> Option<EnrichedJournalData> {
    if entries.is_empty() {
        debug!(target: "app::analytics", "no entries in range; skipping enrichment");
        return None;
    }

    let statistics = calculate_analytics(entries);
    let trend_analysis = analyze_trends(entries);
    let temporal_patterns = identify_temporal_patterns(entries);

    debug!(
        target: "app::analytics",
        entry_count = statistics.entry_count,
        trend = trend_analysis.direction.as_str(),
        "enriched journal data"
    );

    Some(EnrichedJournalData {
        entries: entries.to_vec(),
        date_range: DateRange {
            start: start_date.to_string(),
            end: end_date.to_string(),
        },
        analytics: JournalAnalytics {
            entry_count: statistics.entry_count,
            avg_alignment_rating: statistics.avg_alignment_rating,
            avg_contentment_rating: statistics.avg_contentment_rating,
            avg_karma: statistics.avg_karma,
            highest_entry: statistics.highest_entry,
            lowest_entry: statistics.lowest_entry,
            trend_analysis,
            temporal_patterns,
        },
    })
}

/// One line per entry for the prompt's data block, most recent date
/// first. This display ordering is independent of the karma ranking in
/// `calculate_analytics`.
pub fn format_entries_for_prompt(entries: &[JournalEntry]) -> String {
    let mut ordered: Vec<&JournalEntry> = entries.iter().collect();
    // Lexicographic comparison is chronological for YYYY-MM-DD dates.
    ordered.sort_by(|a, b| b.local_date.cmp(&a.local_date));

    ordered
        .iter()
        .map(|entry| {
            format!(
                "- {} | karma {:.1} | alignment {}, contentment {} | {}",
                entry.local_date,
                entry_karma(entry),
                entry.alignment_rating,
                entry.contentment_rating,
                entry.topics
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_date_range(start: &str, end: &str) -> AppResult<String> {
    let start = parse_entry_date(start)?;
    let end = parse_entry_date(end)?;
    Ok(format!(
        "{} ~ {}",
        start.format("%b %-d, %Y"),
        end.format("%b %-d, %Y")
    ))
}

/// Days covered by the range, inclusive of both endpoints.
pub fn calculate_days_between(start: &str, end: &str) -> AppResult<i64> {
    let start = parse_entry_date(start)?;
    let end = parse_entry_date(end)?;
    Ok(end.signed_duration_since(start).num_days() + 1)
}

fn parse_entry_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, ENTRY_DATE_FORMAT)
        .map_err(|_| AppError::validation(format!("invalid calendar date: {value}")))
}

/// Canonical English weekday names, independent of system locale.
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn mean_karma(entries: &[JournalEntry]) -> f64 {
    if entries.is_empty() {
        0.0
    } else {
        entries.iter().map(entry_karma).sum::<f64>() / entries.len() as f64
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
