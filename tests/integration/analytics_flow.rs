use reflecta_core::models::journal::{JournalEntry, TrendDirection};
use reflecta_core::services::analytics_service::{
    calculate_days_between, enrich_journal_data, format_date_range, format_entries_for_prompt,
};

fn entry(local_date: &str, topics: &str, alignment: i64, contentment: i64) -> JournalEntry {
    JournalEntry {
        local_date: local_date.to_string(),
        topics: topics.to_string(),
        alignment_rating: alignment,
        contentment_rating: contentment,
        created_at: None,
    }
}

/// Three weeks of journaling where Mondays consistently score highest and
/// weekends lag: the enrichment pass should surface every derived figure.
#[test]
fn multi_week_journal_enrichment_flow() {
    let entries = vec![
        entry("2024-01-01", "Deep work on the launch plan", 9, 9),
        entry("2024-01-02", "Meetings all day", 5, 5),
        entry("2024-01-03", "Code review backlog", 6, 6),
        entry("2024-01-06", "Errands, barely touched the project", 4, 4),
        entry("2024-01-08", "Shipped the onboarding flow", 8, 8),
        entry("2024-01-09", "Bug triage", 6, 6),
        entry("2024-01-13", "Half-hearted Saturday session", 5, 5),
        entry("2024-01-15", "Closed out the milestone", 9, 9),
    ];

    let enriched =
        enrich_journal_data(&entries, "2024-01-01", "2024-01-21").expect("enriched data");
    let analytics = &enriched.analytics;

    assert_eq!(analytics.entry_count, 8);
    assert_eq!(analytics.avg_alignment_rating, 6.5);
    assert_eq!(analytics.avg_contentment_rating, 6.5);
    assert_eq!(analytics.avg_karma, 6.5);
    assert_eq!(
        analytics.avg_karma,
        (analytics.avg_alignment_rating + analytics.avg_contentment_rating) / 2.0
    );

    // First-half mean karma 6.0 vs second-half 7.0: +16.7%.
    assert_eq!(analytics.trend_analysis.direction, TrendDirection::Improving);
    assert_eq!(analytics.trend_analysis.change_percentage, 16.7);

    assert_eq!(
        analytics.temporal_patterns.best_day_of_week.as_deref(),
        Some("Monday")
    );
    assert_eq!(
        analytics.temporal_patterns.most_productive_time.as_deref(),
        Some("weekdays")
    );

    // Two entries share karma 9.0; the stable ranking keeps the earlier
    // input as the highest.
    let highest = analytics.highest_entry.as_ref().expect("highest entry");
    assert_eq!(highest.entry.local_date, "2024-01-01");
    assert_eq!(highest.karma, 9.0);

    let lowest = analytics.lowest_entry.as_ref().expect("lowest entry");
    assert_eq!(lowest.entry.local_date, "2024-01-06");
    assert_eq!(lowest.karma, 4.0);

    assert_eq!(enriched.date_range.start, "2024-01-01");
    assert_eq!(enriched.date_range.end, "2024-01-21");
}

#[test]
fn empty_range_short_circuits_before_any_statistics() {
    assert!(enrich_journal_data(&[], "2024-01-01", "2024-01-21").is_none());
}

#[test]
fn range_helpers_agree_with_the_requested_window() {
    assert_eq!(
        format_date_range("2024-01-01", "2024-01-21").expect("formatted range"),
        "Jan 1, 2024 ~ Jan 21, 2024"
    );
    assert_eq!(
        calculate_days_between("2024-01-01", "2024-01-21").expect("day count"),
        21
    );
}

#[test]
fn prompt_listing_orders_entries_newest_first_regardless_of_input_order() {
    let entries = vec![
        entry("2024-01-02", "Second day", 5, 5),
        entry("2024-01-15", "Latest day", 9, 9),
        entry("2024-01-01", "First day", 9, 9),
    ];

    let listing = format_entries_for_prompt(&entries);
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("- 2024-01-15"));
    assert!(lines[1].starts_with("- 2024-01-02"));
    assert!(lines[2].starts_with("- 2024-01-01"));
}
