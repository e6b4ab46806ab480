use serde::Serialize;
use tracing::debug;

use crate::error::AppResult;
use crate::models::journal::EnrichedJournalData;
use crate::models::preferences::{AnalysisOptionKey, AnalyzerPreferences};
use crate::models::profile::UserProfile;
use crate::services::analytics_service::{
    calculate_days_between, format_date_range, format_entries_for_prompt,
};
use crate::services::prompt_templates::{
    analysis_option, focus_area_modifier, honesty_band, honesty_band_modifier, honesty_fragment,
    output_format_instruction, response_type_fragment, tone_fragment, ANALYSIS_OPTION_CATALOG,
};

pub const MIN_HONESTY_LEVEL: u8 = 1;
pub const MAX_HONESTY_LEVEL: u8 = 6;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Structural gate the caller runs before composing. The typed preference
/// surface leaves the honesty range as the only field that can go out of
/// bounds; an empty option selection is allowed and simply yields a
/// prompt without option-specific instructions.
pub fn validate_preferences(preferences: &AnalyzerPreferences) -> PreferenceValidation {
    if !(MIN_HONESTY_LEVEL..=MAX_HONESTY_LEVEL).contains(&preferences.honesty_level) {
        return PreferenceValidation {
            valid: false,
            error: Some(format!(
                "Honesty level must be between {MIN_HONESTY_LEVEL} and {MAX_HONESTY_LEVEL}, got {}",
                preferences.honesty_level
            )),
        };
    }

    PreferenceValidation {
        valid: true,
        error: None,
    }
}

/// Assemble the final analysis prompt from pre-validated preferences,
/// enriched journal data, and the author's profile.
///
/// Pure and deterministic: identical inputs always produce the identical
/// string, and nothing is mutated. Callers guarantee the entry list was
/// non-empty upstream (`enrich_journal_data` returned `Some`) and that
/// `validate_preferences` passed; an out-of-range honesty level that
/// slips through surfaces as a validation error here rather than a panic.
pub fn compose_prompt(
    preferences: &AnalyzerPreferences,
    enriched: &EnrichedJournalData,
    profile: &UserProfile,
) -> AppResult<String> {
    let analytics = &enriched.analytics;
    let mut prompt = String::new();

    // Framing: assistant role, author identity, and goal.
    prompt.push_str("You are a reflective journaling coach reviewing a personal progress journal.\n");
    if let Some(first_name) = non_empty(&profile.first_name) {
        prompt.push_str(&format!(
            "The author's name is {first_name}; address them directly.\n"
        ));
    }
    match non_empty(&profile.goal) {
        Some(goal) => prompt.push_str(&format!(
            "Their stated goal for this period: \"{goal}\".\n"
        )),
        None => prompt.push_str(
            "They are working toward a personal goal they have not written down here.\n",
        ),
    }
    if let Some(journey_start) = non_empty(&profile.start_date) {
        prompt.push_str(&format!(
            "They have been keeping this journal since {journey_start}.\n"
        ));
    }
    prompt.push_str("Follow the instructions below when you respond.\n");

    // Voice: tone, honesty, and response-type instructions.
    prompt.push_str("\n## Voice\n");
    prompt.push_str(tone_fragment(preferences.voice_tone));
    prompt.push('\n');
    prompt.push_str(honesty_fragment(preferences.honesty_level)?);
    prompt.push('\n');
    prompt.push_str(honesty_band_modifier(honesty_band(
        preferences.honesty_level,
    )?));
    prompt.push('\n');
    prompt.push_str(response_type_fragment(preferences.response_type));
    prompt.push('\n');

    // Data block.
    prompt.push_str("\n## Journal data\n");
    let period = format_date_range(&enriched.date_range.start, &enriched.date_range.end)?;
    let days = calculate_days_between(&enriched.date_range.start, &enriched.date_range.end)?;
    prompt.push_str(&format!("Period: {period} ({days} days)\n"));
    prompt.push_str(&format!("Entries logged: {}\n", analytics.entry_count));
    prompt.push_str(&format!(
        "Average alignment rating: {:.2} / 10\n",
        analytics.avg_alignment_rating
    ));
    prompt.push_str(&format!(
        "Average contentment rating: {:.2} / 10\n",
        analytics.avg_contentment_rating
    ));
    prompt.push_str(&format!("Average karma: {:.2} / 10\n", analytics.avg_karma));
    prompt.push_str(&format!(
        "Trend: {} ({:+.1}% second half vs first half)\n",
        analytics.trend_analysis.direction.as_str(),
        analytics.trend_analysis.change_percentage
    ));
    if let Some(best_day) = &analytics.temporal_patterns.best_day_of_week {
        prompt.push_str(&format!("Best day of week: {best_day}\n"));
    }
    if let Some(productive) = &analytics.temporal_patterns.most_productive_time {
        prompt.push_str(&format!("Most productive time: {productive}\n"));
    }
    if let Some(highest) = &analytics.highest_entry {
        prompt.push_str(&format!(
            "Highest day: {} (karma {:.1})\n",
            highest.entry.local_date, highest.karma
        ));
    }
    if let Some(lowest) = &analytics.lowest_entry {
        prompt.push_str(&format!(
            "Lowest day: {} (karma {:.1})\n",
            lowest.entry.local_date, lowest.karma
        ));
    }
    prompt.push_str("\nEntries (most recent first):\n");
    prompt.push_str(&format_entries_for_prompt(&enriched.entries));
    prompt.push('\n');

    // Option instructions, in catalog order regardless of how the
    // selection set was built.
    let selected: Vec<AnalysisOptionKey> = ANALYSIS_OPTION_CATALOG
        .iter()
        .copied()
        .filter(|key| preferences.selected_options.contains(key))
        .collect();
    if !selected.is_empty() {
        prompt.push_str("\n## Analysis to include\n");
        for key in selected {
            prompt.push_str(&format!("- {}\n", analysis_option(key).prompt_fragment));
        }
    }

    // Advanced-setting modifiers.
    prompt.push_str("\n## Additional guidance\n");
    let advanced = &preferences.advanced_settings;
    if advanced.compare_with_previous {
        prompt.push_str(&format!(
            "Compare the second half of the period against the first; the data above \
             puts the change at {:+.1}%.\n",
            analytics.trend_analysis.change_percentage
        ));
    }
    if advanced.include_karma_analysis {
        prompt.push_str(
            "Treat karma, the per-day average of alignment and contentment, as the \
             primary lens: explain what moved it, not just where it moved.\n",
        );
    }
    prompt.push_str(focus_area_modifier(advanced.focus_area));
    prompt.push('\n');

    // Closing instruction on the shape of the response itself.
    prompt.push_str("\n## Response format\n");
    prompt.push_str(output_format_instruction(advanced.output_format));
    prompt.push('\n');
    prompt.push_str("End with a one-paragraph summary the author can read in under a minute.\n");

    debug!(
        target: "app::composer",
        length = prompt.len(),
        tone = preferences.voice_tone.as_str(),
        honesty = preferences.honesty_level,
        "composed analysis prompt"
    );

    Ok(prompt)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
