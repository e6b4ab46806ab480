use reflecta_core::models::journal::JournalEntry;
use reflecta_core::models::preferences::{AnalysisOptionKey, ResponseType, VoiceTone};
use reflecta_core::models::profile::UserProfile;
use reflecta_core::services::analytics_service::enrich_journal_data;
use reflecta_core::services::preference_service::{PreferenceService, PreferenceUpdate};
use reflecta_core::services::prompt_composer::{compose_prompt, validate_preferences};
use reflecta_core::services::prompt_templates::smart_presets;

fn entry(local_date: &str, topics: &str, alignment: i64, contentment: i64) -> JournalEntry {
    JournalEntry {
        local_date: local_date.to_string(),
        topics: topics.to_string(),
        alignment_rating: alignment,
        contentment_rating: contentment,
        created_at: None,
    }
}

fn sample_entries() -> Vec<JournalEntry> {
    vec![
        entry("2024-02-05", "Drafted the pitch deck", 7, 6),
        entry("2024-02-06", "Investor calls", 8, 5),
        entry("2024-02-07", "Rewrote the financial model", 6, 4),
        entry("2024-02-10", "Took the day off", 2, 9),
    ]
}

fn sample_profile() -> UserProfile {
    UserProfile {
        goal: Some("Raise the seed round".to_string()),
        start_date: Some("2024-01-15".to_string()),
        end_date: Some("2024-03-15".to_string()),
        first_name: Some("Noa".to_string()),
    }
}

/// The full session flow: defaults, a manual tweak, a preset, validation,
/// then composition.
#[test]
fn preferences_to_prompt_session_flow() {
    let mut session = PreferenceService::new();
    session.toggle_option(AnalysisOptionKey::BlindSpots);
    session.apply_update(PreferenceUpdate::VoiceTone(VoiceTone::Sage));

    let presets = smart_presets();
    let tough_love = presets
        .iter()
        .find(|preset| preset.name == "Tough Love")
        .expect("tough love preset");
    session.apply_preset(tough_love);

    let preferences = session.preferences();
    assert_eq!(preferences.voice_tone, VoiceTone::Motivational);
    assert_eq!(preferences.honesty_level, 6);
    assert_eq!(preferences.response_type, ResponseType::ActionFocused);

    let validation = validate_preferences(preferences);
    assert!(validation.valid);

    let entries = sample_entries();
    let enriched =
        enrich_journal_data(&entries, "2024-02-05", "2024-02-11").expect("enriched data");
    let prompt =
        compose_prompt(preferences, &enriched, &sample_profile()).expect("composed prompt");

    // Preset-driven voice.
    assert!(prompt.contains("Write with energy and forward momentum."));
    assert!(prompt.contains("Hold nothing back."));
    assert!(prompt.contains("Do not soften the message to spare feelings."));

    // Option instructions follow catalog order: goal alignment before
    // blind spots before actionable steps.
    let goal_at = prompt
        .find("Assess how closely the logged work tracked")
        .expect("goal fragment");
    let blind_at = prompt
        .find("Point out patterns the author is probably not seeing")
        .expect("blind-spot fragment");
    let steps_at = prompt
        .find("Finish with concrete, specific steps")
        .expect("steps fragment");
    assert!(goal_at < blind_at);
    assert!(blind_at < steps_at);

    // Profile and data block made it in.
    assert!(prompt.contains("The author's name is Noa"));
    assert!(prompt.contains("\"Raise the seed round\""));
    assert!(prompt.contains("Period: Feb 5, 2024 ~ Feb 11, 2024 (7 days)"));
    assert!(prompt.contains("Entries logged: 4"));
}

#[test]
fn prompt_sections_appear_in_assembly_order() {
    let session = PreferenceService::new();
    let entries = sample_entries();
    let enriched =
        enrich_journal_data(&entries, "2024-02-05", "2024-02-11").expect("enriched data");
    let prompt = compose_prompt(session.preferences(), &enriched, &sample_profile())
        .expect("composed prompt");

    let framing_at = prompt
        .find("You are a reflective journaling coach")
        .expect("framing");
    let voice_at = prompt.find("## Voice").expect("voice section");
    let data_at = prompt.find("## Journal data").expect("data section");
    let options_at = prompt
        .find("## Analysis to include")
        .expect("options section");
    let guidance_at = prompt
        .find("## Additional guidance")
        .expect("guidance section");
    let format_at = prompt.find("## Response format").expect("format section");

    assert!(framing_at < voice_at);
    assert!(voice_at < data_at);
    assert!(data_at < options_at);
    assert!(options_at < guidance_at);
    assert!(guidance_at < format_at);
}

#[test]
fn composition_is_deterministic_across_fresh_sessions() {
    let entries = sample_entries();
    let enriched =
        enrich_journal_data(&entries, "2024-02-05", "2024-02-11").expect("enriched data");
    let profile = sample_profile();

    let first_session = PreferenceService::new();
    let second_session = PreferenceService::new();

    let first =
        compose_prompt(first_session.preferences(), &enriched, &profile).expect("first prompt");
    let second =
        compose_prompt(second_session.preferences(), &enriched, &profile).expect("second prompt");

    assert_eq!(first, second);
}

#[test]
fn invalid_honesty_level_blocks_prompt_generation() {
    let mut session = PreferenceService::new();
    session.apply_update(PreferenceUpdate::HonestyLevel(0));

    let validation = validate_preferences(session.preferences());
    assert!(!validation.valid);
    let message = validation.error.expect("validation error");
    assert!(message.contains("between 1 and 6"));
}

#[test]
fn no_entries_means_no_enrichment_and_no_prompt() {
    // The caller contract: a `None` from enrichment short-circuits the
    // whole pipeline before the composer is ever reached.
    let enriched = enrich_journal_data(&[], "2024-02-05", "2024-02-11");
    assert!(enriched.is_none());
}
