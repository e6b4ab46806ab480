use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::preferences::{
    AdvancedSettings, AnalysisOptionKey, AnalyzerPreferences, ResponseType, VoiceTone,
};
use crate::models::presets::SmartPreset;

/// Single-field preference replacement, the typed equivalent of the UI's
/// `updatePreference(key, value)` calls. Option toggling has its own
/// operation because it edits set membership rather than replacing a
/// field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum PreferenceUpdate {
    VoiceTone(VoiceTone),
    HonestyLevel(u8),
    ResponseType(ResponseType),
    AdvancedSettings(AdvancedSettings),
}

/// Holds the analyzer preferences for one analysis session. There is one
/// logical writer per session and every mutation goes through an explicit
/// call below, so no locking is needed anywhere in the core.
#[derive(Debug, Clone)]
pub struct PreferenceService {
    preferences: AnalyzerPreferences,
}

impl PreferenceService {
    /// Start a session from the default factory; each service owns a
    /// fresh preference value, including its own `selected_options` set.
    pub fn new() -> Self {
        Self {
            preferences: AnalyzerPreferences::default(),
        }
    }

    pub fn preferences(&self) -> &AnalyzerPreferences {
        &self.preferences
    }

    /// Replace exactly one top-level field, preserving the rest.
    pub fn apply_update(&mut self, update: PreferenceUpdate) {
        match update {
            PreferenceUpdate::VoiceTone(tone) => self.preferences.voice_tone = tone,
            PreferenceUpdate::HonestyLevel(level) => self.preferences.honesty_level = level,
            PreferenceUpdate::ResponseType(response) => self.preferences.response_type = response,
            PreferenceUpdate::AdvancedSettings(settings) => {
                self.preferences.advanced_settings = settings
            }
        }
    }

    /// Add the option if absent, remove it if present. Set semantics make
    /// the toggle idempotent pair-wise and duplicates unrepresentable.
    pub fn toggle_option(&mut self, key: AnalysisOptionKey) {
        if !self.preferences.selected_options.remove(&key) {
            self.preferences.selected_options.insert(key);
        }
    }

    /// Wholesale replacement given a function of the previous value.
    pub fn set_preferences<F>(&mut self, update: F)
    where
        F: FnOnce(AnalyzerPreferences) -> AnalyzerPreferences,
    {
        let previous = std::mem::take(&mut self.preferences);
        self.preferences = update(previous);
    }

    /// Apply a preset as a sparse overlay: only the fields the preset
    /// names change, everything else keeps its current value.
    pub fn apply_preset(&mut self, preset: &SmartPreset) {
        info!(target: "app::preferences", preset = preset.name, "applying smart preset");
        let overrides = preset.overrides.clone();
        self.set_preferences(move |current| overrides.overlay(current));
    }
}

impl Default for PreferenceService {
    fn default() -> Self {
        Self::new()
    }
}
