use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::preferences::{
    AdvancedSettings, AnalysisOptionKey, AnalyzerPreferences, ResponseType, VoiceTone,
};

/// Sparse overlay of preference fields. `None` leaves the current value
/// untouched; presets never reset fields they do not name.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresetOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<VoiceTone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honesty_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_options: Option<BTreeSet<AnalysisOptionKey>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_settings: Option<AdvancedSettings>,
}

impl PresetOverrides {
    /// Apply this overlay on top of `base`: every named field replaces the
    /// current value, every absent field passes through unchanged.
    pub fn overlay(&self, base: AnalyzerPreferences) -> AnalyzerPreferences {
        let mut next = base;
        if let Some(tone) = self.voice_tone {
            next.voice_tone = tone;
        }
        if let Some(level) = self.honesty_level {
            next.honesty_level = level;
        }
        if let Some(response) = self.response_type {
            next.response_type = response;
        }
        if let Some(options) = &self.selected_options {
            next.selected_options = options.clone();
        }
        if let Some(advanced) = &self.advanced_settings {
            next.advanced_settings = advanced.clone();
        }
        next
    }
}

/// A named one-click configuration bundle from the static catalog.
/// Icon and description feed the preset picker and its toast messaging.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SmartPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub overrides: PresetOverrides,
}
