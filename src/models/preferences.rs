use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoiceTone {
    Professional,
    Friendly,
    Motivational,
    Sage,
    Quirky,
}

impl VoiceTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceTone::Professional => "professional",
            VoiceTone::Friendly => "friendly",
            VoiceTone::Motivational => "motivational",
            VoiceTone::Sage => "sage",
            VoiceTone::Quirky => "quirky",
        }
    }
}

impl Default for VoiceTone {
    fn default() -> Self {
        VoiceTone::Friendly
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseType {
    ActionFocused,
    PatternFocused,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::ActionFocused => "action-focused",
            ResponseType::PatternFocused => "pattern-focused",
        }
    }
}

impl Default for ResponseType {
    fn default() -> Self {
        ResponseType::ActionFocused
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FocusArea {
    Alignment,
    Contentment,
    Both,
}

impl FocusArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusArea::Alignment => "alignment",
            FocusArea::Contentment => "contentment",
            FocusArea::Both => "both",
        }
    }
}

impl Default for FocusArea {
    fn default() -> Self {
        FocusArea::Both
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Plain,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Plain => "plain",
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Markdown
    }
}

/// The eight selectable analysis options. Declaration order is the fixed
/// catalog order (the derived `Ord` relies on it), which governs how
/// option instructions are assembled into the prompt.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisOptionKey {
    KarmaTrends,
    BestWorstDays,
    WeekdayPatterns,
    GoalAlignment,
    ContentmentDrivers,
    BlindSpots,
    ActionableSteps,
    CelebrateWins,
}

impl AnalysisOptionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisOptionKey::KarmaTrends => "karma-trends",
            AnalysisOptionKey::BestWorstDays => "best-worst-days",
            AnalysisOptionKey::WeekdayPatterns => "weekday-patterns",
            AnalysisOptionKey::GoalAlignment => "goal-alignment",
            AnalysisOptionKey::ContentmentDrivers => "contentment-drivers",
            AnalysisOptionKey::BlindSpots => "blind-spots",
            AnalysisOptionKey::ActionableSteps => "actionable-steps",
            AnalysisOptionKey::CelebrateWins => "celebrate-wins",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSettings {
    pub compare_with_previous: bool,
    pub include_karma_analysis: bool,
    pub focus_area: FocusArea,
    pub output_format: OutputFormat,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            compare_with_previous: false,
            include_karma_analysis: true,
            focus_area: FocusArea::Both,
            output_format: OutputFormat::Markdown,
        }
    }
}

/// Stylistic and analytical configuration for one analysis session.
/// Held in transient UI state; never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerPreferences {
    pub voice_tone: VoiceTone,
    /// 1 (gentlest) through 6 (bluntest); validated before composition.
    pub honesty_level: u8,
    pub response_type: ResponseType,
    pub selected_options: BTreeSet<AnalysisOptionKey>,
    pub advanced_settings: AdvancedSettings,
}

/// The `Default` impl is the factory for baseline preferences: each call
/// returns a fresh value, so the `selected_options` set is never shared
/// between sessions.
impl Default for AnalyzerPreferences {
    fn default() -> Self {
        Self {
            voice_tone: VoiceTone::default(),
            honesty_level: 3,
            response_type: ResponseType::default(),
            selected_options: BTreeSet::from([
                AnalysisOptionKey::KarmaTrends,
                AnalysisOptionKey::ActionableSteps,
            ]),
            advanced_settings: AdvancedSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_their_documented_wire_names() {
        assert_eq!(
            serde_json::to_value(VoiceTone::Friendly).expect("tone"),
            "friendly"
        );
        assert_eq!(
            serde_json::to_value(ResponseType::ActionFocused).expect("response type"),
            "action-focused"
        );
        assert_eq!(
            serde_json::to_value(AnalysisOptionKey::BestWorstDays).expect("option key"),
            "best-worst-days"
        );
        assert_eq!(
            serde_json::to_value(FocusArea::Both).expect("focus area"),
            "both"
        );
        assert_eq!(
            serde_json::to_value(OutputFormat::Markdown).expect("output format"),
            "markdown"
        );
    }

    #[test]
    fn as_str_matches_the_serde_rename() {
        assert_eq!(VoiceTone::Quirky.as_str(), "quirky");
        assert_eq!(ResponseType::PatternFocused.as_str(), "pattern-focused");
        assert_eq!(AnalysisOptionKey::KarmaTrends.as_str(), "karma-trends");
        assert_eq!(FocusArea::Contentment.as_str(), "contentment");
        assert_eq!(OutputFormat::Plain.as_str(), "plain");
    }

    #[test]
    fn preferences_round_trip_as_camel_case_json() {
        let preferences = AnalyzerPreferences::default();
        let value = serde_json::to_value(&preferences).expect("serialized preferences");

        assert_eq!(value["voiceTone"], "friendly");
        assert_eq!(value["honestyLevel"], 3);
        assert_eq!(value["responseType"], "action-focused");
        assert_eq!(value["advancedSettings"]["includeKarmaAnalysis"], true);
        // BTreeSet serializes in catalog (declaration) order.
        assert_eq!(
            value["selectedOptions"],
            serde_json::json!(["karma-trends", "actionable-steps"])
        );

        let decoded: AnalyzerPreferences =
            serde_json::from_value(value).expect("deserialized preferences");
        assert_eq!(decoded, preferences);
    }
}
