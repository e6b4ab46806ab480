use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::preferences::{
    AdvancedSettings, AnalysisOptionKey, FocusArea, OutputFormat, ResponseType, VoiceTone,
};
use crate::models::presets::{PresetOverrides, SmartPreset};

/// Fixed catalog order for analysis options. Prompt assembly always walks
/// this array, never the selection set's own iteration order.
pub const ANALYSIS_OPTION_CATALOG: [AnalysisOptionKey; 8] = [
    AnalysisOptionKey::KarmaTrends,
    AnalysisOptionKey::BestWorstDays,
    AnalysisOptionKey::WeekdayPatterns,
    AnalysisOptionKey::GoalAlignment,
    AnalysisOptionKey::ContentmentDrivers,
    AnalysisOptionKey::BlindSpots,
    AnalysisOptionKey::ActionableSteps,
    AnalysisOptionKey::CelebrateWins,
];

/// Picker metadata for a voice tone.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToneProfile {
    pub emoji: &'static str,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub preview: &'static str,
}

pub fn tone_profile(tone: VoiceTone) -> ToneProfile {
    match tone {
        VoiceTone::Professional => ToneProfile {
            emoji: "💼",
            label: "Professional",
            subtitle: "Structured and precise",
            preview: "Your completion pattern this period indicates...",
        },
        VoiceTone::Friendly => ToneProfile {
            emoji: "😊",
            label: "Friendly",
            subtitle: "Warm and conversational",
            preview: "Okay, looking at your week, here's what stands out...",
        },
        VoiceTone::Motivational => ToneProfile {
            emoji: "🚀",
            label: "Motivational",
            subtitle: "High energy, action first",
            preview: "You're closer than you think. Look at this trend...",
        },
        VoiceTone::Sage => ToneProfile {
            emoji: "🧘",
            label: "Sage",
            subtitle: "Calm and reflective",
            preview: "Notice how the quieter days carried the higher scores...",
        },
        VoiceTone::Quirky => ToneProfile {
            emoji: "🎭",
            label: "Quirky",
            subtitle: "Playful with a point",
            preview: "Your karma chart is doing a little dance. Let's decode it...",
        },
    }
}

/// Prompt-injection text for a voice tone.
pub fn tone_fragment(tone: VoiceTone) -> &'static str {
    match tone {
        VoiceTone::Professional => {
            "Maintain a professional, composed voice. Write like a seasoned coach \
             delivering a structured review: precise language, no slang, conclusions \
             stated plainly."
        }
        VoiceTone::Friendly => {
            "Keep the voice warm and conversational, like a supportive friend who \
             knows this journal well. Contractions are fine; jargon is not."
        }
        VoiceTone::Motivational => {
            "Write with energy and forward momentum. Frame setbacks as setup for the \
             next win and close each point with a push toward action."
        }
        VoiceTone::Sage => {
            "Adopt a calm, reflective voice. Favor perspective over prescription and \
             connect today's entries to the longer arc of the journal."
        }
        VoiceTone::Quirky => {
            "Be playful and a little unexpected. Light humor and odd-but-apt \
             metaphors are welcome, as long as the insight underneath stays sharp."
        }
    }
}

/// Slider metadata for an honesty level.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HonestyProfile {
    pub emoji: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Honesty bands: 1-2 gentle, 3-4 moderate, 5-6 direct. The band drives
/// both the slider accent color and how hard the composed instructions
/// push.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HonestyBand {
    Gentle,
    Moderate,
    Direct,
}

impl HonestyBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            HonestyBand::Gentle => "gentle",
            HonestyBand::Moderate => "moderate",
            HonestyBand::Direct => "direct",
        }
    }

    /// Accent color for the honesty slider.
    pub fn color(&self) -> &'static str {
        match self {
            HonestyBand::Gentle => "green",
            HonestyBand::Moderate => "yellow",
            HonestyBand::Direct => "red",
        }
    }
}

pub fn honesty_band(level: u8) -> AppResult<HonestyBand> {
    match level {
        1 | 2 => Ok(HonestyBand::Gentle),
        3 | 4 => Ok(HonestyBand::Moderate),
        5 | 6 => Ok(HonestyBand::Direct),
        _ => Err(AppError::validation(format!(
            "honesty level {level} outside 1-6"
        ))),
    }
}

pub fn honesty_profile(level: u8) -> AppResult<HonestyProfile> {
    match level {
        1 => Ok(HonestyProfile {
            emoji: "🌱",
            label: "Very gentle",
            description: "Encouragement first, one soft growth note at most",
        }),
        2 => Ok(HonestyProfile {
            emoji: "🤝",
            label: "Encouraging",
            description: "Progress celebrated, critique cushioned with context",
        }),
        3 => Ok(HonestyProfile {
            emoji: "⚖️",
            label: "Balanced",
            description: "Wins and misses named in equal measure",
        }),
        4 => Ok(HonestyProfile {
            emoji: "🔍",
            label: "Candid",
            description: "Direct about stalling patterns, wins still acknowledged",
        }),
        5 => Ok(HonestyProfile {
            emoji: "🔥",
            label: "Blunt",
            description: "No cushioning; avoidance called out by name",
        }),
        6 => Ok(HonestyProfile {
            emoji: "⚡",
            label: "No filter",
            description: "The unvarnished read, nothing left unsaid",
        }),
        _ => Err(AppError::validation(format!(
            "honesty level {level} outside 1-6"
        ))),
    }
}

/// Prompt-injection text for an honesty level.
pub fn honesty_fragment(level: u8) -> AppResult<&'static str> {
    match level {
        1 => Ok(
            "Be exceptionally gentle. Lead with what is going well and raise at most \
             one growth area, framed as an invitation.",
        ),
        2 => Ok(
            "Stay encouraging. Celebrate progress first and soften critical \
             observations with context.",
        ),
        3 => Ok(
            "Balance encouragement with candor. Name what is working and what is \
             not, in roughly equal measure.",
        ),
        4 => Ok(
            "Lean candid. Be direct about patterns that are holding progress back, \
             while acknowledging genuine wins.",
        ),
        5 => Ok(
            "Be blunt. Call out avoidance, rationalization, and slipping standards \
             directly; skip the cushioning.",
        ),
        6 => Ok(
            "Hold nothing back. Deliver the unvarnished read of this journal, \
             including the observations a polite coach would leave unsaid.",
        ),
        _ => Err(AppError::validation(format!(
            "honesty level {level} outside 1-6"
        ))),
    }
}

/// Instruction-strength line keyed off the honesty band.
pub fn honesty_band_modifier(band: HonestyBand) -> &'static str {
    match band {
        HonestyBand::Gentle => "Never shame the author for a low-scoring day.",
        HonestyBand::Moderate => "Be honest about weak stretches without dwelling on them.",
        HonestyBand::Direct => "Do not soften the message to spare feelings.",
    }
}

pub fn response_type_fragment(response: ResponseType) -> &'static str {
    match response {
        ResponseType::ActionFocused => {
            "Prioritize concrete next steps: end with a short list of specific \
             actions for the coming days, each tied to evidence from the entries."
        }
        ResponseType::PatternFocused => {
            "Prioritize pattern recognition: surface recurring themes, correlations, \
             and cycles across the entries before offering any advice."
        }
    }
}

pub fn focus_area_modifier(focus: FocusArea) -> &'static str {
    match focus {
        FocusArea::Alignment => {
            "Weight your analysis toward the alignment ratings: how well each day's \
             work matched the goal."
        }
        FocusArea::Contentment => {
            "Weight your analysis toward the contentment ratings: how each day \
             actually felt."
        }
        FocusArea::Both => "Give alignment and contentment equal weight throughout.",
    }
}

pub fn output_format_instruction(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Markdown => {
            "Format your response in Markdown: short section headers, bullet lists \
             for observations, bold for the single most important takeaway."
        }
        OutputFormat::Plain => {
            "Respond in plain text only: no markdown syntax, no headers, just clear \
             paragraphs."
        }
    }
}

/// A selectable analysis option with its picker metadata and the
/// instruction inserted into the prompt when selected.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOption {
    pub key: AnalysisOptionKey,
    pub label: &'static str,
    pub description: &'static str,
    pub prompt_fragment: &'static str,
}

pub fn analysis_option(key: AnalysisOptionKey) -> AnalysisOption {
    match key {
        AnalysisOptionKey::KarmaTrends => AnalysisOption {
            key,
            label: "Karma trends",
            description: "How the combined karma score moved across the period",
            prompt_fragment: "Describe how karma moved across the period, naming the \
                              stretches that drove the overall trend.",
        },
        AnalysisOptionKey::BestWorstDays => AnalysisOption {
            key,
            label: "Best & worst days",
            description: "Spotlight the strongest and weakest entries",
            prompt_fragment: "Contrast the highest-karma and lowest-karma days and \
                              what distinguished them, quoting the topics logged on \
                              each.",
        },
        AnalysisOptionKey::WeekdayPatterns => AnalysisOption {
            key,
            label: "Weekday patterns",
            description: "Day-of-week and weekend/weekday rhythms",
            prompt_fragment: "Examine the day-of-week rhythm: which days consistently \
                              score well, and what the weekend/weekday split suggests \
                              about routine.",
        },
        AnalysisOptionKey::GoalAlignment => AnalysisOption {
            key,
            label: "Goal alignment",
            description: "How daily work tracked the stated goal",
            prompt_fragment: "Assess how closely the logged work tracked the stated \
                              goal, using the alignment ratings as the evidence.",
        },
        AnalysisOptionKey::ContentmentDrivers => AnalysisOption {
            key,
            label: "Contentment drivers",
            description: "What correlated with feeling satisfied",
            prompt_fragment: "Identify what the high-contentment days had in common \
                              and whether contentment moved with or against \
                              alignment.",
        },
        AnalysisOptionKey::BlindSpots => AnalysisOption {
            key,
            label: "Blind spots",
            description: "Patterns the author may not see",
            prompt_fragment: "Point out patterns the author is probably not seeing, \
                              especially gaps between what they write and what they \
                              rate.",
        },
        AnalysisOptionKey::ActionableSteps => AnalysisOption {
            key,
            label: "Actionable steps",
            description: "Concrete recommendations for the coming week",
            prompt_fragment: "Finish with concrete, specific steps for the coming \
                              week, each anchored to something observed in the \
                              entries.",
        },
        AnalysisOptionKey::CelebrateWins => AnalysisOption {
            key,
            label: "Celebrate wins",
            description: "Acknowledge genuine progress explicitly",
            prompt_fragment: "Acknowledge the genuine wins in this period explicitly, \
                              so progress is registered and not just glossed.",
        },
    }
}

/// The static smart-preset catalog: four named bundles of sparse
/// preference overrides.
pub fn smart_presets() -> [SmartPreset; 4] {
    [
        SmartPreset {
            name: "Gentle Reflection",
            description: "A soft, reflective read for low-energy days",
            icon: "🌙",
            overrides: PresetOverrides {
                voice_tone: Some(VoiceTone::Sage),
                honesty_level: Some(1),
                response_type: Some(ResponseType::PatternFocused),
                selected_options: Some(BTreeSet::from([
                    AnalysisOptionKey::ContentmentDrivers,
                    AnalysisOptionKey::CelebrateWins,
                ])),
                advanced_settings: None,
            },
        },
        SmartPreset {
            name: "Tough Love",
            description: "Direct, no-excuses accountability check",
            icon: "💪",
            overrides: PresetOverrides {
                voice_tone: Some(VoiceTone::Motivational),
                honesty_level: Some(6),
                response_type: Some(ResponseType::ActionFocused),
                selected_options: Some(BTreeSet::from([
                    AnalysisOptionKey::GoalAlignment,
                    AnalysisOptionKey::BlindSpots,
                    AnalysisOptionKey::ActionableSteps,
                ])),
                advanced_settings: None,
            },
        },
        SmartPreset {
            name: "Deep Dive",
            description: "Everything the analyzer can see, in full detail",
            icon: "🔬",
            overrides: PresetOverrides {
                voice_tone: Some(VoiceTone::Professional),
                honesty_level: Some(4),
                response_type: Some(ResponseType::PatternFocused),
                selected_options: Some(BTreeSet::from(ANALYSIS_OPTION_CATALOG)),
                advanced_settings: Some(AdvancedSettings {
                    compare_with_previous: true,
                    include_karma_analysis: true,
                    focus_area: FocusArea::Both,
                    output_format: OutputFormat::Markdown,
                }),
            },
        },
        SmartPreset {
            name: "Quick Check-in",
            description: "A fast pulse check on the last few days",
            icon: "⚡",
            overrides: PresetOverrides {
                voice_tone: Some(VoiceTone::Friendly),
                honesty_level: None,
                response_type: None,
                selected_options: Some(BTreeSet::from([
                    AnalysisOptionKey::KarmaTrends,
                    AnalysisOptionKey::ActionableSteps,
                ])),
                advanced_settings: None,
            },
        },
    ]
}
