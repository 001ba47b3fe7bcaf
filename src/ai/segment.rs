//! Marker-based segmentation of model replies into structured fields.
//!
//! The upstream model is asked to answer in a fixed layout:
//!
//! ```text
//! Journal Summary:
//! <summary>
//!
//! Analysis:
//! <analysis>
//!
//! Insights:
//! Mood Pattern: <...>
//! Suggestion: <...>
//! Achievement: <...>
//! Wellness Tip: <...>
//! ```
//!
//! Nothing guarantees the model follows it. Segmentation therefore never fails:
//! a section that cannot be found leaves its field as an empty string, and every
//! result shape is always structurally complete.
//!
//! Markers are exact, case-sensitive literals. Every split happens at the first
//! occurrence of a marker, producing at most two parts.

use serde::{Deserialize, Serialize};

/// Marker introducing the first-person summary.
pub const SUMMARY_MARKER: &str = "Journal Summary:";
/// Marker introducing the second-person analysis.
pub const ANALYSIS_MARKER: &str = "Analysis:";
/// Marker introducing the insight lines.
pub const INSIGHTS_MARKER: &str = "Insights:";
/// Insight line marker for the mood pattern.
pub const MOOD_PATTERN_MARKER: &str = "Mood Pattern:";
/// Insight line marker for the suggestion.
pub const SUGGESTION_MARKER: &str = "Suggestion:";
/// Insight line marker for the achievement.
pub const ACHIEVEMENT_MARKER: &str = "Achievement:";
/// Insight line marker for the wellness tip.
pub const WELLNESS_TIP_MARKER: &str = "Wellness Tip:";

/// Which subset of summary, analysis and insights a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestedView {
    /// Summary, analysis and insights.
    Full,
    /// Only the first-person summary.
    SummaryOnly,
    /// Only the analysis and insights.
    InsightsOnly,
}

/// The four insight fields extracted from the `Insights:` section.
///
/// Fields the model did not provide are empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRecord {
    pub mood_pattern: String,
    pub suggestion: String,
    pub achievement: String,
    pub wellness_tip: String,
}

impl InsightRecord {
    /// Returns true when no insight field was populated.
    pub fn is_empty(&self) -> bool {
        self.mood_pattern.is_empty()
            && self.suggestion.is_empty()
            && self.achievement.is_empty()
            && self.wellness_tip.is_empty()
    }

    /// Fills fields from `Marker: value` lines. Later lines overwrite earlier ones.
    fn absorb_lines(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim();
            if let Some(value) = line.strip_prefix(MOOD_PATTERN_MARKER) {
                self.mood_pattern = value.trim().to_string();
            } else if let Some(value) = line.strip_prefix(SUGGESTION_MARKER) {
                self.suggestion = value.trim().to_string();
            } else if let Some(value) = line.strip_prefix(ACHIEVEMENT_MARKER) {
                self.achievement = value.trim().to_string();
            } else if let Some(value) = line.strip_prefix(WELLNESS_TIP_MARKER) {
                self.wellness_tip = value.trim().to_string();
            }
        }
    }
}

/// A parsed model reply, shaped by the requested view.
///
/// Serializes without a tag, so each variant produces exactly the JSON object
/// its view promises, e.g. `{"summary": "..."}` for [`StructuredResult::SummaryOnly`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StructuredResult {
    Full {
        summary: String,
        analysis: String,
        insights: InsightRecord,
    },
    SummaryOnly {
        summary: String,
    },
    InsightsOnly {
        analysis: String,
        insights: InsightRecord,
    },
}

impl StructuredResult {
    /// The view this result was produced for.
    pub fn view(&self) -> RequestedView {
        match self {
            StructuredResult::Full { .. } => RequestedView::Full,
            StructuredResult::SummaryOnly { .. } => RequestedView::SummaryOnly,
            StructuredResult::InsightsOnly { .. } => RequestedView::InsightsOnly,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            StructuredResult::Full { summary, .. } | StructuredResult::SummaryOnly { summary } => {
                Some(summary.as_str())
            }
            StructuredResult::InsightsOnly { .. } => None,
        }
    }

    pub fn analysis(&self) -> Option<&str> {
        match self {
            StructuredResult::Full { analysis, .. }
            | StructuredResult::InsightsOnly { analysis, .. } => Some(analysis.as_str()),
            StructuredResult::SummaryOnly { .. } => None,
        }
    }

    pub fn insights(&self) -> Option<&InsightRecord> {
        match self {
            StructuredResult::Full { insights, .. }
            | StructuredResult::InsightsOnly { insights, .. } => Some(insights),
            StructuredResult::SummaryOnly { .. } => None,
        }
    }
}

/// Splits a raw model reply into the fields of the requested view.
///
/// This function never fails. Missing sections yield empty strings.
///
/// # Examples
///
/// ```
/// use journal_genai::ai::segment::{segment, RequestedView};
///
/// let result = segment("Journal Summary:\nX\n\nAnalysis:\nY", RequestedView::Full);
/// assert_eq!(result.summary(), Some("X"));
/// assert_eq!(result.analysis(), Some("Y"));
/// assert!(result.insights().unwrap().is_empty());
/// ```
pub fn segment(raw: &str, view: RequestedView) -> StructuredResult {
    match view {
        RequestedView::Full => segment_full(raw),
        RequestedView::SummaryOnly => StructuredResult::SummaryOnly {
            summary: strip_summary_marker(raw),
        },
        RequestedView::InsightsOnly => {
            // Text ahead of the first `Analysis:` is preamble, unless it already
            // holds the insight lines.
            let body = match raw.split_once(ANALYSIS_MARKER) {
                Some((preamble, rest)) if !preamble.contains(INSIGHTS_MARKER) => rest,
                _ => raw,
            };
            let (analysis, insights) = split_analysis_and_insights(body);
            StructuredResult::InsightsOnly { analysis, insights }
        }
    }
}

fn segment_full(raw: &str) -> StructuredResult {
    match raw.split_once(ANALYSIS_MARKER) {
        None => StructuredResult::Full {
            summary: raw.trim().to_string(),
            analysis: String::new(),
            insights: InsightRecord::default(),
        },
        Some((head, tail)) => {
            let (analysis, insights) = split_analysis_and_insights(tail);
            StructuredResult::Full {
                summary: strip_summary_marker(head),
                analysis,
                insights,
            }
        }
    }
}

/// Shared tail of the Full and InsightsOnly views: text before `Insights:` is the
/// analysis, the lines after it feed the insight record.
fn split_analysis_and_insights(text: &str) -> (String, InsightRecord) {
    let mut insights = InsightRecord::default();
    match text.split_once(INSIGHTS_MARKER) {
        None => (text.trim().to_string(), insights),
        Some((analysis, insight_lines)) => {
            insights.absorb_lines(insight_lines);
            (analysis.trim().to_string(), insights)
        }
    }
}

fn strip_summary_marker(text: &str) -> String {
    text.replace(SUMMARY_MARKER, "").trim().to_string()
}
