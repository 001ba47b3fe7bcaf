//! Prompt templates for journal summarization.
//!
//! This module holds the three fixed templates, one per [`RequestedView`], and
//! the helper that renders a template around a day's joined snippets. Every
//! template asks for a first-person summary and a second-person analysis, and
//! spells out the exact section markers that [`super::segment`] looks for.

use super::segment::RequestedView;

/// Placeholder replaced by the joined snippets when a template is rendered.
pub const SNIPPETS_PLACEHOLDER: &str = "{snippets}";

/// Template requesting summary, analysis and insights.
pub const FULL_TEMPLATE: &str = r#"
You are a thoughtful journal assistant.

Given the following snippets a user has recorded throughout their day:

{snippets}

Please provide three sections:

1. A concise and reflective Journal Summary as if the user wrote it themselves, using first-person language ("I", "my"). Use **only** the information in the snippets—do not add any thoughts, feelings, or actions not described.

2. An Analysis section **addressed directly to the user**, using "you" and "your" (instead of "the user"). Provide insights about the emotions you might have felt based on the snippets, and suggest possible recommendations for how you could feel happier or improve your wellbeing.

3. Specific Insights in the following four categories:
   - Mood Pattern: Analyze the emotional patterns throughout the day
   - Suggestion: Provide one actionable recommendation for improvement
   - Achievement: Identify one positive accomplishment or strength shown
   - Wellness Tip: Give one specific wellness or self-care recommendation

Format your response exactly as:

Journal Summary:
<summary here>

Analysis:
<analysis and recommendations here>

Insights:
Mood Pattern: <mood pattern analysis>
Suggestion: <actionable suggestion>
Achievement: <positive accomplishment>
Wellness Tip: <wellness recommendation>
"#;

/// Template requesting only the first-person summary.
pub const SUMMARY_TEMPLATE: &str = r#"
You are a thoughtful journal assistant.

Given the following snippets a user has recorded throughout their day:

{snippets}

Please provide a concise and reflective Journal Summary as if the user wrote it themselves, using first-person language ("I", "my"). Use **only** the information in the snippets—do not add any thoughts, feelings, or actions not described.

Format your response exactly as:

Journal Summary:
<summary here>
"#;

/// Template requesting only the analysis and insights.
pub const INSIGHTS_TEMPLATE: &str = r#"
You are a thoughtful journal assistant.

Given the following snippets a user has recorded throughout their day:

{snippets}

Please provide insights and analysis with two sections:

1. Write an Analysis section **addressed directly to the user**, using "you" and "your" (instead of "the user"). Provide insights about the emotions you might have felt based on the snippets, and suggest possible recommendations for how you could feel happier or improve your wellbeing.

2. Provide specific Insights in the following four categories:
   - Mood Pattern: Analyze the emotional patterns throughout the day
   - Suggestion: Provide one actionable recommendation for improvement
   - Achievement: Identify one positive accomplishment or strength shown
   - Wellness Tip: Give one specific wellness or self-care recommendation

Format your response exactly as:

Analysis:
<analysis and recommendations here>

Insights:
Mood Pattern: <mood pattern analysis>
Suggestion: <actionable suggestion>
Achievement: <positive accomplishment>
Wellness Tip: <wellness recommendation>
"#;

/// Returns the static template for a view.
pub fn template_for(view: RequestedView) -> &'static str {
    match view {
        RequestedView::Full => FULL_TEMPLATE,
        RequestedView::SummaryOnly => SUMMARY_TEMPLATE,
        RequestedView::InsightsOnly => INSIGHTS_TEMPLATE,
    }
}

/// Renders the template for `view` around the joined snippet text.
///
/// The placeholder is substituted once, so snippet text that happens to contain
/// `{snippets}` is inserted verbatim.
pub fn render_prompt(view: RequestedView, snippet_body: &str) -> String {
    template_for(view).replacen(SNIPPETS_PLACEHOLDER, snippet_body, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::segment::{
        ACHIEVEMENT_MARKER, ANALYSIS_MARKER, INSIGHTS_MARKER, MOOD_PATTERN_MARKER,
        SUGGESTION_MARKER, SUMMARY_MARKER, WELLNESS_TIP_MARKER,
    };

    const INSIGHT_MARKERS: [&str; 4] = [
        MOOD_PATTERN_MARKER,
        SUGGESTION_MARKER,
        ACHIEVEMENT_MARKER,
        WELLNESS_TIP_MARKER,
    ];

    #[test]
    fn test_every_template_has_one_placeholder() {
        for template in [FULL_TEMPLATE, SUMMARY_TEMPLATE, INSIGHTS_TEMPLATE] {
            assert_eq!(template.matches(SNIPPETS_PLACEHOLDER).count(), 1);
        }
    }

    #[test]
    fn test_full_template_requests_all_markers() {
        assert!(FULL_TEMPLATE.contains(SUMMARY_MARKER));
        assert!(FULL_TEMPLATE.contains(ANALYSIS_MARKER));
        assert!(FULL_TEMPLATE.contains(INSIGHTS_MARKER));
        for marker in INSIGHT_MARKERS {
            assert!(FULL_TEMPLATE.contains(marker), "missing {}", marker);
        }
        assert!(FULL_TEMPLATE.contains("first-person"));
        assert!(FULL_TEMPLATE.contains("\"you\""));
    }

    #[test]
    fn test_summary_template_requests_summary_only() {
        assert!(SUMMARY_TEMPLATE.contains(SUMMARY_MARKER));
        assert!(SUMMARY_TEMPLATE.contains("first-person"));
        assert!(!SUMMARY_TEMPLATE.contains(INSIGHTS_MARKER));
    }

    #[test]
    fn test_insights_template_omits_summary() {
        assert!(!INSIGHTS_TEMPLATE.contains(SUMMARY_MARKER));
        assert!(INSIGHTS_TEMPLATE.contains(ANALYSIS_MARKER));
        assert!(INSIGHTS_TEMPLATE.contains(INSIGHTS_MARKER));
        for marker in INSIGHT_MARKERS {
            assert!(INSIGHTS_TEMPLATE.contains(marker), "missing {}", marker);
        }
    }

    #[test]
    fn test_render_prompt_inserts_body() {
        let body = "Woke up energetic\n\nFinished a big project";
        let prompt = render_prompt(RequestedView::Full, body);

        assert!(prompt.contains(body));
        assert!(!prompt.contains(SNIPPETS_PLACEHOLDER));
    }

    #[test]
    fn test_render_prompt_leaves_placeholder_in_body_alone() {
        let prompt = render_prompt(RequestedView::SummaryOnly, "I typed {snippets} today");
        assert!(prompt.contains("I typed {snippets} today"));
    }

    #[test]
    fn test_template_for_each_view() {
        assert_eq!(template_for(RequestedView::Full), FULL_TEMPLATE);
        assert_eq!(template_for(RequestedView::SummaryOnly), SUMMARY_TEMPLATE);
        assert_eq!(template_for(RequestedView::InsightsOnly), INSIGHTS_TEMPLATE);
    }
}
