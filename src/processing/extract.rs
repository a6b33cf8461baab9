//! Tagged-section extraction of structured requirement fields.

use crate::domain::requirement::StructuredRequirement;

/// Section labels in canonical order. Each field is terminated by the label
/// that follows it; the final field is terminated by a line break.
const USE_CASE: &str = "Use Case:";
const ACTORS: &str = "Actors:";
const PRECONDITIONS: &str = "Preconditions:";
const MAIN_SCENARIO: &str = "Main Scenario:";
const POSTCONDITIONS: &str = "Postconditions:";
const ALTERNATIVE_SCENARIOS: &str = "Alternative Scenarios:";
const PRIORITY: &str = "Priority:";
const TYPE: &str = "Type:";

/// Text strictly between `label` and the next occurrence of `boundary`,
/// trimmed. `None` when either the label or its boundary is missing; the
/// boundary itself is not consumed. Matching is case-sensitive and spans
/// line breaks.
fn section(text: &str, label: &str, boundary: &str) -> Option<String> {
    let start = text.find(label)? + label.len();
    let rest = &text[start..];
    let end = rest.find(boundary)?;
    Some(rest[..end].trim().to_string())
}

/// Parse one raw requirement into its labeled sections.
///
/// Deterministic and pure; a malformed requirement yields absent fields,
/// never an error.
pub fn extract(raw_text: &str) -> StructuredRequirement {
    StructuredRequirement {
        use_case: section(raw_text, USE_CASE, ACTORS),
        actors: section(raw_text, ACTORS, PRECONDITIONS),
        preconditions: section(raw_text, PRECONDITIONS, MAIN_SCENARIO),
        main_scenario: section(raw_text, MAIN_SCENARIO, POSTCONDITIONS),
        postconditions: section(raw_text, POSTCONDITIONS, ALTERNATIVE_SCENARIOS),
        alternative_scenarios: section(raw_text, ALTERNATIVE_SCENARIOS, PRIORITY),
        priority: section(raw_text, PRIORITY, TYPE),
        requirement_type: section(raw_text, TYPE, "\n"),
    }
}
