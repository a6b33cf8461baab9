use serde::{Deserialize, Serialize};

/// The labeled sections of one requirement, in canonical order.
///
/// A field is `None` when its label was missing from the raw text or when the
/// boundary that terminates it never appeared. Absent fields are not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredRequirement {
    pub use_case: Option<String>,
    pub actors: Option<String>,
    pub preconditions: Option<String>,
    pub main_scenario: Option<String>,
    pub postconditions: Option<String>,
    pub alternative_scenarios: Option<String>,
    pub priority: Option<String>,
    pub requirement_type: Option<String>,
}

impl StructuredRequirement {
    /// Single-line summary of the present sections, for display and the
    /// plain-text result record. Absent sections are omitted.
    pub fn summary(&self) -> String {
        let fields = [
            ("Use Case", &self.use_case),
            ("Actors", &self.actors),
            ("Preconditions", &self.preconditions),
            ("Main Scenario", &self.main_scenario),
            ("Postconditions", &self.postconditions),
            ("Alternative Scenarios", &self.alternative_scenarios),
            ("Priority", &self.priority),
            ("Type", &self.requirement_type),
        ];

        fields
            .iter()
            .filter_map(|(label, value)| {
                value
                    .as_ref()
                    .map(|value| format!("{label}: {}", value.replace('\n', " ")))
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::StructuredRequirement;

    #[test]
    fn summary_omits_absent_sections() {
        let requirement = StructuredRequirement {
            use_case: Some("Login".to_string()),
            priority: Some("High".to_string()),
            ..Default::default()
        };

        assert_eq!(requirement.summary(), "Use Case: Login; Priority: High");
    }

    #[test]
    fn summary_of_fully_absent_requirement_is_empty() {
        assert_eq!(StructuredRequirement::default().summary(), "");
    }

    #[test]
    fn summary_flattens_multiline_sections() {
        let requirement = StructuredRequirement {
            main_scenario: Some("1. Open\n2. Close".to_string()),
            ..Default::default()
        };

        assert_eq!(requirement.summary(), "Main Scenario: 1. Open 2. Close");
    }
}
