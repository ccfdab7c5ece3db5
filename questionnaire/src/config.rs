//! Loading question sets from TOML.
//!
//! ```toml
//! epilogue = "Completed!"
//!
//! [[questions]]
//! reference = "q1"
//! prompt = "What is your favourite colour?"
//! kind = "single_choice"
//! required = true
//! choices = [
//!     { reference = "q1a", value = "Blue" },
//!     { reference = "q1c", value = "Yellow" },
//! ]
//! branch_conditions = [{ target = "q5", trigger = "q1", state = "Yellow" }]
//!
//! [[questions]]
//! reference = "q2"
//! prompt = "What colour blue do you prefer?"
//! kind = "free_text"
//! display_conditions = [{ trigger = "q1", state = "Blue" }]
//!
//! [[questions]]
//! reference = "q5"
//! prompt = "What is your name?"
//! kind = "free_text"
//! ```

use std::path::Path;

use questionnaire_types::{ConfigError, QuestionnaireDefinition};
use tracing::debug;

use crate::validate::validate;

/// Parse and validate a definition from TOML source.
pub fn parse_definition(source: &str) -> Result<QuestionnaireDefinition, ConfigError> {
    let definition: QuestionnaireDefinition =
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&definition)?;
    Ok(definition)
}

/// Read, parse and validate a definition from a TOML file.
pub fn load_definition(path: impl AsRef<Path>) -> Result<QuestionnaireDefinition, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading questionnaire definition");
    let source = std::fs::read_to_string(path)?;
    parse_definition(&source)
}

#[cfg(test)]
mod tests {
    use questionnaire_types::{QuestionKind, ResponseValue};

    use super::*;

    const COLOURS: &str = r#"
epilogue = "Completed!"

[[questions]]
reference = "q1"
prompt = "What is your favourite colour?"
kind = "single_choice"
required = true
choices = [
    { reference = "q1a", value = "Blue" },
    { reference = "q1c", value = "Yellow", label = "like a lemon" },
]
branch_conditions = [{ target = "q7", trigger = "q1", state = "Yellow" }]

[[questions]]
reference = "q2"
prompt = "What colour blue do you prefer?"
kind = "free_text"
display_conditions = [{ trigger = "q1", state = "Blue" }]

[[questions]]
reference = "q7"
prompt = "What are the names of your children?"
kind = "repeating"
children = [{ reference = "q7_1", prompt = "Name? (q to quit)", kind = "free_text" }]
"#;

    #[test]
    fn parses_all_question_kinds() {
        let definition = parse_definition(COLOURS).unwrap();

        assert_eq!(definition.len(), 3);
        assert_eq!(definition.epilogue.as_deref(), Some("Completed!"));

        let q1 = &definition.questions[0];
        assert!(q1.is_required());
        assert_eq!(q1.choices().len(), 2);
        assert_eq!(q1.choices()[1].label.as_deref(), Some("like a lemon"));
        assert_eq!(q1.branch_conditions()[0].state, ResponseValue::from("Yellow"));

        let q2 = &definition.questions[1];
        assert!(!q2.is_required());
        assert_eq!(q2.display_conditions()[0].trigger.as_str(), "q1");

        match definition.questions[2].kind() {
            QuestionKind::Repeating(repeating) => {
                assert_eq!(repeating.sentinel, "q");
                assert_eq!(repeating.children()[0].reference().as_str(), "q7_1");
            }
            _ => panic!("Expected Repeating question kind"),
        }
    }

    #[test]
    fn rejects_invalid_definition() {
        let source = r#"
[[questions]]
reference = "q1"
prompt = "Colour?"
kind = "yes_no"
branch_conditions = [{ target = "q9", trigger = "q1", state = "Yes" }]
"#;
        assert!(matches!(
            parse_definition(source),
            Err(ConfigError::UnknownBranchTarget { .. })
        ));
    }

    #[test]
    fn reports_parse_errors() {
        let source = r#"
[[questions]]
reference = "q1"
prompt = "Colour?"
kind = "slider"
"#;
        assert!(matches!(parse_definition(source), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn reports_missing_file() {
        let result = load_definition("/nonexistent/questionnaire.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
