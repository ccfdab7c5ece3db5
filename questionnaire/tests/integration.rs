//! Integration tests for questionnaire

use questionnaire::{
    ChoiceOption, Question, Questionnaire, QuestionnaireDefinition, QuestionnaireError,
    ResponseValue, Runner, TestBackend, parse_definition,
};

/// The colour questionnaire: q1 branches to q4 on Yellow, q2/q3 depend on q1,
/// q6 is asked twice around the repeating q7.
///
/// Same questions as `example_questionnaires::colours` minus the epilogue; that
/// crate depends on this one, so it is restated here. Keep the two in step.
fn colours() -> QuestionnaireDefinition {
    let q6 = Question::yes_no("q6", "Do you have children?").required();

    QuestionnaireDefinition::new(vec![
        Question::single_choice(
            "q1",
            "What is your favourite colour?",
            vec![
                ChoiceOption::new("q1a", "Blue"),
                ChoiceOption::new("q1b", "Red"),
                ChoiceOption::new("q1c", "Yellow"),
            ],
        )
        .required()
        .jump_to("q4", "Yellow"),
        Question::single_choice(
            "q2",
            "What colour blue do you prefer?",
            vec![
                ChoiceOption::new("q2a", "Sky Blue"),
                ChoiceOption::new("q2b", "Royal Blue"),
                ChoiceOption::new("q2c", "Navy Blue"),
            ],
        )
        .required()
        .display_when("q1", "Blue"),
        Question::single_choice(
            "q3",
            "What shade of red do you prefer?",
            vec![
                ChoiceOption::new("q3a", "Crimson"),
                ChoiceOption::new("q3b", "Ruby"),
                ChoiceOption::new("q3c", "Scarlet"),
            ],
        )
        .required()
        .display_when("q1", "Red"),
        Question::yes_no("q4", "Do you have a crayon in this colour?").required(),
        Question::free_text("q5", "What is your name?"),
        q6.clone(),
        Question::repeating(
            "q7",
            "What are the names of your children?",
            vec![Question::free_text("q7_1", "Name? (q to quit)")],
        ),
        q6,
    ])
}

fn started(definition: QuestionnaireDefinition) -> Questionnaire {
    let mut questionnaire = Questionnaire::new(definition).unwrap();
    questionnaire.start().unwrap();
    questionnaire
}

fn current(questionnaire: &Questionnaire) -> &str {
    questionnaire.current().unwrap().reference().as_str()
}

#[test]
fn test_yellow_branches_to_crayon_question() {
    let mut questionnaire = started(colours());
    assert_eq!(current(&questionnaire), "q1");

    questionnaire.submit("Yellow").unwrap();

    assert_eq!(current(&questionnaire), "q4");
    assert_eq!(questionnaire.cursor(), questionnaire.question_index("q4").unwrap());
    assert_eq!(questionnaire.answers().len(), 1);
    assert_eq!(questionnaire.answers().get_text("q1").unwrap(), "Yellow");
}

#[test]
fn test_blue_shows_blue_question() {
    let mut questionnaire = started(colours());
    questionnaire.submit("Blue").unwrap();
    assert_eq!(current(&questionnaire), "q2");
}

#[test]
fn test_red_skips_blue_question() {
    let mut questionnaire = started(colours());
    questionnaire.submit("Red").unwrap();

    assert_eq!(current(&questionnaire), "q3");
    assert!(!questionnaire.answers().contains("q2"));
}

#[test]
fn test_full_run_with_branch() {
    let mut questionnaire = Questionnaire::new(colours()).unwrap();
    let backend = TestBackend::new()
        .with_response("q1", "Yellow")
        .with_response("q4", "Yes")
        .with_response("q5", "Ada")
        .with_responses("q6", ["Yes", "No"])
        .with_responses("q7_1", ["Alice", "Bob", "q"]);

    let answers = Runner::new(&mut questionnaire).run(&backend).unwrap().clone();

    let asked: Vec<_> = backend.asked().iter().map(|r| r.to_string()).collect();
    assert_eq!(
        asked,
        vec!["q1", "q4", "q5", "q6", "q7_1", "q7_1", "q7_1", "q6"]
    );
    assert!(!backend.was_asked("q2"));
    assert!(!backend.was_asked("q3"));

    assert_eq!(answers.len(), 5);
    assert_eq!(answers.get_text("q1").unwrap(), "Yellow");
    assert_eq!(answers.get_text("q4").unwrap(), "Yes");
    assert_eq!(answers.get_text("q5").unwrap(), "Ada");
    // q6 is asked twice; the second answer replaces the first
    assert_eq!(answers.get_text("q6").unwrap(), "No");
    assert_eq!(
        answers.get("q7"),
        Some(&ResponseValue::from(vec!["Alice", "Bob"]))
    );
    assert!(questionnaire.is_completed());
}

#[test]
fn test_full_run_red_path_never_presents_blue_question() {
    let mut questionnaire = Questionnaire::new(colours()).unwrap();
    let backend = TestBackend::new()
        .with_response("q1", "Red")
        .with_response("q3", "Ruby")
        .with_response("q4", "No")
        .with_response("q5", "Ada")
        .with_responses("q6", ["No", "No"])
        .with_response("q7_1", "q");

    let answers = Runner::new(&mut questionnaire).run(&backend).unwrap();

    assert!(!backend.was_asked("q2"));
    assert!(!answers.contains("q2"));
    assert_eq!(answers.get_text("q3").unwrap(), "Ruby");
    assert!(answers.get_list("q7").unwrap().is_empty());
}

#[test]
fn test_skip_condition_never_presents_question() {
    let definition = QuestionnaireDefinition::new(vec![
        Question::yes_no("q6", "Do you have children?"),
        Question::repeating(
            "q7",
            "What are the names of your children?",
            vec![Question::free_text("q7_1", "Name? (q to quit)")],
        )
        .skip_when("q6", "No"),
        Question::free_text("q8", "Anything else?"),
    ]);
    let mut questionnaire = Questionnaire::new(definition).unwrap();
    let backend = TestBackend::new()
        .with_response("q6", "No")
        .with_response("q8", "Nope");

    let answers = Runner::new(&mut questionnaire).run(&backend).unwrap();

    assert!(!backend.was_asked("q7_1"));
    assert!(!answers.contains("q7"));
    assert_eq!(answers.len(), 2);
}

#[test]
fn test_completion_is_terminal() {
    let mut questionnaire = started(QuestionnaireDefinition::new(vec![
        Question::free_text("q5", "What is your name?"),
    ]));

    questionnaire.submit("Ada").unwrap();
    assert!(questionnaire.is_completed());

    questionnaire.submit("Grace").unwrap();
    questionnaire.start().unwrap();
    assert!(questionnaire.is_completed());
    assert_eq!(questionnaire.answers().get_text("q5").unwrap(), "Ada");
}

#[test]
fn test_unanswered_trigger_aborts_run() {
    let definition = QuestionnaireDefinition::new(vec![
        Question::yes_no("q1", "Skip ahead?").jump_to("q3", "Yes"),
        Question::free_text("q2", "Why not?"),
        Question::free_text("q3", "Name?"),
        Question::free_text("q4", "Reason again?").display_when("q2", "because"),
    ]);
    let mut questionnaire = Questionnaire::new(definition).unwrap();
    let backend = TestBackend::new()
        .with_response("q1", "Yes")
        .with_response("q3", "Ada");

    let err = Runner::new(&mut questionnaire).run(&backend).unwrap_err();
    assert!(err.is_configuration());
    assert!(matches!(err, QuestionnaireError::UnansweredTrigger { .. }));
}

#[test]
fn test_toml_definition_runs() {
    let definition = parse_definition(
        r#"
prelude = "Hello"

[[questions]]
reference = "q1"
prompt = "What is your favourite colour?"
kind = "single_choice"
choices = [
    { reference = "q1a", value = "Blue" },
    { reference = "q1c", value = "Yellow" },
]
branch_conditions = [{ target = "q5", trigger = "q1", state = "Yellow" }]

[[questions]]
reference = "q2"
prompt = "What colour blue do you prefer?"
kind = "free_text"
display_conditions = [{ trigger = "q1", state = "Blue" }]

[[questions]]
reference = "q5"
prompt = "What is your name?"
kind = "free_text"
"#,
    )
    .unwrap();

    let mut questionnaire = Questionnaire::new(definition).unwrap();
    let backend = TestBackend::new()
        .with_response("q1", "Blue")
        .with_response("q2", "Navy")
        .with_response("q5", "Ada");

    let answers = Runner::new(&mut questionnaire).run(&backend).unwrap();
    assert_eq!(answers.get_text("q2").unwrap(), "Navy");
    assert_eq!(backend.messages(), vec!["Hello"]);
}
