use questionnaire::{ChoiceOption, Question, QuestionnaireDefinition};

/// The favourite-colour questionnaire.
///
/// Yellow jumps straight to the crayon question; Blue and Red each get a
/// follow-up about shades. "Do you have children?" is asked before and after
/// collecting the children's names, so its second answer is the one kept.
pub fn colours() -> QuestionnaireDefinition {
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
    .with_epilogue("Completed!")
}
