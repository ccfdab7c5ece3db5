use crate::{Question, QuestionKind, QuestionnaireBackend, ResponseValue};

impl Question {
    /// Ask this question through `backend` and return a response of the matching shape.
    ///
    /// Free-text questions return the typed string, choice-like questions the
    /// selected value. Repeating questions ask each child until it answers with
    /// the sentinel and return everything before it, in order.
    ///
    /// Backend errors are returned as-is.
    pub fn ask<B>(&self, backend: &B) -> Result<ResponseValue, B::Error>
    where
        B: QuestionnaireBackend + ?Sized,
    {
        match self.kind() {
            QuestionKind::FreeText => backend.ask_text(self).map(ResponseValue::Text),
            QuestionKind::SingleChoice(_) | QuestionKind::YesNo => backend
                .ask_choice(self, &self.choices())
                .map(ResponseValue::Text),
            QuestionKind::Repeating(repeating) => {
                backend.show_message(self.prompt())?;

                let mut collected = Vec::new();
                for child in repeating.children() {
                    loop {
                        let answer = child.ask(backend)?;
                        if answer.is_text(&repeating.sentinel) {
                            break;
                        }
                        collected.push(answer);
                    }
                }
                Ok(ResponseValue::List(collected))
            }
        }
    }
}
