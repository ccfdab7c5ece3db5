//! Runs a questionnaire on the console and prints the answers as JSON.
//!
//! Run with: cargo run -p example-questionnaires -- [--definition path.toml] [--plain]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use example_questionnaires::{colours, logging};
use questionnaire::{Questionnaire, QuestionnaireError, Runner, load_definition};
use questionnaire_dialoguer::{DialoguerBackend, DialoguerError};
use tracing::info;

#[derive(Debug, Parser)]
#[command(about = "Walk through a conditional questionnaire")]
struct Args {
    /// TOML questionnaire definition; the built-in colour questionnaire if omitted.
    #[arg(short, long)]
    definition: Option<PathBuf>,

    /// Use the plain (uncoloured) prompt theme.
    #[arg(long)]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let definition = match &args.definition {
        Some(path) => load_definition(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => colours(),
    };
    let source = match &args.definition {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };
    info!(%source, questions = definition.len(), "definition loaded");

    let backend = if args.plain {
        DialoguerBackend::plain()
    } else {
        DialoguerBackend::new()
    };

    let mut questionnaire = Questionnaire::new(definition)?;
    let outcome = Runner::new(&mut questionnaire).run(&backend).map(|_| ());
    match outcome {
        Ok(()) => {}
        Err(err) if cancelled(&err) => {
            info!(cursor = questionnaire.cursor(), "run cancelled");
            eprintln!("Cancelled.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    let answers = questionnaire.into_answers();
    println!("{}", serde_json::to_string_pretty(&answers)?);
    Ok(())
}

fn cancelled(err: &QuestionnaireError) -> bool {
    match err {
        QuestionnaireError::Cancelled => true,
        QuestionnaireError::Backend(inner) => inner
            .downcast_ref::<DialoguerError>()
            .is_some_and(DialoguerError::is_cancelled),
        _ => false,
    }
}
