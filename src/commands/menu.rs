use super::{Action, Outcome};
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::prompt::{is_interrupted, Prompt};
use crate::{msg_error, msg_print, msg_warning};
use anyhow::Result;

/// Shows the menu, dispatches, and loops until Exit is chosen.
///
/// Handler failures are reported and the menu comes back. Only an interrupted
/// prompt or a failure of the menu prompt itself ends the loop with an error.
pub fn run(db: &Db, prompt: &mut dyn Prompt) -> Result<()> {
    loop {
        let action = choose(prompt)?;
        if let Some(farewell) = action.closing_message() {
            msg_print!(farewell);
            return Ok(());
        }

        match action.handle(db, prompt) {
            Outcome::Failed(error) if is_interrupted(&error) => return Err(error),
            outcome => report(action, outcome),
        }
    }
}

fn choose(prompt: &mut dyn Prompt) -> Result<Action> {
    let labels: Vec<String> = Action::ALL.iter().map(|a| a.to_string()).collect();
    let index = prompt.select(Message::MenuPrompt, &labels)?;
    Ok(*super::chosen(&Action::ALL, index)?)
}

fn report(action: Action, outcome: Outcome) {
    match outcome {
        Outcome::Completed => {}
        Outcome::MissingPrerequisite(message) => msg_warning!(message),
        Outcome::Failed(error) => {
            msg_error!(Message::HandlerFailed(action.failure_prefix().to_string(), format!("{:#}", error)))
        }
    }
    msg_print!(Message::ReturningToMenu);
}
