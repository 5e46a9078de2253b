//! Delete confirmation on a terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::warn;

use crate::core::confirm::{Confirm, ConfirmOutcome, DeletePrompt};

/// Asks on `output`, reads the answer as one line from `input`.
///
/// `d`, `delete`, `y` and `yes` confirm; anything else cancels. A failed
/// write, a read error or end of input also cancel.
pub struct TerminalConfirm<'a, R, W: ?Sized> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write + ?Sized> TerminalConfirm<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &DeletePrompt) -> Result<Option<String>> {
        writeln!(self.output, "{}", prompt.heading).context("write prompt")?;
        write!(
            self.output,
            "{} [{}/{}] ",
            prompt.message,
            prompt.cancel_label.to_ascii_lowercase(),
            prompt.confirm_label.to_ascii_lowercase()
        )
        .context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer).context("read answer")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(answer))
    }
}

impl<R: BufRead, W: Write + ?Sized> Confirm for TerminalConfirm<'_, R, W> {
    fn confirm(&mut self, prompt: &DeletePrompt) -> ConfirmOutcome {
        match self.ask(prompt) {
            Ok(Some(answer)) => parse_answer(&answer),
            Ok(None) => {
                warn!(task_id = %prompt.task_id, "input closed during confirmation");
                ConfirmOutcome::Cancelled
            }
            Err(err) => {
                warn!(task_id = %prompt.task_id, err = %err, "confirmation failed");
                ConfirmOutcome::Cancelled
            }
        }
    }
}

fn parse_answer(answer: &str) -> ConfirmOutcome {
    match answer.trim().to_ascii_lowercase().as_str() {
        "d" | "delete" | "y" | "yes" => ConfirmOutcome::Confirmed,
        _ => ConfirmOutcome::Cancelled,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::test_support::task;

    fn ask(answer: &str) -> (ConfirmOutcome, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let prompt = DeletePrompt::for_task(&task(1, "Call mom", false));
        let outcome = TerminalConfirm::new(&mut input, &mut output).confirm(&prompt);
        (outcome, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn delete_answers_confirm() {
        for answer in ["d\n", "Delete\n", "y\n", " YES \n"] {
            assert_eq!(ask(answer).0, ConfirmOutcome::Confirmed, "answer {:?}", answer);
        }
    }

    #[test]
    fn other_answers_cancel() {
        for answer in ["c\n", "cancel\n", "\n", "nope\n"] {
            assert_eq!(ask(answer).0, ConfirmOutcome::Cancelled, "answer {:?}", answer);
        }
    }

    #[test]
    fn closed_input_cancels() {
        assert_eq!(ask("").0, ConfirmOutcome::Cancelled);
    }

    #[test]
    fn prompt_shows_both_options() {
        let (_, shown) = ask("c\n");
        assert!(shown.starts_with("Delete task\n"));
        assert!(shown.contains("\"Call mom\""));
        assert!(shown.contains("[cancel/delete]"));
    }
}
