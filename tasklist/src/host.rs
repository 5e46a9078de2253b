//! Terminal host loop: read a command line, dispatch it, re-render.
//!
//! Row numbers in commands refer to the list as it was last drawn, so a
//! number always points at the task the user actually saw.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::io::command::{Command, HELP, parse_command};
use crate::io::prompt::TerminalConfirm;
use crate::io::render::Renderer;
use crate::session::{IgnoreReason, Intent, Session, SessionEvent};

/// Drive `session` until `quit` or end of input.
///
/// Delete confirmations are asked on `dialog_out` and answered from the
/// next line of `input`.
pub fn run_host<R: BufRead>(
    session: &mut Session,
    input: &mut R,
    renderer: &mut dyn Renderer,
    dialog_out: &mut dyn Write,
) -> Result<()> {
    let mut visible = session.projection().clone();
    renderer.frame(&visible, session.theme())?;

    let mut handled = 0usize;
    loop {
        renderer.prompt()?;
        let mut line = String::new();
        if input.read_line(&mut line).context("read command")? == 0 {
            debug!("input closed");
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                renderer.notice(&err.to_string())?;
                continue;
            }
        };
        let intent = match command {
            Command::Quit => break,
            Command::Help => {
                renderer.notice(HELP)?;
                continue;
            }
            Command::List => None,
            Command::Theme => Some(Intent::ToggleTheme),
            Command::Add(text) => {
                session.input_mut().type_text(text.clone());
                Some(Intent::Submit(text))
            }
            Command::Toggle(row) => match visible.task_at(row) {
                Some(id) => Some(Intent::Toggle(id)),
                None => {
                    renderer.notice(&format!("no row {}", row))?;
                    continue;
                }
            },
            Command::Delete(row) => match visible.task_at(row) {
                Some(id) => Some(Intent::Delete(id)),
                None => {
                    renderer.notice(&format!("no row {}", row))?;
                    continue;
                }
            },
        };

        if let Some(intent) = intent {
            let mut confirm = TerminalConfirm::new(&mut *input, &mut *dialog_out);
            let event = session.handle(intent, &mut confirm);
            handled += 1;
            if let Some(message) = describe(&event) {
                renderer.notice(message)?;
            }
        }

        visible = session.projection().clone();
        renderer.frame(&visible, session.theme())?;
    }

    info!(handled, tasks = session.store().count(), "session finished");
    Ok(())
}

fn describe(event: &SessionEvent) -> Option<&'static str> {
    match event {
        SessionEvent::Added(_) | SessionEvent::Toggled(_) | SessionEvent::ThemeChanged(_) => None,
        SessionEvent::Deleted(_) => Some("Deleted."),
        SessionEvent::DeleteCancelled(_) => Some("Kept."),
        SessionEvent::Ignored(IgnoreReason::BlankTitle) => {
            Some("Nothing to add: the title is empty.")
        }
        SessionEvent::Ignored(IgnoreReason::UnknownTask(_)) => Some("That task no longer exists."),
    }
}
