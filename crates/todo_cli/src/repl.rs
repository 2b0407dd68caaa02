//! Line-command loop over the home screen.

use anyhow::Result;
use std::io::{BufRead, Write};
use todo_core::{
    ConfirmPrompt, Confirmer, Decision, EditControl, HomeScreen, Marker, RemoveOutcome, RowView,
    TaskId,
};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(usize),
    Edit(usize),
    Title(usize, String),
    Submit(usize),
    Cancel(usize),
    Delete(usize),
    List,
    Json,
    Help,
    Quit,
}

const HELP: &str = "commands: add <title> | toggle <n> | edit <n> | title <n> <text> | \
submit <n> | cancel <n> | delete <n> | list | json | help | quit";

/// Parses one line. Row numbers are 1-based.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match verb.to_ascii_lowercase().as_str() {
        "add" if !rest.is_empty() => Ok(Command::Add(rest.to_string())),
        "add" => Err("usage: add <title>".to_string()),
        "toggle" => parse_row(rest).map(Command::Toggle),
        "edit" => parse_row(rest).map(Command::Edit),
        "submit" => parse_row(rest).map(Command::Submit),
        "cancel" => parse_row(rest).map(Command::Cancel),
        "delete" | "rm" => parse_row(rest).map(Command::Delete),
        "title" => {
            let (row, text) = rest
                .split_once(' ')
                .ok_or_else(|| "usage: title <n> <text>".to_string())?;
            Ok(Command::Title(parse_row(row)?, text.trim().to_string()))
        }
        "list" | "ls" | "" => Ok(Command::List),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`")),
    }
}

fn parse_row(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(format!("expected a row number starting at 1, got `{}`", raw.trim())),
    }
}

/// Reads commands until EOF or `quit`.
///
/// Delete confirmations are read from the same input.
pub fn run<R: BufRead, W: Write>(
    screen: &mut HomeScreen,
    mut input: R,
    mut output: W,
    interactive: bool,
) -> Result<()> {
    writeln!(output, "{HELP}")?;
    let mut line = String::new();
    loop {
        if interactive {
            write!(output, "> ")?;
            output.flush()?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "error: {message}")?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        execute(screen, command, &mut input, &mut output)?;
    }
    Ok(())
}

fn execute<R: BufRead, W: Write>(
    screen: &mut HomeScreen,
    command: Command,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    match command {
        Command::Add(title) => match screen.submit_new_task(title) {
            Ok(_) => print_list(screen, output)?,
            Err(notice) => writeln!(output, "! {}: {}", notice.title, notice.message)?,
        },
        Command::Toggle(row) => {
            if let Some(id) = row_id(screen, row, output)? {
                screen.press_marker(id);
                print_list(screen, output)?;
            }
        }
        Command::Edit(row) => {
            if let Some(id) = row_id(screen, row, output)? {
                screen.press_edit_control(id);
                print_list(screen, output)?;
            }
        }
        Command::Title(row, text) => {
            if let Some(id) = row_id(screen, row, output)? {
                if !screen.set_pending_title(id, text) {
                    writeln!(output, "error: row {row} is not being edited")?;
                }
            }
        }
        Command::Submit(row) => {
            if let Some(id) = row_id(screen, row, output)? {
                if screen.row(id).is_some_and(|task_row| task_row.is_editing()) {
                    screen.submit_editing(id);
                    print_list(screen, output)?;
                } else {
                    writeln!(output, "error: row {row} is not being edited")?;
                }
            }
        }
        Command::Cancel(row) => {
            if let Some(id) = row_id(screen, row, output)? {
                screen.cancel_editing(id);
                print_list(screen, output)?;
            }
        }
        Command::Delete(row) => {
            if let Some(id) = row_id(screen, row, output)? {
                let mut confirmer = LineConfirmer {
                    input: &mut *input,
                    output: &mut *output,
                };
                match screen.press_delete(id, &mut confirmer) {
                    None => writeln!(output, "error: finish editing row {row} first")?,
                    Some(RemoveOutcome::Declined) => writeln!(output, "kept")?,
                    Some(RemoveOutcome::Removed | RemoveOutcome::NotFound) => {
                        print_list(screen, output)?
                    }
                }
            }
        }
        Command::List => print_list(screen, output)?,
        Command::Json => writeln!(output, "{}", serde_json::to_string_pretty(&screen.tasks())?)?,
        Command::Help => writeln!(output, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

fn row_id<W: Write>(screen: &HomeScreen, row: usize, output: &mut W) -> Result<Option<TaskId>> {
    let id = screen.task_id_at(row - 1);
    if id.is_none() {
        writeln!(output, "error: no row {row}")?;
    }
    Ok(id)
}

fn print_list<W: Write>(screen: &HomeScreen, output: &mut W) -> Result<()> {
    let view = screen.render();
    writeln!(output, "== {} ==", view.header.label())?;
    for row in &view.rows {
        writeln!(output, "{}", format_row(row))?;
    }
    Ok(())
}

/// `1. [x] title` plus an edit marker while the row is editing.
pub fn format_row(row: &RowView) -> String {
    let marker = match row.marker {
        Marker::Done => "[x]",
        Marker::Pending => "[ ]",
    };
    let suffix = match row.edit_control {
        EditControl::Cancel => "  (editing)",
        EditControl::Pen => "",
    };
    format!("{}. {marker} {}{suffix}", row.index + 1, row.title)
}

/// Asks the removal question on the terminal.
///
/// Anything but `y`/`yes` (including EOF) declines.
struct LineConfirmer<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Confirmer for LineConfirmer<'_, R, W> {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision {
        let asked = write!(
            self.output,
            "{}: {} [{}/{}] ",
            prompt.title, prompt.message, prompt.confirm_label, prompt.decline_label
        )
        .and_then(|()| self.output.flush());
        if asked.is_err() {
            return Decision::Decline;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => {
                let answer = answer.trim().to_ascii_lowercase();
                Decision::from_confirmed(answer == "y" || answer == "yes")
            }
            Err(_) => Decision::Decline,
        }
    }
}
