//! Line-oriented driver for the to-do screen core.
//!
//! # Responsibility
//! - Exercise `swipedo_core` commands without a mobile UI runtime.
//! - Print the rendered screen after every command.
//!
//! Commands, one per line on stdin:
//! `type <text>`, `add`, `add <text>`, `del <id>`, `swipe <id> <dx>`,
//! `tap`, `action <id> edit|delete`, `edit <text>`, `save`, `cancel`,
//! `show`, `quit`.

use std::io::{self, BufRead, Write};
use swipedo_core::{RowAction, RowSwipe, ScreenConfig, ScreenView, TodoService};

fn main() {
    let mut service = match TodoService::new(ScreenConfig::default()) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("swipedo: {err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&mut service, io::stdin().lock(), &mut io::stdout().lock()) {
        eprintln!("swipedo: {err}");
        std::process::exit(1);
    }
}

fn run(service: &mut TodoService, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "swipedo_core version={}", swipedo_core::core_version())?;
    print_screen(out, &service.render())?;

    for line in input.lines() {
        let line = line?;
        match apply(service, line.trim()) {
            Outcome::Quit => break,
            Outcome::Render => print_screen(out, &service.render())?,
            Outcome::Error(message) => writeln!(out, "error: {message}")?,
        }
    }
    out.flush()
}

enum Outcome {
    Render,
    Error(String),
    Quit,
}

fn apply(service: &mut TodoService, line: &str) -> Outcome {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        "" | "show" => Outcome::Render,
        "quit" | "exit" => Outcome::Quit,
        "type" => {
            service.set_input(rest);
            Outcome::Render
        }
        "add" => {
            if !rest.is_empty() {
                service.set_input(rest);
            }
            service.submit();
            Outcome::Render
        }
        "del" => match parse_id(rest) {
            Ok(id) => {
                service.delete(id);
                Outcome::Render
            }
            Err(message) => Outcome::Error(message),
        },
        "swipe" => {
            let (id, dx) = rest.split_once(' ').unwrap_or((rest, ""));
            match (parse_id(id), dx.trim().parse::<f32>()) {
                (Ok(id), Ok(dx)) => {
                    service.release_drag(id, dx);
                    Outcome::Render
                }
                _ => Outcome::Error("usage: swipe <id> <dx>".to_string()),
            }
        }
        "tap" => {
            service.close_rows();
            Outcome::Render
        }
        "action" => {
            let (id, action) = rest.split_once(' ').unwrap_or((rest, ""));
            let action = match action.trim() {
                "edit" => RowAction::Edit,
                "delete" => RowAction::Delete,
                _ => return Outcome::Error("usage: action <id> edit|delete".to_string()),
            };
            match parse_id(id) {
                Ok(id) => into_outcome(service.activate(id, action).map(|_| ())),
                Err(message) => Outcome::Error(message),
            }
        }
        "edit" => into_outcome(service.set_edit_text(rest).map(|_| ())),
        "save" => into_outcome(service.commit_edit().map(|_| ())),
        "cancel" => {
            service.cancel_edit();
            Outcome::Render
        }
        other => Outcome::Error(format!("unknown command `{other}`")),
    }
}

fn into_outcome(result: Result<(), swipedo_core::TodoError>) -> Outcome {
    match result {
        Ok(()) => Outcome::Render,
        Err(err) => Outcome::Error(err.to_string()),
    }
}

fn parse_id(raw: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid item id `{}`", raw.trim()))
}

fn print_screen(out: &mut impl Write, view: &ScreenView) -> io::Result<()> {
    writeln!(out, "{}", view.title)?;
    for row in &view.rows {
        let state = match row.swipe {
            RowSwipe::Closed => "   ",
            RowSwipe::Open(_) => "<->",
        };
        writeln!(out, " {state} [{:>4}] {}", row.item_id, row.text)?;
    }
    if let Some(edit) = &view.edit {
        writeln!(out, " editing [{}]: {}", edit.item_id, edit.draft)?;
    }
    let field = if view.input.shows_placeholder {
        view.input.placeholder.as_str()
    } else {
        view.input.value.as_str()
    };
    writeln!(out, " > {field} {}", view.add_button.label)
}

#[cfg(test)]
mod tests {
    use super::run;
    use std::io::{self, Write};
    use swipedo_core::{ScreenConfig, TodoService};

    fn service() -> TodoService {
        TodoService::new(ScreenConfig::default()).expect("default config is valid")
    }

    fn transcript(commands: &str) -> String {
        let mut out = Vec::new();
        run(&mut service(), commands.as_bytes(), &mut out).expect("in-memory writes succeed");
        String::from_utf8(out).expect("output is UTF-8")
    }

    #[test]
    fn add_then_delete_updates_rendered_rows() {
        let output = transcript("add Buy milk\ndel 1\nquit\nadd ignored\n");
        assert!(output.contains("[   3] Buy milk"));
        let last_frame = output.rsplit("✅ To do list").next().expect("at least one frame");
        assert!(!last_frame.contains("[   1]"));
        assert!(last_frame.contains("[   2] Sample Text"));
        assert!(!output.contains("ignored"));
    }

    #[test]
    fn unknown_commands_report_errors() {
        let output = transcript("frobnicate\nsave\n");
        assert!(output.contains("error: unknown command `frobnicate`"));
        assert!(output.contains("error: no edit in progress"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_propagated() {
        let err = run(&mut service(), "show\n".as_bytes(), &mut BrokenPipe)
            .expect_err("broken output must surface");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
