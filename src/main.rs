//! tone-picker - rewrite text (or a selected part of it) in a chosen tone

use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tone_picker::cli::{CliArgs, ConsoleCommand, RunMode, CONSOLE_HELP};
use tone_picker::config::ToneConfig;
use tone_picker::editable::SelectionRange;
use tone_picker::messages::{EditMsg, Msg, ToneMsg};
use tone_picker::model::{AppModel, Notification, NotificationKind};
use tone_picker::runtime::App;
use tone_picker::tone::ToneId;
use tone_picker::transform::{build_transformer, ToneTransformer};

/// Slack on top of the transport timeout before we stop waiting
const WAIT_MARGIN: Duration = Duration::from_secs(5);

fn main() -> Result<()> {
    let args = CliArgs::parse();
    tone_picker::tracing::init();

    let mode = args.run_mode().map_err(anyhow::Error::msg)?;

    let config = match &args.config {
        Some(path) => ToneConfig::load_from(path),
        None => ToneConfig::load(),
    };

    match mode {
        RunMode::ListTones => {
            print_tones();
            Ok(())
        }
        RunMode::InitConfig => {
            let result = match &args.config {
                Some(path) => ToneConfig::default().save_to(path),
                None => ToneConfig::default().save(),
            };
            result.map_err(anyhow::Error::msg)
        }
        RunMode::Interactive => {
            let text = match &args.input {
                Some(path) => read_file(path)?,
                None => String::new(),
            };
            let wait = config.request_timeout().saturating_add(WAIT_MARGIN);
            let transformer = build_transformer(&config)?;
            let app = App::new(AppModel::with_text(&text, config), transformer);
            run_interactive(app, wait)
        }
        RunMode::OneShot { tone, selection } => {
            let text = match &args.input {
                Some(path) => read_file(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read stdin")?;
                    buf
                }
            };
            let wait = config.request_timeout().saturating_add(WAIT_MARGIN);
            let transformer = build_transformer(&config)?;
            let app = App::new(AppModel::with_text(&text, config), transformer);
            let result = run_once(app, tone, selection, wait)?;

            match &args.output {
                Some(path) => std::fs::write(path, result)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(result.as_bytes())?;
                    stdout.flush()?;
                }
            }
            Ok(())
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_tones() {
    for row in ToneId::ALL.chunks(3) {
        let ids: Vec<_> = row.iter().map(|t| format!("{:<22}", t.as_str())).collect();
        println!("{}", ids.join(" ").trim_end());
    }
}

fn print_notifications(notifications: &[Notification]) {
    for n in notifications {
        let tag = match n.kind {
            NotificationKind::Info => "note",
            NotificationKind::Success => "ok",
            NotificationKind::Failure => "error",
        };
        eprintln!("[{}] {}", tag, n);
    }
}

/// Apply one tone and return the resulting text
fn run_once<T: ToneTransformer + 'static>(
    mut app: App<T>,
    tone: ToneId,
    selection: Option<SelectionRange>,
    wait: Duration,
) -> Result<String> {
    if let Some(range) = selection {
        let len = app.model().store.len_chars();
        if range.end() > len {
            bail!("range {} is outside the text ({} characters)", range, len);
        }
        app.dispatch(Msg::Edit(EditMsg::SetSelection {
            start: range.start(),
            end: range.end(),
        }));
    }

    app.dispatch(Msg::Tone(ToneMsg::Apply(tone)));
    if !app.wait_idle(wait) {
        bail!("No response from the rewriting service within {:?}", wait);
    }

    let notifications = app.take_notifications();
    print_notifications(&notifications);
    if !notifications
        .iter()
        .any(|n| n.kind == NotificationKind::Success)
    {
        bail!("Tone was not applied");
    }
    Ok(app.model().text())
}

fn run_interactive<T: ToneTransformer + 'static>(mut app: App<T>, wait: Duration) -> Result<()> {
    eprintln!("tone-picker interactive session. Type `help` for commands.");
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let cmd = match ConsoleCommand::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match cmd {
            ConsoleCommand::Text(text) => app.dispatch(Msg::Edit(EditMsg::SetText(text))),
            ConsoleCommand::Append(more) => {
                let mut text = app.model().text();
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(&more);
                app.dispatch(Msg::Edit(EditMsg::SetText(text)));
            }
            ConsoleCommand::Select { start, end } => {
                app.dispatch(Msg::Edit(EditMsg::SetSelection { start, end }))
            }
            ConsoleCommand::ClearSelection => {
                let end = app.model().store.len_chars();
                app.dispatch(Msg::Edit(EditMsg::SetSelection { start: end, end }))
            }
            ConsoleCommand::Tone(tone) => {
                eprintln!("Applying {}...", tone);
                app.dispatch(Msg::Tone(ToneMsg::Apply(tone)));
                if !app.wait_idle(wait) {
                    app.dispatch(Msg::Tone(ToneMsg::Abandon));
                }
            }
            ConsoleCommand::Undo => app.dispatch(Msg::Edit(EditMsg::Undo)),
            ConsoleCommand::Reset => app.dispatch(Msg::Edit(EditMsg::Reset)),
            ConsoleCommand::Show => show(app.model()),
            ConsoleCommand::Tones => print_tones(),
            ConsoleCommand::Help => eprintln!("{}", CONSOLE_HELP),
            ConsoleCommand::Quit => break,
        }

        print_notifications(&app.take_notifications());
    }

    Ok(())
}

fn show(model: &AppModel) {
    let selection = model.selection();
    println!("{}", model.text());
    if selection.is_empty() {
        eprintln!(
            "-- caret at {}, {} undo step(s)",
            selection.start(),
            model.store.history().len()
        );
    } else {
        let selected = model
            .store
            .buffer()
            .slice(selection.as_range())
            .unwrap_or_default();
        eprintln!(
            "-- selected {} ({:?}), {} undo step(s)",
            selection,
            selected,
            model.store.history().len()
        );
    }
}
