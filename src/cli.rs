//! Command-line argument parsing for the tone picker
//!
//! Supports:
//! - One-shot rewriting of a file or stdin, optionally scoped to a range
//! - An interactive console driving the same session model
//! - Listing the tone catalog and writing a default config

use clap::Parser;
use std::path::PathBuf;

use crate::editable::SelectionRange;
use crate::tone::ToneId;

/// Rewrite text in a chosen tone
#[derive(Parser, Debug)]
#[command(name = "tone-picker", version, about = "Rewrite text in a chosen tone")]
pub struct CliArgs {
    /// File to read (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Tone to apply (e.g. professional-concise)
    #[arg(short, long, value_name = "ID")]
    pub tone: Option<ToneId>,

    /// Start of the range to rewrite (character offset)
    #[arg(long, value_name = "N", requires = "end")]
    pub start: Option<usize>,

    /// End of the range to rewrite (character offset, exclusive)
    #[arg(long, value_name = "N", requires = "start")]
    pub end: Option<usize>,

    /// Use this config file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Start an interactive session
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the tone catalog and exit
    #[arg(long)]
    pub list_tones: bool,

    /// Write the default config file and exit
    #[arg(long)]
    pub init_config: bool,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    ListTones,
    InitConfig,
    Interactive,
    OneShot {
        tone: ToneId,
        selection: Option<SelectionRange>,
    },
}

impl CliArgs {
    /// Convert parsed CLI args into a run mode
    pub fn run_mode(&self) -> Result<RunMode, String> {
        if self.list_tones {
            return Ok(RunMode::ListTones);
        }
        if self.init_config {
            return Ok(RunMode::InitConfig);
        }
        if self.interactive {
            return Ok(RunMode::Interactive);
        }

        let tone = self
            .tone
            .ok_or_else(|| "--tone is required unless --interactive is given".to_string())?;
        let selection = match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => {
                return Err(format!("--start ({}) is after --end ({})", start, end));
            }
            (Some(start), Some(end)) => Some(SelectionRange::new(start, end)),
            _ => None,
        };
        Ok(RunMode::OneShot { tone, selection })
    }
}

/// One line typed into the interactive console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Replace the whole text
    Text(String),
    /// Append a line to the text
    Append(String),
    Select { start: usize, end: usize },
    ClearSelection,
    Tone(ToneId),
    Undo,
    Reset,
    Show,
    Tones,
    Help,
    Quit,
}

pub const CONSOLE_HELP: &str = "\
Commands:
  text <s>          replace the whole text
  append <s>        append a line to the text
  select <a> <b>    select characters a..b
  clear-selection   drop the selection (whole text is the target)
  tone <id>         apply a tone (see `tones`)
  undo              restore the previous text
  reset             clear the text (undoable)
  show              print text, selection and history depth
  tones             list tone ids
  help              this message
  quit              exit";

impl ConsoleCommand {
    /// Parse a console line. Empty lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match trimmed.split_once(' ') {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        let cmd = match word {
            "text" => ConsoleCommand::Text(rest.to_string()),
            "append" => ConsoleCommand::Append(rest.to_string()),
            "select" => {
                let mut parts = rest.split_whitespace();
                let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
                    return Err("usage: select <start> <end>".to_string());
                };
                let start = a
                    .parse()
                    .map_err(|_| format!("invalid offset '{}'", a))?;
                let end = b
                    .parse()
                    .map_err(|_| format!("invalid offset '{}'", b))?;
                ConsoleCommand::Select { start, end }
            }
            "clear-selection" => ConsoleCommand::ClearSelection,
            "tone" => ConsoleCommand::Tone(rest.parse().map_err(|e| format!("{}", e))?),
            "undo" => ConsoleCommand::Undo,
            "reset" => ConsoleCommand::Reset,
            "show" => ConsoleCommand::Show,
            "tones" => ConsoleCommand::Tones,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            other => return Err(format!("unknown command '{}' (try `help`)", other)),
        };
        Ok(Some(cmd))
    }
}
