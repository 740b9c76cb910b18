//! Interactive terminal session with the two catalog tabs.

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use catalog_core::ProductId;
use catalog_products::{missing_fields_error, DraftField};

use crate::dialog::Confirm;
use crate::frontend::render;
use crate::types::{RemoveOutcome, SubmitOutcome, ViewTab};
use crate::view_model::CatalogViewModel;

pub const HELP: &str = "\
commands:
  tab submit|list   switch tab
  new               fill in and submit a product
  submit            resubmit the pending draft
  search [text]     search products (blank shows all)
  delete <id>       delete a product
  refresh           reload all products
  help              show this text
  quit              leave";

/// Line-oriented user input shared by the command loop and the delete
/// confirmation.
pub struct TerminalInput<R> {
    lines: Mutex<Lines<R>>,
}

impl<R> TerminalInput<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }

    /// Next line of input, `None` at end of input.
    pub async fn next_line(&self) -> Option<String> {
        let mut lines = self.lines.lock().await;
        match lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                None
            }
        }
    }
}

impl TerminalInput<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R> Confirm for TerminalInput<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = std::io::stderr().flush();
        let answer = self.next_line().await.unwrap_or_default();
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Tab(ViewTab),
    New,
    Submit,
    Search(String),
    Delete(ProductId),
    Refresh,
    Help,
    Quit,
}

impl ShellCommand {
    /// Search text is everything after the first separator, spaces included.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "tab" => rest.trim().parse().map(ShellCommand::Tab),
            "new" => Ok(ShellCommand::New),
            "submit" => Ok(ShellCommand::Submit),
            "search" => Ok(ShellCommand::Search(rest.to_string())),
            "delete" | "rm" => rest
                .trim()
                .parse()
                .map(ShellCommand::Delete)
                .map_err(|e| format!("delete: {}", e)),
            "refresh" => Ok(ShellCommand::Refresh),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command '{}' (try help)", other)),
        }
    }
}

/// Run the session until `quit` or end of input.
pub async fn run<R, W>(
    vm: &CatalogViewModel,
    input: &TerminalInput<R>,
    out: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write,
{
    vm.mount().await;
    write!(out, "{}", render::view(&vm.snapshot()))?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = input.next_line().await else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match ShellCommand::parse(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => writeln!(out, "{}", HELP)?,
            Ok(command) => {
                execute(vm, input, out, command).await?;
                write!(out, "{}", render::view(&vm.snapshot()))?;
            }
            Err(msg) => writeln!(out, "{}", msg)?,
        }
    }

    Ok(())
}

async fn execute<R, W>(
    vm: &CatalogViewModel,
    input: &TerminalInput<R>,
    out: &mut W,
    command: ShellCommand,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write,
{
    match command {
        ShellCommand::Tab(tab) => vm.select_tab(tab),
        ShellCommand::New => {
            vm.select_tab(ViewTab::Submission);
            if fill_draft(vm, input, out).await? {
                report_submit(out, vm.submit_pending().await)?;
            } else {
                writeln!(out, "form left unfinished")?;
            }
        }
        ShellCommand::Submit => {
            vm.select_tab(ViewTab::Submission);
            report_submit(out, vm.submit_pending().await)?;
        }
        ShellCommand::Search(query) => {
            vm.select_tab(ViewTab::Listing);
            vm.search(&query).await;
        }
        ShellCommand::Delete(id) => match vm.remove(&id).await {
            RemoveOutcome::Removed => writeln!(out, "deleted #{}", id)?,
            RemoveOutcome::Declined => writeln!(out, "kept #{}", id)?,
            RemoveOutcome::Failed => {}
        },
        ShellCommand::Refresh => {
            vm.load_all().await;
        }
        ShellCommand::Help | ShellCommand::Quit => {}
    }
    Ok(())
}

/// Prompt for each field; required ones are asked again until non-blank.
/// Returns `false` if input ended first.
async fn fill_draft<R, W>(
    vm: &CatalogViewModel,
    input: &TerminalInput<R>,
    out: &mut W,
) -> std::io::Result<bool>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write,
{
    for field in DraftField::ALL {
        loop {
            write!(out, "{}: ", field.label())?;
            out.flush()?;
            let Some(value) = input.next_line().await else {
                return Ok(false);
            };
            if field.is_required() && value.is_empty() {
                writeln!(out, "{} is required", field.label())?;
                continue;
            }
            vm.update_draft(|draft| draft.set(field, value));
            break;
        }
    }
    Ok(true)
}

fn report_submit<W: Write>(out: &mut W, outcome: SubmitOutcome) -> std::io::Result<()> {
    match outcome {
        SubmitOutcome::Created(product) => writeln!(out, "created #{} {}", product.id, product.name),
        SubmitOutcome::Incomplete(missing) => writeln!(out, "{}", missing_fields_error(&missing)),
        SubmitOutcome::Failed => Ok(()),
    }
}
