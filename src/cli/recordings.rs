use anyhow::{anyhow, bail, Context, Result};
use arboard::Clipboard;
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::time::Duration;
use tracing::{info, warn};

use super::args::{RecordingsCliArgs, RecordingsCommand};
use super::{action_labels, ensure_allowed, CliContext};
use crate::backend::{watch_status, WatchError};
use crate::display::RecordingView;
use crate::status::{classify, CanonicalState, StatusRecord, UiAction};

pub async fn handle_recordings_command(args: RecordingsCliArgs, ctx: &CliContext) -> Result<()> {
    match args.command {
        RecordingsCommand::List { full } => list_recordings(ctx, full).await,
        RecordingsCommand::Show { id } => show_recording(ctx, &id).await,
        RecordingsCommand::Watch {
            id,
            interval,
            timeout,
        } => watch_recording(ctx, &id, interval, timeout).await,
        RecordingsCommand::CopyId { id } => copy_id(ctx, &id).await,
        RecordingsCommand::Delete { id, yes } => delete_recording(ctx, &id, yes).await,
    }
}

async fn fetch_record(ctx: &CliContext, id: &str) -> Result<StatusRecord> {
    ctx.backend()
        .transcript_status(id)
        .await
        .with_context(|| format!("Failed to fetch status for notetaker {}", id))
}

async fn list_recordings(ctx: &CliContext, full: bool) -> Result<()> {
    let list = ctx
        .backend()
        .list_recordings()
        .await
        .context("Failed to fetch recordings")?;

    if list.recordings.is_empty() {
        println!("No recordings yet.");
        return Ok(());
    }

    println!("Found {} recording(s):\n", list.recordings.len());

    for record in &list.recordings {
        let view = RecordingView::from_record(record, ctx.config.display.preview_chars);
        for line in summary_lines(&view, full) {
            println!("{}", line);
        }
        println!("---");
    }

    Ok(())
}

async fn show_recording(ctx: &CliContext, id: &str) -> Result<()> {
    let record = fetch_record(ctx, id).await?;
    let view = RecordingView::from_record(&record, ctx.config.display.preview_chars);
    for line in detail_lines(&view) {
        println!("{}", line);
    }
    Ok(())
}

async fn watch_recording(
    ctx: &CliContext,
    id: &str,
    interval: Option<u64>,
    timeout: Option<u64>,
) -> Result<()> {
    let mut options = ctx.config.watch.options();
    if let Some(secs) = interval {
        options.poll_interval = Duration::from_secs(secs.max(1));
    }
    if let Some(secs) = timeout {
        options.timeout = Duration::from_secs(secs);
    }

    let pb = create_spinner();
    pb.set_message(format!("Waiting for notetaker {}...", id));

    let result = watch_status(ctx.backend(), id, &options, |_, state| {
        pb.set_message(format!("{} ({})", state.label, id));
    })
    .await;
    pb.finish_and_clear();

    let record = match result {
        Ok(record) => record,
        Err(WatchError::TimedOut { last, .. }) => {
            if let Some(record) = last {
                println!("Last known status: {}", classify(&record).label);
            }
            bail!(
                "Notetaker {} is still in progress after {} seconds",
                id,
                options.timeout.as_secs()
            );
        }
        Err(err) => return Err(err).context("Watching notetaker failed"),
    };

    let view = RecordingView::from_record(&record, ctx.config.display.preview_chars);
    for line in detail_lines(&view) {
        println!("{}", line);
    }
    Ok(())
}

async fn copy_id(ctx: &CliContext, id: &str) -> Result<()> {
    let record = fetch_record(ctx, id).await?;
    ensure_allowed(&classify(&record), UiAction::CopyId)?;

    match copy_to_clipboard(&record.notetaker_id) {
        Ok(()) => println!("Copied notetaker ID {} to clipboard", record.notetaker_id),
        Err(err) => {
            warn!("{}", err);
            println!("{}", record.notetaker_id);
        }
    }
    Ok(())
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        Clipboard::new().map_err(|e| anyhow!("Failed to initialize clipboard: {}", e))?;
    clipboard
        .set_text(text)
        .map_err(|e| anyhow!("Failed to copy to clipboard: {}", e))?;
    Ok(())
}

async fn delete_recording(ctx: &CliContext, id: &str, yes: bool) -> Result<()> {
    let record = fetch_record(ctx, id).await?;
    let state = classify(&record);
    ensure_allowed(&state, UiAction::Delete)?;

    if !yes {
        if !io::stdin().is_terminal() {
            bail!("Refusing to delete without confirmation. Pass --yes to skip the prompt.");
        }
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete recording {} ({})?", id, state.label))
            .default(false)
            .interact()?;
        if !proceed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let response = ctx
        .backend()
        .delete_recording(id)
        .await
        .with_context(|| format!("Failed to delete recording {}", id))?;

    info!("Deleted recording {}", id);
    println!(
        "{}",
        response
            .message
            .unwrap_or_else(|| format!("Recording {} deleted", id))
    );
    Ok(())
}

fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {elapsed} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Compact listing: id, label, optional schedule, actions, and either the
/// preview or the full transcript.
fn summary_lines(view: &RecordingView, full: bool) -> Vec<String> {
    let mut lines = vec![format!("{}  [{}]", view.notetaker_id, view.state.label)];

    if let Some(time) = &view.scheduled_time {
        lines.push(format!("  Scheduled: {}", time));
    }
    lines.push(format!("  Actions: {}", action_labels(view.state.actions)));

    let text = if full {
        view.transcript.as_deref()
    } else {
        view.preview.as_deref()
    };
    if let Some(text) = text {
        lines.push(format!("  Transcript: {}", text));
    }

    lines
}

fn detail_lines(view: &RecordingView) -> Vec<String> {
    let mut lines = vec![
        format!("Notetaker: {}", view.notetaker_id),
        format!("Status: {} ({})", view.state.label, view.state.state.as_str()),
    ];

    if let Some(time) = &view.scheduled_time {
        lines.push(format!("Scheduled: {}", time));
    }
    if let Some(message) = &view.message {
        lines.push(format!("Message: {}", message));
    }
    // Failed labels already carry the reason.
    if view.state.state != CanonicalState::Failed {
        if let Some(reason) = &view.reason {
            lines.push(format!("Reason: {}", reason));
        }
    }
    lines.push(format!("Actions: {}", action_labels(view.state.actions)));

    if view.state.allows(UiAction::ViewFullTranscript) {
        match &view.transcript {
            Some(text) => lines.push(format!("\n--- Transcript ---\n{}", text)),
            None => lines.push("\nNo transcript content available.".to_string()),
        }
    }

    lines
}
