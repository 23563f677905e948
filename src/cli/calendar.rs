use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::io::{self, IsTerminal};
use tracing::info;

use super::action_labels;
use super::args::{CalendarCliArgs, CalendarCommand};
use super::CliContext;
use crate::backend::{AutoDeployBotRequest, FetchEventsRequest};
use crate::status::{CalendarEvent, UiAction};

pub async fn handle_calendar_command(args: CalendarCliArgs, ctx: &CliContext) -> Result<()> {
    match args.command {
        CalendarCommand::Events {
            start_date,
            end_date,
            calendar_id,
        } => list_events(ctx, &start_date, end_date.as_deref(), calendar_id).await,
        CalendarCommand::Deploy {
            event_id,
            calendar_id,
            date,
        } => deploy_bot(ctx, &event_id, calendar_id, date.as_deref()).await,
        CalendarCommand::Delete {
            event_id,
            calendar_id,
            yes,
        } => delete_event(ctx, &event_id, calendar_id, yes).await,
    }
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date {:?}. Use format: YYYY-MM-DD", input))
}

/// Validate the date range and build the request body.
fn events_request(
    start_date: &str,
    end_date: Option<&str>,
    calendar_id: String,
) -> Result<FetchEventsRequest> {
    let start = parse_date(start_date)?;
    let end = end_date.map(parse_date).transpose()?;

    if let Some(end) = end {
        if end < start {
            bail!("End date {} is before start date {}", end, start);
        }
    }

    Ok(FetchEventsRequest {
        start_date: start.to_string(),
        end_date: end.map(|d| d.to_string()),
        calendar_id,
    })
}

async fn fetch_events(
    ctx: &CliContext,
    request: &FetchEventsRequest,
) -> Result<Vec<CalendarEvent>> {
    let list = ctx
        .backend()
        .fetch_calendar_events(request)
        .await
        .context("Failed to fetch calendar events")?;
    Ok(list.events)
}

async fn list_events(
    ctx: &CliContext,
    start_date: &str,
    end_date: Option<&str>,
    calendar_id: Option<String>,
) -> Result<()> {
    let calendar_id = calendar_id.unwrap_or_else(|| ctx.config.calendar.calendar_id.clone());
    let request = events_request(start_date, end_date, calendar_id)?;
    let events = fetch_events(ctx, &request).await?;

    if events.is_empty() {
        println!("No events found.");
        return Ok(());
    }

    println!("Found {} event(s):\n", events.len());
    for event in &events {
        for line in event_lines(event) {
            println!("{}", line);
        }
        println!("---");
    }

    Ok(())
}

async fn deploy_bot(
    ctx: &CliContext,
    event_id: &str,
    calendar_id: Option<String>,
    date: Option<&str>,
) -> Result<()> {
    let calendar_id = calendar_id.unwrap_or_else(|| ctx.config.calendar.calendar_id.clone());

    if let Some(date) = date {
        let request = events_request(date, None, calendar_id.clone())?;
        let events = fetch_events(ctx, &request).await?;
        let event = events
            .iter()
            .find(|event| event.event_id == event_id)
            .ok_or_else(|| anyhow!("Event {} not found on {}", event_id, request.start_date))?;

        if !event.actions().contains(&UiAction::DeployBot) {
            bail!(
                "Event '{}' has no meeting link, so no notetaker can join it",
                event.title_or_default()
            );
        }
    }

    let response = ctx
        .backend()
        .auto_deploy_bot(&AutoDeployBotRequest {
            event_id: event_id.to_string(),
            calendar_id,
        })
        .await
        .with_context(|| format!("Failed to deploy notetaker to event {}", event_id))?;

    info!("Deployed notetaker {} to event {}", response.notetaker_id, event_id);

    if let Some(message) = &response.message {
        println!("{}", message);
    }
    println!("Notetaker ID: {}", response.notetaker_id);
    println!(
        "Track it with: notetaker recordings watch {}",
        response.notetaker_id
    );
    Ok(())
}

async fn delete_event(
    ctx: &CliContext,
    event_id: &str,
    calendar_id: Option<String>,
    yes: bool,
) -> Result<()> {
    let calendar_id = calendar_id.unwrap_or_else(|| ctx.config.calendar.calendar_id.clone());

    if !yes {
        if !io::stdin().is_terminal() {
            bail!("Refusing to delete without confirmation. Pass --yes to skip the prompt.");
        }
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Delete event {} and its recordings from calendar {}?",
                event_id, calendar_id
            ))
            .default(false)
            .interact()?;
        if !proceed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let response = ctx
        .backend()
        .delete_calendar_event(event_id, &calendar_id)
        .await
        .with_context(|| format!("Failed to delete event {}", event_id))?;

    println!(
        "{}",
        response
            .message
            .unwrap_or_else(|| format!("Event {} deleted", event_id))
    );
    if response.recordings_deleted > 0 {
        println!("Recordings deleted: {}", response.recordings_deleted);
    }
    if let Some(warning) = response.warning {
        println!("Warning: {}", warning);
    }
    Ok(())
}

fn event_lines(event: &CalendarEvent) -> Vec<String> {
    let mut lines = vec![format!("{}  {}", event.event_id, event.title_or_default())];

    match (&event.start_time, &event.end_time) {
        (Some(start), Some(end)) => lines.push(format!("  When: {} - {}", start, end)),
        (Some(start), None) => lines.push(format!("  When: {}", start)),
        _ => {}
    }
    match event.meeting_link() {
        Some(link) => {
            let provider = event.conferencing_provider.as_deref().unwrap_or("Unknown");
            lines.push(format!("  Link: {} ({})", link, provider));
        }
        None => lines.push("  Link: none".to_string()),
    }
    lines.push(format!("  Actions: {}", action_labels(event.actions())));

    lines
}
