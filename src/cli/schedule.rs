use anyhow::{Context, Result};
use tracing::info;

use super::args::ScheduleCliArgs;
use super::CliContext;
use crate::backend::ScheduleMeetingResponse;
use crate::meeting::{plan_meeting, MeetingPlan};

pub async fn handle_schedule_command(args: ScheduleCliArgs, ctx: &CliContext) -> Result<()> {
    let plan = plan_meeting(&args.title, &args.link, &args.start)?;

    info!(
        "Scheduling '{}' on {} at {}",
        plan.request.title, plan.provider, plan.request.start_time
    );

    let response = ctx
        .backend()
        .schedule_meeting(&plan.request)
        .await
        .context("Failed to schedule meeting")?;

    for line in schedule_lines(&plan, &response) {
        println!("{}", line);
    }
    Ok(())
}

fn schedule_lines(plan: &MeetingPlan, response: &ScheduleMeetingResponse) -> Vec<String> {
    let mut lines = vec![response
        .message
        .clone()
        .unwrap_or_else(|| format!("Scheduled '{}'", plan.request.title))];

    lines.push(format!("Start: {}", plan.request.start_time));
    lines.push(format!("Provider: {}", plan.provider));
    if plan.provider.requires_direct_invite() {
        lines.push(
            "The notetaker is invited to Zoom directly, not through the calendar event."
                .to_string(),
        );
    }

    if let Some(event_id) = &response.event_id {
        lines.push(format!("Event ID: {}", event_id));
    }
    if let Some(notetaker_id) = &response.notetaker_id {
        lines.push(format!("Notetaker ID: {}", notetaker_id));
    }
    if let Some(link) = &response.calendar_link {
        lines.push(format!("Calendar: {}", link));
    }

    if !response.next_steps.is_empty() {
        lines.push(String::new());
        lines.push("Next steps:".to_string());
        lines.extend(response.next_steps.iter().map(|step| format!("  - {}", step)));
    }

    lines
}
