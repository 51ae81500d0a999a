use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use inquire::Text;

use schedulerBot::models::event::CalendarEvent;
use schedulerBot::service::scheduling_service::{SchedulingService, SlotProposal};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a meeting request and pick one of the offered slots
    Request {
        name: String,
        email: String,
        message: String,
    },
    /// Show the calendar for the next N days
    Calendar {
        #[arg(default_value_t = 7)]
        days: i64,
    },
    /// Write the calendar export as JSON
    Export {
        #[arg(default_value = "calendar_export.json")]
        path: String,
    },
    /// Run the scripted demo against a seeded dummy calendar
    Demo {
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

pub async fn cli(service: Arc<SchedulingService>) {
    // Fine to panic here
    let cli = Cli::parse();
    match cli.command {
        Commands::Request {
            name,
            email,
            message,
        } => {
            request_flow(&service, &name, &email, &message).await;
        }
        Commands::Calendar { days } => {
            print_calendar(&service, days).await;
        }
        Commands::Export { path } => {
            export_calendar(&service, &path).await;
        }
        Commands::Demo { seed } => {
            run_demo(&service, seed).await;
        }
    }
}

async fn request_flow(service: &SchedulingService, name: &str, email: &str, message: &str) {
    let proposal = match service.process_request(name, email, message, Utc::now()).await {
        Ok(proposal) => proposal,
        Err(err) => {
            println!("Failed to process meeting request: {}", err);
            return;
        }
    };

    print_proposal(name, message, &proposal);
    if proposal.slots.is_empty() {
        println!(
            "No available slots found in the next {} days",
            service.policy().horizon_days
        );
        let _ = service.abandon(&proposal.request_id).await;
        return;
    }

    let answer = Text::new("Pick a slot number (empty to cancel):").prompt();
    let choice = match answer {
        Ok(text) => text.trim().parse::<usize>().ok(),
        Err(_) => None,
    };

    let Some(number) = choice.filter(|n| *n >= 1) else {
        let _ = service.abandon(&proposal.request_id).await;
        println!("Request cancelled.");
        return;
    };

    match service.confirm(&proposal.request_id, number - 1).await {
        Ok(event) => print_confirmation(name, &event),
        Err(err) => println!("Failed to confirm meeting: {}", err),
    }
}

fn print_proposal(name: &str, message: &str, proposal: &SlotProposal) {
    println!("{}", "=".repeat(60));
    println!("Processing meeting request from {}", name);
    println!("Message: {}", message);
    println!("{}", "=".repeat(60));
    println!("Extracted information:");
    println!("   Duration: {} minutes", proposal.duration_minutes);
    println!("   Purpose: {}", proposal.purpose);

    if proposal.slots.is_empty() {
        return;
    }
    println!("Available time slots:");
    for (i, slot) in proposal.slots.iter().enumerate() {
        println!("   {}. {}", i + 1, slot.format("%A, %B %d, %Y at %I:%M %p"));
    }
}

fn print_confirmation(name: &str, event: &CalendarEvent) {
    println!("Meeting confirmed!");
    println!("   With: {}", name);
    println!(
        "   Time: {}",
        event.start_time.format("%A, %B %d, %Y at %I:%M %p")
    );
    println!(
        "   Duration: {} minutes",
        (event.end_time - event.start_time).num_minutes()
    );
}

async fn print_calendar(service: &SchedulingService, days: i64) {
    let events = service.upcoming_events(days, Utc::now()).await;

    println!("Calendar for next {} days:", days);
    println!("{}", "=".repeat(60));

    let mut current_date: Option<NaiveDate> = None;
    for event in &events {
        let event_date = event.start_time.date_naive();
        if current_date != Some(event_date) {
            current_date = Some(event_date);
            println!();
            println!("{}", event.start_time.format("%A, %B %d, %Y"));
            println!("{}", "-".repeat(60));
        }
        println!(
            "  {} - {} | {}",
            event.start_time.format("%I:%M %p"),
            event.end_time.format("%I:%M %p"),
            event.title
        );
    }
    if events.is_empty() {
        println!("  (no events)");
    }
}

async fn export_calendar(service: &SchedulingService, path: &str) {
    let export = service.export().await;
    let payload = match serde_json::to_string_pretty(&export) {
        Ok(payload) => payload,
        Err(err) => {
            println!("Failed to serialize calendar: {}", err);
            return;
        }
    };
    if let Err(err) = std::fs::write(path, payload) {
        println!("Failed to write {}: {}", path, err);
        return;
    }
    println!("Calendar exported to {}", path);
}

/// Scripted run of the whole flow: seeded dummy calendar, three meeting
/// requests confirmed into different slots, calendar view and JSON export.
async fn run_demo(service: &SchedulingService, seed: u64) {
    println!("Calendar scheduling bot demo");
    println!("{}", "=".repeat(60));

    let reference = Utc::now();
    let created = service.seed_demo(reference, seed).await;
    println!("Seeded {} dummy events (seed {})", created, seed);

    print_calendar(service, 7).await;

    let requests = [
        (
            "John Smith",
            "john.smith@client.com",
            "Hi, I'd like to discuss the Q1 project proposal. Can we meet for an hour?",
            0usize,
        ),
        (
            "Sarah Johnson",
            "sarah.j@partner.com",
            "Need to talk about the API integration. 30 minutes should be enough.",
            1,
        ),
        (
            "Mike Chen",
            "mike.chen@startup.io",
            "Can we have a quick 45-minute meeting regarding the partnership opportunity?",
            2,
        ),
    ];

    for (name, email, message, slot_index) in requests {
        let proposal = match service.process_request(name, email, message, reference).await {
            Ok(proposal) => proposal,
            Err(err) => {
                println!("Failed to process meeting request: {}", err);
                continue;
            }
        };
        print_proposal(name, message, &proposal);

        if proposal.slots.is_empty() {
            println!(
                "No available slots found in the next {} days",
                service.policy().horizon_days
            );
            let _ = service.abandon(&proposal.request_id).await;
            continue;
        }

        let chosen = slot_index.min(proposal.slots.len() - 1);
        match service.confirm(&proposal.request_id, chosen).await {
            Ok(event) => print_confirmation(name, &event),
            Err(err) => println!("Failed to confirm meeting: {}", err),
        }
    }

    println!();
    print_calendar(service, 7).await;
    export_calendar(service, "calendar_export.json").await;
}
