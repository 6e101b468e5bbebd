//! Command-line walkthrough of the conversationalist core.
//!
//! Loads the sample catalog, prints the events and people screens, registers
//! a demo visitor for an event and re-centers the map on a searched city.

use anyhow::Context;
use conversationalist::{
    Catalog, Choice, Config, EventId, EventListing, EventQuery, EventType, PeopleQuery, SeedData,
};
use conversationalist_core::environment::{Clock, SystemClock};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting The Conversationalist demo");

    let clock = Arc::new(SystemClock);
    let seed = SeedData::load(clock.now()).context("failed to load seed data")?;
    let mut catalog = Catalog::new(seed, clock, &config);

    println!("=== Upcoming events ===\n");
    if let EventListing::Matches(events) = catalog.events(&EventQuery::default()) {
        for event in events {
            println!(
                "  {} [{}] {} ({}, {}/{})",
                event.date.format("%b %e"),
                event.kind.label(),
                event.title,
                event.venue.location.area,
                event.registered_count(),
                event.capacity
            );
        }
    }

    println!("\n=== Workshops about listening ===\n");
    match catalog.events(&EventQuery::new(Choice::Only(EventType::Workshop), "listening")) {
        EventListing::Matches(events) => {
            for event in events {
                println!("  {}", event.title);
            }
        },
        EventListing::NoMatches => println!("  No events match your filters."),
        EventListing::NotLoaded => println!("  No events loaded."),
    }

    println!("\n=== People interested in storytelling ===\n");
    let mut people = PeopleQuery::default();
    people.toggle_interest("Storytelling");
    for user in catalog.people(&people) {
        println!("  {} ({})", user.display_name, user.location.area);
    }

    println!("\n=== Registering for event 1 ===\n");
    let event_id = EventId::new("1");
    let event = catalog
        .register_for_event(&event_id)
        .context("registration failed")?;
    let seats = catalog.event_seats(&event_id)?;
    if let Some(me) = catalog.current_user() {
        println!("  Signed in as {} ({})", me.display_name, me.id);
    }
    println!(
        "  {}: {} registered, {} spots left",
        event.title, seats.registered, seats.remaining
    );

    if let Err(error) = catalog.register_for_event(&event_id) {
        println!("  Registering again: {error}");
    }

    println!("\n=== Map ===\n");
    let view = catalog.reset_view();
    println!("  Country view: {:?} zoom {}", view.center, view.zoom);
    if let Some(city) = catalog.search_city("phil").first() {
        let view = catalog.resolve_city(city);
        println!("  {}: {:?} zoom {}", city.label(), view.center, view.zoom);
    }
    for circle in catalog.density() {
        println!("  {}, {}: {}", circle.area, circle.city, circle.caption());
    }

    info!("Demo complete");
    Ok(())
}
