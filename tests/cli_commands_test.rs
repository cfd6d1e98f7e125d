use chrono::NaiveDate;
use clap::Parser;
use httpmock::prelude::*;
use naild_studio::app::commands;
use naild_studio::{ApiClient, CliConfig, ReadFailurePolicy, StudioSettings, Toasts};
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    let mut settings = StudioSettings::default();
    settings.api.base_url = server.url("/api");
    ApiClient::new(&settings).unwrap()
}

async fn run(server: &MockServer, args: &[&str], toasts: &Toasts) -> (bool, String) {
    let cli = CliConfig::try_parse_from(args).unwrap();
    let client = client_for(server);
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let mut out = Vec::new();
    let ok = commands::run(
        &cli.command,
        &client,
        ReadFailurePolicy::Fallback,
        toasts,
        today,
        &mut out,
    )
    .await
    .is_ok();
    (ok, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn book_prints_the_confirmation() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/services/");
        then.status(200).json_body(json!([{
            "id": 1,
            "name": "Classic Manicure",
            "category": "nails",
            "price": "35.00",
            "duration_minutes": 60
        }]));
    });
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/booking/");
        then.status(201).json_body(json!({"id": 21}));
    });

    let toasts = Toasts::new();
    let (ok, out) = run(
        &server,
        &[
            "naild", "book", "--service-id", "1", "--date", "2025-03-10", "--time", "14:00",
            "--name", "Jane Doe", "--email", "jane@example.com", "--phone", "08012345678",
        ],
        &toasts,
    )
    .await;

    assert!(ok);
    create.assert();
    assert!(out.contains("Service:  Classic Manicure"));
    assert!(out.contains("Date:     Monday, March 10, 2025"));
    assert!(out.contains("Time:     2:00 PM"));
    assert!(out.contains("Reference: #21"));
    assert_eq!(toasts.len(), 1);
}

#[tokio::test]
async fn services_marks_fallback_output() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/services/");
        then.status(500);
    });

    let toasts = Toasts::new();
    let (ok, out) = run(&server, &["naild", "services", "--category", "lashes"], &toasts).await;

    assert!(ok);
    assert!(out.contains("showing sample data"));
    assert!(out.contains("Volume Lash Extensions"));
    assert!(!out.contains("Classic Manicure"));
}

#[tokio::test]
async fn review_without_rating_fails_without_a_request() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/testimonials/");
        then.status(201).json_body(json!({}));
    });

    let toasts = Toasts::new();
    let (ok, _) = run(
        &server,
        &["naild", "review", "--name", "Ada", "--rating", "0", "--text", "Great"],
        &toasts,
    )
    .await;

    assert!(!ok);
    create.assert_hits(0);
    assert_eq!(toasts.latest().unwrap().message, "Please select a rating");
}

#[tokio::test]
async fn faq_search_prints_matching_entries_only() {
    let server = MockServer::start();
    let toasts = Toasts::new();

    let (ok, out) = run(&server, &["naild", "faq", "--search", "Gift"], &toasts).await;
    assert!(ok);
    assert!(out.contains("== Booking & Policies =="));
    assert!(out.contains("Q: Do you offer gift certificates?"));
    assert!(!out.contains("== General =="));

    let (ok, out) = run(&server, &["naild", "faq", "--search", "tattoo"], &toasts).await;
    assert!(ok);
    assert!(out.contains("No results found"));
}

#[tokio::test]
async fn bookings_lists_requests() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/booking/");
        then.status(200).json_body(json!([{
            "id": 4,
            "customer_name": "Jane Doe",
            "service": {
                "id": 1,
                "name": "Classic Manicure",
                "category": "nails",
                "price": "35.00",
                "duration_minutes": 60
            },
            "preferred_date": "2025-03-10",
            "preferred_time": "14:00",
            "status": "pending"
        }]));
    });

    let toasts = Toasts::new();
    let (ok, out) = run(&server, &["naild", "bookings"], &toasts).await;

    assert!(ok);
    list.assert();
    assert!(out.contains("#4"));
    assert!(out.contains("Jane Doe"));
    assert!(out.contains("Classic Manicure"));
    assert!(out.contains("Monday, March 10, 2025 14:00"));
}
