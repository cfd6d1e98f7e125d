use chrono::NaiveDate;
use httpmock::prelude::*;
use naild_studio::core::content::DataSource;
use naild_studio::core::toast::ToastLevel;
use naild_studio::core::wizard::{
    CustomerDetails, BOOKING_FAILURE_MESSAGE, BOOKING_SUCCESS_MESSAGE,
};
use naild_studio::domain::model::TimeSlot;
use naild_studio::{
    ApiClient, BookingWizard, ReadFailurePolicy, StudioSettings, Toasts, WizardStep,
};
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    let mut settings = StudioSettings::default();
    settings.api.base_url = server.url("/api");
    ApiClient::new(&settings).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn jane() -> CustomerDetails {
    CustomerDetails {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "08012345678".to_string(),
        notes: String::new(),
    }
}

fn expected_payload() -> serde_json::Value {
    json!({
        "service_id": 1,
        "preferred_date": "2025-03-10",
        "preferred_time": "14:00",
        "customer_name": "Jane Doe",
        "customer_email": "jane@example.com",
        "customer_phone": "08012345678",
        "notes": ""
    })
}

fn mock_services(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/api/services/");
        then.status(200).json_body(json!([{
            "id": 1,
            "name": "Classic Manicure",
            "category": "nails",
            "description": "Professional nail care",
            "price": "35.00",
            "duration_minutes": 60,
            "is_featured": true
        }]));
    });
}

async fn wizard_at_details(client: &ApiClient) -> BookingWizard {
    let mut wizard = BookingWizard::new(today());
    wizard
        .load_services(client, ReadFailurePolicy::Fallback)
        .await
        .unwrap();
    wizard.select_service_by_id(1).unwrap();
    wizard
        .select_date(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        .unwrap();
    wizard.select_time("14:00".parse::<TimeSlot>().unwrap()).unwrap();
    *wizard.details_mut() = jane();
    wizard
}

#[tokio::test]
async fn books_classic_manicure() {
    let server = MockServer::start();
    mock_services(&server);
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/booking/")
            .json_body(expected_payload());
        then.status(201)
            .json_body(json!({"id": 17, "status": "pending", "preferred_date": "2025-03-10"}));
    });

    let client = client_for(&server);
    let toasts = Toasts::new();
    let mut wizard = wizard_at_details(&client).await;
    assert_eq!(wizard.services_source(), Some(DataSource::Live));
    assert_eq!(wizard.step(), WizardStep::EnterDetails);

    let summary = wizard.submit(&client, &toasts).await.unwrap().clone();

    create.assert();
    assert_eq!(summary.service_name, "Classic Manicure");
    assert_eq!(summary.date, "Monday, March 10, 2025");
    assert_eq!(summary.time, "2:00 PM");
    assert_eq!(summary.price, "₦35");
    assert_eq!(summary.estimated_end, "3:15 PM");
    assert_eq!(summary.booking_id, Some(17));
    assert_eq!(wizard.step(), WizardStep::Confirmed);

    let toast = toasts.latest().unwrap();
    assert_eq!(toast.level, ToastLevel::Success);
    assert_eq!(toast.message, BOOKING_SUCCESS_MESSAGE);
}

#[tokio::test]
async fn failed_submission_keeps_everything() {
    let server = MockServer::start();
    mock_services(&server);
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/booking/");
        then.status(500).body("boom");
    });

    let client = client_for(&server);
    let toasts = Toasts::new();
    let mut wizard = wizard_at_details(&client).await;

    assert!(wizard.submit(&client, &toasts).await.is_err());

    create.assert_hits(1);
    assert_eq!(wizard.step(), WizardStep::EnterDetails);
    assert_eq!(wizard.details(), &jane());
    assert_eq!(wizard.selected_service().map(|s| s.id), Some(1));
    assert!(wizard.summary().is_none());
    let toast = toasts.latest().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, BOOKING_FAILURE_MESSAGE);
}

#[tokio::test]
async fn navigating_back_and_forth_sends_the_same_request() {
    let server = MockServer::start();
    mock_services(&server);
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/booking/")
            .json_body(expected_payload());
        then.status(201).json_body(json!({"id": 18}));
    });

    let client = client_for(&server);
    let toasts = Toasts::new();
    let mut wizard = wizard_at_details(&client).await;
    let before = wizard.booking_request().unwrap();

    wizard.back().unwrap();
    wizard.back().unwrap();
    assert_eq!(wizard.step(), WizardStep::SelectDate);
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), WizardStep::EnterDetails);
    assert_eq!(wizard.details(), &jane());
    assert_eq!(wizard.booking_request().unwrap(), before);

    wizard.submit(&client, &toasts).await.unwrap();
    create.assert();
}

#[tokio::test]
async fn invalid_details_never_reach_the_api() {
    let server = MockServer::start();
    mock_services(&server);
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/booking/");
        then.status(201).json_body(json!({"id": 1}));
    });

    let client = client_for(&server);
    let toasts = Toasts::new();
    let mut wizard = wizard_at_details(&client).await;
    wizard.details_mut().email = "not-an-email".to_string();

    let result = wizard.submit(&client, &toasts).await;

    tokio_test::assert_err!(result);
    create.assert_hits(0);
    assert_eq!(wizard.step(), WizardStep::EnterDetails);
    assert_eq!(toasts.latest().map(|t| t.level), Some(ToastLevel::Error));
}

#[tokio::test]
async fn unreachable_service_list_falls_back_to_samples() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/services/");
        then.status(503);
    });

    let client = client_for(&server);
    let mut wizard = BookingWizard::new(today());
    wizard
        .load_services(&client, ReadFailurePolicy::Fallback)
        .await
        .unwrap();

    assert_eq!(wizard.services_source(), Some(DataSource::Fallback));
    assert_eq!(wizard.services().len(), 8);
    tokio_test::assert_ok!(wizard.select_service_by_id(1));
}

#[tokio::test]
async fn book_another_starts_over_with_the_same_services() {
    let server = MockServer::start();
    mock_services(&server);
    server.mock(|when, then| {
        when.method(POST).path("/api/booking/");
        then.status(201).json_body(json!({"id": 19}));
    });

    let client = client_for(&server);
    let toasts = Toasts::new();
    let mut wizard = wizard_at_details(&client).await;
    wizard.submit(&client, &toasts).await.unwrap();

    wizard.book_another().unwrap();

    assert_eq!(wizard.step(), WizardStep::SelectService);
    assert!(wizard.selected_service().is_none());
    assert_eq!(wizard.details(), &CustomerDetails::default());
    assert_eq!(wizard.services().len(), 1);
}

async fn submit_against(status: u16, body: &'static str) -> (BookingWizard, Toasts, usize) {
    let server = MockServer::start();
    mock_services(&server);
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/booking/");
        then.status(status).body(body);
    });

    let client = client_for(&server);
    let toasts = Toasts::new();
    let mut wizard = wizard_at_details(&client).await;
    let _ = wizard.submit(&client, &toasts).await;
    (wizard, toasts, create.hits())
}

#[tokio::test]
async fn any_accepted_write_confirms_the_booking() {
    for body in [r#"{"status":"pending"}"#, "", r#"{"message":"created"}"#, "Created"] {
        let (wizard, toasts, writes) = submit_against(201, body).await;

        assert_eq!(writes, 1, "body {:?}", body);
        assert_eq!(wizard.step(), WizardStep::Confirmed, "body {:?}", body);
        let summary = wizard.summary().unwrap();
        assert_eq!(summary.service_name, "Classic Manicure");
        assert_eq!(summary.booking_id, None);
        assert_eq!(toasts.latest().unwrap().message, BOOKING_SUCCESS_MESSAGE);
    }
}

#[tokio::test]
async fn string_booking_id_is_kept_as_reference() {
    let (wizard, _, _) = submit_against(201, r#"{"id":"17"}"#).await;

    assert_eq!(wizard.step(), WizardStep::Confirmed);
    assert_eq!(wizard.summary().unwrap().booking_id, Some(17));
}

#[tokio::test]
async fn unreachable_api_on_submit_keeps_the_details() {
    let mut settings = StudioSettings::default();
    settings.api.base_url = "http://127.0.0.1:1/api".to_string();
    settings.api.timeout_seconds = 2;
    let client = ApiClient::new(&settings).unwrap();
    let toasts = Toasts::new();

    let mut wizard = BookingWizard::new(today());
    wizard.set_services(naild_studio::core::samples::services());
    wizard.select_service_by_id(1).unwrap();
    wizard
        .select_date(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        .unwrap();
    wizard.select_time("14:00".parse::<TimeSlot>().unwrap()).unwrap();
    *wizard.details_mut() = jane();

    let err = wizard.submit(&client, &toasts).await.unwrap_err();

    assert!(matches!(err, naild_studio::StudioError::Network(_)));
    assert_eq!(wizard.step(), WizardStep::EnterDetails);
    assert_eq!(wizard.details(), &jane());
    let toast = toasts.latest().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, BOOKING_FAILURE_MESSAGE);
}

#[tokio::test]
async fn preselected_service_books_through_to_confirmation() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/booking/")
            .json_body(expected_payload());
        then.status(201).json_body(json!({"id": 30}));
    });

    let client = client_for(&server);
    let toasts = Toasts::new();
    let manicure = naild_studio::core::samples::services().remove(0);
    let mut wizard = BookingWizard::preselected(manicure, today());
    assert_eq!(wizard.step(), WizardStep::SelectDate);

    wizard
        .select_date(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        .unwrap();
    wizard.select_time("14:00".parse::<TimeSlot>().unwrap()).unwrap();
    *wizard.details_mut() = jane();
    let summary = wizard.submit(&client, &toasts).await.unwrap().clone();

    create.assert();
    assert_eq!(summary.service_name, "Classic Manicure");
    assert_eq!(summary.date, "Monday, March 10, 2025");
    assert_eq!(summary.time, "2:00 PM");
    assert_eq!(summary.booking_id, Some(30));
    assert_eq!(wizard.step(), WizardStep::Confirmed);
}
