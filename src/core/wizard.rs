//! The five-step booking flow.
//!
//! Every step before submission is local; `submit` performs the single network
//! write. Going back never discards what was already chosen.

use crate::core::content::{load_services, DataSource};
use crate::core::format::{format_clock, format_date, format_time};
use crate::core::toast::Toasts;
use crate::domain::model::{BookingRequest, Service, TimeSlot};
use crate::domain::ports::{ReadFailurePolicy, StudioApi};
use crate::utils::error::{Result, StudioError};
use crate::utils::validation::{validate_email, validate_required, Validate};
use chrono::{Duration, NaiveDate};
use std::fmt;

/// Minutes added after the service for cleanup before the next client.
pub const BUFFER_MINUTES: u32 = 15;

pub const BOOKING_SUCCESS_MESSAGE: &str =
    "Booking request submitted successfully! We'll contact you soon to confirm.";
pub const BOOKING_FAILURE_MESSAGE: &str = "Failed to submit booking request. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectService,
    SelectDate,
    SelectTime,
    EnterDetails,
    Confirmed,
}

impl WizardStep {
    /// 1-based position, as shown in the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::SelectService => 1,
            WizardStep::SelectDate => 2,
            WizardStep::SelectTime => 3,
            WizardStep::EnterDetails => 4,
            WizardStep::Confirmed => 5,
        }
    }

    fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectDate => Some(WizardStep::SelectService),
            WizardStep::SelectTime => Some(WizardStep::SelectDate),
            WizardStep::EnterDetails => Some(WizardStep::SelectTime),
            WizardStep::SelectService | WizardStep::Confirmed => None,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::SelectService => "service selection",
            WizardStep::SelectDate => "date selection",
            WizardStep::SelectTime => "time selection",
            WizardStep::EnterDetails => "contact details",
            WizardStep::Confirmed => "confirmation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl Validate for CustomerDetails {
    fn validate(&self) -> Result<()> {
        validate_required("customer_name", &self.name, "Please enter your full name")?;
        validate_email("customer_email", &self.email)?;
        // Phone is only required, the format is left to the server.
        validate_required("customer_phone", &self.phone, "Please enter your phone number")?;
        Ok(())
    }
}

/// What the confirmation screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub service_name: String,
    pub date: String,
    pub time: String,
    pub duration_minutes: u32,
    pub price: String,
    pub estimated_end: String,
    pub booking_id: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: WizardStep,
    today: NaiveDate,
    services: Vec<Service>,
    services_source: Option<DataSource>,
    service: Option<Service>,
    date: Option<NaiveDate>,
    time: Option<TimeSlot>,
    details: CustomerDetails,
    summary: Option<BookingSummary>,
}

impl BookingWizard {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            step: WizardStep::SelectService,
            today,
            services: Vec::new(),
            services_source: None,
            service: None,
            date: None,
            time: None,
            details: CustomerDetails::default(),
            summary: None,
        }
    }

    /// Entry from a page that already picked the service.
    pub fn preselected(service: Service, today: NaiveDate) -> Self {
        let mut wizard = Self::new(today);
        tracing::debug!("Booking wizard opened with {} preselected", service.name);
        wizard.service = Some(service);
        wizard.step = WizardStep::SelectDate;
        wizard
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn services_source(&self) -> Option<DataSource> {
        self.services_source
    }

    pub fn selected_service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.time
    }

    pub fn details(&self) -> &CustomerDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut CustomerDetails {
        &mut self.details
    }

    pub fn summary(&self) -> Option<&BookingSummary> {
        self.summary.as_ref()
    }

    pub async fn load_services(
        &mut self,
        api: &dyn StudioApi,
        policy: ReadFailurePolicy,
    ) -> Result<()> {
        let loaded = load_services(api, policy).await?;
        self.services = loaded.items;
        self.services_source = Some(loaded.source);
        Ok(())
    }

    pub fn set_services(&mut self, services: Vec<Service>) {
        self.services = services;
        self.services_source = Some(DataSource::Live);
    }

    /// Pick by id from the loaded list.
    pub fn select_service_by_id(&mut self, id: u64) -> Result<()> {
        let service = self
            .services
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| {
                StudioError::validation("service_id", format!("No service with id {}", id))
            })?;
        self.select_service(service)
    }

    pub fn select_service(&mut self, service: Service) -> Result<()> {
        self.expect_step(WizardStep::SelectService, "select a service")?;
        tracing::info!("Service selected: {}", service.name);
        self.service = Some(service);
        self.step = WizardStep::SelectDate;
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<()> {
        self.expect_step(WizardStep::SelectDate, "select a date")?;
        if date < self.today {
            return Err(StudioError::validation(
                "preferred_date",
                "Cannot book appointments in the past.",
            ));
        }
        tracing::info!("Date selected: {}", date);
        self.date = Some(date);
        self.step = WizardStep::SelectTime;
        Ok(())
    }

    pub fn select_time(&mut self, slot: TimeSlot) -> Result<()> {
        self.expect_step(WizardStep::SelectTime, "select a time")?;
        tracing::info!("Time selected: {}", slot);
        self.time = Some(slot);
        self.step = WizardStep::EnterDetails;
        Ok(())
    }

    /// "Continue" with the value already chosen on this step.
    pub fn advance(&mut self) -> Result<()> {
        let next = match self.step {
            WizardStep::SelectDate if self.date.is_some() => WizardStep::SelectTime,
            WizardStep::SelectTime if self.time.is_some() => WizardStep::EnterDetails,
            step => return Err(StudioError::transition(step, "continue")),
        };
        self.step = next;
        Ok(())
    }

    /// One step back. Selections and details are kept.
    pub fn back(&mut self) -> Result<()> {
        let previous = self
            .step
            .previous()
            .ok_or_else(|| StudioError::transition(self.step, "go back"))?;
        tracing::debug!("Wizard back: {} -> {}", self.step, previous);
        self.step = previous;
        Ok(())
    }

    /// The payload `submit` would send, built from the current selections.
    pub fn booking_request(&self) -> Result<BookingRequest> {
        let service = self
            .service
            .as_ref()
            .ok_or_else(|| StudioError::validation("service_id", "Please choose a service"))?;
        let date = self
            .date
            .ok_or_else(|| StudioError::validation("preferred_date", "Please choose a date"))?;
        let time = self
            .time
            .ok_or_else(|| StudioError::validation("preferred_time", "Please choose a time"))?;

        Ok(BookingRequest {
            service_id: service.id,
            preferred_date: date,
            preferred_time: time,
            customer_name: self.details.name.trim().to_string(),
            customer_email: self.details.email.trim().to_string(),
            customer_phone: self.details.phone.trim().to_string(),
            notes: self.details.notes.clone(),
        })
    }

    /// Send the booking. On failure the wizard stays on the details step with
    /// everything still filled in; nothing is retried.
    pub async fn submit(&mut self, api: &dyn StudioApi, toasts: &Toasts) -> Result<&BookingSummary> {
        self.expect_step(WizardStep::EnterDetails, "submit the booking")?;

        if let Err(e) = self.details.validate() {
            toasts.error(e.user_friendly_message());
            return Err(e);
        }
        let request = self.booking_request()?;

        match api.create_booking(&request).await {
            Ok(echo) => {
                let booking_id = echoed_id(&echo);
                tracing::info!(booking_id = ?booking_id, "Booking request submitted");
                let summary = self.build_summary(&request, booking_id);
                toasts.success(BOOKING_SUCCESS_MESSAGE);
                self.step = WizardStep::Confirmed;
                Ok(&*self.summary.insert(summary))
            }
            Err(e) => {
                tracing::error!("Error submitting booking: {}", e);
                toasts.error(BOOKING_FAILURE_MESSAGE);
                Err(e)
            }
        }
    }

    /// Start over from the first step. The loaded service list is kept.
    pub fn book_another(&mut self) -> Result<()> {
        self.expect_step(WizardStep::Confirmed, "book another appointment")?;
        let services = std::mem::take(&mut self.services);
        let source = self.services_source;
        *self = Self::new(self.today);
        self.services = services;
        self.services_source = source;
        Ok(())
    }

    fn build_summary(&self, request: &BookingRequest, booking_id: Option<u64>) -> BookingSummary {
        let (service_name, duration_minutes, price) = match &self.service {
            Some(s) => (s.name.clone(), s.duration_minutes, s.price_display()),
            None => (String::new(), 0, String::new()),
        };
        let end = request.preferred_time.as_time()
            + Duration::minutes(i64::from(duration_minutes + BUFFER_MINUTES));

        BookingSummary {
            service_name,
            date: format_date(request.preferred_date),
            time: format_time(request.preferred_time),
            duration_minutes,
            price,
            estimated_end: format_clock(end),
            booking_id,
        }
    }

    fn expect_step(&self, expected: WizardStep, action: &str) -> Result<()> {
        if self.step != expected {
            return Err(StudioError::transition(self.step, action));
        }
        Ok(())
    }
}

/// Reference number from the server's echo, when it sent a usable one.
fn echoed_id(echo: &serde_json::Value) -> Option<u64> {
    match echo.get("id")? {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
