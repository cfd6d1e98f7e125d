use crate::config::settings::{StudioSettings, ENV_API_URL, ENV_READ_FAILURE, ENV_TIMEOUT};
use crate::core::content::CategoryFilter;
use crate::domain::model::{GalleryCategory, ServiceCategory, SubjectType, TimeSlot};
use crate::domain::ports::ReadFailurePolicy;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "naild")]
#[command(about = "Browse services and book appointments at the studio")]
pub struct CliConfig {
    #[arg(long, global = true, env = ENV_API_URL, help = "Base URL of the studio API")]
    pub api_url: Option<String>,

    #[arg(long, global = true, env = ENV_TIMEOUT, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = ENV_READ_FAILURE,
        value_parser = parse_read_failure,
        help = "What to do when a page cannot load its data: fallback or error"
    )]
    pub on_read_failure: Option<ReadFailurePolicy>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

fn parse_read_failure(raw: &str) -> std::result::Result<ReadFailurePolicy, String> {
    crate::config::settings::parse_policy("on_read_failure", raw).map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List services, optionally by category
    Services {
        #[arg(long, default_value = "all")]
        category: CategoryFilter<ServiceCategory>,
        #[arg(long)]
        featured: bool,
    },
    /// Browse the gallery
    Gallery {
        #[arg(long, default_value = "all")]
        category: CategoryFilter<GalleryCategory>,
    },
    /// Read client reviews
    Testimonials {
        #[arg(long, default_value = "all")]
        category: CategoryFilter<ServiceCategory>,
    },
    /// Featured services, reviews and gallery
    Home,
    /// Frequently asked questions
    Faq {
        #[arg(long, help = "Only show entries containing this text")]
        search: Option<String>,
    },
    /// Request an appointment
    Book {
        #[arg(long)]
        service_id: u64,
        #[arg(long, help = "Preferred date, YYYY-MM-DD")]
        date: NaiveDate,
        #[arg(long, help = "Hourly slot between 09:00 and 18:00")]
        time: TimeSlot,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Send a message to the studio
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "general")]
        subject_type: SubjectType,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Subscribe to the newsletter
    Newsletter {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Leave a review
    Review {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "both")]
        category: ServiceCategory,
        #[arg(long, help = "Stars, 1 to 5")]
        rating: u8,
        #[arg(long)]
        text: String,
    },
    /// List booking requests (staff)
    Bookings,
    /// Mark a booking request as confirmed (staff)
    ConfirmBooking { id: u64 },
}

impl CliConfig {
    /// File (or defaults), then command-line and environment overrides.
    pub fn settings(&self) -> Result<StudioSettings> {
        let mut settings = match &self.config {
            Some(path) => StudioSettings::from_file(path)?,
            None => StudioSettings::default(),
        };
        if let Some(url) = &self.api_url {
            settings.api.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.api.timeout_seconds = timeout;
        }
        if let Some(policy) = self.on_read_failure {
            settings.content.on_read_failure = policy;
        }
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.settings()?.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_book_command() {
        let cli = CliConfig::try_parse_from([
            "naild",
            "--api-url",
            "http://localhost:9000/api",
            "book",
            "--service-id",
            "1",
            "--date",
            "2025-03-10",
            "--time",
            "14:00",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--phone",
            "08012345678",
        ])
        .unwrap();

        match &cli.command {
            Command::Book { service_id, time, notes, .. } => {
                assert_eq!(*service_id, 1);
                assert_eq!(time.to_string(), "14:00");
                assert!(notes.is_empty());
            }
            other => panic!("unexpected command {:?}", other),
        }
        let settings = cli.settings().unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:9000/api");
    }

    #[test]
    fn rejects_off_grid_time() {
        let result = CliConfig::try_parse_from([
            "naild", "book", "--service-id", "1", "--date", "2025-03-10", "--time", "14:30",
            "--name", "Jane", "--email", "jane@example.com", "--phone", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn category_filter_defaults_to_all() {
        let cli = CliConfig::try_parse_from(["naild", "gallery"]).unwrap();
        assert!(matches!(cli.command, Command::Gallery { category: CategoryFilter::All }));
    }
}
