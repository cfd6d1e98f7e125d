use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::StudioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Nails,
    Lashes,
    Both,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 3] = [Self::Nails, Self::Lashes, Self::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nails => "nails",
            Self::Lashes => "lashes",
            Self::Both => "both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryCategory {
    Nails,
    Lashes,
    BeforeAfter,
    Other,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 4] =
        [Self::Nails, Self::Lashes, Self::BeforeAfter, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nails => "nails",
            Self::Lashes => "lashes",
            Self::BeforeAfter => "before_after",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    #[default]
    General,
    Booking,
    Pricing,
    Complaint,
    Compliment,
    Other,
}

impl SubjectType {
    pub const ALL: [SubjectType; 6] = [
        Self::General,
        Self::Booking,
        Self::Pricing,
        Self::Complaint,
        Self::Compliment,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Booking => "booking",
            Self::Pricing => "pricing",
            Self::Complaint => "complaint",
            Self::Compliment => "compliment",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Booking => "Booking Question",
            Self::Pricing => "Pricing Information",
            Self::Complaint => "Complaint",
            Self::Compliment => "Compliment",
            Self::Other => "Other",
        }
    }
}

macro_rules! impl_category_text {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = StudioError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.as_str() == s)
                    .ok_or_else(|| {
                        StudioError::validation($field, format!("Unknown {}: {}", $field, s))
                    })
            }
        }
    };
}

impl_category_text!(ServiceCategory, "service category");
impl_category_text!(GalleryCategory, "gallery category");
impl_category_text!(SubjectType, "subject type");

/// Decimal amounts arrive as strings (`"35.00"`) from the API but sample
/// fixtures and some proxies send plain numbers.
fn decimal_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Decimal::deserialize(deserializer)? {
        Decimal::Text(s) => s,
        Decimal::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub category: ServiceCategory,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "decimal_string")]
    pub price: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub second_image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Service {
    /// "1h 30m", "2h" or "45m".
    pub fn duration_display(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        match (hours, minutes) {
            (0, m) => format!("{}m", m),
            (h, 0) => format!("{}h", h),
            (h, m) => format!("{}h {}m", h, m),
        }
    }

    pub fn price_display(&self) -> String {
        crate::core::format::format_naira(&self.price)
    }
}

/// One of the ten hourly booking slots, 09:00 through 18:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub const FIRST_HOUR: u8 = 9;
    pub const LAST_HOUR: u8 = 18;

    pub fn at_hour(hour: u8) -> Option<Self> {
        (Self::FIRST_HOUR..=Self::LAST_HOUR)
            .contains(&hour)
            .then_some(Self(hour))
    }

    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (Self::FIRST_HOUR..=Self::LAST_HOUR).map(TimeSlot)
    }

    pub fn hour(&self) -> u8 {
        self.0
    }

    pub fn as_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.0), 0, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for TimeSlot {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            StudioError::validation(
                "preferred_time",
                format!("{} is not one of the available time slots", s),
            )
        };
        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        if minutes != "00" {
            return Err(invalid());
        }
        let hour: u8 = hours.parse().map_err(|_| invalid())?;
        TimeSlot::at_hour(hour).ok_or_else(invalid)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub service_id: u64,
    pub preferred_date: NaiveDate,
    pub preferred_time: TimeSlot,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub notes: String,
}

/// What the API echoes back for a stored booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service: Option<Service>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<NaiveDate>,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub total_duration: Option<u32>,
    #[serde(default)]
    pub estimated_end_time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject_type: SubjectType,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub id: Option<u64>,
    pub client_name: String,
    pub service_category: ServiceCategory,
    pub rating: u8,
    pub review_text: String,
    #[serde(default)]
    pub is_featured: bool,
}

/// Write payload for a new review; moderation happens server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTestimonial {
    pub client_name: String,
    pub service_category: ServiceCategory,
    pub rating: u8,
    pub review_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: GalleryCategory,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub comparison_image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl GalleryImage {
    pub fn is_before_after_pair(&self) -> bool {
        self.category == GalleryCategory::BeforeAfter && self.comparison_image.is_some()
    }
}

/// A collection response: either a bare array or a paginated envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Paginated {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
    },
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Paginated { results, .. } => results,
            Listing::Bare(items) => items,
        }
    }
}
