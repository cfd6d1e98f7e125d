use crate::config::cli::Command;
use crate::core::content::{
    fetch_or_fallback, CategoryFilter, DataSource, GalleryPage, HomePage, Loaded, ServicesPage,
    TestimonialsPage,
};
use crate::core::faq::FaqPage;
use crate::core::format::format_date;
use crate::core::forms::{ContactForm, NewsletterForm, TestimonialForm};
use crate::core::samples;
use crate::core::toast::Toasts;
use crate::core::wizard::{BookingSummary, BookingWizard, CustomerDetails};
use crate::domain::model::{BookingRecord, GalleryImage, Service, ServiceCategory, Testimonial};
use crate::domain::ports::{ReadFailurePolicy, ServiceQuery, StudioApi};
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::io::Write;

const FALLBACK_NOTICE: &str = "(the studio API is unreachable, showing sample data)";

/// Execute one subcommand against `api`, writing what a page would render to `out`.
pub async fn run(
    command: &Command,
    api: &dyn StudioApi,
    policy: ReadFailurePolicy,
    toasts: &Toasts,
    today: NaiveDate,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Services { category, featured } => {
            if *featured {
                let query = ServiceQuery {
                    category: match category {
                        CategoryFilter::All => None,
                        CategoryFilter::Only(c) => Some(*c),
                    },
                    is_featured: Some(true),
                };
                let loaded = fetch_or_fallback(
                    "featured services",
                    policy,
                    api.list_services(&query),
                    || {
                        samples::services()
                            .into_iter()
                            .filter(|s| s.is_featured && category.matches(&s.category))
                            .collect()
                    },
                )
                .await?;
                notice(out, loaded.source)?;
                for service in &loaded.items {
                    render_service(out, service)?;
                }
            } else {
                let mut page = ServicesPage::load(api, policy).await?;
                page.set_filter(*category);
                notice(out, page.source())?;
                let visible = page.visible();
                if visible.is_empty() {
                    writeln!(out, "No services found")?;
                }
                for service in visible {
                    render_service(out, service)?;
                }
            }
        }
        Command::Gallery { category } => {
            let mut page = GalleryPage::load(api, policy).await?;
            page.set_filter(*category);
            notice(out, page.source())?;
            let visible = page.visible();
            if visible.is_empty() {
                writeln!(out, "No images found")?;
            }
            for image in visible {
                render_image(out, image)?;
            }
        }
        Command::Testimonials { category } => {
            let mut page = TestimonialsPage::load(api, policy).await?;
            page.set_filter(*category);
            notice(out, page.source())?;
            let slides = page.slide_count();
            for slide in 0..slides {
                writeln!(out, "-- {}/{} --", slide + 1, slides)?;
                for testimonial in page.slide_items() {
                    render_testimonial(out, testimonial)?;
                }
                page.next_slide();
            }
        }
        Command::Home => {
            let home = HomePage::load(api, policy).await?;
            section(out, "Our Featured Services", &home.services, render_service)?;
            section(out, "Our Latest Work", &home.gallery, render_image)?;
            section(out, "What Our Clients Say", &home.testimonials, render_testimonial)?;
        }
        Command::Faq { search } => {
            let mut page = FaqPage::new();
            if let Some(query) = search {
                page.search(query);
            }
            if page.no_results() {
                writeln!(out, "No results found")?;
                writeln!(out, "Try searching with different keywords.")?;
            }
            for group in page.visible() {
                writeln!(out, "== {} ==", group.name)?;
                for (_, item) in group.items {
                    writeln!(out, "Q: {}", item.question)?;
                    writeln!(out, "   {}", item.answer)?;
                }
            }
        }
        Command::Book {
            service_id,
            date,
            time,
            name,
            email,
            phone,
            notes,
        } => {
            let mut wizard = BookingWizard::new(today);
            wizard.load_services(api, policy).await?;
            notice(out, wizard.services_source().unwrap_or(DataSource::Live))?;
            wizard.select_service_by_id(*service_id)?;
            wizard.select_date(*date)?;
            wizard.select_time(*time)?;
            *wizard.details_mut() = CustomerDetails {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                notes: notes.clone(),
            };
            let summary = wizard.submit(api, toasts).await?;
            render_summary(out, summary)?;
        }
        Command::Contact {
            name,
            email,
            phone,
            subject_type,
            subject,
            message,
        } => {
            let mut form = ContactForm {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                subject_type: *subject_type,
                subject: subject.clone(),
                message: message.clone(),
            };
            form.submit(api, toasts).await?;
        }
        Command::Newsletter { email, name } => {
            let mut form = NewsletterForm {
                email: email.clone(),
                name: name.clone().unwrap_or_default(),
            };
            form.submit(api, toasts).await?;
        }
        Command::Review {
            name,
            category,
            rating,
            text,
        } => {
            let mut form = TestimonialForm::new(name.as_str(), *category, text.as_str());
            if *rating > 0 {
                form.set_rating(*rating)?;
            }
            form.submit(api, toasts).await?;
        }
        Command::Bookings => {
            let bookings = api.list_bookings().await?;
            if bookings.is_empty() {
                writeln!(out, "No booking requests")?;
            }
            for booking in &bookings {
                render_booking(out, booking)?;
            }
        }
        Command::ConfirmBooking { id } => {
            let response = api.confirm_booking(*id).await?;
            let status = response
                .get("status")
                .and_then(|s| s.as_str())
                .unwrap_or("Booking confirmed");
            writeln!(out, "Booking {}: {}", id, status)?;
        }
    }
    Ok(())
}

fn notice(out: &mut dyn Write, source: DataSource) -> Result<()> {
    if source == DataSource::Fallback {
        writeln!(out, "{}", FALLBACK_NOTICE)?;
    }
    Ok(())
}

fn section<T>(
    out: &mut dyn Write,
    title: &str,
    loaded: &Loaded<T>,
    render: fn(&mut dyn Write, &T) -> Result<()>,
) -> Result<()> {
    writeln!(out, "== {} ==", title)?;
    notice(out, loaded.source)?;
    for item in &loaded.items {
        render(out, item)?;
    }
    Ok(())
}

fn category_icon(category: ServiceCategory) -> &'static str {
    match category {
        ServiceCategory::Nails => "💅",
        ServiceCategory::Lashes => "👁️",
        ServiceCategory::Both => "✨",
    }
}

fn render_service(out: &mut dyn Write, service: &Service) -> Result<()> {
    writeln!(
        out,
        "{:>3}  {} {}  {}  {} min{}",
        service.id,
        category_icon(service.category),
        service.name,
        service.price_display(),
        service.duration_minutes,
        if service.is_featured { "  ★" } else { "" }
    )?;
    Ok(())
}

fn render_image(out: &mut dyn Write, image: &GalleryImage) -> Result<()> {
    let pair = if image.is_before_after_pair() { " (before/after)" } else { "" };
    writeln!(out, "[{}] {}{}", image.category, image.title, pair)?;
    Ok(())
}

fn render_testimonial(out: &mut dyn Write, testimonial: &Testimonial) -> Result<()> {
    let stars = usize::from(testimonial.rating.min(5));
    writeln!(
        out,
        "{}{}  \"{}\" - {} ({})",
        "★".repeat(stars),
        "☆".repeat(5 - stars),
        testimonial.review_text,
        testimonial.client_name,
        testimonial.service_category
    )?;
    Ok(())
}

fn render_booking(out: &mut dyn Write, booking: &BookingRecord) -> Result<()> {
    let service = booking.service.as_ref().map_or("?", |s| s.name.as_str());
    let date = booking
        .preferred_date
        .map(format_date)
        .unwrap_or_default();
    writeln!(
        out,
        "#{:<4} {:<10} {}  {}  {} {}",
        booking.id,
        booking.status.as_deref().unwrap_or("pending"),
        booking.customer_name.as_deref().unwrap_or(""),
        service,
        date,
        booking.preferred_time.as_deref().unwrap_or("")
    )?;
    Ok(())
}

fn render_summary(out: &mut dyn Write, summary: &BookingSummary) -> Result<()> {
    writeln!(out, "Booking Request Submitted!")?;
    writeln!(out, "Service:  {}", summary.service_name)?;
    writeln!(out, "Date:     {}", summary.date)?;
    writeln!(out, "Time:     {}", summary.time)?;
    writeln!(out, "Duration: {} minutes", summary.duration_minutes)?;
    writeln!(out, "Price:    {}", summary.price)?;
    writeln!(out, "Ends by:  {}", summary.estimated_end)?;
    if let Some(id) = summary.booking_id {
        writeln!(out, "Reference: #{}", id)?;
    }
    Ok(())
}
