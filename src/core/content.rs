use crate::core::samples;
use crate::domain::model::{GalleryCategory, GalleryImage, Service, ServiceCategory, Testimonial};
use crate::domain::ports::{GalleryQuery, ReadFailurePolicy, ServiceQuery, StudioApi, TestimonialQuery};
use crate::utils::error::{Result, StudioError};
use std::future::Future;
use std::str::FromStr;

pub const HOME_GALLERY_LIMIT: usize = 6;
pub const TESTIMONIALS_PER_SLIDE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback,
}

/// A fetched collection and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub source: DataSource,
}

impl<T> Loaded<T> {
    pub fn live(items: Vec<T>) -> Self {
        Self {
            items,
            source: DataSource::Live,
        }
    }

    pub fn fallback(items: Vec<T>) -> Self {
        Self {
            items,
            source: DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

/// Await `fetch`; on failure either substitute `sample()` or return the error,
/// depending on `policy`.
pub async fn fetch_or_fallback<T, F, S>(
    label: &str,
    policy: ReadFailurePolicy,
    fetch: F,
    sample: S,
) -> Result<Loaded<T>>
where
    F: Future<Output = Result<Vec<T>>>,
    S: FnOnce() -> Vec<T>,
{
    match fetch.await {
        Ok(items) => {
            tracing::debug!("Loaded {} {} from the API", items.len(), label);
            Ok(Loaded::live(items))
        }
        Err(e) => match policy {
            ReadFailurePolicy::Fallback => {
                tracing::warn!("Could not load {} ({}), showing sample data", label, e);
                Ok(Loaded::fallback(sample()))
            }
            ReadFailurePolicy::Error => {
                tracing::error!("Could not load {}: {}", label, e);
                Err(e)
            }
        },
    }
}

/// "all" or one value of a fixed category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl<C: FromStr<Err = StudioError>> FromStr for CategoryFilter<C> {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}

pub async fn load_services(api: &dyn StudioApi, policy: ReadFailurePolicy) -> Result<Loaded<Service>> {
    fetch_or_fallback(
        "services",
        policy,
        api.list_services(&ServiceQuery::default()),
        samples::services,
    )
    .await
}

#[derive(Debug, Clone)]
pub struct ServicesPage {
    services: Loaded<Service>,
    filter: CategoryFilter<ServiceCategory>,
}

impl ServicesPage {
    pub async fn load(api: &dyn StudioApi, policy: ReadFailurePolicy) -> Result<Self> {
        Ok(Self {
            services: load_services(api, policy).await?,
            filter: CategoryFilter::All,
        })
    }

    pub fn source(&self) -> DataSource {
        self.services.source
    }

    pub fn set_filter(&mut self, filter: CategoryFilter<ServiceCategory>) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&Service> {
        self.services
            .items
            .iter()
            .filter(|s| self.filter.matches(&s.category))
            .collect()
    }
}

/// Which image, if any, is open full-screen. Indexes the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    index: Option<usize>,
}

impl Lightbox {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.index = Some(index);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.index = None;
    }

    pub fn next(&mut self, len: usize) {
        if let Some(i) = self.index.filter(|_| len > 0) {
            self.index = Some((i + 1) % len);
        }
    }

    pub fn prev(&mut self, len: usize) {
        if let Some(i) = self.index.filter(|_| len > 0) {
            self.index = Some((i + len - 1) % len);
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryPage {
    images: Loaded<GalleryImage>,
    filter: CategoryFilter<GalleryCategory>,
    lightbox: Lightbox,
}

impl GalleryPage {
    pub async fn load(api: &dyn StudioApi, policy: ReadFailurePolicy) -> Result<Self> {
        let images = fetch_or_fallback(
            "gallery images",
            policy,
            api.list_gallery(&GalleryQuery::default()),
            samples::gallery,
        )
        .await?;
        Ok(Self {
            images,
            filter: CategoryFilter::All,
            lightbox: Lightbox::default(),
        })
    }

    pub fn source(&self) -> DataSource {
        self.images.source
    }

    pub fn set_filter(&mut self, filter: CategoryFilter<GalleryCategory>) {
        self.filter = filter;
        self.lightbox.close();
    }

    pub fn visible(&self) -> Vec<&GalleryImage> {
        self.images
            .items
            .iter()
            .filter(|img| self.filter.matches(&img.category))
            .collect()
    }

    pub fn open_lightbox(&mut self, index: usize) -> bool {
        let len = self.visible().len();
        self.lightbox.open(index, len)
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    pub fn next_image(&mut self) {
        let len = self.visible().len();
        self.lightbox.next(len);
    }

    pub fn prev_image(&mut self) {
        let len = self.visible().len();
        self.lightbox.prev(len);
    }

    pub fn lightbox_image(&self) -> Option<&GalleryImage> {
        self.lightbox.index().and_then(|i| self.visible().get(i).copied())
    }
}

#[derive(Debug, Clone)]
pub struct TestimonialsPage {
    testimonials: Loaded<Testimonial>,
    filter: CategoryFilter<ServiceCategory>,
    slide: usize,
}

impl TestimonialsPage {
    pub async fn load(api: &dyn StudioApi, policy: ReadFailurePolicy) -> Result<Self> {
        let testimonials = fetch_or_fallback(
            "testimonials",
            policy,
            api.list_testimonials(&TestimonialQuery::default()),
            samples::testimonials,
        )
        .await?;
        Ok(Self {
            testimonials,
            filter: CategoryFilter::All,
            slide: 0,
        })
    }

    pub fn source(&self) -> DataSource {
        self.testimonials.source
    }

    pub fn set_filter(&mut self, filter: CategoryFilter<ServiceCategory>) {
        self.filter = filter;
        self.slide = 0;
    }

    pub fn visible(&self) -> Vec<&Testimonial> {
        self.testimonials
            .items
            .iter()
            .filter(|t| self.filter.matches(&t.service_category))
            .collect()
    }

    pub fn slide_count(&self) -> usize {
        self.visible().len().div_ceil(TESTIMONIALS_PER_SLIDE)
    }

    pub fn current_slide(&self) -> usize {
        self.slide
    }

    pub fn slide_items(&self) -> Vec<&Testimonial> {
        self.visible()
            .into_iter()
            .skip(self.slide * TESTIMONIALS_PER_SLIDE)
            .take(TESTIMONIALS_PER_SLIDE)
            .collect()
    }

    pub fn next_slide(&mut self) {
        let count = self.slide_count();
        if count > 0 {
            self.slide = (self.slide + 1) % count;
        }
    }

    pub fn prev_slide(&mut self) {
        let count = self.slide_count();
        if count > 0 {
            self.slide = (self.slide + count - 1) % count;
        }
    }
}

/// Landing page. Its three collections load concurrently and independently:
/// one failing never blanks the others.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub services: Loaded<Service>,
    pub testimonials: Loaded<Testimonial>,
    pub gallery: Loaded<GalleryImage>,
}

impl HomePage {
    pub async fn load(api: &dyn StudioApi, policy: ReadFailurePolicy) -> Result<Self> {
        let featured_services = ServiceQuery {
            is_featured: Some(true),
            ..Default::default()
        };
        let featured_testimonials = TestimonialQuery {
            is_featured: Some(true),
            ..Default::default()
        };
        let featured_gallery = GalleryQuery {
            is_featured: Some(true),
            ..Default::default()
        };

        let (services, testimonials, gallery) = tokio::join!(
            fetch_or_fallback(
                "featured services",
                policy,
                api.list_services(&featured_services),
                || featured(samples::services(), |s| s.is_featured),
            ),
            fetch_or_fallback(
                "featured testimonials",
                policy,
                api.list_testimonials(&featured_testimonials),
                || featured(samples::testimonials(), |t| t.is_featured),
            ),
            fetch_or_fallback(
                "featured gallery",
                policy,
                api.list_gallery(&featured_gallery),
                || featured(samples::gallery(), |g| g.is_featured),
            ),
        );

        // Under the error policy, report services, then testimonials, then gallery.
        let services = services?;
        let testimonials = testimonials?;
        let mut gallery = gallery?;
        gallery.items.truncate(HOME_GALLERY_LIMIT);

        Ok(Self {
            services,
            testimonials,
            gallery,
        })
    }
}

fn featured<T>(items: Vec<T>, is_featured: impl Fn(&T) -> bool) -> Vec<T> {
    items.into_iter().filter(|item| is_featured(item)).collect()
}
