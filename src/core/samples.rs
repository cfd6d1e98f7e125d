//! Embedded records shown when a read request fails under the
//! `ReadFailurePolicy::Fallback` policy.

use crate::domain::model::{GalleryCategory, GalleryImage, Service, ServiceCategory, Testimonial};

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/400/500";

fn service(
    id: u64,
    name: &str,
    category: ServiceCategory,
    price: &str,
    duration_minutes: u32,
    description: &str,
    is_featured: bool,
) -> Service {
    Service {
        id,
        name: name.to_string(),
        category,
        description: description.to_string(),
        price: price.to_string(),
        duration_minutes,
        image: None,
        second_image: None,
        is_featured,
    }
}

pub fn services() -> Vec<Service> {
    use ServiceCategory::{Lashes, Nails};
    vec![
        service(1, "Classic Manicure", Nails, "35.00", 60,
            "Professional nail care including cuticle work, shaping, and polish application.", true),
        service(2, "Gel Manicure", Nails, "45.00", 75,
            "Long-lasting gel polish manicure with extended wear time.", true),
        service(3, "Pedicure", Nails, "50.00", 90,
            "Complete foot care including exfoliation, massage, and polish.", false),
        service(4, "Nail Art Design", Nails, "25.00", 30,
            "Custom nail art designs to express your unique style.", false),
        service(5, "Classic Lash Extensions", Lashes, "80.00", 90,
            "Natural-looking lash extensions for everyday glamour.", true),
        service(6, "Volume Lash Extensions", Lashes, "120.00", 120,
            "Full, dramatic volume lash extensions for maximum impact.", true),
        service(7, "Lash Lift & Tint", Lashes, "65.00", 60,
            "Enhance your natural lashes with lift and tint treatment.", false),
        service(8, "Lash Fill", Lashes, "45.00", 60,
            "Maintenance fill for existing lash extensions.", false),
    ]
}

fn testimonial(
    id: u64,
    client_name: &str,
    service_category: ServiceCategory,
    review_text: &str,
    is_featured: bool,
) -> Testimonial {
    Testimonial {
        id: Some(id),
        client_name: client_name.to_string(),
        service_category,
        rating: 5,
        review_text: review_text.to_string(),
        is_featured,
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    use ServiceCategory::{Both, Lashes, Nails};
    vec![
        testimonial(1, "Sarah M.", Both,
            "Amazing service! My nails look perfect and the lash extensions are gorgeous.", true),
        testimonial(2, "Jessica L.", Nails,
            "Best nail art I've ever had! The attention to detail is incredible.", true),
        testimonial(3, "Maria R.", Lashes,
            "My lash extensions look so natural and beautiful. The studio is clean and relaxing.", false),
        testimonial(4, "Emily K.", Nails,
            "Professional, friendly, and talented. My manicure lasted weeks and still looked perfect.", false),
        testimonial(5, "Ashley T.", Lashes,
            "The volume lashes are stunning! Love this place!", true),
        testimonial(6, "Rachel D.", Both,
            "Outstanding service from start to finish. The results exceeded my expectations.", false),
    ]
}

pub fn gallery() -> Vec<GalleryImage> {
    let image = |id: u64, title: &str, category, description: &str, is_featured| GalleryImage {
        id: Some(id),
        title: title.to_string(),
        description: description.to_string(),
        category,
        image: Some(PLACEHOLDER_IMAGE.to_string()),
        comparison_image: None,
        is_featured,
    };
    vec![
        image(1, "Beautiful Nail Art", GalleryCategory::Nails, "Custom nail art design", true),
        image(2, "Volume Lash Extensions", GalleryCategory::Lashes, "Full volume lash set", true),
        image(3, "Before & After - Nails", GalleryCategory::BeforeAfter, "Amazing transformation", false),
    ]
}
