//! Frequently asked questions: fixed content, a text search and an accordion.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqCategory {
    pub name: &'static str,
    pub items: &'static [FaqItem],
}

const fn item(question: &'static str, answer: &'static str) -> FaqItem {
    FaqItem { question, answer }
}

pub const FAQ: &[FaqCategory] = &[
    FaqCategory {
        name: "General",
        items: &[
            item(
                "What services do you offer?",
                "We offer a full range of nail and lash services including manicures, pedicures, gel polish, nail art, classic lash extensions, volume lash extensions, lash lifts, and lash tints. We also provide combined packages for clients who want both nail and lash services.",
            ),
            item(
                "How do I book an appointment?",
                "You can book an appointment through our online booking system on our website, call us at +234 902 122 7325, or visit our studio in person. We recommend booking in advance as we tend to fill up quickly, especially on weekends.",
            ),
            item(
                "What are your business hours?",
                "We are open Monday through Saturday from 9:00 AM to 7:00 PM, and Sunday from 10:00 AM to 5:00 PM. We also offer extended hours by appointment for special occasions.",
            ),
            item(
                "Do you accept walk-ins?",
                "While we do accept walk-ins when we have availability, we highly recommend making an appointment to ensure you get the time slot that works best for you. Walk-ins are subject to availability and may require a wait.",
            ),
        ],
    },
    FaqCategory {
        name: "Nail Services",
        items: &[
            item(
                "How long does a manicure last?",
                "A regular manicure typically lasts 1-2 weeks, while a gel manicure can last 2-3 weeks. The longevity depends on your daily activities, nail care routine, and how well you maintain your nails.",
            ),
            item(
                "Can I bring my own nail polish?",
                "Yes, absolutely! We welcome clients to bring their own nail polish. However, we do have an extensive collection of high-quality polishes and gel colors for you to choose from.",
            ),
            item(
                "Do you offer nail art services?",
                "Yes! We specialize in custom nail art designs. Our talented artists can create everything from simple designs to intricate artwork. Please let us know about your nail art preferences when booking your appointment.",
            ),
            item(
                "What should I do to prepare for my nail appointment?",
                "Please arrive with clean, dry nails. Remove any existing polish before your appointment. If you have any nail concerns or allergies, please inform us when booking or upon arrival.",
            ),
        ],
    },
    FaqCategory {
        name: "Lash Services",
        items: &[
            item(
                "How long do lash extensions last?",
                "Lash extensions typically last 3-4 weeks with proper care. We recommend getting fills every 2-3 weeks to maintain the fullness and appearance of your lashes.",
            ),
            item(
                "Can I wear makeup with lash extensions?",
                "Yes, but we recommend using oil-free makeup products and avoiding waterproof mascara. We also suggest using a gentle, oil-free makeup remover to avoid damaging the extensions.",
            ),
            item(
                "What is the difference between classic and volume lashes?",
                "Classic lashes involve applying one extension per natural lash for a natural look. Volume lashes involve applying multiple thinner extensions per natural lash for a fuller, more dramatic appearance.",
            ),
            item(
                "How should I care for my lash extensions?",
                "Avoid getting them wet for the first 24 hours, don't rub your eyes, use oil-free products, and brush them gently with a clean spoolie. Avoid sleeping on your face and be gentle when removing makeup.",
            ),
        ],
    },
    FaqCategory {
        name: "Booking & Policies",
        items: &[
            item(
                "What is your cancellation policy?",
                "We require 24 hours notice for cancellations or rescheduling. Cancellations made less than 24 hours in advance may be subject to a cancellation fee. No-shows will be charged the full service amount.",
            ),
            item(
                "Do you offer gift certificates?",
                "Yes! We offer gift certificates for all our services. They make perfect gifts for birthdays, holidays, or any special occasion. Gift certificates can be purchased in our studio or online.",
            ),
            item(
                "What forms of payment do you accept?",
                "We accept cash, all major credit cards (Visa, MasterCard, American Express, Discover), and digital payments like Apple Pay and Google Pay. We also accept Venmo and PayPal.",
            ),
            item(
                "Do you offer group bookings or parties?",
                "Yes! We love hosting groups and special events. We can accommodate bridal parties, birthday celebrations, and other group bookings. Please contact us in advance to discuss your needs and availability.",
            ),
        ],
    },
];

/// One category as currently shown. Indexes point into [`FAQ`], so toggling
/// an entry survives a change of search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqGroup {
    pub category: usize,
    pub name: &'static str,
    pub items: Vec<(usize, &'static FaqItem)>,
}

#[derive(Debug, Clone, Default)]
pub struct FaqPage {
    query: String,
    open: HashSet<(usize, usize)>,
}

impl FaqPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Categories with at least one entry whose question or answer contains
    /// the search text, ignoring case. An empty search shows everything.
    pub fn visible(&self) -> Vec<FaqGroup> {
        let needle = self.query.to_lowercase();
        FAQ.iter()
            .enumerate()
            .filter_map(|(category, faq)| {
                let items: Vec<_> = faq
                    .items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| {
                        needle.is_empty()
                            || item.question.to_lowercase().contains(&needle)
                            || item.answer.to_lowercase().contains(&needle)
                    })
                    .collect();
                (!items.is_empty()).then_some(FaqGroup {
                    category,
                    name: faq.name,
                    items,
                })
            })
            .collect()
    }

    /// True when a search is active and nothing matched.
    pub fn no_results(&self) -> bool {
        !self.query.is_empty() && self.visible().is_empty()
    }

    /// Open or close one answer. Returns whether it is now open; unknown
    /// positions are ignored.
    pub fn toggle(&mut self, category: usize, question: usize) -> bool {
        let exists = FAQ
            .get(category)
            .is_some_and(|c| question < c.items.len());
        if !exists {
            return false;
        }
        let key = (category, question);
        if self.open.remove(&key) {
            false
        } else {
            self.open.insert(key);
            true
        }
    }

    pub fn is_open(&self, category: usize, question: usize) -> bool {
        self.open.contains(&(category, question))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_shows_every_category() {
        let page = FaqPage::new();
        let groups = page.visible();
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|g| g.items.len() == 4));
        assert!(!page.no_results());
    }

    #[test]
    fn search_ignores_case_and_drops_empty_categories() {
        let mut page = FaqPage::new();
        page.search("VOLUME");
        let groups = page.visible();
        let names: Vec<_> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, ["General", "Lash Services"]);
        assert_eq!(groups[1].items.len(), 1);
        assert_eq!(groups[1].items[0].0, 2);
    }

    #[test]
    fn search_matches_answers_too() {
        let mut page = FaqPage::new();
        page.search("spoolie");
        let groups = page.visible();
        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[0].items[0].1.question,
            "How should I care for my lash extensions?"
        );
    }

    #[test]
    fn unmatched_search_reports_no_results() {
        let mut page = FaqPage::new();
        page.search("tattoo");
        assert!(page.visible().is_empty());
        assert!(page.no_results());
    }

    #[test]
    fn toggle_flips_one_answer() {
        let mut page = FaqPage::new();
        assert!(page.toggle(1, 2));
        assert!(page.is_open(1, 2));
        assert!(!page.is_open(1, 1));

        page.search("nail art");
        assert!(page.is_open(1, 2));

        assert!(!page.toggle(1, 2));
        assert!(!page.is_open(1, 2));
        assert!(!page.toggle(9, 0));
        assert!(!page.toggle(0, 9));
    }
}
