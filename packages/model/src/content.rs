//! # Section Content
//!
//! Typed editable payloads, one shape per section kind, plus the default
//! content library that seeds freshly added sections.
//!
//! Every kind except `ContentBlock` carries a compile-time-checked struct.
//! `ContentBlock` keeps an open map because its schema is genuinely
//! user-defined (custom HTML, third-party embeds).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::section::SectionKind;

/// Editable payload of a section, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SectionContent {
    Hero(HeroContent),
    Pricing(PricingContent),
    Faq(FaqContent),
    Gallery(GalleryContent),
    Testimonials(TestimonialsContent),
    Contact(ContactContent),
    Video(VideoContent),
    Cta(CtaContent),
    /// User-defined payload for content blocks
    Custom(serde_json::Map<String, Value>),
}

impl SectionContent {
    /// The section kind this payload belongs to
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Hero(_) => SectionKind::Hero,
            SectionContent::Pricing(_) => SectionKind::Pricing,
            SectionContent::Faq(_) => SectionKind::Faq,
            SectionContent::Gallery(_) => SectionKind::Gallery,
            SectionContent::Testimonials(_) => SectionKind::Testimonials,
            SectionContent::Contact(_) => SectionKind::Contact,
            SectionContent::Video(_) => SectionKind::Video,
            SectionContent::Cta(_) => SectionKind::Cta,
            SectionContent::Custom(_) => SectionKind::ContentBlock,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub cta_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingContent {
    pub heading: String,
    pub packages: Vec<PricingPackage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPackage {
    pub name: String,
    pub description: String,
    /// Cents, so discount math stays exact
    pub price_cents: i64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqContent {
    pub heading: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryContent {
    pub heading: String,
    pub images: Vec<GalleryImage>,
    #[serde(default)]
    pub show_captions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsContent {
    pub heading: String,
    pub quotes: Vec<TestimonialQuote>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialQuote {
    pub quote: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub heading: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub autoplay: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaContent {
    pub heading: String,
    pub body: String,
    pub button_label: String,
}

/// Initial placeholder content for a freshly added section
///
/// Total over the closed kind enumeration and pure: a new section renders
/// meaningfully with no further input. Content blocks start empty since
/// their schema is user-defined.
pub fn default_content_for(kind: SectionKind) -> SectionContent {
    match kind {
        SectionKind::Hero => SectionContent::Hero(HeroContent {
            headline: "Quality service, done right".to_string(),
            subheadline: "Tell visitors what you do and why it matters.".to_string(),
            image_url: None,
            cta_label: "Get a quote".to_string(),
        }),
        SectionKind::Pricing => SectionContent::Pricing(PricingContent {
            heading: "Packages".to_string(),
            packages: vec![
                PricingPackage {
                    name: "Essential".to_string(),
                    description: "The basics, done well.".to_string(),
                    price_cents: 9_900,
                    features: vec!["Initial consultation".to_string(), "Standard service".to_string()],
                    highlighted: false,
                },
                PricingPackage {
                    name: "Complete".to_string(),
                    description: "Our most popular option.".to_string(),
                    price_cents: 19_900,
                    features: vec![
                        "Everything in Essential".to_string(),
                        "Priority scheduling".to_string(),
                        "Follow-up visit".to_string(),
                    ],
                    highlighted: true,
                },
                PricingPackage {
                    name: "Premium".to_string(),
                    description: "The full treatment.".to_string(),
                    price_cents: 34_900,
                    features: vec![
                        "Everything in Complete".to_string(),
                        "Dedicated point of contact".to_string(),
                        "Satisfaction guarantee".to_string(),
                    ],
                    highlighted: false,
                },
            ],
        }),
        SectionKind::Faq => SectionContent::Faq(FaqContent {
            heading: "Frequently asked questions".to_string(),
            items: vec![
                FaqItem {
                    question: "How soon can you start?".to_string(),
                    answer: "Most projects begin within one week of approval.".to_string(),
                },
                FaqItem {
                    question: "Do you offer free estimates?".to_string(),
                    answer: "Yes — every estimate is free and carries no obligation.".to_string(),
                },
                FaqItem {
                    question: "Are you licensed and insured?".to_string(),
                    answer: "Fully licensed, bonded and insured.".to_string(),
                },
            ],
        }),
        SectionKind::Gallery => SectionContent::Gallery(GalleryContent {
            heading: "Recent work".to_string(),
            images: Vec::new(),
            show_captions: true,
        }),
        SectionKind::Testimonials => SectionContent::Testimonials(TestimonialsContent {
            heading: "What customers say".to_string(),
            quotes: vec![
                TestimonialQuote {
                    quote: "Professional from start to finish.".to_string(),
                    author: "A happy customer".to_string(),
                    role: None,
                },
                TestimonialQuote {
                    quote: "Fair price and great communication.".to_string(),
                    author: "A repeat customer".to_string(),
                    role: None,
                },
            ],
        }),
        SectionKind::Contact => SectionContent::Contact(ContactContent {
            heading: "Get in touch".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "hello@example.com".to_string(),
            hours: "Mon–Fri, 8am–6pm".to_string(),
            address: None,
        }),
        SectionKind::Video => SectionContent::Video(VideoContent {
            heading: "See us in action".to_string(),
            video_url: None,
            autoplay: false,
        }),
        SectionKind::Cta => SectionContent::Cta(CtaContent {
            heading: "Ready to get started?".to_string(),
            body: "Reach out today and we'll take it from there.".to_string(),
            button_label: "Contact us".to_string(),
        }),
        SectionKind::ContentBlock => SectionContent::Custom(serde_json::Map::new()),
    }
}
