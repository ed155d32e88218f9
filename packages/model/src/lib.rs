//! # Pagecraft Model
//!
//! Pure data model for the page composition engine.
//!
//! A composed page is an ordered list of typed [`Section`]s, styled by a
//! cascading [`DesignTheme`], optionally carrying a time-boxed
//! [`IncentiveConfig`]. Everything here is a value object: construction and
//! lookup only, no editing state. The stateful engine lives in
//! `pagecraft-editor`.
//!
//! ## Core Principles
//!
//! 1. **Closed section enumeration**: every section kind is known at compile
//!    time; only `ContentBlock` carries a user-defined payload.
//! 2. **Typed payloads**: section content is a tagged union per kind, not an
//!    open map, so renderers get compile-time-checked fields.
//! 3. **No hidden registries**: the preset catalog and default-content
//!    library are plain data built once and passed by reference.

mod content;
mod id;
mod incentive;
mod preset;
mod record;
mod section;
mod settings;
pub mod theme;

pub use content::{
    default_content_for, ContactContent, CtaContent, FaqContent, FaqItem, GalleryContent,
    GalleryImage, HeroContent, PricingContent, PricingPackage, SectionContent,
    TestimonialsContent, TestimonialQuote, VideoContent,
};
pub use id::{document_seed, IdGenerator};
pub use incentive::{DeadlineSpec, DiscountSpec, IncentiveConfig, IncentiveTier};
pub use preset::{CatalogError, Preset, PresetCatalog};
pub use record::PageRecord;
pub use section::{Section, SectionKind, SharedBlock, SharedBlockRef};
pub use settings::{SectionSettings, SettingsPatch};
pub use theme::{DesignTheme, ResolvedTheme, ThemePatch};
