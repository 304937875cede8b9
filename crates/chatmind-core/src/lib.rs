//! # chatmind-core
//!
//! Content backend for the ChatMind landing page: testimonials, pricing plans
//! and the contact form, served from an in-memory store.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      LandingService                          │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌───────────────┐   │
//! │  │ LandingStore │  │ MultimodalModel  │  │ContactHandler │   │
//! │  │  (Strategy)  │  │   (Strategy)     │  │               │   │
//! │  └──────────────┘  └────────┬─────────┘  └───────────────┘   │
//! │                             │ mock                           │
//! │                     ┌───────▼────────┐                       │
//! │                     │ Avatar rules   │                       │
//! │                     └────────────────┘                       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Seeding runs once at startup: each default testimonial gets an avatar from
//! the image model, then both collections are inserted only if empty.

pub mod avatar;
pub mod contact;
pub mod error;
pub mod features;
pub mod model;
pub mod multimodal;
pub mod ordering;
pub mod seed;
pub mod service;
pub mod store;

pub use avatar::resolve_avatar;
pub use contact::{CONTACT_ACK_MESSAGE, ContactHandler};
pub use error::{LandingError, Result};
pub use model::{ContactAck, ContactSubmission, PricingPlan, Testimonial};
pub use multimodal::{MockMultimodalModel, MultimodalModel};
pub use ordering::{OrderBy, PricingPlanField, SortDirection, TestimonialField};
pub use service::LandingService;
pub use store::{LandingStore, MemoryStore, SeedOutcome};
