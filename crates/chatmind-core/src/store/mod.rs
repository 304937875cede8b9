//! Landing Data Store
//!
//! The store exclusively owns the testimonial and pricing plan collections.
//! Both are seed-once, read-many: there is no update or delete.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{PricingPlan, Testimonial};
use crate::ordering::{OrderBy, PricingPlanField, TestimonialField};

/// Result of a conditional (seed) insert
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedOutcome<T> {
    /// The collection was empty and the batch was inserted
    Inserted(Vec<T>),

    /// The collection already held entries; nothing was inserted
    Existing(Vec<T>),
}

impl<T> SeedOutcome<T> {
    pub const fn was_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }

    /// The inserted batch, or the entries already present
    pub fn into_inner(self) -> Vec<T> {
        match self {
            Self::Inserted(items) | Self::Existing(items) => items,
        }
    }
}

/// Storage trait for landing page content
///
/// Swap `MemoryStore` for a database-backed implementation without touching
/// the service layer.
#[async_trait]
pub trait LandingStore: Send + Sync {
    /// List testimonials; `None` keeps insertion order
    async fn list_testimonials(
        &self,
        order: Option<OrderBy<TestimonialField>>,
    ) -> Result<Vec<Testimonial>>;

    /// List pricing plans; `None` keeps insertion order
    async fn list_pricing_plans(
        &self,
        order: Option<OrderBy<PricingPlanField>>,
    ) -> Result<Vec<PricingPlan>>;

    /// Bulk insert, returns the count inserted. Identifiers are not checked
    /// for uniqueness.
    async fn create_testimonials(&self, batch: Vec<Testimonial>) -> Result<usize>;

    async fn create_pricing_plans(&self, batch: Vec<PricingPlan>) -> Result<usize>;

    /// Insert `batch` only if the collection is empty (single atomic step)
    async fn create_testimonials_if_empty(
        &self,
        batch: Vec<Testimonial>,
    ) -> Result<SeedOutcome<Testimonial>>;

    async fn create_pricing_plans_if_empty(
        &self,
        batch: Vec<PricingPlan>,
    ) -> Result<SeedOutcome<PricingPlan>>;

    async fn count_testimonials(&self) -> Result<usize>;

    async fn count_pricing_plans(&self) -> Result<usize>;
}
