//! Landing Service
//!
//! The operations the presentation layer calls, plus one-time seeding.

use std::sync::Arc;

use chrono::Utc;

use crate::contact::ContactHandler;
use crate::error::Result;
use crate::model::{ContactAck, ContactSubmission, PricingPlan, Testimonial};
use crate::multimodal::{MultimodalModel, generate_avatar};
use crate::ordering::{OrderBy, PricingPlanField, TestimonialField};
use crate::seed::{SEED_TESTIMONIALS, seed_pricing_plans};
use crate::store::{LandingStore, SeedOutcome};

/// Facade over the store, the image model and the contact handler
#[derive(Clone)]
pub struct LandingService {
    store: Arc<dyn LandingStore>,
    model: Arc<dyn MultimodalModel>,
    contact: ContactHandler,
}

impl LandingService {
    pub fn new(store: Arc<dyn LandingStore>, model: Arc<dyn MultimodalModel>) -> Self {
        Self {
            store,
            model,
            contact: ContactHandler::new(),
        }
    }

    pub fn store(&self) -> &Arc<dyn LandingStore> {
        &self.store
    }

    /// Testimonials, newest first
    pub async fn get_testimonials(&self) -> Result<Vec<Testimonial>> {
        self.store.list_testimonials(Some(OrderBy::desc())).await
    }

    /// Pricing plans, cheapest first
    pub async fn get_pricing_plans(&self) -> Result<Vec<PricingPlan>> {
        self.store.list_pricing_plans(Some(OrderBy::asc())).await
    }

    pub async fn list_testimonials(
        &self,
        order: Option<OrderBy<TestimonialField>>,
    ) -> Result<Vec<Testimonial>> {
        self.store.list_testimonials(order).await
    }

    pub async fn list_pricing_plans(
        &self,
        order: Option<OrderBy<PricingPlanField>>,
    ) -> Result<Vec<PricingPlan>> {
        self.store.list_pricing_plans(order).await
    }

    pub fn submit_contact_form(&self, submission: &ContactSubmission) -> ContactAck {
        self.contact.submit(submission)
    }

    /// Seed the default testimonials if none exist
    ///
    /// Returns the inserted batch, or the existing entries unchanged.
    pub async fn seed_testimonials(&self) -> Result<Vec<Testimonial>> {
        // Skip avatar generation when there is nothing to insert.
        if self.store.count_testimonials().await? > 0 {
            return self.store.list_testimonials(None).await;
        }

        let created_at = Utc::now();
        let mut batch = Vec::with_capacity(SEED_TESTIMONIALS.len());
        for seed in SEED_TESTIMONIALS {
            let avatar_url = generate_avatar(self.model.as_ref(), seed.avatar_prompt).await?;
            batch.push(seed.into_testimonial(avatar_url, created_at));
        }

        let outcome = self.store.create_testimonials_if_empty(batch).await?;
        log_seed("testimonials", &outcome);
        Ok(outcome.into_inner())
    }

    /// Seed the default pricing plans if none exist
    pub async fn seed_pricing_plans(&self) -> Result<Vec<PricingPlan>> {
        let outcome = self
            .store
            .create_pricing_plans_if_empty(seed_pricing_plans(Utc::now()))
            .await?;
        log_seed("pricing plans", &outcome);
        Ok(outcome.into_inner())
    }

    /// Seed both collections
    pub async fn seed(&self) -> Result<()> {
        self.seed_testimonials().await?;
        self.seed_pricing_plans().await?;
        Ok(())
    }
}

fn log_seed<T>(collection: &str, outcome: &SeedOutcome<T>) {
    match outcome {
        SeedOutcome::Inserted(items) => {
            tracing::info!(collection, count = items.len(), "Seeded default content");
        }
        SeedOutcome::Existing(items) => {
            tracing::info!(collection, count = items.len(), "Already seeded, skipping");
        }
    }
}
