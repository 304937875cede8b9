//! In-memory store (for development and tests)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{LandingStore, SeedOutcome};
use crate::error::Result;
use crate::features::{decode_features, encode_features};
use crate::model::{PricingPlan, Testimonial};
use crate::ordering::{OrderBy, PricingPlanField, TestimonialField, sort_stable_by_key};

/// Stored pricing plan row. Features are kept encoded as a text column.
#[derive(Clone, Debug)]
struct PricingPlanRow {
    id: String,
    name: String,
    price: u32,
    description: String,
    features: String,
    is_popular: bool,
    created_at: DateTime<Utc>,
}

impl PricingPlanRow {
    fn encode(plan: PricingPlan) -> Result<Self> {
        Ok(Self {
            features: encode_features(&plan.features)?,
            id: plan.id,
            name: plan.name,
            price: plan.price,
            description: plan.description,
            is_popular: plan.is_popular,
            created_at: plan.created_at,
        })
    }

    fn decode(&self) -> Result<PricingPlan> {
        Ok(PricingPlan {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
            features: decode_features(&self.features)?,
            is_popular: self.is_popular,
            created_at: self.created_at,
        })
    }
}

/// In-memory landing store
///
/// Rows are kept in insertion order. One instance per application; tests
/// create a fresh one each.
#[derive(Default)]
pub struct MemoryStore {
    testimonials: RwLock<Vec<Testimonial>>,
    pricing_plans: RwLock<Vec<PricingPlanRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn decode_rows(rows: &[PricingPlanRow]) -> Result<Vec<PricingPlan>> {
    rows.iter().map(PricingPlanRow::decode).collect()
}

fn encode_batch(batch: Vec<PricingPlan>) -> Result<Vec<PricingPlanRow>> {
    for plan in &batch {
        plan.validate()?;
    }
    batch.into_iter().map(PricingPlanRow::encode).collect()
}

fn validate_testimonials(batch: &[Testimonial]) -> Result<()> {
    batch.iter().try_for_each(Testimonial::validate)
}

#[async_trait]
impl LandingStore for MemoryStore {
    async fn list_testimonials(
        &self,
        order: Option<OrderBy<TestimonialField>>,
    ) -> Result<Vec<Testimonial>> {
        let mut testimonials = self.testimonials.read().await.clone();

        if let Some(order) = order {
            match order.field {
                TestimonialField::CreatedAt => {
                    sort_stable_by_key(&mut testimonials, order.direction, |t| t.created_at);
                }
            }
        }

        tracing::debug!(count = testimonials.len(), ?order, "Listed testimonials");
        Ok(testimonials)
    }

    async fn list_pricing_plans(
        &self,
        order: Option<OrderBy<PricingPlanField>>,
    ) -> Result<Vec<PricingPlan>> {
        let mut plans = decode_rows(&self.pricing_plans.read().await)?;

        if let Some(order) = order {
            match order.field {
                PricingPlanField::Price => {
                    sort_stable_by_key(&mut plans, order.direction, |p| p.price);
                }
            }
        }

        tracing::debug!(count = plans.len(), ?order, "Listed pricing plans");
        Ok(plans)
    }

    async fn create_testimonials(&self, batch: Vec<Testimonial>) -> Result<usize> {
        validate_testimonials(&batch)?;

        let count = batch.len();
        self.testimonials.write().await.extend(batch);
        Ok(count)
    }

    async fn create_pricing_plans(&self, batch: Vec<PricingPlan>) -> Result<usize> {
        let rows = encode_batch(batch)?;

        let count = rows.len();
        self.pricing_plans.write().await.extend(rows);
        Ok(count)
    }

    async fn create_testimonials_if_empty(
        &self,
        batch: Vec<Testimonial>,
    ) -> Result<SeedOutcome<Testimonial>> {
        validate_testimonials(&batch)?;

        // Check and insert under one write guard.
        let mut testimonials = self.testimonials.write().await;
        if !testimonials.is_empty() {
            return Ok(SeedOutcome::Existing(testimonials.clone()));
        }

        testimonials.extend(batch.iter().cloned());
        Ok(SeedOutcome::Inserted(batch))
    }

    async fn create_pricing_plans_if_empty(
        &self,
        batch: Vec<PricingPlan>,
    ) -> Result<SeedOutcome<PricingPlan>> {
        let rows = encode_batch(batch)?;

        let mut plans = self.pricing_plans.write().await;
        if !plans.is_empty() {
            return Ok(SeedOutcome::Existing(decode_rows(&plans)?));
        }

        let inserted = decode_rows(&rows)?;
        plans.extend(rows);
        Ok(SeedOutcome::Inserted(inserted))
    }

    async fn count_testimonials(&self) -> Result<usize> {
        Ok(self.testimonials.read().await.len())
    }

    async fn count_pricing_plans(&self) -> Result<usize> {
        Ok(self.pricing_plans.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LandingError;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(secs)
    }

    fn plan(id: &str, price: u32) -> PricingPlan {
        PricingPlan::new(id, format!("Plan {id}"), price, "test plan")
            .with_features(["a", "b"])
    }

    #[tokio::test]
    async fn test_plans_sort_by_price() {
        let store = MemoryStore::new();
        store
            .create_pricing_plans(vec![plan("1", 79), plan("2", 29), plan("3", 199)])
            .await
            .unwrap();

        let asc = store.list_pricing_plans(Some(OrderBy::asc())).await.unwrap();
        let prices: Vec<u32> = asc.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![29, 79, 199]);

        let desc = store.list_pricing_plans(Some(OrderBy::desc())).await.unwrap();
        let prices: Vec<u32> = desc.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![199, 79, 29]);

        let unordered = store.list_pricing_plans(None).await.unwrap();
        let ids: Vec<&str> = unordered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_equal_prices_keep_insertion_order() {
        let store = MemoryStore::new();
        store
            .create_pricing_plans(vec![plan("a", 50), plan("b", 10), plan("c", 50)])
            .await
            .unwrap();

        for order in [OrderBy::asc(), OrderBy::desc()] {
            let plans = store.list_pricing_plans(Some(order)).await.unwrap();
            let a = plans.iter().position(|p| p.id == "a").unwrap();
            let c = plans.iter().position(|p| p.id == "c").unwrap();
            assert!(a < c, "tie order changed for {order:?}");
        }
    }

    #[tokio::test]
    async fn test_testimonials_newest_first_with_stable_ties() {
        let store = MemoryStore::new();
        store
            .create_testimonials(vec![
                Testimonial::new("1", "Old", "Co", "x").created_at(at(0)),
                Testimonial::new("2", "New A", "Co", "x").created_at(at(60)),
                Testimonial::new("3", "Mid", "Co", "x").created_at(at(30)),
                Testimonial::new("4", "New B", "Co", "x").created_at(at(60)),
            ])
            .await
            .unwrap();

        let desc = store.list_testimonials(Some(OrderBy::desc())).await.unwrap();
        let ids: Vec<&str> = desc.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "3", "1"]);

        let asc = store.list_testimonials(Some(OrderBy::asc())).await.unwrap();
        let ids: Vec<&str> = asc.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2", "4"]);
    }

    #[tokio::test]
    async fn test_features_are_decoded_on_read() {
        let store = MemoryStore::new();
        let original = plan("1", 29).with_features(["1 Chatbot", "Email support", "Basic analytics"]);
        store.create_pricing_plans(vec![original.clone()]).await.unwrap();

        let plans = store.list_pricing_plans(None).await.unwrap();
        assert_eq!(plans, vec![original]);
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_not_rejected() {
        let store = MemoryStore::new();
        let count = store
            .create_testimonials(vec![
                Testimonial::new("1", "A", "Co", "x"),
                Testimonial::new("1", "B", "Co", "y"),
            ])
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.count_testimonials().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_invalid_batch_inserts_nothing() {
        let store = MemoryStore::new();
        let result = store
            .create_pricing_plans(vec![plan("1", 29), plan("", 79)])
            .await;

        assert!(matches!(result, Err(LandingError::Validation(_))));
        assert_eq!(store.count_pricing_plans().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_conditional_insert_only_when_empty() {
        let store = MemoryStore::new();

        let first = store
            .create_testimonials_if_empty(vec![Testimonial::new("1", "A", "Co", "x")])
            .await
            .unwrap();
        assert!(first.was_inserted());

        let second = store
            .create_testimonials_if_empty(vec![
                Testimonial::new("9", "Z", "Co", "x"),
                Testimonial::new("10", "Y", "Co", "x"),
            ])
            .await
            .unwrap();
        assert!(!second.was_inserted());

        let existing = second.into_inner();
        assert_eq!(existing.len(), 1);
        assert_eq!(existing[0].id, "1");
        assert_eq!(store.count_testimonials().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_seeders_insert_once() {
        let store = std::sync::Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create_pricing_plans_if_empty(vec![plan("1", 29), plan("2", 79)])
                    .await
                    .unwrap()
                    .was_inserted()
            }));
        }

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(store.count_pricing_plans().await.unwrap(), 2);
    }
}
