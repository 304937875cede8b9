//! Landing Page Records
//!
//! Shapes served to the presentation layer. Field names are camelCase on the
//! wire (`avatarUrl`, `createdAt`, `isPopular`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LandingError, Result};

/// A customer quote shown in the testimonials section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Caller-supplied identifier, unique within the collection
    pub id: String,

    /// Author name
    pub name: String,

    pub company: String,

    /// Quote text
    pub content: String,

    /// Placeholder avatar image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Set once at creation, never mutated
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        company: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            company: company.into(),
            content: content.into(),
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    /// Attach an avatar URL
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Override the creation timestamp (imports, fixtures)
    #[must_use]
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Presence check for the fields the store keys on
    pub fn validate(&self) -> Result<()> {
        require("testimonial id", &self.id)?;
        require("testimonial name", &self.name)
    }
}

/// A subscription tier shown in the pricing section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: String,

    /// Tier name ("Starter", "Professional", ...)
    pub name: String,

    /// Whole currency units per month
    pub price: u32,

    pub description: String,

    /// Ordered feature bullet points
    pub features: Vec<String>,

    /// Gets the "Most Popular" styling. Not enforced unique.
    pub is_popular: bool,

    pub created_at: DateTime<Utc>,
}

impl PricingPlan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
            features: Vec::new(),
            is_popular: false,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn popular(mut self, is_popular: bool) -> Self {
        self.is_popular = is_popular;
        self
    }

    #[must_use]
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("pricing plan id", &self.id)?;
        require("pricing plan name", &self.name)
    }
}

/// Contact form payload. Never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgment returned for a contact submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LandingError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_serializes_camel_case() {
        let t = Testimonial::new("1", "Sarah Johnson", "TechSolutions Inc.", "Great")
            .with_avatar("https://i.pravatar.cc/150?img=5");
        let json = serde_json::to_value(&t).unwrap();

        assert_eq!(json["avatarUrl"], "https://i.pravatar.cc/150?img=5");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("avatar_url").is_none());
    }

    #[test]
    fn test_missing_avatar_is_omitted() {
        let t = Testimonial::new("1", "A", "B", "C");
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.get("avatarUrl").is_none());
    }

    #[test]
    fn test_plan_validation() {
        assert!(PricingPlan::new("1", "Starter", 29, "").validate().is_ok());

        let err = PricingPlan::new("", "Starter", 29, "").validate().unwrap_err();
        assert!(matches!(err, LandingError::Validation(_)));

        let err = PricingPlan::new("1", "  ", 29, "").validate().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_plan_is_popular_wire_name() {
        let plan = PricingPlan::new("2", "Professional", 79, "").popular(true);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["isPopular"], true);
    }
}
