//! API Client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Testimonial as served by `/api/testimonials`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub company: String,
    pub content: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Pricing plan as served by `/api/pricing-plans`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub description: String,
    pub features: Vec<String>,
    pub is_popular: bool,
}

impl PricingPlan {
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// Contact form fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// All three fields filled in
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());
    format!("{origin}{path}")
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = reqwest::Client::new()
        .get(api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json::<T>().await.map_err(|e| e.to_string())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"].as_str().unwrap_or("Request failed").to_string())
    }
}

/// Testimonials, newest first
pub async fn get_testimonials() -> Result<Vec<Testimonial>, String> {
    get_json("/api/testimonials").await
}

/// Pricing plans, cheapest first
pub async fn get_pricing_plans() -> Result<Vec<PricingPlan>, String> {
    get_json("/api/pricing-plans").await
}

/// Submit the contact form
pub async fn submit_contact_form(form: &ContactForm) -> Result<ContactAck, String> {
    let response = reqwest::Client::new()
        .post(api_url("/api/contact"))
        .json(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err("Failed to submit contact form".into());
    }

    let ack: ContactAck = response.json().await.map_err(|e| e.to_string())?;
    if ack.success { Ok(ack) } else { Err(ack.message) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_requires_all_fields() {
        let mut form = ContactForm {
            name: "A".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        };
        assert!(form.is_complete());

        form.message = "   ".into();
        assert!(!form.is_complete());
        assert!(!ContactForm::default().is_complete());
    }

    #[test]
    fn test_plan_decodes_from_server_json() {
        let json = r#"{
            "id": "2",
            "name": "Professional",
            "price": 79,
            "description": "Ideal for growing businesses and e-commerce",
            "features": ["3 Chatbots", "API access"],
            "isPopular": true,
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let plan: PricingPlan = serde_json::from_str(json).unwrap();
        assert!(plan.is_popular);
        assert_eq!(plan.features, vec!["3 Chatbots", "API access"]);
        assert_eq!(plan.display_price(), "$79");
    }

    #[test]
    fn test_testimonial_without_avatar() {
        let json = r#"{"id":"1","name":"A","company":"B","content":"C"}"#;
        let t: Testimonial = serde_json::from_str(json).unwrap();
        assert!(t.avatar_url.is_none());
        assert!(t.created_at.is_none());
    }
}
