//! Default landing page content
//!
//! Inserted once into an empty store at startup. Every record in a batch
//! shares one creation timestamp, so newest-first listings keep the order
//! below.

use chrono::{DateTime, Utc};

use crate::model::{PricingPlan, Testimonial};

/// A testimonial before its avatar has been generated
#[derive(Clone, Copy, Debug)]
pub struct SeedTestimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    /// Description handed to the image model
    pub avatar_prompt: &'static str,
}

impl SeedTestimonial {
    pub fn into_testimonial(self, avatar_url: String, created_at: DateTime<Utc>) -> Testimonial {
        Testimonial::new(self.id, self.name, self.company, self.content)
            .with_avatar(avatar_url)
            .created_at(created_at)
    }
}

pub const SEED_TESTIMONIALS: [SeedTestimonial; 3] = [
    SeedTestimonial {
        id: "1",
        name: "Sarah Johnson",
        company: "TechSolutions Inc.",
        content: "ChatMind transformed our customer support. We integrated it in minutes and saw a 40% reduction in response time. The personalization options are incredible!",
        avatar_prompt: "professional woman with short brown hair",
    },
    SeedTestimonial {
        id: "2",
        name: "Michael Chen",
        company: "GrowthLabs",
        content: "The knowledge base integration is seamless. Our chatbot answers questions exactly like our team would. Setup was incredibly fast - under 5 minutes as promised.",
        avatar_prompt: "asian man with glasses, professional",
    },
    SeedTestimonial {
        id: "3",
        name: "Jessica Williams",
        company: "Startup Foundry",
        content: "As a startup founder, I needed something quick and effective. ChatMind delivered beyond expectations. Our conversion rate increased by 25% in the first month.",
        avatar_prompt: "young professional woman with curly hair",
    },
];

/// The three default pricing tiers
pub fn seed_pricing_plans(created_at: DateTime<Utc>) -> Vec<PricingPlan> {
    vec![
        PricingPlan::new(
            "1",
            "Starter",
            29,
            "Perfect for small websites and personal projects",
        )
        .with_features([
            "1 Chatbot",
            "5,000 messages/month",
            "Basic knowledge base integration",
            "Email support",
            "Basic analytics",
        ])
        .created_at(created_at),
        PricingPlan::new(
            "2",
            "Professional",
            79,
            "Ideal for growing businesses and e-commerce",
        )
        .with_features([
            "3 Chatbots",
            "25,000 messages/month",
            "Advanced knowledge base integration",
            "Priority support",
            "Detailed analytics",
            "Custom branding",
            "API access",
        ])
        .popular(true)
        .created_at(created_at),
        PricingPlan::new(
            "3",
            "Enterprise",
            199,
            "For large organizations with complex needs",
        )
        .with_features([
            "Unlimited Chatbots",
            "100,000 messages/month",
            "Enterprise knowledge base integration",
            "24/7 dedicated support",
            "Advanced analytics & reporting",
            "Custom development",
            "Full API access",
            "SSO & advanced security",
        ])
        .created_at(created_at),
    ]
}
