//! Home Page

use leptos::prelude::*;

use crate::api::{self, PricingPlan, Testimonial};
use crate::components::{FeatureCard, Footer, NavBar, PricingCard, StepCard, TestimonialCard};
use crate::pages::ContactSection;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "🗄️",
        "Custom Knowledge Base",
        "Upload your documents, FAQs, and product information to create a personalized knowledge base that your chatbot can reference.",
    ),
    (
        "⚡",
        "5-Minute Integration",
        "Add our chatbot to your website with just two lines of code. No complex setup or technical knowledge required.",
    ),
    (
        "✨",
        "AI Personalization",
        "Our advanced AI learns from interactions to provide increasingly personalized responses that match your brand voice.",
    ),
    (
        "🎨",
        "Seamless Customization",
        "Customize the appearance of your chatbot to match your website's design and branding with our intuitive visual editor.",
    ),
    (
        "💬",
        "Multi-Channel Support",
        "Deploy your chatbot across your website, mobile app, and social media platforms with consistent performance.",
    ),
    (
        "📊",
        "Analytics Dashboard",
        "Gain insights into customer interactions, popular questions, and chatbot performance with our comprehensive analytics.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Upload Your Knowledge",
        "Upload your documents, FAQs, product information, and any other content you want your chatbot to know about.",
    ),
    (
        "Customize Your Chatbot",
        "Personalize the appearance and behavior of your chatbot to match your brand and meet your specific needs.",
    ),
    (
        "Integrate & Launch",
        "Add two simple lines of code to your website and your AI chatbot is ready to assist your visitors.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let (testimonials, set_testimonials) = signal(Vec::<Testimonial>::new());
    let (plans, set_plans) = signal(Vec::<PricingPlan>::new());

    leptos::task::spawn_local(async move {
        match api::get_testimonials().await {
            Ok(data) => set_testimonials.set(data),
            Err(e) => leptos::logging::warn!("Failed to load testimonials: {e}"),
        }
    });

    leptos::task::spawn_local(async move {
        match api::get_pricing_plans().await {
            Ok(data) => set_plans.set(data),
            Err(e) => leptos::logging::warn!("Failed to load pricing plans: {e}"),
        }
    });

    view! {
        <div class="home">
            <NavBar />

            <header class="hero">
                <h1>"Personal AI Chatbots, "<span class="gradient-text">"Integrated in Minutes"</span></h1>
                <p class="tagline">
                    "Create highly personalized AI chatbots with your own knowledge base and integrate them into your website in under 5 minutes. No coding required."
                </p>
                <div class="cta">
                    <a href="#pricing" class="btn btn-primary">"Get Started"</a>
                    <a href="#how-it-works" class="btn">"See How It Works"</a>
                </div>
                <div class="snippet">
                    <div class="snippet-title">"ChatMind Integration"</div>
                    <pre>
                        <code>
                            "// Add this to your website\n"
                            "<script src=\"https://cdn.chatmind.ai/widget.js\"></script>\n"
                            "<div id=\"chatmind-widget\" data-api-key=\"YOUR_API_KEY\"></div>"
                        </code>
                    </pre>
                </div>
            </header>

            <section id="features" class="features">
                <h2>"Powerful Features, "<span class="gradient-text">"Simple Integration"</span></h2>
                <div class="feature-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, description)| {
                            view! { <FeatureCard icon=icon title=title description=description /> }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2>"How It "<span class="gradient-text">"Works"</span></h2>
                <div class="steps">
                    {STEPS
                        .into_iter()
                        .zip(1u8..)
                        .map(|((title, description), number)| {
                            view! { <StepCard number=number title=title description=description /> }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <h2>"What Our "<span class="gradient-text">"Customers Say"</span></h2>
                <div class="testimonial-grid">
                    <For
                        each=move || testimonials.get()
                        key=|t| t.id.clone()
                        children=move |t| view! { <TestimonialCard testimonial=t /> }
                    />
                </div>
            </section>

            <section id="pricing" class="pricing">
                <h2>"Simple, "<span class="gradient-text">"Transparent Pricing"</span></h2>
                <div class="plans">
                    <For
                        each=move || plans.get()
                        key=|p| p.id.clone()
                        children=move |p| view! { <PricingCard plan=p /> }
                    />
                </div>
            </section>

            <ContactSection />

            <Footer />
        </div>
    }
}
