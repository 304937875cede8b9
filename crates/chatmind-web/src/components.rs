//! UI Components

use leptos::prelude::*;

use crate::api::{PricingPlan, Testimonial};

/// Fallback when a testimonial has no avatar
const DEFAULT_AVATAR: &str = "https://i.pravatar.cc/150";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Dismissible notification
#[component]
pub fn Toast(toast: RwSignal<Option<ToastMessage>>) -> impl IntoView {
    move || {
        toast.get().map(|message| {
            let class = format!("toast toast-{}", message.variant.as_str());
            view! {
                <div class=class role="status">
                    <div class="toast-body">
                        <strong>{message.title}</strong>
                        <p>{message.description}</p>
                    </div>
                    <button class="toast-close" on:click=move |_| toast.set(None)>"×"</button>
                </div>
            }
        })
    }
}

/// Feature grid card
#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature">
            <span class="feature-icon">{icon}</span>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

/// Numbered how-it-works step
#[component]
pub fn StepCard(number: u8, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="step">
            <span class="step-number">{number}</span>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let avatar = testimonial
        .avatar_url
        .clone()
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

    view! {
        <div class="testimonial">
            <p class="quote">{format!("\"{}\"", testimonial.content)}</p>
            <div class="author">
                <img class="avatar" src=avatar alt=testimonial.name.clone() />
                <div>
                    <p class="author-name">{testimonial.name.clone()}</p>
                    <p class="author-company">{testimonial.company.clone()}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn PricingCard(plan: PricingPlan) -> impl IntoView {
    let price = plan.display_price();
    let PricingPlan {
        name,
        description,
        features,
        is_popular,
        ..
    } = plan;
    let class = if is_popular { "plan featured" } else { "plan" };
    let button_class = if is_popular { "btn btn-primary" } else { "btn" };

    view! {
        <div class=class>
            {is_popular.then(|| view! { <span class="badge">"Most Popular"</span> })}
            <h2>{name}</h2>
            <p class="description">{description}</p>
            <div class="price">{price}<span>"/month"</span></div>
            <ul>
                {features
                    .into_iter()
                    .map(|feature| view! { <li>"✓ "{feature}</li> })
                    .collect_view()}
            </ul>
            <a href="#contact" class=button_class>"Get Started"</a>
        </div>
    }
}

/// Top navigation with section anchors
#[component]
pub fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <a href="#" class="brand gradient-text">"ChatMind"</a>
            <button class="menu-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                <a href="#features">"Features"</a>
                <a href="#how-it-works">"How It Works"</a>
                <a href="#testimonials">"Testimonials"</a>
                <a href="#pricing">"Pricing"</a>
                <a href="#contact" class="btn btn-primary">"Contact"</a>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-columns">
                <div>
                    <h3>"ChatMind"</h3>
                    <p>"Personal AI chatbots, integrated in minutes."</p>
                </div>
                <div>
                    <h3>"Product"</h3>
                    <ul>
                        <li><a href="#features">"Features"</a></li>
                        <li><a href="#pricing">"Pricing"</a></li>
                        <li><a href="#">"Documentation"</a></li>
                        <li><a href="#">"API"</a></li>
                    </ul>
                </div>
                <div>
                    <h3>"Company"</h3>
                    <ul>
                        <li><a href="#">"About"</a></li>
                        <li><a href="#">"Blog"</a></li>
                        <li><a href="#">"Careers"</a></li>
                        <li><a href="#contact">"Contact"</a></li>
                    </ul>
                </div>
                <div>
                    <h3>"Legal"</h3>
                    <ul>
                        <li><a href="#">"Privacy Policy"</a></li>
                        <li><a href="#">"Terms of Service"</a></li>
                        <li><a href="#">"Cookie Policy"</a></li>
                    </ul>
                </div>
            </div>
            <p class="copyright">"© ChatMind. All rights reserved."</p>
        </footer>
    }
}
