//! Contact Section

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::{self, ContactForm};
use crate::components::{Toast, ToastMessage};

const SUBMIT_FAILED: &str = "There was a problem submitting your message. Please try again.";

#[component]
pub fn ContactSection() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let toast = RwSignal::new(None::<ToastMessage>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let form = ContactForm {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };
        if !form.is_complete() {
            toast.set(Some(ToastMessage::error("Error", "Please fill in all fields.")));
            return;
        }

        set_submitting.set(true);
        leptos::task::spawn_local(async move {
            match api::submit_contact_form(&form).await {
                Ok(ack) => {
                    toast.set(Some(ToastMessage::success("Success!", ack.message)));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                }
                // Keep the form filled so the user can retry
                Err(e) => {
                    leptos::logging::warn!("Contact form failed: {e}");
                    toast.set(Some(ToastMessage::error("Error", SUBMIT_FAILED)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section id="contact" class="contact">
            <h2>"Get in "<span class="gradient-text">"Touch"</span></h2>
            <div class="contact-card">
                <h3>"Contact Us"</h3>
                <form on:submit=on_submit>
                    <div class="field">
                        <label>"Name"</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Your name"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Message"</label>
                        <textarea
                            id="message"
                            placeholder="How can we help?"
                            required
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
            <Toast toast=toast />
        </section>
    }
}
