//! Form markup. Validation and submission are handled by the runtime, so
//! native browser validation is switched off with `novalidate`.

use leptos::prelude::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    view! {
        <form id="contact-form" class="contact-form" novalidate=true>
            <div class="form-group">
                <label for="contact-name">"Name"</label>
                <input type="text" id="contact-name" name="name" required=true />
            </div>
            <div class="form-group">
                <label for="contact-email">"Email"</label>
                <input type="email" id="contact-email" name="email" required=true />
            </div>
            <div class="form-group">
                <label for="contact-message">"Message"</label>
                <textarea id="contact-message" name="message" rows="6" required=true></textarea>
            </div>
            <button type="submit" id="contact-submit" class="btn btn-primary">
                "Send Message"
            </button>
        </form>
    }
}

#[component]
pub fn NewsletterForm() -> impl IntoView {
    view! {
        <form id="newsletter-form" class="newsletter-form" novalidate=true>
            <p>"Get new posts by email. No spam, unsubscribe any time."</p>
            <div class="newsletter-row">
                <input
                    type="email"
                    id="newsletter-email"
                    name="email"
                    placeholder="you@example.com"
                    required=true
                />
                <button type="submit" class="btn">"Subscribe"</button>
            </div>
        </form>
    }
}
