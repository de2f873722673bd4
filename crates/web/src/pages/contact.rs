// =============================================================================
// ZeroEdge Web - Contact Page
// =============================================================================

use leptos::prelude::*;

use crate::api::{self, ApiClient, ContactRequest};
use crate::components::{ErrorDisplay, Footer, HoneypotField, SiteNav, TextArea, TextInput};
use crate::state::AppState;

fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let honeypot = RwSignal::new(String::new());

    let submitting = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let api_url = app_state.api_url.clone();
    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let request = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: optional(phone.get_untracked()),
            company: optional(company.get_untracked()),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
            honeypot: honeypot.get_untracked(),
        };

        submitting.set(true);
        error_message.set(None);
        let api_url = api_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::submit_contact(&ApiClient::new(&api_url), &request).await {
                Ok(response) => {
                    log::info!("Contact message {} submitted", response.id);
                    sent.set(response.success);
                }
                Err(e) => error_message.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="page page-contact">
            <SiteNav active="contact" />

            <section class="section contact-section">
                <h1 class="page-title">"Get in Touch"</h1>
                <p class="page-subtitle">
                    "Licensing, partnerships or press. Send us a note and we'll reply within two business days."
                </p>

                <Show
                    when=move || !sent.get()
                    fallback=|| view! { <p class="form-sent">"Message sent! We'll get back to you soon."</p> }
                >
                    <form class="contact-form" on:submit=on_submit.clone()>
                        <TextInput label="Name" value=name required=true />
                        <TextInput label="Email" value=email input_type="email" required=true />
                        <TextInput label="Company" value=company placeholder="Optional" />
                        <TextInput label="Phone" value=phone placeholder="Optional" />
                        <TextInput label="Subject" value=subject required=true />
                        <TextArea label="Message" value=message />
                        <HoneypotField value=honeypot />
                        {move || error_message.get().map(|message| view! { <ErrorDisplay message=message /> })}
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            "Send Message"
                        </button>
                    </form>
                </Show>
            </section>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optional_fields_are_omitted() {
        assert_eq!(optional("  ".into()), None);
        assert_eq!(optional("ZeroEdge".into()).as_deref(), Some("ZeroEdge"));
    }
}
