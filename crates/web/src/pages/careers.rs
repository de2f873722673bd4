// =============================================================================
// ZeroEdge Web - Careers Page
// =============================================================================
// Open positions and the application form
// =============================================================================

use leptos::prelude::*;

use crate::api::{self, ApiClient, ApplicationRequest, JobOpening};
use crate::components::{ErrorDisplay, Footer, HoneypotField, LoadingSpinner, SiteNav, TextArea, TextInput};
use crate::state::AppState;

#[component]
pub fn CareersPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let openings = RwSignal::new(Vec::<JobOpening>::new());
    let is_loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);
    let position = RwSignal::new(String::new());

    let api_url = app_state.api_url.clone();
    Effect::new(move |_| {
        let api_url = api_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_openings(&ApiClient::new(&api_url)).await {
                Ok(list) => openings.set(list),
                Err(e) => error_message.set(Some(format!("Failed to load openings: {}", e))),
            }
            is_loading.set(false);
        });
    });

    view! {
        <div class="page page-careers">
            <SiteNav active="careers" />

            <section class="section">
                <h1 class="page-title">"Join ZeroEdge"</h1>
                <p class="page-subtitle">"We're a remote team building games for the Stake ecosystem."</p>

                {move || error_message.get().map(|message| view! { <ErrorDisplay message=message /> })}

                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <LoadingSpinner message="Loading openings..." /> }
                >
                    <div class="job-list">
                        <For
                            each=move || openings.get()
                            key=|job| job.id.clone()
                            children=move |job| view! { <JobCard job=job position=position /> }
                        />
                    </div>
                </Show>
            </section>

            <ApplicationForm api_url=app_state.api_url.clone() openings=openings position=position />

            <Footer />
        </div>
    }
}

#[component]
fn JobCard(job: JobOpening, position: RwSignal<String>) -> impl IntoView {
    let id = job.id.clone();
    let requirements = job
        .requirements
        .iter()
        .map(|requirement| view! { <li>{requirement.clone()}</li> })
        .collect_view();

    view! {
        <article class="job-card">
            <h2 class="job-title">{job.title.clone()}</h2>
            <div class="job-meta">
                <span class="tag">{job.department.clone()}</span>
                <span class="tag">{job.employment.clone()}</span>
                <span class="tag">{job.location.clone()}</span>
            </div>
            <p>{job.description.clone()}</p>
            <ul class="job-requirements">{requirements}</ul>
            <a href="#apply" class="btn btn-ghost" on:click=move |_| position.set(id.clone())>
                "Apply for this position"
            </a>
        </article>
    }
}

#[component]
fn ApplicationForm(
    api_url: String,
    openings: RwSignal<Vec<JobOpening>>,
    position: RwSignal<String>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let linkedin = RwSignal::new(String::new());
    let github = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let honeypot = RwSignal::new(String::new());

    let submitting = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let request = ApplicationRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            position: position.get_untracked(),
            linkedin: linkedin.get_untracked(),
            github: github.get_untracked(),
            message: message.get_untracked(),
            honeypot: honeypot.get_untracked(),
        };

        submitting.set(true);
        error_message.set(None);
        let api_url = api_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::submit_application(&ApiClient::new(&api_url), &request).await {
                Ok(response) => {
                    log::info!("Application {} submitted", response.id);
                    sent.set(response.success);
                }
                Err(e) => error_message.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    view! {
        <section class="section application-section" id="apply">
            <h2 class="section-title">"Apply"</h2>
            <Show
                when=move || !sent.get()
                fallback=|| view! { <p class="form-sent">"Application received. Thanks for your interest!"</p> }
            >
                <form class="application-form" on:submit=on_submit.clone()>
                    <TextInput label="Name" value=name required=true />
                    <TextInput label="Email" value=email input_type="email" required=true />
                    <div class="form-field">
                        <label class="form-label">"Position" <span class="required">"*"</span></label>
                        <select
                            class="form-select"
                            prop:value=move || position.get()
                            on:change=move |e| position.set(event_target_value(&e))
                        >
                            <option value="">"Select a position"</option>
                            <For
                                each=move || openings.get()
                                key=|job| job.id.clone()
                                children=|job| view! { <option value=job.id.clone()>{job.title.clone()}</option> }
                            />
                        </select>
                    </div>
                    <TextInput label="LinkedIn" value=linkedin input_type="url" placeholder="https://linkedin.com/in/..." />
                    <TextInput label="GitHub" value=github input_type="url" placeholder="https://github.com/..." />
                    <TextArea label="Why ZeroEdge?" value=message rows=6 />
                    <HoneypotField value=honeypot />
                    {move || error_message.get().map(|message| view! { <ErrorDisplay message=message /> })}
                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        "Submit Application"
                    </button>
                </form>
            </Show>
        </section>
    }
}
