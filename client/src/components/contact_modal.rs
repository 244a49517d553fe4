//! Contact overlay with the validated message form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the page root. It opens when any element marked
//! `data-contact-trigger` is clicked (delegated from the window, so triggers
//! rendered later are covered too) or when the location fragment is
//! `#contact`, both at mount and on every `hashchange`.
//!
//! DESIGN
//! ======
//! All form logic lives in [`ContactFormState`]; this component only wires DOM
//! events to it. Submission and the post-success reset run in a spawned task
//! that carries a [`SubmitTicket`](crate::state::contact::SubmitTicket), so a
//! task that outlives its overlay session is ignored by the state machine.

#[cfg(test)]
#[path = "contact_modal_test.rs"]
mod contact_modal_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::PORTFOLIO;
use crate::net::submit::{ContactSubmitter, SimulatedSubmitter};
use crate::state::contact::{ContactFormState, SUCCESS_RESET_DELAY_MS, SubmitStatus};
use crate::util::clock::sleep_ms;
use crate::util::contact_validation::ContactField;
use crate::util::location::clear_contact_fragment;

/// Static presentation of one form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    pub label: &'static str,
    pub icon: &'static str,
    pub placeholder: &'static str,
    /// `<input type>`; `None` renders a `<textarea>`.
    pub input_type: Option<&'static str>,
}

#[must_use]
pub fn field_meta(field: ContactField) -> FieldMeta {
    match field {
        ContactField::Name => FieldMeta {
            label: "Full Name",
            icon: "👤",
            placeholder: "Enter your full name",
            input_type: Some("text"),
        },
        ContactField::Email => FieldMeta {
            label: "Email Address",
            icon: "✉",
            placeholder: "Enter your email address",
            input_type: Some("email"),
        },
        ContactField::Subject => FieldMeta {
            label: "Subject",
            icon: "",
            placeholder: "What's this about?",
            input_type: Some("text"),
        },
        ContactField::Message => FieldMeta {
            label: "Message",
            icon: "💬",
            placeholder: "Tell me about your project or inquiry...",
            input_type: None,
        },
    }
}

/// Submit button content and colour modifier for a status.
#[must_use]
pub fn submit_button(status: &SubmitStatus) -> (&'static str, &'static str) {
    match status {
        SubmitStatus::Idle => ("➤ Send Message", "idle"),
        SubmitStatus::Submitting => ("Sending...", "submitting"),
        SubmitStatus::Success => ("✓ Message Sent!", "success"),
        SubmitStatus::Error(_) => ("⚠ Try Again", "error"),
    }
}

#[component]
fn ContactInput(field: ContactField, state: RwSignal<ContactFormState>) -> impl IntoView {
    let meta = field_meta(field);
    let value = move || state.with(|s| s.fields.get(field).to_owned());
    let error = move || state.with(|s| s.error_for(field));
    let class = move || {
        if error().is_some() { "form__control form__control--invalid" } else { "form__control" }
    };
    let on_input = move |ev: leptos::ev::Event| state.update(|s| s.set_field(field, event_target_value(&ev)));

    let control = match meta.input_type {
        Some(kind) => view! {
            <input type=kind class=class placeholder=meta.placeholder prop:value=value on:input=on_input/>
        }
        .into_any(),
        None => view! {
            <textarea rows="5" class=class placeholder=meta.placeholder prop:value=value on:input=on_input></textarea>
        }
        .into_any(),
    };

    view! {
        <div class="form__field">
            <label class="form__label">
                {(!meta.icon.is_empty()).then(|| view! { <span class="form__icon">{meta.icon}</span> })}
                {meta.label}
            </label>
            {control}
            {move || error().map(|message| view! { <p class="form__error">"⚠ " {message}</p> })}
        </div>
    }
}

#[component]
pub fn ContactModal() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::default());
    let submitter = SimulatedSubmitter::default();
    let profile = PORTFOLIO.profile;
    let body_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::location::{current_hash, fragment_opens_contact, is_contact_trigger};

        // Fragment check runs after hydration so the server markup matches.
        Effect::new(move || {
            if fragment_opens_contact(&current_hash()) {
                state.update(ContactFormState::open);
            }
        });

        let clicks = window_event_listener(leptos::ev::click, move |ev| {
            if is_contact_trigger(&ev) {
                state.update(ContactFormState::open);
            }
        });
        let hash_changes = window_event_listener(leptos::ev::hashchange, move |_| {
            if fragment_opens_contact(&current_hash()) {
                state.update(ContactFormState::open);
            }
        });
        on_cleanup(move || {
            clicks.remove();
            hash_changes.remove();
        });

        Effect::new(move || {
            if let Some(body) = body_ref.get() {
                if let Err(err) = body.focus() {
                    log::warn!("contact modal could not take focus: {err:?}");
                }
            }
        });
    }

    let close = move || {
        state.update(ContactFormState::close);
        clear_contact_fragment();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = state.try_update(ContactFormState::begin_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = submitter.submit(&ticket.payload).await;
            let succeeded = outcome.is_ok();
            let applied = state.try_update(|s| s.finish_submit(&ticket, outcome)).unwrap_or(false);
            if !(applied && succeeded) {
                return;
            }
            sleep_ms(SUCCESS_RESET_DELAY_MS).await;
            if state.try_update(|s| s.complete_reset(&ticket)).unwrap_or(false) {
                clear_contact_fragment();
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let button = move || state.with(|s| submit_button(&s.status));

    view! {
        <Show when=move || state.with(|s| s.open)>
            <div class="modal__backdrop" on:click=move |_| close()>
                <div
                    class="modal contact-modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="contact-title"
                    tabindex="-1"
                    node_ref=body_ref
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="contact-modal__header">
                        <button class="modal__close" title="Close" on:click=move |_| close()>
                            "✕"
                        </button>
                        <h2 id="contact-title">"Get In Touch"</h2>
                        <p>"Have a project in mind? Let's discuss how we can work together!"</p>
                    </div>

                    <div class="contact-modal__info">
                        <div>
                            <p class="contact-modal__info-label">"Email"</p>
                            <p>{profile.email}</p>
                        </div>
                        <div>
                            <p class="contact-modal__info-label">"Phone"</p>
                            <p>{profile.phone}</p>
                        </div>
                    </div>

                    <form class="form" on:submit=on_submit novalidate=true>
                        {ContactField::ALL
                            .into_iter()
                            .map(|field| view! { <ContactInput field=field state=state/> })
                            .collect_view()}
                        <button
                            type="submit"
                            class=move || format!("form__submit form__submit--{}", button().1)
                            disabled=move || state.with(ContactFormState::submit_disabled)
                        >
                            {move || button().0}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
