use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::alert::use_alert_context;
use super::homepage::FullScreenSection;
use crate::contact::{ContactFormState, EnquiryType, Field};
use crate::submit::{run_submission, ServerSubmitter};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border bg-transparent focus:outline-none focus:ring-2 focus:ring-purple";

fn input_class(invalid: bool) -> String {
    if invalid {
        format!("{INPUT_CLASS} border-red-400")
    } else {
        format!("{INPUT_CLASS} border-white/40")
    }
}

#[component]
pub fn ContactMeSection() -> impl IntoView {
    let alerts = use_alert_context();
    let form = RwSignal::new(ContactFormState::new());
    let (is_loading, set_loading) = signal(false);

    // Either delivery path may arrive first; settle() only applies an id once
    Effect::new(move |_| {
        if let Some(outcome) = alerts.latest_response() {
            alerts.settle(form, &outcome);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = form
            .try_update(|s| s.begin_submit(|| alerts.next_submission_id()))
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            let outcome = run_submission(ticket, &ServerSubmitter, move |busy| set_loading.set(busy)).await;
            alerts.settle(form, &outcome);
            alerts.publish(outcome);
        });
    };

    let value = move |field: Field| form.with(|s| s.value(field).to_string());
    let invalid = move |field: Field| form.with(|s| s.visible_error(field).is_some());
    let on_input = move |field: Field, ev: leptos::ev::Event| {
        form.update(|s| s.update_field(field, event_target_value(&ev)));
    };
    let on_blur = move |field: Field| form.update(|s| s.blur_field(field));

    view! {
        <FullScreenSection background="bg-[#512DA8]" class="py-16 gap-8">
            <div class="w-full max-w-5xl p-8 lg:p-32 flex flex-col items-start">
                <h1 id="contactme-section" class="text-3xl font-bold mt-8">
                    "Contact me"
                </h1>
                <div class="p-6 rounded-md w-full">
                    <form on:submit=on_submit novalidate=true>
                        <div class="flex flex-col gap-4">
                            <div>
                                <label for="firstName" class="block mb-2 font-medium">
                                    "Name"
                                </label>
                                <input
                                    id="firstName"
                                    name=Field::FirstName.name()
                                    class=move || input_class(invalid(Field::FirstName))
                                    prop:value=move || value(Field::FirstName)
                                    on:input=move |ev| on_input(Field::FirstName, ev)
                                    on:blur=move |_| on_blur(Field::FirstName)
                                />
                                <FieldError form field=Field::FirstName />
                            </div>
                            <div>
                                <label for="email" class="block mb-2 font-medium">
                                    "Email Address"
                                </label>
                                <input
                                    id="email"
                                    name=Field::Email.name()
                                    type="email"
                                    class=move || input_class(invalid(Field::Email))
                                    prop:value=move || value(Field::Email)
                                    on:input=move |ev| on_input(Field::Email, ev)
                                    on:blur=move |_| on_blur(Field::Email)
                                />
                                <FieldError form field=Field::Email />
                            </div>
                            <div>
                                <label for="type" class="block mb-2 font-medium">
                                    "Type of enquiry"
                                </label>
                                <select
                                    id="type"
                                    name=Field::Enquiry.name()
                                    class=move || input_class(invalid(Field::Enquiry))
                                    prop:value=move || value(Field::Enquiry)
                                    on:change=move |ev| on_input(Field::Enquiry, ev)
                                    on:blur=move |_| on_blur(Field::Enquiry)
                                >
                                    <option value="" disabled=true class="text-black">
                                        "Select an option"
                                    </option>
                                    {EnquiryType::ALL
                                        .into_iter()
                                        .map(|t| {
                                            view! {
                                                <option value=t.as_str() class="text-black">
                                                    {t.label()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                                <FieldError form field=Field::Enquiry />
                            </div>
                            <div>
                                <label for="comment" class="block mb-2 font-medium">
                                    "Your message"
                                </label>
                                <textarea
                                    id="comment"
                                    name=Field::Comment.name()
                                    class=move || format!("{} h-64", input_class(invalid(Field::Comment)))
                                    prop:value=move || value(Field::Comment)
                                    on:input=move |ev| on_input(Field::Comment, ev)
                                    on:blur=move |_| on_blur(Field::Comment)
                                ></textarea>
                                <FieldError form field=Field::Comment />
                            </div>
                            <button
                                type="submit"
                                class="w-full px-4 py-2 rounded-md bg-purple hover:bg-brightPurple disabled:opacity-60 disabled:cursor-wait transition-all duration-200"
                                disabled=move || is_loading.get()
                            >
                                {move || if is_loading.get() { "Submitting..." } else { "Submit" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </FullScreenSection>
    }
}

#[component]
fn FieldError(form: RwSignal<ContactFormState>, field: Field) -> impl IntoView {
    move || {
        form.with(|s| s.visible_error(field)).map(|e| {
            view! { <p class="mt-1 text-sm text-red-300">{e.to_string()}</p> }
        })
    }
}
