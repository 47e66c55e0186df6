use leptos::prelude::*;

use crate::contact::{settle, ContactFormState};
use crate::notify::{AlertCenter, Notification, NotificationKind};
use crate::submit::{SubmissionId, SubmissionOutcome};

/// Page-wide notification slot plus the ambient channel that carries the most
/// recent submission outcome to whoever listens.
#[derive(Debug, Clone, Copy)]
pub struct AlertContext {
    center: RwSignal<AlertCenter>,
    latest_response: RwSignal<Option<SubmissionOutcome>>,
}

impl AlertContext {
    pub fn provide() -> Self {
        let ctx = Self {
            center: RwSignal::new(AlertCenter::new()),
            latest_response: RwSignal::new(None),
        };
        provide_context(ctx);
        ctx
    }

    /// Allocating an id changes nothing on screen, so no subscriber is woken.
    pub fn next_submission_id(&self) -> SubmissionId {
        self.center.write_untracked().next_submission_id()
    }

    /// Apply an outcome from either delivery path to `form` and the slot.
    pub fn settle(&self, form: RwSignal<ContactFormState>, outcome: &SubmissionOutcome) -> bool {
        form.try_update(|f| self.center.try_update(|c| settle(f, c, outcome)))
            .flatten()
            .unwrap_or(false)
    }

    pub fn dismiss(&self) {
        self.center.update(|c| c.dismiss());
    }

    /// Tracked read of the notification on screen.
    pub fn current(&self) -> Option<Notification> {
        self.center.with(|c| c.current().cloned())
    }

    pub fn publish(&self, outcome: SubmissionOutcome) {
        self.latest_response.set(Some(outcome));
    }

    /// Tracked read of the last published outcome.
    pub fn latest_response(&self) -> Option<SubmissionOutcome> {
        self.latest_response.get()
    }
}

pub fn use_alert_context() -> AlertContext {
    expect_context::<AlertContext>()
}

#[component]
pub fn Alert() -> impl IntoView {
    let alerts = use_alert_context();
    move || {
        alerts.current().map(|n| {
            let (panel, accent) = match n.kind {
                NotificationKind::Success => ("bg-[#81C784]", "text-green-900"),
                NotificationKind::Error => ("bg-[#FF8A65]", "text-red-900"),
            };
            view! {
                <div class="fixed inset-0 z-20 flex items-center justify-center bg-black/50">
                    <div
                        role="alertdialog"
                        aria-live="assertive"
                        class=format!("w-full max-w-md p-6 rounded-lg shadow-2xl text-black {panel}")
                    >
                        <h2 class=format!("text-xl font-bold mb-4 {accent}")>{n.kind.title()}</h2>
                        <p class="mb-6">{n.message}</p>
                        <div class="flex justify-end">
                            <button
                                class="px-4 py-2 rounded-md bg-black/20 hover:bg-black/30 transition-colors duration-200"
                                on:click=move |_| alerts.dismiss()
                            >
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
