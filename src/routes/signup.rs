//! Signup route that drives the form state machine. Validation runs locally
//! on every edit, the request goes out only when both fields pass, and the
//! response status is folded into a user-facing outcome. The bearer token is
//! read from the page URL once at mount.

use crate::{
    components::{Alert, AlertKind, Button, Spinner},
    features::signup::{
        client,
        form::SignupForm,
        outcome::SubmissionOutcome,
        token,
        types::SignupRequest,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};

#[derive(Clone)]
/// Captures form input for the async action without borrowing signals.
struct SubmitInput {
    request: SignupRequest,
    bearer_token: Option<String>,
}

/// Renders the signup form and submits credentials when validation passes.
/// On success the host swaps in the user-created view.
#[component]
pub fn CreateUserPage(set_user_was_created: WriteSignal<bool>) -> impl IntoView {
    let form = RwSignal::new(SignupForm::new());
    let bearer_token = StoredValue::new(token::bearer_token());

    let submit_action = Action::new_local(move |input: &SubmitInput| {
        let input = input.clone();
        async move { client::signup(&input.request, input.bearer_token.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = submit_action.value().get() {
            form.update(|state| state.finish_submit(&outcome));
            if outcome == SubmissionOutcome::Success {
                set_user_was_created.set(true);
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let mut ready = false;
        form.update(|state| ready = state.begin_submit());
        if !ready {
            return;
        }

        let state = form.get_untracked();
        submit_action.dispatch(SubmitInput {
            request: SignupRequest {
                username: state.username().to_string(),
                password: state.password().to_string(),
            },
            bearer_token: bearer_token.get_value(),
        });
    };

    let username_invalid =
        move || form.with(|state| state.touched().username && !state.username_valid());
    let password_invalid =
        move || form.with(|state| state.touched().password && !state.password_valid());
    let submitting = move || form.with(|state| state.is_submitting());

    view! {
        <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
            <form
                class="w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-sm sm:p-8"
                on:submit=on_submit
            >
                <div class="space-y-2">
                    <h1 class="text-2xl font-semibold text-slate-900">"Create User"</h1>
                    <p class="text-sm text-slate-500">
                        "Pick a username and a password that meets every rule below."
                    </p>
                </div>

                <div class="mt-6 space-y-4">
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-slate-700"
                            for="username"
                        >
                            "Username"
                        </label>
                        <input
                            id="username"
                            type="text"
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                            class:border-red-400=username_invalid
                            autocomplete="username"
                            autofocus
                            aria-invalid=move || username_invalid().to_string()
                            on:input=move |event| {
                                form.update(|state| state.set_username(event_target_value(&event)));
                            }
                            on:blur=move |_| form.update(|state| state.blur_username())
                        />
                        {move || {
                            username_invalid()
                                .then_some(view! {
                                    <p class="mt-2 text-sm text-red-600">
                                        "Username cannot be empty"
                                    </p>
                                })
                        }}
                    </div>
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-slate-700"
                            for="password"
                        >
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                            class:border-red-400=password_invalid
                            autocomplete="new-password"
                            aria-invalid=move || password_invalid().to_string()
                            on:input=move |event| {
                                form.update(|state| state.set_password(event_target_value(&event)));
                            }
                            on:blur=move |_| form.update(|state| state.blur_password())
                        />
                        <div aria-live="polite">
                            {move || {
                                form.with(|state| {
                                    (!state.password().is_empty()).then(|| {
                                        let unmet = state.unmet_rules();
                                        view! {
                                            <ul class="mt-2 space-y-1 text-sm text-red-600">
                                                {unmet
                                                    .into_iter()
                                                    .map(|rule| view! { <li>{rule}</li> })
                                                    .collect_view()}
                                            </ul>
                                        }
                                    })
                                })
                            }}
                        </div>
                    </div>

                    <Button button_type="submit" disabled=Signal::derive(submitting)>
                        "Create User"
                    </Button>
                </div>

                {move || submitting().then_some(view! { <div class="mt-4"><Spinner /></div> })}
                {move || {
                    form.with(|state| {
                        state
                            .api_error()
                            .map(|message| {
                                view! {
                                    <div class="mt-4">
                                        <Alert
                                            kind=AlertKind::Error
                                            message=message.to_string()
                                        />
                                    </div>
                                }
                            })
                    })
                }}
            </form>
        </div>
    }
}
