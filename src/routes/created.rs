use crate::components::{Alert, AlertKind};
use leptos::prelude::*;

/// Terminal view shown once the signup request succeeds.
#[component]
pub fn UserCreatedPage() -> impl IntoView {
    view! {
        <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
            <div class="w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-sm sm:p-8">
                <h1 class="text-2xl font-semibold text-slate-900">"User created"</h1>
                <div class="mt-4">
                    <Alert
                        kind=AlertKind::Success
                        message="Your account has been created. You can now sign in.".to_string()
                    />
                </div>
            </div>
        </div>
    }
}
