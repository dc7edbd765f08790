use crate::routes::{CreateUserPage, UserCreatedPage};
use leptos::prelude::*;

/// App root: renders the signup form until a user has been created, then
/// swaps in the terminal confirmation view.
#[component]
pub fn App() -> impl IntoView {
    let (user_was_created, set_user_was_created) = signal(false);

    view! {
        <Show
            when=move || user_was_created.get()
            fallback=move || view! { <CreateUserPage set_user_was_created=set_user_was_created /> }
        >
            <UserCreatedPage />
        </Show>
    }
}
