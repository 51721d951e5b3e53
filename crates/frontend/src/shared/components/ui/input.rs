use leptos::prelude::*;

/// Uncontrolled text input. Values are not read anywhere: every form on the site is a stub.
#[component]
pub fn Input(
    /// Input type (text, email, ...)
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)]
    placeholder: &'static str,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <input
            class=format!("form__input {}", class)
            type=input_type.unwrap_or("text")
            placeholder=placeholder
        />
    }
}
