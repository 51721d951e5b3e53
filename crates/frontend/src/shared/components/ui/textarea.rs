use leptos::prelude::*;

#[component]
pub fn Textarea(
    #[prop(optional)]
    placeholder: &'static str,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    view! {
        <textarea
            class="form__textarea"
            placeholder=placeholder
            rows=rows.unwrap_or(5)
        ></textarea>
    }
}
