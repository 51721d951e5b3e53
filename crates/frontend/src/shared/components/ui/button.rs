use crate::shared::icons::icon as render_icon;
use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost)
///
/// `primary` is the large call-to-action with a trailing chevron unless
/// `trailing_icon` says otherwise; `secondary` is the small outlined button.
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional)]
    variant: Option<&'static str>,
    /// Leading icon key
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Trailing icon key; primary buttons default to "chevron-right"
    #[prop(optional)]
    trailing_icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    /// Button type attribute
    #[prop(optional)]
    button_type: Option<&'static str>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant = variant.unwrap_or("primary");
    let variant_class = match variant {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let trailing = trailing_icon.or((variant_class == "button--primary").then_some("chevron-right"));
    let btn_type = button_type.unwrap_or("button");

    view! {
        <button
            type=btn_type
            class=format!("button {} {}", variant_class, class)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {icon.map(|name| view! { <span class="button__icon">{render_icon(name)}</span> })}
            {children()}
            {trailing.map(|name| view! { <span class="button__icon button__icon--trailing">{render_icon(name)}</span> })}
        </button>
    }
}
