use crate::layout::global_context::use_app_context;
use contracts::shared::forms::FormKind;
use leptos::prelude::*;

/// Local acknowledgement after a stubbed submission. Disappears on its own.
#[component]
pub fn FormAck(form: FormKind) -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.ack_for(form)
            .map(|message| view! { <p class="form-ack" role="status">{message}</p> })
    }
}
