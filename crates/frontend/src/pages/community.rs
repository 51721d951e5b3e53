use crate::layout::global_context::use_app_context;
use crate::shared::components::form_ack::FormAck;
use crate::shared::components::page_header::SimpleContentPage;
use crate::shared::components::ui::{Button, Input, Textarea};
use contracts::domain::catalog;
use contracts::shared::forms::FormKind;
use leptos::prelude::*;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let ctx = use_app_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_form(FormKind::MomentSubmission);
    };

    view! {
        <SimpleContentPage
            title="Perceivers’ Corner"
            subtitle="The inner circle for deep conversation. Submit moments for analysis and ask your most pressing tactical questions."
        >
            <div class="split split--wide-left">
                <div>
                    <h2 class="section-title">"Submit a Moment for Analysis"</h2>
                    <p class="muted">
                        "Did you see a wicket or a spell that confused or fascinated you? Paste a link to the clip or provide the match details, and the Perceivers will consider it for a full breakdown."
                    </p>
                    <form class="form" on:submit=on_submit>
                        <Input placeholder="Your Name" />
                        <Input input_type="email" placeholder="Your Email" />
                        <Textarea placeholder="Match Details / Link to Clip / Question..." />
                        <Button button_type="submit">"Send to The Perceivers"</Button>
                        <FormAck form=FormKind::MomentSubmission />
                    </form>
                </div>

                <aside class="split__aside">
                    <h2 class="section-title">"Inner Threads"</h2>
                    {catalog::community_threads()
                        .iter()
                        .map(|thread| {
                            view! {
                                <div class="thread">
                                    <p class="thread__title">{thread.title}</p>
                                    <p class="thread__meta">{thread.meta_line()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </aside>
            </div>
        </SimpleContentPage>
    }
}
