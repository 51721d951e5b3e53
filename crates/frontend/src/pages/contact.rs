use crate::layout::global_context::use_app_context;
use crate::shared::components::form_ack::FormAck;
use crate::shared::components::page_header::SimpleContentPage;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use contracts::domain::catalog;
use contracts::shared::brand::CONTACT_EMAIL;
use contracts::shared::forms::FormKind;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <SimpleContentPage
            title="Collaborate with Us"
            subtitle="The Perceivers are always looking for partnerships that share our vision for elite, deep-dive analysis."
        >
            <div class="split">
                <InquiryForm />
                <DirectContact />
            </div>
        </SimpleContentPage>
    }
}

#[component]
fn InquiryForm() -> impl IntoView {
    let ctx = use_app_context();
    let types = catalog::inquiry_types();
    let inquiry = RwSignal::new(types.first().map(|t| t.to_string()).unwrap_or_default());
    let options: Vec<(String, String)> = types
        .iter()
        .map(|t| (t.to_string(), t.to_string()))
        .collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::debug!("collaboration inquiry: type={}", inquiry.get_untracked());
        ctx.submit_form(FormKind::CollaborationInquiry);
    };

    view! {
        <div>
            <h2 class="section-title">"Collaboration Inquiry"</h2>
            <p class="muted">
                "If you are a media outlet, a coaching team, a content creator, or a sponsor seeking high-quality, tactical cricket insight, please reach out."
            </p>
            <form class="form" on:submit=on_submit>
                <Input placeholder="Your Organization Name" />
                <Input input_type="email" placeholder="Business Email" />
                <Select
                    id="contact-inquiry-type"
                    value=inquiry
                    options=options
                    on_change=Callback::new(move |raw: String| inquiry.set(raw))
                />
                <Textarea placeholder="Tell us about your project..." />
                <Button button_type="submit">"Submit Inquiry"</Button>
                <FormAck form=FormKind::CollaborationInquiry />
            </form>
        </div>
    }
}

#[component]
fn DirectContact() -> impl IntoView {
    view! {
        <div class="page__panel direct-contact">
            <h2 class="section-title accent">"Direct Contact"</h2>
            <p class="muted">"For quick professional outreach:"</p>
            <p class="direct-contact__label">"Email:"</p>
            <p class="muted">
                <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
            </p>

            <h2 class="section-title section-title--ruled-top accent">"Join the Team"</h2>
            <p class="muted">
                "Interested in becoming a Perceivers analyst or writer? Send your CV and a 500-word tactical breakdown of a recent match to our careers team."
            </p>
            <Button variant="secondary" icon="briefcase" class="direct-contact__roles">
                "View Open Roles"
            </Button>
        </div>
    }
}
