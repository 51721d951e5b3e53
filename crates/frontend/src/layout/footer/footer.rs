use crate::layout::global_context::use_app_context;
use chrono::{Datelike, Utc};
use contracts::enums::PageId;
use contracts::shared::brand::{copyright_line, APP_VISION, BRAND_BLURB, BRAND_NAME, SOCIAL_LINKS};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let year = Utc::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <h4 class="footer__title">{BRAND_NAME}</h4>
                    <p class="footer__blurb">{BRAND_BLURB}</p>
                    <p class="footer__copyright">{copyright_line(year)}</p>
                </div>

                <div class="footer__column">
                    <h5 class="footer__heading">"Sections"</h5>
                    {PageId::footer_sections()
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button class="footer__link" on:click=move |_| ctx.navigate(page)>
                                    {page.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer__column">
                    <h5 class="footer__heading">"Connect"</h5>
                    <button class="footer__link" on:click=move |_| ctx.navigate(PageId::Contact)>
                        "Work with us / Collaborations"
                    </button>
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|(label, url)| {
                            view! {
                                <a class="footer__link" href=url target="_blank" rel="noopener noreferrer">
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer__column">
                    <h5 class="footer__heading">"App Vision"</h5>
                    <p class="footer__blurb">{APP_VISION}</p>
                </div>
            </div>
        </footer>
    }
}
