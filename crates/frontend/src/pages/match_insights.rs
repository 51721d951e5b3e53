//! Match Insights: фильтр по формату, команде и темам.
//!
//! Выбор фильтра живёт в `AppGlobalContext`, список пересчитывается из полного
//! каталога при каждом изменении.

use crate::layout::global_context::use_app_context;
use crate::shared::browser::notify;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::{FilterPanel, ThemeToggle};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Select, Tag};
use crate::shared::icons::icon;
use contracts::domain::catalog;
use contracts::domain::insight_filter::{ALL_CHOICE, THEME_TAGS};
use contracts::domain::{Insight, Listing, Selection, TeamCode};
use contracts::enums::MatchFormat;
use leptos::prelude::*;

/// Dropdown value for a selection: `"All"` or the selected code.
pub fn choice_value<T>(selection: &Selection<T>, code: impl Fn(&T) -> String) -> String {
    match selection {
        Selection::All => ALL_CHOICE.to_string(),
        Selection::Only(value) => code(value),
    }
}

/// `"All"` followed by `codes`, as (value, label) pairs.
fn options_with_all(codes: impl IntoIterator<Item = String>) -> Vec<(String, String)> {
    std::iter::once(ALL_CHOICE.to_string())
        .chain(codes)
        .map(|code| (code.clone(), code))
        .collect()
}

fn open_analysis(insight: &Insight) {
    notify(&format!("Navigating to detailed analysis for: {}", insight.title));
}

#[component]
pub fn MatchInsightsPage() -> impl IntoView {
    let ctx = use_app_context();
    let filter = ctx.insight_filter;

    let listing = Memo::new(move |_| filter.with(|f| f.listing(catalog::match_insights())));

    let format_value =
        Signal::derive(move || filter.with(|f| choice_value(&f.format, |m| m.code().to_string())));
    let team_value =
        Signal::derive(move || filter.with(|f| choice_value(&f.team, |t| t.to_string())));

    view! {
        <PageHeader
            title="Match Insights"
            subtitle="The central hub for all match-based analysis. Filter by format, team, or the critical theme that defined the outcome."
        />

        <FilterPanel active_filters_count=Signal::derive(move || filter.with(|f| f.active_count()))>
            <div class="filter-panel__selects">
                <Select
                    id="insights-format"
                    label="Format"
                    value=format_value
                    options=options_with_all(MatchFormat::all().iter().map(|m| m.code().to_string()))
                    on_change=Callback::new(move |raw: String| ctx.set_format_choice(raw))
                />
                <Select
                    id="insights-team"
                    label="Team"
                    value=team_value
                    options=options_with_all(TeamCode::filter_options().into_iter().map(|t| t.to_string()))
                    on_change=Callback::new(move |raw: String| ctx.set_team_choice(raw))
                />
            </div>

            <div class="filter-panel__themes">
                <span class="form__label">"Focus Themes"</span>
                <div class="tag-list">
                    {THEME_TAGS
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <ThemeToggle
                                    label=tag
                                    selected=Signal::derive(move || filter.with(|f| f.is_theme_selected(tag)))
                                    on_toggle=Callback::new(move |_| ctx.toggle_theme(tag))
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </FilterPanel>

        <div class="insight-list">
            // Список строится заново при каждом изменении фильтра, задержки идут от 0
            {move || match listing.get() {
                Listing::NoResults(message) => view! { <EmptyState message=message /> }.into_any(),
                Listing::Rows(rows) => rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, insight)| view! { <InsightRow insight=insight delay_ms=stagger_delay(i) /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn InsightRow(insight: &'static Insight, delay_ms: u32) -> impl IntoView {
    view! {
        <div class="insight-row" on:click=move |_| open_analysis(insight)>
            <CardAnimated delay_ms=delay_ms class="card--interactive">
                <div class="tag-list">
                    <Tag>{insight.format.code()}</Tag>
                    <Tag accent=true>{insight.team.to_string()}</Tag>
                    {insight
                        .tags
                        .iter()
                        .map(|tag| view! { <Tag>{tag.clone()}</Tag> })
                        .collect_view()}
                </div>
                <h2 class="insight-row__title">{insight.title.clone()}</h2>
                <div class="insight-row__footer">
                    {insight.read_time_label().map(|label| view! {
                        <p class="insight-row__time">{icon("clock")}{label}</p>
                    })}
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            open_analysis(insight);
                        })
                    >
                        "Open Analysis"
                    </Button>
                </div>
            </CardAnimated>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_value() {
        assert_eq!(
            choice_value(&Selection::<MatchFormat>::All, |m| m.code().to_string()),
            "All"
        );
        assert_eq!(
            choice_value(&Selection::Only(MatchFormat::Odi), |m| m.code().to_string()),
            "ODI"
        );
    }

    #[test]
    fn test_options_start_with_all() {
        let options = options_with_all(TeamCode::filter_options().into_iter().map(|t| t.to_string()));
        let values: Vec<&str> = options.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["All", "India", "Aus", "Eng", "WI"]);
    }
}
