//! Фильтр инсайтов на странице Match Insights.
//!
//! Формат и команда — точное совпадение или `All`. Темы — правило «любая из»:
//! пустой набор тем не ограничивает ничего, непустой требует хотя бы одного
//! общего тега с записью.

use super::insight::{Insight, TeamCode};
use crate::enums::MatchFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Темы, которые можно включать и выключать в фильтре
pub const THEME_TAGS: [&str; 7] = [
    "Momentum Shift",
    "Psychology",
    "Captaincy",
    "Collapse",
    "Comeback",
    "Pitch",
    "Tactics",
];

/// Dropdown value for the unconstrained choice.
pub const ALL_CHOICE: &str = "All";

pub const NO_RESULTS_MESSAGE: &str =
    "No insights match your current filters. Try relaxing a theme tag.";

/// Single-value constraint: `All` admits everything, `Only(v)` admits exactly `v`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Dropdown string to selection. `"All"` and values `parse` rejects both give `All`.
    pub fn from_choice(raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        if raw == ALL_CHOICE {
            return Selection::All;
        }
        parse(raw).map(Selection::Only).unwrap_or(Selection::All)
    }
}

/// Any-of theme rule. An empty selection matches every record.
pub fn themes_overlap(selected: &BTreeSet<String>, tags: &[String]) -> bool {
    selected.is_empty() || tags.iter().any(|tag| selected.contains(tag))
}

/// Текущий выбор фильтра
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsightFilter {
    pub format: Selection<MatchFormat>,
    pub team: Selection<TeamCode>,
    pub themes: BTreeSet<String>,
}

impl InsightFilter {
    pub fn matches(&self, insight: &Insight) -> bool {
        self.format.admits(&insight.format)
            && self.team.admits(&insight.team)
            && themes_overlap(&self.themes, &insight.tags)
    }

    /// Stable filter: matching records in their original order, borrowed from `records`.
    pub fn apply<'a>(&self, records: &'a [Insight]) -> Vec<&'a Insight> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn toggle_theme(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if !next.themes.remove(tag) {
            next.themes.insert(tag.to_string());
        }
        next
    }

    pub fn with_format(&self, format: Selection<MatchFormat>) -> Self {
        Self {
            format,
            ..self.clone()
        }
    }

    pub fn with_team(&self, team: Selection<TeamCode>) -> Self {
        Self {
            team,
            ..self.clone()
        }
    }

    pub fn is_theme_selected(&self, tag: &str) -> bool {
        self.themes.contains(tag)
    }

    /// Количество активных ограничений (для бейджа на панели фильтров)
    pub fn active_count(&self) -> usize {
        usize::from(!self.format.is_all()) + usize::from(!self.team.is_all()) + self.themes.len()
    }

    pub fn listing<'a>(&self, records: &'a [Insight]) -> Listing<'a> {
        let rows = self.apply(records);
        if rows.is_empty() {
            Listing::NoResults(NO_RESULTS_MESSAGE)
        } else {
            Listing::Rows(rows)
        }
    }
}

/// Что показывает область результатов
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    Rows(Vec<&'a Insight>),
    /// Ничего не подошло: показать сообщение вместо пустого списка
    NoResults(&'static str),
}

/// `filter(records, selection)`: free-function form of [`InsightFilter::apply`].
pub fn filter<'a>(records: &'a [Insight], selection: &InsightFilter) -> Vec<&'a Insight> {
    selection.apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    fn two_records() -> Vec<Insight> {
        vec![
            Insight::new(1, "Chase collapse", MatchFormat::Odi, "India", &["Collapse"]),
            Insight::new(2, "Invisible wall", MatchFormat::Test, "Aus", &["Pitch"]),
        ]
    }

    fn themes(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn ids(found: &[&Insight]) -> Vec<u32> {
        found.iter().map(|i| i.id).collect()
    }

    /// `found` must be an in-order subsequence of `records`, each record at most once.
    fn is_subsequence(found: &[&Insight], records: &[Insight]) -> bool {
        let mut rest = records.iter();
        found
            .iter()
            .all(|f| rest.by_ref().any(|r| std::ptr::eq(r, *f)))
    }

    fn sample_selections() -> Vec<InsightFilter> {
        let mut selections = vec![InsightFilter::default()];
        for format in MatchFormat::all() {
            selections.push(InsightFilter::default().with_format(Selection::Only(format)));
        }
        for team in TeamCode::filter_options() {
            selections.push(InsightFilter::default().with_team(Selection::Only(team)));
        }
        for tag in THEME_TAGS {
            selections.push(InsightFilter::default().toggle_theme(tag));
        }
        selections.push(
            InsightFilter::default()
                .toggle_theme("Momentum Shift")
                .toggle_theme("Captaincy")
                .with_format(Selection::Only(MatchFormat::Test)),
        );
        selections
    }

    #[test]
    fn test_odi_format_selects_first_record() {
        let records = two_records();
        let selection = InsightFilter::default().with_format(Selection::Only(MatchFormat::Odi));
        assert_eq!(ids(&filter(&records, &selection)), vec![1]);
    }

    #[test]
    fn test_pitch_theme_selects_second_record() {
        let records = two_records();
        let selection = InsightFilter::default().toggle_theme("Pitch");
        assert_eq!(ids(&filter(&records, &selection)), vec![2]);
    }

    #[test]
    fn test_unknown_theme_selects_nothing() {
        let records = two_records();
        let selection = InsightFilter::default().toggle_theme("NoSuchTag");
        assert!(filter(&records, &selection).is_empty());
    }

    #[test]
    fn test_empty_result_lists_no_results_message() {
        let selection = InsightFilter::default().toggle_theme("NoSuchTag");
        assert_eq!(
            selection.listing(catalog::match_insights()),
            Listing::NoResults(NO_RESULTS_MESSAGE)
        );

        let none_for_team = InsightFilter::default()
            .with_format(Selection::Only(MatchFormat::T20))
            .with_team(Selection::Only(TeamCode::new("India")));
        assert!(matches!(
            none_for_team.listing(catalog::match_insights()),
            Listing::NoResults(_)
        ));
    }

    #[test]
    fn test_listing_keeps_matching_rows() {
        let selection = InsightFilter::default().toggle_theme("Momentum Shift");
        match selection.listing(catalog::match_insights()) {
            Listing::Rows(rows) => assert_eq!(ids(&rows), vec![2, 4]),
            Listing::NoResults(message) => panic!("unexpected empty listing: {message}"),
        }
    }

    #[test]
    fn test_unconstrained_returns_everything_in_order() {
        let records = catalog::match_insights();
        let found = InsightFilter::default().apply(records);
        assert_eq!(ids(&found), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_themes_are_any_of_not_all_of() {
        let records = catalog::match_insights();
        // No record carries both tags; any-of still finds one of each.
        let selection = InsightFilter::default()
            .toggle_theme("Collapse")
            .toggle_theme("Captaincy");
        assert_eq!(ids(&selection.apply(records)), vec![1, 3]);
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let records = catalog::match_insights();
        let selection = InsightFilter::default()
            .toggle_theme("Momentum Shift")
            .with_format(Selection::Only(MatchFormat::T20));
        assert_eq!(ids(&selection.apply(records)), vec![4]);

        let selection = selection.with_team(Selection::Only(TeamCode::new("Aus")));
        assert!(selection.apply(records).is_empty());
    }

    #[test]
    fn test_team_match_is_case_sensitive() {
        let records = two_records();
        let selection = InsightFilter::default().with_team(Selection::Only("india".into()));
        assert!(selection.apply(&records).is_empty());
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let records = catalog::match_insights();
        for selection in sample_selections() {
            let found = selection.apply(records);
            assert!(found.len() <= records.len());
            assert!(is_subsequence(&found, records), "{selection:?}");
        }
    }

    #[test]
    fn test_apply_leaves_source_untouched() {
        let records = two_records();
        let before = records.clone();
        let _ = InsightFilter::default().toggle_theme("Pitch").apply(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        for selection in sample_selections() {
            for tag in THEME_TAGS.iter().copied().chain(["NoSuchTag"]) {
                let twice = selection.toggle_theme(tag).toggle_theme(tag);
                assert_eq!(twice, selection);
            }
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let selection = InsightFilter::default().toggle_theme("Psychology");
        assert!(selection.is_theme_selected("Psychology"));
        assert_eq!(selection.themes, themes(&["Psychology"]));
        assert!(!selection.toggle_theme("Psychology").is_theme_selected("Psychology"));
    }

    #[test]
    fn test_from_choice() {
        assert_eq!(
            Selection::from_choice("All", MatchFormat::from_code),
            Selection::All
        );
        assert_eq!(
            Selection::from_choice("T20", MatchFormat::from_code),
            Selection::Only(MatchFormat::T20)
        );
        assert_eq!(
            Selection::from_choice("Hundred", MatchFormat::from_code),
            Selection::All
        );
        assert_eq!(
            Selection::from_choice("WI", |s| Some(TeamCode::new(s))),
            Selection::Only(TeamCode::new("WI"))
        );
    }

    #[test]
    fn test_active_count() {
        assert_eq!(InsightFilter::default().active_count(), 0);
        let selection = InsightFilter::default()
            .with_format(Selection::Only(MatchFormat::Test))
            .with_team(Selection::Only("Eng".into()))
            .toggle_theme("Pitch")
            .toggle_theme("Tactics");
        assert_eq!(selection.active_count(), 4);
    }
}
