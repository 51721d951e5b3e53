use crate::enums::{ContentKind, MatchFormat};
use serde::{Deserialize, Serialize};

/// Short team code (`India`, `Aus`, `Eng`, ...). Open-ended: new codes need no code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCode(String);

impl TeamCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Команды в фильтре Match Insights
    pub fn filter_options() -> Vec<TeamCode> {
        ["India", "Aus", "Eng", "WI"]
            .into_iter()
            .map(TeamCode::new)
            .collect()
    }
}

impl From<&str> for TeamCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl std::fmt::Display for TeamCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Запись инсайта (статические данные, только чтение)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: u32,
    pub title: String,
    pub format: MatchFormat,
    pub team: TeamCode,
    pub tags: Vec<String>,
    pub kind: ContentKind,
    /// 0 = время чтения не показывается
    pub read_time_min: u32,
}

impl Insight {
    pub fn new(id: u32, title: &str, format: MatchFormat, team: &str, tags: &[&str]) -> Self {
        Self {
            id,
            title: title.to_string(),
            format,
            team: TeamCode::new(team),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            kind: ContentKind::Article,
            read_time_min: 0,
        }
    }

    pub fn with_read_time(mut self, minutes: u32) -> Self {
        self.read_time_min = minutes;
        self
    }

    pub fn read_time_label(&self) -> Option<String> {
        (self.read_time_min > 0).then(|| format!("{} min", self.read_time_min))
    }
}
