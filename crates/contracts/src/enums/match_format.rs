use serde::{Deserialize, Serialize};

/// Формат матча
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchFormat {
    Test,
    #[serde(rename = "ODI")]
    Odi,
    T20,
}

impl MatchFormat {
    pub fn code(&self) -> &'static str {
        match self {
            MatchFormat::Test => "Test",
            MatchFormat::Odi => "ODI",
            MatchFormat::T20 => "T20",
        }
    }

    /// Порядок как в выпадающем списке
    pub fn all() -> Vec<MatchFormat> {
        vec![MatchFormat::Test, MatchFormat::Odi, MatchFormat::T20]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Test" => Some(MatchFormat::Test),
            "ODI" => Some(MatchFormat::Odi),
            "T20" => Some(MatchFormat::T20),
            _ => None,
        }
    }
}

/// Вид материала
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentKind {
    #[default]
    Article,
    Video,
    Thread,
}

impl ContentKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentKind::Article => "Article",
            ContentKind::Video => "Video",
            ContentKind::Thread => "Thread",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_codes() {
        for format in MatchFormat::all() {
            assert_eq!(MatchFormat::from_code(format.code()), Some(format));
        }
        assert_eq!(MatchFormat::from_code("odi"), None);
        assert_eq!(MatchFormat::from_code("All"), None);
    }
}
