use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of joke topics served by the bot.
///
/// The lowercase name doubles as the callback-data id and as the key in the
/// bundled seed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Programmers,
    Animals,
    Mood,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Programmers, Category::Animals, Category::Mood];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Programmers => "programmers",
            Category::Animals => "animals",
            Category::Mood => "mood",
        }
    }

    /// Button caption shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Programmers => "Програмісти 👨‍💻",
            Category::Animals => "Тварини 🐾",
            Category::Mood => "Для настрою 😄",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error)]
#[error("unknown joke category: {0}")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "programmers" => Ok(Category::Programmers),
            "animals" => Ok(Category::Animals),
            "mood" => Ok(Category::Mood),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}
