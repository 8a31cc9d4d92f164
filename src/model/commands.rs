use crate::model::category::{Category, ParseCategoryError};
use std::fmt;
use std::str::FromStr;
use teloxide::utils::command::BotCommands;
use thiserror::Error;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub(crate) enum BotCommand {
    #[command(description = "Почати використання")]
    Start,
    #[command(description = "Скинути стан діалогу")]
    Reset,
    #[command(description = "Показати список всіх команд")]
    Help,
}

/// Inline menu actions, decoded from callback-query payloads once at the
/// transport boundary. `Display` produces the exact payload the keyboards
/// attach to their buttons.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CallbackCommand {
    StartJokes,
    AddJoke,
    PickCategory(Category),
    Rate { category: Category, rating: Rating },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Rating {
    ThumbUp,
    ThumbDown,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::ThumbUp => f.write_str("thumb_up"),
            Rating::ThumbDown => f.write_str("thumb_down"),
        }
    }
}

impl fmt::Display for CallbackCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackCommand::StartJokes => f.write_str("start_jokes"),
            CallbackCommand::AddJoke => f.write_str("add_joke"),
            CallbackCommand::PickCategory(category) => write!(f, "{category}"),
            CallbackCommand::Rate { category, rating } => write!(f, "rate_{category}_{rating}"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ParseCallbackCommandError {
    #[error(transparent)]
    UnknownCategory(#[from] ParseCategoryError),
    #[error("malformed rating payload: {0}")]
    MalformedRating(String),
}

impl FromStr for CallbackCommand {
    type Err = ParseCallbackCommandError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        if let Some(payload) = data.strip_prefix("rate_") {
            // Category ids contain no underscores, so the first one splits
            // the category from the thumb sign.
            let (category, rating) = payload
                .split_once('_')
                .ok_or_else(|| ParseCallbackCommandError::MalformedRating(data.to_owned()))?;
            let rating = match rating {
                "thumb_up" => Rating::ThumbUp,
                "thumb_down" => Rating::ThumbDown,
                _ => return Err(ParseCallbackCommandError::MalformedRating(data.to_owned())),
            };
            return Ok(CallbackCommand::Rate {
                category: category.parse()?,
                rating,
            });
        }
        match data {
            "start_jokes" => Ok(CallbackCommand::StartJokes),
            "add_joke" => Ok(CallbackCommand::AddJoke),
            _ => Ok(CallbackCommand::PickCategory(data.parse()?)),
        }
    }
}
