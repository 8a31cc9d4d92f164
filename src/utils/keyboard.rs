use crate::model::category::Category;
use crate::model::commands::{CallbackCommand, Rating};

use lazy_static::lazy_static;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

lazy_static! {
    static ref START_MENU_KEYBOARD: InlineKeyboardMarkup = InlineKeyboardMarkup::new([
        vec![InlineKeyboardButton::callback(
            "Стартувати",
            CallbackCommand::StartJokes.to_string(),
        )],
        vec![InlineKeyboardButton::callback(
            "Додати жарт",
            CallbackCommand::AddJoke.to_string(),
        )],
    ]);
    static ref CATEGORY_KEYBOARD: InlineKeyboardMarkup =
        InlineKeyboardMarkup::new(Category::ALL.map(|category| {
            vec![InlineKeyboardButton::callback(
                category.label(),
                CallbackCommand::PickCategory(category).to_string(),
            )]
        }));
}

pub fn make_start_menu_keyboard() -> InlineKeyboardMarkup {
    START_MENU_KEYBOARD.clone()
}

pub fn make_category_keyboard() -> InlineKeyboardMarkup {
    CATEGORY_KEYBOARD.clone()
}

pub fn make_rating_keyboard(category: Category) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([
        vec![InlineKeyboardButton::callback(
            "👍 Це смішно!",
            CallbackCommand::Rate {
                category,
                rating: Rating::ThumbUp,
            }
            .to_string(),
        )],
        vec![InlineKeyboardButton::callback(
            "👎 Можна краще...",
            CallbackCommand::Rate {
                category,
                rating: Rating::ThumbDown,
            }
            .to_string(),
        )],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            other => panic!("expected a callback button, got {other:?}"),
        }
    }

    #[test]
    fn start_menu_has_browse_and_submit_options() {
        let keyboard = make_start_menu_keyboard();
        let rows = &keyboard.inline_keyboard;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].text, "Стартувати");
        assert_eq!(callback_data(&rows[0][0]), "start_jokes");
        assert_eq!(rows[1][0].text, "Додати жарт");
        assert_eq!(callback_data(&rows[1][0]), "add_joke");
    }

    #[test]
    fn category_keyboard_lists_every_category_in_order() {
        let keyboard = make_category_keyboard();
        let rows = &keyboard.inline_keyboard;
        assert_eq!(rows.len(), Category::ALL.len());
        for (row, category) in rows.iter().zip(Category::ALL) {
            assert_eq!(row[0].text, category.label());
            assert_eq!(callback_data(&row[0]), category.id());
        }
    }

    #[test]
    fn rating_keyboard_is_tagged_with_the_category() {
        let keyboard = make_rating_keyboard(Category::Programmers);
        let rows = &keyboard.inline_keyboard;
        assert_eq!(rows.len(), 2);
        assert_eq!(callback_data(&rows[0][0]), "rate_programmers_thumb_up");
        assert_eq!(callback_data(&rows[1][0]), "rate_programmers_thumb_down");
    }
}
