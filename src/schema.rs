use crate::model::category::Category;
use crate::model::commands::{BotCommand, CallbackCommand, Rating};
use crate::model::{state::State, types::*};
use crate::store::{JokeStore, JokeStoreError};
use crate::utils::constants::{
    CATEGORY_MENU_MESSAGE, EMPTY_CATEGORY_MESSAGE, GENERIC_FAILURE_MESSAGE,
    SEND_JOKE_TEXT_MESSAGE, SUBMISSION_CATEGORY_MESSAGE, SUBMISSION_PROMPT_MESSAGE,
    THUMB_DOWN_REPLY, THUMB_UP_REPLY, WELCOME_MESSAGE,
};
use crate::utils::keyboard::*;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::{
    dispatching::{dialogue, UpdateHandler},
    prelude::*,
    utils::command::BotCommands,
};

pub(crate) fn schema() -> UpdateHandler<anyhow::Error> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<BotCommand, _>()
        .branch(case![BotCommand::Help].endpoint(help))
        .branch(case![BotCommand::Start].endpoint(start))
        .branch(case![BotCommand::Reset].endpoint(reset));

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(dptree::endpoint(receive_joke_submission));

    let callback_handler = Update::filter_callback_query()
        .filter_map(|q: CallbackQuery| {
            q.data
                .as_deref()
                .and_then(|data| data.parse::<CallbackCommand>().ok())
        })
        .branch(case![CallbackCommand::StartJokes].endpoint(show_joke_categories))
        .branch(case![CallbackCommand::AddJoke].endpoint(request_joke_text))
        .branch(
            case![CallbackCommand::PickCategory(category)]
                .branch(case![State::ReceiveBrowseCategory].endpoint(send_random_joke))
                .branch(
                    case![State::ReceiveSubmissionCategory { pending_joke }]
                        .endpoint(save_submitted_joke),
                )
                .endpoint(reject_category_choice),
        )
        .branch(case![CallbackCommand::Rate { category, rating }].endpoint(receive_joke_rating));

    dialogue::enter::<Update, InMemStorage<State>, State, _>()
        .branch(message_handler)
        .branch(callback_handler)
}

/// COMMAND HANDLERS

async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, BotCommand::descriptions().to_string())
        .await?;
    Ok(())
}

async fn start(bot: Bot, dialogue: MyDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, WELCOME_MESSAGE)
        .reply_markup(make_start_menu_keyboard())
        .await?;
    dialogue.update(State::Start).await?;
    Ok(())
}

async fn reset(bot: Bot, dialogue: MyDialogue, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "Стан діалогу скинуто. Надішли /start, щоб почати знову.",
    )
    .await?;
    dialogue.update(State::Start).await?;
    Ok(())
}

/// MESSAGE HANDLERS

async fn receive_joke_submission(bot: Bot, dialogue: MyDialogue, msg: Message) -> HandlerResult {
    match msg.text() {
        // Unrecognized commands are not joke submissions.
        Some(text) if text.starts_with('/') => {
            bot.send_message(msg.chat.id, SEND_JOKE_TEXT_MESSAGE).await?;
        }
        Some(joke) => {
            bot.send_message(msg.chat.id, SUBMISSION_CATEGORY_MESSAGE)
                .reply_markup(make_category_keyboard())
                .await?;
            // A repeated free-text message overwrites the previous pending
            // joke, last write wins.
            dialogue
                .update(State::ReceiveSubmissionCategory {
                    pending_joke: joke.to_owned(),
                })
                .await?;
            log::info!(
                "Chat with id = {} submitted a joke, awaiting its category",
                msg.chat.id
            );
        }
        None => {
            bot.send_message(msg.chat.id, SEND_JOKE_TEXT_MESSAGE).await?;
        }
    }
    Ok(())
}

/// CALLBACK HANDLERS

async fn show_joke_categories(bot: Bot, dialogue: MyDialogue, q: CallbackQuery) -> HandlerResult {
    bot.answer_callback_query(q.id).await?;
    if let Some(msg) = q.message {
        bot.edit_message_text(msg.chat.id, msg.id, CATEGORY_MENU_MESSAGE)
            .reply_markup(make_category_keyboard())
            .await?;
    }
    dialogue.update(State::ReceiveBrowseCategory).await?;
    Ok(())
}

async fn request_joke_text(bot: Bot, dialogue: MyDialogue, q: CallbackQuery) -> HandlerResult {
    bot.answer_callback_query(q.id).await?;
    if let Some(msg) = q.message {
        bot.edit_message_text(msg.chat.id, msg.id, SUBMISSION_PROMPT_MESSAGE)
            .await?;
    }
    dialogue.update(State::Start).await?;
    Ok(())
}

async fn send_random_joke(
    joke_store: JokeStore,
    bot: Bot,
    dialogue: MyDialogue,
    category: Category,
    q: CallbackQuery,
) -> HandlerResult {
    bot.answer_callback_query(q.id).await?;
    match joke_store.random_joke(category).await {
        Ok(joke) => {
            if let Some(msg) = q.message {
                bot.edit_message_text(msg.chat.id, msg.id, joke)
                    .reply_markup(make_rating_keyboard(category))
                    .await?;
            }
            dialogue.update(State::ReceiveJokeRating).await?;
            log::info!(
                "Sent a random {} joke to user with id = {}",
                category,
                q.from.id
            );
        }
        Err(err @ JokeStoreError::EmptyCategory(_)) => {
            // Keep the category menu up so the user can pick another one.
            if let Some(msg) = q.message {
                bot.edit_message_text(msg.chat.id, msg.id, EMPTY_CATEGORY_MESSAGE)
                    .reply_markup(make_category_keyboard())
                    .await?;
            }
            log::warn!("{err}");
        }
        Err(err) => {
            if let Some(msg) = q.message {
                bot.edit_message_text(msg.chat.id, msg.id, GENERIC_FAILURE_MESSAGE)
                    .await?;
            }
            log::error!("{err}");
        }
    }
    Ok(())
}

async fn save_submitted_joke(
    joke_store: JokeStore,
    bot: Bot,
    dialogue: MyDialogue,
    category: Category,
    pending_joke: String,
    q: CallbackQuery,
) -> HandlerResult {
    bot.answer_callback_query(q.id).await?;
    match joke_store.add_joke(category, pending_joke).await {
        Ok(()) => {
            if let Some(msg) = q.message {
                bot.edit_message_text(
                    msg.chat.id,
                    msg.id,
                    format!(
                        "Готово! Твій жарт успішно додано до категорії «{}»! 👍",
                        category.label()
                    ),
                )
                .await?;
            }
            // The pending joke is consumed exactly once.
            dialogue.exit().await?;
            log::info!(
                "User with id = {} added a joke to the {} category",
                q.from.id,
                category
            );
        }
        Err(err) => {
            if let Some(msg) = q.message {
                bot.edit_message_text(msg.chat.id, msg.id, GENERIC_FAILURE_MESSAGE)
                    .await?;
            }
            log::error!("{err}");
        }
    }
    Ok(())
}

async fn reject_category_choice(bot: Bot, dialogue: MyDialogue, q: CallbackQuery) -> HandlerResult {
    bot.answer_callback_query(q.id).await?;
    if let Some(msg) = q.message {
        bot.edit_message_text(msg.chat.id, msg.id, GENERIC_FAILURE_MESSAGE)
            .await?;
    }
    dialogue.update(State::Start).await?;
    Ok(())
}

async fn receive_joke_rating(
    bot: Bot,
    dialogue: MyDialogue,
    (category, rating): (Category, Rating),
    q: CallbackQuery,
) -> HandlerResult {
    bot.answer_callback_query(q.id).await?;
    if let Some(msg) = q.message {
        bot.edit_message_text(msg.chat.id, msg.id, rating_reply(rating))
            .await?;
    }
    dialogue.update(State::Start).await?;
    log::info!(
        "User with id = {} rated a {} joke with {}",
        q.from.id,
        category,
        rating
    );
    Ok(())
}

fn rating_reply(rating: Rating) -> &'static str {
    match rating {
        Rating::ThumbUp => THUMB_UP_REPLY,
        Rating::ThumbDown => THUMB_DOWN_REPLY,
    }
}
