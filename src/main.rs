mod background_processing;
mod model;
mod schema;
mod store;
mod utils;

use crate::background_processing::health_endpoint::serve_health_endpoint;
use crate::model::commands::BotCommand;
use crate::store::JokeStore;
use crate::utils::constants::DEFAULT_HEALTH_PORT;
use crate::utils::deserializer::deserialize_seed_jokes;
use anyhow::Result;
use dotenv::dotenv;
use model::state::State;

use schema::schema;

use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::env;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::types::MenuButton;
use teloxide::{prelude::*, utils::command::BotCommands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} - {l} - {m}\n")))
        .build("log/output.log")?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;

    log::info!("Starting Zhartobot...");

    let joke_store = JokeStore::from_seed(deserialize_seed_jokes(include_str!(
        "resources/jokes.json"
    ))?);
    log::info!(
        "Seeded {} jokes in {} categories",
        joke_store.joke_count().await,
        joke_store.category_count()
    );

    let bot = Bot::from_env();

    bot.set_my_commands(BotCommand::bot_commands()).await?;
    bot.set_chat_menu_button()
        .menu_button(MenuButton::Commands)
        .await?;

    let health_port = env::var("HEALTH_PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_HEALTH_PORT);
    tokio::spawn(async move {
        if let Err(err) = serve_health_endpoint(health_port).await {
            log::error!("Health endpoint failed: {err}");
        }
    });

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![joke_store, InMemStorage::<State>::new()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
