use crate::model::state::State;
use anyhow::Result;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;

pub(crate) type MyDialogue = Dialogue<State, InMemStorage<State>>;
pub(crate) type HandlerResult = Result<()>;
