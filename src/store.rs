use crate::model::category::Category;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum JokeStoreError {
    #[error("category {0} is not present in the store")]
    UnknownCategory(Category),
    #[error("category {0} has no jokes yet")]
    EmptyCategory(Category),
}

/// Process-wide joke storage, shared between all dialogues.
///
/// The entry guard of the underlying map serializes appends against
/// concurrent random draws, so an append is atomic per call.
#[derive(Clone)]
pub(crate) struct JokeStore {
    jokes: Arc<scc::HashMap<Category, Vec<String>>>,
}

impl JokeStore {
    pub(crate) fn from_seed(seed: HashMap<Category, Vec<String>>) -> Self {
        let jokes = Arc::new(scc::HashMap::new());
        for (category, texts) in seed {
            let _ = jokes.insert(category, texts);
        }
        JokeStore { jokes }
    }

    /// Uniform random draw with replacement; consecutive draws may repeat.
    pub(crate) async fn random_joke(&self, category: Category) -> Result<String, JokeStoreError> {
        match self.jokes.get_async(&category).await {
            Some(texts) => texts
                .choose(&mut rand::thread_rng())
                .cloned()
                .ok_or(JokeStoreError::EmptyCategory(category)),
            None => Err(JokeStoreError::UnknownCategory(category)),
        }
    }

    pub(crate) async fn add_joke(
        &self,
        category: Category,
        joke: String,
    ) -> Result<(), JokeStoreError> {
        match self.jokes.get_async(&category).await {
            Some(mut texts) => {
                texts.push(joke);
                Ok(())
            }
            None => Err(JokeStoreError::UnknownCategory(category)),
        }
    }

    pub(crate) async fn joke_count(&self) -> usize {
        let mut count = 0;
        for category in Category::ALL {
            if let Some(texts) = self.jokes.get_async(&category).await {
                count += texts.len();
            }
        }
        count
    }

    pub(crate) fn category_count(&self) -> usize {
        self.jokes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> JokeStore {
        let mut seed = HashMap::new();
        seed.insert(
            Category::Programmers,
            vec!["перший".to_owned(), "другий".to_owned()],
        );
        seed.insert(Category::Animals, vec!["третій".to_owned()]);
        seed.insert(Category::Mood, Vec::new());
        JokeStore::from_seed(seed)
    }

    #[tokio::test]
    async fn random_joke_is_a_member_of_its_category() {
        let store = seeded_store();
        for _ in 0..32 {
            let joke = store.random_joke(Category::Programmers).await.unwrap();
            assert!(["перший", "другий"].contains(&joke.as_str()));
        }
        assert_eq!(
            store.random_joke(Category::Animals).await.unwrap(),
            "третій"
        );
    }

    #[tokio::test]
    async fn random_joke_does_not_mutate_the_store() {
        let store = seeded_store();
        for _ in 0..8 {
            let _ = store.random_joke(Category::Programmers).await;
        }
        assert_eq!(store.joke_count().await, 3);
    }

    #[tokio::test]
    async fn empty_category_is_reported_gracefully() {
        let store = seeded_store();
        assert!(matches!(
            store.random_joke(Category::Mood).await,
            Err(JokeStoreError::EmptyCategory(Category::Mood))
        ));
    }

    #[tokio::test]
    async fn missing_category_is_reported() {
        let store = JokeStore::from_seed(HashMap::new());
        assert!(matches!(
            store.random_joke(Category::Animals).await,
            Err(JokeStoreError::UnknownCategory(Category::Animals))
        ));
        assert!(matches!(
            store.add_joke(Category::Animals, "жарт".to_owned()).await,
            Err(JokeStoreError::UnknownCategory(Category::Animals))
        ));
        assert_eq!(store.joke_count().await, 0);
    }

    #[tokio::test]
    async fn added_joke_becomes_the_last_element() {
        let store = seeded_store();
        store
            .add_joke(Category::Animals, "новий жарт".to_owned())
            .await
            .unwrap();
        let last = store
            .jokes
            .get_async(&Category::Animals)
            .await
            .and_then(|texts| texts.last().cloned());
        assert_eq!(last.as_deref(), Some("новий жарт"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_submissions_are_not_lost() {
        let store = seeded_store();
        let first = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..50 {
                    store
                        .add_joke(Category::Programmers, format!("a{i}"))
                        .await
                        .unwrap();
                }
            })
        };
        let second = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..50 {
                    store.add_joke(Category::Mood, format!("b{i}")).await.unwrap();
                }
            })
        };
        let third = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..50 {
                    store
                        .add_joke(Category::Programmers, format!("c{i}"))
                        .await
                        .unwrap();
                }
            })
        };
        first.await.unwrap();
        second.await.unwrap();
        third.await.unwrap();

        let programmers = store
            .jokes
            .get_async(&Category::Programmers)
            .await
            .map(|texts| texts.len())
            .unwrap();
        let mood = store
            .jokes
            .get_async(&Category::Mood)
            .await
            .map(|texts| texts.len())
            .unwrap();
        assert_eq!(programmers, 102);
        assert_eq!(mood, 50);
    }
}
