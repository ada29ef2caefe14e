//! A service for greeting someone.

use super::greeting_record::Greeting;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tracing::instrument;

/// The name used when the caller did not give one.
pub const DEFAULT_NAME: &str = "World";

/// Returns a greeting based on someone's name.
#[instrument(ret)]
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Hands out numbered greetings.
///
/// Clones share the same counter, so every clone placed in the
/// application state draws from one sequence of ids.
#[derive(Clone, Debug, Default)]
pub struct GreetingService {
    counter: Arc<AtomicU64>,
}

impl GreetingService {
    /// Constructs a new [`GreetingService`] whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next id.
    pub fn next_id(&self) -> u64 {
        // Only uniqueness matters, not ordering with other memory.
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Greets `name`, or [`DEFAULT_NAME`] if there is none.
    ///
    /// An empty name is used as is.
    #[instrument(skip(self))]
    pub fn greeting(&self, name: Option<&str>) -> Greeting {
        let name = name.unwrap_or(DEFAULT_NAME);
        Greeting::new(self.next_id(), greet(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn greet_formats_name() {
        assert_eq!("Hello, Ferris!", greet("Ferris"));
    }

    #[test]
    fn missing_name_defaults_to_world() {
        let service = GreetingService::new();
        assert_eq!("Hello, World!", service.greeting(None).content());
    }

    #[test]
    fn empty_name_is_kept() {
        let service = GreetingService::new();
        assert_eq!("Hello, !", service.greeting(Some("")).content());
    }

    #[test]
    fn name_is_used_verbatim() {
        let service = GreetingService::new();
        let greeting = service.greeting(Some(" <Spring \"Community\"> "));
        assert_eq!("Hello,  <Spring \"Community\"> !", greeting.content());
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let service = GreetingService::new();
        assert_eq!(1, service.greeting(None).id());
        assert_eq!(2, service.greeting(Some("World")).id());
        assert_eq!(3, service.greeting(None).id());
    }

    #[test]
    fn clones_share_the_counter() {
        let service = GreetingService::new();
        let clone = service.clone();
        assert_eq!(1, service.next_id());
        assert_eq!(2, clone.next_id());
        assert_eq!(3, service.next_id());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_ids_are_unique() {
        let service = GreetingService::new();
        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move {
                    (0..250)
                        .map(|_| service.greeting(None).id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            for id in task.await.unwrap() {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(16 * 250, ids.len());
        assert_eq!(Some(&(16 * 250)), ids.iter().max());
    }
}
