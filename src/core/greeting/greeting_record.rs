//! The greeting returned to callers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A numbered greeting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    /// Unique for the lifetime of the process.
    id: u64,
    /// The greeting message.
    content: String,
}

impl Greeting {
    /// Constructs a new [`Greeting`].
    pub fn new(id: u64, content: String) -> Self {
        Self { id, content }
    }

    /// Returns the id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the greeting message.
    pub fn content(&self) -> &str {
        self.content.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::Greeting;

    #[test]
    fn serializes_id_and_content() {
        let greeting = Greeting::new(7, "Hello, World!".to_string());
        let json = serde_json::to_value(&greeting).unwrap();
        assert_eq!(
            serde_json::json!({ "id": 7, "content": "Hello, World!" }),
            json
        );
    }
}
