//! Conversation history normalization for the Gemini chat API.
//!
//! Clients send `{role, content}` turns with roles `user`/`assistant`.
//! Gemini expects `{role, parts: [{text}]}` with roles `user`/`model`,
//! and the history must open with a `user` turn.

use serde::Serialize;
use serde_json::Value;

/// Role of a normalized conversation turn, as Gemini names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single text part inside a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub text: String,
}

/// One turn of conversation history in the shape the Gemini API requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Validate and clean client-supplied history into Gemini turns.
///
/// Never fails: anything that isn't an array (or is empty) yields an empty
/// history, and individual turns that are malformed are dropped while the
/// rest keep their order. A single leading assistant turn is removed so the
/// history starts with `user`, which Gemini requires.
pub fn normalize_history(history: &Value) -> Vec<Content> {
    let Some(items) = history.as_array() else {
        return Vec::new();
    };

    let mut turns: Vec<Content> = items
        .iter()
        .filter_map(|item| {
            let role = item.get("role")?.as_str()?;
            let content = item.get("content")?.as_str()?;
            if content.is_empty() {
                return None;
            }
            match role {
                "user" => Some(Content::user(content)),
                "assistant" => Some(Content::model(content)),
                _ => None,
            }
        })
        .collect();

    // Drop a leading assistant turn (only the first element, never more)
    if turns.first().map(|turn| turn.role) == Some(Role::Model) {
        turns.remove(0);
    }

    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_input_yields_empty_history() {
        assert!(normalize_history(&json!(null)).is_empty());
        assert!(normalize_history(&json!("hello")).is_empty());
        assert!(normalize_history(&json!({"role": "user"})).is_empty());
        assert!(normalize_history(&json!([])).is_empty());
    }

    #[test]
    fn renames_assistant_to_model_and_wraps_parts() {
        let history = json!([
            {"role": "user", "content": "hi"},
            {"role": "assistant", "content": "hello there"},
        ]);

        let turns = normalize_history(&history);
        assert_eq!(
            turns,
            vec![Content::user("hi"), Content::model("hello there")]
        );
    }

    #[test]
    fn drops_malformed_turns_preserving_order() {
        let history = json!([
            {"role": "user", "content": "first"},
            {"role": "user"},
            {"content": "no role"},
            {"role": "user", "content": 42},
            {"role": "user", "content": ""},
            {"role": "system", "content": "not a chat role"},
            {"role": "assistant", "content": "last"},
        ]);

        let turns = normalize_history(&history);
        assert_eq!(turns, vec![Content::user("first"), Content::model("last")]);
    }

    #[test]
    fn drops_single_leading_assistant_turn() {
        let history = json!([
            {"role": "assistant", "content": "welcome!"},
            {"role": "user", "content": "hi"},
            {"role": "assistant", "content": "hello"},
        ]);

        let turns = normalize_history(&history);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
    }

    #[test]
    fn leading_assistant_removed_after_filtering() {
        // The invalid first element is filtered out, which promotes the
        // assistant turn to the front; it must then be dropped too.
        let history = json!([
            {"role": "assistant"},
            {"role": "assistant", "content": "welcome!"},
            {"role": "user", "content": "hi"},
        ]);

        let turns = normalize_history(&history);
        assert_eq!(turns, vec![Content::user("hi")]);
    }

    #[test]
    fn serializes_to_gemini_shape() {
        let turn = Content::model("hello");
        let value = serde_json::to_value(&turn).unwrap();
        assert_eq!(value, json!({"role": "model", "parts": [{"text": "hello"}]}));
    }
}
