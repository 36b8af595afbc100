//! OpenRouter chat-completions wire format.
//!
//! Response structs keep fields the relay does not read yet, marked with
//! `#[allow(dead_code)]`, so the shape stays close to the provider documentation.

use serde::{Deserialize, Serialize};

use crate::core::GenerationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message body: either plain text or a list of typed parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(content.into()),
        }
    }

    /// A user turn carrying text followed by an image reference.
    pub fn user_with_image(text: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_url.into(),
                    },
                },
            ]),
        }
    }
}

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(flatten)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[allow(dead_code)]
    pub id: Option<String>,
    #[allow(dead_code)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[allow(dead_code)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[allow(dead_code)]
    pub index: Option<u32>,
    pub message: AssistantMessage,
    #[allow(dead_code)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[allow(dead_code)]
    pub role: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if the provider returned any choices at all.
    ///
    /// The outer `None` means no choices; the inner `None` means the first choice had
    /// no content.
    pub fn first_content(self) -> Option<Option<String>> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_message_serializes_as_typed_parts() {
        let message = Message::user_with_image("what is this?", "https://img.example/a.png");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "role": "user",
                "content": [
                    {"type": "text", "text": "what is this?"},
                    {"type": "image_url", "image_url": {"url": "https://img.example/a.png"}}
                ]
            })
        );
    }

    #[test]
    fn request_flattens_generation_parameters() {
        let request = ChatCompletionRequest {
            model: "m".to_string(),
            messages: vec![Message::system("sys"), Message::user("hi")],
            generation: GenerationConfig {
                temperature: None,
                max_tokens: Some(800),
                top_p: None,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["max_tokens"], 800);
        assert!(value.get("temperature").is_none());
        assert!(value.get("generation").is_none());
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
    }

    #[test]
    fn response_tolerates_missing_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({"error": {"message": "nope"}})).unwrap();
        assert!(response.first_content().is_none());

        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "gen-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hello"}}]
        }))
        .unwrap();
        assert_eq!(response.first_content(), Some(Some("Hello".to_string())));
    }
}
