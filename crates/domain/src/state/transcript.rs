//! Chat transcript model
//!
//! The transcript is append-mostly: messages are only removed explicitly
//! (the loading placeholder, a closed guide card) and only the streaming bot
//! message is edited in place. Every mutation bumps `revision`, which the
//! view watches to scroll to the bottom.

use std::fmt;

use crate::entities::EventChoice;
use crate::state::training::TrainingResultCard;
use crate::value_objects::MonthGuide;

/// Identifier of a transcript message, rendered as `msg-N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
    Guide,
    /// The "생각 중..." placeholder shown while a reply is pending
    Loading,
}

impl Sender {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
            Self::Guide => "guide",
            Self::Loading => "bot loading",
        }
    }
}

/// Structured content rendered under a message's text.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment {
    /// Branching choices of a triggered event; `selected` locks all buttons
    EventChoices {
        event_key: String,
        choices: Vec<EventChoice>,
        selected: Option<String>,
    },
    /// Monthly guide card with goals
    MonthGuide(MonthGuide),
    /// Outcome of a training session
    TrainingResult(TrainingResultCard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub image: Option<String>,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
    revision: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether any user or bot line exists (guide cards and placeholders
    /// do not count).
    pub fn has_conversation(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.sender, Sender::User | Sender::Bot))
    }

    /// Counter bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn append(
        &mut self,
        sender: Sender,
        text: impl Into<String>,
        image: Option<String>,
    ) -> MessageId {
        let id = self.allocate_id();
        self.push(ChatMessage {
            id,
            sender,
            text: text.into(),
            image,
            attachment: None,
        })
    }

    pub fn append_with(
        &mut self,
        sender: Sender,
        text: impl Into<String>,
        attachment: Attachment,
    ) -> MessageId {
        let id = self.allocate_id();
        self.push(ChatMessage {
            id,
            sender,
            text: text.into(),
            image: None,
            attachment: Some(attachment),
        })
    }

    /// Removes a message. Unknown ids are ignored.
    pub fn remove(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        let removed = self.messages.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Appends an empty bot message to be filled by streamed tokens.
    pub fn create_bot_message(&mut self) -> MessageId {
        self.append(Sender::Bot, String::new(), None)
    }

    /// Replaces the text of a bot message with the full text received so far.
    pub fn update_bot_message(&mut self, id: MessageId, full_text: &str) -> bool {
        let Some(message) = self
            .messages
            .iter_mut()
            .find(|m| m.id == id && m.sender == Sender::Bot)
        else {
            return false;
        };
        if message.text != full_text {
            message.text.clear();
            message.text.push_str(full_text);
        }
        self.revision += 1;
        true
    }

    pub fn set_image(&mut self, id: MessageId, image: Option<String>) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            message.image = image;
            self.revision += 1;
        }
    }

    /// Locks an event-choice message on `choice_id`.
    ///
    /// Returns the event key the first time; `None` if the message has no
    /// choices, the choice is unknown, or a choice was already taken.
    pub fn lock_choice(&mut self, id: MessageId, choice_id: &str) -> Option<String> {
        let message = self.messages.iter_mut().find(|m| m.id == id)?;
        let Some(Attachment::EventChoices {
            event_key,
            choices,
            selected,
        }) = message.attachment.as_mut()
        else {
            return None;
        };
        if selected.is_some() || !choices.iter().any(|c| c.id == choice_id) {
            return None;
        }
        *selected = Some(choice_id.to_string());
        let key = event_key.clone();
        self.revision += 1;
        Some(key)
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push(&mut self, message: ChatMessage) -> MessageId {
        let id = message.id;
        self.messages.push(message);
        self.revision += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Attachment {
        Attachment::EventChoices {
            event_key: "5월_갈등".into(),
            choices: vec![
                EventChoice {
                    id: "comfort".into(),
                    text: "위로한다".into(),
                },
                EventChoice {
                    id: "push".into(),
                    text: "다그친다".into(),
                },
            ],
            selected: None,
        }
    }

    #[test]
    fn ids_are_sequential_and_displayed() {
        let mut t = Transcript::new();
        let a = t.append(Sender::User, "안녕", None);
        let b = t.append(Sender::Bot, "반가워", None);
        assert_eq!(a.to_string(), "msg-0");
        assert_eq!(b.to_string(), "msg-1");
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn removing_loading_placeholder_keeps_ids_unique() {
        let mut t = Transcript::new();
        let loading = t.append(Sender::Loading, "생각 중...", None);
        assert!(t.remove(loading));
        assert!(!t.remove(loading));
        let next = t.create_bot_message();
        assert_ne!(next, loading);
        assert!(t.get(loading).is_none());
    }

    #[test]
    fn update_bot_message_replaces_text_and_bumps_revision() {
        let mut t = Transcript::new();
        let id = t.create_bot_message();
        let rev = t.revision();
        assert!(t.update_bot_message(id, "안"));
        assert!(t.update_bot_message(id, "안녕하세요"));
        assert_eq!(t.get(id).unwrap().text, "안녕하세요");
        assert!(t.revision() > rev);
    }

    #[test]
    fn update_ignores_non_bot_and_unknown_messages() {
        let mut t = Transcript::new();
        let user = t.append(Sender::User, "hi", None);
        assert!(!t.update_bot_message(user, "changed"));
        assert_eq!(t.get(user).unwrap().text, "hi");
        t.remove(user);
        assert!(!t.update_bot_message(user, "gone"));
    }

    #[test]
    fn conversation_ignores_guides_and_placeholders() {
        let mut t = Transcript::new();
        t.append_with(
            Sender::Guide,
            "",
            Attachment::MonthGuide(crate::value_objects::MonthGuide::for_month(3).unwrap()),
        );
        t.append(Sender::Loading, "생각 중...", None);
        assert!(!t.has_conversation());
        t.append(Sender::Bot, "왜 오셨어요.", None);
        assert!(t.has_conversation());
    }

    #[test]
    fn choice_locks_once() {
        let mut t = Transcript::new();
        let id = t.append_with(Sender::Bot, "민석이가 화가 났다", choices());
        assert_eq!(t.lock_choice(id, "missing"), None);
        assert_eq!(t.lock_choice(id, "comfort").as_deref(), Some("5월_갈등"));
        assert_eq!(t.lock_choice(id, "push"), None);
        match &t.get(id).unwrap().attachment {
            Some(Attachment::EventChoices { selected, .. }) => {
                assert_eq!(selected.as_deref(), Some("comfort"))
            }
            other => panic!("unexpected attachment: {other:?}"),
        }
    }
}
