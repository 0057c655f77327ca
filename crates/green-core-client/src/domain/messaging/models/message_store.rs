// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::messaging::models::{Message, MessageId, MessagePatch};
use crate::domain::shared::models::UserId;

/// The ordered list of messages of one conversation as currently shown to the user.
///
/// Next to the messages the store keeps the set of their IDs (the "seen IDs") which is used to
/// drop duplicate deliveries. Both are updated together on every mutation so that the set always
/// contains exactly the IDs of the stored messages. The store never reorders its contents.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
    seen_ids: HashSet<MessageId>,
}

/// How `MessageStore::replace` applied the new message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// The old message was swapped out at its position.
    Replaced,
    /// A message with the new ID was already stored. It was updated in place and the old
    /// message (if still present) was dropped.
    Merged,
    /// Neither the old nor the new ID were known, the message was appended.
    Appended,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of the store. If `messages` contains an ID more than once, only the
    /// first occurrence is kept.
    pub fn hydrate(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.messages.clear();
        self.seen_ids.clear();

        for message in messages {
            self.append(message);
        }
    }

    /// Appends `message` unless a message with the same ID is stored already. Returns true if
    /// the message was inserted.
    pub fn append(&mut self, message: Message) -> bool {
        if !self.seen_ids.insert(message.id.clone()) {
            return false;
        }
        self.messages.push(message);
        true
    }

    pub fn replace(&mut self, old_id: &MessageId, message: Message) -> Replacement {
        let old_idx = self.position(old_id);
        let existing_idx = self.position(&message.id);

        match (old_idx, existing_idx) {
            (Some(old_idx), None) => {
                self.seen_ids.remove(old_id);
                self.seen_ids.insert(message.id.clone());
                self.messages[old_idx].overwrite_with(message);
                Replacement::Replaced
            }
            (Some(old_idx), Some(existing_idx)) if old_idx == existing_idx => {
                self.messages[existing_idx].overwrite_with(message);
                Replacement::Replaced
            }
            (Some(old_idx), Some(existing_idx)) => {
                self.messages[existing_idx].overwrite_with(message);
                self.messages.remove(old_idx);
                self.seen_ids.remove(old_id);
                Replacement::Merged
            }
            (None, Some(existing_idx)) => {
                self.messages[existing_idx].overwrite_with(message);
                Replacement::Merged
            }
            (None, None) => {
                self.append(message);
                Replacement::Appended
            }
        }
    }

    pub fn remove(&mut self, id: &MessageId) -> Option<Message> {
        let idx = self.position(id)?;
        self.seen_ids.remove(id);
        Some(self.messages.remove(idx))
    }

    /// Applies `patch` to the message with `id`. Returns true if a message was found and changed.
    pub fn patch(&mut self, id: &MessageId, patch: &MessagePatch) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.messages[idx].apply_patch(patch)
    }

    /// Marks all confirmed, unread messages sent by `author` as read. Returns the IDs of the
    /// messages that changed.
    pub fn mark_read_sent_by(&mut self, author: &UserId, read_at: DateTime<Utc>) -> Vec<MessageId> {
        let patch = MessagePatch::read(read_at);

        self.messages
            .iter_mut()
            .filter(|message| message.is_from(author) && !message.is_optimistic)
            .filter_map(|message| message.apply_patch(&patch).then(|| message.id.clone()))
            .collect()
    }

    /// Looks for a pending message that `message` is likely the server echo of, i.e. a message
    /// by the same sender with identical content created within `window` of `timestamp`.
    ///
    /// This is a heuristic. Two identical messages sent in quick succession are matched in
    /// insertion order.
    pub fn find_optimistic_echo(
        &self,
        sender: &UserId,
        content: &str,
        timestamp: DateTime<Utc>,
        window: TimeDelta,
    ) -> Option<&MessageId> {
        self.messages
            .iter()
            .find(|message| {
                message.is_optimistic
                    && message.is_from(sender)
                    && message.content == content
                    && (message.created_at - timestamp).abs() <= window
            })
            .map(|message| &message.id)
    }

    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.position(id).map(|idx| &self.messages[idx])
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.seen_ids.contains(id)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn position(&self, id: &MessageId) -> Option<usize> {
        if !self.seen_ids.contains(id) {
            return None;
        }
        self.messages.iter().position(|message| &message.id == id)
    }
}
