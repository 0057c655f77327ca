// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// The message that is currently being written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    pub text: String,
    /// Whether the product of the conversation should be attached to the next message.
    pub attach_product: bool,
}

impl Composer {
    pub fn trimmed_text(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Empties the composer and returns its previous contents.
    pub fn take(&mut self) -> Composer {
        std::mem::take(self)
    }
}
