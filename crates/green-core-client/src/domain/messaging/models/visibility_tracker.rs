// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use crate::domain::messaging::models::MessageId;

/// Remembers which messages are currently inside the viewport.
#[derive(Debug, Clone, Default)]
pub struct VisibilityTracker {
    visible_ids: HashSet<MessageId>,
}

impl VisibilityTracker {
    /// Records the visibility of the message with `id`. Returns true only if the message just
    /// entered the viewport.
    pub fn set_visible(&mut self, id: &MessageId, is_visible: bool) -> bool {
        if is_visible {
            self.visible_ids.insert(id.clone())
        } else {
            self.visible_ids.remove(id);
            false
        }
    }

    pub fn is_visible(&self, id: &MessageId) -> bool {
        self.visible_ids.contains(id)
    }

    pub fn forget(&mut self, id: &MessageId) {
        self.visible_ids.remove(id);
    }
}
