// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use green_utils::id_string;

const PROVISIONAL_PREFIX: &str = "tmp-";

// Either the ID assigned by the server or, while a message is in flight, a client-generated
// provisional ID carrying the `tmp-` prefix.
id_string!(MessageId);

impl MessageId {
    pub fn provisional(suffix: impl AsRef<str>) -> Self {
        Self::from(format!("{PROVISIONAL_PREFIX}{}", suffix.as_ref()))
    }

    pub fn is_provisional(&self) -> bool {
        self.as_ref().starts_with(PROVISIONAL_PREFIX)
    }
}
