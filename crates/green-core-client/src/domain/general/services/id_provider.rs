// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub trait IDProvider: Send + Sync {
    fn new_id(&self) -> String;
}
