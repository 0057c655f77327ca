// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use nano_id_provider::NanoIDProvider;
pub use system_time_provider::SystemTimeProvider;
pub use uuid_provider::UUIDProvider;

mod nano_id_provider;
mod system_time_provider;
mod uuid_provider;
