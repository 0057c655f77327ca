// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use file_session_repository::FileSessionRepository;
pub use in_memory_session_repository::InMemorySessionRepository;

mod file_session_repository;
mod in_memory_session_repository;
