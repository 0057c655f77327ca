// green-marketplace-client/green-core-integration-tests
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod client;
mod file_session_repository;
mod messages_event_handler;
mod read_receipts_event_handler;
mod session_service;
mod typing_event_handler;
