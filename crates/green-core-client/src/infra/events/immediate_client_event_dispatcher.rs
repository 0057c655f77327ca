// green-marketplace-client/green-core-client
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::trace;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::{ClientDelegate, ClientEvent};

/// Forwards every event to the delegate as soon as it is dispatched.
pub struct ImmediateClientEventDispatcher {
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ImmediateClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self { delegate }
    }
}

impl ClientEventDispatcherTrait for ImmediateClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        let Some(delegate) = &self.delegate else {
            trace!("Dropping {:?} since no delegate is set.", event);
            return;
        };
        delegate.handle_event(event)
    }
}
