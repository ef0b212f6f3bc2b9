use crate::event::Event;

/// Receives contact list events on a tokio task, one call per event.
///
/// Implement this from Kotlin or Swift and pass it to the contact list's `add_event_handler`. Rust code can
/// register a plain closure with [`add_event_handler_closure`][crate::contact_list::ContactList::add_event_handler_closure] instead.
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: Event);
}
