use crate::contact_error::ContactError;
use crate::contact_group_irc::ContactGroupIrc;
use crate::contact_irc::ContactIrc;
use crate::event::Event;
use crate::event_handler::EventHandler;
use crate::models::irc_status::IrcStatus;
use crate::protocol_provider_irc::ProtocolProviderIrc;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Contacts known to a provider, and the presence pipeline that keeps them up to date.
#[derive(uniffi::Object)]
pub struct ContactList {
    inner: crate::contact_list::ContactList,
    rt: Runtime,
}

#[uniffi::export]
impl ContactList {
    /// Creates an empty contact list with a root group.
    #[uniffi::constructor]
    pub fn new(provider: Arc<ProtocolProviderIrc>) -> Result<Self, ContactError> {
        let rt = Runtime::new().or(Err(ContactError::CouldNotCreateRuntime))?;
        Ok(Self {
            inner: crate::contact_list::ContactList::new(provider),
            rt,
        })
    }

    /// Adds a handler that receives every event sent from now on. It runs on this list's own runtime.
    pub fn add_event_handler(
        &self,
        handler: Arc<dyn EventHandler>,
    ) -> Result<(), ContactError> {
        self.rt
            .block_on(async { self.inner.add_event_handler(handler) })
    }

    pub fn get_provider(&self) -> Arc<ProtocolProviderIrc> {
        self.inner.provider()
    }

    pub fn get_root_group(&self) -> Arc<ContactGroupIrc> {
        self.inner.root_group()
    }

    /// Returns the contact with this nickname, creating it in the root group if it doesn't exist yet.
    pub fn find_or_create_contact(
        &self,
        id: String,
        initial_status: Option<IrcStatus>,
    ) -> Result<Arc<ContactIrc>, ContactError> {
        self.inner.find_or_create_contact(&id, initial_status)
    }

    pub fn find_contact(&self, id: String) -> Option<Arc<ContactIrc>> {
        self.inner.find_contact(&id)
    }

    pub fn remove_contact(&self, id: String) -> Option<Arc<ContactIrc>> {
        self.inner.remove_contact(&id)
    }

    pub fn get_contacts(&self) -> Vec<Arc<ContactIrc>> {
        self.inner.contacts()
    }

    /// Sets a contact's presence status, returning the change event if the status is different from the previous one.
    pub fn update_presence_status(
        &self,
        id: String,
        status: Option<IrcStatus>,
    ) -> Result<Option<Event>, ContactError> {
        self.inner.update_presence_status(&id, status)
    }

    /// Applies a line received from the IRC server.
    pub fn handle_server_line(&self, line: String) -> Option<Event> {
        self.inner.handle_server_line(&line)
    }
}
