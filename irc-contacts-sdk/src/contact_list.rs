use crate::contact::Contact;
use crate::contact_error::ContactError;
use crate::contact_group_irc::ContactGroupIrc;
use crate::contact_irc::ContactIrc;
use crate::event::Event;
use crate::event_handler::EventHandler;
use crate::event_matcher::into_internal_event;
use crate::internal_event::InternalEvent;
use crate::models::irc_status::IrcStatus;
use crate::protocol_provider_irc::ProtocolProviderIrc;
use log::{debug, trace, warn};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

pub(crate) const ROOT_GROUP_NAME: &str = "Contacts";

/// Contacts known to a provider, and the presence pipeline that keeps them up to date.
///
/// Server lines are fed through [handle_server_line][ContactList::handle_server_line], which is the only path
/// contact presence statuses get changed through.
pub struct ContactList {
    provider: Arc<ProtocolProviderIrc>,
    root_group: Arc<ContactGroupIrc>,
    contacts: RwLock<BTreeMap<String, Arc<ContactIrc>>>,
    event_tx: broadcast::Sender<Event>,
}

/// Nicknames are matched with the RFC 1459 casemapping, where `[]\~` are the uppercase forms of `{}|^`.
fn contact_key(id: &str) -> String {
    id.chars()
        .map(|c| match c {
            '[' => '{',
            ']' => '}',
            '\\' => '|',
            '~' => '^',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Receives events for one handler until the contact list is dropped.
async fn next_event(event_rx: &mut broadcast::Receiver<Event>) -> Option<Event> {
    loop {
        match event_rx.recv().await {
            Ok(event) => return Some(event),
            Err(RecvError::Lagged(skipped)) => warn!("Handler skipped {skipped} events"),
            Err(RecvError::Closed) => return None,
        }
    }
}

impl ContactList {
    /// Creates an empty contact list with a root group.
    pub fn new(provider: Arc<ProtocolProviderIrc>) -> Self {
        let root_group = Arc::new(ContactGroupIrc::new(
            provider.clone(),
            ROOT_GROUP_NAME.to_string(),
        ));

        let (event_tx, _) = broadcast::channel::<Event>(64);
        Self {
            provider,
            root_group,
            contacts: RwLock::new(BTreeMap::new()),
            event_tx,
        }
    }

    pub fn provider(&self) -> Arc<ProtocolProviderIrc> {
        self.provider.clone()
    }

    pub fn root_group(&self) -> Arc<ContactGroupIrc> {
        self.root_group.clone()
    }

    fn emit(&self, event: Event) {
        // Fails only when no handler is subscribed
        if self.event_tx.send(event).is_err() {
            trace!("No event handlers registered");
        }
    }

    /// Returns the contact with this nickname, creating it in the root group if it doesn't exist yet.
    ///
    /// # Events
    /// A [ContactAdded][Event::ContactAdded] event is sent when a new contact is created.
    pub fn find_or_create_contact(
        &self,
        id: &str,
        initial_status: Option<IrcStatus>,
    ) -> Result<Arc<ContactIrc>, ContactError> {
        let contact = {
            let mut contacts = self.contacts.write().unwrap_or_else(PoisonError::into_inner);
            let key = contact_key(id);

            if let Some(contact) = contacts.get(&key) {
                return Ok(contact.clone());
            }

            let contact = Arc::new(ContactIrc::new(
                Some(self.provider.clone()),
                Some(id.to_string()),
                Some(self.root_group.clone()),
                initial_status,
            )?);

            contacts.insert(key, contact.clone());
            contact
        };

        debug!("Added {id} to {}", self.root_group.group_name());
        self.emit(Event::ContactAdded {
            address: contact.address().to_string(),
            group: self.root_group.group_name().to_string(),
        });

        Ok(contact)
    }

    pub fn find_contact(&self, id: &str) -> Option<Arc<ContactIrc>> {
        self.contacts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&contact_key(id))
            .cloned()
    }

    /// Removes a contact from the list. The contact itself stays valid for anyone still holding it.
    ///
    /// # Events
    /// A [ContactRemoved][Event::ContactRemoved] event is sent if the contact existed.
    pub fn remove_contact(&self, id: &str) -> Option<Arc<ContactIrc>> {
        let contact = self
            .contacts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&contact_key(id))?;

        debug!("Removed {}", contact.address());
        self.emit(Event::ContactRemoved {
            address: contact.address().to_string(),
        });

        Some(contact)
    }

    /// All contacts, ordered by nickname.
    pub fn contacts(&self) -> Vec<Arc<ContactIrc>> {
        self.contacts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    /// Sets a contact's presence status, returning the change event if the status is different from the previous one.
    pub fn update_presence_status(
        &self,
        id: &str,
        status: Option<IrcStatus>,
    ) -> Result<Option<Event>, ContactError> {
        let status = status.ok_or_else(|| ContactError::invalid_argument("status"))?;
        let contact = self
            .find_contact(id)
            .ok_or_else(|| ContactError::InvalidContact {
                address: id.to_string(),
            })?;

        let old_status = contact.set_presence_status(Some(status))?;
        if old_status == status {
            return Ok(None);
        }

        let event = Event::ContactPresenceStatusChanged {
            address: contact.address().to_string(),
            old_status,
            new_status: status,
        };

        self.emit(event.clone());
        Ok(Some(event))
    }

    /// Applies a line received from the IRC server. Presence changes of nicknames not in the list are ignored.
    pub fn handle_server_line(&self, line: &str) -> Option<Event> {
        match into_internal_event(line) {
            InternalEvent::PresenceChanged { nickname, status } => {
                trace!("S: {} {nickname} -> {:?}", self.provider.server(), status);
                match self.update_presence_status(&nickname, Some(status)) {
                    Ok(event) => event,
                    Err(error) => {
                        trace!("Ignoring presence update: {error}");
                        None
                    }
                }
            }

            // Joining a channel doesn't clear an away status, only an away-notify AWAY does
            InternalEvent::Joined { nickname } => {
                trace!("S: {} {nickname} joined", self.provider.server());
                let contact = self.find_contact(&nickname)?;
                if contact.presence_status() == IrcStatus::Offline {
                    self.update_presence_status(&nickname, Some(IrcStatus::Online))
                        .ok()
                        .flatten()
                } else {
                    None
                }
            }

            InternalEvent::ServerReply(reply) => {
                trace!("S: {reply}");
                None
            }
        }
    }

    /// Adds a handler closure. Every registered handler receives every event sent after it was added.
    ///
    /// The handler runs on a task of the current tokio runtime, so this must be called from within one. Otherwise
    /// [NoRuntime][ContactError::NoRuntime] is returned and nothing is registered.
    pub fn add_event_handler_closure<F>(&self, f: F) -> Result<(), ContactError>
    where
        F: Fn(Event) + Send + 'static,
    {
        let runtime = Handle::try_current().or(Err(ContactError::NoRuntime))?;
        let mut event_rx = self.event_tx.subscribe();

        runtime.spawn(async move {
            while let Some(event) = next_event(&mut event_rx).await {
                f(event);
            }
        });

        Ok(())
    }

    /// Adds a handler implementing the [EventHandler] trait, for callers that can't pass closures, like the
    /// foreign language bindings. Same runtime requirement as
    /// [`add_event_handler_closure`][ContactList::add_event_handler_closure].
    pub fn add_event_handler(
        &self,
        handler: Arc<dyn EventHandler>,
    ) -> Result<(), ContactError> {
        let runtime = Handle::try_current().or(Err(ContactError::NoRuntime))?;
        let mut event_rx = self.event_tx.subscribe();

        runtime.spawn(async move {
            while let Some(event) = next_event(&mut event_rx).await {
                handler.handle(event).await;
            }
        });

        Ok(())
    }
}
