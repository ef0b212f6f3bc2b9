use crate::contact::Contact;
use crate::contact_error::ContactError;
use crate::contact_group_irc::ContactGroupIrc;
use crate::models::irc_status::IrcStatus;
use crate::protocol_provider_irc::ProtocolProviderIrc;
use log::trace;
use std::sync::{Arc, PoisonError, RwLock};

/// An IRC contact, identified by its nickname.
///
/// The nickname, provider and parent group are fixed at construction. The presence status can only be changed from
/// inside this crate, by the [ContactList][crate::contact_list::ContactList] reacting to server events.
#[derive(Debug, uniffi::Object)]
pub struct ContactIrc {
    provider: Arc<ProtocolProviderIrc>,
    id: String,
    parent_group: Arc<ContactGroupIrc>,
    presence: RwLock<IrcStatus>,
}

#[uniffi::export]
impl ContactIrc {
    /// Creates a contact. `provider`, `id` and `parent_group` are required, a missing `initial_status` means
    /// [Online][IrcStatus::Online].
    ///
    /// The contact is not added to any contact list or group, that is left to the caller.
    #[uniffi::constructor]
    pub fn new(
        provider: Option<Arc<ProtocolProviderIrc>>,
        id: Option<String>,
        parent_group: Option<Arc<ContactGroupIrc>>,
        initial_status: Option<IrcStatus>,
    ) -> Result<Self, ContactError> {
        let provider = provider.ok_or_else(|| ContactError::invalid_argument("provider"))?;
        let id = id.ok_or_else(|| ContactError::invalid_argument("id"))?;
        let parent_group =
            parent_group.ok_or_else(|| ContactError::invalid_argument("parent_group"))?;

        Ok(Self {
            provider,
            id,
            parent_group,
            presence: RwLock::new(initial_status.unwrap_or_default()),
        })
    }
}

impl ContactIrc {
    /// Replaces the presence status and returns the previous one. Any status may follow any other.
    pub(crate) fn set_presence_status(
        &self,
        status: Option<IrcStatus>,
    ) -> Result<IrcStatus, ContactError> {
        let status = status.ok_or_else(|| ContactError::invalid_argument("status"))?;
        let mut presence = self.presence.write().unwrap_or_else(PoisonError::into_inner);

        trace!("{}: {:?} -> {:?}", self.id, *presence, status);
        Ok(std::mem::replace(&mut *presence, status))
    }
}

impl Contact for ContactIrc {
    type Status = IrcStatus;
    type Group = ContactGroupIrc;
    type Provider = ProtocolProviderIrc;

    fn address(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.id
    }

    fn image(&self) -> Option<Vec<u8>> {
        None
    }

    fn presence_status(&self) -> IrcStatus {
        *self.presence.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn parent_contact_group(&self) -> Arc<ContactGroupIrc> {
        self.parent_group.clone()
    }

    fn protocol_provider(&self) -> Arc<ProtocolProviderIrc> {
        self.provider.clone()
    }

    // Persistence and resolution would need NickServ registration info, which isn't tracked.
    fn is_persistent(&self) -> bool {
        false
    }

    fn is_resolved(&self) -> bool {
        false
    }

    fn persistent_data(&self) -> Option<String> {
        None
    }

    fn status_message(&self) -> Option<String> {
        None
    }
}
