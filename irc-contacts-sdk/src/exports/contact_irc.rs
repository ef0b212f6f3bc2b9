use crate::contact::Contact;
use crate::contact_group_irc::ContactGroupIrc;
use crate::contact_irc::ContactIrc;
use crate::models::irc_status::IrcStatus;
use crate::protocol_provider_irc::ProtocolProviderIrc;
use std::sync::Arc;

#[uniffi::export]
impl ContactIrc {
    /// The contact's nickname.
    pub fn get_address(&self) -> String {
        self.address().to_string()
    }

    /// Same as the address, IRC has no separate display names.
    pub fn get_display_name(&self) -> String {
        self.display_name().to_string()
    }

    pub fn get_image(&self) -> Option<Vec<u8>> {
        self.image()
    }

    pub fn get_presence_status(&self) -> IrcStatus {
        self.presence_status()
    }

    pub fn get_parent_contact_group(&self) -> Arc<ContactGroupIrc> {
        self.parent_contact_group()
    }

    pub fn get_protocol_provider(&self) -> Arc<ProtocolProviderIrc> {
        self.protocol_provider()
    }

    pub fn get_is_persistent(&self) -> bool {
        self.is_persistent()
    }

    pub fn get_is_resolved(&self) -> bool {
        self.is_resolved()
    }

    pub fn get_persistent_data(&self) -> Option<String> {
        self.persistent_data()
    }

    pub fn get_status_message(&self) -> Option<String> {
        self.status_message()
    }
}
