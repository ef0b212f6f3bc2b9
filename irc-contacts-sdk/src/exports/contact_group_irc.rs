use crate::contact_group_irc::ContactGroupIrc;
use crate::protocol_provider_irc::ProtocolProviderIrc;
use std::sync::Arc;

#[uniffi::export]
impl ContactGroupIrc {
    pub fn get_group_name(&self) -> String {
        self.group_name().to_string()
    }

    pub fn get_protocol_provider(&self) -> Arc<ProtocolProviderIrc> {
        self.protocol_provider()
    }
}
