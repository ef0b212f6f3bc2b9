use crate::protocol_provider_irc::ProtocolProviderIrc;
use std::sync::Arc;

/// A named group contacts are placed in. Membership itself is tracked by the
/// [ContactList][crate::contact_list::ContactList].
#[derive(Debug, uniffi::Object)]
pub struct ContactGroupIrc {
    provider: Arc<ProtocolProviderIrc>,
    name: String,
}

#[uniffi::export]
impl ContactGroupIrc {
    #[uniffi::constructor]
    pub fn new(provider: Arc<ProtocolProviderIrc>, name: String) -> Self {
        Self { provider, name }
    }
}

impl ContactGroupIrc {
    pub fn group_name(&self) -> &str {
        &self.name
    }

    pub fn protocol_provider(&self) -> Arc<ProtocolProviderIrc> {
        self.provider.clone()
    }
}
