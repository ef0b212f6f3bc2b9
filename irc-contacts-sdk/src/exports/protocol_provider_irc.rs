use crate::protocol_provider_irc::ProtocolProviderIrc;

#[uniffi::export]
impl ProtocolProviderIrc {
    pub fn get_server(&self) -> String {
        self.server().to_string()
    }

    pub fn get_port(&self) -> u16 {
        self.port()
    }

    pub fn get_nickname(&self) -> String {
        self.nickname().to_string()
    }

    pub fn get_protocol_name(&self) -> String {
        self.protocol_name().to_string()
    }

    pub fn get_account_id(&self) -> String {
        self.account_id()
    }
}
