/// Identity of the IRC account contacts belong to. Connection handling lives elsewhere, this only
/// records where the account is connected and under which nickname.
#[derive(Debug, uniffi::Object)]
pub struct ProtocolProviderIrc {
    server: String,
    port: u16,
    nickname: String,
}

#[uniffi::export]
impl ProtocolProviderIrc {
    #[uniffi::constructor]
    pub fn new(server: String, port: u16, nickname: String) -> Self {
        Self {
            server,
            port,
            nickname,
        }
    }
}

impl ProtocolProviderIrc {
    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The local user's nickname.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn protocol_name(&self) -> &'static str {
        "IRC"
    }

    /// Account identifier in the form `nickname@server:port`.
    pub fn account_id(&self) -> String {
        format!("{}@{}:{}", self.nickname, self.server, self.port)
    }
}
