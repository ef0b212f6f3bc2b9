/// IRC presence statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum IrcStatus {
    /// Connected and not marked as away. Contacts start out in this status.
    #[default]
    Online,
    /// Marked as away, either through away-notify, `RPL_AWAY` or a `G` flag in a WHO reply.
    Away,
    Offline,
}

impl IrcStatus {
    /// Human readable name of the status.
    pub fn status_name(&self) -> &'static str {
        match self {
            IrcStatus::Online => "Online",
            IrcStatus::Away => "Away",
            IrcStatus::Offline => "Offline",
        }
    }
}
