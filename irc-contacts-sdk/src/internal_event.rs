use crate::models::irc_status::IrcStatus;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum InternalEvent {
    ServerReply(String),
    PresenceChanged { nickname: String, status: IrcStatus },
    Joined { nickname: String },
}
