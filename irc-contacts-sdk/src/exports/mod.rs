pub mod contact_group_irc;
pub mod contact_irc;
pub mod contact_list;
pub mod protocol_provider_irc;
