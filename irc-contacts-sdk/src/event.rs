use crate::models::irc_status::IrcStatus;

/// Contact list events, delivered to the handlers registered on a [ContactList][crate::contact_list::ContactList].
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum Event {
    /// A contact was created and placed in a group.
    ContactAdded { address: String, group: String },

    ContactRemoved { address: String },

    /// A contact's presence status changed. Writes that keep the same status don't produce this event.
    ContactPresenceStatusChanged {
        address: String,
        old_status: IrcStatus,
        new_status: IrcStatus,
    },
}
