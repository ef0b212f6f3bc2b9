use std::sync::Arc;

/// Read-only view of a remote party, shared by every protocol's contact type.
///
/// Mutation is not part of this trait: each protocol decides who is allowed to change a contact's presence.
/// For IRC that is the [ContactList][crate::contact_list::ContactList].
pub trait Contact: Send + Sync {
    type Status: Clone + PartialEq;
    type Group;
    type Provider;

    /// Protocol address of the contact. For IRC this is the nickname.
    fn address(&self) -> &str;

    fn display_name(&self) -> &str;

    /// Avatar bytes, if the protocol has any.
    fn image(&self) -> Option<Vec<u8>>;

    fn presence_status(&self) -> Self::Status;

    fn parent_contact_group(&self) -> Arc<Self::Group>;

    fn protocol_provider(&self) -> Arc<Self::Provider>;

    /// Whether the contact should be kept between sessions.
    fn is_persistent(&self) -> bool;

    /// Whether the contact has been confirmed by the server.
    fn is_resolved(&self) -> bool;

    fn persistent_data(&self) -> Option<String>;

    fn status_message(&self) -> Option<String>;
}
