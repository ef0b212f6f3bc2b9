use irc_contacts_sdk::{Contact, ContactError, ContactGroupIrc, ContactIrc, IrcStatus, ProtocolProviderIrc};
use std::sync::Arc;

fn provider() -> Arc<ProtocolProviderIrc> {
    Arc::new(ProtocolProviderIrc::new(
        "127.0.0.1".to_string(),
        6667,
        "testing".to_string(),
    ))
}

#[test]
fn contact() {
    let provider = provider();
    let group = Arc::new(ContactGroupIrc::new(provider.clone(), "Friends".to_string()));

    let alice = ContactIrc::new(
        Some(provider.clone()),
        Some("alice".to_string()),
        Some(group.clone()),
        None,
    )
    .unwrap();

    assert_eq!(alice.address(), "alice");
    assert_eq!(alice.display_name(), "alice");
    assert_eq!(alice.presence_status(), IrcStatus::Online);
    assert_eq!(alice.parent_contact_group().group_name(), "Friends");
    assert_eq!(alice.protocol_provider().account_id(), "testing@127.0.0.1:6667");
    assert!(!alice.is_persistent());
    assert!(!alice.is_resolved());
    assert_eq!(alice.image(), None);
    assert_eq!(alice.persistent_data(), None);
    assert_eq!(alice.status_message(), None);

    let carol = ContactIrc::new(
        Some(provider),
        Some("carol".to_string()),
        Some(group),
        Some(IrcStatus::Offline),
    )
    .unwrap();

    assert_eq!(carol.presence_status(), IrcStatus::Offline);
}

#[test]
fn missing_arguments() {
    let provider = provider();
    let group = Arc::new(ContactGroupIrc::new(provider.clone(), "Friends".to_string()));

    let missing = [
        ContactIrc::new(None, Some("alice".to_string()), Some(group.clone()), None),
        ContactIrc::new(Some(provider.clone()), None, Some(group), None),
        ContactIrc::new(Some(provider), Some("alice".to_string()), None, None),
    ];

    let arguments: Vec<String> = missing
        .into_iter()
        .map(|result| match result {
            Err(ContactError::InvalidArgument { argument }) => argument,
            other => panic!("Expected an invalid argument error, got {other:?}"),
        })
        .collect();

    assert_eq!(arguments, vec!["provider", "id", "parent_group"]);
}

/// Works against any protocol's contact type.
fn describe<C: Contact>(contact: &C) -> String
where
    C::Status: std::fmt::Debug,
{
    format!("{} ({:?})", contact.display_name(), contact.presence_status())
}

#[test]
fn generic_contact() {
    let provider = provider();
    let group = Arc::new(ContactGroupIrc::new(provider.clone(), "Friends".to_string()));
    let alice = ContactIrc::new(
        Some(provider),
        Some("alice".to_string()),
        Some(group),
        Some(IrcStatus::Away),
    )
    .unwrap();

    assert_eq!(describe(&alice), "alice (Away)");
}
