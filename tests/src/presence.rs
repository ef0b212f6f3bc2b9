use env_logger::Env;
use irc_contacts_sdk::{Contact, ContactError, ContactList, Event, IrcStatus, ProtocolProviderIrc};
use std::sync::Arc;

fn init_logger() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("trace")).try_init();
}

fn contact_list() -> ContactList {
    ContactList::new(Arc::new(ProtocolProviderIrc::new(
        "127.0.0.1".to_string(),
        6667,
        "testing".to_string(),
    )))
}

#[test]
fn presence_from_server_lines() {
    init_logger();

    let contact_list = contact_list();
    let alice = contact_list.find_or_create_contact("alice", None).unwrap();
    let carol = contact_list.find_or_create_contact("carol", None).unwrap();

    let lines = [
        ":127.0.0.1 352 testing #rust alice example.com 127.0.0.1 alice G :0 Alice\r\n",
        ":127.0.0.1 352 testing #rust carol example.com 127.0.0.1 carol H :0 Carol\r\n",
        ":127.0.0.1 315 testing #rust :End of /WHO list.\r\n",
    ];

    for line in lines {
        contact_list.handle_server_line(line);
    }

    assert_eq!(alice.presence_status(), IrcStatus::Away);
    assert_eq!(carol.presence_status(), IrcStatus::Online);

    assert_eq!(
        contact_list.handle_server_line(":alice!alice@example.com AWAY\r\n"),
        Some(Event::ContactPresenceStatusChanged {
            address: "alice".to_string(),
            old_status: IrcStatus::Away,
            new_status: IrcStatus::Online,
        })
    );

    assert_eq!(
        contact_list.handle_server_line(":carol!carol@example.com JOIN #rust\r\n"),
        None
    );

    contact_list.handle_server_line(":carol!carol@example.com QUIT :Quit: bye\r\n");
    assert_eq!(carol.presence_status(), IrcStatus::Offline);

    assert_eq!(alice.address(), "alice");
    assert_eq!(carol.address(), "carol");
}

#[test]
fn presence_of_unknown_contact() {
    init_logger();

    let contact_list = contact_list();
    assert_eq!(
        contact_list.handle_server_line(":dave!dave@example.com AWAY :zzz\r\n"),
        None
    );

    assert_eq!(
        contact_list.update_presence_status("dave", Some(IrcStatus::Away)),
        Err(ContactError::InvalidContact {
            address: "dave".to_string()
        })
    );

    assert!(contact_list.contacts().is_empty());
}

#[test]
fn presence_without_status() {
    init_logger();

    let contact_list = contact_list();
    let alice = contact_list
        .find_or_create_contact("alice", Some(IrcStatus::Away))
        .unwrap();

    assert!(matches!(
        contact_list.update_presence_status("alice", None),
        Err(ContactError::InvalidArgument { .. })
    ));
    assert_eq!(alice.presence_status(), IrcStatus::Away);

    for _ in 0..2 {
        contact_list
            .update_presence_status("alice", Some(IrcStatus::Offline))
            .unwrap();
        assert_eq!(alice.presence_status(), IrcStatus::Offline);
    }
}
