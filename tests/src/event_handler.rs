use env_logger::Env;
use irc_contacts_sdk::event_handler::EventHandler;
use irc_contacts_sdk::{ContactList, Event, IrcStatus, ProtocolProviderIrc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

struct ForwardingHandler {
    tx: mpsc::UnboundedSender<Event>,
}

#[async_trait::async_trait]
impl EventHandler for ForwardingHandler {
    async fn handle(&self, event: Event) {
        self.tx.send(event).unwrap();
    }
}

#[tokio::test]
async fn event_handler() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("trace")).try_init();

    let contact_list = ContactList::new(Arc::new(ProtocolProviderIrc::new(
        "127.0.0.1".to_string(),
        6667,
        "testing".to_string(),
    )));

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    contact_list
        .add_event_handler(Arc::new(ForwardingHandler { tx }))
        .unwrap();

    contact_list.find_or_create_contact("alice", None).unwrap();
    contact_list.handle_server_line(":alice!alice@example.com AWAY :lunch\r\n");
    contact_list.handle_server_line(":alice!alice@example.com AWAY :still lunch\r\n");

    let first = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        first,
        Event::ContactAdded {
            address: "alice".to_string(),
            group: contact_list.root_group().group_name().to_string(),
        }
    );

    let second = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        second,
        Event::ContactPresenceStatusChanged {
            address: "alice".to_string(),
            old_status: IrcStatus::Online,
            new_status: IrcStatus::Away,
        }
    );

    // The repeated away doesn't change anything
    assert!(
        tokio::time::timeout(Duration::from_millis(200), rx.recv())
            .await
            .is_err()
    );
}
