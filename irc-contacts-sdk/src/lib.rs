//! IRC contacts and presence for contact-list services. No networking happens here: the connection layer hands
//! received server lines to a [ContactList], which keeps its contacts' presence statuses up to date.
//! # Usage
//! ```
//! use irc_contacts_sdk::{Contact, ContactList, IrcStatus, ProtocolProviderIrc};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(ProtocolProviderIrc::new(
//!     "irc.libera.chat".to_string(),
//!     6697,
//!     "bob".to_string(),
//! ));
//!
//! let contact_list = ContactList::new(provider);
//! let alice = contact_list.find_or_create_contact("alice", None).unwrap();
//! assert_eq!(alice.presence_status(), IrcStatus::Online);
//!
//! contact_list.handle_server_line(":alice!alice@example.com AWAY :Gone to lunch\r\n");
//! assert_eq!(alice.presence_status(), IrcStatus::Away);
//! assert_eq!(alice.address(), "alice");
//! ```
//! # Bindings
//! Bindings for Kotlin and Swift can be generated with
//! [UniFFI](https://mozilla.github.io/uniffi-rs/latest/tutorial/foreign_language_bindings.html#multi-crate-workspaces).
//!

pub mod contact;
pub mod contact_error;
pub mod contact_group_irc;
pub mod contact_irc;
pub mod contact_list;
pub mod event;
pub mod event_handler;
mod event_matcher;
mod exports;
mod internal_event;
pub mod models;
pub mod protocol_provider_irc;

uniffi::setup_scaffolding!();

pub use contact::Contact;
pub use contact_error::ContactError;
pub use contact_group_irc::ContactGroupIrc;
pub use contact_irc::ContactIrc;
pub use contact_list::ContactList;
pub use event::Event;
pub use models::irc_status::IrcStatus;
pub use protocol_provider_irc::ProtocolProviderIrc;
