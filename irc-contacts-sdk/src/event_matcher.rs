use crate::internal_event::InternalEvent;
use crate::models::irc_status::IrcStatus;

/// Nickname part of a `nick!user@host` prefix.
fn prefix_nickname(prefix: &str) -> Option<&str> {
    let nickname = prefix.split(['!', '@']).next().unwrap_or_default();
    if nickname.is_empty() {
        None
    } else {
        Some(nickname)
    }
}

pub(crate) fn into_internal_event(line: &str) -> InternalEvent {
    let reply = line.trim_end_matches(['\r', '\n']);

    // IRCv3 message tags
    let message = if reply.starts_with('@') {
        reply.split_once(' ').map(|(_, rest)| rest).unwrap_or_default()
    } else {
        reply
    };

    let args: Vec<&str> = message.split(' ').filter(|arg| !arg.is_empty()).collect();
    let prefix = args
        .first()
        .and_then(|arg| arg.strip_prefix(':'))
        .unwrap_or_default();

    let command = *args.get(1).unwrap_or(&"");
    if command == "JOIN"
        && let Some(nickname) = prefix_nickname(prefix)
    {
        return InternalEvent::Joined {
            nickname: nickname.to_string(),
        };
    }

    let presence = match command {
        "AWAY" => prefix_nickname(prefix).map(|nickname| {
            let status = if args.get(2).is_some_and(|message| *message != ":") {
                IrcStatus::Away
            } else {
                IrcStatus::Online
            };

            (nickname, status)
        }),

        "QUIT" => prefix_nickname(prefix).map(|nickname| (nickname, IrcStatus::Offline)),

        // RPL_AWAY
        "301" => args.get(3).map(|nickname| (*nickname, IrcStatus::Away)),

        // RPL_WHOREPLY
        "352" => {
            if let Some(nickname) = args.get(7)
                && let Some(flags) = args.get(8)
            {
                match flags.chars().next() {
                    Some('H') => Some((*nickname, IrcStatus::Online)),
                    Some('G') => Some((*nickname, IrcStatus::Away)),
                    _ => None,
                }
            } else {
                None
            }
        }

        _ => None,
    };

    match presence {
        Some((nickname, status)) => InternalEvent::PresenceChanged {
            nickname: nickname.to_string(),
            status,
        },

        None => InternalEvent::ServerReply(reply.to_string()),
    }
}
