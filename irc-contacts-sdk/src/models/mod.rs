pub mod irc_status;
