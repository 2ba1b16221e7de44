pub(crate) mod config;
pub(crate) mod reveal_session;
