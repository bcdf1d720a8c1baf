//! Auth Handlers

pub(crate) mod obtain;
