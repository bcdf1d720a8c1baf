//! Humans

mod errors;
pub(crate) mod handlers;
pub(crate) mod models;
mod repository;

pub(crate) use repository::*;
