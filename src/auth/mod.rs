//! Token authentication
//!
//! Writes require a fresh bearer token; reads never do. The policy lives in
//! [`policy`], the storage interface in [`repository`], and the HTTP glue in
//! [`middleware`] and [`handlers`].

mod errors;
pub(crate) mod handlers;
mod key;
pub(crate) mod middleware;
mod models;
mod policy;
mod repository;

pub(crate) use errors::*;
pub(crate) use models::*;
pub(crate) use policy::*;
pub(crate) use repository::*;
