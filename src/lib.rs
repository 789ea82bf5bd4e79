//! Delegated vote/unvote binding for server-rendered pages.
//!
//! A single click listener on the document resolves each click to the entry
//! it votes on, sends the matching request through a [`Client`], and writes
//! the server's tally back into the page.

#![allow(async_fn_in_trait)]

use {
  self::{
    ballot::Ballot,
    request::VoteRequest,
    state::{Action, VoteState},
  },
  regex::Regex,
  regex_static::{lazy_regex, once_cell::sync::Lazy},
  serde::Deserialize,
  snafu::{ensure, ErrorCompat, ResultExt, Snafu},
  std::{
    cell::RefCell,
    collections::BTreeSet,
    fmt::{self, Debug, Display, Formatter},
    future::Future,
    rc::Rc,
  },
};

pub use {
  self::{
    binder::VoteBinder,
    client::{Client, Reply},
    config::{Config, Endpoints, InFlight, Markers},
    element::Element,
    error::Error,
    tally::Tally,
  },
  hypermedia,
};


#[cfg(test)]
use test::*;

pub mod web;

mod ballot;
mod binder;
mod client;
mod config;
mod element;
mod error;
mod request;
mod state;
mod tally;

type Result<T = (), E = Error> = std::result::Result<T, E>;
