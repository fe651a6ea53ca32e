//! A barebones client for the Spotify Web API.
#![deny(missing_docs)]

mod client;
pub use client::*;

mod album;
pub use album::*;

mod player;
pub use player::*;

mod request;
