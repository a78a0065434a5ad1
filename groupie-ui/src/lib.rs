//! groupie-ui - view components for Groupie Tracker
//!
//! Every component here is a pure view: it renders the props it is given and
//! reports user actions through callbacks. Fetching and state live in
//! `groupie-core`; `groupie-web` wires the two together.

pub mod components;

pub use components::*;
