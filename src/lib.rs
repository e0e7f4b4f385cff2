//! # floodcoord-client
//!
//! Leptos + WASM front-end for the FloodCoord flood-rescue coordination
//! service. Citizens submit rescue requests, coordinators validate and
//! dispatch teams, and managers maintain team/vehicle/supply inventories.
//! The backend is an external REST API consumed over HTTP.
//!
//! The auth core (token store, unverified claims decode, the 401
//! refresh/replay protocol, and role-gated routing) lives under `auth`,
//! `net`, and `components::guard`, and stays target-independent so it
//! runs under plain `cargo test` on the host.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;
