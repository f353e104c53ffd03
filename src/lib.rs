//! # Sentinel (Access Gate Overlay)
//!
//! `sentinel` blocks a host application's surface behind an access code
//! verified by a remote endpoint, then keeps that authentication for the rest
//! of the session.
//!
//! ## Component model
//!
//! The gate is an explicit instance owned by the embedding application; there
//! is no global singleton. It is split along three seams:
//!
//! - **State machine** ([`gate::Gate`]): construction shortcuts, the submit
//!   flow (`AwaitingInput` → `Verifying` → settled or recoverable error),
//!   logout and teardown. Testable without any I/O.
//! - **View** ([`gate::view`]): a pure function from [`gate::GateState`] to a
//!   description of the overlay. A [`gate::Surface`] adapter mounts it; the
//!   crate ships a terminal adapter in [`console`].
//! - **Verification** ([`verify`]): `POST {"code"}` to the configured
//!   endpoint, expecting `{valid, user?, message?}` back. Transport and parse
//!   failures are recoverable and never fatal to the embedding application.
//!
//! All transitions are observable through an explicit subscribe/unsubscribe
//! API ([`gate::Gate::subscribe`]) rather than an ambient event bus.
//!
//! ## Not a security boundary
//!
//! The overlay discourages casual dismissal, nothing more. Anything the gate
//! protects is only as safe as the server behind the verification endpoint.

pub mod cli;
pub mod console;
pub mod gate;
pub mod server;
pub mod verify;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
