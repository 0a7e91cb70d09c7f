//! Wire protocol
//!
//! The chat protocol is newline-delimited UTF-8 text over TCP. Each line is
//! one complete logical message. Lines from the server carry a literal
//! control prefix ([`prefix`]); lines from the client are unprefixed,
//! verbatim text (a screen name during the handshake, chat text afterwards).
//!
//! [`ServerEvent::decode`] turns one raw line into its typed form. Decoding
//! is total: a line with no recognized prefix becomes
//! [`ServerEvent::Unrecognized`], never an error. [`encode_outgoing`] is the
//! identity — the protocol has no escaping, so a payload that itself begins
//! with a reserved prefix is indistinguishable from a control line on the
//! wire. That ambiguity is part of the protocol and is preserved here.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod line;

pub use line::{ServerEvent, encode_outgoing, prefix};
