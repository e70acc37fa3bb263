//! natdns Infrastructure Layer
//!
//! Adapters behind the application ports: the JSON rule store, the UDP
//! upstream forwarder and the datagram-level server handler.
pub mod dns;
pub mod rules;
