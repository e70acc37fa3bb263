pub mod forwarder;
pub mod server;

pub use forwarder::UdpForwarder;
pub use server::DnsServerHandler;
