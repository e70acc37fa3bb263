use natdns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Inbound datagram ceiling, per the classic UDP DNS limit.
const MAX_QUERY_SIZE: usize = 512;

/// Receive loop: one task per datagram, replies sent through the shared
/// socket. A failed request never takes the loop down; only external
/// shutdown (handled by the caller) does.
pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = Arc::new(create_udp_socket(socket_addr)?);
    let handler = Arc::new(handler);

    info!(bind_address = %socket_addr, "DNS server ready");

    let mut recv_buf = [0u8; MAX_QUERY_SIZE];
    loop {
        let (len, client) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let datagram: Arc<[u8]> = Arc::from(&recv_buf[..len]);
        let handler = handler.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            if let Some(reply) = handler.handle_datagram(&datagram, client).await {
                if let Err(e) = socket.send_to(&reply, client).await {
                    warn!(client = %client, error = %e, "Failed to send reply");
                }
            }
        });
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<tokio::net::UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    Ok(tokio::net::UdpSocket::from_std(socket.into())?)
}
