// Listener module
// Builds the TCP listener the accept loop runs on.

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Create a nonblocking `TcpListener` with address reuse enabled.
///
/// `SO_REUSEADDR` (and `SO_REUSEPORT` on Unix) let the server rebind its
/// port immediately after a restart instead of waiting out `TIME_WAIT`.
pub fn create_reusable_listener(addr: SocketAddr, backlog: i32) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;

    // Nonblocking before handing the fd to tokio
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(backlog)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("addr");
        let listener = create_reusable_listener(addr, 16).expect("bind");
        let local = listener.local_addr().expect("local addr");
        assert_ne!(local.port(), 0);
    }
}
