use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener};

use rand::Rng;

fn bind_tcp(addr: SocketAddr) -> Option<u16> {
    Some(TcpListener::bind(addr).ok()?.local_addr().ok()?.port())
}

pub fn is_free_tcp(ip: IpAddr, port: u16) -> bool {
    bind_tcp(SocketAddr::new(ip, port)).is_some()
}

/// Picks a TCP port that is not bound on `ip`.
///
/// A few random ports from a high range are probed first, then the OS is
/// asked for an ephemeral one.
pub fn pick_unused_port(ip: IpAddr) -> u16 {
    let mut rng = rand::rng();

    loop {
        for _ in 0..10 {
            let port = rng.random_range(15000..25000);
            if is_free_tcp(ip, port) {
                return port;
            }
        }

        if let Some(port) = bind_tcp(SocketAddr::new(ip, 0)) {
            return port;
        }
    }
}

/// A loopback address nothing listens on, at least at the time of the call.
pub fn next_addr() -> SocketAddr {
    let ip = IpAddr::V4(Ipv4Addr::LOCALHOST);
    SocketAddr::new(ip, pick_unused_port(ip))
}
