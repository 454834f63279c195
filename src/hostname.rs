use std::net::{IpAddr, Ipv4Addr};

/// Best-effort reverse DNS for remote endpoints. Lookups that fail for any
/// reason fall back to the dotted address string; resolution failure is
/// never an error.
pub struct HostResolver {
    enabled: bool,
}

impl HostResolver {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn resolve(&self, addr: Ipv4Addr) -> String {
        if !self.enabled {
            return addr.to_string();
        }

        dns_lookup::lookup_addr(&IpAddr::V4(addr)).unwrap_or_else(|_| addr.to_string())
    }
}
