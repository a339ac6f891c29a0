use std::{fmt, net::Ipv4Addr, ops::Range};

/// One line of the generated config: an address and the port assigned to it.
///
/// The port is only ever written out as text, so it is not limited to 16 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerEntry {
    pub address: Ipv4Addr,
    pub port: u64,
}

impl ServerEntry {
    pub fn new(address: Ipv4Addr, port: u64) -> Self {
        Self { address, port }
    }
}

impl fmt::Display for ServerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.address, self.port)
    }
}

/// Lazy, strictly ascending sequence of entries sharing one address. Ports
/// cover `[port_start, port_start + count)`; a count of zero or less yields
/// nothing.
#[derive(Debug, Clone)]
pub struct ServerEntries {
    address: Ipv4Addr,
    ports: Range<u64>,
}

impl ServerEntries {
    pub fn new(address: Ipv4Addr, port_start: u16, count: i64) -> Self {
        let start = u64::from(port_start);
        // i64::MAX + u16::MAX still fits in a u64
        let end = start + count.max(0) as u64;

        Self {
            address,
            ports: start..end,
        }
    }
}

impl Iterator for ServerEntries {
    type Item = ServerEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let port = self.ports.next()?;

        Some(ServerEntry::new(self.address, port))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ports.size_hint()
    }
}

#[cfg(test)]
mod test {
    use std::net::Ipv4Addr;

    use super::{ServerEntries, ServerEntry};
    use crate::PORT_START;

    fn ports(entries: ServerEntries) -> Vec<u64> {
        entries.map(|e| e.port).collect()
    }

    #[test]
    fn display() {
        let entry = ServerEntry::new(Ipv4Addr::LOCALHOST, 5000);

        assert_eq!(entry.to_string(), "127.0.0.1 5000");
    }

    #[test]
    fn ascending_from_start() {
        let entries = ServerEntries::new(Ipv4Addr::LOCALHOST, PORT_START, 3);

        assert_eq!(entries.size_hint(), (3, Some(3)));
        assert_eq!(ports(entries), vec![5000, 5001, 5002]);
    }

    #[test]
    fn every_entry_shares_the_address() {
        let entries = ServerEntries::new(Ipv4Addr::LOCALHOST, PORT_START, 50);

        assert!(entries.clone().all(|e| e.address == Ipv4Addr::LOCALHOST));
        assert_eq!(entries.count(), 50);
    }

    #[test]
    fn zero_and_negative_are_empty() {
        for count in &[0, -1, -5000, i64::MIN] {
            let entries = ServerEntries::new(Ipv4Addr::LOCALHOST, PORT_START, *count);

            assert_eq!(ports(entries), Vec::<u64>::new());
        }
    }

    #[test]
    fn continues_past_16_bit_ports() {
        let entries = ServerEntries::new(Ipv4Addr::LOCALHOST, PORT_START, 70_000);
        let ports = ports(entries);

        assert_eq!(ports.len(), 70_000);
        assert_eq!(ports[60_535], 65_535);
        assert_eq!(ports[60_536], 65_536);
        assert_eq!(ports.last(), Some(&74_999));
        assert!(ports.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn huge_count_stays_lazy() {
        let mut entries = ServerEntries::new(Ipv4Addr::LOCALHOST, u16::MAX, i64::MAX);

        assert_eq!(entries.next().map(|e| e.port), Some(65_535));
        assert_eq!(entries.next().map(|e| e.port), Some(65_536));
    }
}
