use crate::error::{ConnwatchError, Result};
use std::fs;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        }
    }

    /// Path of this protocol's connection table under a proc root.
    pub fn table_path(&self, proc_root: &Path) -> PathBuf {
        proc_root.join("net").join(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcpState {
    Established,
    SynSent,
    SynRecv,
    FinWait1,
    FinWait2,
    TimeWait,
    Close,
    CloseWait,
    LastAck,
    Listen,
    Closing,
}

impl TcpState {
    /// Look up the 2-hex-digit state code from the kernel table. The table
    /// is closed; any code outside it is an error. UDP rows carry code `07`
    /// (CLOSE) and go through the same lookup.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "01" => Ok(TcpState::Established),
            "02" => Ok(TcpState::SynSent),
            "03" => Ok(TcpState::SynRecv),
            "04" => Ok(TcpState::FinWait1),
            "05" => Ok(TcpState::FinWait2),
            "06" => Ok(TcpState::TimeWait),
            "07" => Ok(TcpState::Close),
            "08" => Ok(TcpState::CloseWait),
            "09" => Ok(TcpState::LastAck),
            "0A" => Ok(TcpState::Listen),
            "0B" => Ok(TcpState::Closing),
            _ => Err(ConnwatchError::UnknownState(code.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TcpState::Established => "ESTABLISHED",
            TcpState::SynSent => "SYN_SENT",
            TcpState::SynRecv => "SYN_RECV",
            TcpState::FinWait1 => "FIN_WAIT1",
            TcpState::FinWait2 => "FIN_WAIT2",
            TcpState::TimeWait => "TIME_WAIT",
            TcpState::Close => "CLOSE",
            TcpState::CloseWait => "CLOSE_WAIT",
            TcpState::LastAck => "LAST_ACK",
            TcpState::Listen => "LISTEN",
            TcpState::Closing => "CLOSING",
        }
    }
}

/// One decoded row of a kernel connection table. Ownership and host name
/// fields start unset and are filled in by the snapshot builder.
#[derive(Debug, Clone)]
pub struct ConnectionRecord {
    pub protocol: Protocol,
    pub local_addr: Ipv4Addr,
    pub local_port: u16,
    pub remote_addr: Ipv4Addr,
    pub remote_port: u16,
    pub state: TcpState,
    pub inode: String,
    pub owner_pid: Option<u32>,
    pub owner_program: Option<String>,
    pub remote_host: Option<String>,
}

impl ConnectionRecord {
    /// Decode one raw table line. TCP and UDP tables share the layout:
    /// field 1 is `local:port`, field 2 is `remote:port`, field 3 the state
    /// code, field 9 the socket inode.
    pub fn decode(protocol: Protocol, line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 10 {
            return Err(ConnwatchError::Parse(format!(
                "connection record has {} fields, expected at least 10",
                fields.len()
            )));
        }

        let (local_addr, local_port) = decode_endpoint(fields[1])?;
        let (remote_addr, remote_port) = decode_endpoint(fields[2])?;
        let state = TcpState::from_code(fields[3])?;

        Ok(Self {
            protocol,
            local_addr,
            local_port,
            remote_addr,
            remote_port,
            state,
            inode: fields[9].to_string(),
            owner_pid: None,
            owner_program: None,
            remote_host: None,
        })
    }

    /// A record belongs in a snapshot only if the remote address's first
    /// octet is non-zero; this drops unconnected and listening-only rows.
    pub fn has_remote_peer(&self) -> bool {
        self.remote_addr.octets()[0] != 0
    }
}

/// Decode a `AABBCCDD:PPPP` endpoint token. The address is the kernel's
/// native-endian hex rendering of the 32-bit value, so the dotted-decimal
/// octets come out of the low byte first: `0100007F` is `127.0.0.1`.
fn decode_endpoint(token: &str) -> Result<(Ipv4Addr, u16)> {
    let (addr_hex, port_hex) = token
        .split_once(':')
        .ok_or_else(|| ConnwatchError::Parse(format!("malformed endpoint: {token}")))?;

    if addr_hex.len() != 8 {
        return Err(ConnwatchError::Parse(format!(
            "address is {} hex digits, expected 8: {addr_hex}",
            addr_hex.len()
        )));
    }

    let raw = u32::from_str_radix(addr_hex, 16)
        .map_err(|_| ConnwatchError::Parse(format!("bad address hex: {addr_hex}")))?;
    let addr = Ipv4Addr::from(raw.to_le_bytes());

    let port = u16::from_str_radix(port_hex, 16)
        .map_err(|_| ConnwatchError::Parse(format!("bad port hex: {port_hex}")))?;

    Ok((addr, port))
}

/// Split table text into raw record lines, dropping the column header.
pub fn parse_table(content: &str) -> Vec<String> {
    content.lines().skip(1).map(str::to_string).collect()
}

/// Read a protocol's connection table. A table that cannot be opened is
/// fatal to the cycle; the caller does not suppress this.
pub fn load_table(protocol: Protocol, proc_root: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(protocol.table_path(proc_root))?;
    Ok(parse_table(&content))
}
