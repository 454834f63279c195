use crate::cli::Args;
use crate::connections::Protocol;
use std::time::Duration;

/// Resolved runtime configuration, built once from the parsed arguments and
/// passed into the snapshot builder and host resolver at construction time.
#[derive(Debug, Clone)]
pub struct Config {
    /// Protocols to monitor, in render order (TCP before UDP).
    pub protocols: Vec<Protocol>,
    pub resolve_dns: bool,
    pub interval: Duration,
    pub once: bool,
    pub log_file: Option<String>,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        // Neither flag given means both protocols, not an empty table.
        let protocols = match (args.tcp, args.udp) {
            (true, false) => vec![Protocol::Tcp],
            (false, true) => vec![Protocol::Udp],
            _ => vec![Protocol::Tcp, Protocol::Udp],
        };

        Self {
            protocols,
            resolve_dns: !args.no_dns,
            interval: Duration::from_secs(args.interval),
            once: args.once,
            log_file: args.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_protocols_when_no_flag() {
        let config = Config::from_args(&Args::default());
        assert_eq!(config.protocols, vec![Protocol::Tcp, Protocol::Udp]);
    }

    #[test]
    fn test_single_protocol_selection() {
        let args = Args {
            tcp: true,
            ..Default::default()
        };
        let config = Config::from_args(&args);
        assert_eq!(config.protocols, vec![Protocol::Tcp]);

        let args = Args {
            udp: true,
            ..Default::default()
        };
        let config = Config::from_args(&args);
        assert_eq!(config.protocols, vec![Protocol::Udp]);
    }

    #[test]
    fn test_dns_flag_inverts_default() {
        let config = Config::from_args(&Args::default());
        assert!(config.resolve_dns);

        let args = Args {
            no_dns: true,
            ..Default::default()
        };
        assert!(!Config::from_args(&args).resolve_dns);
    }
}
