use clap::Parser;

#[derive(Parser, Default)]
#[command(name = "connwatch", about = "A live TCP/UDP connection monitor")]
#[command(version, long_about = None)]
pub struct Args {
    /// Show TCP connections
    #[arg(short = 't', long = "tcp")]
    pub tcp: bool,

    /// Show UDP connections
    #[arg(short = 'u', long = "udp")]
    pub udp: bool,

    /// Don't resolve remote IP addresses to host names
    #[arg(short = 'n', long = "no-dns", alias = "noDNS")]
    pub no_dns: bool,

    /// Poll interval in seconds
    #[arg(short = 's', long = "sec", default_value = "1")]
    pub interval: u64,

    /// Print a single snapshot and exit
    #[arg(long)]
    pub once: bool,

    /// Append rendered snapshots to a log file ("-" for stdout)
    #[arg(short = 'f', long = "file")]
    pub log_file: Option<String>,
}

impl Args {
    pub fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_poll_interval(self.interval)?;

        if let Some(ref path) = self.log_file {
            if path != "-" {
                crate::validation::validate_log_path(path)?;
            }
        }

        Ok(())
    }
}
