use clap::Parser;
use tracing::Level;

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
#[command(next_line_help = true)]
pub struct Args {
    /// Address of the database. "0.0.0.0" is always refused, an empty value is rejected
    #[arg(long, short)]
    pub address: String,

    /// Queries to execute, in the given order
    #[arg(long, short)]
    pub query: Vec<String>,

    /// Log level
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Args {
    pub fn new(address: &str) -> Self {
        return Args {
            address: address.to_owned(),
            query: Vec::new(),
            log_level: Level::INFO,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_queries_in_order() {
        let args = Args::try_parse_from([
            "db-connection",
            "--address",
            "127.0.0.1",
            "-q",
            "first",
            "--query",
            "second",
        ])
        .unwrap();
        assert_eq!(args.address, "127.0.0.1");
        assert_eq!(args.query, vec!["first", "second"]);
        assert_eq!(args.log_level, Level::INFO);
    }

    #[test]
    fn test_parse_empty_address() {
        let args =
            Args::try_parse_from(["db-connection", "--address", "", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.address, "");
        assert_eq!(args.log_level, Level::DEBUG);
    }

    #[test]
    fn test_address_required() {
        assert!(Args::try_parse_from(["db-connection"]).is_err());
    }
}
