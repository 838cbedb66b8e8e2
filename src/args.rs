use anyhow::Context as _;

use crate::{Config, ConfigStore};

#[derive(Debug, Default)]
pub struct Args {
    pub client_id: Option<String>,
    pub access_token: Option<String>,
    pub user_id: Option<String>,
    pub interval: Option<u64>,
    pub json: bool,
    pub quiet: bool,
}

impl Args {
    pub fn parse() -> anyhow::Result<Self> {
        let mut args = pico_args::Arguments::from_env();

        if args.contains("-h") {
            Self::print_short_help();
            std::process::exit(0);
        }

        if args.contains("--help") {
            Self::print_long_help();
            std::process::exit(0);
        }

        if args.contains(["-v", "--version"]) {
            Self::print_version();
            std::process::exit(0);
        }

        if args.contains("--print-default-config") {
            println!("{}", ConfigStore::default_formatted_toml());
            std::process::exit(0)
        }

        if args.contains("--print-config-path") {
            println!(
                "{}",
                ConfigStore::get_config_path()
                    .with_context(|| "your system does not have a configuration directory")?
                    .to_string_lossy()
            );
            std::process::exit(0)
        }

        Self::parse_from(args)
    }

    fn parse_from(mut args: pico_args::Arguments) -> anyhow::Result<Self> {
        let this = Self {
            client_id: args.opt_value_from_str("--client-id")?,
            access_token: args.opt_value_from_str("--access-token")?,
            user_id: args.opt_value_from_str("--user-id")?,
            interval: args.opt_value_from_str(["-i", "--interval"])?,
            json: args.contains(["-j", "--json"]),
            quiet: args.contains(["-q", "--quiet"]),
        };

        let rest = args.finish();
        if !rest.is_empty() {
            anyhow::bail!(
                "unknown arguments: {}",
                rest.iter()
                    .map(|s| s.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }

        Ok(this)
    }

    /// Log lines share stdout with the output, so json mode stays quiet
    pub fn logging(&self) -> bool {
        !self.json
    }

    /// Overrides the stored settings with the ones given on the command line
    pub fn apply(&self, config: &mut Config) {
        let overrides = [
            (&self.client_id, &mut config.client_id),
            (&self.access_token, &mut config.access_token),
            (&self.user_id, &mut config.user_id),
        ];
        for (arg, value) in overrides {
            if let Some(arg) = arg {
                *value = arg.clone();
            }
        }

        if let Some(interval) = self.interval {
            config.refresh_interval = interval;
        }
    }

    fn print_short_help() {
        Self::print_version();
        println!();
        println!("{}", include_str!("../assets/short_help.txt"));
    }

    fn print_long_help() {
        Self::print_short_help();
        println!("{}", include_str!("../assets/long_help.txt"));
    }

    fn print_version() {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Args> {
        Args::parse_from(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn overrides() {
        let args = parse(&["--user-id", "1234", "-i", "30", "--quiet"]).unwrap();
        assert!(args.quiet);
        assert!(!args.json);

        let mut config = Config {
            client_id: "stored".into(),
            user_id: "old".into(),
            ..Config::default()
        };
        args.apply(&mut config);

        assert_eq!(config.client_id, "stored");
        assert_eq!(config.user_id, "1234");
        assert_eq!(config.refresh_interval, 30);
    }

    #[test]
    fn json_disables_logging() {
        assert!(parse(&[]).unwrap().logging());
        assert!(!parse(&["--json"]).unwrap().logging());
    }

    #[test]
    fn reject_unknown() {
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["-i", "soon"]).is_err());
    }
}
