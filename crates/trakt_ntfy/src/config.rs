use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use ntfy_notifier::{DEFAULT_CHANNEL, DEFAULT_SERVER};
use trakt_client::auth::token_store::DEFAULT_TOKEN_FILE;
use trakt_client::config::DEFAULT_API_ROOT;

/// Runtime options, read once at startup from flags, the environment and
/// an optional `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(name = "trakt-ntfy")]
#[command(about = "Push today's Trakt episode calendar to an ntfy topic")]
#[command(version)]
pub struct Settings {
    /// File holding the cached Trakt bearer token
    #[arg(long, env = "TRAKT_TOKENFILE", default_value = DEFAULT_TOKEN_FILE)]
    pub token_file: PathBuf,

    /// ntfy topic that receives the notifications
    #[arg(long, env = "NTFY_CHANNEL", default_value = DEFAULT_CHANNEL)]
    pub channel: String,

    #[arg(long, env = "NTFY_SERVER", default_value = DEFAULT_SERVER)]
    pub ntfy_server: String,

    /// Trakt OAuth application client id
    #[arg(long, env = "TRAKT_CLIENTID", hide_env_values = true)]
    pub client_id: String,

    /// Trakt OAuth application client secret
    #[arg(long, env = "TRAKT_CLIENTSECRET", hide_env_values = true)]
    pub client_secret: String,

    #[arg(long, env = "TRAKT_API_ROOT", default_value = DEFAULT_API_ROOT)]
    pub api_root: String,

    /// First calendar day (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Number of calendar days to fetch
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<Settings, clap::Error> {
        let mut args = vec![
            "trakt-ntfy",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
        ];
        args.extend_from_slice(extra);
        Settings::try_parse_from(args)
    }

    #[test]
    fn defaults_match_original_setup() {
        let settings = parse(&[]).expect("settings");

        assert_eq!(settings.token_file, PathBuf::from("t_token"));
        assert_eq!(settings.channel, "trakttv_shows");
        assert_eq!(settings.ntfy_server, "https://ntfy.sh");
        assert_eq!(settings.api_root, "https://api.trakt.tv");
        assert_eq!(settings.days, 1);
        assert_eq!(settings.date, None);
    }

    #[test]
    fn parses_date_override_and_window() {
        let settings = parse(&["--date", "2024-01-01", "--days", "3"]).expect("settings");

        assert_eq!(settings.date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(settings.days, 3);
    }

    #[test]
    fn rejects_zero_day_window_and_bad_dates() {
        assert!(parse(&["--days", "0"]).is_err());
        assert!(parse(&["--date", "01/01/2024"]).is_err());
    }
}
