use std::env;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://dict.youdao.com/result";
const DEFAULT_LANG: &str = "en";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct Config {
    /// Results page the query is appended to
    pub endpoint: String,
    /// Target language parameter sent with every query
    pub lang: String,
    /// `None` means the request may block forever
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            lang: DEFAULT_LANG.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let endpoint = var("DICT_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.endpoint);

        let lang = var("DICT_LANG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.lang);

        let timeout = var("DICT_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let user_agent = var("DICT_USER_AGENT").unwrap_or(defaults.user_agent);

        Config {
            endpoint,
            lang,
            timeout,
            user_agent,
        }
    }
}
