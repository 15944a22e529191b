use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

const DEFAULT_ALLOWED_DOMAINS: &[&str] = &[
    "school.edu",
    "college.edu",
    "avalialearning.com",
    "gmail.com",
];

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Process-wide configuration, read once at startup and passed into the
/// store/auth client constructors.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub store_url: Option<String>,
    pub anon_key: Option<String>,
    pub service_role_key: Option<String>,
    pub signup_redirect_url: Option<String>,
    pub allowed_email_domains: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let allowed_email_domains = env_string("ALLOWED_EMAIL_DOMAINS")
            .map(|raw| parse_domain_list(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(default_domains);

        let request_timeout = Duration::from_millis(
            env_u64("STORE_TIMEOUT_MS").unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        );

        Self {
            host,
            port,
            log_level,
            store_url: env_string("SUPABASE_URL"),
            anon_key: env_string("SUPABASE_ANON_KEY"),
            service_role_key: env_string("SUPABASE_SERVICE_ROLE_KEY"),
            signup_redirect_url: env_string("SIGNUP_REDIRECT_URL"),
            allowed_email_domains,
            request_timeout,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn is_domain_allowed(&self, domain: &str) -> bool {
        self.allowed_email_domains
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(domain))
    }
}

fn default_domains() -> Vec<String> {
    DEFAULT_ALLOWED_DOMAINS
        .iter()
        .map(|domain| domain.to_string())
        .collect()
}

fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_ascii_lowercase())
        .filter(|part| !part.is_empty())
        .collect()
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_u64(key: &str) -> Option<u64> {
    env_string(key)?.parse().ok()
}
