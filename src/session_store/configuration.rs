use std::time::Duration;

/// Resolved store configuration. Defaults: `127.0.0.1:11211`, prefix
/// `sess:`, TTL one day. `client_options` are not interpreted at this layer;
/// they are appended to the connection URL for the underlying client.
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub prefix: String,
    pub default_ttl: Duration,
    pub client_options: Vec<(String, String)>,
}

impl Configuration {
    pub fn url(&self) -> String {
        let mut url = format!("memcache://{}:{}", self.host, self.port);
        for (index, (key, value)) in self.client_options.iter().enumerate() {
            url.push(if index == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 11211,
            prefix: "sess:".to_string(),
            default_ttl: Duration::from_secs(86400),
            client_options: Vec::new(),
        }
    }
}

/// Caller-supplied subset of [Configuration]; unset fields fall back to the
/// defaults during [merge_defaults].
#[derive(Clone, Debug, Default)]
pub struct ConfigurationOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub prefix: Option<String>,
    pub default_ttl: Option<Duration>,
    pub client_options: Vec<(String, String)>,
}

pub fn merge_defaults(supplied: ConfigurationOverrides, defaults: Configuration) -> Configuration {
    Configuration {
        host: supplied.host.unwrap_or(defaults.host),
        port: supplied.port.unwrap_or(defaults.port),
        prefix: supplied.prefix.unwrap_or(defaults.prefix),
        default_ttl: supplied.default_ttl.unwrap_or(defaults.default_ttl),
        client_options: if supplied.client_options.is_empty() {
            defaults.client_options
        } else {
            supplied.client_options
        },
    }
}
