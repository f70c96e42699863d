#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_server: String,
    pub api_base_url: String,
}

const DEFAULT_API_SERVER: &str = "http://localhost:5000";

impl Config {
    /// `LABDESK_API_URL` from the runtime environment, then the value baked in
    /// at build time (browsers have no environment), then the default.
    pub fn from_env() -> Self {
        let api_server = std::env::var("LABDESK_API_URL")
            .ok()
            .or_else(|| option_env!("LABDESK_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_SERVER.to_string());
        Self::for_server(&api_server)
    }

    fn for_server(api_server: &str) -> Self {
        let api_server = api_server.trim().trim_end_matches('/').to_string();
        let api_base_url = format!("{}{}", api_server, "/api");
        Self {
            api_server,
            api_base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url() {
        let config = Config::for_server("https://lab.example.org/");
        assert_eq!(config.api_server, "https://lab.example.org");
        assert_eq!(config.api_base_url, "https://lab.example.org/api");

        let config = Config::for_server(DEFAULT_API_SERVER);
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
    }
}
