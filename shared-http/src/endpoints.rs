/// URLs of the backend endpoints the console talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// `api_base_url` is the API root, e.g. `http://localhost:5000/api`.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let base = api_base_url.into().trim_end_matches('/').to_string();
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn admin_users(&self) -> String {
        format!("{}/admin/users", self.base)
    }

    pub fn admin_user_by_id(&self, id: &str) -> String {
        format!("{}/admin/users/{}", self.base, id)
    }

    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base)
    }

    pub fn health(&self) -> String {
        format!("{}/health", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let endpoints = Endpoints::new("http://localhost:5000/api/");
        assert_eq!(endpoints.base(), "http://localhost:5000/api");
        assert_eq!(
            endpoints.admin_users(),
            "http://localhost:5000/api/admin/users"
        );
        assert_eq!(
            endpoints.admin_user_by_id("65a1"),
            "http://localhost:5000/api/admin/users/65a1"
        );
        assert_eq!(endpoints.login(), "http://localhost:5000/api/auth/login");
        assert_eq!(endpoints.health(), "http://localhost:5000/api/health");
    }
}
