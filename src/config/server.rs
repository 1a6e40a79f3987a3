/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to bind to (e.g., 8080)
    pub port: u16,
}

impl ServerConfig {
    /// Socket address string in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate server configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("SERVER_HOST cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr_format() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(server.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_empty_host_rejected() {
        let server = ServerConfig {
            host: " ".to_string(),
            port: 8080,
        };
        assert!(server.validate().is_err());
    }
}
