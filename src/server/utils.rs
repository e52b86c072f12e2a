//! Server utility functions

use crate::server::server::HttpServer;
use crate::utils::error::GatewayError;

impl HttpServer {
    /// Turn a bind failure into a message an operator can act on
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> GatewayError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => GatewayError::internal(format!(
                "Port {} is already in use. Stop the other process or pick another port \
                 with --port {} or RELAY_PORT={}",
                port,
                port.saturating_add(1),
                port.saturating_add(1)
            )),
            std::io::ErrorKind::PermissionDenied => GatewayError::internal(format!(
                "Permission denied for port {}. Use a port >= 1024, e.g. --port 8080",
                port
            )),
            _ => GatewayError::internal(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
