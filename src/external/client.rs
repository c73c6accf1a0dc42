use std::sync::LazyLock;

/// Shared HTTP client for outbound provisioning requests
///
/// Initialized lazily on first access and reused for every request, so TCP
/// connections and TLS state are pooled across providers.
///
/// No request timeout is configured: a provisioning request blocks until
/// the transport itself gives up (DNS failure, connection refused, reset).
/// Callers that need a bound must set one per request.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }
}
