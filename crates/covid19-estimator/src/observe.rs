use chrono::{DateTime, SecondsFormat, Utc};

/// One handled HTTP exchange, as captured by the request-logging middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLogEntry {
    pub recorded_at: DateTime<Utc>,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub elapsed_ms: u64,
}

impl RequestLogEntry {
    /// Stamps a new entry with the current UTC time.
    pub fn record(
        method: impl Into<String>,
        path: impl Into<String>,
        status: u16,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            recorded_at: Utc::now(),
            method: method.into(),
            path: path.into(),
            status,
            elapsed_ms,
        }
    }

    /// Stable single-line rendering used by the plain-text log listing.
    pub fn render_line(&self) -> String {
        format!(
            "{}  {}   {}  {}  {}ms\n",
            self.recorded_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.method,
            self.path,
            self.status,
            self.elapsed_ms
        )
    }
}

/// Renders entries in arrival order for the logs endpoint.
pub fn render_log(entries: &[RequestLogEntry]) -> String {
    entries.iter().map(RequestLogEntry::render_line).collect()
}

/// Destination for request log entries.
///
/// The middleware records every handled request through this seam. The
/// deployed service injects an in-memory implementation; tests may
/// substitute their own.
pub trait RequestLogSink: Send + Sync {
    fn append(&self, entry: RequestLogEntry);
    fn snapshot(&self) -> Vec<RequestLogEntry>;
}
