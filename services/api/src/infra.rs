use covid19_estimator::observe::{RequestLogEntry, RequestLogSink};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) request_log: Arc<dyn RequestLogSink>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRequestLog {
    entries: Arc<Mutex<Vec<RequestLogEntry>>>,
}

impl RequestLogSink for InMemoryRequestLog {
    fn append(&self, entry: RequestLogEntry) {
        let mut guard = self.entries.lock().expect("request log mutex poisoned");
        guard.push(entry);
    }

    fn snapshot(&self) -> Vec<RequestLogEntry> {
        self.entries
            .lock()
            .expect("request log mutex poisoned")
            .clone()
    }
}
