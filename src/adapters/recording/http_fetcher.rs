//! Recording adapter for the `HttpFetcher` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::http_fetcher::{FetchError, HttpFetcher, HttpRequest, HttpResponse};

/// Records GET exchanges while delegating to an inner fetcher.
pub struct RecordingHttpFetcher {
    inner: Box<dyn HttpFetcher>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingHttpFetcher {
    /// Creates a new recording fetcher wrapping the given implementation.
    pub fn new(inner: Box<dyn HttpFetcher>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl HttpFetcher for RecordingHttpFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let result = self.inner.get(url);
        record_result(&self.recorder, "http_fetcher", "get", &HttpRequest::redacted(url), &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::StubFetcher;

    #[test]
    fn records_redacted_request_and_response() {
        let inner = StubFetcher::new(vec![Ok(HttpResponse { status: 200, body: b"{}".to_vec() })]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "t", "c")));

        let fetcher = RecordingHttpFetcher::new(Box::new(inner), Arc::clone(&recorder));
        let response =
            fetcher.get("https://api.unsplash.com/photos/random/?client_id=s3cr3t").unwrap();
        assert_eq!(response.status, 200);

        let guard = recorder.lock().unwrap();
        assert_eq!(guard.len(), 1);
        guard.save().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("s3cr3t"));
        assert!(content.contains("client_id=REDACTED"));
        assert!(content.contains("e30="));
    }

    #[test]
    fn records_transport_failures() {
        let inner = StubFetcher::new(vec![Err(FetchError::Transport("dns failure".into()))]);
        let dir = tempfile::tempdir().unwrap();
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(dir.path().join("r.yaml"), "t", "c")));

        let fetcher = RecordingHttpFetcher::new(Box::new(inner), Arc::clone(&recorder));
        assert!(fetcher.get("https://example.com").is_err());

        assert_eq!(recorder.lock().unwrap().len(), 1);
    }

    #[test]
    fn recorded_failures_do_not_carry_the_key() {
        let inner = StubFetcher::new(vec![Err(FetchError::Transport(
            "error sending request for url (https://api.unsplash.com/?client_id=s3cr3t)"
                .into(),
        ))]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fail.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "t", "c")));

        let fetcher = RecordingHttpFetcher::new(Box::new(inner), Arc::clone(&recorder));
        assert!(fetcher.get("https://api.unsplash.com/photos/random/?client_id=s3cr3t").is_err());
        recorder.lock().unwrap().save().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("s3cr3t"));
        assert!(content.contains("error sending request"));
    }
}
