//! Shared test doubles for the unit test suite.
//!
//! `StubFetcher` serves canned responses and remembers the URLs it was asked
//! for; `MemorySink` keeps written files in memory; `FailingSink` rejects
//! every write.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::ports::{FetchError, FileSink, HttpFetcher, HttpResponse};

/// Canned-response fetcher. Shares state through `Arc` so tests can keep a
/// handle after moving a clone into a client.
#[derive(Clone, Default)]
pub struct StubFetcher {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, FetchError>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubFetcher {
    pub fn new(responses: Vec<Result<HttpResponse, FetchError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::default(),
        }
    }

    pub fn push(&self, response: Result<HttpResponse, FetchError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpFetcher for StubFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport(format!("no canned response for {url}"))))
    }
}

/// In-memory file sink.
#[derive(Clone, Default)]
pub struct MemorySink {
    files: Arc<Mutex<Vec<(PathBuf, Vec<u8>)>>>,
}

impl MemorySink {
    pub fn files(&self) -> Vec<(PathBuf, Vec<u8>)> {
        self.files.lock().unwrap().clone()
    }

    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, data)| data.clone())
    }
}

impl FileSink for MemorySink {
    fn write(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        self.files.lock().unwrap().push((path.to_path_buf(), data.to_vec()));
        Ok(())
    }
}

/// Sink whose every write fails.
pub struct FailingSink;

impl FileSink for FailingSink {
    fn write(&self, _path: &Path, _data: &[u8]) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"))
    }
}

pub fn ok(body: &[u8]) -> Result<HttpResponse, FetchError> {
    Ok(HttpResponse { status: 200, body: body.to_vec() })
}

pub fn status(code: u16, body: &str) -> Result<HttpResponse, FetchError> {
    Ok(HttpResponse { status: code, body: body.as_bytes().to_vec() })
}

/// A trimmed Unsplash photo resource.
pub fn sample_photo() -> Value {
    json!({
        "id": "Dwu85P9SOIk",
        "created_at": "2016-05-03T11:00:28-04:00",
        "updated_at": "2016-07-10T11:00:01-05:00",
        "width": 2448,
        "height": 3264,
        "color": "#6E633A",
        "blur_hash": "LFC$yHwc8^$yIAS$%M%00KxukYIp",
        "description": "A man drinking a coffee.",
        "urls": {
            "raw": "https://images.unsplash.com/photo-1417325384643-aac51acc9e5d",
            "full": "https://images.unsplash.com/photo-1417325384643-aac51acc9e5d?q=75&fm=jpg"
        },
        "links": {
            "self": "https://api.unsplash.com/photos/Dwu85P9SOIk",
            "html": "https://unsplash.com/photos/Dwu85P9SOIk",
            "download": "https://unsplash.com/photos/Dwu85P9SOIk/download",
            "download_location": "https://api.unsplash.com/photos/Dwu85P9SOIk/download"
        },
        "tags": [{ "title": "dogs" }]
    })
}

pub fn sample_photo_bytes() -> Vec<u8> {
    serde_json::to_vec(&sample_photo()).unwrap()
}
