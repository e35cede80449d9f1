use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use reqwest::blocking::Client;

use crate::domain::{DownloadError, DownloadState};

const CHUNK_SIZE: usize = 64 * 1024;

/// Fields written by the worker thread and read by the polling caller.
struct Snapshot {
    state: DownloadState,
    progress: f64,
    error: String,
}

/// One-shot HTTP(S) file downloader with a poll-based interface.
///
/// `go()` spawns a worker thread that performs a single blocking GET and
/// streams the body to disk; the caller polls `state()` and
/// `downloading_percent()` on a timer until a terminal state is observed.
/// Recovery from a finished run is `reset()` followed by `go()`.
///
/// Dropping the downloader joins any in-flight worker, so destruction
/// blocks until the network call returns. There is no cancellation.
pub struct Downloader {
    shared: Arc<Mutex<Snapshot>>,
    url: String,
    local_path: PathBuf,
    client: Option<Client>,
    worker: Option<JoinHandle<()>>,
}

impl Downloader {
    pub fn new() -> Self {
        let mut downloader = Self {
            shared: Arc::new(Mutex::new(Snapshot {
                state: DownloadState::Prepare,
                progress: 0.0,
                error: String::new(),
            })),
            url: String::new(),
            local_path: PathBuf::new(),
            client: None,
            worker: None,
        };
        downloader.reset();
        downloader
    }

    /// Records the target URL. Silently ignored outside `Prepare`.
    ///
    /// The URL is not validated here; a malformed URL surfaces later as a
    /// transfer error.
    pub fn set_url(&mut self, url: &str) {
        if self.state() != DownloadState::Prepare {
            return;
        }
        self.url = url.to_string();
    }

    /// Records the destination path. Allowed in any state, though only
    /// meaningful before `go()`.
    pub fn set_local_filename(&mut self, path: impl Into<PathBuf>) {
        self.local_path = path.into();
    }

    /// Starts the transfer on a worker thread and returns immediately.
    /// Silently ignored outside `Prepare`.
    pub fn go(&mut self) {
        if self.state() != DownloadState::Prepare {
            return;
        }
        // Prepare implies a successful reset(), so the client exists
        let Some(client) = self.client.clone() else {
            return;
        };

        // A previous run's worker has already reached a terminal state
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }

        lock(&self.shared).state = DownloadState::Downloading;

        let url = self.url.clone();
        let path = self.local_path.clone();
        let shared = Arc::clone(&self.shared);
        self.worker = Some(thread::spawn(move || {
            run_transfer(client, url, path, shared);
        }));
    }

    /// Progress snapshot: 1.0 once `Done`, the last observed fraction
    /// while `Downloading` (retained through `Error`), 0.0 in `Prepare`.
    pub fn downloading_percent(&self) -> f64 {
        let snapshot = lock(&self.shared);
        match snapshot.state {
            DownloadState::Done => 1.0,
            DownloadState::Prepare => 0.0,
            DownloadState::Downloading | DownloadState::Error => snapshot.progress,
        }
    }

    pub fn state(&self) -> DownloadState {
        lock(&self.shared).state
    }

    /// Last recorded error text; empty unless the state is `Error`.
    pub fn error_msg(&self) -> String {
        lock(&self.shared).error.clone()
    }

    /// Returns to `Prepare`, clearing progress and error. Silently ignored
    /// while `Downloading`; an in-flight transfer cannot be interrupted.
    ///
    /// The blocking HTTP client is created lazily on the first reset and
    /// reused across runs. If construction fails the state becomes `Error`
    /// and `go()` must not be called until a later reset succeeds.
    pub fn reset(&mut self) {
        {
            let mut snapshot = lock(&self.shared);
            if snapshot.state == DownloadState::Downloading {
                return;
            }
            snapshot.state = DownloadState::Prepare;
            snapshot.progress = 0.0;
            snapshot.error.clear();
        }

        if self.client.is_none() {
            match Client::builder().build() {
                Ok(client) => self.client = Some(client),
                Err(e) => fail(&self.shared, DownloadError::ClientInit(e.to_string())),
            }
        }
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Downloader {
    fn drop(&mut self) {
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

/// Runs once per `go()`, on a dedicated thread. Every exit path leaves the
/// shared state terminal and the destination file closed.
fn run_transfer(client: Client, url: String, path: PathBuf, shared: Arc<Mutex<Snapshot>>) {
    let mut file = match File::create(&path) {
        Ok(file) => file,
        Err(source) => {
            // No network request is attempted when the destination is unusable
            fail(&shared, DownloadError::Open { path, source });
            return;
        }
    };

    let mut response = match client.get(url.as_str()).send() {
        Ok(response) => response,
        Err(e) => {
            fail(&shared, DownloadError::Transfer(e.to_string()));
            return;
        }
    };

    // HTTP statuses are not inspected; only transport failure is failure
    let total = response.content_length().unwrap_or(0);
    let mut transferred: u64 = 0;
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let read = match response.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                fail(&shared, DownloadError::Transfer(e.to_string()));
                return;
            }
        };

        if let Err(source) = file.write_all(&buffer[..read]) {
            fail(&shared, DownloadError::Write { path, source });
            return;
        }

        transferred += read as u64;
        if total > 0 {
            // Unknown length never reports indeterminate progress as 0 or 1
            lock(&shared).progress = transferred as f64 / total as f64;
        }
    }

    if let Err(source) = file.sync_all() {
        fail(&shared, DownloadError::Write { path, source });
        return;
    }

    lock(&shared).state = DownloadState::Done;
}

fn fail(shared: &Mutex<Snapshot>, err: DownloadError) {
    let mut snapshot = lock(shared);
    snapshot.error = err.to_string();
    snapshot.state = DownloadState::Error;
}

// A poisoned lock only means a worker panicked mid-write; the snapshot is
// still plain data, so recover it rather than propagate the panic.
fn lock(shared: &Mutex<Snapshot>) -> MutexGuard<'_, Snapshot> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
