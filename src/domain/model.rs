#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    /// Target and destination may be set; `go()` is accepted.
    Prepare,
    /// Worker thread is streaming the body to disk.
    Downloading,
    /// Terminal for the run; error text is available.
    Error,
    /// Terminal for the run; the file is complete on disk.
    Done,
}

impl DownloadState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DownloadState::Error | DownloadState::Done)
    }
}
