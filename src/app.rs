use std::time::Duration;

use iced::{Subscription, Task};

use crate::domain::DownloadState;
use crate::downloader::Downloader;
use crate::ui::{FetchMessage, FetchView};
use crate::utils::filename_from_url;

pub struct FetchApp {
    view: FetchView,
    downloader: Downloader,
}

impl Default for FetchApp {
    fn default() -> Self {
        Self {
            view: FetchView::default(),
            downloader: Downloader::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(FetchMessage),
    /// Periodic poll of the downloader while a transfer is active
    Tick,
}

pub fn update(app: &mut FetchApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg.clone());

            if let FetchMessage::StartPressed = ui_msg {
                if !app.view.url.is_empty() && !app.view.is_downloading {
                    start_download(app);
                }
            }
        }
        Message::Tick => poll_downloader(app),
    }
    Task::none()
}

fn start_download(app: &mut FetchApp) {
    // A finished run must return to Prepare before it can be restarted
    if app.downloader.state().is_terminal() {
        app.downloader.reset();
    }
    if app.downloader.state() == DownloadState::Error {
        // Client initialization failed; go() must not be called
        app.view.status_message = app.downloader.error_msg();
        return;
    }

    let filename = filename_from_url(&app.view.url);
    app.downloader.set_url(&app.view.url);
    app.downloader.set_local_filename(&filename);
    app.downloader.go();

    app.view.is_downloading = true;
    app.view.progress = 0.0;
    app.view.status_message = format!("Downloading to: {}", filename);
}

fn poll_downloader(app: &mut FetchApp) {
    match app.downloader.state() {
        DownloadState::Downloading => {
            let percent = app.downloader.downloading_percent();
            app.view.progress = percent as f32;
            app.view.status_message = format!("Downloading: {:.0}%", percent * 100.0);
        }
        DownloadState::Error => {
            // Terminal; the subscription stops ticking once this renders
            app.view.is_downloading = false;
            app.view.status_message = format!("Error: {}", app.downloader.error_msg());
        }
        DownloadState::Done => {
            app.view.is_downloading = false;
            app.view.progress = 1.0;
            app.view.status_message = "Finished!".to_string();
        }
        DownloadState::Prepare => {}
    }
}

pub fn view(app: &FetchApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}

pub fn subscription(app: &FetchApp) -> Subscription<Message> {
    if app.view.is_downloading {
        iced::time::every(Duration::from_millis(100)).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}
