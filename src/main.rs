mod app;
mod domain;
mod downloader;
mod ui;
mod utils;

fn main() -> iced::Result {
    iced::application(app::FetchApp::default, app::update, app::view)
        .title("File Fetch")
        .subscription(app::subscription)
        .run()
}
