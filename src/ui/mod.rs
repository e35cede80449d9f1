use iced::{
    widget::{button, column, progress_bar, text, text_input, Space},
    Element, Length,
};

/// Main view state
pub struct FetchView {
    pub url: String,
    pub status_message: String,
    pub progress: f32,
    pub is_downloading: bool,
}

impl Default for FetchView {
    fn default() -> Self {
        Self {
            url: String::new(),
            status_message: "Enter a URL to download".to_string(),
            progress: 0.0,
            is_downloading: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum FetchMessage {
    UrlChanged(String),
    StartPressed,
}

impl FetchView {
    pub fn update(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::UrlChanged(url) => {
                self.url = url;
            }
            FetchMessage::StartPressed => {
                // Will be handled by the app
            }
        }
    }

    pub fn view(&self) -> Element<'_, FetchMessage> {
        let start = if self.is_downloading {
            button("Start Download")
        } else {
            button("Start Download").on_press(FetchMessage::StartPressed)
        };

        column![
            text("File Fetch").size(32),
            Space::new().height(Length::Fixed(20.0)),
            text("URL:").size(16),
            text_input("Enter a URL...", &self.url)
                .on_input(FetchMessage::UrlChanged)
                .padding(10),
            Space::new().height(Length::Fixed(10.0)),
            text(&self.status_message).size(14),
            Space::new().height(Length::Fixed(10.0)),
            progress_bar(0.0..=1.0, self.progress),
            Space::new().height(Length::Fixed(20.0)),
            start.padding([10, 20]),
        ]
        .padding(20)
        .spacing(10)
        .into()
    }
}
