//! Second demo window: two clickable buttons, each of which disables
//! itself once pressed.

use iced::{
    widget::{button, column, Space},
    Element, Length,
};

#[derive(Default)]
struct ButtonsApp {
    first_clicked: bool,
    second_clicked: bool,
}

#[derive(Debug, Clone)]
enum Message {
    FirstPressed,
    SecondPressed,
}

fn update(app: &mut ButtonsApp, message: Message) {
    match message {
        Message::FirstPressed => app.first_clicked = true,
        Message::SecondPressed => app.second_clicked = true,
    }
}

fn view(app: &ButtonsApp) -> Element<'_, Message> {
    // A button without an on_press handler renders disabled
    let first = if app.first_clicked {
        button("Click me")
    } else {
        button("Click me").on_press(Message::FirstPressed)
    };
    let second = if app.second_clicked {
        button("Me too")
    } else {
        button("Me too").on_press(Message::SecondPressed)
    };

    column![
        first.padding([10, 20]),
        Space::new().height(Length::Fixed(20.0)),
        second.padding([10, 20]),
    ]
    .padding(20)
    .spacing(10)
    .into()
}

fn main() -> iced::Result {
    iced::application(ButtonsApp::default, update, view)
        .title("Buttons")
        .run()
}
