#![windows_subsystem = "windows"]

mod app;
mod entry;
mod logging;
mod state;
mod ui;

fn main() -> iced::Result {
    logging::init();

    iced::application(app::Todos::title, app::Todos::update, app::Todos::view)
        .subscription(app::Todos::subscription)
        .theme(app::Todos::theme)
        .window_size((420.0, 760.0))
        .run_with(app::Todos::new)
}
