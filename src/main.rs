mod app;
mod client;
mod components;
mod config;
mod message;
mod model;
mod utils;
mod views;

pub fn main() -> iced::Result {
    app::run()
}
