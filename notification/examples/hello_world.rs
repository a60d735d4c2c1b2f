//! Hello World notification demo.
//!
//! Off-device this only shows the platform short-circuit:
//! `RUST_LOG=info cargo run -p droidnotify-notification --example hello_world`
use droidnotify_notification::{Dispatcher, NotificationRequest, NotifyConfig, UnsupportedHost};
use droidnotify_permission::sys::UnsupportedGate;

fn main() {
    env_logger::init();

    let dispatcher = Dispatcher::new(NotifyConfig::detect(), UnsupportedHost, UnsupportedGate);
    let request = NotificationRequest::new("Hello", "World from droidnotify!");

    println!("Sending notification...");
    let outcome = dispatcher.send_with_diagnostics(&request);
    match outcome.id {
        Some(id) => println!("Notification posted with id {id}."),
        None => println!("Not on Android, nothing was posted."),
    }
    for diagnostic in &outcome.diagnostics {
        println!("  - {diagnostic}");
    }
}
