use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use components::StatusPanel;
use status::{BackupSnapshot, StatusPoller};

mod components;
mod status;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let window = WindowBuilder::new()
        .with_title("Time Machine Buddy")
        .with_inner_size(LogicalSize::new(520.0, 340.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}

#[component]
fn App() -> Element {
    let snapshot = use_signal(BackupSnapshot::default);
    let checking = use_signal(|| false);

    // One poller for the life of the window; watch updates flow into the
    // signals the view renders from.
    use_future(move || async move {
        let poller = StatusPoller::new();
        let mut updates = poller.subscribe();
        let mut checks = poller.subscribe_checking();

        let mut checking = checking.clone();
        spawn(async move {
            while checks.changed().await.is_ok() {
                let flag = *checks.borrow();
                checking.set(flag);
            }
        });
        spawn(poller.run());

        let mut snapshot = snapshot.clone();
        while updates.changed().await.is_ok() {
            let next = updates.borrow().clone();
            snapshot.set(next);
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        StatusPanel { snapshot, checking }
    }
}
