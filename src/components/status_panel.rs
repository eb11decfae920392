use dioxus::prelude::*;
use dioxus_free_icons::{icons::bs_icons::BsArrowRepeat, Icon};

use crate::status::{
    files_line, formatted_percentage, gigabytes, minutes_remaining, BackupSnapshot,
};

/// The whole window: title header, then either the idle message or the
/// progress panel for the running backup.
#[component]
pub fn StatusPanel(snapshot: Signal<BackupSnapshot>, checking: Signal<bool>) -> Element {
    let state = snapshot();
    let bar_width = (state.percentage.clamp(0.0, 1.0) * 100.0) as i32;
    let percentage = formatted_percentage(&state);
    let files = files_line(&state);
    let copied_gb = gigabytes(state.bytes_copied);
    let total_gb = gigabytes(state.total_bytes);
    let minutes = minutes_remaining(state.time_remaining_secs);

    rsx! {
        div { class: "window",
            div { class: "header",
                h1 { class: "title", "Time Machine Buddy" }
                if checking() {
                    Icon {
                        icon: BsArrowRepeat,
                        width: 16,
                        height: 16,
                        class: "checking",
                    }
                }
            }
            if !state.is_running {
                p { class: "idle", "No Time Machine tasks are currently running." }
            } else {
                div { class: "panel",
                    p { class: "destination",
                        "Backing up to "
                        b { "{state.destination_id}" }
                        "."
                    }
                    div { class: "bar-track",
                        div { class: "bar-fill", style: "width: {bar_width}%" }
                        span { class: "bar-label", "{percentage}" }
                    }
                    div { class: "counters",
                        span {
                            b { "{files}" }
                        }
                        span {
                            b { "{copied_gb}" }
                            " / {total_gb}"
                        }
                    }
                    p { class: "remaining",
                        "Approximately "
                        b { "{minutes} minutes" }
                        " remaining."
                    }
                }
            }
        }
    }
}
