//! A single wave from the on-chain log

use leptos::prelude::*;
use shared::dto::WaveEntry;

use crate::utils::format::format_wave_time;

#[component]
pub fn WaveCard(entry: WaveEntry) -> impl IntoView {
    let time = format_wave_time(&entry.timestamp);
    let datetime = lib_utils::format_time(entry.timestamp);

    view! {
        <div class="wave-card">
            <div>"Address: " {entry.sender_address}</div>
            <div>"Time: " <time datetime=datetime>{time}</time></div>
            <div>"Message: " {entry.message}</div>
        </div>
    }
}
