//! Log Panel Component
//!
//! Recent client log lines held by the rolling logger, for bug reports.

use leptos::prelude::*;

fn recent_lines() -> Vec<String> {
    rolling_logger::logger()
        .map(|logger| logger.recent().iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}

#[component]
pub fn LogPanel(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let (lines, set_lines) = signal(recent_lines());

    let clear = move |_| {
        if let Some(logger) = rolling_logger::logger() {
            logger.clear();
        }
        set_lines.set(Vec::new());
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal log-panel" on:click=|ev| ev.stop_propagation()>
                <h2>"Recent log"</h2>
                <pre class="log-lines">
                    {move || {
                        let lines = lines.get();
                        if lines.is_empty() { "No entries".to_string() } else { lines.join("\n") }
                    }}
                </pre>
                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| set_lines.set(recent_lines())>
                        "Refresh"
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=clear>"Clear"</button>
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
