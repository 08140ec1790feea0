use std::time::Duration;

use leptos::*;

// Grace period before the removal is confirmed automatically.
const TIMER_MS: u64 = 3000;
const TICK_MS: u64 = 10;

/// Confirmation prompt for removing a picked place.
///
/// Confirms by itself when the user does not react within the grace
/// period; both timers are cleared when the dialog unmounts.
#[component]
pub fn DeleteConfirmation<C, X>(on_confirm: C, on_cancel: X) -> impl IntoView
where
    C: Fn() + 'static + Copy,
    X: Fn() + 'static + Copy,
{
    let remaining = RwSignal::new(TIMER_MS);

    let timeout = set_timeout_with_handle(move || on_confirm(), Duration::from_millis(TIMER_MS));
    let interval = set_interval_with_handle(
        move || remaining.update(|r| *r = r.saturating_sub(TICK_MS)),
        Duration::from_millis(TICK_MS),
    );
    on_cleanup(move || {
        if let Ok(timeout) = timeout {
            timeout.clear();
        }
        if let Ok(interval) = interval {
            interval.clear();
        }
    });

    view! {
      <div id="delete-confirmation">
        <h2>"Are you sure?"</h2>
        <p>"Do you really want to remove this place?"</p>
        <div id="confirmation-actions">
          <button class="button-text" on:click=move |_| on_cancel()>"No"</button>
          <button class="button" on:click=move |_| on_confirm()>"Yes"</button>
        </div>
        <progress max=TIMER_MS value=move || remaining.get() />
      </div>
    }
}
