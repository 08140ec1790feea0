use leptos::*;

/// Error display, used both inline and inside the error modal.
#[component]
pub fn ErrorBlock(
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(optional, into)] on_confirm: Option<Callback<()>>,
) -> impl IntoView {
    view! {
      <div class="error">
        <h2>{title}</h2>
        <p>{move || message.get()}</p>
        {on_confirm.map(|on_confirm| view! {
          <div class="error-actions">
            <button class="button" on:click=move |_| on_confirm.call(())>"Okay"</button>
          </div>
        })}
      </div>
    }
}
