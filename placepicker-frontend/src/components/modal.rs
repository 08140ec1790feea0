use leptos::*;

/// Overlay dialog. Clicking the backdrop closes it.
#[component]
pub fn Modal<F>(
    #[prop(into)] open: Signal<bool>,
    on_close: F,
    children: ChildrenFn,
) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    move || {
        open.get().then(|| {
            view! {
              <div class="backdrop" on:click=move |_| on_close()></div>
              <dialog class="modal" open=true>
                {children()}
              </dialog>
            }
        })
    }
}
