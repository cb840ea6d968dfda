use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};

/// Modal overlay shown while `open` is true.
///
/// Clicking the backdrop, the close button or pressing Escape sets `open`
/// back to false. Clicks inside the panel do not reach the backdrop.
#[component]
pub fn Dialog(
    open: RwSignal<bool>,
    #[prop(into, optional)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let _ = use_event_listener(use_window(), leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });

    let children = StoredValue::new(children);
    let panel_class = format!(
        "relative max-h-[90vh] w-full overflow-y-auto rounded-lg border border-gray-700 bg-gray-900 p-6 text-white pop-in {class}"
    );

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-[100] flex items-center justify-center bg-black/80 p-4 fade-in"
                on:click=move |_| open.set(false)
            >
                <div
                    class=panel_class.clone()
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute right-4 top-4 text-gray-400 hover:text-white"
                        aria-label="Close"
                        on:click=move |_| open.set(false)
                    >
                        "✕"
                    </button>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
