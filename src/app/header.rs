use leptos::prelude::*;

use crate::content::PROFILE;

use super::scroll_to_section;

const SECTIONS: [(&str, &str); 4] = [
    ("Home", "hero"),
    ("Projects", "projects"),
    ("Skills", "skills"),
    ("Blog", "blog"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |id: &'static str| {
        scroll_to_section(id);
        set_menu_open(false);
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-black/80 backdrop-blur-md border-b border-gray-800">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <div class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-400 to-purple-600 fade-in">
                    {PROFILE.brand}
                </div>
                <div class="hidden md:flex space-x-8">
                    {SECTIONS
                        .into_iter()
                        .map(|(label, id)| {
                            view! {
                                <button
                                    class="text-gray-300 hover:text-white hover:scale-105 active:scale-95 transition-all"
                                    on:click=move |_| go_to(id)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="md:hidden">
                    <button
                        class="h-10 w-10 rounded-md text-2xl text-gray-300 hover:bg-gray-800"
                        aria-label="Toggle navigation"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-black/95 border-b border-gray-800 fade-in">
                    <div class="flex flex-col space-y-4 py-4 px-4">
                        {SECTIONS
                            .into_iter()
                            .map(|(label, id)| {
                                view! {
                                    <button
                                        class="text-gray-300 hover:text-white transition-colors py-2 w-full text-left active:scale-95"
                                        on:click=move |_| go_to(id)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
