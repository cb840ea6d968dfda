use leptos::prelude::*;

use crate::content::PROFILE;

use super::{avatar::Avatar, scroll_past_fold, scroll_to_section, starfield::InterstellarBackground};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <div class="relative min-h-screen w-full overflow-hidden bg-black text-white">
            <div class="absolute inset-0 z-0">
                <InterstellarBackground />
            </div>
            <div class="relative z-10 flex min-h-screen w-full flex-col items-center justify-center px-4 py-16 md:px-8">
                <div class="container mx-auto flex max-w-6xl flex-col items-center lg:flex-row lg:justify-between">
                    <div class="mb-10 flex flex-col items-center text-center lg:mb-0 lg:w-1/2 lg:items-start lg:text-left rise-in">
                        <h1 class="mb-4 text-4xl font-bold tracking-tight text-cyan-400 md:text-5xl lg:text-6xl">
                            {PROFILE.name}
                        </h1>
                        <h2 class="mb-6 text-xl font-medium text-cyan-200 md:text-2xl">
                            {PROFILE.title}
                        </h2>
                        <p class="mb-8 max-w-lg text-gray-300">{PROFILE.bio}</p>
                        <div class="flex flex-col space-y-4 sm:flex-row sm:space-x-4 sm:space-y-0">
                            <button
                                class="rounded-md px-8 py-3 font-medium bg-gradient-to-r from-cyan-500 to-blue-600 text-white hover:from-cyan-600 hover:to-blue-700"
                                on:click=move |_| scroll_to_section("projects")
                            >
                                {PROFILE.cta}
                            </button>
                            <div class="flex items-center justify-center space-x-4">
                                {PROFILE
                                    .socials
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label
                                                class="rounded-full bg-gray-800 px-3 py-2 text-sm text-gray-300 transition-all hover:scale-110 hover:bg-gray-700 hover:text-white"
                                            >
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <Avatar />
                </div>
                <button
                    class="absolute bottom-8 left-1/2 -translate-x-1/2 cursor-pointer text-3xl text-cyan-400 bob"
                    aria-label="Scroll down"
                    on:click=move |_| scroll_past_fold()
                >
                    "↓"
                </button>
            </div>
        </div>
    }
}
