use leptos::prelude::*;

use crate::content::{PROFILE, PROFILE_PLACEHOLDER};

use super::image::FallbackImage;

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="relative h-64 w-64 md:h-80 md:w-80 lg:h-96 lg:w-96 pop-in">
            <div class="absolute inset-0 rounded-full bg-gradient-to-r from-cyan-400 to-blue-500 blur-lg opacity-70"></div>
            <div class="absolute inset-2 overflow-hidden rounded-full border-2 border-cyan-300 bg-gray-900">
                <FallbackImage
                    src=PROFILE.image
                    placeholder=PROFILE_PLACEHOLDER
                    alt=PROFILE.name
                    class="h-full w-full object-cover object-[center_20%] scale-125"
                />
            </div>
        </div>
    }
}
