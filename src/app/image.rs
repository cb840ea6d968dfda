use leptos::{html, prelude::*};

use crate::image::ImageFallback;

/// `<img>` that falls back to `placeholder` once if `src` fails to load.
///
/// The page is server rendered, so the browser may give up on `src` before
/// hydration attaches `on:error`. The mount effect catches that case.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let state = RwSignal::new(ImageFallback::new(src, placeholder));
    let img_ref = NodeRef::<html::Img>::new();

    Effect::new(move |_| {
        let Some(img) = img_ref.get() else {
            return;
        };
        state.maybe_update(|s| s.on_settled(img.complete(), img.natural_width()).is_some());
    });

    view! {
        <img
            node_ref=img_ref
            src=move || state.with(|s| s.current().to_string())
            alt=alt
            class=class
            loading="lazy"
            on:error=move |_| state.maybe_update(|s| s.on_error().is_some())
        />
    }
}
