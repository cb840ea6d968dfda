use leptos::prelude::*;

use crate::content::{
    capitalize, featured, filter_items, post_categories, BlogPost, Category, Filter, ALL, POSTS,
    PROJECT_PLACEHOLDER,
};

use super::{dialog::Dialog, image::FallbackImage};

const FEATURED_COUNT: usize = 2;

fn badge_class(category: &str) -> String {
    let color = Category::from_slug(category)
        .map(Category::badge_class)
        .unwrap_or("bg-gray-600");
    format!("rounded-full px-3 py-1 text-xs font-semibold text-white {color}")
}

fn heading(category: &str) -> String {
    if category == ALL {
        "All Articles".to_string()
    } else {
        format!("{} Articles", capitalize(category))
    }
}

#[component]
pub fn BlogSection() -> impl IntoView {
    let (category, set_category) = signal(ALL.to_string());
    let (search, set_search) = signal(String::new());
    let selected = RwSignal::new(None::<&'static BlogPost>);
    let dialog_open = RwSignal::new(false);

    let filter = Memo::new(move |_| Filter::new(&category.get(), &search.get()));
    let visible = move || filter.with(|f| filter_items(POSTS, f));

    let read_more = move |post: &'static BlogPost| {
        selected.set(Some(post));
        dialog_open.set(true);
    };

    view! {
        <div class="w-full bg-gradient-to-b from-black to-gray-900 px-4 py-20 text-white md:px-8">
            <div class="mx-auto max-w-6xl">
                <div class="mb-12 text-center rise-in">
                    <h2 class="mb-4 bg-gradient-to-r from-cyan-400 to-blue-600 bg-clip-text text-4xl font-bold text-transparent">
                        "Insights & Articles"
                    </h2>
                    <p class="mx-auto max-w-2xl text-gray-400">
                        "Thoughts, research, and insights on machine learning, blockchain, cybersecurity, and the intersection of technology and biology."
                    </p>
                </div>
                <div class="mb-8 flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                    <input
                        type="text"
                        placeholder="Search articles..."
                        class="w-full rounded-md border border-gray-700 bg-gray-800/50 px-4 py-2 text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-cyan-500 md:w-80"
                        prop:value=search
                        on:input=move |ev| set_search(event_target_value(&ev))
                    />
                    <div class="flex flex-wrap gap-2 rounded-lg bg-gray-800/50 p-1">
                        {post_categories(POSTS)
                            .into_iter()
                            .map(|slug| {
                                view! {
                                    <button
                                        class=move || {
                                            if category.get() == slug {
                                                "rounded-md px-3 py-1 text-sm bg-cyan-900/50 text-cyan-400"
                                            } else {
                                                "rounded-md px-3 py-1 text-sm text-gray-300 hover:text-white"
                                            }
                                        }
                                        on:click=move |_| set_category(slug.to_string())
                                    >
                                        {capitalize(slug)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <Show when=move || filter.with(Filter::is_default)>
                    <div class="mb-12">
                        <h3 class="mb-6 text-2xl font-bold text-cyan-400">"Featured Articles"</h3>
                        <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                            {featured(POSTS, FEATURED_COUNT)
                                .into_iter()
                                .map(|post| view! { <FeaturedCard post on_read=read_more /> })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
                <h3 class="mb-6 text-2xl font-bold text-cyan-400">
                    {move || heading(&category.get())}
                </h3>
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| {
                        view! {
                            <p class="py-12 text-center text-gray-400">
                                "No articles found matching your criteria."
                            </p>
                        }
                    }
                >
                    <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                        {move || {
                            visible()
                                .into_iter()
                                .map(|post| view! { <PostCard post on_read=read_more /> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
            <Dialog open=dialog_open class="max-w-3xl">
                {move || selected.get().map(|post| view! { <PostDetail post /> })}
            </Dialog>
        </div>
    }
}

#[component]
fn FeaturedCard(
    post: &'static BlogPost,
    on_read: impl Fn(&'static BlogPost) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="overflow-hidden rounded-lg border border-gray-700 bg-gray-800/50 transition-colors hover:border-cyan-500/50 fade-in">
            <div class="relative h-64 overflow-hidden">
                <FallbackImage
                    src=post.image
                    placeholder=PROJECT_PLACEHOLDER
                    alt=post.title
                    class="h-full w-full object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-gray-900 to-transparent"></div>
                <div class="absolute bottom-4 left-4">
                    <span class=badge_class(post.category)>{capitalize(post.category)}</span>
                </div>
            </div>
            <div class="p-6">
                <h4 class="mb-2 text-xl font-bold">{post.title}</h4>
                <p class="mb-2 text-sm text-gray-400">{post.display_date()}</p>
                <p class="mb-4 text-gray-300">{post.excerpt}</p>
                <button
                    class="text-cyan-400 hover:text-cyan-300"
                    on:click=move |_| on_read(post)
                >
                    "Read More →"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PostCard(
    post: &'static BlogPost,
    on_read: impl Fn(&'static BlogPost) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div
            id=format!("blog-{}", post.id)
            class="flex h-full flex-col overflow-hidden rounded-lg border border-gray-700 bg-gray-800/50 transition-colors hover:border-cyan-500/50 fade-in"
        >
            <div class="h-48 overflow-hidden">
                <FallbackImage
                    src=post.image
                    placeholder=PROJECT_PLACEHOLDER
                    alt=post.title
                    class="h-full w-full object-cover"
                />
            </div>
            <div class="flex flex-1 flex-col p-5">
                <div class="mb-2 flex items-center justify-between">
                    <span class=badge_class(post.category)>{capitalize(post.category)}</span>
                    <span class="text-xs text-gray-400">{post.display_date()}</span>
                </div>
                <h4 class="mb-2 text-lg font-bold">{post.title}</h4>
                <p class="mb-4 line-clamp-3 flex-1 text-sm text-gray-300">{post.excerpt}</p>
                <button
                    class="self-start text-sm text-cyan-400 hover:text-cyan-300"
                    on:click=move |_| on_read(post)
                >
                    "Read More →"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PostDetail(post: &'static BlogPost) -> impl IntoView {
    view! {
        <article class="space-y-4">
            <h3 class="pr-8 text-2xl font-bold">{post.title}</h3>
            <div class="flex items-center gap-3">
                <span class=badge_class(post.category)>{capitalize(post.category)}</span>
                <span class="text-sm text-gray-400">{post.display_date()}</span>
            </div>
            <div class="overflow-hidden rounded-lg">
                <FallbackImage
                    src=post.image
                    placeholder=PROJECT_PLACEHOLDER
                    alt=post.title
                    class="h-64 w-full object-cover"
                />
            </div>
            <p class="leading-relaxed text-gray-300">{post.excerpt}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading() {
        assert_eq!(heading(ALL), "All Articles");
        assert_eq!(heading("blockchain"), "Blockchain Articles");
    }

    #[test]
    fn test_badge_class_falls_back_to_gray() {
        assert!(badge_class("ai").ends_with("bg-purple-600"));
        assert!(badge_class("gardening").ends_with("bg-gray-600"));
    }
}
