use leptos::prelude::*;

use crate::content::{filter_items, Category, Filter, Project, ALL, PROJECTS, PROJECT_PLACEHOLDER};
use crate::starfield::drift::{Particle, TWINKLE_COUNT};

use super::{dialog::Dialog, image::FallbackImage, starfield::ParticleField};

const TAB_BASE: &str = "rounded-md px-4 py-2 text-sm font-medium transition-colors";

fn tab_class(active: bool) -> String {
    if active {
        format!("{TAB_BASE} bg-gradient-to-r from-cyan-500 to-blue-600 text-white")
    } else {
        format!("{TAB_BASE} text-gray-300 hover:bg-gray-800 hover:text-white")
    }
}

#[component]
pub fn ProjectGalaxy() -> impl IntoView {
    let (category, set_category) = signal(ALL.to_string());
    let (search, set_search) = signal(String::new());
    let selected = RwSignal::new(None::<&'static Project>);
    let dialog_open = RwSignal::new(false);

    let visible = move || filter_items(PROJECTS, &Filter::new(&category.get(), &search.get()));

    let open_project = move |project: &'static Project| {
        selected.set(Some(project));
        dialog_open.set(true);
    };

    let tabs = std::iter::once((ALL, "All Projects"))
        .chain(Category::ALL.into_iter().map(|c| (c.slug(), c.label())))
        .map(|(slug, label)| {
            view! {
                <button
                    class=move || tab_class(category.get() == slug)
                    on:click=move |_| set_category(slug.to_string())
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="relative w-full overflow-hidden bg-black px-4 py-20 text-white">
            <div class="absolute inset-0 overflow-hidden">
                <ParticleField
                    count=TWINKLE_COUNT
                    make=Particle::twinkle
                    keyframes="twinkle"
                    class="absolute rounded-full bg-white"
                />
            </div>
            <div class="container relative z-10 mx-auto">
                <div class="mb-16 text-center rise-in">
                    <h2 class="mb-4 bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-4xl font-bold text-transparent md:text-5xl">
                        "Project Galaxy"
                    </h2>
                    <p class="mx-auto max-w-2xl text-gray-400">
                        "Explore my projects across AI/ML, Cybersecurity, Blockchain, and Full Stack development. Each project represents a unique journey through the tech universe."
                    </p>
                </div>
                <div class="mb-8 flex flex-col items-center justify-between gap-4 md:flex-row">
                    <div class="flex flex-wrap justify-center gap-2 rounded-lg bg-gray-900/50 p-1">
                        {tabs}
                    </div>
                    <input
                        type="text"
                        placeholder="Search projects..."
                        class="w-full rounded-md border border-gray-700 bg-gray-900/50 px-4 py-2 text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-cyan-500 md:w-64"
                        prop:value=search
                        on:input=move |ev| set_search(event_target_value(&ev))
                    />
                </div>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|project| view! { <ProjectCard project on_open=open_project /> })
                            .collect_view()
                    }}
                </div>
                <Show when=move || visible().is_empty()>
                    <p class="py-12 text-center text-gray-400">
                        "No projects found matching your criteria."
                    </p>
                </Show>
            </div>
            <Dialog open=dialog_open class="max-w-3xl">
                {move || selected.get().map(|project| view! { <ProjectDetail project /> })}
            </Dialog>
        </div>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    on_open: impl Fn(&'static Project) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div
            class="group h-full cursor-pointer overflow-hidden rounded-lg border border-gray-800 bg-gray-900/50 backdrop-blur-sm transition-all hover:-translate-y-1 hover:border-cyan-500/50 hover:shadow-lg hover:shadow-cyan-500/10 fade-in"
            on:click=move |_| on_open(project)
        >
            <div class="relative h-48 overflow-hidden">
                <FallbackImage
                    src=project.image
                    placeholder=PROJECT_PLACEHOLDER
                    alt=project.name
                    class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent"></div>
                <span class=format!(
                    "absolute right-3 top-3 rounded-full px-3 py-1 text-xs font-semibold text-white {}",
                    project.category.badge_class(),
                )>{project.category.label()}</span>
            </div>
            <div class="p-5">
                <h3 class="mb-2 text-xl font-bold text-white">{project.name}</h3>
                <p class="mb-4 line-clamp-2 text-gray-400">{project.description}</p>
                <div class="flex gap-2">
                    <ProjectLinks project compact=true />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectLinks(project: &'static Project, #[prop(optional)] compact: bool) -> impl IntoView {
    let (code_label, demo_label) = if compact {
        ("Code", "Demo")
    } else {
        ("View Code", "Live Demo")
    };
    view! {
        {project
            .github
            .map(|href| {
                view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="rounded-md border border-gray-700 px-3 py-1 text-sm text-gray-300 hover:bg-gray-800 hover:text-white"
                        on:click=|ev| ev.stop_propagation()
                    >
                        {code_label}
                    </a>
                }
            })}
        {project
            .live_url
            .map(|href| {
                view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="rounded-md bg-cyan-600 px-3 py-1 text-sm text-white hover:bg-cyan-700"
                        on:click=|ev| ev.stop_propagation()
                    >
                        {demo_label}
                    </a>
                }
            })}
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h3 class="pr-8 text-2xl font-bold">{project.name}</h3>
                <span class=format!(
                    "mt-2 inline-block rounded-full px-3 py-1 text-xs font-semibold text-white {}",
                    project.category.badge_class(),
                )>{project.category.label()}</span>
            </div>
            <div class="overflow-hidden rounded-lg">
                <FallbackImage
                    src=project.image
                    placeholder=PROJECT_PLACEHOLDER
                    alt=project.name
                    class="h-64 w-full object-cover"
                />
            </div>
            <p class="text-gray-300">{project.description}</p>
            <div>
                <h4 class="mb-2 text-lg font-semibold text-cyan-400">"Technologies"</h4>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-md border border-gray-700 bg-gray-800 px-2 py-1 text-sm text-gray-300">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div>
                <h4 class="mb-2 text-lg font-semibold text-cyan-400">"Outcomes"</h4>
                <ul class="list-inside list-disc space-y-1 text-gray-300">
                    {project
                        .outcomes
                        .iter()
                        .map(|outcome| view! { <li>{*outcome}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div class="flex gap-3">
                <ProjectLinks project />
            </div>
        </div>
    }
}
