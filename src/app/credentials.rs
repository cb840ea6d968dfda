use leptos::prelude::*;

use crate::content::{
    filter_skills, skill_categories, Certification, Education, Skill, CERTIFICATIONS, CV_LINK,
    EDUCATION, SKILLS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Skills,
    Education,
    Certifications,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Skills, Tab::Education, Tab::Certifications];

    fn label(self) -> &'static str {
        match self {
            Tab::Skills => "Skills",
            Tab::Education => "Education",
            Tab::Certifications => "Certifications",
        }
    }
}

#[component]
pub fn TechCredentials() -> impl IntoView {
    let (tab, set_tab) = signal(Tab::Skills);

    view! {
        <div class="w-full bg-black px-4 py-20 text-white md:px-8">
            <div class="mx-auto max-w-6xl">
                <div class="mb-12 text-center rise-in">
                    <h2 class="mb-4 bg-gradient-to-r from-cyan-400 to-blue-600 bg-clip-text text-4xl font-bold text-transparent">
                        "Technical Credentials"
                    </h2>
                    <p class="mx-auto max-w-2xl text-gray-400">
                        "My technical expertise, educational background, and professional certifications in AI/ML, cybersecurity, and blockchain technologies."
                    </p>
                </div>
                <div class="mb-8 flex flex-col items-center justify-between gap-4 sm:flex-row">
                    <div class="grid w-full grid-cols-3 rounded-lg bg-gray-900 p-1 sm:w-auto">
                        {Tab::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        class=move || {
                                            if tab.get() == t {
                                                "rounded-md px-4 py-2 text-sm bg-cyan-900/50 text-cyan-400"
                                            } else {
                                                "rounded-md px-4 py-2 text-sm text-gray-300 hover:text-white"
                                            }
                                        }
                                        on:click=move |_| set_tab(t)
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <a
                        href=CV_LINK
                        download=""
                        class="rounded-md border border-cyan-500 px-4 py-2 text-cyan-400 hover:bg-cyan-950"
                    >
                        "Download CV"
                    </a>
                </div>
                {move || match tab.get() {
                    Tab::Skills => view! { <SkillsPanel /> }.into_any(),
                    Tab::Education => view! { <EducationPanel /> }.into_any(),
                    Tab::Certifications => view! { <CertificationsPanel /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn SkillsPanel() -> impl IntoView {
    let (selected, set_selected) = signal("All");

    view! {
        <div class="mb-6 flex flex-wrap gap-2 fade-in">
            {skill_categories(SKILLS)
                .into_iter()
                .map(|category| {
                    view! {
                        <button
                            class=move || {
                                if selected.get() == category {
                                    "rounded-full px-3 py-1 text-sm bg-cyan-600 text-white"
                                } else {
                                    "rounded-full border border-gray-700 px-3 py-1 text-sm text-gray-300 hover:bg-gray-800"
                                }
                            }
                            on:click=move |_| set_selected(category)
                        >
                            {category}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
            {move || {
                filter_skills(SKILLS, selected.get())
                    .into_iter()
                    .map(|skill| view! { <SkillBar skill /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-800 bg-gray-900/50 p-4 fade-in">
            <div class="mb-2 flex justify-between">
                <span class="font-medium">{skill.name}</span>
                <span class="text-cyan-400">{format!("{}%", skill.level)}</span>
            </div>
            <div class="h-2 w-full overflow-hidden rounded-full bg-gray-800">
                <div
                    class="h-full rounded-full bg-gradient-to-r from-cyan-500 to-blue-600"
                    style=format!("width: {}%", skill.level)
                ></div>
            </div>
        </div>
    }
}

/// Logo if there is one, otherwise the first letter of `name`.
#[component]
fn Emblem(logo: Option<&'static str>, name: &'static str, initial: String) -> impl IntoView {
    view! {
        <div class="flex h-16 w-16 flex-shrink-0 items-center justify-center overflow-hidden rounded-full bg-gray-800">
            {match logo {
                Some(src) => {
                    view! { <img src=src alt=name class="h-full w-full object-contain" /> }
                        .into_any()
                }
                None => {
                    view! { <span class="text-2xl font-bold text-cyan-400">{initial}</span> }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn EducationPanel() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-6 md:grid-cols-2 fade-in">
            {EDUCATION.iter().map(|edu| view! { <EducationCard edu /> }).collect_view()}
        </div>
    }
}

#[component]
fn EducationCard(edu: &'static Education) -> impl IntoView {
    view! {
        <div class="flex gap-4 rounded-lg border border-gray-800 bg-gray-900/50 p-6">
            <Emblem logo=edu.logo name=edu.institution initial=edu.initial() />
            <div>
                <h3 class="text-lg font-bold">{edu.institution}</h3>
                <p class="text-cyan-400">{format!("{} in {}", edu.degree, edu.field)}</p>
                <p class="text-sm text-gray-400">{edu.year}</p>
            </div>
        </div>
    }
}

#[component]
fn CertificationsPanel() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-6 md:grid-cols-2 fade-in">
            {CERTIFICATIONS.iter().map(|cert| view! { <CertificationCard cert /> }).collect_view()}
        </div>
    }
}

#[component]
fn CertificationCard(cert: &'static Certification) -> impl IntoView {
    view! {
        <div class="flex gap-4 rounded-lg border border-gray-800 bg-gray-900/50 p-6">
            <Emblem logo=cert.logo name=cert.issuer initial=cert.initial() />
            <div class="flex-1">
                <h3 class="text-lg font-bold">{cert.name}</h3>
                <p class="text-cyan-400">{cert.issuer}</p>
                <p class="text-sm text-gray-400">{format!("Issued {}", cert.date)}</p>
                {cert
                    .link
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="mt-2 inline-block text-sm text-cyan-400 hover:underline"
                            >
                                "View Certificate"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
