use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{copyright_year, PROFILE};
use crate::starfield::drift::{Particle, PARTICLE_COUNT};

use super::{
    blog::BlogSection, credentials::TechCredentials, header::NavBar, hero::HeroSection,
    projects::ProjectGalaxy, starfield::ParticleField,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="relative min-h-screen overflow-x-hidden bg-black text-white">
            <Particles />
            <NavBar />
            <main class="relative z-10">
                <section id="hero">
                    <HeroSection />
                </section>
                <section id="projects" class="scroll-mt-16">
                    <ProjectGalaxy />
                </section>
                <section id="skills" class="scroll-mt-16">
                    <TechCredentials />
                </section>
                <section id="blog" class="scroll-mt-16">
                    <BlogSection />
                </section>
            </main>
            <Footer />
        </div>
    }
}

/// Slow-pulsing dots fixed behind every section.
#[component]
fn Particles() -> impl IntoView {
    view! {
        <div class="pointer-events-none fixed inset-0 z-0">
            <ParticleField
                count=PARTICLE_COUNT
                make=Particle::ambient
                keyframes="particle-pulse"
                class="absolute rounded-full bg-cyan-500/20"
            />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 border-t border-gray-800 bg-black/80 py-8">
            <div class="container mx-auto flex flex-col items-center justify-between gap-4 px-4 md:flex-row">
                <p class="text-sm text-gray-400">
                    {format!("© {} {}. All rights reserved.", copyright_year(), PROFILE.name)}
                </p>
                <div class="flex gap-6">
                    {PROFILE
                        .socials
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-sm text-gray-400 transition-colors hover:text-cyan-400"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
