use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::use_locale;
use crate::{
    content::{next_project_id, project, PROJECTS},
    i18n::Localized,
};

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    let locale = use_locale();
    let (open, set_open) = signal(None::<usize>);

    _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_open.set(None);
        }
    });

    view! {
        <section id="projects" class="max-w-5xl mx-auto px-4 py-16 section-content">
            <h2 class="text-4xl font-bold mb-4">
                {move || locale.text(Localized::new("Featured Projects", "Ausgewählte Projekte"))}
            </h2>
            <p class="mb-10 text-muted">
                {move || {
                    locale
                        .text(
                            Localized::new(
                                "Explore a selection of my work here - Interact with projects to see my skills in action.",
                                "Hier finden Sie eine Auswahl meiner Arbeiten - Interagieren Sie mit den Projekten, um meine Fähigkeiten in Aktion zu sehen.",
                            ),
                        )
                }}
            </p>
            <div class="flex flex-col divide-y divide-muted/30">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        let id = p.id;
                        view! {
                            <button
                                class="project-row flex justify-between items-center py-6 text-left hover:text-primary"
                                on:click=move |_| set_open.set(Some(id))
                            >
                                <span class="text-2xl font-bold">{p.title}</span>
                                <span class="text-sm text-muted">
                                    {p.stack.iter().map(|t| t.name).collect::<Vec<_>>().join(" | ")}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                open.get()
                    .map(|id| {
                        view! {
                            <ProjectOverlay
                                id
                                on_close=move || set_open.set(None)
                                on_next=move || set_open.set(Some(next_project_id(id)))
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectOverlay<C, N>(id: usize, on_close: C, on_next: N) -> impl IntoView
where
    C: Fn() + Copy + Send + Sync + 'static,
    N: Fn() + Send + Sync + 'static,
{
    let locale = use_locale();
    let p = project(id);

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 p-4"
            role="dialog"
            aria-modal="true"
            on:click=move |_| on_close()
        >
            <div
                class="relative w-full max-w-4xl rounded-2xl bg-background p-8 grid gap-8 md:grid-cols-2"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 text-2xl"
                    aria-label="Close"
                    on:click=move |_| on_close()
                >
                    "✕"
                </button>
                <div class="flex flex-col gap-4">
                    <span class="text-6xl font-bold text-primary">{format!("{:02}", p.id)}</span>
                    <h3 class="text-3xl font-bold">{p.title}</h3>
                    <h4 class="text-primary">{move || locale.text(p.question)}</h4>
                    <p class="leading-relaxed">{move || locale.text(p.description)}</p>
                    <div class="flex flex-wrap gap-4">
                        {p
                            .stack
                            .iter()
                            .map(|t| {
                                view! {
                                    <span class="flex items-center gap-2">
                                        <img src=t.icon alt=t.name class="h-6 w-6" />
                                        {t.name}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-4 mt-4">
                        <a
                            href=p.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="rounded-full border border-primary px-5 py-2"
                        >
                            "GitHub ↗"
                        </a>
                        <a
                            href=p.live
                            target="_blank"
                            rel="noopener noreferrer"
                            class="rounded-full border border-primary px-5 py-2"
                        >
                            "Live Test ↗"
                        </a>
                    </div>
                </div>
                <div class="flex flex-col justify-between gap-4">
                    <img src=p.screenshot alt=format!("{} Project Screenshot", p.title) class="rounded-lg" />
                    <button class="self-end text-primary" on:click=move |_| on_next()>
                        {move || locale.text(Localized::new("Next project →", "Nächstes Projekt →"))}
                    </button>
                </div>
            </div>
        </div>
    }
}
