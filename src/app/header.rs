use leptos::prelude::*;
use leptos_router::components::*;

use super::use_locale;
use crate::i18n::{Language, Localized};

const NAV: [(&str, Localized); 4] = [
    ("/#about-me", Localized::new("About me", "Über mich")),
    ("/#skills", Localized::new("Skills", "Fähigkeiten")),
    ("/#projects", Localized::new("Projects", "Projekte")),
    ("/#contact", Localized::new("Contact", "Kontakt")),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="sticky top-0 z-40 w-full bg-background/90 backdrop-blur">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <A href="/" attr:class="text-2xl font-bold text-primary">
                    "EB"
                </A>
                <nav class="hidden md:flex items-center gap-8">
                    <NavLinks on_pick=move || {} />
                    <LanguageToggle />
                </nav>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden flex flex-col items-center gap-6 pb-6">
                    <NavLinks on_pick=move || set_menu_open.set(false) />
                    <LanguageToggle />
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn NavLinks<F>(on_pick: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let locale = use_locale();
    NAV.into_iter()
        .map(|(href, text)| {
            view! {
                <a href=href class="nav-link hover:text-primary" on:click=move |_| on_pick()>
                    {move || locale.text(text)}
                </a>
            }
        })
        .collect_view()
}

#[component]
fn LanguageToggle() -> impl IntoView {
    let locale = use_locale();
    let class_for = move |lang: Language| {
        if locale.get() == lang {
            "text-primary font-bold"
        } else {
            "text-muted"
        }
    };

    view! {
        <button
            class="flex items-center gap-1 rounded-full border border-primary px-3 py-1"
            aria-label="Toggle language"
            on:click=move |_| locale.toggle()
        >
            <span class=move || class_for(Language::En)>"EN"</span>
            "|"
            <span class=move || class_for(Language::De)>"DE"</span>
        </button>
    }
}
