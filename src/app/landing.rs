use leptos::prelude::*;

use super::{marquee::MarqueeButton, use_locale};
use crate::{
    content::{GITHUB_URL, LINKEDIN_URL, OWNER, OWNER_EMAIL},
    i18n::Localized,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section id="landing" class="min-h-[90vh] flex flex-col justify-center items-center gap-8 px-4 section-content">
            <div class="text-center">
                <p class="text-xl text-muted">
                    {move || locale.text(Localized::new("Hi, I'm", "Hallo, ich bin"))}
                </p>
                <h1 class="text-5xl lg:text-7xl font-bold">{OWNER}</h1>
                <h2 class="text-3xl lg:text-5xl text-primary font-bold mt-2">
                    {move || locale.text(Localized::new("Frontend Developer", "Frontend-Entwickler"))}
                </h2>
            </div>
            <div class="flex flex-col sm:flex-row gap-6">
                <MarqueeButton
                    href="/#projects"
                    label=locale.signal(Localized::new("Check my work", "Meine Projekte"))
                />
                <MarqueeButton
                    href="/#contact"
                    label=locale.signal(Localized::new("Contact me", "Kontaktiere mich"))
                    extra_class="marquee-button-outline"
                />
            </div>
            <div class="flex items-center gap-6 mt-8">
                <span class="hidden sm:block h-px w-24 bg-primary"></span>
                <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-primary">
                    "GitHub"
                </a>
                <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" class="hover:text-primary">
                    "LinkedIn"
                </a>
                <a href=format!("mailto:{OWNER_EMAIL}") class="hover:text-primary">
                    {OWNER_EMAIL}
                </a>
            </div>
        </section>
    }
}
