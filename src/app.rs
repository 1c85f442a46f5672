mod about;
mod contact;
mod footer;
mod header;
mod landing;
mod landscape;
mod legal;
mod marquee;
mod projects;
mod skills;
mod social;

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{
    storage::{use_local_storage_with_options, UseStorageOptions},
    use_preferred_dark, use_window_size,
};

use crate::{
    config::SiteConfig,
    i18n::{storage_warning, Language, Localized, LANGUAGE_STORAGE_KEY},
};

use about::AboutMe;
use contact::Contact;
use footer::Footer;
use header::Header;
use landing::LandingPage;
use landscape::{LandscapeBlocker, LandscapePage};
use legal::{LegalNotice, PrivacyPolicy};
use projects::FeaturedProjects;
use skills::SkillSet;
use social::Social;

/// The visitor's language preference, shared with every component.
#[derive(Debug, Clone, Copy)]
pub struct Locale {
    language: Signal<Language>,
    set_language: WriteSignal<Language>,
}

impl Locale {
    pub fn get(&self) -> Language {
        self.language.get()
    }

    pub fn get_untracked(&self) -> Language {
        self.language.get_untracked()
    }

    pub fn text(&self, text: Localized) -> &'static str {
        text.get(self.get())
    }

    /// A reactive view of a bilingual text.
    pub fn signal(self, text: Localized) -> Signal<&'static str> {
        Signal::derive(move || self.text(text))
    }

    pub fn toggle(&self) {
        let next = self.get_untracked().toggled();
        log::info!("switching language to {next}");
        self.set_language.set(next);
    }
}

pub fn use_locale() -> Locale {
    expect_context::<Locale>()
}

/// Viewport width; infinite while rendering on the server.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: Signal<f64>,
}

impl Viewport {
    pub fn known_width(&self) -> Option<f64> {
        Some(self.width.get()).filter(|w| w.is_finite())
    }
}

pub fn use_viewport() -> Viewport {
    expect_context::<Viewport>()
}

/// Light icon on a dark color scheme, dark icon otherwise.
pub fn favicon_href(prefers_dark: bool) -> &'static str {
    if prefers_dark {
        "/favicon-light.svg"
    } else {
        "/favicon-dark.svg"
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (language, set_language, _) = use_local_storage_with_options::<Language, FromToStringCodec>(
        LANGUAGE_STORAGE_KEY,
        UseStorageOptions::default().on_error(|err| log::warn!("{}", storage_warning(&err))),
    );
    let locale = Locale {
        language,
        set_language,
    };
    provide_context(locale);
    provide_context(Viewport {
        width: use_window_size().width,
    });
    provide_context(SiteConfig::from_build_env());

    let prefers_dark = use_preferred_dark();

    view! {
        <Html {..} lang=move || locale.get().code() />
        <Title formatter=|title| format!("Eugen Birich - {title}") />
        <Meta
            name="description"
            content="Portfolio of Eugen Birich, frontend developer: projects, skills and contact."
        />
        {move || {
            view! { <Link rel="icon" type_="image/svg+xml" href=favicon_href(prefers_dark.get()) /> }
        }}

        <Router>
            <Header />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=MainPage />
                    <Route path=path!("/legal-notice") view=LegalNotice />
                    <Route path=path!("/privacy-policy") view=PrivacyPolicy />
                    <Route path=path!("/landscape") view=LandscapePage />
                </Routes>
            </main>
            <Footer />
            <LandscapeBlocker />
        </Router>
    }
}

#[component]
fn MainPage() -> impl IntoView {
    let locale = use_locale();
    view! {
        <Title text=move || locale.text(Localized::new("Frontend Developer", "Frontend-Entwickler")) />
        <LandingPage />
        <AboutMe />
        <SkillSet />
        <FeaturedProjects />
        <Social />
        <Contact />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_contrasts_color_scheme() {
        assert_eq!(favicon_href(true), "/favicon-light.svg");
        assert_eq!(favicon_href(false), "/favicon-dark.svg");
    }
}
