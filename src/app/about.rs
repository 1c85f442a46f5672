use leptos::prelude::*;

use super::use_locale;
use crate::i18n::Localized;

const INTRO: Localized = Localized::new(
    "Hi, I'm a German-speaking frontend developer based in Germany. I enjoy turning ideas into clean, responsive interfaces and I'm motivated by the moment a design comes to life in the browser.",
    "Hallo, ich bin ein deutschsprachiger Frontend-Entwickler aus Deutschland. Ich setze Ideen gern in saubere, responsive Oberflächen um und freue mich jedes Mal, wenn ein Design im Browser lebendig wird.",
);

const POINTS: [(&str, Localized); 3] = [
    (
        "📍",
        Localized::new(
            "Based in Germany and open to remote work.",
            "Wohnhaft in Deutschland und offen für Remote-Arbeit.",
        ),
    ),
    (
        "💡",
        Localized::new(
            "Curious and always learning new technologies to keep my skills current.",
            "Neugierig und immer dabei, neue Technologien zu lernen, um meine Fähigkeiten aktuell zu halten.",
        ),
    ),
    (
        "🧩",
        Localized::new(
            "I approach problems analytically and stay persistent until the solution is clean.",
            "Ich gehe Probleme analytisch an und bleibe dran, bis die Lösung sauber ist.",
        ),
    ),
];

#[component]
pub fn AboutMe() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section id="about-me" class="max-w-5xl mx-auto px-4 py-16 section-content">
            <h2 class="text-4xl font-bold mb-8">
                {move || locale.text(Localized::new("About me", "Über mich"))}
            </h2>
            <p class="text-base mb-6 leading-relaxed">{move || locale.text(INTRO)}</p>
            <ul class="space-y-4">
                {POINTS
                    .into_iter()
                    .map(|(icon, text)| {
                        view! {
                            <li class="flex gap-4 items-start">
                                <span class="text-2xl">{icon}</span>
                                <span>{move || locale.text(text)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
