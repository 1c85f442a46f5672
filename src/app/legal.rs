use leptos::prelude::*;
use leptos_meta::Title;

use super::use_locale;
use crate::{
    content::{OWNER, OWNER_EMAIL},
    i18n::Localized,
};

/// A titled block of bilingual legal text.
struct Clause {
    heading: Localized,
    body: Localized,
}

const LEGAL_NOTICE: [Clause; 4] = [
    Clause {
        heading: Localized::new("Imprint", "Angaben gemäß § 5 DDG"),
        body: Localized::new(
            "Eugen Birich, Germany. This website is a private portfolio and not a commercial offer.",
            "Eugen Birich, Deutschland. Diese Website ist ein privates Portfolio und kein kommerzielles Angebot.",
        ),
    },
    Clause {
        heading: Localized::new("Acceptance of terms", "Annahme der Bedingungen"),
        body: Localized::new(
            "By accessing and using this portfolio you accept the following terms. If you do not agree, please do not use the site.",
            "Durch den Zugriff auf dieses Portfolio und dessen Nutzung akzeptieren Sie die folgenden Bedingungen. Wenn Sie nicht einverstanden sind, nutzen Sie die Website bitte nicht.",
        ),
    },
    Clause {
        heading: Localized::new("Proprietary rights", "Eigentumsrechte"),
        body: Localized::new(
            "All texts, designs and code shown here are owned by Eugen Birich unless stated otherwise. Linked projects may carry their own licenses.",
            "Alle hier gezeigten Texte, Designs und Quellcodes gehören Eugen Birich, sofern nicht anders angegeben. Verlinkte Projekte können eigene Lizenzen haben.",
        ),
    },
    Clause {
        heading: Localized::new("Liability for links", "Haftung für Links"),
        body: Localized::new(
            "This site links to external websites whose content is outside my control. The respective provider is responsible for their content.",
            "Diese Website enthält Links zu externen Websites, auf deren Inhalte ich keinen Einfluss habe. Für deren Inhalte ist der jeweilige Anbieter verantwortlich.",
        ),
    },
];

const PRIVACY_POLICY: [Clause; 4] = [
    Clause {
        heading: Localized::new("Controller", "Verantwortlicher"),
        body: Localized::new(
            "Eugen Birich is responsible for processing personal data on this website.",
            "Verantwortlich für die Verarbeitung personenbezogener Daten auf dieser Website ist Eugen Birich.",
        ),
    },
    Clause {
        heading: Localized::new("Contact form", "Kontaktformular"),
        body: Localized::new(
            "When you send a message, your name, email address and message are transmitted to my mail server solely to answer your request. They are not shared with third parties.",
            "Wenn Sie eine Nachricht senden, werden Ihr Name, Ihre E-Mail-Adresse und Ihre Nachricht ausschließlich zur Beantwortung Ihrer Anfrage an meinen Mailserver übertragen. Eine Weitergabe an Dritte erfolgt nicht.",
        ),
    },
    Clause {
        heading: Localized::new("Local storage", "Lokaler Speicher"),
        body: Localized::new(
            "Your language choice is stored in your browser's local storage. No cookies or tracking are used.",
            "Ihre Sprachauswahl wird im lokalen Speicher Ihres Browsers abgelegt. Es werden keine Cookies oder Tracking verwendet.",
        ),
    },
    Clause {
        heading: Localized::new("Your rights", "Ihre Rechte"),
        body: Localized::new(
            "You may request information about, correction of or deletion of your data at any time by email.",
            "Sie können jederzeit per E-Mail Auskunft über Ihre Daten sowie deren Berichtigung oder Löschung verlangen.",
        ),
    },
];

#[component]
fn LegalPage(title: Localized, clauses: &'static [Clause]) -> impl IntoView {
    let locale = use_locale();

    view! {
        <Title text=move || locale.text(title) />
        <article class="max-w-3xl mx-auto px-4 py-16 section-content">
            <h1 class="text-4xl font-bold mb-10">{move || locale.text(title)}</h1>
            {clauses
                .iter()
                .map(|clause| {
                    view! {
                        <section class="mb-8">
                            <h2 class="text-xl font-bold mb-2 text-primary">
                                {move || locale.text(clause.heading)}
                            </h2>
                            <p class="leading-relaxed">{move || locale.text(clause.body)}</p>
                        </section>
                    }
                })
                .collect_view()}
            <p class="text-sm text-muted">
                {format!("{OWNER} · ")}
                <a href=format!("mailto:{OWNER_EMAIL}") class="underline">
                    {OWNER_EMAIL}
                </a>
            </p>
        </article>
    }
}

#[component]
pub fn LegalNotice() -> impl IntoView {
    view! { <LegalPage title=Localized::new("Legal Notice", "Impressum") clauses=&LEGAL_NOTICE /> }
}

#[component]
pub fn PrivacyPolicy() -> impl IntoView {
    view! {
        <LegalPage
            title=Localized::new("Privacy Policy", "Datenschutzerklärung")
            clauses=&PRIVACY_POLICY
        />
    }
}
