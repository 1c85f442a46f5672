use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};
use leptos_router::components::*;

use super::{use_locale, use_viewport};
use crate::{
    config::SiteConfig,
    contact::{placeholder, Banner, ContactForm, Delivery, Field, Mailer, SendError},
    i18n::Localized,
};

const MIN_TEXTAREA_HEIGHT: i32 = 22;

fn fit_textarea(el: &web_sys::HtmlTextAreaElement) {
    let style = web_sys::HtmlElement::style(el);
    _ = style.set_property("height", "auto");
    let height = el.scroll_height().max(MIN_TEXTAREA_HEIGHT);
    _ = style.set_property("height", &format!("{height}px"));
}

#[component]
pub fn Contact() -> impl IntoView {
    let locale = use_locale();
    let viewport = use_viewport();
    let mailer = Mailer::new(&expect_context::<SiteConfig>());
    let form = RwSignal::new(ContactForm::default());
    let form_ref = NodeRef::<html::Form>::new();

    let show_banner = move |banner: Banner| {
        set_timeout(move || form.update(|f| f.dismiss(banner)), banner.duration());
    };

    let complete = move |outcome: Result<(), SendError>| {
        let lang = locale.get_untracked();
        if let Some(banner) = form.try_update(|f| f.finish(outcome, lang)) {
            show_banner(banner);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let lang = locale.get_untracked();
        let form_valid = form_ref
            .get_untracked()
            .is_some_and(|el| el.check_validity());
        let Some(res) = form.try_update(|f| f.begin_submit(form_valid, lang)) else {
            return;
        };
        let data = match res {
            Ok(data) => data,
            Err(rejection) => {
                show_banner(rejection.banner());
                return;
            }
        };
        let mailer = mailer.clone();
        spawn_local(async move {
            match mailer.send(&data).await {
                Ok(Delivery::Sent) => complete(Ok(())),
                Ok(Delivery::Simulated { after }) => set_timeout(move || complete(Ok(())), after),
                Err(err) => complete(Err(err)),
            }
        });
    };

    let field_placeholder = move |field: Field, missing: fn(&ContactForm) -> bool| {
        placeholder(
            field,
            locale.get(),
            form.with(missing),
            viewport.known_width(),
        )
    };

    view! {
        <section id="contact" class="max-w-5xl mx-auto px-4 py-16 section-content">
            <h2 class="text-4xl font-bold mb-4">
                {move || locale.text(Localized::new("Contact me", "Kontakt"))}
            </h2>
            <p class="mb-10 text-muted">
                {move || {
                    locale
                        .text(
                            Localized::new(
                                "Encourage me to use my skills to help you with your project. Do you need a frontend developer? Let's talk!",
                                "Ermutigen Sie mich, meine Fähigkeiten für Ihr Projekt einzusetzen. Sie brauchen einen Frontend-Entwickler? Lassen Sie uns reden!",
                            ),
                        )
                }}
            </p>
            <form node_ref=form_ref class="flex flex-col gap-6" novalidate=true on:submit=on_submit>
                <label class="flex flex-col gap-2">
                    <span>{move || locale.text(Localized::new("What's your name?", "Wie heißen Sie?"))}</span>
                    <input
                        type="text"
                        name="name"
                        required=true
                        class=move || {
                            if form.with(ContactForm::name_missing) { "input input-error" } else { "input" }
                        }
                        placeholder=move || field_placeholder(Field::Name, ContactForm::name_missing)
                        prop:value=move || form.with(|f| f.data.name.clone())
                        on:input=move |ev| form.update(|f| f.data.name = event_target_value(&ev))
                    />
                </label>
                <label class="flex flex-col gap-2">
                    <span>{move || locale.text(Localized::new("What's your email?", "Wie lautet Ihre E-Mail?"))}</span>
                    <input
                        type="email"
                        name="email"
                        required=true
                        class=move || {
                            if form.with(ContactForm::email_missing) { "input input-error" } else { "input" }
                        }
                        placeholder=move || field_placeholder(Field::Email, ContactForm::email_missing)
                        prop:value=move || form.with(|f| f.data.email.clone())
                        on:input=move |ev| form.update(|f| f.data.email = event_target_value(&ev))
                    />
                    {move || {
                        form.with(|f| f.feedback.email_error)
                            .map(|msg| view! { <span class="text-sm text-error">{msg}</span> })
                    }}
                </label>
                <label class="flex flex-col gap-2">
                    <span>{move || locale.text(Localized::new("How can I help you?", "Wie kann ich Ihnen helfen?"))}</span>
                    <textarea
                        name="message"
                        required=true
                        rows="1"
                        class=move || {
                            if form.with(ContactForm::message_missing) { "input input-error" } else { "input" }
                        }
                        placeholder=move || field_placeholder(Field::Message, ContactForm::message_missing)
                        prop:value=move || form.with(|f| f.data.message.clone())
                        on:input=move |ev| {
                            form.update(|f| f.data.message = event_target_value(&ev));
                            fit_textarea(&event_target::<web_sys::HtmlTextAreaElement>(&ev));
                        }
                    ></textarea>
                </label>
                <label class="flex items-start gap-3 cursor-pointer">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.accept_policy)
                        on:change=move |_| form.update(ContactForm::toggle_policy)
                    />
                    <span class="text-sm">
                        {move || locale.text(Localized::new("I've read the ", "Ich habe die "))}
                        <A href="/privacy-policy" attr:class="text-primary underline">
                            {move || locale.text(Localized::new("privacy policy", "Datenschutzerklärung"))}
                        </A>
                        {move || {
                            locale
                                .text(
                                    Localized::new(
                                        " and agree to the processing of my data as outlined.",
                                        " gelesen und stimme der Verarbeitung meiner Daten wie beschrieben zu.",
                                    ),
                                )
                        }}
                    </span>
                </label>
                <Show when=move || form.with(|f| f.feedback.form_invalid)>
                    <span class="text-sm text-error">
                        {move || {
                            locale
                                .text(
                                    Localized::new(
                                        "Please fill in all fields and accept the privacy policy.",
                                        "Bitte füllen Sie alle Felder aus und akzeptieren Sie die Datenschutzerklärung.",
                                    ),
                                )
                        }}
                    </span>
                </Show>
                <button
                    type="submit"
                    class="self-center sm:self-end rounded-lg bg-primary px-8 py-3 font-bold disabled:opacity-50"
                    disabled=move || form.with(|f| f.feedback.sending)
                >
                    {move || {
                        if form.with(|f| f.feedback.sending) {
                            locale.text(Localized::new("Sending...", "Wird gesendet..."))
                        } else {
                            locale.text(Localized::new("Say Hello ;)", "Sag Hallo ;)"))
                        }
                    }}
                </button>
                <Show when=move || form.with(|f| f.feedback.sent)>
                    <span class="text-center text-success">
                        {move || {
                            locale
                                .text(
                                    Localized::new(
                                        "Thank you! Your message has been sent.",
                                        "Vielen Dank! Ihre Nachricht wurde gesendet.",
                                    ),
                                )
                        }}
                    </span>
                </Show>
                {move || {
                    form.with(|f| f.feedback.send_error)
                        .map(|msg| view! { <span class="text-center text-error">{msg}</span> })
                }}
            </form>
        </section>
    }
}
