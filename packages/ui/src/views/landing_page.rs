use dioxus::prelude::*;

use crate::landing::{load_landing, send_contact, send_newsletter, LandingState};
use crate::liveness::use_liveness;
use crate::site::{make_api, use_site_config};
use crate::status::StatusMessage;

/// Public landing page: hero, projects, testimonials, contact and newsletter forms.
#[component]
pub fn LandingPage(
    /// Target of the "Admin Panel" navigation link.
    #[props(default = "/admin".to_string())]
    admin_href: String,
) -> Element {
    let config = use_site_config();
    let alive = use_liveness();
    let mut state = use_signal(LandingState::default);
    let contact_status = use_signal(StatusMessage::default);
    let newsletter_status = use_signal(StatusMessage::default);

    let load_config = config.clone();
    let load_alive = alive.clone();
    use_future(move || {
        let config = load_config.clone();
        let alive = load_alive.clone();
        async move {
            let failed = load_landing(&make_api(&config), &alive, state).await;
            if failed.is_some_and(|failed| failed.is_empty()) {
                tracing::info!("Landing content loaded");
            }
        }
    });

    let contact_config = config.clone();
    let contact_alive = alive.clone();
    let on_contact = move |evt: FormEvent| {
        evt.prevent_default();
        let config = contact_config.clone();
        let alive = contact_alive.clone();
        spawn(async move {
            send_contact(&make_api(&config), &alive, state, contact_status).await;
        });
    };

    let newsletter_config = config.clone();
    let newsletter_alive = alive.clone();
    let on_newsletter = move |evt: FormEvent| {
        evt.prevent_default();
        let config = newsletter_config.clone();
        let alive = newsletter_alive.clone();
        spawn(async move {
            send_newsletter(&make_api(&config), &alive, state, newsletter_status).await;
        });
    };

    if state.read().loading {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }

    let projects = state.read().project_cards(&config.api);
    let testimonials = state.read().testimonial_cards(&config.api);
    let form = state.read().contact_form.clone();
    let newsletter_email = state.read().newsletter_email.clone();
    let contact_message = contact_status.read().text().map(str::to_string);
    let newsletter_message = newsletter_status.read().text().map(str::to_string);

    rsx! {
        div {
            class: "landing-page",

            header {
                class: "header",
                div {
                    class: "container",
                    nav {
                        class: "navbar",
                        div { class: "logo", h1 { "Company Name" } }
                        ul {
                            class: "nav-links",
                            li { a { href: "#home", "Home" } }
                            li { a { href: "#projects", "Projects" } }
                            li { a { href: "#clients", "Clients" } }
                            li { a { href: "#contact", "Contact" } }
                            li {
                                Link { class: "admin-link", to: admin_href.clone(), "Admin Panel" }
                            }
                        }
                    }
                }
            }

            section {
                id: "home",
                class: "hero",
                div {
                    class: "container",
                    div {
                        class: "hero-content",
                        h1 { class: "hero-title", "Welcome to Our Company" }
                        p { class: "hero-subtitle", "Building Amazing Digital Solutions" }
                        a { class: "cta-button", href: "#contact", "Get Started" }
                    }
                }
            }

            section {
                id: "projects",
                class: "projects-section",
                div {
                    class: "container",
                    h2 { class: "section-title", "Our Projects" }
                    div {
                        class: "projects-grid",
                        for card in projects {
                            div {
                                key: "{card.key}",
                                class: "project-card",
                                div {
                                    class: "project-image",
                                    img { src: "{card.image_url}", alt: "{card.name}" }
                                }
                                div {
                                    class: "project-content",
                                    h3 { "{card.name}" }
                                    p { "{card.description}" }
                                    button { class: "read-more-btn", "Read More" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                id: "clients",
                class: "clients-section",
                div {
                    class: "container",
                    h2 { class: "section-title", "Happy Clients" }
                    div {
                        class: "clients-grid",
                        for card in testimonials {
                            div {
                                key: "{card.key}",
                                class: "client-card",
                                div {
                                    class: "client-image",
                                    img { src: "{card.image_url}", alt: "{card.name}" }
                                }
                                div {
                                    class: "client-content",
                                    p { class: "client-description", "\"{card.quote}\"" }
                                    h4 { class: "client-name", "{card.name}" }
                                    p { class: "client-designation", "{card.designation}" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                id: "contact",
                class: "contact-section",
                div {
                    class: "container",
                    h2 { class: "section-title", "Get In Touch" }
                    form {
                        class: "contact-form",
                        onsubmit: on_contact,
                        div {
                            class: "form-row",
                            div {
                                class: "form-group",
                                input {
                                    r#type: "text",
                                    placeholder: "Full Name",
                                    required: true,
                                    value: "{form.full_name}",
                                    oninput: move |evt: FormEvent| state.write().contact_form.full_name = evt.value(),
                                }
                            }
                            div {
                                class: "form-group",
                                input {
                                    r#type: "email",
                                    placeholder: "Email Address",
                                    required: true,
                                    value: "{form.email}",
                                    oninput: move |evt: FormEvent| state.write().contact_form.email = evt.value(),
                                }
                            }
                        }
                        div {
                            class: "form-row",
                            div {
                                class: "form-group",
                                input {
                                    r#type: "tel",
                                    placeholder: "Mobile Number",
                                    required: true,
                                    value: "{form.mobile_number}",
                                    oninput: move |evt: FormEvent| state.write().contact_form.mobile_number = evt.value(),
                                }
                            }
                            div {
                                class: "form-group",
                                input {
                                    r#type: "text",
                                    placeholder: "City",
                                    required: true,
                                    value: "{form.city}",
                                    oninput: move |evt: FormEvent| state.write().contact_form.city = evt.value(),
                                }
                            }
                        }
                        button { r#type: "submit", class: "submit-btn", "Submit" }
                        if let Some(text) = contact_message {
                            p { class: "message", "{text}" }
                        }
                    }
                }
            }

            section {
                class: "newsletter-section",
                div {
                    class: "container",
                    h2 { class: "section-title", "Subscribe to Our Newsletter" }
                    p { class: "newsletter-text", "Stay updated with our latest news and offers" }
                    form {
                        class: "newsletter-form",
                        onsubmit: on_newsletter,
                        input {
                            r#type: "email",
                            placeholder: "Enter your email address",
                            required: true,
                            value: "{newsletter_email}",
                            oninput: move |evt: FormEvent| state.write().newsletter_email = evt.value(),
                        }
                        button { r#type: "submit", class: "subscribe-btn", "Subscribe" }
                    }
                    if let Some(text) = newsletter_message {
                        p { class: "message", "{text}" }
                    }
                }
            }

            footer {
                class: "footer",
                div {
                    class: "container",
                    p { "© 2025 Company Name. All rights reserved." }
                }
            }
        }
    }
}
