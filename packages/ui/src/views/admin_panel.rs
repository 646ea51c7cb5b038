use content::ImageUpload;
use dioxus::prelude::*;

use crate::admin::{
    contact_date, delete_confirmed, load_admin, perform, settle, subscription_date, AdminState,
    AdminTab, DeleteTarget, Mutation,
};
use crate::liveness::use_liveness;
use crate::site::{confirm, make_api, use_site_config};
use crate::status::StatusMessage;

/// First file of a file input, read into memory.
async fn read_image(evt: &FormEvent) -> Option<ImageUpload> {
    let engine = evt.files()?;
    let name = engine.files().into_iter().next()?;
    match engine.read_file(&name).await {
        Some(bytes) => Some(ImageUpload::new(name, bytes)),
        None => {
            tracing::warn!("Could not read selected file {}", name);
            None
        }
    }
}

#[component]
fn DeleteButton(
    target: DeleteTarget,
    on_delete: EventHandler<DeleteTarget>,
    small: bool,
) -> Element {
    let class = if small { "delete-btn-small" } else { "delete-btn" };
    rsx! {
        button {
            class,
            onclick: move |_| on_delete.call(target.clone()),
            "Delete"
        }
    }
}

/// Content management: create and delete projects and clients, review
/// contact submissions and newsletter subscriptions.
#[component]
pub fn AdminPanel(
    /// Target of the "Back to Landing Page" link.
    #[props(default = "/".to_string())]
    home_href: String,
) -> Element {
    let config = use_site_config();
    let alive = use_liveness();
    let mut state = use_signal(AdminState::default);
    let status = use_signal(StatusMessage::default);

    let load_config = config.clone();
    let load_alive = alive.clone();
    use_future(move || {
        let config = load_config.clone();
        let alive = load_alive.clone();
        async move {
            load_admin(&make_api(&config), &alive, state).await;
        }
    });

    let delete_config = config.clone();
    let delete_alive = alive.clone();
    let on_delete = use_callback(move |target: DeleteTarget| {
        let config = delete_config.clone();
        let alive = delete_alive.clone();
        spawn(async move {
            let api = make_api(&config);
            if let Some(outcome) = delete_confirmed(&api, target, confirm).await {
                settle(&api, &alive, outcome, state, status).await;
            }
        });
    });

    let project_config = config.clone();
    let project_alive = alive.clone();
    let on_project_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let config = project_config.clone();
        let alive = project_alive.clone();
        let form = state.read().project_form.clone();
        spawn(async move {
            let api = make_api(&config);
            let outcome = perform(&api, Mutation::CreateProject(form)).await;
            settle(&api, &alive, outcome, state, status).await;
        });
    };

    let client_config = config.clone();
    let client_alive = alive.clone();
    let on_client_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let config = client_config.clone();
        let alive = client_alive.clone();
        let form = state.read().client_form.clone();
        spawn(async move {
            let api = make_api(&config);
            let outcome = perform(&api, Mutation::CreateClient(form)).await;
            settle(&api, &alive, outcome, state, status).await;
        });
    };

    let snapshot = state.read().clone();
    let active = snapshot.tab;
    let message = status.read().text().map(str::to_string);

    rsx! {
        div {
            class: "admin-panel",

            header {
                class: "admin-header",
                div {
                    class: "admin-container",
                    h1 { "Admin Panel" }
                    Link { class: "back-link", to: home_href.clone(), "← Back to Landing Page" }
                }
            }

            if let Some(text) = message {
                div { class: "admin-message", "{text}" }
            }

            div {
                class: "admin-tabs",
                for tab in AdminTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if tab == active { "tab active" } else { "tab" },
                        onclick: move |_| state.write().select_tab(tab),
                        "{tab.label()}"
                    }
                }
            }

            div {
                class: "admin-container",

                {match active {
                    AdminTab::Projects => rsx! {
                        div {
                            class: "tab-content",
                            h2 { "Add New Project" }
                            form {
                                key: "project-form-{snapshot.project_form.revision}",
                                class: "admin-form",
                                onsubmit: on_project_submit,
                                div {
                                    class: "form-group",
                                    label { "Project Name" }
                                    input {
                                        r#type: "text",
                                        required: true,
                                        value: "{snapshot.project_form.name}",
                                        oninput: move |evt: FormEvent| state.write().project_form.name = evt.value(),
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { "Project Description" }
                                    textarea {
                                        rows: "4",
                                        required: true,
                                        value: "{snapshot.project_form.description}",
                                        oninput: move |evt: FormEvent| state.write().project_form.description = evt.value(),
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { "Project Image" }
                                    input {
                                        r#type: "file",
                                        accept: "image/*",
                                        required: true,
                                        onchange: move |evt: FormEvent| async move {
                                            let image = read_image(&evt).await;
                                            state.write().project_form.image = image;
                                        },
                                    }
                                }
                                button { r#type: "submit", class: "submit-btn", "Add Project" }
                            }

                            h2 { class: "list-title", "All Projects" }
                            div {
                                class: "data-grid",
                                for project in snapshot.projects.iter() {
                                    div {
                                        key: "{project.id}",
                                        class: "data-card",
                                        img {
                                            src: config.api.resolve_image(project.image.as_deref().unwrap_or_default()),
                                            alt: "{project.name}",
                                        }
                                        div {
                                            class: "data-card-content",
                                            h3 { "{project.name}" }
                                            p { "{project.description}" }
                                            DeleteButton {
                                                target: DeleteTarget::Project(project.id.clone()),
                                                on_delete,
                                                small: false,
                                            }
                                        }
                                    }
                                }
                            }
                            if snapshot.is_empty(AdminTab::Projects) {
                                p { class: "no-data", {AdminTab::Projects.empty_message()} }
                            }
                        }
                    },
                    AdminTab::Clients => rsx! {
                        div {
                            class: "tab-content",
                            h2 { "Add New Client" }
                            form {
                                key: "client-form-{snapshot.client_form.revision}",
                                class: "admin-form",
                                onsubmit: on_client_submit,
                                div {
                                    class: "form-group",
                                    label { "Client Name" }
                                    input {
                                        r#type: "text",
                                        required: true,
                                        value: "{snapshot.client_form.name}",
                                        oninput: move |evt: FormEvent| state.write().client_form.name = evt.value(),
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { "Client Description (Testimonial)" }
                                    textarea {
                                        rows: "4",
                                        required: true,
                                        value: "{snapshot.client_form.description}",
                                        oninput: move |evt: FormEvent| state.write().client_form.description = evt.value(),
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { "Client Designation" }
                                    input {
                                        r#type: "text",
                                        required: true,
                                        placeholder: "e.g., CEO, Web Developer, Designer",
                                        value: "{snapshot.client_form.designation}",
                                        oninput: move |evt: FormEvent| state.write().client_form.designation = evt.value(),
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { "Client Image" }
                                    input {
                                        r#type: "file",
                                        accept: "image/*",
                                        required: true,
                                        onchange: move |evt: FormEvent| async move {
                                            let image = read_image(&evt).await;
                                            state.write().client_form.image = image;
                                        },
                                    }
                                }
                                button { r#type: "submit", class: "submit-btn", "Add Client" }
                            }

                            h2 { class: "list-title", "All Clients" }
                            div {
                                class: "data-grid",
                                for client in snapshot.clients.iter() {
                                    div {
                                        key: "{client.id}",
                                        class: "data-card",
                                        img {
                                            src: config.api.resolve_image(client.image.as_deref().unwrap_or_default()),
                                            alt: "{client.name}",
                                        }
                                        div {
                                            class: "data-card-content",
                                            h3 { "{client.name}" }
                                            p { class: "designation", "{client.designation}" }
                                            p { "\"{client.description}\"" }
                                            DeleteButton {
                                                target: DeleteTarget::Client(client.id.clone()),
                                                on_delete,
                                                small: false,
                                            }
                                        }
                                    }
                                }
                            }
                            if snapshot.is_empty(AdminTab::Clients) {
                                p { class: "no-data", {AdminTab::Clients.empty_message()} }
                            }
                        }
                    },
                    AdminTab::Contacts => rsx! {
                        div {
                            class: "tab-content",
                            h2 { "Contact Form Submissions" }
                            div {
                                class: "table-container",
                                table {
                                    class: "data-table",
                                    thead {
                                        tr {
                                            th { "Full Name" }
                                            th { "Email" }
                                            th { "Mobile Number" }
                                            th { "City" }
                                            th { "Date" }
                                            th { "Action" }
                                        }
                                    }
                                    tbody {
                                        for contact in snapshot.contacts.iter() {
                                            tr {
                                                key: "{contact.id}",
                                                td { "{contact.full_name}" }
                                                td { "{contact.email}" }
                                                td { "{contact.mobile_number}" }
                                                td { "{contact.city}" }
                                                td { {contact_date(contact)} }
                                                td {
                                                    DeleteButton {
                                                        target: DeleteTarget::Contact(contact.id.clone()),
                                                        on_delete,
                                                        small: true,
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                                if snapshot.is_empty(AdminTab::Contacts) {
                                    p { class: "no-data", {AdminTab::Contacts.empty_message()} }
                                }
                            }
                        }
                    },
                    AdminTab::Newsletters => rsx! {
                        div {
                            class: "tab-content",
                            h2 { "Newsletter Subscriptions" }
                            div {
                                class: "table-container",
                                table {
                                    class: "data-table",
                                    thead {
                                        tr {
                                            th { "Email Address" }
                                            th { "Subscription Date" }
                                            th { "Action" }
                                        }
                                    }
                                    tbody {
                                        for subscription in snapshot.subscriptions.iter() {
                                            tr {
                                                key: "{subscription.id}",
                                                td { "{subscription.email}" }
                                                td { {subscription_date(subscription)} }
                                                td {
                                                    DeleteButton {
                                                        target: DeleteTarget::Subscription(subscription.id.clone()),
                                                        on_delete,
                                                        small: true,
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                                if snapshot.is_empty(AdminTab::Newsletters) {
                                    p { class: "no-data", {AdminTab::Newsletters.empty_message()} }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
