//! # Public site state
//!
//! [`LandingState`] owns everything the landing page renders except its two
//! status messages, which live in their own cells so each can run its own
//! timer. Network work is split from state changes: `fetch_*` and the
//! [`SiteApi`] calls are awaited without holding state, then the `apply_*` /
//! `finish_*` methods fold the outcome in synchronously.
//!
//! The `load_*` / `send_*` functions run one whole step against a
//! [`StateCell`] and write nothing once the view's [`Liveness`] has ended.
//!
//! | Step | Runs | Folds in with |
//! |------|------|---------------|
//! | mount | [`load_landing`] | [`LandingState::apply_load`] |
//! | render grids | | [`LandingState::project_cards`], [`LandingState::testimonial_cards`] |
//! | contact form | [`send_contact`] | [`LandingState::finish_contact`] |
//! | newsletter form | [`send_newsletter`] | [`LandingState::finish_newsletter`] |

use content::{ApiConfig, ApiError, ApiResult, Client, ContactForm, Project, Resource, SiteApi};

use crate::cell::StateCell;
use crate::fallback::{fallback_projects, fallback_testimonials, ProjectCard, TestimonialCard};
use crate::liveness::Liveness;
use crate::status::{flash, StatusMessage};

pub const CONTACT_SENT: &str = "Thank you! Your message has been sent successfully.";
pub const CONTACT_FAILED: &str = "Error sending message. Please try again.";
pub const NEWSLETTER_SUBSCRIBED: &str = "Successfully subscribed to our newsletter!";
pub const NEWSLETTER_FAILED: &str = "Error subscribing. Please try again.";

#[derive(Clone, Debug, PartialEq)]
pub struct LandingState {
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    pub contact_form: ContactForm,
    pub newsletter_email: String,
    pub loading: bool,
}

impl Default for LandingState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            clients: Vec::new(),
            contact_form: ContactForm::default(),
            newsletter_email: String::new(),
            loading: true,
        }
    }
}

/// Both list requests of the landing page, each settled on its own.
#[derive(Debug)]
pub struct LandingLoad {
    pub projects: ApiResult<Vec<Project>>,
    pub clients: ApiResult<Vec<Client>>,
}

/// Fetch projects and clients concurrently.
pub async fn fetch_landing<A: SiteApi>(api: &A) -> LandingLoad {
    let (projects, clients) = futures::join!(api.list_projects(), api.list_clients());
    LandingLoad {
        projects: projects.map(|env| env.data),
        clients: clients.map(|env| env.data),
    }
}

/// Fetch both lists and apply them, unless the view ended meanwhile.
///
/// Returns the resources that failed, or `None` when the result was dropped.
pub async fn load_landing<A: SiteApi>(
    api: &A,
    alive: &Liveness,
    mut state: impl StateCell<LandingState>,
) -> Option<Vec<Resource>> {
    let load = alive.keep(fetch_landing(api).await)?;
    Some(state.update(|landing| landing.apply_load(load)))
}

/// Post the contact form as it is now and flash the outcome.
pub async fn send_contact<A: SiteApi>(
    api: &A,
    alive: &Liveness,
    mut state: impl StateCell<LandingState>,
    status: impl StateCell<StatusMessage>,
) {
    let form = state.update(|landing| landing.contact_form.clone());
    let result = api.submit_contact(&form).await;
    if !alive.is_alive() {
        return;
    }
    let message = state.update(|landing| landing.finish_contact(&result));
    flash(status, message).await;
}

/// Subscribe the entered email and flash the outcome.
pub async fn send_newsletter<A: SiteApi>(
    api: &A,
    alive: &Liveness,
    mut state: impl StateCell<LandingState>,
    status: impl StateCell<StatusMessage>,
) {
    let email = state.update(|landing| landing.newsletter_email.clone());
    let result = api.subscribe_newsletter(&email).await;
    if !alive.is_alive() {
        return;
    }
    let message = state.update(|landing| landing.finish_newsletter(&result));
    flash(status, message).await;
}

impl LandingState {
    /// Apply whatever loaded and stop showing the loading screen.
    ///
    /// A failed list keeps its previous contents. Returns the failed resources.
    pub fn apply_load(&mut self, load: LandingLoad) -> Vec<Resource> {
        let mut failed = Vec::new();
        match load.projects {
            Ok(projects) => self.projects = projects,
            Err(e) => {
                tracing::warn!("Failed to load projects: {}", e);
                failed.push(Resource::Projects);
            }
        }
        match load.clients {
            Ok(clients) => self.clients = clients,
            Err(e) => {
                tracing::warn!("Failed to load clients: {}", e);
                failed.push(Resource::Clients);
            }
        }
        self.loading = false;
        failed
    }

    /// Fetched projects, or the placeholder set when there are none.
    pub fn project_cards(&self, config: &ApiConfig) -> Vec<ProjectCard> {
        if self.projects.is_empty() {
            return fallback_projects();
        }
        self.projects
            .iter()
            .map(|p| ProjectCard {
                key: p.id.clone(),
                name: p.name.clone(),
                description: p.description.clone(),
                image_url: config.resolve_image(p.image.as_deref().unwrap_or_default()),
            })
            .collect()
    }

    /// Fetched testimonials, or the placeholder set when there are none.
    pub fn testimonial_cards(&self, config: &ApiConfig) -> Vec<TestimonialCard> {
        if self.clients.is_empty() {
            return fallback_testimonials();
        }
        self.clients
            .iter()
            .map(|c| TestimonialCard {
                key: c.id.clone(),
                name: c.name.clone(),
                designation: c.designation.clone(),
                quote: c.description.clone(),
                image_url: config.resolve_image(c.image.as_deref().unwrap_or_default()),
            })
            .collect()
    }

    /// Fold in the contact POST outcome; clears the form on success.
    pub fn finish_contact(&mut self, result: &Result<(), ApiError>) -> String {
        match result {
            Ok(()) => {
                self.contact_form = ContactForm::default();
                CONTACT_SENT.to_string()
            }
            Err(e) => {
                tracing::error!("Contact submission failed: {}", e);
                CONTACT_FAILED.to_string()
            }
        }
    }

    /// Fold in the subscribe POST outcome; clears the email on success.
    pub fn finish_newsletter(&mut self, result: &Result<(), ApiError>) -> String {
        match result {
            Ok(()) => {
                self.newsletter_email.clear();
                NEWSLETTER_SUBSCRIBED.to_string()
            }
            Err(e) => {
                tracing::error!("Newsletter subscription failed: {}", e);
                e.server_message().unwrap_or(NEWSLETTER_FAILED).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use content::{MemoryApi, Method, RecordedRequest};

    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            mobile_number: "555-0100".into(),
            city: "London".into(),
        }
    }

    #[tokio::test]
    async fn empty_backend_shows_placeholders() {
        let api = MemoryApi::new();
        let mut state = LandingState::default();
        assert!(state.loading);

        let failed = state.apply_load(fetch_landing(&api).await);
        assert!(failed.is_empty());
        assert!(!state.loading);

        let config = ApiConfig::default();
        let projects = state.project_cards(&config);
        assert_eq!(projects.len(), 6);
        assert_eq!(projects[0].name, "Luxury Villa Project");
        assert!(projects[0].image_url.contains("estate1"));

        let testimonials = state.testimonial_cards(&config);
        assert_eq!(testimonials.len(), 6);
        assert_eq!(testimonials[5].name, "Client 6");
        assert_eq!(testimonials[5].designation, "Business Owner");
    }

    #[tokio::test]
    async fn fetched_content_replaces_placeholders() {
        let api = MemoryApi::new().with_projects(vec![Project {
            id: "p1".into(),
            name: "Harbour Lofts".into(),
            description: "Lofts".into(),
            image: Some("/uploads/lofts.png".into()),
        }]);
        let mut state = LandingState::default();
        state.apply_load(fetch_landing(&api).await);

        let cards = state.project_cards(&ApiConfig::default());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].key, "p1");
        assert_eq!(cards[0].image_url, "http://localhost:5000/uploads/lofts.png");
        // clients are still empty, so their placeholders stay
        assert_eq!(state.testimonial_cards(&ApiConfig::default()).len(), 6);
    }

    #[tokio::test]
    async fn one_failed_list_does_not_blank_the_other() {
        let api = MemoryApi::new().with_clients(vec![Client {
            id: "c1".into(),
            name: "Grace".into(),
            description: "Superb".into(),
            designation: "CTO".into(),
            image: None,
        }]);
        api.fail(Method::Get, "/projects", ApiError::Transport("offline".into()));

        let mut state = LandingState::default();
        let failed = state.apply_load(fetch_landing(&api).await);

        assert_eq!(failed, vec![Resource::Projects]);
        assert_eq!(state.clients.len(), 1);
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn contact_submit_posts_once_and_clears() {
        let api = MemoryApi::new();
        let alive = Liveness::new();
        let state = Arc::new(Mutex::new(LandingState {
            contact_form: filled_form(),
            ..LandingState::default()
        }));
        let status = Arc::new(Mutex::new(StatusMessage::default()));

        tokio::join!(
            send_contact(&api, &alive, state.clone(), status.clone()),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                assert_eq!(
                    api.requests(),
                    vec![RecordedRequest::new(Method::Post, "/contact")]
                );
                let stored = api.contacts();
                assert_eq!(stored[0].full_name, "Ada Lovelace");
                assert_eq!(stored[0].mobile_number, "555-0100");
                assert_eq!(state.lock().unwrap().contact_form, ContactForm::default());
                assert_eq!(status.lock().unwrap().text(), Some(CONTACT_SENT));
            }
        );
        // send_contact only returns once the message has expired
        assert_eq!(status.lock().unwrap().text(), None);
    }

    #[tokio::test]
    async fn load_finishing_after_unmount_is_dropped() {
        let api = MemoryApi::new().with_projects(vec![Project {
            id: "p1".into(),
            name: "Harbour Lofts".into(),
            description: "Lofts".into(),
            image: None,
        }]);
        let alive = Liveness::new();
        let token = alive.clone();
        api.on_request(move |_| token.end());
        let state = Arc::new(Mutex::new(LandingState::default()));

        let applied = load_landing(&api, &alive, state.clone()).await;

        assert_eq!(applied, None);
        assert_eq!(api.count(Method::Get), 2);
        assert_eq!(*state.lock().unwrap(), LandingState::default());
    }

    #[tokio::test]
    async fn load_while_mounted_is_applied() {
        let api = MemoryApi::new();
        let state = Arc::new(Mutex::new(LandingState::default()));

        let failed = load_landing(&api, &Liveness::new(), state.clone()).await;

        assert_eq!(failed, Some(Vec::new()));
        assert!(!state.lock().unwrap().loading);
    }

    #[tokio::test]
    async fn contact_reply_after_unmount_leaves_form_and_status() {
        let api = MemoryApi::new();
        let alive = Liveness::new();
        let token = alive.clone();
        api.on_request(move |_| token.end());
        let state = Arc::new(Mutex::new(LandingState {
            contact_form: filled_form(),
            ..LandingState::default()
        }));
        let status = Arc::new(Mutex::new(StatusMessage::default()));

        send_contact(&api, &alive, state.clone(), status.clone()).await;

        assert_eq!(api.contacts().len(), 1);
        assert_eq!(state.lock().unwrap().contact_form, filled_form());
        assert_eq!(status.lock().unwrap().text(), None);
    }

    #[tokio::test]
    async fn contact_failure_keeps_form() {
        let api = MemoryApi::new();
        api.fail(
            Method::Post,
            "/contact",
            ApiError::Status {
                status: 500,
                message: None,
            },
        );
        let mut state = LandingState {
            contact_form: filled_form(),
            ..LandingState::default()
        };

        let result = api.submit_contact(&state.contact_form.clone()).await;
        assert_eq!(state.finish_contact(&result), CONTACT_FAILED);
        assert_eq!(state.contact_form, filled_form());
    }

    #[tokio::test]
    async fn newsletter_surfaces_backend_message() {
        let api = MemoryApi::new();
        api.fail(
            Method::Post,
            "/newsletter/subscribe",
            ApiError::status(409, "Already subscribed"),
        );
        let mut state = LandingState {
            newsletter_email: "reader@example.com".into(),
            ..LandingState::default()
        };

        let result = api.subscribe_newsletter(&state.newsletter_email.clone()).await;
        assert_eq!(state.finish_newsletter(&result), "Already subscribed");
        assert_eq!(state.newsletter_email, "reader@example.com");
    }

    #[tokio::test]
    async fn newsletter_without_message_uses_fallback() {
        let api = MemoryApi::new();
        api.fail(
            Method::Post,
            "/newsletter/subscribe",
            ApiError::Status {
                status: 409,
                message: None,
            },
        );
        let mut state = LandingState::default();

        let result = api.subscribe_newsletter("reader@example.com").await;
        assert_eq!(state.finish_newsletter(&result), NEWSLETTER_FAILED);
    }

    #[tokio::test]
    async fn newsletter_success_clears_email() {
        let api = MemoryApi::new();
        let mut state = LandingState {
            newsletter_email: "reader@example.com".into(),
            ..LandingState::default()
        };

        let result = api.subscribe_newsletter(&state.newsletter_email.clone()).await;
        assert_eq!(state.finish_newsletter(&result), NEWSLETTER_SUBSCRIBED);
        assert!(state.newsletter_email.is_empty());
        assert_eq!(api.subscriptions().len(), 1);
    }
}
