//! # SiteApi: the seam between views and the REST backend
//!
//! Four resource groups, each mapped onto plain HTTP verbs relative to a base URL:
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET | `/projects`, `/clients`, `/contact`, `/newsletter` | `list_*` |
//! | GET | `/projects/:id`, `/clients/:id` | `get_project`, `get_client` |
//! | POST | `/projects`, `/clients` (multipart) | `create_project`, `create_client` |
//! | PUT | `/projects/:id`, `/clients/:id` (multipart) | `update_project`, `update_client` |
//! | DELETE | `/{projects,clients,contact,newsletter}/:id` | `delete_*` |
//! | POST | `/contact` (JSON) | `submit_contact` |
//! | POST | `/newsletter/subscribe` (JSON) | `subscribe_newsletter` |
//!
//! Implementations: `api::HttpApi` for the browser, [`crate::MemoryApi`] for tests.
//! Nothing here retries, times out or cancels; one call is one request.

use std::future::Future;

use crate::error::ApiError;
use crate::models::{
    Client, ClientDraft, ContactForm, ContactMessage, Envelope, ImageUpload, Project,
    ProjectDraft, Subscription,
};

pub type ApiResult<T> = Result<T, ApiError>;

/// Async operations against the site backend.
pub trait SiteApi {
    fn list_projects(&self) -> impl Future<Output = ApiResult<Envelope<Project>>>;
    fn list_clients(&self) -> impl Future<Output = ApiResult<Envelope<Client>>>;
    fn list_contacts(&self) -> impl Future<Output = ApiResult<Envelope<ContactMessage>>>;
    fn list_subscriptions(&self) -> impl Future<Output = ApiResult<Envelope<Subscription>>>;

    fn get_project(&self, id: &str) -> impl Future<Output = ApiResult<Project>>;
    fn get_client(&self, id: &str) -> impl Future<Output = ApiResult<Client>>;

    fn create_project(
        &self,
        draft: &ProjectDraft,
        image: Option<&ImageUpload>,
    ) -> impl Future<Output = ApiResult<()>>;
    fn create_client(
        &self,
        draft: &ClientDraft,
        image: Option<&ImageUpload>,
    ) -> impl Future<Output = ApiResult<()>>;

    fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
        image: Option<&ImageUpload>,
    ) -> impl Future<Output = ApiResult<()>>;
    fn update_client(
        &self,
        id: &str,
        draft: &ClientDraft,
        image: Option<&ImageUpload>,
    ) -> impl Future<Output = ApiResult<()>>;

    fn delete_project(&self, id: &str) -> impl Future<Output = ApiResult<()>>;
    fn delete_client(&self, id: &str) -> impl Future<Output = ApiResult<()>>;
    fn delete_contact(&self, id: &str) -> impl Future<Output = ApiResult<()>>;
    fn delete_subscription(&self, id: &str) -> impl Future<Output = ApiResult<()>>;

    fn submit_contact(&self, form: &ContactForm) -> impl Future<Output = ApiResult<()>>;
    fn subscribe_newsletter(&self, email: &str) -> impl Future<Output = ApiResult<()>>;
}

/// Path of the newsletter subscribe endpoint.
pub const SUBSCRIBE_PATH: &str = "/newsletter/subscribe";
