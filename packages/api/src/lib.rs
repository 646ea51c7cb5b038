//! # API crate: HTTP binding of [`content::SiteApi`]
//!
//! [`HttpApi`] turns each logical resource operation into one request against
//! `{base_url}/projects`, `/clients`, `/contact` and `/newsletter` using
//! [`reqwest`], which runs on top of `fetch` in the browser build.
//!
//! | Operation | Request body |
//! |-----------|--------------|
//! | list / get / delete | none |
//! | create / update project or client | `multipart/form-data`, optional `image` part |
//! | submit contact | JSON `{ fullName, email, mobileNumber, city }` |
//! | subscribe newsletter | JSON `{ email }` |
//!
//! Non-2xx responses become [`ApiError::Status`], carrying the `message` field of
//! the body when the backend sent one. Transport failures become
//! [`ApiError::Transport`]. Nothing is retried.

use content::backend::{ApiResult, SiteApi, SUBSCRIBE_PATH};
use content::models::{ErrorBody, Single};
use content::{
    ApiConfig, ApiError, Client, ClientDraft, ContactForm, ContactMessage, Envelope,
    ImageUpload, Project, ProjectDraft, Resource, Subscription,
};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// HTTP client for the site backend.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct SubscribeBody<'a> {
    email: &'a str,
}

impl HttpApi {
    /// Create a client for the backend described by `config`.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config.base_url())
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        parse_response(response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        check_status(response).await
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check_status(response).await
    }

    async fn send_multipart(
        &self,
        method: reqwest::Method,
        path: &str,
        fields: Vec<(&'static str, String)>,
        image: Option<&ImageUpload>,
    ) -> ApiResult<()> {
        let form = multipart_form(fields, image)?;
        let response = self
            .client
            .request(method, self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        check_status(response).await
    }
}

/// Build the multipart body: text fields first, then the optional `image` part.
fn multipart_form(
    fields: Vec<(&'static str, String)>,
    image: Option<&ImageUpload>,
) -> ApiResult<Form> {
    let mut form = Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    if let Some(image) = image {
        let mut part = Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
        if let Some(content_type) = &image.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
        }
        form = form.part("image", part);
    }
    Ok(form)
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Map a non-2xx status and its body to an [`ApiError::Status`].
pub fn error_from_body(status: u16, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    ApiError::Status { status, message }
}

async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        let err = error_from_body(status.as_u16(), &body);
        tracing::debug!("{} -> {}", status, err.user_message());
        return Err(err);
    }
    Ok(response)
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let response = ensure_success(response).await?;
    let body = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn check_status(response: reqwest::Response) -> ApiResult<()> {
    ensure_success(response).await?;
    Ok(())
}

impl SiteApi for HttpApi {
    async fn list_projects(&self) -> ApiResult<Envelope<Project>> {
        self.get_json(Resource::Projects.path()).await
    }

    async fn list_clients(&self) -> ApiResult<Envelope<Client>> {
        self.get_json(Resource::Clients.path()).await
    }

    async fn list_contacts(&self) -> ApiResult<Envelope<ContactMessage>> {
        self.get_json(Resource::Contacts.path()).await
    }

    async fn list_subscriptions(&self) -> ApiResult<Envelope<Subscription>> {
        self.get_json(Resource::Subscriptions.path()).await
    }

    async fn get_project(&self, id: &str) -> ApiResult<Project> {
        let single: Single<Project> = self.get_json(&Resource::Projects.item_path(id)).await?;
        Ok(single.data)
    }

    async fn get_client(&self, id: &str) -> ApiResult<Client> {
        let single: Single<Client> = self.get_json(&Resource::Clients.item_path(id)).await?;
        Ok(single.data)
    }

    async fn create_project(
        &self,
        draft: &ProjectDraft,
        image: Option<&ImageUpload>,
    ) -> ApiResult<()> {
        self.send_multipart(
            reqwest::Method::POST,
            Resource::Projects.path(),
            draft.fields(),
            image,
        )
        .await
    }

    async fn create_client(
        &self,
        draft: &ClientDraft,
        image: Option<&ImageUpload>,
    ) -> ApiResult<()> {
        self.send_multipart(
            reqwest::Method::POST,
            Resource::Clients.path(),
            draft.fields(),
            image,
        )
        .await
    }

    async fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
        image: Option<&ImageUpload>,
    ) -> ApiResult<()> {
        self.send_multipart(
            reqwest::Method::PUT,
            &Resource::Projects.item_path(id),
            draft.fields(),
            image,
        )
        .await
    }

    async fn update_client(
        &self,
        id: &str,
        draft: &ClientDraft,
        image: Option<&ImageUpload>,
    ) -> ApiResult<()> {
        self.send_multipart(
            reqwest::Method::PUT,
            &Resource::Clients.item_path(id),
            draft.fields(),
            image,
        )
        .await
    }

    async fn delete_project(&self, id: &str) -> ApiResult<()> {
        self.delete(&Resource::Projects.item_path(id)).await
    }

    async fn delete_client(&self, id: &str) -> ApiResult<()> {
        self.delete(&Resource::Clients.item_path(id)).await
    }

    async fn delete_contact(&self, id: &str) -> ApiResult<()> {
        self.delete(&Resource::Contacts.item_path(id)).await
    }

    async fn delete_subscription(&self, id: &str) -> ApiResult<()> {
        self.delete(&Resource::Subscriptions.item_path(id)).await
    }

    async fn submit_contact(&self, form: &ContactForm) -> ApiResult<()> {
        self.post_json(Resource::Contacts.path(), form).await
    }

    async fn subscribe_newsletter(&self, email: &str) -> ApiResult<()> {
        self.post_json(SUBSCRIBE_PATH, &SubscribeBody { email }).await
    }
}
