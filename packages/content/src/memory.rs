use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::backend::{ApiResult, SiteApi, SUBSCRIBE_PATH};
use crate::error::ApiError;
use crate::models::{
    Client, ClientDraft, ContactForm, ContactMessage, Envelope, ImageUpload, Project,
    ProjectDraft, Resource, Subscription,
};

/// HTTP verb of a recorded request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One call made against a [`MemoryApi`], as the equivalent HTTP request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
}

impl RecordedRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

/// Callback run as each request arrives, before it is answered.
#[derive(Clone)]
struct RequestHook(Arc<dyn Fn(&RecordedRequest) + Send + Sync>);

impl fmt::Debug for RequestHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RequestHook")
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    projects: Vec<Project>,
    clients: Vec<Client>,
    contacts: Vec<ContactMessage>,
    subscriptions: Vec<Subscription>,
    next_id: u64,
    requests: Vec<RecordedRequest>,
    failures: HashMap<(Method, String), ApiError>,
    on_request: Option<RequestHook>,
}

impl MemoryState {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("mem-{}", self.next_id)
    }
}

/// In-memory [`SiteApi`] for tests and local previews.
///
/// Behaves like the real backend for the operations the views use, records every
/// request, and can be told to fail a given method + path.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(self, projects: Vec<Project>) -> Self {
        self.lock().projects = projects;
        self
    }

    pub fn with_clients(self, clients: Vec<Client>) -> Self {
        self.lock().clients = clients;
        self
    }

    pub fn with_contacts(self, contacts: Vec<ContactMessage>) -> Self {
        self.lock().contacts = contacts;
        self
    }

    pub fn with_subscriptions(self, subscriptions: Vec<Subscription>) -> Self {
        self.lock().subscriptions = subscriptions;
        self
    }

    /// Make every request matching `method` + `path` fail with `error`.
    pub fn fail(&self, method: Method, path: impl Into<String>, error: ApiError) {
        self.lock().failures.insert((method, path.into()), error);
    }

    /// Undo a previous [`fail`](Self::fail).
    pub fn recover(&self, method: Method, path: &str) {
        self.lock().failures.remove(&(method, path.to_string()));
    }

    /// Run `hook` on every later request, while that request is still in flight.
    pub fn on_request(&self, hook: impl Fn(&RecordedRequest) + Send + Sync + 'static) {
        self.lock().on_request = Some(RequestHook(Arc::new(hook)));
    }

    /// Every request made so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Number of recorded requests using `method`.
    pub fn count(&self, method: Method) -> usize {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.method == method)
            .count()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    pub fn projects(&self) -> Vec<Project> {
        self.lock().projects.clone()
    }

    pub fn clients(&self) -> Vec<Client> {
        self.lock().clients.clone()
    }

    pub fn contacts(&self) -> Vec<ContactMessage> {
        self.lock().contacts.clone()
    }

    pub fn subscriptions(&self) -> Vec<Subscription> {
        self.lock().subscriptions.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the request, run the hook, and apply any injected failure.
    fn begin(&self, method: Method, path: String) -> ApiResult<MutexGuard<'_, MemoryState>> {
        let (hook, failure) = {
            let mut state = self.lock();
            let failure = state.failures.get(&(method, path.clone())).cloned();
            state.requests.push(RecordedRequest::new(method, path.clone()));
            (state.on_request.clone(), failure)
        };
        if let Some(RequestHook(hook)) = hook {
            hook(&RecordedRequest::new(method, path));
        }
        match failure {
            Some(error) => Err(error),
            None => Ok(self.lock()),
        }
    }
}

fn uploaded_path(image: Option<&ImageUpload>) -> Option<String> {
    image.map(|img| format!("/uploads/{}", img.file_name))
}

fn remove_by_id<T>(
    items: &mut Vec<T>,
    id: &str,
    key: impl Fn(&T) -> &str,
    what: &str,
) -> ApiResult<()> {
    let before = items.len();
    items.retain(|item| key(item) != id);
    if items.len() == before {
        return Err(ApiError::not_found(what));
    }
    Ok(())
}

impl SiteApi for MemoryApi {
    async fn list_projects(&self) -> ApiResult<Envelope<Project>> {
        let state = self.begin(Method::Get, Resource::Projects.path().to_string())?;
        Ok(Envelope::new(state.projects.clone()))
    }

    async fn list_clients(&self) -> ApiResult<Envelope<Client>> {
        let state = self.begin(Method::Get, Resource::Clients.path().to_string())?;
        Ok(Envelope::new(state.clients.clone()))
    }

    async fn list_contacts(&self) -> ApiResult<Envelope<ContactMessage>> {
        let state = self.begin(Method::Get, Resource::Contacts.path().to_string())?;
        Ok(Envelope::new(state.contacts.clone()))
    }

    async fn list_subscriptions(&self) -> ApiResult<Envelope<Subscription>> {
        let state = self.begin(Method::Get, Resource::Subscriptions.path().to_string())?;
        Ok(Envelope::new(state.subscriptions.clone()))
    }

    async fn get_project(&self, id: &str) -> ApiResult<Project> {
        let state = self.begin(Method::Get, Resource::Projects.item_path(id))?;
        state
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Project"))
    }

    async fn get_client(&self, id: &str) -> ApiResult<Client> {
        let state = self.begin(Method::Get, Resource::Clients.item_path(id))?;
        state
            .clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Client"))
    }

    async fn create_project(
        &self,
        draft: &ProjectDraft,
        image: Option<&ImageUpload>,
    ) -> ApiResult<()> {
        let mut state = self.begin(Method::Post, Resource::Projects.path().to_string())?;
        let id = state.next_id();
        state.projects.push(Project {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            image: uploaded_path(image),
        });
        Ok(())
    }

    async fn create_client(
        &self,
        draft: &ClientDraft,
        image: Option<&ImageUpload>,
    ) -> ApiResult<()> {
        let mut state = self.begin(Method::Post, Resource::Clients.path().to_string())?;
        let id = state.next_id();
        state.clients.push(Client {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            designation: draft.designation.clone(),
            image: uploaded_path(image),
        });
        Ok(())
    }

    async fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
        image: Option<&ImageUpload>,
    ) -> ApiResult<()> {
        let mut state = self.begin(Method::Put, Resource::Projects.item_path(id))?;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::not_found("Project"))?;
        project.name = draft.name.clone();
        project.description = draft.description.clone();
        if let Some(path) = uploaded_path(image) {
            project.image = Some(path);
        }
        Ok(())
    }

    async fn update_client(
        &self,
        id: &str,
        draft: &ClientDraft,
        image: Option<&ImageUpload>,
    ) -> ApiResult<()> {
        let mut state = self.begin(Method::Put, Resource::Clients.item_path(id))?;
        let client = state
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::not_found("Client"))?;
        client.name = draft.name.clone();
        client.description = draft.description.clone();
        client.designation = draft.designation.clone();
        if let Some(path) = uploaded_path(image) {
            client.image = Some(path);
        }
        Ok(())
    }

    async fn delete_project(&self, id: &str) -> ApiResult<()> {
        let mut state = self.begin(Method::Delete, Resource::Projects.item_path(id))?;
        remove_by_id(&mut state.projects, id, |p| p.id.as_str(), "Project")
    }

    async fn delete_client(&self, id: &str) -> ApiResult<()> {
        let mut state = self.begin(Method::Delete, Resource::Clients.item_path(id))?;
        remove_by_id(&mut state.clients, id, |c| c.id.as_str(), "Client")
    }

    async fn delete_contact(&self, id: &str) -> ApiResult<()> {
        let mut state = self.begin(Method::Delete, Resource::Contacts.item_path(id))?;
        remove_by_id(&mut state.contacts, id, |c| c.id.as_str(), "Contact")
    }

    async fn delete_subscription(&self, id: &str) -> ApiResult<()> {
        let mut state = self.begin(Method::Delete, Resource::Subscriptions.item_path(id))?;
        remove_by_id(&mut state.subscriptions, id, |s| s.id.as_str(), "Subscription")
    }

    async fn submit_contact(&self, form: &ContactForm) -> ApiResult<()> {
        let mut state = self.begin(Method::Post, Resource::Contacts.path().to_string())?;
        let id = state.next_id();
        state.contacts.push(ContactMessage {
            id,
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            mobile_number: form.mobile_number.clone(),
            city: form.city.clone(),
            created_at: Some(Utc::now()),
        });
        Ok(())
    }

    async fn subscribe_newsletter(&self, email: &str) -> ApiResult<()> {
        let mut state = self.begin(Method::Post, SUBSCRIBE_PATH.to_string())?;
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::status(400, "Please provide a valid email"));
        }
        if state.subscriptions.iter().any(|s| s.email == email) {
            return Err(ApiError::status(409, "Already subscribed"));
        }
        let id = state.next_id();
        state.subscriptions.push(Subscription {
            id,
            email,
            created_at: Some(Utc::now()),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {id}"),
            description: String::new(),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_project() {
        let api = MemoryApi::new();
        assert!(api.list_projects().await.unwrap().data.is_empty());

        let draft = ProjectDraft {
            name: "Villa".into(),
            description: "Sea view".into(),
        };
        let image = ImageUpload::new("villa.png", vec![1, 2, 3]);
        api.create_project(&draft, Some(&image)).await.unwrap();

        let projects = api.list_projects().await.unwrap().data;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Villa");
        assert_eq!(projects[0].image.as_deref(), Some("/uploads/villa.png"));
        assert_eq!(
            api.requests(),
            vec![
                RecordedRequest::new(Method::Get, "/projects"),
                RecordedRequest::new(Method::Post, "/projects"),
                RecordedRequest::new(Method::Get, "/projects"),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_records_item_path() {
        let api = MemoryApi::new().with_projects(vec![project("1"), project("2")]);
        api.delete_project("1").await.unwrap();
        assert_eq!(api.projects().len(), 1);
        assert_eq!(
            api.requests(),
            vec![RecordedRequest::new(Method::Delete, "/projects/1")]
        );

        let err = api.delete_project("1").await.unwrap_err();
        assert_eq!(err.server_message(), Some("Project not found"));
    }

    #[tokio::test]
    async fn test_update_keeps_image_without_upload() {
        let mut existing = project("1");
        existing.image = Some("/uploads/old.png".into());
        let api = MemoryApi::new().with_projects(vec![existing]);

        let draft = ProjectDraft {
            name: "Renamed".into(),
            description: "New".into(),
        };
        api.update_project("1", &draft, None).await.unwrap();

        let updated = api.get_project("1").await.unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.image.as_deref(), Some("/uploads/old.png"));
    }

    #[tokio::test]
    async fn test_duplicate_subscription_rejected() {
        let api = MemoryApi::new();
        api.subscribe_newsletter("Reader@Example.com").await.unwrap();

        let err = api.subscribe_newsletter("reader@example.com").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 409,
                message: Some("Already subscribed".into()),
            }
        );
        assert_eq!(api.subscriptions().len(), 1);
        assert_eq!(api.count(Method::Post), 2);
    }

    #[tokio::test]
    async fn test_injected_failure_is_recorded_and_recoverable() {
        let api = MemoryApi::new();
        api.fail(
            Method::Get,
            "/clients",
            ApiError::Transport("offline".into()),
        );

        assert!(api.list_clients().await.is_err());
        assert!(api.list_projects().await.is_ok());
        assert_eq!(api.count(Method::Get), 2);

        api.recover(Method::Get, "/clients");
        assert!(api.list_clients().await.is_ok());
    }

    #[tokio::test]
    async fn test_hook_sees_each_request_in_flight() {
        let api = MemoryApi::new().with_projects(vec![project("1")]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let inner = api.clone();
        api.on_request(move |request| {
            // The request is already recorded, but its effect is not applied yet.
            log.lock().unwrap().push((request.clone(), inner.projects().len()));
        });

        api.delete_project("1").await.unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(RecordedRequest::new(Method::Delete, "/projects/1"), 1)]
        );
        assert!(api.projects().is_empty());
    }

    #[tokio::test]
    async fn test_submit_contact_stamps_time() {
        let api = MemoryApi::new();
        let form = ContactForm {
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            mobile_number: "555".into(),
            city: "London".into(),
        };
        api.submit_contact(&form).await.unwrap();

        let contacts = api.list_contacts().await.unwrap().data;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].city, "London");
        assert!(contacts[0].created_at.is_some());
    }
}
