//! # Admin console state
//!
//! [`AdminState`] holds the active tab, all four collections and the two create
//! forms. Every mutation goes through [`perform`], which only sends the write.
//! [`settle`] then folds the [`MutationOutcome`] in with
//! [`AdminState::apply_outcome`], shows the status text, and only after that
//! re-fetches all four collections when the write succeeded.
//!
//! Deletes are gated by [`delete_confirmed`]: the caller supplies the yes/no
//! prompt, and a "no" sends nothing.

use content::{
    ApiError, ApiResult, Client, ClientDraft, ContactMessage, ImageUpload, Project, ProjectDraft,
    Resource, SiteApi, Subscription,
};

use crate::cell::StateCell;
use crate::liveness::Liveness;
use crate::status::{flash, StatusMessage};

/// The four mutually exclusive admin screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Projects,
    Clients,
    Contacts,
    Newsletters,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Projects,
        AdminTab::Clients,
        AdminTab::Contacts,
        AdminTab::Newsletters,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Projects => "Projects",
            AdminTab::Clients => "Clients",
            AdminTab::Contacts => "Contact Forms",
            AdminTab::Newsletters => "Newsletter Subscriptions",
        }
    }

    /// Shown in place of the list when it has no rows.
    pub fn empty_message(self) -> &'static str {
        match self {
            AdminTab::Projects => "No projects yet.",
            AdminTab::Clients => "No clients yet.",
            AdminTab::Contacts => "No contact submissions yet.",
            AdminTab::Newsletters => "No newsletter subscriptions yet.",
        }
    }
}

/// "Add New Project" form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub image: Option<ImageUpload>,
    /// Bumped on every reset so the file input can be re-created empty.
    pub revision: u32,
}

impl ProjectForm {
    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn reset(&mut self) {
        *self = Self {
            revision: self.revision.wrapping_add(1),
            ..Self::default()
        };
    }
}

/// "Add New Client" form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientForm {
    pub name: String,
    pub description: String,
    pub designation: String,
    pub image: Option<ImageUpload>,
    pub revision: u32,
}

impl ClientForm {
    pub fn draft(&self) -> ClientDraft {
        ClientDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            designation: self.designation.clone(),
        }
    }

    fn reset(&mut self) {
        *self = Self {
            revision: self.revision.wrapping_add(1),
            ..Self::default()
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub tab: AdminTab,
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    pub contacts: Vec<ContactMessage>,
    pub subscriptions: Vec<Subscription>,
    pub project_form: ProjectForm,
    pub client_form: ClientForm,
}

/// All four list requests, each settled on its own.
#[derive(Debug)]
pub struct AdminLoad {
    pub projects: ApiResult<Vec<Project>>,
    pub clients: ApiResult<Vec<Client>>,
    pub contacts: ApiResult<Vec<ContactMessage>>,
    pub subscriptions: ApiResult<Vec<Subscription>>,
}

/// Fetch every collection concurrently.
pub async fn fetch_admin<A: SiteApi>(api: &A) -> AdminLoad {
    let (projects, clients, contacts, subscriptions) = futures::join!(
        api.list_projects(),
        api.list_clients(),
        api.list_contacts(),
        api.list_subscriptions()
    );
    AdminLoad {
        projects: projects.map(|env| env.data),
        clients: clients.map(|env| env.data),
        contacts: contacts.map(|env| env.data),
        subscriptions: subscriptions.map(|env| env.data),
    }
}

/// A record the admin asked to delete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    Project(String),
    Client(String),
    Contact(String),
    Subscription(String),
}

impl DeleteTarget {
    pub fn resource(&self) -> Resource {
        match self {
            DeleteTarget::Project(_) => Resource::Projects,
            DeleteTarget::Client(_) => Resource::Clients,
            DeleteTarget::Contact(_) => Resource::Contacts,
            DeleteTarget::Subscription(_) => Resource::Subscriptions,
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            DeleteTarget::Project(_) => "project",
            DeleteTarget::Client(_) => "client",
            DeleteTarget::Contact(_) => "contact",
            DeleteTarget::Subscription(_) => "subscription",
        }
    }

    pub fn confirm_prompt(&self) -> String {
        format!("Are you sure you want to delete this {}?", self.noun())
    }

    async fn send<A: SiteApi>(&self, api: &A) -> ApiResult<()> {
        match self {
            DeleteTarget::Project(id) => api.delete_project(id).await,
            DeleteTarget::Client(id) => api.delete_client(id).await,
            DeleteTarget::Contact(id) => api.delete_contact(id).await,
            DeleteTarget::Subscription(id) => api.delete_subscription(id).await,
        }
    }
}

/// A write the admin can trigger.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    CreateProject(ProjectForm),
    CreateClient(ClientForm),
    Delete(DeleteTarget),
}

impl Mutation {
    fn message(&self, result: &Result<(), ApiError>) -> String {
        match (self, result) {
            (Mutation::CreateProject(_), Ok(())) => "Project added successfully!".to_string(),
            (Mutation::CreateProject(_), Err(e)) => {
                format!("Error adding project: {}", e.user_message())
            }
            (Mutation::CreateClient(_), Ok(())) => "Client added successfully!".to_string(),
            (Mutation::CreateClient(_), Err(e)) => {
                format!("Error adding client: {}", e.user_message())
            }
            (Mutation::Delete(target), Ok(())) => {
                let noun = target.noun();
                let mut chars = noun.chars();
                let capitalised = match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                };
                format!("{capitalised} deleted successfully!")
            }
            (Mutation::Delete(target), Err(_)) => format!("Error deleting {}", target.noun()),
        }
    }
}

/// What a mutation did, ready to be applied to [`AdminState`].
#[derive(Debug)]
pub struct MutationOutcome {
    pub mutation: Mutation,
    pub result: Result<(), ApiError>,
}

/// Send `mutation` and report how it went.
pub async fn perform<A: SiteApi>(api: &A, mutation: Mutation) -> MutationOutcome {
    let result = match &mutation {
        Mutation::CreateProject(form) => {
            api.create_project(&form.draft(), form.image.as_ref()).await
        }
        Mutation::CreateClient(form) => {
            api.create_client(&form.draft(), form.image.as_ref()).await
        }
        Mutation::Delete(target) => target.send(api).await,
    };
    match &result {
        Ok(()) => tracing::info!("{} succeeded", mutation_kind(&mutation)),
        Err(e) => tracing::error!("{} failed: {}", mutation_kind(&mutation), e),
    }
    MutationOutcome { mutation, result }
}

/// Ask `confirm` first; `None` when the admin declined and nothing was sent.
pub async fn delete_confirmed<A: SiteApi>(
    api: &A,
    target: DeleteTarget,
    confirm: impl FnOnce(&str) -> bool,
) -> Option<MutationOutcome> {
    if !confirm(&target.confirm_prompt()) {
        return None;
    }
    Some(perform(api, Mutation::Delete(target)).await)
}

/// Fetch all four collections and apply them, unless the view ended meanwhile.
///
/// Returns the resources that failed, or `None` when the result was dropped.
pub async fn load_admin<A: SiteApi>(
    api: &A,
    alive: &Liveness,
    mut state: impl StateCell<AdminState>,
) -> Option<Vec<Resource>> {
    let load = alive.keep(fetch_admin(api).await)?;
    Some(state.update(|admin| admin.apply_load(load)))
}

/// Apply a finished mutation, flash its message, and re-fetch after a success.
///
/// The message and any form reset land before the re-fetch starts.
pub async fn settle<A: SiteApi>(
    api: &A,
    alive: &Liveness,
    outcome: MutationOutcome,
    mut state: impl StateCell<AdminState>,
    status: impl StateCell<StatusMessage>,
) {
    let Some(outcome) = alive.keep(outcome) else {
        return;
    };
    let succeeded = outcome.result.is_ok();
    let message = state.update(|admin| admin.apply_outcome(outcome));
    let refresh = async move {
        if succeeded {
            load_admin(api, alive, state).await;
        }
    };
    futures::join!(flash(status, message), refresh);
}

fn mutation_kind(mutation: &Mutation) -> String {
    match mutation {
        Mutation::CreateProject(_) => "create project".to_string(),
        Mutation::CreateClient(_) => "create client".to_string(),
        Mutation::Delete(target) => format!("delete {:?}", target),
    }
}

impl AdminState {
    /// Pure local change; every tab's data is already loaded.
    pub fn select_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    /// Apply each collection that loaded; failed ones keep their rows.
    pub fn apply_load(&mut self, load: AdminLoad) -> Vec<Resource> {
        let mut failed = Vec::new();
        apply_one(&mut self.projects, load.projects, Resource::Projects, &mut failed);
        apply_one(&mut self.clients, load.clients, Resource::Clients, &mut failed);
        apply_one(&mut self.contacts, load.contacts, Resource::Contacts, &mut failed);
        apply_one(
            &mut self.subscriptions,
            load.subscriptions,
            Resource::Subscriptions,
            &mut failed,
        );
        failed
    }

    /// Fold in a finished mutation and return the status text for it.
    pub fn apply_outcome(&mut self, outcome: MutationOutcome) -> String {
        if outcome.result.is_ok() {
            match &outcome.mutation {
                Mutation::CreateProject(_) => self.project_form.reset(),
                Mutation::CreateClient(_) => self.client_form.reset(),
                Mutation::Delete(_) => {}
            }
        }
        outcome.mutation.message(&outcome.result)
    }

    pub fn is_empty(&self, tab: AdminTab) -> bool {
        match tab {
            AdminTab::Projects => self.projects.is_empty(),
            AdminTab::Clients => self.clients.is_empty(),
            AdminTab::Contacts => self.contacts.is_empty(),
            AdminTab::Newsletters => self.subscriptions.is_empty(),
        }
    }
}

/// Submission date of a contact message, `YYYY-MM-DD`.
pub fn contact_date(message: &ContactMessage) -> String {
    message
        .created_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Subscription timestamp, `YYYY-MM-DD HH:MM`.
pub fn subscription_date(subscription: &Subscription) -> String {
    subscription
        .created_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn apply_one<T>(
    slot: &mut Vec<T>,
    loaded: ApiResult<Vec<T>>,
    resource: Resource,
    failed: &mut Vec<Resource>,
) {
    match loaded {
        Ok(items) => *slot = items,
        Err(e) => {
            tracing::warn!("Failed to load {:?}: {}", resource, e);
            failed.push(resource);
        }
    }
}
