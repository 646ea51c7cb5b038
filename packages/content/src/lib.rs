pub mod backend;
pub mod config;
pub mod error;
pub mod models;

mod memory;
pub use memory::{MemoryApi, Method, RecordedRequest};

pub use backend::{ApiResult, SiteApi};
pub use config::{ApiConfig, SiteConfig};
pub use error::ApiError;
pub use models::{
    Client, ClientDraft, ContactForm, ContactMessage, Envelope, ImageUpload, Project,
    ProjectDraft, Resource, Subscription,
};
