//! This crate contains the shared UI for the site: the public landing page,
//! the admin panel, and the state both of them drive.

use dioxus::prelude::*;

pub mod admin;
pub mod fallback;
pub mod landing;
pub mod status;

mod cell;
pub use cell::StateCell;

mod liveness;
pub use liveness::{use_liveness, Liveness};

mod site;
pub use site::{confirm, make_api, use_site_config, SiteProvider};

pub mod views;
pub use views::{AdminPanel, LandingPage};

pub const SITE_CSS: Asset = asset!("/assets/site.css");
