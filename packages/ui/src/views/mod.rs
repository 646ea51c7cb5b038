mod landing_page;
pub use landing_page::LandingPage;

mod admin_panel;
pub use admin_panel::AdminPanel;
