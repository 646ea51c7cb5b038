mod landing;
pub use landing::Landing;

mod admin;
pub use admin::Admin;
