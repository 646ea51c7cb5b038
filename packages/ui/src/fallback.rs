//! Placeholder content for the public page.
//!
//! Shown whenever the backend returns an empty collection, so a fresh install
//! never looks broken. The placeholder images ship with this crate under
//! `assets/images` and are bundled through `asset!`, so they resolve without
//! the backend.

use dioxus::prelude::*;

/// A card in the "Our Projects" grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCard {
    pub key: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

/// A card in the "Happy Clients" grid.
#[derive(Clone, Debug, PartialEq)]
pub struct TestimonialCard {
    pub key: String,
    pub name: String,
    pub designation: String,
    pub quote: String,
    pub image_url: String,
}

const PROJECTS: [(Asset, &str, &str); 6] = [
    (
        asset!("/assets/images/estate1.svg"),
        "Luxury Villa Project",
        "Modern luxury villa with state-of-the-art amenities and stunning architecture.",
    ),
    (
        asset!("/assets/images/estate2.svg"),
        "Commercial Complex",
        "Premium commercial space designed for modern businesses and retail outlets.",
    ),
    (
        asset!("/assets/images/estate3.svg"),
        "Residential Towers",
        "High-rise residential towers offering spectacular city views and comfort.",
    ),
    (
        asset!("/assets/images/estate4.svg"),
        "Office Building",
        "Contemporary office building with cutting-edge facilities and smart technology.",
    ),
    (
        asset!("/assets/images/estate5.svg"),
        "Shopping Mall",
        "Spacious shopping destination with diverse retail and entertainment options.",
    ),
    (
        asset!("/assets/images/estate6.svg"),
        "Modern Apartment",
        "Stylish apartments with premium finishes and world-class facilities.",
    ),
];

const CLIENT_IMAGES: [Asset; 6] = [
    asset!("/assets/images/hp1.svg"),
    asset!("/assets/images/hp2.svg"),
    asset!("/assets/images/hp3.svg"),
    asset!("/assets/images/hp4.svg"),
    asset!("/assets/images/hp5.svg"),
    asset!("/assets/images/hp6.svg"),
];

const TESTIMONIAL: &str =
    "Great service and professional team. Highly recommend for any business needs!";

pub fn fallback_projects() -> Vec<ProjectCard> {
    PROJECTS
        .iter()
        .enumerate()
        .map(|(i, (image, name, description))| ProjectCard {
            key: format!("fallback-project-{i}"),
            name: name.to_string(),
            description: description.to_string(),
            image_url: image.to_string(),
        })
        .collect()
}

pub fn fallback_testimonials() -> Vec<TestimonialCard> {
    CLIENT_IMAGES
        .iter()
        .zip(1..)
        .map(|(image, n)| TestimonialCard {
            key: format!("fallback-client-{n}"),
            name: format!("Client {n}"),
            designation: "Business Owner".to_string(),
            quote: TESTIMONIAL.to_string(),
            image_url: image.to_string(),
        })
        .collect()
}
