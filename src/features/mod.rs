pub mod analytics;
pub mod auth;
pub mod contacts;
pub mod dashboard;
pub mod hero_sliders;
pub mod news;
pub mod officials;
pub mod potentials;
pub mod site_settings;
pub mod users;
pub mod village_services;
