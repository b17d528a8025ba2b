//! Content model for the GeoCam site.
//!
//! This crate provides the typed shape of the site-wide and per-page JSON
//! documents, the fixed table of page kinds, and loaders for content and
//! template files.

pub mod kind;
pub mod loader;
pub mod page;
pub mod site;

pub use kind::PageKind;
pub use loader::{load_json, load_site, load_template, ContentError};
pub use page::{
    ContactPage, DataPage, EventsPage, HomePage, IndustriesPage, PageHero, ProductPage,
};
pub use site::{Contact, NavLink, SiteData, SiteEvent};
