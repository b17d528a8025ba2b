//! Per-page content documents.
//!
//! Every field is required unless it is an `Option`. A document missing a
//! required field fails to load, so no page is ever rendered from partial
//! content.

use serde::Deserialize;

/// Title block at the top of every page except home.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PageHero {
    pub title: String,
    pub subtitle: String,
}

/// A titled card with a short description.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Card {
    pub title: String,
    pub description: String,
}

/// A card with an icon (usually an emoji) above the title.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IconCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Link {
    pub text: String,
    pub href: String,
}

// Home

/// Contents of `home.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HomePage {
    pub hero: HomeHero,
    pub workflow: Workflow,
    pub deployment: Deployment,
    pub industries: IndustrySectors,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HomeHero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta: HeroActions,

    /// Device and aerial shots shown beside the hero text
    #[serde(default)]
    pub images: Option<HeroImages>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeroActions {
    pub primary: Link,
    pub secondary: Link,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeroImages {
    pub device: Image,
    pub aerial: Image,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Workflow {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<WorkflowStep>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WorkflowStep {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Deployment {
    pub title: String,
    pub subtitle: String,
    pub methods: Vec<Card>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IndustrySectors {
    pub title: String,
    pub subtitle: String,
    pub sectors: Vec<IconCard>,
}

// Product

/// Contents of `product.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductPage {
    pub hero: PageHero,
    pub hardware: Hardware,
    pub vps: Vps,
    pub software: Software,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Hardware {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<Card>,
    pub deployment: Card,
}

/// Visual positioning system section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Vps {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Software {
    pub title: String,
    pub subtitle: String,
    pub applications: Vec<SoftwareApp>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SoftwareApp {
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
}

// Data

/// Contents of `data.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DataPage {
    pub hero: PageHero,
    pub overview: TextSection,
    pub capabilities: Applications,
    #[serde(rename = "3d")]
    pub three_d: Outputs,
    pub services: Services,
    pub integration: Integration,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TextSection {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Applications {
    pub title: String,
    pub subtitle: String,
    pub applications: Vec<IconCard>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Outputs {
    pub title: String,
    pub subtitle: String,
    pub outputs: Vec<Card>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Services {
    pub title: String,
    pub description: String,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Integration {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

// Industries

/// Contents of `industries.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IndustriesPage {
    pub hero: PageHero,
    pub industries: Vec<IndustryDetail>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IndustryDetail {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub benefits: Vec<String>,
}

// Events

/// Contents of `events.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EventsPage {
    pub hero: PageHero,
    pub intro: String,
    pub upcoming: Vec<EventDetail>,
    pub cta: EventsCta,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EventDetail {
    pub name: String,
    pub dates: String,
    pub location: String,
    pub venue: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventsCta {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

// Contact

/// Contents of `contact.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ContactPage {
    pub hero: PageHero,
    pub intro: String,
    pub methods: Vec<ContactMethod>,
    pub form: ContactForm,
    pub locations: Locations,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ContactMethod {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub contact: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub title: String,
    pub submit_text: String,
    pub fields: Vec<FormField>,
}

/// A contact form field.
///
/// `kind` is `textarea`, `select`, or any HTML input type.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Must be a JSON boolean; `1` or `"yes"` fail to load
    pub required: bool,

    /// Choices for `select` fields
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Locations {
    pub title: String,
    pub timezone: String,
    pub hours: String,
}
