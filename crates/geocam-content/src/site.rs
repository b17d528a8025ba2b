//! Site-wide data shared by every page.

use serde::Deserialize;

/// Contents of `site.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    /// Site name, used in the header, footer and copyright line
    pub site_name: String,

    /// Short description shown in the footer
    pub description: String,

    /// Navigation entries in display order
    pub navigation: Vec<NavLink>,

    /// Upcoming events listed in the footer
    pub events: Vec<SiteEvent>,

    pub contact: Contact,
}

/// A navigation entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

/// An event summary for the footer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteEvent {
    pub name: String,
    pub dates: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Contact {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_site_document() {
        let json = r#"{
            "siteName": "GeoCam",
            "description": "Aerial mapping",
            "navigation": [
                {"name": "Home", "href": "index.html"},
                {"name": "Product", "href": "product.html"}
            ],
            "events": [
                {"name": "Expo", "dates": "May 1-3", "location": "Denver"}
            ],
            "contact": {"email": "a@b.com", "phone": "ignored"}
        }"#;

        let site: SiteData = serde_json::from_str(json).unwrap();

        assert_eq!(site.site_name, "GeoCam");
        assert_eq!(site.navigation.len(), 2);
        assert_eq!(site.navigation[1].href, "product.html");
        assert_eq!(site.events[0].location, "Denver");
        assert_eq!(site.contact.email, "a@b.com");
    }

    #[test]
    fn rejects_missing_contact() {
        let json = r#"{"siteName": "GeoCam", "description": "", "navigation": [], "events": []}"#;

        let err = serde_json::from_str::<SiteData>(json).unwrap_err();

        assert!(err.to_string().contains("missing field `contact`"));
    }
}
