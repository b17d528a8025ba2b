//! Fragments shared by every page: navigation, footer and list helpers.

use geocam_content::SiteData;

/// Render the navigation bar links.
///
/// Links keep their input order. The entry whose `href` equals `current_page`
/// is marked `active`.
pub fn render_navigation(site: &SiteData, current_page: &str) -> String {
    site.navigation
        .iter()
        .map(|item| {
            let active = if item.href == current_page { "active" } else { "" };
            format!(
                r#"<a href="{}" class="nav-link {}">{}</a>"#,
                item.href, active, item.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the site footer.
pub fn render_footer(site: &SiteData) -> String {
    let events = site
        .events
        .iter()
        .map(|event| {
            format!(
                r#"
                <div class="event-item">
                    <h4>{}</h4>
                    <p>{}</p>
                    <p class="location">{}</p>
                </div>
            "#,
                event.name, event.dates, event.location
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r##"
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-col">
                        <h3>{site_name}</h3>
                        <p>{description}</p>
                    </div>
                    <div class="footer-col">
                        <h3>Upcoming Events</h3>
                        <div class="events-list">
                            {events}
                        </div>
                    </div>
                    <div class="footer-col">
                        <h3>Stay Connected</h3>
                        <form class="newsletter-form" action="#" method="post">
                            <input type="email" placeholder="Your email" required>
                            <button type="submit">Subscribe</button>
                        </form>
                        <p class="contact-email">
                            <a href="mailto:{email}">{email}</a>
                        </p>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>&copy; {site_name} 2025. All rights reserved.</p>
                </div>
            </div>
        </footer>
        "##,
        site_name = site.site_name,
        description = site.description,
        email = site.contact.email,
    )
}

/// Render each string as an `<li>` and concatenate them.
pub fn list_items(items: &[String]) -> String {
    items.iter().map(|item| format!("<li>{item}</li>")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocam_content::{Contact, NavLink, SiteEvent};

    fn site() -> SiteData {
        SiteData {
            site_name: "GeoCam".to_string(),
            description: "Aerial mapping made simple".to_string(),
            navigation: vec![
                NavLink {
                    name: "Home".to_string(),
                    href: "index.html".to_string(),
                },
                NavLink {
                    name: "Product".to_string(),
                    href: "product.html".to_string(),
                },
                NavLink {
                    name: "Contact".to_string(),
                    href: "contact.html".to_string(),
                },
            ],
            events: vec![
                SiteEvent {
                    name: "GeoWeek".to_string(),
                    dates: "Feb 10-12".to_string(),
                    location: "Denver, CO".to_string(),
                },
                SiteEvent {
                    name: "Commercial UAV Expo".to_string(),
                    dates: "Sep 2-4".to_string(),
                    location: "Las Vegas, NV".to_string(),
                },
            ],
            contact: Contact {
                email: "hello@geocam.io".to_string(),
            },
        }
    }

    #[test]
    fn marks_matching_link_active() {
        let nav = render_navigation(&site(), "product.html");

        assert_eq!(nav.matches("nav-link active").count(), 1);
        assert!(nav.contains(r#"<a href="product.html" class="nav-link active">Product</a>"#));
        assert!(nav.contains(r#"<a href="index.html" class="nav-link ">Home</a>"#));
    }

    #[test]
    fn marks_nothing_active_without_match() {
        let nav = render_navigation(&site(), "about.html");

        assert!(!nav.contains("active"));
        assert_eq!(nav.matches("nav-link").count(), 3);
    }

    #[test]
    fn keeps_navigation_order_and_duplicates() {
        let mut site = site();
        site.navigation.push(site.navigation[0].clone());

        let nav = render_navigation(&site, "");
        let lines: Vec<&str> = nav.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Home"));
        assert!(lines[1].contains("Product"));
        assert!(lines[2].contains("Contact"));
        assert!(lines[3].contains("Home"));
    }

    #[test]
    fn empty_navigation_renders_nothing() {
        let mut site = site();
        site.navigation.clear();

        assert_eq!(render_navigation(&site, "index.html"), "");
    }

    #[test]
    fn footer_lists_events_in_order() {
        let footer = render_footer(&site());

        assert_eq!(footer.matches(r#"class="event-item""#).count(), 2);
        let first = footer.find("GeoWeek").unwrap();
        let second = footer.find("Commercial UAV Expo").unwrap();
        assert!(first < second);
    }

    #[test]
    fn footer_has_site_details_and_contact_link() {
        let footer = render_footer(&site());

        assert!(footer.contains("<h3>GeoCam</h3>"));
        assert!(footer.contains("<p>Aerial mapping made simple</p>"));
        assert!(footer.contains(r#"<a href="mailto:hello@geocam.io">hello@geocam.io</a>"#));
        assert!(footer.contains("&copy; GeoCam 2025"));
    }

    #[test]
    fn footer_without_events_has_no_event_items() {
        let mut site = site();
        site.events.clear();

        let footer = render_footer(&site);

        assert!(!footer.contains("event-item"));
        assert!(footer.contains("Upcoming Events"));
    }

    #[test]
    fn list_items_wraps_each_entry() {
        let items = vec!["One".to_string(), "Two".to_string()];

        assert_eq!(list_items(&items), "<li>One</li><li>Two</li>");
        assert_eq!(list_items(&[]), "");
    }
}
