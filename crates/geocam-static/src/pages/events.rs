//! Events page.

use geocam_content::page::EventDetail;
use geocam_content::EventsPage;

use super::{page_hero, PageRenderer, RenderError};
use crate::fragments::list_items;

impl PageRenderer for EventsPage {
    fn render(&self) -> Result<String, RenderError> {
        let events: String = self.upcoming.iter().map(event_detail).collect();

        Ok(format!(
            r#"{hero}
        <section class="events-intro">
            <div class="container">
                <p class="intro-text">{intro}</p>
            </div>
        </section>

        <section class="events-list-section">
            <div class="container">
                {events}
            </div>
        </section>

        <section class="events-cta">
            <div class="container">
                <h2>{cta_title}</h2>
                <p>{cta_description}</p>
                <a href="{cta_link}" class="btn btn-primary">{cta_text}</a>
            </div>
        </section>
        "#,
            hero = page_hero(&self.hero),
            intro = self.intro,
            cta_title = self.cta.title,
            cta_description = self.cta.description,
            cta_link = self.cta.button_link,
            cta_text = self.cta.button_text,
        ))
    }
}

fn event_detail(event: &EventDetail) -> String {
    format!(
        r#"
                <div class="event-detail">
                    <div class="event-header">
                        <h3>{}</h3>
                        <div class="event-meta">
                            <span class="event-dates">📅 {}</span>
                            <span class="event-location">📍 {}</span>
                        </div>
                    </div>
                    <p class="event-venue">{}</p>
                    <p class="event-description">{}</p>
                    <div class="event-highlights">
                        <h4>Event Highlights</h4>
                        <ul>
                            {}
                        </ul>
                    </div>
                </div>
            "#,
        event.name,
        event.dates,
        event.location,
        event.venue,
        event.description,
        list_items(&event.highlights)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(upcoming: &str) -> EventsPage {
        serde_json::from_str(&format!(
            r#"{{
            "hero": {{"title": "Events", "subtitle": "Meet the team"}},
            "intro": "Find us on the road.",
            "upcoming": [{upcoming}],
            "cta": {{"title": "Book a demo", "description": "At any show",
                     "buttonText": "Get in touch", "buttonLink": "contact.html"}}
        }}"#
        ))
        .unwrap()
    }

    #[test]
    fn renders_each_event_with_highlights() {
        let page = page(
            r#"{"name": "GeoWeek", "dates": "Feb 10-12", "location": "Denver",
                "venue": "Convention Center", "description": "Mapping expo",
                "highlights": ["Live demos", "Talks"]}"#,
        );

        let html = page.render().unwrap();

        assert_eq!(html.matches(r#"class="event-detail""#).count(), 1);
        assert!(html.contains(r#"<span class="event-dates">📅 Feb 10-12</span>"#));
        assert!(html.contains(r#"<span class="event-location">📍 Denver</span>"#));
        assert!(html.contains("<li>Live demos</li><li>Talks</li>"));
    }

    #[test]
    fn renders_intro_and_call_to_action_without_events() {
        let html = page("").render().unwrap();

        assert!(!html.contains("event-detail"));
        assert!(html.contains(r#"<p class="intro-text">Find us on the road.</p>"#));
        assert!(html.contains(r#"<a href="contact.html" class="btn btn-primary">Get in touch</a>"#));
    }
}
