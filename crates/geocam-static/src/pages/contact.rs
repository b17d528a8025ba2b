//! Contact page.

use geocam_content::page::{ContactMethod, FormField};
use geocam_content::ContactPage;

use super::{page_hero, PageRenderer, RenderError};

impl PageRenderer for ContactPage {
    fn render(&self) -> Result<String, RenderError> {
        let methods: String = self.methods.iter().map(contact_method).collect();

        let fields = self
            .form
            .fields
            .iter()
            .map(form_field)
            .collect::<Result<String, _>>()?;

        Ok(format!(
            r#"{hero}
        <section class="contact-intro">
            <div class="container">
                <p class="intro-text">{intro}</p>
            </div>
        </section>

        <section class="contact-methods">
            <div class="container">
                <div class="methods-grid">
                    {methods}
                </div>
            </div>
        </section>

        <section class="contact-form-section">
            <div class="container">
                <div class="form-container">
                    <h2>{form_title}</h2>
                    <form class="contact-form" id="contactForm">
                        {fields}
                        <button type="submit" class="btn btn-primary">{submit}</button>
                    </form>
                </div>
                <div class="contact-info">
                    <h3>{locations_title}</h3>
                    <p><strong>Timezone:</strong> {timezone}</p>
                    <p><strong>Hours:</strong> {hours}</p>
                </div>
            </div>
        </section>
        "#,
            hero = page_hero(&self.hero),
            intro = self.intro,
            form_title = self.form.title,
            submit = self.form.submit_text,
            locations_title = self.locations.title,
            timezone = self.locations.timezone,
            hours = self.locations.hours,
        ))
    }
}

fn contact_method(method: &ContactMethod) -> String {
    format!(
        r#"
                <div class="contact-method">
                    <div class="contact-icon">{}</div>
                    <h3>{}</h3>
                    <p>{}</p>
                    <a href="{}" class="contact-link">{}</a>
                </div>
            "#,
        method.icon, method.title, method.description, method.link, method.contact
    )
}

/// Render a form field as a textarea, a select, or an input of the field's type.
fn form_field(field: &FormField) -> Result<String, RenderError> {
    let name = &field.name;
    let marker = if field.required { "*" } else { "" };
    let required = if field.required { "required" } else { "" };

    let control = match field.kind.as_str() {
        "textarea" => format!(
            r#"<textarea id="{name}" name="{name}" rows="5" {required}></textarea>"#
        ),
        "select" => {
            let options: String = field
                .options
                .as_ref()
                .ok_or_else(|| RenderError::MissingOptions {
                    field: name.clone(),
                })?
                .iter()
                .map(|opt| format!(r#"<option value="{opt}">{opt}</option>"#))
                .collect();

            format!(
                r#"<select id="{name}" name="{name}" {required}>
                            <option value="">Select an option...</option>
                            {options}
                        </select>"#
            )
        }
        kind => format!(r#"<input type="{kind}" id="{name}" name="{name}" {required}>"#),
    };

    Ok(format!(
        r#"
                    <div class="form-group">
                        <label for="{name}">{label}{marker}</label>
                        {control}
                    </div>
                "#,
        label = field.label,
    ))
}
