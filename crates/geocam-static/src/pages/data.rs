//! Data services page.

use geocam_content::DataPage;

use super::{page_hero, PageRenderer, RenderError};
use crate::fragments::list_items;

impl PageRenderer for DataPage {
    fn render(&self) -> Result<String, RenderError> {
        let applications: String = self
            .capabilities
            .applications
            .iter()
            .map(|app| {
                format!(
                    r#"
                <div class="application-card">
                    <div class="app-icon">{}</div>
                    <h3>{}</h3>
                    <p>{}</p>
                </div>
            "#,
                    app.icon, app.title, app.description
                )
            })
            .collect();

        let outputs: String = self
            .three_d
            .outputs
            .iter()
            .map(|output| {
                format!(
                    r#"
                <div class="output-card">
                    <h3>{}</h3>
                    <p>{}</p>
                </div>
            "#,
                    output.title, output.description
                )
            })
            .collect();

        Ok(format!(
            r#"{hero}
        <section class="overview">
            <div class="container">
                <h2>{overview_title}</h2>
                <p class="overview-description">{overview_description}</p>
            </div>
        </section>

        <section class="capabilities">
            <div class="container">
                <h2>{capabilities_title}</h2>
                <p class="section-subtitle">{capabilities_subtitle}</p>
                <div class="applications-grid">
                    {applications}
                </div>
            </div>
        </section>

        <section class="three-d">
            <div class="container">
                <h2>{three_d_title}</h2>
                <p class="section-subtitle">{three_d_subtitle}</p>
                <div class="outputs-grid">
                    {outputs}
                </div>
            </div>
        </section>

        <section class="services">
            <div class="container">
                <h2>{services_title}</h2>
                <p class="services-description">{services_description}</p>
                <ul class="benefits-list">
                    {benefits}
                </ul>
            </div>
        </section>

        <section class="integration">
            <div class="container">
                <h2>{integration_title}</h2>
                <p class="integration-description">{integration_description}</p>
                <ul class="features-list">
                    {features}
                </ul>
            </div>
        </section>
        "#,
            hero = page_hero(&self.hero),
            overview_title = self.overview.title,
            overview_description = self.overview.description,
            capabilities_title = self.capabilities.title,
            capabilities_subtitle = self.capabilities.subtitle,
            three_d_title = self.three_d.title,
            three_d_subtitle = self.three_d.subtitle,
            services_title = self.services.title,
            services_description = self.services.description,
            benefits = list_items(&self.services.benefits),
            integration_title = self.integration.title,
            integration_description = self.integration.description,
            features = list_items(&self.integration.features),
        ))
    }
}
