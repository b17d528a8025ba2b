//! Product page.

use geocam_content::ProductPage;

use super::{page_hero, PageRenderer, RenderError};
use crate::fragments::list_items;

impl PageRenderer for ProductPage {
    fn render(&self) -> Result<String, RenderError> {
        let hardware = &self.hardware;
        let vps = &self.vps;
        let software = &self.software;

        let features: String = hardware
            .features
            .iter()
            .map(|feature| {
                format!(
                    r#"
                <div class="feature-card">
                    <h3>{}</h3>
                    <p>{}</p>
                </div>
            "#,
                    feature.title, feature.description
                )
            })
            .collect();

        let applications: String = software
            .applications
            .iter()
            .map(|app| {
                format!(
                    r#"
                <div class="software-card">
                    <h3>{}</h3>
                    <p>{}</p>
                    <ul class="feature-list">
                        {}
                    </ul>
                </div>
            "#,
                    app.name,
                    app.description,
                    list_items(&app.features)
                )
            })
            .collect();

        Ok(format!(
            r#"{hero}
        <section class="hardware">
            <div class="container">
                <h2>{hardware_title}</h2>
                <p class="section-subtitle">{hardware_subtitle}</p>
                <div class="features-grid">
                    {features}
                </div>
                <div class="deployment-info">
                    <h3>{deployment_title}</h3>
                    <p>{deployment_description}</p>
                </div>
            </div>
        </section>

        <section class="vps">
            <div class="container">
                <h2>{vps_title}</h2>
                <p class="section-subtitle">{vps_subtitle}</p>
                <p class="vps-description">{vps_description}</p>
                <ul class="capabilities-list">
                    {capabilities}
                </ul>
            </div>
        </section>

        <section class="software">
            <div class="container">
                <h2>{software_title}</h2>
                <p class="section-subtitle">{software_subtitle}</p>
                <div class="software-grid">
                    {applications}
                </div>
            </div>
        </section>
        "#,
            hero = page_hero(&self.hero),
            hardware_title = hardware.title,
            hardware_subtitle = hardware.subtitle,
            deployment_title = hardware.deployment.title,
            deployment_description = hardware.deployment.description,
            vps_title = vps.title,
            vps_subtitle = vps.subtitle,
            vps_description = vps.description,
            capabilities = list_items(&vps.capabilities),
            software_title = software.title,
            software_subtitle = software.subtitle,
        ))
    }
}
