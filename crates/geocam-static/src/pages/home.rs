//! Home page.

use geocam_content::page::{HeroImages, HomeHero, IconCard, WorkflowStep};
use geocam_content::HomePage;

use super::{PageRenderer, RenderError};

impl PageRenderer for HomePage {
    fn render(&self) -> Result<String, RenderError> {
        let workflow: String = self.workflow.steps.iter().map(workflow_step).collect();

        let deployment: String = self
            .deployment
            .methods
            .iter()
            .map(|method| {
                format!(
                    r#"
                <div class="deployment-card">
                    <h3>{}</h3>
                    <p>{}</p>
                </div>
            "#,
                    method.title, method.description
                )
            })
            .collect();

        let industries: String = self.industries.sectors.iter().map(industry_card).collect();

        Ok(format!(
            r#"{hero}
        <section class="workflow">
            <div class="container">
                <h2>{workflow_title}</h2>
                <p class="section-subtitle">{workflow_subtitle}</p>
                <div class="workflow-grid">
                    {workflow}
                </div>
            </div>
        </section>

        <section class="deployment">
            <div class="container">
                <h2>{deployment_title}</h2>
                <p class="section-subtitle">{deployment_subtitle}</p>
                <div class="deployment-grid">
                    {deployment}
                </div>
            </div>
        </section>

        <section class="industries">
            <div class="container">
                <h2>{industries_title}</h2>
                <p class="section-subtitle">{industries_subtitle}</p>
                <div class="industries-grid">
                    {industries}
                </div>
            </div>
        </section>
        "#,
            hero = hero(&self.hero),
            workflow_title = self.workflow.title,
            workflow_subtitle = self.workflow.subtitle,
            deployment_title = self.deployment.title,
            deployment_subtitle = self.deployment.subtitle,
            industries_title = self.industries.title,
            industries_subtitle = self.industries.subtitle,
        ))
    }
}

fn hero(hero: &HomeHero) -> String {
    let images = hero.images.as_ref().map(hero_images).unwrap_or_default();

    format!(
        r#"
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <h1>{}</h1>
                    <p class="hero-subtitle">{}</p>
                    <p class="hero-description">{}</p>
                    <div class="hero-cta">
                        <a href="{}" class="btn btn-primary">{}</a>
                        <a href="{}" class="btn btn-secondary">{}</a>
                    </div>
                </div>
                {}
            </div>
        </section>
"#,
        hero.title,
        hero.subtitle,
        hero.description,
        hero.cta.primary.href,
        hero.cta.primary.text,
        hero.cta.secondary.href,
        hero.cta.secondary.text,
        images
    )
}

fn hero_images(images: &HeroImages) -> String {
    format!(
        r#"
                <div class="hero-images">
                    <div class="hero-image-device">
                        <img src="{}" alt="{}">
                    </div>
                    <div class="hero-image-aerial">
                        <img src="{}" alt="{}">
                    </div>
                </div>
            "#,
        images.device.src, images.device.alt, images.aerial.src, images.aerial.alt
    )
}

fn workflow_step(step: &WorkflowStep) -> String {
    let image = step
        .image
        .as_ref()
        .map(|image| {
            format!(
                r#"<img src="{}" alt="{}" class="workflow-image">"#,
                image.src, image.alt
            )
        })
        .unwrap_or_default();

    format!(
        r#"
                <div class="workflow-step">
                    {}
                    <div class="step-icon">{}</div>
                    <h3>{}</h3>
                    <p>{}</p>
                </div>
            "#,
        image, step.icon, step.title, step.description
    )
}

fn industry_card(sector: &IconCard) -> String {
    format!(
        r#"
                <div class="industry-card">
                    <div class="industry-icon">{}</div>
                    <h3>{}</h3>
                    <p>{}</p>
                </div>
            "#,
        sector.icon, sector.title, sector.description
    )
}
