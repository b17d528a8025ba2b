//! Industries page.

use geocam_content::page::IndustryDetail;
use geocam_content::IndustriesPage;

use super::{page_hero, PageRenderer, RenderError};
use crate::fragments::list_items;

impl PageRenderer for IndustriesPage {
    fn render(&self) -> Result<String, RenderError> {
        let industries: String = self.industries.iter().map(industry_detail).collect();

        Ok(format!(
            r#"{}
        <section class="industries-detail">
            <div class="container">
                {}
            </div>
        </section>
        "#,
            page_hero(&self.hero),
            industries
        ))
    }
}

fn industry_detail(industry: &IndustryDetail) -> String {
    format!(
        r#"
                <div class="industry-detail">
                    <div class="industry-header">
                        <div class="industry-icon-large">{}</div>
                        <div>
                            <h3>{}</h3>
                            <p class="industry-lead">{}</p>
                        </div>
                    </div>
                    <div class="industry-content">
                        <div class="industry-section">
                            <h4>Capabilities</h4>
                            <ul class="industry-list">
                                {}
                            </ul>
                        </div>
                        <div class="industry-section">
                            <h4>Benefits</h4>
                            <ul class="industry-list">
                                {}
                            </ul>
                        </div>
                    </div>
                </div>
            "#,
        industry.icon,
        industry.title,
        industry.description,
        list_items(&industry.capabilities),
        list_items(&industry.benefits)
    )
}
