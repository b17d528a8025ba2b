//! The fixed set of pages the site is made of.

use std::fmt;

/// A page section of the site.
///
/// Each kind ties together the template it is rendered into, the content
/// document it is rendered from, and the file it is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Product,
    Data,
    Industries,
    Events,
    Contact,
}

impl PageKind {
    /// Every page, in build order.
    pub const ALL: [PageKind; 6] = [
        PageKind::Home,
        PageKind::Product,
        PageKind::Data,
        PageKind::Industries,
        PageKind::Events,
        PageKind::Contact,
    ];

    /// Template file name, relative to the templates directory.
    pub fn template_name(self) -> &'static str {
        match self {
            PageKind::Home => "home.html",
            PageKind::Product => "product.html",
            PageKind::Data => "data.html",
            PageKind::Industries => "industries.html",
            PageKind::Events => "events.html",
            PageKind::Contact => "contact.html",
        }
    }

    /// Content file name, relative to the content directory.
    pub fn content_file(self) -> &'static str {
        match self {
            PageKind::Home => "home.json",
            PageKind::Product => "product.json",
            PageKind::Data => "data.json",
            PageKind::Industries => "industries.json",
            PageKind::Events => "events.json",
            PageKind::Contact => "contact.json",
        }
    }

    /// Output file name, relative to the output directory.
    pub fn output_file(self) -> &'static str {
        match self {
            PageKind::Home => "index.html",
            other => other.template_name(),
        }
    }

    /// Identifier compared against navigation links to mark the active entry.
    pub fn page_id(self) -> &'static str {
        self.output_file()
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::Home => "home",
            PageKind::Product => "product",
            PageKind::Data => "data",
            PageKind::Industries => "industries",
            PageKind::Events => "events",
            PageKind::Contact => "contact",
        };
        f.write_str(name)
    }
}
