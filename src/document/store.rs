use super::model::Document;
use super::patch::{Branch, PartialDocument};

/// Holds the current document and applies partial updates to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStore {
    document: Document,
}

impl DocumentStore {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn replace(&mut self, document: Document) {
        self.document = document;
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Object branches are merged field by field; arrays and `modules` are replaced.
    /// Branches absent from `partial` are left untouched.
    pub fn apply(&mut self, partial: PartialDocument) -> &Document {
        let branches = partial.branches();
        let PartialDocument {
            hero,
            about,
            services,
            projects,
            testimonials,
            contact,
            contact_items,
            social_links,
            appearance,
            modules,
            modules_order,
            branding,
            behavior,
            seo,
            footer,
            section_headers,
        } = partial;
        let document = &mut self.document;

        if let Some(patch) = hero {
            patch.merge_into(&mut document.hero);
        }
        if let Some(patch) = about {
            patch.merge_into(&mut document.about);
        }
        if let Some(patch) = contact {
            patch.merge_into(&mut document.contact);
        }
        if let Some(patch) = appearance {
            patch.merge_into(&mut document.appearance);
        }
        if let Some(patch) = branding {
            patch.merge_into(&mut document.branding);
        }
        if let Some(patch) = behavior {
            patch.merge_into(&mut document.behavior);
        }
        if let Some(patch) = seo {
            patch.merge_into(&mut document.seo);
        }
        if let Some(patch) = footer {
            patch.merge_into(&mut document.footer);
        }
        if let Some(patch) = section_headers {
            patch.merge_into(&mut document.section_headers);
        }

        if let Some(value) = services {
            document.services = value;
        }
        if let Some(value) = projects {
            document.projects = value;
        }
        if let Some(value) = testimonials {
            document.testimonials = value;
        }
        if let Some(value) = contact_items {
            document.contact_items = value;
        }
        if let Some(value) = social_links {
            document.social_links = value;
        }
        if let Some(value) = modules {
            document.modules = value;
        }
        if let Some(value) = modules_order {
            document.modules_order = value;
        }

        let (merged, replaced): (Vec<Branch>, Vec<Branch>) =
            branches.into_iter().partition(|branch| branch.merges_fields());
        tracing::debug!(
            merged = ?merged.iter().map(|branch| branch.name()).collect::<Vec<_>>(),
            replaced = ?replaced.iter().map(|branch| branch.name()).collect::<Vec<_>>(),
            "document update applied"
        );
        &self.document
    }
}
