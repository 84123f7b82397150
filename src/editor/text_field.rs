use crate::document::collection::{self, CollectionItem};
use crate::document::model::{Document, Project, Service, Testimonial};
use crate::document::patch::{
    AboutPatch, ContactPatch, FooterPatch, HeroPatch, SectionHeadersPatch,
};
use crate::document::PartialDocument;

/// A text location in the document that can be edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextField {
    HeroName,
    HeroTagline,
    HeroBio,
    HeroCtaLabel,
    HeroPrefix,
    AboutHeading,
    AboutColumn1,
    AboutColumn2,
    ContactTitle,
    ContactNote,
    FooterCompanyName,
    ServicesHeader,
    ProjectsHeader,
    TestimonialsHeader,
    ServiceTitle(String),
    ServiceBlurb(String),
    ProjectTitle(String),
    ProjectSummary(String),
    TestimonialQuote(String),
}

impl TextField {
    /// Current value; missing optional fields read as empty. `None` when the
    /// field addresses a collection element that no longer exists.
    pub fn read(&self, document: &Document) -> Option<String> {
        let optional = |value: &Option<String>| value.clone().unwrap_or_default();
        let value = match self {
            Self::HeroName => document.hero.name.clone(),
            Self::HeroTagline => document.hero.tagline.clone(),
            Self::HeroBio => document.hero.bio.clone(),
            Self::HeroCtaLabel => document.hero.cta_label.clone(),
            Self::HeroPrefix => optional(&document.hero.prefix),
            Self::AboutHeading => optional(&document.about.heading),
            Self::AboutColumn1 => optional(&document.about.column1),
            Self::AboutColumn2 => optional(&document.about.column2),
            Self::ContactTitle => document.contact.title.clone(),
            Self::ContactNote => document.contact.note.clone(),
            Self::FooterCompanyName => document.footer.company_name.clone(),
            Self::ServicesHeader => optional(&document.section_headers.services),
            Self::ProjectsHeader => optional(&document.section_headers.projects),
            Self::TestimonialsHeader => optional(&document.section_headers.testimonials),
            Self::ServiceTitle(id) => find::<Service>(document, id)?.title.clone(),
            Self::ServiceBlurb(id) => find::<Service>(document, id)?.blurb.clone(),
            Self::ProjectTitle(id) => find::<Project>(document, id)?.title.clone(),
            Self::ProjectSummary(id) => find::<Project>(document, id)?.summary.clone(),
            Self::TestimonialQuote(id) => find::<Testimonial>(document, id)?.quote.clone(),
        };
        Some(value)
    }

    /// Partial update writing `text` into this field.
    pub fn write(&self, document: &Document, text: String) -> Option<PartialDocument> {
        let partial = match self {
            Self::HeroName => hero(HeroPatch {
                name: Some(text),
                ..HeroPatch::default()
            }),
            Self::HeroTagline => hero(HeroPatch {
                tagline: Some(text),
                ..HeroPatch::default()
            }),
            Self::HeroBio => hero(HeroPatch {
                bio: Some(text),
                ..HeroPatch::default()
            }),
            Self::HeroCtaLabel => hero(HeroPatch {
                cta_label: Some(text),
                ..HeroPatch::default()
            }),
            Self::HeroPrefix => hero(HeroPatch {
                prefix: Some(Some(text)),
                ..HeroPatch::default()
            }),
            Self::AboutHeading => about(AboutPatch {
                heading: Some(Some(text)),
                ..AboutPatch::default()
            }),
            Self::AboutColumn1 => about(AboutPatch {
                column1: Some(Some(text)),
                ..AboutPatch::default()
            }),
            Self::AboutColumn2 => about(AboutPatch {
                column2: Some(Some(text)),
                ..AboutPatch::default()
            }),
            Self::ContactTitle => contact(ContactPatch {
                title: Some(text),
                ..ContactPatch::default()
            }),
            Self::ContactNote => contact(ContactPatch {
                note: Some(text),
                ..ContactPatch::default()
            }),
            Self::FooterCompanyName => PartialDocument {
                footer: Some(FooterPatch {
                    company_name: Some(text),
                    ..FooterPatch::default()
                }),
                ..PartialDocument::default()
            },
            Self::ServicesHeader => headers(SectionHeadersPatch {
                services: Some(Some(text)),
                ..SectionHeadersPatch::default()
            }),
            Self::ProjectsHeader => headers(SectionHeadersPatch {
                projects: Some(Some(text)),
                ..SectionHeadersPatch::default()
            }),
            Self::TestimonialsHeader => headers(SectionHeadersPatch {
                testimonials: Some(Some(text)),
                ..SectionHeadersPatch::default()
            }),
            Self::ServiceTitle(id) => {
                collection::updated::<Service, _>(document, id, |item| item.title = text)?
            }
            Self::ServiceBlurb(id) => {
                collection::updated::<Service, _>(document, id, |item| item.blurb = text)?
            }
            Self::ProjectTitle(id) => {
                collection::updated::<Project, _>(document, id, |item| item.title = text)?
            }
            Self::ProjectSummary(id) => {
                collection::updated::<Project, _>(document, id, |item| item.summary = text)?
            }
            Self::TestimonialQuote(id) => {
                collection::updated::<Testimonial, _>(document, id, |item| item.quote = text)?
            }
        };
        Some(partial)
    }
}

fn find<'a, T: CollectionItem>(document: &'a Document, id: &str) -> Option<&'a T> {
    T::items(document).iter().find(|item| item.id() == id)
}

fn hero(patch: HeroPatch) -> PartialDocument {
    PartialDocument::hero(patch)
}

fn about(patch: AboutPatch) -> PartialDocument {
    PartialDocument {
        about: Some(patch),
        ..PartialDocument::default()
    }
}

fn contact(patch: ContactPatch) -> PartialDocument {
    PartialDocument {
        contact: Some(patch),
        ..PartialDocument::default()
    }
}

fn headers(patch: SectionHeadersPatch) -> PartialDocument {
    PartialDocument {
        section_headers: Some(patch),
        ..PartialDocument::default()
    }
}
