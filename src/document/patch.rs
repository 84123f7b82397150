use serde::{Deserialize, Deserializer, Serialize};

use super::model::{
    About, Appearance, Behavior, Branding, Contact, ContactItem, Footer, Hero, Modules, Project,
    SectionHeaders, SectionKind, Seo, Service, SocialLink, Testimonial,
};

/// Keeps `null` distinguishable from an absent key: a present key always
/// deserializes to `Some`, so `"avatar": null` clears an optional field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

macro_rules! branch_patch {
    ($(#[$meta:meta])* $name:ident => $branch:ty { $($field:ident: $ty:ty),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                #[serde(
                    default,
                    deserialize_with = "present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            /// Shallow merge: fields set here overwrite, every other field survives.
            pub fn merge_into(self, branch: &mut $branch) {
                $(
                    if let Some(value) = self.$field {
                        branch.$field = value;
                    }
                )+
            }

            pub fn is_empty(&self) -> bool {
                $(self.$field.is_none())&&+
            }
        }
    };
}

branch_patch!(HeroPatch => Hero {
    avatar: Option<String>,
    name: String,
    tagline: String,
    bio: String,
    cta_label: String,
    prefix: Option<String>,
    stat2_description: Option<String>,
});

branch_patch!(AboutPatch => About {
    heading: Option<String>,
    column1: Option<String>,
    column2: Option<String>,
    tags: Option<Vec<String>>,
});

branch_patch!(ContactPatch => Contact {
    title: String,
    cta_label: String,
    note: String,
});

branch_patch!(AppearancePatch => Appearance {
    primary_color: String,
    secondary_color: String,
    text_color: Option<String>,
    font_family: String,
    layout_style: String,
    spacing: String,
    background_color: Option<String>,
});

branch_patch!(BrandingPatch => Branding {
    logo: Option<String>,
    logo_text: Option<String>,
    banner: Option<String>,
    hide_logo: Option<bool>,
});

branch_patch!(BehaviorPatch => Behavior {
    is_public: bool,
    enable_hire_me: bool,
    enable_book_call: bool,
    enable_view_services: bool,
    contact_destination: String,
});

branch_patch!(SeoPatch => Seo {
    meta_title: String,
    meta_description: String,
    social_image: Option<String>,
});

branch_patch!(FooterPatch => Footer {
    company_name: String,
    copyright_text: Option<String>,
});

branch_patch!(SectionHeadersPatch => SectionHeaders {
    services: Option<String>,
    projects: Option<String>,
    testimonials: Option<String>,
});

/// Top-level fields of the document, named as they appear in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Hero,
    About,
    Services,
    Projects,
    Testimonials,
    Contact,
    ContactItems,
    SocialLinks,
    Appearance,
    Modules,
    ModulesOrder,
    Branding,
    Behavior,
    Seo,
    Footer,
    SectionHeaders,
}

impl Branch {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Services => "services",
            Self::Projects => "projects",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
            Self::ContactItems => "contactItems",
            Self::SocialLinks => "socialLinks",
            Self::Appearance => "appearance",
            Self::Modules => "modules",
            Self::ModulesOrder => "modulesOrder",
            Self::Branding => "branding",
            Self::Behavior => "behavior",
            Self::Seo => "seo",
            Self::Footer => "footer",
            Self::SectionHeaders => "sectionHeaders",
        }
    }

    /// Object branches merge field by field; the rest are replaced wholesale.
    pub const fn merges_fields(self) -> bool {
        matches!(
            self,
            Self::Hero
                | Self::About
                | Self::Contact
                | Self::Appearance
                | Self::Branding
                | Self::Behavior
                | Self::Seo
                | Self::Footer
                | Self::SectionHeaders
        )
    }
}

/// A partial update: each present branch is merged (object branches) or
/// replaced (arrays and the `modules` map); absent branches are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_items: Option<Vec<ContactItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<AppearancePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Modules>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules_order: Option<Vec<SectionKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<BrandingPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<BehaviorPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_headers: Option<SectionHeadersPatch>,
}

impl PartialDocument {
    pub fn hero(patch: HeroPatch) -> Self {
        Self {
            hero: Some(patch),
            ..Self::default()
        }
    }

    pub fn services(services: Vec<Service>) -> Self {
        Self {
            services: Some(services),
            ..Self::default()
        }
    }

    pub fn projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Some(projects),
            ..Self::default()
        }
    }

    pub fn testimonials(testimonials: Vec<Testimonial>) -> Self {
        Self {
            testimonials: Some(testimonials),
            ..Self::default()
        }
    }

    pub fn contact_items(contact_items: Vec<ContactItem>) -> Self {
        Self {
            contact_items: Some(contact_items),
            ..Self::default()
        }
    }

    pub fn social_links(social_links: Vec<SocialLink>) -> Self {
        Self {
            social_links: Some(social_links),
            ..Self::default()
        }
    }

    /// Branches present in this update, in document order.
    pub fn branches(&self) -> Vec<Branch> {
        [
            (self.hero.is_some(), Branch::Hero),
            (self.about.is_some(), Branch::About),
            (self.services.is_some(), Branch::Services),
            (self.projects.is_some(), Branch::Projects),
            (self.testimonials.is_some(), Branch::Testimonials),
            (self.contact.is_some(), Branch::Contact),
            (self.contact_items.is_some(), Branch::ContactItems),
            (self.social_links.is_some(), Branch::SocialLinks),
            (self.appearance.is_some(), Branch::Appearance),
            (self.modules.is_some(), Branch::Modules),
            (self.modules_order.is_some(), Branch::ModulesOrder),
            (self.branding.is_some(), Branch::Branding),
            (self.behavior.is_some(), Branch::Behavior),
            (self.seo.is_some(), Branch::Seo),
            (self.footer.is_some(), Branch::Footer),
            (self.section_headers.is_some(), Branch::SectionHeaders),
        ]
        .into_iter()
        .filter_map(|(present, branch)| present.then_some(branch))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.branches().is_empty()
    }
}
