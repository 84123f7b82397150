use serde::{Deserialize, Serialize};

/// The full portfolio content tree edited by the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub hero: Hero,
    #[serde(default)]
    pub about: About,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub contact: Contact,
    pub contact_items: Vec<ContactItem>,
    #[serde(default)]
    pub footer: Footer,
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub section_headers: SectionHeaders,
    pub appearance: Appearance,
    pub modules: Modules,
    pub modules_order: Vec<SectionKind>,
    #[serde(default)]
    pub branding: Branding,
    pub behavior: Behavior,
    pub seo: Seo,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub avatar: Option<String>,
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub cta_label: String,
    pub prefix: Option<String>,
    pub stat2_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub heading: Option<String>,
    pub column1: Option<String>,
    pub column2: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub blurb: String,
    pub price_label: String,
    pub tags: Option<Vec<String>>,
    pub cta_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    pub role: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub title: String,
    pub cta_label: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactItem {
    pub id: String,
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub company_name: String,
    pub copyright_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHeaders {
    pub services: Option<String>,
    pub projects: Option<String>,
    pub testimonials: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: Option<String>,
    pub font_family: String,
    pub layout_style: String,
    pub spacing: String,
    pub background_color: Option<String>,
}

/// Per-section visibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modules {
    pub hero: bool,
    pub about: bool,
    pub services: bool,
    pub projects: bool,
    pub testimonials: bool,
    pub contact: bool,
    pub footer: bool,
}

impl Modules {
    pub const ALL_VISIBLE: Modules = Modules {
        hero: true,
        about: true,
        services: true,
        projects: true,
        testimonials: true,
        contact: true,
        footer: true,
    };
}

impl Default for Modules {
    fn default() -> Self {
        Self::ALL_VISIBLE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    About,
    Services,
    Projects,
    Testimonials,
    Contact,
    Footer,
}

impl SectionKind {
    pub const DEFAULT_ORDER: [SectionKind; 7] = [
        Self::Hero,
        Self::About,
        Self::Services,
        Self::Projects,
        Self::Testimonials,
        Self::Contact,
        Self::Footer,
    ];
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub logo: Option<String>,
    pub logo_text: Option<String>,
    pub banner: Option<String>,
    pub hide_logo: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Behavior {
    pub is_public: bool,
    pub enable_hire_me: bool,
    pub enable_book_call: bool,
    pub enable_view_services: bool,
    pub contact_destination: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
    pub social_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_deserializes_camel_case_json_with_optional_branches_missing() {
        let json = r##"{
            "hero": { "name": "Ada", "tagline": "t", "bio": "b", "ctaLabel": "Hi", "stat2Description": "s" },
            "services": [{ "id": "s1", "title": "T", "blurb": "B", "priceLabel": "$1" }],
            "projects": [],
            "testimonials": [],
            "contact": { "title": "c", "ctaLabel": "Send", "note": "n" },
            "contactItems": [],
            "socialLinks": [],
            "appearance": {
                "primaryColor": "#000", "secondaryColor": "#fff", "fontFamily": "system",
                "layoutStyle": "aura", "spacing": "comfy"
            },
            "modules": {
                "hero": true, "about": false, "services": true, "projects": true,
                "testimonials": true, "contact": true, "footer": true
            },
            "modulesOrder": ["hero", "services"],
            "behavior": {
                "isPublic": false, "enableHireMe": true, "enableBookCall": false,
                "enableViewServices": true, "contactDestination": "leads"
            },
            "seo": { "metaTitle": "m", "metaDescription": "d" }
        }"##;

        let document: Document = serde_json::from_str(json).expect("parse document");
        assert_eq!(document.hero.stat2_description.as_deref(), Some("s"));
        assert_eq!(document.services[0].price_label, "$1");
        assert!(!document.modules.about);
        assert_eq!(
            document.modules_order,
            vec![SectionKind::Hero, SectionKind::Services]
        );
        assert_eq!(document.about, About::default());
        assert_eq!(document.branding, Branding::default());
    }
}
