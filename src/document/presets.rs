use serde::{Deserialize, Serialize};

use super::model::{
    About, Appearance, Behavior, Branding, Contact, ContactItem, Document, Footer, Hero, Modules,
    Project, SectionHeaders, SectionKind, Seo, Service, SocialLink, Testimonial,
};
use crate::crop::OutputSize;

/// Starting documents offered when a new portfolio is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplatePreset {
    #[default]
    Aura,
    Minimalist,
    Shift,
    Innovate,
}

struct PresetCopy {
    hero: [&'static str; 5],
    stat2_description: Option<&'static str>,
    avatar: &'static str,
    about_heading: &'static str,
    about_tags: &'static [&'static str],
    services: &'static [(&'static str, &'static str, &'static str)],
    projects: &'static [(&'static str, &'static str)],
    testimonials: &'static [(&'static str, &'static str, &'static str)],
    contact: [&'static str; 3],
    email: &'static str,
    location: &'static str,
    company_name: &'static str,
    section_headers: [&'static str; 3],
    colors: [&'static str; 3],
    enable_book_call: bool,
    seo: [&'static str; 2],
}

const AURA: PresetCopy = PresetCopy {
    hero: [
        "Your Name",
        "a Visual Designer living in Munich",
        "As a Senior Designer with over 10 years of experience, I specialize in creating intuitive and user-centered interfaces.",
        "Get In Touch",
        "About me,",
    ],
    stat2_description: None,
    avatar: "/uiuxdesigner.jpg",
    about_heading: "I'm the UI/UX and brand designer you need to take your digital presence to the next level",
    about_tags: &["UI DESIGN", "UX DESIGN", "PROTOTYPING", "BRANDING"],
    services: &[
        ("UI/UX Design", "Creating beautiful and intuitive user interfaces.", "Starting at $2,500"),
        ("Brand Identity", "Developing cohesive brand identities that tell your story.", "Starting at $3,500"),
        ("Web Development", "Building responsive and performant websites.", "Starting at $5,000"),
    ],
    projects: &[
        ("E-Commerce Platform", "A modern e-commerce platform with seamless user experience."),
        ("Mobile Banking App", "Intuitive mobile banking application with focus on security."),
    ],
    testimonials: &[
        ("Sarah Johnson", "CEO, TechStart Inc", "Working with this designer was an absolute pleasure."),
        ("Michael Chen", "Product Manager, InnovateCo", "The attention to detail brought our vision to life."),
    ],
    contact: [
        "Let's Work Together",
        "Send Message",
        "I'm always open to new opportunities and collaborations.",
    ],
    email: "hello@example.com",
    location: "New York, NY",
    company_name: "My Company",
    section_headers: ["What I Do", "Selected Work", "Client Testimonials"],
    colors: ["#000000", "#1f2937", "#ffffff"],
    enable_book_call: false,
    seo: ["My Portfolio - Aura", "Explore my work and services"],
};

const MINIMALIST: PresetCopy = PresetCopy {
    hero: [
        "Your Name",
        "Full-Stack Developer & Tech Enthusiast",
        "Building scalable web applications and elegant solutions.",
        "Get In Touch",
        "Hi, I'm",
    ],
    stat2_description: None,
    avatar: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=800&auto=format&fit=crop",
    about_heading: "My Journey in Software Development",
    about_tags: &["REACT", "NODE.JS", "TYPESCRIPT", "POSTGRESQL"],
    services: &[
        ("Full-Stack Web Apps", "Custom web applications built on modern cloud infrastructure.", "Starting at $8,000"),
        ("API Development", "RESTful and GraphQL APIs designed for performance.", "Starting at $4,500"),
        ("Technical Consulting", "Architecture reviews, code audits, and technical strategy.", "Starting at $200/hour"),
    ],
    projects: &[
        ("SaaS Analytics Platform", "Real-time analytics dashboard processing millions of events daily."),
        ("Healthcare API Gateway", "HIPAA-compliant API gateway handling 10M+ requests/day."),
        ("Open Source Component Library", "Accessible React component library with 50+ components."),
    ],
    testimonials: &[
        ("Jennifer Martinez", "CTO, HealthTech Solutions", "Exceptional technical skills combined with clear communication."),
        ("David Thompson", "VP Engineering, DataFlow Inc", "One of the best developers I've worked with."),
        ("Lisa Chen", "Founder, StartupLab", "Took our MVP from concept to production in 8 weeks."),
    ],
    contact: [
        "Let's Build Something",
        "Send Message",
        "Available for freelance projects and technical consulting.",
    ],
    email: "dev@example.com",
    location: "San Francisco, CA",
    company_name: "My Portfolio",
    section_headers: ["Services & Expertise", "Featured Projects", "Client Feedback"],
    colors: ["#000000", "#1f2937", "#f5f5f0"],
    enable_book_call: false,
    seo: ["My Portfolio - Minimalist", "Explore my work and services"],
};

const SHIFT: PresetCopy = PresetCopy {
    hero: [
        "Alex Rivera",
        "CREATIVE DESIGNER",
        "I SUPPORT BRANDS AND AGENCIES WITH CREATIVE DESIGN AND ART DIRECTION",
        "Get In Touch",
        "Currently freelancing",
    ],
    stat2_description: None,
    avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=800&auto=format&fit=crop",
    about_heading: "ABOUT ME",
    about_tags: &["GRAPHIC DESIGN", "BRANDING", "ART DIRECTION", "TYPOGRAPHY"],
    services: &[
        ("Brand Identity Design", "Complete brand identity systems and guidelines.", "Starting at $5,000"),
        ("Art Direction & Creative Strategy", "Strategic creative direction for campaigns and photoshoots.", "Starting at $3,500"),
        ("Print & Editorial Design", "Magazines, books, packaging and posters.", "Starting at $2,000"),
    ],
    projects: &[
        ("LUXE Fashion Brand Identity", "Complete rebrand for a luxury fashion startup."),
        ("NOVO Tech Rebrand", "Art direction and brand identity for a B2B tech platform."),
        ("TERRA Editorial Magazine", "Creative direction and layout design for a quarterly magazine."),
    ],
    testimonials: &[
        ("Emma Rodriguez", "Creative Director, Vogue House", "An incredibly talented designer with a keen eye for detail."),
        ("Marcus Kim", "Founder, StartupX", "Working with this designer transformed our brand."),
    ],
    contact: [
        "LET'S CONNECT",
        "Send Message",
        "Open to freelance projects and collaborations.",
    ],
    email: "hello@designer.com",
    location: "London, United Kingdom",
    company_name: "Design Studio",
    section_headers: ["WHAT I DO", "SELECTED WORK", "CLIENT WORDS"],
    colors: ["#1a1a1a", "#1a1a1a", "#d4cfc4"],
    enable_book_call: false,
    seo: ["My Portfolio - Shift", "Creative designer portfolio"],
};

const INNOVATE: PresetCopy = PresetCopy {
    hero: [
        "Creative Brand",
        "Management Studio",
        "15+",
        "Years Experience",
        "85+",
    ],
    stat2_description: Some("Successful Projects"),
    avatar: "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?w=1400&auto=format&fit=crop",
    about_heading: "We build brands that people remember",
    about_tags: &["BRAND STRATEGY", "VISUAL IDENTITY", "DIGITAL MARKETING"],
    services: &[
        ("Brand Strategy", "Positioning and messaging that sets your brand apart.", "Starting at $6,000"),
        ("Visual Identity", "Logos, type and colour systems built to scale.", "Starting at $4,000"),
        ("Digital Marketing", "Campaigns that turn attention into customers.", "Starting at $3,000"),
    ],
    projects: &[
        ("Aurora Rebrand", "A full identity refresh for a growing wellness company."),
        ("Pulse Launch Campaign", "Launch campaign for a consumer fintech product."),
    ],
    testimonials: &[
        ("Olivia Brooks", "Marketing Lead, Aurora", "They understood our brand better than we did."),
        ("James Patel", "CEO, Pulse", "The launch exceeded every target we set."),
    ],
    contact: [
        "Let's Talk",
        "Send Message",
        "Ready to elevate your brand? Let's discuss your vision and create a brand identity that truly stands out.",
    ],
    email: "hello@creativestudio.com",
    location: "New York, NY",
    company_name: "Creative Brand Studio",
    section_headers: ["Our Services", "Recent Cases", "What Clients Say"],
    colors: ["#6366f1", "#1a1a1a", "#ffffff"],
    enable_book_call: true,
    seo: [
        "Creative Brand Management Studio - Transform Your Brand",
        "Award-winning brand strategy and creative design studio specializing in visual identity and digital marketing",
    ],
};

const SECONDARY_COLOR: &str = "#8b5cf6";

impl TemplatePreset {
    pub const ALL: [TemplatePreset; 4] = [Self::Aura, Self::Minimalist, Self::Shift, Self::Innovate];

    pub const fn layout_style(self) -> &'static str {
        match self {
            Self::Aura => "aura",
            Self::Minimalist => "minimalist",
            Self::Shift => "shift",
            Self::Innovate => "innovate",
        }
    }

    pub fn from_layout_style(layout_style: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.layout_style().eq_ignore_ascii_case(layout_style))
    }

    /// Pixel size every hero image crop is rendered at for this template.
    pub const fn hero_crop_size(self) -> OutputSize {
        match self {
            Self::Aura => OutputSize::new(1200, 600),
            Self::Minimalist => OutputSize::new(800, 1066),
            Self::Shift => OutputSize::new(800, 1000),
            Self::Innovate => OutputSize::new(1400, 600),
        }
    }

    fn copy(self) -> &'static PresetCopy {
        match self {
            Self::Aura => &AURA,
            Self::Minimalist => &MINIMALIST,
            Self::Shift => &SHIFT,
            Self::Innovate => &INNOVATE,
        }
    }

    pub fn document(self) -> Document {
        let copy = self.copy();
        let [name, tagline, bio, cta_label, prefix] = copy.hero;
        let [primary_color, text_color, background_color] = copy.colors;
        let [services_header, projects_header, testimonials_header] = copy.section_headers;

        Document {
            hero: Hero {
                avatar: Some(copy.avatar.to_string()),
                name: name.to_string(),
                tagline: tagline.to_string(),
                bio: bio.to_string(),
                cta_label: cta_label.to_string(),
                prefix: Some(prefix.to_string()),
                stat2_description: copy.stat2_description.map(str::to_string),
            },
            about: About {
                heading: Some(copy.about_heading.to_string()),
                column1: None,
                column2: None,
                tags: Some(owned(copy.about_tags)),
            },
            services: copy
                .services
                .iter()
                .enumerate()
                .map(|(index, (title, blurb, price_label))| Service {
                    id: format!("sample-{}", index + 1),
                    title: title.to_string(),
                    blurb: blurb.to_string(),
                    price_label: price_label.to_string(),
                    tags: None,
                    cta_label: Some("Learn More".to_string()),
                })
                .collect(),
            projects: copy
                .projects
                .iter()
                .enumerate()
                .map(|(index, (title, summary))| Project {
                    id: format!("project-{}", index + 1),
                    title: title.to_string(),
                    summary: summary.to_string(),
                    cover_image: None,
                    tags: None,
                    link: Some("https://example.com".to_string()),
                })
                .collect(),
            testimonials: copy
                .testimonials
                .iter()
                .enumerate()
                .map(|(index, (author, role, quote))| Testimonial {
                    id: format!("testimonial-{}", index + 1),
                    author: author.to_string(),
                    role: role.to_string(),
                    quote: quote.to_string(),
                })
                .collect(),
            contact: Contact {
                title: copy.contact[0].to_string(),
                cta_label: copy.contact[1].to_string(),
                note: copy.contact[2].to_string(),
            },
            contact_items: vec![
                contact_item(1, "Mail", "Email", copy.email),
                contact_item(2, "MapPin", "Location", copy.location),
            ],
            footer: Footer {
                company_name: copy.company_name.to_string(),
                copyright_text: Some("All rights reserved".to_string()),
            },
            social_links: [
                ("Instagram", "https://instagram.com"),
                ("Twitter", "https://twitter.com"),
                ("Linkedin", "https://linkedin.com"),
            ]
            .iter()
            .enumerate()
            .map(|(index, (icon, url))| SocialLink {
                id: format!("social-{}", index + 1),
                icon: icon.to_string(),
                url: url.to_string(),
            })
            .collect(),
            section_headers: SectionHeaders {
                services: Some(services_header.to_string()),
                projects: Some(projects_header.to_string()),
                testimonials: Some(testimonials_header.to_string()),
            },
            appearance: Appearance {
                primary_color: primary_color.to_string(),
                secondary_color: SECONDARY_COLOR.to_string(),
                text_color: Some(text_color.to_string()),
                font_family: "system".to_string(),
                layout_style: self.layout_style().to_string(),
                spacing: "comfy".to_string(),
                background_color: Some(background_color.to_string()),
            },
            modules: Modules::ALL_VISIBLE,
            modules_order: SectionKind::DEFAULT_ORDER.to_vec(),
            branding: Branding::default(),
            behavior: Behavior {
                is_public: false,
                enable_hire_me: true,
                enable_book_call: copy.enable_book_call,
                enable_view_services: true,
                contact_destination: "leads".to_string(),
            },
            seo: Seo {
                meta_title: copy.seo[0].to_string(),
                meta_description: copy.seo[1].to_string(),
                social_image: None,
            },
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn contact_item(index: usize, icon: &str, label: &str, value: &str) -> ContactItem {
    ContactItem {
        id: format!("contact-{index}"),
        icon: icon.to_string(),
        label: label.to_string(),
        value: value.to_string(),
    }
}
