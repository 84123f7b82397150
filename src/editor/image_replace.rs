use crate::crop::{
    decode_image, CropRequest, CropResult, CropSession, NoopPointerTracking, PointerTracking,
    RasterOptions,
};
use crate::document::collection;
use crate::document::model::{Document, Project};
use crate::document::patch::{BrandingPatch, HeroPatch, SeoPatch};
use crate::document::{PartialDocument, TemplatePreset};
use crate::geometry::Size;

/// Image locations in the document that can be replaced with a cropped upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    HeroAvatar,
    ProjectCover(String),
    BrandingLogo,
    BrandingBanner,
    SeoSocialImage,
}

impl ImageSlot {
    /// The hero image is pinned to the template's output size; every other slot
    /// crops a square at the source's own resolution.
    pub fn crop_request(&self, preset: TemplatePreset) -> CropRequest {
        match self {
            Self::HeroAvatar => {
                let size = preset.hero_crop_size();
                CropRequest::pinned(size.width, size.height)
            }
            _ => CropRequest::default(),
        }
    }

    pub fn current<'a>(&self, document: &'a Document) -> Option<&'a str> {
        match self {
            Self::HeroAvatar => document.hero.avatar.as_deref(),
            Self::ProjectCover(id) => document
                .projects
                .iter()
                .find(|project| &project.id == id)?
                .cover_image
                .as_deref(),
            Self::BrandingLogo => document.branding.logo.as_deref(),
            Self::BrandingBanner => document.branding.banner.as_deref(),
            Self::SeoSocialImage => document.seo.social_image.as_deref(),
        }
    }

    /// Partial update storing `payload` in this slot. `None` when the slot
    /// addresses a project that no longer exists.
    pub fn replacement(&self, document: &Document, payload: String) -> Option<PartialDocument> {
        let partial = match self {
            Self::HeroAvatar => PartialDocument::hero(HeroPatch {
                avatar: Some(Some(payload)),
                ..HeroPatch::default()
            }),
            Self::ProjectCover(id) => collection::updated::<Project, _>(document, id, |project| {
                project.cover_image = Some(payload);
            })?,
            Self::BrandingLogo => PartialDocument {
                branding: Some(BrandingPatch {
                    logo: Some(Some(payload)),
                    ..BrandingPatch::default()
                }),
                ..PartialDocument::default()
            },
            Self::BrandingBanner => PartialDocument {
                branding: Some(BrandingPatch {
                    banner: Some(Some(payload)),
                    ..BrandingPatch::default()
                }),
                ..PartialDocument::default()
            },
            Self::SeoSocialImage => PartialDocument {
                seo: Some(SeoPatch {
                    social_image: Some(Some(payload)),
                    ..SeoPatch::default()
                }),
                ..PartialDocument::default()
            },
        };
        Some(partial)
    }
}

/// A crop session opened for one image slot.
#[derive(Debug)]
pub struct ImageReplace<P: PointerTracking = NoopPointerTracking> {
    slot: ImageSlot,
    session: CropSession<P>,
}

impl ImageReplace<NoopPointerTracking> {
    pub fn open(slot: ImageSlot, preset: TemplatePreset, options: RasterOptions) -> Self {
        Self::with_tracker(slot, preset, options, NoopPointerTracking)
    }
}

impl<P: PointerTracking> ImageReplace<P> {
    pub fn with_tracker(
        slot: ImageSlot,
        preset: TemplatePreset,
        options: RasterOptions,
        tracker: P,
    ) -> Self {
        let session =
            CropSession::with_tracker(slot.crop_request(preset), tracker).with_raster_options(options);
        Self { slot, session }
    }

    pub fn slot(&self) -> &ImageSlot {
        &self.slot
    }

    pub fn session(&self) -> &CropSession<P> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut CropSession<P> {
        &mut self.session
    }

    /// Decodes a user-selected file. A decode failure leaves the session closed.
    pub fn load_file(&mut self, bytes: &[u8], container: Size) -> CropResult<()> {
        let image = decode_image(bytes)?;
        self.session.load(image, container)
    }

    /// Commits the crop and builds the update for the slot. Nothing is produced
    /// when extraction fails, so the document is never touched on failure.
    pub fn commit(&mut self, document: &Document) -> CropResult<Option<PartialDocument>> {
        let mut payload = None;
        self.session.commit(|encoded| payload = Some(encoded))?;
        let partial = payload.and_then(|encoded| self.slot.replacement(document, encoded));
        if partial.is_none() {
            tracing::warn!(slot = ?self.slot, "cropped image has no target in the document");
        }
        Ok(partial)
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::{decode_data_url, CropError, OutputSize};
    use crate::state::CropPhase;
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, image::Rgba([20, 40, 60, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode fixture");
        bytes
    }

    #[test]
    fn hero_slot_pins_the_template_size() {
        let request = ImageSlot::HeroAvatar.crop_request(TemplatePreset::Shift);
        assert_eq!(request.output_size, Some(OutputSize::new(800, 1000)));
        let cover = ImageSlot::ProjectCover("project-1".to_string())
            .crop_request(TemplatePreset::Shift);
        assert_eq!(cover.output_size, None);
        assert_eq!(cover.target_aspect().ratio(), 1.0);
    }

    #[test]
    fn hero_replace_produces_a_pinned_avatar_update() {
        let document = TemplatePreset::Aura.document();
        let mut replace =
            ImageReplace::open(ImageSlot::HeroAvatar, TemplatePreset::Aura, RasterOptions::default());
        replace
            .load_file(&png_bytes(300, 200), Size::new(600.0, 400.0))
            .expect("load");

        let partial = replace.commit(&document).expect("commit").expect("hero update");
        let avatar = partial
            .hero
            .and_then(|hero| hero.avatar)
            .flatten()
            .expect("avatar payload");
        let decoded = decode_data_url(&avatar).expect("payload decodes");
        assert_eq!(
            decoded.natural_size(),
            Size::new(1200.0, 600.0)
        );
        assert_eq!(replace.session().phase(), CropPhase::Closed);
    }

    #[test]
    fn project_cover_replace_rebuilds_the_projects_array() {
        let document = TemplatePreset::Aura.document();
        let slot = ImageSlot::ProjectCover("project-2".to_string());
        let partial = slot
            .replacement(&document, "data:image/png;base64,AAAA".to_string())
            .expect("project exists");
        let projects = partial.projects.expect("projects replaced");
        assert_eq!(projects.len(), document.projects.len());
        assert_eq!(
            projects[1].cover_image.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert_eq!(projects[0], document.projects[0]);
    }

    #[test]
    fn undecodable_file_keeps_the_session_closed() {
        let mut replace = ImageReplace::open(
            ImageSlot::BrandingLogo,
            TemplatePreset::Aura,
            RasterOptions::default(),
        );
        let err = replace
            .load_file(b"not an image", Size::new(400.0, 400.0))
            .expect_err("decode failure");
        assert!(matches!(err, CropError::Decode { .. }));
        assert_eq!(replace.session().phase(), CropPhase::Closed);
    }

    #[test]
    fn slot_reads_current_image() {
        let mut document = TemplatePreset::Aura.document();
        document.seo.social_image = Some("og.png".to_string());
        assert_eq!(ImageSlot::SeoSocialImage.current(&document), Some("og.png"));
        assert_eq!(ImageSlot::BrandingBanner.current(&document), None);
        assert!(ImageSlot::HeroAvatar.current(&document).is_some());
    }
}
