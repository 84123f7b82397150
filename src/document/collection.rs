use super::model::{ContactItem, Document, Project, Service, SocialLink, Testimonial};
use super::patch::PartialDocument;

/// An element of one of the document's array branches.
///
/// Arrays are always replaced wholesale, so every helper here reads the current
/// array, builds the full replacement, and wraps it as a partial update.
pub trait CollectionItem: Clone + Sized {
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn items(document: &Document) -> &[Self];
    fn into_partial(items: Vec<Self>) -> PartialDocument;
}

macro_rules! collection_item {
    ($item:ty, $prefix:literal, $field:ident, $ctor:ident) => {
        impl CollectionItem for $item {
            const ID_PREFIX: &'static str = $prefix;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn items(document: &Document) -> &[Self] {
                &document.$field
            }

            fn into_partial(items: Vec<Self>) -> PartialDocument {
                PartialDocument::$ctor(items)
            }
        }
    };
}

collection_item!(Service, "service", services, services);
collection_item!(Project, "project", projects, projects);
collection_item!(Testimonial, "testimonial", testimonials, testimonials);
collection_item!(ContactItem, "contact", contact_items, contact_items);
collection_item!(SocialLink, "social", social_links, social_links);

/// Next free `<prefix>-<n>` id, one past the highest numeric suffix in use.
pub fn next_id<T: CollectionItem>(document: &Document) -> String {
    let highest = T::items(document)
        .iter()
        .filter_map(|item| {
            item.id()
                .rsplit_once('-')
                .and_then(|(_, suffix)| suffix.parse::<u64>().ok())
        })
        .max()
        .unwrap_or(0);
    format!("{}-{}", T::ID_PREFIX, highest.saturating_add(1))
}

/// Appends `item`, assigning a fresh id when it has none or its id is taken.
pub fn added<T: CollectionItem>(document: &Document, mut item: T) -> PartialDocument {
    let items = T::items(document);
    if item.id().is_empty() || items.iter().any(|existing| existing.id() == item.id()) {
        item.set_id(next_id::<T>(document));
    }
    let mut replacement = items.to_vec();
    replacement.push(item);
    T::into_partial(replacement)
}

/// Rewrites the element with `id`. Returns `None` when no element matches.
pub fn updated<T, F>(document: &Document, id: &str, edit: F) -> Option<PartialDocument>
where
    T: CollectionItem,
    F: FnOnce(&mut T),
{
    let mut replacement = T::items(document).to_vec();
    let target = replacement.iter_mut().find(|item| item.id() == id)?;
    edit(target);
    Some(T::into_partial(replacement))
}

/// Drops the element with `id`. Returns `None` when no element matches.
pub fn removed<T: CollectionItem>(document: &Document, id: &str) -> Option<PartialDocument> {
    let items = T::items(document);
    if !items.iter().any(|item| item.id() == id) {
        return None;
    }
    let replacement = items.iter().filter(|item| item.id() != id).cloned().collect();
    Some(T::into_partial(replacement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::presets::TemplatePreset;
    use crate::document::store::DocumentStore;

    #[test]
    fn removing_by_id_keeps_the_other_elements_in_order() {
        let mut store = DocumentStore::new(TemplatePreset::Minimalist.document());
        let before: Vec<String> = store.document().services.iter().map(|s| s.id.clone()).collect();

        let partial = removed::<Service>(store.document(), "sample-2").expect("service exists");
        let after = store.apply(partial);

        let ids: Vec<&str> = after.services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![before[0].as_str(), before[2].as_str()]);
    }

    #[test]
    fn unknown_id_yields_no_update() {
        let document = TemplatePreset::Aura.document();
        assert!(removed::<Project>(&document, "missing").is_none());
        assert!(updated::<Project, _>(&document, "missing", |_| {}).is_none());
    }

    #[test]
    fn added_item_gets_a_fresh_id_when_its_id_collides() {
        let document = TemplatePreset::Aura.document();
        let item = Testimonial {
            id: "testimonial-1".to_string(),
            author: "New".to_string(),
            ..Testimonial::default()
        };

        let partial = added(&document, item);
        let testimonials = partial.testimonials.expect("testimonials replaced");
        assert_eq!(testimonials.len(), document.testimonials.len() + 1);
        let last = testimonials.last().expect("appended");
        assert_eq!(last.id, "testimonial-3");
        assert_eq!(last.author, "New");
    }

    #[test]
    fn updated_produces_the_full_replacement_array() {
        let document = TemplatePreset::Shift.document();
        let partial = updated::<SocialLink, _>(&document, "social-2", |link| {
            link.url = "https://example.org".to_string();
        })
        .expect("link exists");

        let links = partial.social_links.expect("social links replaced");
        assert_eq!(links.len(), document.social_links.len());
        assert_eq!(links[1].url, "https://example.org");
        assert_eq!(links[0], document.social_links[0]);
    }

    #[test]
    fn next_id_ignores_non_numeric_suffixes() {
        let mut document = TemplatePreset::Aura.document();
        document.contact_items[0].id = "contact-primary".to_string();
        assert_eq!(next_id::<ContactItem>(&document), "contact-3");
    }

    #[test]
    fn next_id_saturates_at_the_largest_suffix() {
        let mut document = TemplatePreset::Shift.document();
        document.social_links[0].id = format!("social-{}", u64::MAX);
        assert_eq!(
            next_id::<SocialLink>(&document),
            format!("social-{}", u64::MAX)
        );
    }
}
