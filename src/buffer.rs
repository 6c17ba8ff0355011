//! Buffers for documents that collect values from many calls.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    document::{
        lang::Lang,
        tag::{Tag, TagType, TagValue},
        Document, DocumentKind, DocumentPath,
    },
    location::ResourceLocation,
};

/// Tags and translations waiting to be flushed.
///
/// Each tag is keyed by its type and location, each language file by a location made of
/// its domain and language. Flushing yields one document per key, in key order, and empties the buffers.
#[derive(Debug, Clone, Default)]
pub struct AggregationBuffers {
    tags: BTreeMap<(TagType, ResourceLocation), Tag>,
    langs: BTreeMap<ResourceLocation, Lang>,
}

impl AggregationBuffers {
    /// Create empty buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.langs.is_empty()
    }

    /// Get a buffered tag.
    #[must_use]
    pub fn tag(&self, tag_type: &TagType, location: &ResourceLocation) -> Option<&Tag> {
        self.tags.get(&(tag_type.clone(), location.clone()))
    }

    /// Get a buffered language file.
    #[must_use]
    pub fn lang(&self, location: &ResourceLocation) -> Option<&Lang> {
        self.langs.get(location)
    }

    /// Add values to a tag, creating it if it is not buffered yet.
    pub fn contribute_tag(
        &mut self,
        tag_type: TagType,
        location: ResourceLocation,
        values: Vec<TagValue>,
        replace: bool,
    ) {
        tracing::trace!("Adding {} values to {tag_type} tag {location}", values.len());
        self.tags
            .entry((tag_type, location))
            .or_default()
            .contribute(values, replace);
    }

    /// Add translations to a language file, creating it if it is not buffered yet.
    pub fn contribute_lang(&mut self, location: ResourceLocation, entries: Map<String, Value>) {
        tracing::trace!("Adding {} translations to {location}", entries.len());
        self.langs.entry(location).or_default().contribute(entries);
    }

    /// Compile every buffered tag and language file and empty the buffers.
    #[must_use]
    pub fn drain(&mut self, pack_format: u8) -> Vec<(DocumentPath, Document)> {
        let tags = std::mem::take(&mut self.tags);
        let langs = std::mem::take(&mut self.langs);

        let mut documents = Vec::with_capacity(tags.len() + langs.len());
        for ((tag_type, location), tag) in tags {
            let path = DocumentPath::new(&DocumentKind::Tag(tag_type), &location, pack_format);
            documents.push((path, tag.compile()));
        }
        for (location, lang) in langs {
            let path = DocumentPath::new(&DocumentKind::Lang, &location, pack_format);
            documents.push((path, lang.compile()));
        }
        documents
    }
}
