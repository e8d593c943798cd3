//! # Encoding Registry

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    encoding::Encoding,
    errors::TBResult,
    pretrained::{VocabDescriptor, model_resolver::vocab_for_model, vocab_by_name},
    resources::VocabResourceLoader,
    types::TBHashMap,
};

/// Lazily loads, and then shares, one [`Encoding`] per vocabulary.
///
/// The map lock is only held for lookups and inserts, never across a load;
/// two threads racing on the first load of one vocabulary may both load it,
/// and the first to insert wins.
#[derive(Debug)]
pub struct EncodingRegistry {
    loader: VocabResourceLoader,
    encodings: Mutex<TBHashMap<&'static str, Arc<Encoding>>>,
}

impl EncodingRegistry {
    /// Create an empty registry over `loader`.
    pub fn new(loader: VocabResourceLoader) -> Self {
        Self {
            loader,
            encodings: Mutex::new(TBHashMap::default()),
        }
    }

    /// The resource loader.
    pub fn loader(&self) -> &VocabResourceLoader {
        &self.loader
    }

    /// The names of the vocabularies loaded so far.
    pub fn loaded_vocabs(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.encodings.lock().keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Get the encoding for `descriptor`, loading it on first use.
    pub fn encoding_for_vocab(
        &self,
        descriptor: &'static VocabDescriptor,
    ) -> TBResult<Arc<Encoding>> {
        if let Some(encoding) = self.encodings.lock().get(descriptor.name) {
            return Ok(encoding.clone());
        }

        let ranks = self.loader.load_ranks(descriptor)?;
        let encoding = Arc::new(Encoding::from_descriptor(descriptor, ranks)?);
        log::debug!(
            "loaded {} ({} ranks)",
            descriptor.name,
            encoding.rank_table().len()
        );

        Ok(self
            .encodings
            .lock()
            .entry(descriptor.name)
            .or_insert(encoding)
            .clone())
    }

    /// Get the encoding for a cataloged vocabulary name.
    ///
    /// ## Returns
    /// `Ok(None)` if the name is not cataloged.
    pub fn encoding_for_vocab_name(
        &self,
        name: &str,
    ) -> TBResult<Option<Arc<Encoding>>> {
        vocab_by_name(name)
            .map(|descriptor| self.encoding_for_vocab(descriptor))
            .transpose()
    }

    /// Get the encoding for a model name.
    ///
    /// ## Returns
    /// `Ok(None)` if the model is unknown.
    pub fn encoding_for_model(
        &self,
        model: &str,
    ) -> TBResult<Option<Arc<Encoding>>> {
        vocab_for_model(model)
            .map(|descriptor| self.encoding_for_vocab(descriptor))
            .transpose()
    }
}

/// Get the encoding for a model name, from a process-wide registry over
/// the default disk cache.
///
/// ## Returns
/// * `Ok(Some(encoding))` - on success.
/// * `Ok(None)` - if the model is unknown.
/// * `Err(e)` - if the cache could not be set up, or the vocabulary failed to load.
#[cfg(feature = "download")]
pub fn encoding_for_model(model: &str) -> TBResult<Option<Arc<Encoding>>> {
    static REGISTRY: once_cell::sync::OnceCell<EncodingRegistry> =
        once_cell::sync::OnceCell::new();

    REGISTRY
        .get_or_try_init(|| {
            VocabResourceLoader::with_default_disk_cache().map(EncodingRegistry::new)
        })?
        .encoding_for_model(model)
}
