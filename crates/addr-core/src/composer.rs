//! The compose entry point.

use addr_model::RawComponents;
use addr_standards::{ConfigStore, StandardsError, embedded_store};

use crate::cleaner::{clean, postformat_replace, tidy_rendered};
use crate::context::ComponentContext;
use crate::normalize::{Normalized, Normalizer};

/// Formats addresses against one configuration store.
///
/// The composer holds no per-call state; one instance can serve any number
/// of threads.
#[derive(Debug, Clone, Copy)]
pub struct AddressComposer<'a> {
    normalizer: Normalizer<'a>,
}

impl<'a> AddressComposer<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self {
            normalizer: Normalizer::new(store),
        }
    }

    /// Normalize without rendering.
    pub fn normalize(&self, raw: &RawComponents) -> Normalized<'a> {
        self.normalizer.normalize(raw)
    }

    /// Format one address.
    ///
    /// With a country code the country's template is rendered and cleaned;
    /// without one the canonical values are joined with spaces and cleaned.
    /// Non-empty output ends with a single newline.
    pub fn compose(&self, raw: &RawComponents) -> String {
        let normalized = self.normalize(raw);
        let components = &normalized.components;

        let Some(country_code) = components.country_code() else {
            let joined = components
                .iter()
                .map(|(_, value)| value)
                .collect::<Vec<_>>()
                .join(" ");
            return clean(&joined);
        };

        let template = normalized.chain.template_for(components);
        tracing::debug!(
            country_code,
            effective_country = %normalized.effective_country,
            inherited = normalized.chain.is_inherited(),
            has_template = template.is_some(),
            "rendering address"
        );
        let rendered = template
            .map(|template| template.render(&ComponentContext(components)))
            .unwrap_or_default();

        let text = clean(&tidy_rendered(&rendered));
        let text = postformat_replace(&text, normalized.chain.postformat_replace());
        clean(&text)
    }
}

/// Format one address with the embedded configuration.
///
/// Countries missing from the embedded rule table use the default template;
/// see [`embedded_store`].
///
/// # Errors
///
/// Fails only if the embedded configuration cannot be loaded.
pub fn compose(raw: &RawComponents) -> Result<String, StandardsError> {
    Ok(AddressComposer::new(embedded_store()?).compose(raw))
}
