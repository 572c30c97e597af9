//! Formatting rule resolution.
//!
//! A country resolves to its own rule, optionally followed by the rule of the
//! country named in its `use_country`. Only one level is followed, so
//! resolution terminates whatever the rule data says.

use addr_model::{Component, NormalizedComponents};
use addr_standards::{ConfigStore, FormattingRule, Replacement};
use addr_template::Template;

/// The one or two rules that apply to a country, in application order.
#[derive(Debug, Clone, Copy)]
pub struct RuleChain<'a> {
    primary: &'a FormattingRule,
    inherited: Option<&'a FormattingRule>,
    default_rule: &'a FormattingRule,
}

impl<'a> RuleChain<'a> {
    /// Resolve the chain for a country code. Unknown codes resolve to the
    /// default rule alone; an unknown `use_country` target resolves to the
    /// default rule as the inherited element.
    pub fn resolve(store: &'a ConfigStore, country_code: &str) -> Self {
        let default_rule = store.default_rule();
        let Some(primary) = store.rule(country_code) else {
            tracing::debug!(country = country_code, "no country rule, using default");
            return Self {
                primary: default_rule,
                inherited: None,
                default_rule,
            };
        };
        let inherited = primary.use_country.as_deref().map(|target| {
            tracing::debug!(country = country_code, use_country = target, "inheriting rule");
            store.rule(target).unwrap_or(default_rule)
        });
        Self {
            primary,
            inherited,
            default_rule,
        }
    }

    /// Rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = &'a FormattingRule> + use<'a> {
        std::iter::once(self.primary).chain(self.inherited)
    }

    /// Whether the primary rule named a `use_country`, so a second rule follows.
    pub fn is_inherited(&self) -> bool {
        self.inherited.is_some()
    }

    /// The rule that supplies the template and post-format substitutions.
    pub fn last(&self) -> &'a FormattingRule {
        self.inherited.unwrap_or(self.primary)
    }

    /// Pick the template for a set of components.
    ///
    /// Components with a `road` or `postcode` use the address template;
    /// anything less specific uses a fallback template. Missing templates on
    /// the selected rule fall back to the default rule's.
    pub fn template_for(&self, components: &NormalizedComponents) -> Option<&'a Template> {
        let last = self.last();
        if components.contains(Component::Road) || components.contains(Component::Postcode) {
            last.address_template
                .as_ref()
                .or(self.default_rule.address_template.as_ref())
        } else {
            last.fallback_template
                .as_ref()
                .or(self.default_rule.fallback_template.as_ref())
        }
    }

    /// Substitutions applied to the rendered text.
    pub fn postformat_replace(&self) -> &'a [Replacement] {
        &self.last().postformat_replace
    }
}
