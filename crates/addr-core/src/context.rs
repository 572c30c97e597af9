use addr_model::NormalizedComponents;
use addr_template::TemplateContext;

/// Template variables backed by normalized components. Canonical names
/// resolve first, then alias names.
#[derive(Debug, Clone, Copy)]
pub struct ComponentContext<'a>(pub &'a NormalizedComponents);

impl TemplateContext for ComponentContext<'_> {
    fn value(&self, name: &str) -> Option<&str> {
        self.0.lookup(name)
    }
}
