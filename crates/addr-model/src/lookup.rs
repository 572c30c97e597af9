use std::collections::HashSet;

/// A set of names compared without regard to case.
///
/// Uppercasing is Unicode-aware so that names such as `Curaçao` or
/// `Île-de-France` match their uppercased spellings.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveSet {
    keys: HashSet<String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keys: names
                .into_iter()
                .map(|name| name.as_ref().to_uppercase())
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&name.to_uppercase())
    }
}
