//! Generation options.

use coredts_schema::Documented;

/// Options controlling declaration generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    omit_deprecated: bool,
}

impl GeneratorOptions {
    /// Creates options with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            omit_deprecated: true,
        }
    }

    /// Sets whether deprecated entities and members are left out.
    #[must_use]
    pub const fn omit_deprecated(mut self, omit: bool) -> Self {
        self.omit_deprecated = omit;
        self
    }

    /// Returns true if deprecated items are left out.
    #[must_use]
    pub const fn omits_deprecated(&self) -> bool {
        self.omit_deprecated
    }

    /// Returns true if the item must not be emitted.
    #[must_use]
    pub fn skips(&self, item: &impl Documented) -> bool {
        self.omit_deprecated && item.is_deprecated()
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::new()
    }
}
