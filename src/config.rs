/// Continuation bytes ahead of the first lead byte.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OrphanPrefix {
    #[default]
    Discard,
    Reject,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    pub validate_input: bool,
    pub orphan_prefix: OrphanPrefix,
}

impl CodecConfig {
    pub const fn strict() -> Self {
        Self {
            validate_input: true,
            orphan_prefix: OrphanPrefix::Reject,
        }
    }

    pub const fn with_validate_input(mut self, validate_input: bool) -> Self {
        self.validate_input = validate_input;
        self
    }

    pub const fn with_orphan_prefix(mut self, orphan_prefix: OrphanPrefix) -> Self {
        self.orphan_prefix = orphan_prefix;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient() {
        let config = CodecConfig::default();
        assert!(!config.validate_input);
        assert_eq!(config.orphan_prefix, OrphanPrefix::Discard);
    }

    #[test]
    fn builders() {
        let config = CodecConfig::default().with_orphan_prefix(OrphanPrefix::Reject);
        assert!(!config.validate_input);
        assert_eq!(config.orphan_prefix, OrphanPrefix::Reject);
        assert_eq!(
            CodecConfig::default()
                .with_validate_input(true)
                .with_orphan_prefix(OrphanPrefix::Reject),
            CodecConfig::strict()
        );
    }
}
