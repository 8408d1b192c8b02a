/// One `name="value"` line of an `<apn>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApnAttribute {
    pub name: &'static str,
    pub value: String,
}

impl ApnAttribute {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Complete document text plus what went into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub text: String,

    /// Number of `<apn>` blocks written
    pub apn_blocks: usize,
}
