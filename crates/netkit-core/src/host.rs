//! Where the caller is running

/// Whether the caller is embedded in the host editor or running standalone.
///
/// Supplied once by the caller at startup; nothing in this crate probes the
/// environment to find out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostContext {
    embedded: bool,
}

impl HostContext {
    pub fn new(embedded: bool) -> Self {
        Self { embedded }
    }

    pub fn standalone() -> Self {
        Self::new(false)
    }

    pub fn embedded() -> Self {
        Self::new(true)
    }

    /// True when results go back to the host bridge rather than a person
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }
}
