use std::fmt;
use std::sync::Arc;

use crate::schema::Schema;
use crate::section::Section;

/// The schemas registered for one route, keyed by request section.
///
/// Sections without a schema are skipped entirely during validation and can
/// never contribute a failure. A `SchemaSet` is immutable once handed to a
/// validator and is shared across in-flight requests without locking.
#[derive(Clone, Default)]
pub struct SchemaSet {
    body: Option<Arc<dyn Schema>>,
    cookies: Option<Arc<dyn Schema>>,
    headers: Option<Arc<dyn Schema>>,
    params: Option<Arc<dyn Schema>>,
    query: Option<Arc<dyn Schema>>,
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(self, schema: impl Schema + 'static) -> Self {
        self.set(Section::Body, schema)
    }

    pub fn cookies(self, schema: impl Schema + 'static) -> Self {
        self.set(Section::Cookies, schema)
    }

    pub fn headers(self, schema: impl Schema + 'static) -> Self {
        self.set(Section::Headers, schema)
    }

    pub fn params(self, schema: impl Schema + 'static) -> Self {
        self.set(Section::Params, schema)
    }

    pub fn query(self, schema: impl Schema + 'static) -> Self {
        self.set(Section::Query, schema)
    }

    /// Register a schema for the given section, replacing any previous one.
    pub fn set(mut self, section: Section, schema: impl Schema + 'static) -> Self {
        let slot = match section {
            Section::Body => &mut self.body,
            Section::Cookies => &mut self.cookies,
            Section::Headers => &mut self.headers,
            Section::Params => &mut self.params,
            Section::Query => &mut self.query,
        };
        *slot = Some(Arc::new(schema));
        self
    }

    pub fn contains(&self, section: Section) -> bool {
        self.get(section).is_some()
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|section| !self.contains(*section))
    }

    pub(crate) fn get(&self, section: Section) -> Option<&Arc<dyn Schema>> {
        match section {
            Section::Body => self.body.as_ref(),
            Section::Cookies => self.cookies.as_ref(),
            Section::Headers => self.headers.as_ref(),
            Section::Params => self.params.as_ref(),
            Section::Query => self.query.as_ref(),
        }
    }
}

impl fmt::Debug for SchemaSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<&str> = Section::ALL
            .iter()
            .filter(|section| self.contains(**section))
            .map(Section::as_str)
            .collect();
        f.debug_struct("SchemaSet").field("sections", &registered).finish()
    }
}
