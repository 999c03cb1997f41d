//! Field chunker implementation

use super::catalog::{ANALYTICS_FIELDS, DATE_RANGE_FIELD, DEFAULT_CHUNK_SIZE, PIVOT_VALUES_FIELD};

/// One bounded group of fields requested together.
///
/// Always contains `dateRange` and `pivotValues`, so a chunk may carry up to
/// two elements beyond the configured chunk size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChunk {
    fields: Vec<String>,
}

impl FieldChunk {
    /// Fields in this chunk, in catalog order with forced fields appended
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Comma-joined field list for the request parameter
    pub fn to_param(&self) -> String {
        self.fields.join(",")
    }

    /// Number of fields, forced fields included
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the chunk has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Splits an ordered field catalog into contiguous chunks.
///
/// The catalog and chunk size are injected at construction; the chunker
/// holds no hidden iteration state, so [`FieldChunker::chunks`] yields an
/// identical sequence every time it is called.
#[derive(Debug, Clone)]
pub struct FieldChunker {
    catalog: Vec<String>,
    chunk_size: usize,
}

impl Default for FieldChunker {
    fn default() -> Self {
        Self::new(
            ANALYTICS_FIELDS.iter().map(ToString::to_string),
            DEFAULT_CHUNK_SIZE,
        )
    }
}

impl FieldChunker {
    /// Create a chunker over the given catalog.
    ///
    /// `chunk_size` must be positive; a zero size is clamped to 1 rather
    /// than looping forever.
    pub fn new(catalog: impl IntoIterator<Item = String>, chunk_size: usize) -> Self {
        Self {
            catalog: catalog.into_iter().collect(),
            chunk_size: chunk_size.max(1),
        }
    }

    /// Lazily yield contiguous chunks of the catalog, each augmented with
    /// the two forced grouping fields when not already present.
    pub fn chunks(&self) -> impl Iterator<Item = FieldChunk> + '_ {
        self.catalog.chunks(self.chunk_size).map(|run| {
            let mut fields: Vec<String> = run.to_vec();
            if !fields.iter().any(|f| f == DATE_RANGE_FIELD) {
                fields.push(DATE_RANGE_FIELD.to_string());
            }
            if !fields.iter().any(|f| f == PIVOT_VALUES_FIELD) {
                fields.push(PIVOT_VALUES_FIELD.to_string());
            }
            FieldChunk { fields }
        })
    }

    /// The injected catalog, in order
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Configured chunk size (forced fields excluded)
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}
