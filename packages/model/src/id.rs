use crc32fast::Hasher;

/// Derive a stable seed from a document identifier using CRC32
pub fn document_seed(document_id: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(document_id.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for sections within a document
///
/// IDs are `{seed}-{counter}` so they stay unique per document and stable
/// across serialization. When hydrating an existing document the counter is
/// resumed past the highest suffix already in use.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(document_id: &str) -> Self {
        Self {
            seed: document_seed(document_id),
            count: 0,
        }
    }

    /// Generate the next sequential ID
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Advance the counter past IDs already present in a hydrated document
    pub fn resume_past<'a>(&mut self, existing: impl Iterator<Item = &'a str>) {
        for id in existing {
            if let Some(suffix) = id.strip_prefix(&self.seed).and_then(|s| s.strip_prefix('-')) {
                if let Ok(n) = suffix.parse::<u32>() {
                    self.count = self.count.max(n);
                }
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
