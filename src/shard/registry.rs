//! Shard Registry
//!
//! Resolves (dataset, branch) pairs to on-disk shard locations and hands out
//! scoped writer/reader handles. Handles are acquired per operation and
//! released when dropped; they are never held across requests.

use super::schema::ShardSchema;
use crate::ingestion::types::Document;

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tantivy::collector::TopDocs;
use tantivy::directory::MmapDirectory;
use tantivy::query::{Query, QueryParser};
use tantivy::schema::{OwnedValue, Value};
use tantivy::{Index, IndexWriter, TantivyDocument, Term};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Shard storage root used when no `--index-root` flag is given.
pub const DEFAULT_INDEX_ROOT: &str = "index";

/// Heap size for a shard's index writer.
const WRITER_HEAP_BYTES: usize = 50_000_000;

/// The two-part namespace key addressing one shard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShardId {
    pub dataset: String,
    pub branch: String,
}

impl ShardId {
    pub fn new(dataset: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            branch: branch.into(),
        }
    }
}

impl std::fmt::Display for ShardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.dataset, self.branch)
    }
}

/// Filesystem or engine failures while touching a shard.
#[derive(Debug, thiserror::Error)]
pub enum ShardError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Engine(#[from] tantivy::TantivyError),
}

/// Maps shard ids to locations and owns the per-shard writer locks.
pub struct ShardRegistry {
    root: PathBuf,
    schema: ShardSchema,
    /// One lock per shard. Writers for the same shard queue here; writers
    /// for different shards proceed in parallel.
    write_locks: DashMap<ShardId, Arc<Mutex<()>>>,
}

impl ShardRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            root: root.into(),
            schema: ShardSchema::new(),
            write_locks: DashMap::new(),
        })
    }

    /// Pure path computation: `root/dataset/branch`. Never touches disk.
    pub fn resolve(&self, id: &ShardId) -> PathBuf {
        self.root.join(&id.dataset).join(&id.branch)
    }

    /// Whether the shard has ever been created. A missing shard is not an
    /// error; callers decide what absence means.
    pub fn exists(&self, id: &ShardId) -> bool {
        self.resolve(id).is_dir()
    }

    /// Opens a shard for writing, creating it on first use.
    ///
    /// Create-or-append: existing documents survive a reopen. The returned
    /// handle holds the shard's write lock; a second concurrent writer for
    /// the same shard waits here until the handle is dropped.
    pub async fn open_for_write(&self, id: &ShardId) -> Result<ShardWriter, ShardError> {
        let lock = self
            .write_locks
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock_owned().await;

        let path = self.resolve(id);
        std::fs::create_dir_all(&path)?;
        let index = open_index(&path, &self.schema)?;
        let writer: IndexWriter = index.writer(WRITER_HEAP_BYTES)?;

        Ok(ShardWriter {
            writer,
            fields: self.schema.clone(),
            _guard: guard,
        })
    }

    /// Opens an existing shard for reading.
    ///
    /// Fails only on a genuine I/O or engine error; check [`exists`] first
    /// to distinguish "never indexed" from "unreadable".
    ///
    /// [`exists`]: ShardRegistry::exists
    pub fn open_for_read(&self, id: &ShardId) -> Result<ShardReader, ShardError> {
        let path = self.resolve(id);
        let dir = MmapDirectory::open(&path).map_err(tantivy::TantivyError::from)?;
        let index = Index::open(dir)?;

        Ok(ShardReader {
            index,
            fields: self.schema.clone(),
        })
    }
}

fn open_index(path: &Path, schema: &ShardSchema) -> Result<Index, ShardError> {
    let dir = MmapDirectory::open(path).map_err(tantivy::TantivyError::from)?;
    Ok(Index::open_or_create(dir, schema.schema.clone())?)
}

/// Exclusive write handle to one shard.
pub struct ShardWriter {
    writer: IndexWriter,
    fields: ShardSchema,
    _guard: OwnedMutexGuard<()>,
}

impl ShardWriter {
    /// Inserts the document, replacing any existing document with the same
    /// primary key. Replacement also applies within a single batch: the
    /// engine honors operation order, so the last row for a key wins.
    pub fn upsert(&mut self, doc: &Document) -> Result<(), ShardError> {
        self.writer
            .delete_term(Term::from_field_text(self.fields.key, &doc.key));

        let mut indexed = TantivyDocument::new();
        indexed.add_text(self.fields.key, &doc.key);
        indexed.add_text(self.fields.all, &doc.all);
        let columns: BTreeMap<String, OwnedValue> = doc
            .columns
            .iter()
            .map(|(name, value)| (name.clone(), OwnedValue::Str(value.clone())))
            .collect();
        indexed.add_object(self.fields.columns, columns);

        self.writer.add_document(indexed)?;
        Ok(())
    }

    /// Commits all pending updates durably and releases the shard.
    pub fn commit(mut self) -> Result<(), ShardError> {
        self.writer.commit()?;
        Ok(())
    }
}

/// Read handle to one shard, seeing its last committed state.
pub struct ShardReader {
    index: Index,
    fields: ShardSchema,
}

impl ShardReader {
    /// Query parser defaulting unqualified terms to the `all` blob.
    pub fn query_parser(&self) -> QueryParser {
        QueryParser::for_index(&self.index, vec![self.fields.all])
    }

    /// Executes a parsed query over every document in the shard and returns
    /// the stored primary keys, ranked by descending relevance. Ties fall
    /// back to the engine's internal order.
    pub fn search(&self, query: &dyn Query) -> Result<Vec<String>, ShardError> {
        let searcher = self.index.reader()?.searcher();

        let total = searcher.num_docs() as usize;
        if total == 0 {
            return Ok(Vec::new());
        }

        let hits = searcher.search(query, &TopDocs::with_limit(total))?;

        let mut keys = Vec::with_capacity(hits.len());
        for (_score, address) in hits {
            let doc: TantivyDocument = searcher.doc(address)?;
            if let Some(key) = doc.get_first(self.fields.key).and_then(|v| v.as_str()) {
                keys.push(key.to_string());
            }
        }

        Ok(keys)
    }
}
