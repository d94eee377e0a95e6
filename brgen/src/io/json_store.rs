//! A file-backed document store: one directory per database, one JSON-lines file per
//! collection.

use crate::core::{entities::Graph, utils::errors::StorageError};
use serde::Serialize;
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_COLLECTION: &str = "bollobas_riordan";

/// Sink for fully generated graphs.
pub trait DocumentStore {
    fn insert_graph(&mut self, graph: &Graph) -> Result<(), StorageError>;
}

/// Granularity of the stored documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageLayout {
    /// One document holding the whole graph
    #[default]
    Graph,
    /// One document per vertex
    PerVertex,
}

#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    path: PathBuf,
    layout: StorageLayout,
}

impl JsonDocumentStore {
    /// Opens collection `collection` of database directory `db`, creating the directory if needed.
    pub fn open(
        db: impl AsRef<Path>,
        collection: &str,
        layout: StorageLayout,
    ) -> Result<Self, StorageError> {
        let db = db.as_ref();
        fs::create_dir_all(db).map_err(|source| StorageError::Io {
            path: db.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: db.join(format!("{collection}.jsonl")),
            layout,
        })
    }

    /// File backing the collection
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> StorageLayout {
        self.layout
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn append<T: Serialize>(
        &self,
        docs: impl IntoIterator<Item = T>,
    ) -> Result<usize, StorageError> {
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.io_error(err))?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;
        for doc in docs {
            serde_json::to_writer(&mut writer, &doc)?;
            writer.write_all(b"\n").map_err(|err| self.io_error(err))?;
            count += 1;
        }
        writer.flush().map_err(|err| self.io_error(err))?;
        Ok(count)
    }
}

impl DocumentStore for JsonDocumentStore {
    fn insert_graph(&mut self, graph: &Graph) -> Result<(), StorageError> {
        let written = match self.layout {
            StorageLayout::Graph => self.append([graph])?,
            StorageLayout::PerVertex => self.append(graph.vertices())?,
        };
        debug!(path = %self.path.display(), documents = written, "graph stored");
        Ok(())
    }
}
