//! Fact retrieval collaborator
//!
//! A file-backed stand-in for a vector store: documents are split into
//! overlapping character chunks and ranked by case-insensitive query-token
//! overlap. The `Retriever` trait is the seam the `retrieve_facts` tool
//! depends on, so tests can substitute a stub.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::ProbeResult;

/// Target chunk size in characters
const CHUNK_SIZE: usize = 500;

/// Overlap between consecutive chunks in characters
const CHUNK_OVERLAP: usize = 50;

/// Trait for passage retrieval backends
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Return up to `k` passages relevant to the query, best first.
    /// An empty vector means no match.
    async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<String>>;
}

/// In-memory store of document chunks ranked by token overlap
pub struct FactStore {
    chunks: Vec<String>,
}

impl FactStore {
    /// Build a store from the `.txt` documents in a directory
    ///
    /// A missing or empty directory yields an empty store, which answers
    /// every query with "no match". Unreadable files are logged and skipped.
    pub fn load(dir: &Path) -> ProbeResult<Self> {
        if !dir.is_dir() {
            tracing::warn!("Document directory {:?} not found, fact store is empty", dir);
            return Ok(Self { chunks: Vec::new() });
        }

        let mut documents = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(text) => documents.push(text),
                Err(e) => {
                    tracing::warn!("Skipping unreadable document {:?}: {}", path, e);
                }
            }
        }

        tracing::info!("Loaded {} documents from {:?}", documents.len(), dir);
        Ok(Self::from_documents(documents))
    }

    /// Build a store directly from document texts
    pub fn from_documents(documents: Vec<String>) -> Self {
        let chunks: Vec<String> = documents
            .iter()
            .flat_map(|doc| split_into_chunks(doc))
            .collect();
        tracing::debug!("Fact store holds {} chunks", chunks.len());
        Self { chunks }
    }

    /// Number of chunks in the store
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if the store holds no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[async_trait]
impl Retriever for FactStore {
    async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<String>> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(usize, &String)> = self
            .chunks
            .iter()
            .map(|chunk| {
                let chunk_tokens: HashSet<String> = tokenize(chunk).into_iter().collect();
                let score = query_tokens
                    .iter()
                    .filter(|t| chunk_tokens.contains(t.as_str()))
                    .count();
                (score, chunk)
            })
            .filter(|(score, _)| *score > 0)
            .collect();

        // Stable sort keeps document order among equally-scored chunks.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(_, chunk)| chunk.clone())
            .collect())
    }
}

/// Lowercased alphanumeric tokens of the query
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Split a document into chunks of roughly `CHUNK_SIZE` characters with
/// `CHUNK_OVERLAP` characters of overlap, breaking on char boundaries.
fn split_into_chunks(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    if chars.len() <= CHUNK_SIZE {
        let trimmed = text.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    let step = CHUNK_SIZE - CHUNK_OVERLAP;
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + CHUNK_SIZE).min(chars.len());
        let chunk: String = chars[start..end].iter().collect();
        let trimmed = chunk.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }
        if end == chars.len() {
            break;
        }
        start += step;
    }
    chunks
}
