//! Read-only reference data: diseases, genes and proteins.
//!
//! The engine reads records through the [`ReferenceData`] trait, so the
//! built-in dataset can be swapped for a larger one loaded from JSON:
//!
//! ```text
//! {
//!   "diseases": { "alzheimer": { "name": ..., "genes": [...], ... } },
//!   "genes":    { "APOE": { "symbol": ..., "tissues": { "liver": 95 }, ... } },
//!   "proteins": { "insulin": { "name": ..., "pdbId": ..., ... } }
//! }
//! ```
//!
//! Keys are normalized on load: disease names and protein names to
//! lowercase, gene symbols to uppercase.

pub mod builtin;
mod tissues;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub use builtin::builtin;
pub use tissues::TissueLevels;

/// A gene known to be involved in a disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneAssociation {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub chromosome: String,
    /// Evidence tier, e.g. "Causative", "Strong", "Moderate"
    pub association: String,
    #[serde(default)]
    pub variants: Vec<String>,
}

impl GeneAssociation {
    /// Chart score for the association tier.
    pub fn association_strength(&self) -> u8 {
        match self.association.as_str() {
            "Causative" => 95,
            "Strong" => 90,
            _ => 70,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    /// Kept in stored order
    pub genes: Vec<GeneAssociation>,
    pub description: String,
    pub prevalence: String,
    #[serde(default)]
    pub pathways: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub symbol: String,
    pub name: String,
    pub function: String,
    pub chromosome: String,
    pub length: String,
    pub protein: String,
    #[serde(default)]
    pub tissues: TissueLevels,
    #[serde(default)]
    pub pathways: Vec<String>,
    #[serde(default)]
    pub diseases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protein {
    pub name: String,
    pub gene: String,
    /// Free text with units, e.g. "51 amino acids (mature form)"
    pub length: String,
    pub structure: String,
    pub function: String,
    pub pdb_id: String,
    #[serde(default)]
    pub pathways: Vec<String>,
}

impl Protein {
    /// Leading integer of the free-text length ("51 amino acids" → 51).
    ///
    /// Digits are read up to the first non-digit, so a thousands separator
    /// ends the number.
    pub fn residue_count(&self) -> Option<u64> {
        let digits: String = self
            .length
            .trim_start()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }
}

/// Key→record lookups. A miss is `None`, never an error.
pub trait ReferenceData {
    fn lookup_disease(&self, name: &str) -> Option<&Disease>;
    fn lookup_gene(&self, symbol: &str) -> Option<&Gene>;
    fn lookup_protein(&self, name: &str) -> Option<&Protein>;
}

impl<T: ReferenceData + ?Sized> ReferenceData for &T {
    fn lookup_disease(&self, name: &str) -> Option<&Disease> {
        (**self).lookup_disease(name)
    }

    fn lookup_gene(&self, symbol: &str) -> Option<&Gene> {
        (**self).lookup_gene(symbol)
    }

    fn lookup_protein(&self, name: &str) -> Option<&Protein> {
        (**self).lookup_protein(name)
    }
}

/// Errors that can occur while loading a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to open dataset: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid dataset JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Empty dataset (no diseases, genes or proteins)")]
    Empty,
}

/// Result type for dataset loading.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// In-memory reference dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    diseases: BTreeMap<String, Disease>,
    #[serde(default)]
    genes: BTreeMap<String, Gene>,
    #[serde(default)]
    proteins: BTreeMap<String, Protein>,
}

impl Dataset {
    /// Parses a dataset from JSON text.
    pub fn from_json_str(content: &str) -> DatasetResult<Self> {
        let raw: Dataset = serde_json::from_str(content)?;
        let dataset = raw.normalized();
        if dataset.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(dataset)
    }

    /// Loads a dataset from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        let file = File::open(&path)?;
        let mut reader = BufReader::new(file);
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        if content.trim().is_empty() {
            return Err(DatasetError::Empty);
        }

        let dataset = Self::from_json_str(&content)?;
        info!(
            path = %path.as_ref().display(),
            diseases = dataset.diseases.len(),
            genes = dataset.genes.len(),
            proteins = dataset.proteins.len(),
            "loaded reference dataset"
        );
        Ok(dataset)
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty() && self.genes.is_empty() && self.proteins.is_empty()
    }

    /// Disease keys in sorted order.
    pub fn disease_names(&self) -> impl Iterator<Item = &str> {
        self.diseases.keys().map(String::as_str)
    }

    /// Gene symbols in sorted order.
    pub fn gene_symbols(&self) -> impl Iterator<Item = &str> {
        self.genes.keys().map(String::as_str)
    }

    /// Protein keys in sorted order.
    pub fn protein_names(&self) -> impl Iterator<Item = &str> {
        self.proteins.keys().map(String::as_str)
    }

    fn normalized(self) -> Self {
        Self {
            diseases: rekey(self.diseases, normalize_disease_name),
            genes: rekey(self.genes, |k| k.trim().to_uppercase()),
            proteins: rekey(self.proteins, |k| k.trim().to_lowercase()),
        }
    }
}

impl ReferenceData for Dataset {
    fn lookup_disease(&self, name: &str) -> Option<&Disease> {
        self.diseases.get(&normalize_disease_name(name))
    }

    fn lookup_gene(&self, symbol: &str) -> Option<&Gene> {
        self.genes.get(&symbol.trim().to_uppercase())
    }

    fn lookup_protein(&self, name: &str) -> Option<&Protein> {
        self.proteins.get(&name.trim().to_lowercase())
    }
}

/// Lowercases a disease name and strips possessive "'s".
pub fn normalize_disease_name(name: &str) -> String {
    name.trim().to_lowercase().replace("'s", "")
}

fn rekey<V>(map: BTreeMap<String, V>, key: impl Fn(&str) -> String) -> BTreeMap<String, V> {
    map.into_iter().map(|(k, v)| (key(&k), v)).collect()
}
