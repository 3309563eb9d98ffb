//! Length-sorted suffix tables
//!
//! Every table keeps its suffixes ordered by descending character count so a
//! front-to-back scan always tries the longest candidate first.

use crate::error::{DataError, Result};
use std::collections::HashMap;
use std::collections::HashSet;

/// An ordered list of suffixes, longest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixTable {
    suffixes: Vec<String>,
}

impl SuffixTable {
    /// Build a table from raw suffixes.
    ///
    /// Duplicates are dropped (first occurrence kept) and the list is stably
    /// sorted by descending character count, so suffixes of equal length keep
    /// their prepared order.
    pub fn new(name: &str, suffixes: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut suffixes: Vec<String> = suffixes
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .collect();

        if suffixes.iter().any(String::is_empty) {
            return Err(DataError::EmptySuffix {
                table: name.to_string(),
            });
        }

        suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        Ok(Self { suffixes })
    }

    /// Iterate suffixes longest first
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

/// Classes of morphological markers shared by the nominal pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerClass {
    /// Emphatic particles
    Emphasis,
    /// Case markers
    Cases,
    /// Determiners / classifiers
    Determiners,
    /// Plural markers
    Plurals,
    /// Comparative and superlative markers (adjectives only)
    Degree,
}

impl MarkerClass {
    /// All marker classes, in bundle order
    pub const ALL: [MarkerClass; 5] = [
        MarkerClass::Emphasis,
        MarkerClass::Cases,
        MarkerClass::Determiners,
        MarkerClass::Plurals,
        MarkerClass::Degree,
    ];

    /// Key of this class in `markers.json`
    pub fn key(&self) -> &'static str {
        match self {
            MarkerClass::Emphasis => "emphasis",
            MarkerClass::Cases => "cases",
            MarkerClass::Determiners => "determiners",
            MarkerClass::Plurals => "plurals",
            MarkerClass::Degree => "degree",
        }
    }

    fn index(&self) -> usize {
        match self {
            MarkerClass::Emphasis => 0,
            MarkerClass::Cases => 1,
            MarkerClass::Determiners => 2,
            MarkerClass::Plurals => 3,
            MarkerClass::Degree => 4,
        }
    }
}

/// One suffix table per marker class
#[derive(Debug, Clone, Default)]
pub struct MarkerTables {
    tables: [SuffixTable; 5],
}

impl MarkerTables {
    /// Build from `markers.json` contents; every class must be present
    pub fn from_map(markers: &HashMap<String, Vec<String>>) -> Result<Self> {
        let mut tables = Self::default();

        for class in MarkerClass::ALL {
            let list = markers
                .get(class.key())
                .ok_or_else(|| DataError::MissingMarkerClass(class.key().to_string()))?;
            tables.tables[class.index()] = SuffixTable::new(class.key(), list.clone())?;
        }

        Ok(tables)
    }

    /// The table of a marker class
    #[inline]
    pub fn suffixes(&self, class: MarkerClass) -> &SuffixTable {
        &self.tables[class.index()]
    }
}
