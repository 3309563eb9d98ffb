//! Embedded bundle loader
//!
//! Parses the compiled-in sample bundle on first access and shares it.

use crate::data::bundle::DataBundle;
use crate::data::runtime::Resources;
use crate::error::Result;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Resources built from the embedded bundle
static EMBEDDED: OnceLock<Arc<Resources>> = OnceLock::new();

/// Shared resources built from the embedded bundle
pub fn embedded() -> Result<Arc<Resources>> {
    if let Some(resources) = EMBEDDED.get() {
        return Ok(Arc::clone(resources));
    }

    let resources = Arc::new(Resources::from_bundle(&DataBundle::embedded()?)?);
    log::debug!("initialized embedded lemmatizer resources");

    // A concurrent initializer may have won; both built the same tables
    Ok(Arc::clone(EMBEDDED.get_or_init(|| resources)))
}

/// Resources built from a bundle directory
pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Arc<Resources>> {
    let bundle = DataBundle::from_dir(dir)?;
    Ok(Arc::new(Resources::from_bundle(&bundle)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_embedded_multiple_times() {
        let first = embedded().unwrap();
        let second = embedded().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_embedded_from_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| embedded().unwrap()))
            .collect();
        for handle in handles {
            let resources = handle.join().unwrap();
            assert!(resources.lookup(Category::Noun, "বই").is_some());
        }
    }

    #[test]
    fn test_from_missing_dir() {
        assert!(from_dir("/nonexistent/banlemma-data").is_err());
    }
}
