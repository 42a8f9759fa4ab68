//! Signal extraction from historical file content
//!
//! Two interchangeable strategies: keep every line containing a keyword, or
//! pull a dependency's version out of a package manifest. Both return a flat
//! list of extracted values; the pipelines decide what to do with them.

use serde_json::Value;

/// Extraction strategy over one revision's file content.
pub trait Extract {
    /// Extracted values, in document order. Empty when nothing matches.
    fn extract(&self, content: &str) -> Vec<String>;
}

/// Retains every line containing the keyword as a case-sensitive literal
/// substring, trimmed.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    keyword: String,
}

impl KeywordExtractor {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }
}

impl Extract for KeywordExtractor {
    fn extract(&self, content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|line| line.contains(&self.keyword))
            .map(|line| line.trim().to_string())
            .collect()
    }
}

/// Resolves a dependency's declared version from a package.json-style
/// manifest: `dependencies.<name>` first, then `devDependencies.<name>`.
///
/// Parse failures and absent keys are normal branches, not errors; either
/// yields no values.
#[derive(Debug, Clone)]
pub struct ManifestExtractor {
    package: String,
}

impl ManifestExtractor {
    pub fn new(package: &str) -> Self {
        Self {
            package: package.to_string(),
        }
    }

    fn lookup<'a>(&self, manifest: &'a Value, section: &str) -> Option<&'a str> {
        manifest.get(section)?.get(&self.package)?.as_str()
    }
}

impl Extract for ManifestExtractor {
    fn extract(&self, content: &str) -> Vec<String> {
        let Ok(manifest) = serde_json::from_str::<Value>(content) else {
            return Vec::new();
        };
        self.lookup(&manifest, "dependencies")
            .or_else(|| self.lookup(&manifest, "devDependencies"))
            .map(|version| vec![version.to_string()])
            .unwrap_or_default()
    }
}
