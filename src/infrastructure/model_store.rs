use crate::application::ml::logistic_predictor::LogisticSaleClassifier;
use crate::application::ml::predictor::SaleClassifier;
use crate::domain::errors::ArtifactError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::{error, info};

pub type LoadResult = Result<Arc<dyn SaleClassifier>, ArtifactError>;

/// Reads the model artifact at most once and hands out the cached outcome.
///
/// Both success and failure are memoized: a missing file stays missing for
/// the lifetime of the loader, matching a process that halts on the first
/// failure.
pub struct ModelLoader {
    path: PathBuf,
    cached: OnceLock<LoadResult>,
    reads: AtomicUsize,
}

impl ModelLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: OnceLock::new(),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> LoadResult {
        self.cached.get_or_init(|| self.read_artifact()).clone()
    }

    /// Number of times the artifact file was actually read.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn read_artifact(&self) -> LoadResult {
        self.reads.fetch_add(1, Ordering::SeqCst);

        let bytes = fs::read(&self.path).map_err(|e| {
            let err = if e.kind() == ErrorKind::NotFound {
                ArtifactError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                ArtifactError::Read {
                    path: self.path.clone(),
                    reason: e.to_string(),
                }
            };
            error!("Failed to read model artifact: {}", err);
            err
        })?;

        let classifier = LogisticSaleClassifier::from_json_slice(&bytes).inspect_err(|e| {
            error!("Failed to deserialize model artifact: {}", e);
        })?;

        info!(
            "Successfully loaded {} {} from {:?}",
            classifier.name(),
            classifier.version(),
            self.path
        );
        Ok(Arc::new(classifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_cached_failure() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ModelLoader::new(dir.path().join("real_estate_model.json"));

        let first = loader.load();
        let second = loader.load();

        assert!(matches!(first, Err(ArtifactError::NotFound { .. })));
        assert_eq!(first.err(), second.err());
        assert_eq!(loader.read_count(), 1);
    }

    #[test]
    fn test_corrupt_file_reports_underlying_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("real_estate_model.json");
        fs::write(&path, "{\"not\": \"a model\"}").unwrap();

        let loader = ModelLoader::new(&path);
        match loader.load() {
            Err(ArtifactError::Deserialize { reason }) => assert!(!reason.is_empty()),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("corrupt artifact must not load"),
        }
    }

    #[test]
    fn test_directory_path_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ModelLoader::new(dir.path());

        let err = loader.load().err().unwrap();
        assert!(
            matches!(err, ArtifactError::Read { .. } | ArtifactError::Deserialize { .. }),
            "got {:?}",
            err
        );
    }
}
