//! DiffSource 팩토리 포트 구현 어댑터.

use crate::application::ports::{DiffSource, DiffSourceFactory};
use crate::domain::options::DiffSpec;
use crate::infrastructure::vcs::GitDiffSource;

pub struct GitDiffSourceFactory;

impl DiffSourceFactory for GitDiffSourceFactory {
    fn build(&self, spec: &DiffSpec) -> Box<dyn DiffSource> {
        Box::new(GitDiffSource::new(spec.clone()))
    }
}
