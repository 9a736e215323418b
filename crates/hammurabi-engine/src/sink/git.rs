//! Git commit sink backed by libgit2.

use std::path::{Path, PathBuf};

use git2::{Commit, ErrorCode, IndexAddOption, Repository, Signature};

use hammurabi_core::config::GitConfig;
use hammurabi_core::errors::CommitError;
use hammurabi_core::traits::CommitSink;

/// Stages working-tree changes and commits them on `HEAD`.
#[derive(Debug, Clone)]
pub struct GitCommitSink {
    repo_path: PathBuf,
    dry_run: bool,
    commit_all: bool,
    author: Option<(String, String)>,
}

impl GitCommitSink {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            dry_run: false,
            commit_all: true,
            author: None,
        }
    }

    pub fn from_config(repo_path: impl Into<PathBuf>, config: &GitConfig) -> Self {
        let author = match (&config.author_name, &config.author_email) {
            (Some(name), Some(email)) => Some((name.clone(), email.clone())),
            _ => None,
        };
        Self {
            repo_path: repo_path.into(),
            dry_run: config.effective_dry_run(),
            commit_all: config.effective_commit_all(),
            author,
        }
    }

    /// Log the message instead of committing.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// When false, only what is already in the index gets committed.
    pub fn with_commit_all(mut self, commit_all: bool) -> Self {
        self.commit_all = commit_all;
        self
    }

    /// Commit as this author instead of the repository's configured user.
    pub fn with_author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.author = Some((name.into(), email.into()));
        self
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    fn open(&self) -> Result<Repository, CommitError> {
        Repository::open(&self.repo_path).map_err(|e| CommitError::Repository {
            path: self.repo_path.display().to_string(),
            message: e.message().to_string(),
        })
    }

    fn signature(&self, repo: &Repository) -> Result<Signature<'static>, CommitError> {
        let signature = match &self.author {
            Some((name, email)) => Signature::now(name, email),
            None => repo.signature(),
        };
        signature.map_err(|e| CommitError::Signature(e.message().to_string()))
    }
}

impl CommitSink for GitCommitSink {
    fn commit(&self, message: &str) -> Result<(), CommitError> {
        if self.dry_run {
            tracing::info!(
                repo = %self.repo_path.display(),
                commit_message = message,
                "dry run, skipping commit"
            );
            return Ok(());
        }

        let repo = self.open()?;
        let staging = |e: git2::Error| CommitError::Staging(e.message().to_string());
        let committing = |e: git2::Error| CommitError::Commit(e.message().to_string());

        let mut index = repo.index().map_err(staging)?;
        if self.commit_all {
            index
                .add_all(["*"], IndexAddOption::DEFAULT, None)
                .map_err(staging)?;
            // Picks up deletions, which add_all does not record.
            index.update_all(["*"], None).map_err(staging)?;
            index.write().map_err(staging)?;
        }
        let tree_id = index.write_tree().map_err(staging)?;
        let tree = repo.find_tree(tree_id).map_err(committing)?;

        let signature = self.signature(&repo)?;
        let parent = head_commit(&repo).map_err(committing)?;
        let parents: Vec<&Commit<'_>> = parent.iter().collect();

        let oid = repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .map_err(committing)?;
        tracing::info!(repo = %self.repo_path.display(), commit = %oid, "created commit");
        Ok(())
    }
}

/// The commit `HEAD` points to, or `None` on an unborn branch.
fn head_commit(repo: &Repository) -> Result<Option<Commit<'_>>, git2::Error> {
    match repo.head() {
        Ok(head) => head.peel_to_commit().map(Some),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
