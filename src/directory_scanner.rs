// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for finding and ordering plan images.
//!
//! Scans a directory for supported image formats and keeps them in file-name
//! order, the order the sales material numbers its plans.

use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};

/// An ordered list of plan images with a current position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanList {
    plans: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl PlanList {
    /// Creates a new empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the directory containing `current_file` and positions the list
    /// on it. The scan still succeeds if the file itself has vanished; the
    /// position is simply unset.
    pub fn scan_siblings(current_file: &Path) -> Result<Self> {
        let parent = current_file
            .parent()
            .ok_or_else(|| Error::Io("No parent directory".into()))?;

        let mut list = Self::scan_directory(parent)?;
        list.current_index = list.plans.iter().position(|p| p == current_file);
        Ok(list)
    }

    /// Scans a directory for plan images, positioned on the first one found.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let mut plans = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && media::is_plan_image(&path) {
                plans.push(path);
            }
        }

        plans.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let current_index = if plans.is_empty() { None } else { Some(0) };
        Ok(Self {
            plans,
            current_index,
        })
    }

    /// Returns the current plan path.
    pub fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.plans.get(idx))
            .map(|p| p.as_path())
    }

    /// Returns the next plan path, wrapping around to the start.
    pub fn next(&self) -> Option<&Path> {
        if self.plans.is_empty() {
            return None;
        }
        let next_index = match self.current_index {
            Some(idx) => (idx + 1) % self.plans.len(),
            None => 0,
        };
        self.plans.get(next_index).map(|p| p.as_path())
    }

    /// Returns the previous plan path, wrapping around to the end.
    pub fn previous(&self) -> Option<&Path> {
        if self.plans.is_empty() {
            return None;
        }
        let len = self.plans.len();
        let prev_index = match self.current_index {
            Some(idx) => (idx + len - 1) % len,
            None => len - 1,
        };
        self.plans.get(prev_index).map(|p| p.as_path())
    }

    /// Checks if the list is positioned on the first plan.
    pub fn is_at_first(&self) -> bool {
        matches!(self.current_index, Some(0))
    }

    /// Checks if the list is positioned on the last plan.
    pub fn is_at_last(&self) -> bool {
        matches!(self.current_index, Some(idx) if idx + 1 == self.plans.len())
    }

    /// Returns the total number of plans.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Repositions the list on the given path if it is in the list.
    pub fn set_current(&mut self, path: &Path) {
        self.current_index = self.plans.iter().position(|p| p == path);
    }

    /// Returns the current index if set.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }
}
