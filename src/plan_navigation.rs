// SPDX-License-Identifier: MPL-2.0
//! Plan navigation: a single source of truth for the plan list and the
//! currently shown plan, shared between the app shell and the viewer.

use crate::directory_scanner::PlanList;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Manages navigation through the plans of one property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanNavigator {
    plan_list: PlanList,
    current_plan_path: Option<PathBuf>,
}

impl PlanNavigator {
    /// Creates a new empty navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the plan list from the directory containing `plan_file` and
    /// positions it on that file.
    pub fn open_plan(&mut self, plan_file: &Path) -> Result<()> {
        self.plan_list = PlanList::scan_siblings(plan_file)?;
        self.current_plan_path = Some(plan_file.to_path_buf());
        Ok(())
    }

    /// Builds the plan list from a directory, positioned on its first plan.
    pub fn open_directory(&mut self, directory: &Path) -> Result<()> {
        self.plan_list = PlanList::scan_directory(directory)?;
        self.current_plan_path = self.plan_list.current().map(Path::to_path_buf);
        Ok(())
    }

    /// Returns the path of the plan currently shown, if any.
    pub fn current_plan_path(&self) -> Option<&Path> {
        self.current_plan_path.as_deref()
    }

    /// Advances to the next plan and returns its path. Wraps around.
    pub fn navigate_next(&mut self) -> Option<PathBuf> {
        let next = self.plan_list.next()?.to_path_buf();
        self.plan_list.set_current(&next);
        self.current_plan_path = Some(next.clone());
        Some(next)
    }

    /// Steps back to the previous plan and returns its path. Wraps around.
    pub fn navigate_previous(&mut self) -> Option<PathBuf> {
        let previous = self.plan_list.previous()?.to_path_buf();
        self.plan_list.set_current(&previous);
        self.current_plan_path = Some(previous.clone());
        Some(previous)
    }

    pub fn is_at_first(&self) -> bool {
        self.plan_list.is_at_first()
    }

    pub fn is_at_last(&self) -> bool {
        self.plan_list.is_at_last()
    }

    pub fn len(&self) -> usize {
        self.plan_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plan_list.is_empty()
    }

    /// Zero-based position of the current plan, for the "current / total"
    /// readout.
    pub fn current_index(&self) -> Option<usize> {
        self.plan_list.current_index()
    }
}
