// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prodcal_domain::{AreaConfig, DomainError, default_areas, default_assignees};
use serde::{Deserialize, Serialize};

/// Reference lists fixed for the lifetime of a manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Configured production areas.
    pub areas: Vec<AreaConfig>,
    /// Names offered as assignees.
    #[serde(default = "default_assignees")]
    pub assignees: Vec<String>,
}

impl SchedulerConfig {
    /// Looks up an area by label or key.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AreaNotFound` if no area matches.
    pub fn find_area(&self, name: &str) -> Result<&AreaConfig, DomainError> {
        self.areas
            .iter()
            .find(|area| area.matches(name))
            .ok_or_else(|| DomainError::AreaNotFound(name.to_string()))
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            areas: default_areas(),
            assignees: default_assignees(),
        }
    }
}
