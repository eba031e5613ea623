//! # Plan Documents
//!
//! A [`PlanDocument`] is what gets saved to disk: the generated plan, the
//! settings it was generated with, and optionally its structural analysis.
//! Documents serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! PlanDocument
//! ├── meta: DocumentMetadata (version, id, author, job, timestamps)
//! ├── settings: Settings (layout, cad, structural)
//! ├── plan: Plan
//! └── analysis: Option<StructuralReport>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use plan_core::document::PlanDocument;
//! use plan_core::plan::{Plan, Terrain};
//!
//! let plan = Plan {
//!     terrain: Terrain::new(15.0, 25.0),
//!     rooms: vec![],
//!     doors: vec![],
//!     windows: vec![],
//!     wall_thickness: 0.20,
//!     metrics: None,
//! };
//! let doc = PlanDocument::new("A. Architect", "26-014", plan);
//!
//! let json = serde_json::to_string_pretty(&doc).unwrap();
//! assert!(json.contains("\"job_id\": \"26-014\""));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plan::Plan;
use crate::settings::Settings;
use crate::structural::StructuralReport;

/// Current schema version for plan documents
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root container written by [`crate::file_io::save_document`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocument {
    pub meta: DocumentMetadata,

    /// Settings the plan was produced with
    #[serde(default)]
    pub settings: Settings,

    pub plan: Plan,

    /// Absent until the plan has been analyzed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<StructuralReport>,
}

impl PlanDocument {
    pub fn new(author: impl Into<String>, job_id: impl Into<String>, plan: Plan) -> Self {
        let now = Utc::now();
        PlanDocument {
            meta: DocumentMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                author: author.into(),
                job_id: job_id.into(),
                created: now,
                modified: now,
            },
            settings: Settings::default(),
            plan,
            analysis: None,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Attach or replace the structural analysis.
    pub fn set_analysis(&mut self, report: StructuralReport) {
        self.analysis = Some(report);
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

/// Document header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,
    pub id: Uuid,
    pub author: String,
    /// Job/project number
    pub job_id: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}
