//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data. Fixtures are
//! raw JSON values shaped like real API responses, so they exercise the same
//! hydration path production responses do.

use serde_json::{json, Value};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Project Fixtures
    // =========================================================================

    /// Create a minimal project with required fields only.
    pub fn minimal_project(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
        })
    }

    /// Create a project with an owning organization and a team.
    pub fn owned_project(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "owner": {
                "handle": "strandbio",
                "id": "org_Jq9wXzKd",
                "name": "Strand Bio",
            },
            "team": {
                "handle": "cloning",
                "id": "team_vN3mPqLs",
                "name": "Cloning",
            },
        })
    }

    // =========================================================================
    // Folder Fixtures
    // =========================================================================

    /// Create a folder at the root of a project.
    pub fn minimal_folder(id: &str, name: &str, project_id: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "parentFolderId": null,
            "projectId": project_id,
        })
    }

    /// Create a folder nested under another folder.
    pub fn child_folder(id: &str, name: &str, parent_id: &str, project_id: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "parentFolderId": parent_id,
            "projectId": project_id,
        })
    }

    /// Create an archived folder.
    pub fn archived_folder(id: &str, name: &str, project_id: &str, reason: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "parentFolderId": null,
            "projectId": project_id,
            "archiveRecord": {"reason": reason},
        })
    }

    // =========================================================================
    // Sequence Fixtures
    // =========================================================================

    /// Create a minimal DNA sequence.
    pub fn minimal_sequence(id: &str, name: &str, folder_id: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "folderId": folder_id,
        })
    }

    /// Create a small linear sequence with explicit bases.
    pub fn small_sequence(id: &str, name: &str, folder_id: &str, bases: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "folderId": folder_id,
            "bases": bases,
            "length": bases.len(),
            "isCircular": false,
        })
    }

    /// Create an archived sequence.
    pub fn archived_sequence(id: &str, name: &str, folder_id: &str, reason: &str) -> Value {
        let mut sequence = Self::minimal_sequence(id, name, folder_id);
        sequence["archiveRecord"] = json!({"reason": reason});
        sequence
    }

    /// Create a fully populated circular plasmid with creator, annotations,
    /// primers, and a translation. Bases are omitted, as the real API does
    /// for large constructs unless asked.
    pub fn full_sequence(id: &str, name: &str, folder_id: &str) -> Value {
        json!({
            "aliases": [format!("{name}-stock")],
            "annotations": [
                Self::annotation("lacZα", "CDS", 146, 469, 1),
                Self::annotation("ori", "rep_origin", 867, 1455, 1),
                Self::annotation("AmpR", "CDS", 1629, 2486, -1),
            ],
            "createdAt": "2024-03-11T09:14:02.511Z",
            "creator": {
                "handle": "rosalind",
                "id": "ent_pZqRw1Y8",
                "name": "Rosalind Franklin",
            },
            "description": "Standard cloning vector",
            "folderId": folder_id,
            "id": id,
            "isCircular": true,
            "length": 2686,
            "modifiedAt": "2024-06-02T17:40:19.004Z",
            "name": name,
            "primers": [
                Self::primer("M13 fwd", "GTAAAACGACGGCCAGT", 151, 168, 1),
            ],
            "translations": [
                {
                    "aminoAcids": "MTMITPS",
                    "start": 146,
                    "end": 167,
                    "strand": 1,
                    "regions": [{"start": 146, "end": 167}],
                },
            ],
            "webUrl": format!("https://app.strand.bio/seq/{id}"),
        })
    }

    /// Create one feature annotation.
    pub fn annotation(name: &str, kind: &str, start: u32, end: u32, strand: i32) -> Value {
        json!({
            "color": "#85DAE9",
            "end": end,
            "name": name,
            "start": start,
            "strand": strand,
            "type": kind,
        })
    }

    /// Create one primer.
    pub fn primer(name: &str, bases: &str, start: u32, end: u32, strand: i32) -> Value {
        json!({
            "bases": bases,
            "bindPosition": start,
            "color": "#F58A5E",
            "createdAt": "2024-03-11T09:20:45.120Z",
            "end": end,
            "name": name,
            "overhangLength": 0,
            "start": start,
            "strand": strand,
        })
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related resources: one project holding two
/// folders, with sequences spread across them.
pub struct DefaultScenario {
    pub projects: Vec<Value>,
    pub folders: Vec<Value>,
    pub sequences: Vec<Value>,
}

impl DefaultScenario {
    fn new() -> Self {
        let project_id = "prj_aXkT2qVc";
        let backbones = "fld_h0LWbdTq";
        let inserts = "fld_w9YqPnRs";

        let projects = vec![Fixtures::owned_project(project_id, "Plasmid Library")];

        let folders = vec![
            Fixtures::minimal_folder(backbones, "Backbones", project_id),
            Fixtures::minimal_folder(inserts, "Inserts", project_id),
        ];

        let sequences = vec![
            Fixtures::full_sequence("seq_VgkHvT2P", "pUC19", backbones),
            Fixtures::small_sequence(
                "seq_mK4wDcBn",
                "EGFP insert",
                inserts,
                "ATGGTGAGCAAGGGCGAGGAGCTGTTCACCGGGGTG",
            ),
            Fixtures::archived_sequence("seq_tR8sFhLm", "T7 promoter oligo", inserts, "Retired"),
        ];

        Self {
            projects,
            folders,
            sequences,
        }
    }
}
