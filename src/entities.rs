//! Schema tables for the stock Strand API v2 resource kinds.
//!
//! Each kind is one [`Schema`] value; there is no code here, only data.
//! Kinds without an endpoint are embedded-only: they hydrate from fragments
//! nested inside other resources and refuse `get`/`list_page`/`list_all`.
//! Field lists are alphabetical, which fixes the order of
//! [`Record::fields`](crate::Record::fields) and of serialized output.

use crate::schema::Schema;

/// A user in summary form, embedded as `creator` on sequences.
pub static USER_SUMMARY: Schema = Schema {
    kind: "user_summary",
    fields: &["handle", "id", "name"],
    nested: &[],
    endpoint: None,
    list_key: None,
};

/// A team in summary form, embedded as `team` on projects.
pub static TEAM_SUMMARY: Schema = Schema {
    kind: "team_summary",
    fields: &["handle", "id", "name"],
    nested: &[],
    endpoint: None,
    list_key: None,
};

/// An organization in summary form, embedded as `owner` on projects.
pub static ORGANIZATION_SUMMARY: Schema = Schema {
    kind: "organization_summary",
    fields: &["handle", "id", "name"],
    nested: &[],
    endpoint: None,
    list_key: None,
};

/// Archive state of an archivable resource; the field only appears once the
/// resource has been archived.
pub static ARCHIVE_RECORD: Schema = Schema {
    kind: "archive_record",
    fields: &["reason"],
    nested: &[],
    endpoint: None,
    list_key: None,
};

/// A feature annotation on a DNA sequence.
///
/// `strand` is 1 for forward, -1 for reverse, 0 for no strand.
pub static ANNOTATION: Schema = Schema {
    kind: "annotation",
    fields: &["color", "end", "name", "start", "strand", "type"],
    nested: &[],
    endpoint: None,
    list_key: None,
};

/// An oligo primer attached to a DNA sequence.
pub static PRIMER: Schema = Schema {
    kind: "primer",
    fields: &[
        "bases",
        "bindPosition",
        "color",
        "createdAt",
        "end",
        "name",
        "overhangLength",
        "start",
        "strand",
    ],
    nested: &[],
    endpoint: None,
    list_key: None,
};

/// A translated region of a DNA sequence.
pub static TRANSLATION: Schema = Schema {
    kind: "translation",
    fields: &["aminoAcids", "end", "regions", "start", "strand"],
    nested: &[],
    endpoint: None,
    list_key: None,
};

/// A folder of sequences inside a project.
pub static FOLDER: Schema = Schema {
    kind: "folder",
    fields: &["archiveRecord", "id", "name", "parentFolderId", "projectId"],
    nested: &[("archiveRecord", &ARCHIVE_RECORD)],
    endpoint: Some("folders"),
    list_key: None,
};

/// A project grouping folders and their contents.
pub static PROJECT: Schema = Schema {
    kind: "project",
    fields: &["archiveRecord", "id", "name", "owner", "team"],
    nested: &[
        ("archiveRecord", &ARCHIVE_RECORD),
        ("owner", &ORGANIZATION_SUMMARY),
        ("team", &TEAM_SUMMARY),
    ],
    endpoint: Some("projects"),
    list_key: None,
};

/// A DNA sequence with its annotations, primers, and translations.
///
/// The one kind whose list envelope key (`dnaSequences`) differs from its
/// endpoint (`dna-sequences`).
pub static DNA_SEQUENCE: Schema = Schema {
    kind: "dna_sequence",
    fields: &[
        "aliases",
        "annotations",
        "archiveRecord",
        "bases",
        "createdAt",
        "creator",
        "description",
        "folderId",
        "id",
        "isCircular",
        "length",
        "modifiedAt",
        "name",
        "primers",
        "translations",
        "webUrl",
    ],
    nested: &[
        ("annotations", &ANNOTATION),
        ("archiveRecord", &ARCHIVE_RECORD),
        ("creator", &USER_SUMMARY),
        ("primers", &PRIMER),
        ("translations", &TRANSLATION),
    ],
    endpoint: Some("dna-sequences"),
    list_key: Some("dnaSequences"),
};
