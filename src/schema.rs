//! Schema-driven resource mapping.
//!
//! Every resource kind the API exposes is described by a [`Schema`]: an
//! ordered field list, the subset of fields that hold nested resources, and
//! the endpoint and list-envelope key used by the network operations. One
//! generic hydration routine turns raw JSON into [`Record`] values for any
//! schema, so adding a resource kind means adding a table entry, not
//! another parser.
//!
//! The stock tables live in [`crate::entities`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Static description of one resource kind.
///
/// Fields are public so downstream code can declare additional kinds and
/// run them through the same engine.
pub struct Schema {
    /// Short stable name for this kind, used in errors and equality.
    pub kind: &'static str,
    /// JSON field names this kind exposes, in declaration order.
    ///
    /// Order does not affect hydration, but [`Record::fields`] and the
    /// `Serialize` impl follow it.
    pub fields: &'static [&'static str],
    /// Fields whose values hydrate recursively against another schema.
    ///
    /// A single JSON object under such a field becomes one nested record;
    /// a JSON array becomes a list of them.
    pub nested: &'static [(&'static str, &'static Schema)],
    /// API path segment for this kind's collection.
    ///
    /// `None` marks an embedded-only kind: it hydrates from data nested
    /// inside other resources but can never be fetched or listed directly.
    pub endpoint: Option<&'static str>,
    /// JSON envelope key under which list responses carry the items, when
    /// it differs from `endpoint`.
    pub list_key: Option<&'static str>,
}

impl Schema {
    /// Nested schema declared for `field`, if any.
    pub fn nested_schema(&self, field: &str) -> Option<&'static Schema> {
        self.nested
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, schema)| *schema)
    }

    /// The JSON envelope key for list responses.
    ///
    /// Defaults to the endpoint name; `None` for embedded-only kinds.
    pub fn envelope_key(&self) -> Option<&'static str> {
        self.list_key.or(self.endpoint)
    }

    /// Hydrate a record from a raw JSON value.
    ///
    /// Hydration is total: it never fails, whatever the input shape. A
    /// non-object input (or a non-object element inside a nested list)
    /// produces a record with every field [`FieldValue::Absent`]. Fields
    /// missing from the JSON and fields that are `null` both come out
    /// `Absent`; JSON keys the schema does not declare are dropped.
    pub fn hydrate(&'static self, json: &Value) -> Record {
        let empty = serde_json::Map::new();
        let object = json.as_object().unwrap_or(&empty);

        let values = self
            .fields
            .iter()
            .map(|field| match (object.get(*field), self.nested_schema(field)) {
                (None, _) | (Some(Value::Null), _) => FieldValue::Absent,
                (Some(Value::Array(elements)), Some(nested)) => FieldValue::Records(
                    elements.iter().map(|element| nested.hydrate(element)).collect(),
                ),
                (Some(value), Some(nested)) => FieldValue::Record(nested.hydrate(value)),
                (Some(value), None) => FieldValue::Raw(value.clone()),
            })
            .collect();

        Record {
            schema: self,
            values,
        }
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("kind", &self.kind)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// One field slot in a [`Record`].
///
/// `Absent` covers both "key missing" and "key null" in the source JSON;
/// a field name the schema never declared is not representable here at all
/// ([`Record::get`] returns `None` for those).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Field was missing or `null` in the source JSON.
    Absent,
    /// Raw JSON value, copied verbatim.
    Raw(Value),
    /// Single nested record.
    Record(Record),
    /// List of nested records, in source order.
    Records(Vec<Record>),
}

impl FieldValue {
    /// Whether this field was missing or null in the source JSON.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// The raw JSON value, if this field holds one.
    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            FieldValue::Raw(value) => Some(value),
            _ => None,
        }
    }

    /// The nested record, if this field holds exactly one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            FieldValue::Record(record) => Some(record),
            _ => None,
        }
    }

    /// The nested records, if this field holds a list of them.
    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            FieldValue::Records(records) => Some(records),
            _ => None,
        }
    }
}

/// An immutable snapshot of one API resource.
///
/// Produced by [`Schema::hydrate`] or the fetch and list operations. Every
/// field the schema declares has a slot (possibly [`FieldValue::Absent`])
/// and nothing else does. Refreshing means fetching a new record, see
/// [`Record::reload`](crate::Record::reload).
#[derive(Clone)]
pub struct Record {
    schema: &'static Schema,
    values: Vec<FieldValue>,
}

impl Record {
    /// The schema this record was hydrated against.
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// The record's resource kind.
    pub fn kind(&self) -> &'static str {
        self.schema.kind
    }

    /// Look up a declared field.
    ///
    /// Returns `None` only for names the schema does not declare; a
    /// declared field that was missing from the source JSON is
    /// `Some(&FieldValue::Absent)`.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.schema
            .fields
            .iter()
            .position(|name| *name == field)
            .map(|index| &self.values[index])
    }

    /// All declared fields and their values, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.schema.fields.iter().copied().zip(self.values.iter())
    }

    /// Raw JSON value of `field`, when present and not nested.
    pub fn raw(&self, field: &str) -> Option<&Value> {
        self.get(field).and_then(FieldValue::as_raw)
    }

    /// String value of `field`.
    pub fn as_str(&self, field: &str) -> Option<&str> {
        self.raw(field).and_then(Value::as_str)
    }

    /// Boolean value of `field`.
    pub fn as_bool(&self, field: &str) -> Option<bool> {
        self.raw(field).and_then(Value::as_bool)
    }

    /// Integer value of `field`.
    pub fn as_i64(&self, field: &str) -> Option<i64> {
        self.raw(field).and_then(Value::as_i64)
    }

    /// Float value of `field`.
    pub fn as_f64(&self, field: &str) -> Option<f64> {
        self.raw(field).and_then(Value::as_f64)
    }

    /// `field` parsed as an RFC 3339 timestamp in UTC.
    ///
    /// Timestamp fields (`createdAt`, `modifiedAt`) are stored as the raw
    /// strings the API returned; this is the read-side interpretation.
    pub fn as_datetime(&self, field: &str) -> Option<DateTime<Utc>> {
        self.as_str(field)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Nested record under `field`.
    pub fn nested(&self, field: &str) -> Option<&Record> {
        self.get(field).and_then(FieldValue::as_record)
    }

    /// Nested record list under `field`.
    pub fn nested_list(&self, field: &str) -> Option<&[Record]> {
        self.get(field).and_then(FieldValue::as_records)
    }

    /// The record's `id` field, for kinds that carry one.
    pub fn id(&self) -> Option<&str> {
        self.as_str("id")
    }
}

impl PartialEq for Record {
    /// Records are equal when they are of the same kind and every declared
    /// field compares equal, nested records recursively. Records of
    /// different kinds are never equal, identical field values or not.
    fn eq(&self, other: &Self) -> bool {
        self.schema.kind == other.schema.kind && self.values == other.values
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema.kind)?;
        f.write_str(" ")?;
        f.debug_map().entries(self.fields()).finish()
    }
}

impl Serialize for Record {
    /// Serializes declared fields in schema order, skipping absent ones
    /// rather than re-emitting them as `null`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.fields().filter(|(_, value)| !value.is_absent()).count();
        let mut map = serializer.serialize_map(Some(present))?;
        for (name, value) in self.fields() {
            match value {
                FieldValue::Absent => {}
                FieldValue::Raw(raw) => map.serialize_entry(name, raw)?,
                FieldValue::Record(record) => map.serialize_entry(name, record)?,
                FieldValue::Records(records) => map.serialize_entry(name, records)?,
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ANNOTATION, DNA_SEQUENCE, FOLDER, TEAM_SUMMARY, USER_SUMMARY};
    use serde_json::json;

    #[test]
    fn test_hydrate_gives_every_declared_field_a_slot() {
        let record = DNA_SEQUENCE.hydrate(&json!({"name": "pUC19"}));
        for field in DNA_SEQUENCE.fields {
            let value = record.get(field);
            assert!(value.is_some(), "field '{field}' has no slot");
        }
        assert_eq!(record.as_str("name"), Some("pUC19"));
        assert!(record.get("bases").unwrap().is_absent());
    }

    #[test]
    fn test_hydrate_missing_and_null_are_both_absent() {
        let record = DNA_SEQUENCE.hydrate(&json!({"name": null}));
        assert!(record.get("name").unwrap().is_absent());
        assert!(record.get("bases").unwrap().is_absent());
    }

    #[test]
    fn test_hydrate_drops_undeclared_fields() {
        let record = FOLDER.hydrate(&json!({
            "id": "fld_a",
            "somethingNew": "surprise"
        }));
        assert_eq!(record.get("somethingNew"), None);
        assert_eq!(record.id(), Some("fld_a"));
    }

    #[test]
    fn test_hydrate_nested_record() {
        let record = DNA_SEQUENCE.hydrate(&json!({
            "id": "seq_1",
            "creator": {"handle": "ada", "id": "ent_1", "name": "Ada"}
        }));

        let creator = record.nested("creator").unwrap();
        assert_eq!(creator.kind(), "user_summary");
        assert_eq!(creator.as_str("handle"), Some("ada"));
        assert_eq!(creator.as_str("name"), Some("Ada"));
    }

    #[test]
    fn test_hydrate_nested_list_preserves_order() {
        let record = DNA_SEQUENCE.hydrate(&json!({
            "annotations": [
                {"name": "lacZ", "start": 100, "end": 400, "strand": 1},
                {"name": "ori", "start": 1200, "end": 1800, "strand": -1}
            ]
        }));

        let annotations = record.nested_list("annotations").unwrap();
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].as_str("name"), Some("lacZ"));
        assert_eq!(annotations[1].as_str("name"), Some("ori"));
        assert_eq!(annotations[1].as_i64("strand"), Some(-1));
        assert!(annotations.iter().all(|a| a.kind() == "annotation"));
    }

    #[test]
    fn test_hydrate_nested_null_is_absent_not_empty() {
        let record = DNA_SEQUENCE.hydrate(&json!({"annotations": null}));
        assert!(record.get("annotations").unwrap().is_absent());
        assert_eq!(record.nested_list("annotations"), None);
    }

    #[test]
    fn test_hydrate_non_object_list_element_comes_out_all_absent() {
        let record = DNA_SEQUENCE.hydrate(&json!({"annotations": ["bogus", 7]}));
        let annotations = record.nested_list("annotations").unwrap();
        assert_eq!(annotations.len(), 2);
        for annotation in annotations {
            assert!(annotation.fields().all(|(_, v)| v.is_absent()));
        }
    }

    #[test]
    fn test_hydrate_non_object_input_comes_out_all_absent() {
        for input in [json!("nope"), json!(42), json!([1, 2]), json!(null)] {
            let record = ANNOTATION.hydrate(&input);
            assert!(record.fields().all(|(_, v)| v.is_absent()));
        }
    }

    #[test]
    fn test_equality_same_kind() {
        let body = json!({"id": "fld_a", "name": "Cloning"});
        assert_eq!(FOLDER.hydrate(&body), FOLDER.hydrate(&body));

        let other = FOLDER.hydrate(&json!({"id": "fld_a", "name": "Renamed"}));
        assert_ne!(FOLDER.hydrate(&body), other);
    }

    #[test]
    fn test_equality_never_crosses_kinds() {
        let body = json!({"handle": "ada", "id": "ent_1", "name": "Ada"});
        let user = USER_SUMMARY.hydrate(&body);
        let team = TEAM_SUMMARY.hydrate(&body);
        assert_ne!(user, team);
    }

    #[test]
    fn test_serialize_skips_absent_and_recurses() {
        let record = DNA_SEQUENCE.hydrate(&json!({
            "id": "seq_1",
            "name": "pUC19",
            "isCircular": true,
            "creator": {"handle": "ada", "id": "ent_1", "name": "Ada"},
            "annotations": [{"name": "lacZ", "start": 100, "end": 400}]
        }));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "seq_1",
                "name": "pUC19",
                "isCircular": true,
                "creator": {"handle": "ada", "id": "ent_1", "name": "Ada"},
                "annotations": [{"name": "lacZ", "start": 100, "end": 400}]
            })
        );
    }

    #[test]
    fn test_scalar_accessors() {
        let record = DNA_SEQUENCE.hydrate(&json!({
            "id": "seq_1",
            "name": "pUC19",
            "bases": "GATTACA",
            "length": 2686,
            "isCircular": true
        }));

        assert_eq!(record.id(), Some("seq_1"));
        assert_eq!(record.as_str("bases"), Some("GATTACA"));
        assert_eq!(record.as_i64("length"), Some(2686));
        assert_eq!(record.as_f64("length"), Some(2686.0));
        assert_eq!(record.as_bool("isCircular"), Some(true));
        // Wrong-type reads answer None instead of panicking
        assert_eq!(record.as_i64("name"), None);
        assert_eq!(record.as_str("length"), None);
    }

    #[test]
    fn test_as_datetime() {
        let record = DNA_SEQUENCE.hydrate(&json!({
            "createdAt": "2020-01-10T01:33:33.888Z",
            "modifiedAt": "not a timestamp"
        }));

        let created = record.as_datetime("createdAt").unwrap();
        assert_eq!(created.timestamp(), 1578620013);
        assert_eq!(record.as_datetime("modifiedAt"), None);
        assert_eq!(record.as_datetime("webUrl"), None);
    }

    #[test]
    fn test_envelope_key_defaults_to_endpoint() {
        assert_eq!(FOLDER.envelope_key(), Some("folders"));
        assert_eq!(DNA_SEQUENCE.envelope_key(), Some("dnaSequences"));
        assert_eq!(USER_SUMMARY.envelope_key(), None);
    }

    #[test]
    fn test_fields_iterate_in_schema_order() {
        let record = FOLDER.hydrate(&json!({"id": "fld_a"}));
        let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, FOLDER.fields);
    }
}
