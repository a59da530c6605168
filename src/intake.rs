//! Interface stub for the record-intake collaborator.
//!
//! This models the external web-request handler the harness is occasionally
//! deployed next to: validate a payload against its declared schema, persist a
//! record, answer with a structured success or validation-error response. It
//! has no interaction with the benchmark pipeline in either direction.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A persisted record: an assigned id plus the validated payload fields.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// HTTP-style outcome of a create request.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CreateResponse {
    /// Status 201 with the created record.
    Created { status: u16, record: Record },
    /// Status 400 with field-level error messages.
    Invalid {
        status: u16,
        errors: BTreeMap<String, Vec<String>>,
    },
}

impl CreateResponse {
    pub fn status(&self) -> u16 {
        match self {
            CreateResponse::Created { status, .. } => *status,
            CreateResponse::Invalid { status, .. } => *status,
        }
    }
}

/// In-memory record store backing the stub.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `payload` and persist a record from it.
    ///
    /// The schema requires a string field `name`. Validation failures return
    /// status 400 with one message list per offending field; success persists
    /// the record and returns status 201.
    pub fn create(&mut self, payload: Map<String, Value>) -> CreateResponse {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

        match payload.get("name") {
            None => {
                errors
                    .entry("name".to_string())
                    .or_default()
                    .push("is missing".to_string());
            }
            Some(Value::String(_)) => {}
            Some(_) => {
                errors
                    .entry("name".to_string())
                    .or_default()
                    .push("must be a string".to_string());
            }
        }

        if !errors.is_empty() {
            return CreateResponse::Invalid {
                status: 400,
                errors,
            };
        }

        let record = Record {
            id: self.records.len() as u64 + 1,
            fields: payload,
        };
        self.records.push(record.clone());

        CreateResponse::Created {
            status: 201,
            record,
        }
    }

    /// Number of persisted records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
