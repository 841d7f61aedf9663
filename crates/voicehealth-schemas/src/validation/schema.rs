//! JSON Schema rendition of the symptom report constraints
//!
//! Copyright (c) 2025 VoiceHealth Team
//! Licensed under the Apache-2.0 license

use crate::validation::symptom_report::{
    SEVERITY_FIELD, SEVERITY_MAX, SEVERITY_MIN, SYMPTOMS_FIELD, TRIGGERS_FIELD,
};
use serde_json::{json, Value};

/// Identifier of the published schema document
pub const SCHEMA_ID: &str = "https://voicehealth.dev/schemas/symptom-report.schema.json";

/// The symptom report constraints as a JSON Schema (draft 2020-12) document.
///
/// Accepts exactly the documents [`validate_value`](crate::validate_value)
/// accepts. Only accept/reject agrees; the validator's diagnostics carry
/// the ordering guarantees.
pub fn symptom_report_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": SCHEMA_ID,
        "title": "SymptomReport",
        "description": "A voice-logged symptom report ready to be persisted",
        "type": "object",
        "required": [SYMPTOMS_FIELD, SEVERITY_FIELD, TRIGGERS_FIELD],
        "properties": {
            SYMPTOMS_FIELD: { "type": "array" },
            SEVERITY_FIELD: {
                "type": "number",
                "minimum": SEVERITY_MIN,
                "maximum": SEVERITY_MAX
            },
            TRIGGERS_FIELD: { "type": "array" }
        },
        "additionalProperties": true
    })
}
