//! Output document trees.
//!
//! Every artifact is an explicit struct: a keyword is either a required part
//! of the document shape or an `Option` that serializes only when the source
//! cell was present. Nothing here auto-creates nested objects, so a sparse
//! row can never leak an accidental empty sub-object into the output.
//! Property maps are insertion-ordered to keep source row order.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Japanese/English text pair. Structural labels are always emitted, empty
/// when the sheet does not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BilingualText {
    pub ja: String,
    pub en: String,
}

impl BilingualText {
    pub fn from_cells(ja: Option<&str>, en: Option<&str>) -> Self {
        Self {
            ja: ja.unwrap_or_default().to_string(),
            en: en.unwrap_or_default().to_string(),
        }
    }
}

/// Optional placeholder text pair inside `options`.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ja: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

/// Widget options block of a property schema.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlaceholderText>,
}

/// Per-parameter schema entry, shared by the invoice `custom` block and the
/// catalog block. Field order mirrors the emitted keyword order.
#[derive(Debug, Clone, Serialize)]
pub struct PropertySchema {
    pub label: BilingualText,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A single-element array in the invoice schema, a scalar in the catalog
    /// schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<Value>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(rename = "exclusiveMaximum", skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(rename = "exclusiveMinimum", skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

// ---------------------------------------------------------------------------
// metadata-def.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct DefinitionSchema {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// One parameter entry of the definition document.
#[derive(Debug, Clone, Serialize)]
pub struct DefinitionEntry {
    pub name: BilingualText,
    pub schema: DefinitionSchema,
    /// 1-based position among output-enabled rows, in source order.
    pub order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// The integer `1` when the row's variable flag is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
}

pub type DefinitionDocument = IndexMap<String, DefinitionEntry>;

// ---------------------------------------------------------------------------
// invoice.schema.json
// ---------------------------------------------------------------------------

/// Constant-pinning entry such as `{"const": "<term id>"}`.
#[derive(Debug, Clone, Serialize)]
pub struct ConstEntry {
    #[serde(rename = "const")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneralTermProperties {
    #[serde(rename = "termId")]
    pub term_id: ConstEntry,
}

/// Item schema pinning one general attribute to its dictionary term id.
#[derive(Debug, Clone, Serialize)]
pub struct GeneralTermConstraint {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub required: Vec<&'static str>,
    pub properties: GeneralTermProperties,
}

impl GeneralTermConstraint {
    pub fn new(term_id: impl Into<String>) -> Self {
        Self {
            ty: "object",
            required: vec!["termId"],
            properties: GeneralTermProperties {
                term_id: ConstEntry {
                    value: term_id.into(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecificTermProperties {
    #[serde(rename = "classId")]
    pub class_id: ConstEntry,
    #[serde(rename = "termId")]
    pub term_id: ConstEntry,
}

/// Item schema pinning one specific attribute to its class and term ids.
#[derive(Debug, Clone, Serialize)]
pub struct SpecificTermConstraint {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub required: Vec<&'static str>,
    pub properties: SpecificTermProperties,
}

impl SpecificTermConstraint {
    pub fn new(class_id: impl Into<String>, term_id: impl Into<String>) -> Self {
        Self {
            ty: "object",
            required: vec!["classId", "termId"],
            properties: SpecificTermProperties {
                class_id: ConstEntry {
                    value: class_id.into(),
                },
                term_id: ConstEntry {
                    value: term_id.into(),
                },
            },
        }
    }
}

/// Array schema whose `items` lists one constraint object per attribute row.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeArraySchema<T> {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub items: Vec<T>,
}

impl<T> AttributeArraySchema<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { ty: "array", items }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomBlock {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub label: BilingualText,
    pub required: Vec<String>,
    pub properties: IndexMap<String, PropertySchema>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SampleAttributeSchemas {
    #[serde(rename = "generalAttributes", skip_serializing_if = "Option::is_none")]
    pub general_attributes: Option<AttributeArraySchema<GeneralTermConstraint>>,
    #[serde(rename = "specificAttributes", skip_serializing_if = "Option::is_none")]
    pub specific_attributes: Option<AttributeArraySchema<SpecificTermConstraint>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleSchemaBlock {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub label: BilingualText,
    pub properties: SampleAttributeSchemas,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<SampleSchemaBlock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSchemaDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub required: Vec<String>,
    pub properties: InvoiceProperties,
}

// ---------------------------------------------------------------------------
// invoice.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct BasicBlock {
    #[serde(rename = "dateSubmitted")]
    pub date_submitted: String,
    #[serde(rename = "dataOwnerId")]
    pub data_owner_id: String,
    #[serde(rename = "dataName")]
    pub data_name: String,
    #[serde(rename = "instrumentId")]
    pub instrument_id: String,
    #[serde(rename = "experimentId")]
    pub experiment_id: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralAttribute {
    #[serde(rename = "termId")]
    pub term_id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecificAttribute {
    #[serde(rename = "classId")]
    pub class_id: String,
    #[serde(rename = "termId")]
    pub term_id: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleExample {
    #[serde(rename = "sampleId")]
    pub sample_id: String,
    pub names: Vec<String>,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    #[serde(rename = "referenceUrl", skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_samples: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "generalAttributes", skip_serializing_if = "Option::is_none")]
    pub general_attributes: Option<Vec<GeneralAttribute>>,
    #[serde(rename = "specificAttributes", skip_serializing_if = "Option::is_none")]
    pub specific_attributes: Option<Vec<SpecificAttribute>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceExampleDocument {
    #[serde(rename = "datasetId")]
    pub dataset_id: String,
    pub basic: BasicBlock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<IndexMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<SampleExample>,
}

// ---------------------------------------------------------------------------
// catalog.schema.json / catalog.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CatalogBlock {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub label: BilingualText,
    pub required: Vec<String>,
    pub properties: IndexMap<String, PropertySchema>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogProperties {
    pub catalog: CatalogBlock,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSchemaDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub properties: CatalogProperties,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogExampleDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub catalog: IndexMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_schema_is_sparse() {
        let prop = PropertySchema {
            label: BilingualText::from_cells(Some("温度"), Some("Temperature")),
            ty: "number".to_string(),
            format: None,
            description: None,
            examples: None,
            default: None,
            const_value: None,
            enum_values: None,
            options: None,
            maximum: None,
            exclusive_maximum: None,
            minimum: Some(0.0),
            exclusive_minimum: None,
            max_length: None,
            min_length: None,
            pattern: None,
        };
        let value = serde_json::to_value(&prop).expect("serialize");
        assert_eq!(
            value,
            json!({
                "label": {"ja": "温度", "en": "Temperature"},
                "type": "number",
                "minimum": 0.0
            })
        );
    }

    #[test]
    fn specific_constraint_shape() {
        let item = SpecificTermConstraint::new("c1", "t1");
        let value = serde_json::to_value(&item).expect("serialize");
        assert_eq!(
            value,
            json!({
                "type": "object",
                "required": ["classId", "termId"],
                "properties": {
                    "classId": {"const": "c1"},
                    "termId": {"const": "t1"}
                }
            })
        );
    }

    #[test]
    fn empty_sample_properties_serialize_as_empty_object() {
        let block = SampleSchemaBlock {
            ty: "object",
            label: BilingualText::from_cells(None, None),
            properties: SampleAttributeSchemas::default(),
        };
        let value = serde_json::to_value(&block).expect("serialize");
        assert_eq!(value["properties"], json!({}));
    }
}
