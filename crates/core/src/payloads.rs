//! Typed Payloads
//!
//! The values handed out once a raw payload has passed validation. Their serde
//! shape mirrors the schema they were validated against, so serializing one
//! yields the original payload minus any undeclared fields.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Number, Value};

use crate::schema::{CREATE_PRODUCT, FORM_FIELD, Schema, UPDATE_PRODUCT, VARIATION};

/// A typed value that is produced from a payload validated against `SCHEMA`.
pub trait Payload: DeserializeOwned {
    /// Schema the raw payload is checked against.
    const SCHEMA: &'static Schema;
}

/// Loosely typed scalar accepted for a product description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Text
    String(String),

    /// Number
    Number(Number),

    /// Flag
    Boolean(bool),
}

impl Scalar {
    /// The scalar's text, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            Self::Number(_) | Self::Boolean(_) => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(text) => Value::String(text),
            Scalar::Number(number) => Value::Number(number),
            Scalar::Boolean(flag) => Value::Bool(flag),
        }
    }
}

/// One purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    /// SKU code
    pub product_code: String,

    /// Variant title
    pub title: String,

    /// Variant description
    pub description: String,

    /// Price, kept exactly as supplied
    pub price: Number,

    /// Whether the variant can be ordered
    pub published: bool,
}

impl Payload for Variation {
    const SCHEMA: &'static Schema = &VARIATION;
}

/// Input type of a [`FormField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFieldType {
    /// Free text
    Text,

    /// Numeric
    Number,
}

impl FormFieldType {
    /// Wire name of the input type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
        }
    }
}

/// A custom input a buyer fills in when ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Label shown to the buyer
    pub name: String,

    /// Accepted input
    #[serde(rename = "type")]
    pub field_type: FormFieldType,
}

impl Payload for FormField {
    const SCHEMA: &'static Schema = &FORM_FIELD;
}

/// Validated product creation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Product title
    pub title: String,

    /// Product description
    pub description: Scalar,

    /// URL slug; derived from the title when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Poster image reference
    pub poster: String,

    /// Category names
    pub categories: Vec<String>,

    /// Purchasable variants
    pub variations: Vec<Variation>,

    /// Inputs collected at ordering time
    pub form: Vec<FormField>,

    /// Whether the product is listed
    pub published: bool,
}

impl Payload for NewProduct {
    const SCHEMA: &'static Schema = &CREATE_PRODUCT;
}

/// Validated product update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    /// Product title
    pub title: String,

    /// Product description
    pub description: Scalar,

    /// URL slug
    pub slug: String,

    /// Poster image reference
    pub poster: String,

    /// Category names
    pub categories: Vec<String>,

    /// Purchasable variants
    pub variations: Vec<Variation>,

    /// Inputs collected at ordering time
    pub form: Vec<FormField>,

    /// Whether the product is listed
    pub published: bool,
}

impl Payload for ProductUpdate {
    const SCHEMA: &'static Schema = &UPDATE_PRODUCT;
}

/// Output of [`crate::validate`], one variant per registered schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated {
    /// Validated [`VARIATION`]
    Variation(Variation),

    /// Validated [`FORM_FIELD`]
    FormField(FormField),

    /// Validated [`CREATE_PRODUCT`]
    CreateProduct(NewProduct),

    /// Validated [`UPDATE_PRODUCT`]
    UpdateProduct(ProductUpdate),
}
