//! Schema Registry
//!
//! Every payload accepted by the service is described here as a static, ordered
//! list of field rules. The validator walks these descriptors; nothing else
//! inspects payload types at runtime.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Literals accepted for [`FORM_FIELD`]'s `type`.
pub const FORM_FIELD_TYPES: &[&str] = &["text", "number"];

/// Whether a field has to be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absent, `null` and (for string-like kinds) `""` are rejected.
    Required,

    /// Absent or `null` is accepted; anything else is checked.
    Optional,
}

/// Element type of an array field.
#[derive(Debug, Clone, Copy)]
pub enum Element {
    /// Every element must be a string.
    String,

    /// Every element must be an object satisfying the schema.
    Schema(&'static Schema),
}

/// Declared kind of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// JSON string
    String,

    /// Any of string, number or boolean.
    Scalar,

    /// JSON number
    Number,

    /// JSON boolean
    Boolean,

    /// String drawn from a fixed literal set.
    Enum(&'static [&'static str]),

    /// Array with a minimum length and a typed element.
    Array {
        /// Element type
        element: Element,

        /// Smallest accepted length
        min_items: usize,
    },
}

impl FieldKind {
    /// Whether an empty string counts as a missing value for this kind.
    pub const fn is_string_like(self) -> bool {
        matches!(self, Self::String | Self::Scalar)
    }
}

/// One field rule.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Field name in the payload
    pub name: &'static str,

    /// Presence rule
    pub presence: Presence,

    /// Declared kind
    pub kind: FieldKind,
}

impl Field {
    /// A field that must be supplied.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            presence: Presence::Required,
            kind,
        }
    }

    /// A field that may be omitted.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            presence: Presence::Optional,
            kind,
        }
    }

    /// Whether the field must be supplied.
    pub const fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }
}

/// An ordered set of field rules for one payload shape.
#[derive(Debug)]
pub struct Schema {
    /// Schema name
    pub name: &'static str,

    /// Field rules in declaration order
    pub fields: &'static [Field],
}

impl Schema {
    /// Looks up a field rule by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

const fn array_of(element: Element, min_items: usize) -> FieldKind {
    FieldKind::Array { element, min_items }
}

/// One purchasable variant of a product.
pub static VARIATION: Schema = Schema {
    name: "Variation",
    fields: &[
        Field::required("product_code", FieldKind::String),
        Field::required("title", FieldKind::String),
        Field::required("description", FieldKind::String),
        Field::required("price", FieldKind::Number),
        Field::required("published", FieldKind::Boolean),
    ],
};

/// A custom input a buyer fills in when ordering.
pub static FORM_FIELD: Schema = Schema {
    name: "FormField",
    fields: &[
        Field::required("name", FieldKind::String),
        Field::required("type", FieldKind::Enum(FORM_FIELD_TYPES)),
    ],
};

/// Product creation payload. `slug` may be omitted.
pub static CREATE_PRODUCT: Schema = Schema {
    name: "CreateProduct",
    fields: &[
        Field::required("title", FieldKind::String),
        Field::required("description", FieldKind::Scalar),
        Field::optional("slug", FieldKind::String),
        Field::required("poster", FieldKind::String),
        Field::required("categories", array_of(Element::String, 1)),
        Field::required("variations", array_of(Element::Schema(&VARIATION), 1)),
        Field::required("form", array_of(Element::Schema(&FORM_FIELD), 1)),
        Field::required("published", FieldKind::Boolean),
    ],
};

/// Product update payload. Unlike creation, `slug` is mandatory.
pub static UPDATE_PRODUCT: Schema = Schema {
    name: "UpdateProduct",
    fields: &[
        Field::required("title", FieldKind::String),
        Field::required("description", FieldKind::Scalar),
        Field::required("slug", FieldKind::String),
        Field::required("poster", FieldKind::String),
        Field::required("categories", array_of(Element::String, 1)),
        Field::required("variations", array_of(Element::Schema(&VARIATION), 1)),
        Field::required("form", array_of(Element::Schema(&FORM_FIELD), 1)),
        Field::required("published", FieldKind::Boolean),
    ],
};

/// Selects one of the registered schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaName {
    /// [`VARIATION`]
    Variation,

    /// [`FORM_FIELD`]
    FormField,

    /// [`CREATE_PRODUCT`]
    CreateProduct,

    /// [`UPDATE_PRODUCT`]
    UpdateProduct,
}

impl SchemaName {
    /// All registered schemas.
    pub const ALL: [Self; 4] = [
        Self::Variation,
        Self::FormField,
        Self::CreateProduct,
        Self::UpdateProduct,
    ];

    /// The schema this name refers to.
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Variation => &VARIATION,
            Self::FormField => &FORM_FIELD,
            Self::CreateProduct => &CREATE_PRODUCT,
            Self::UpdateProduct => &UPDATE_PRODUCT,
        }
    }
}

impl Display for SchemaName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.schema().name)
    }
}
