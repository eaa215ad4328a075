//! Product response bodies

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use shopfront::{FormField, Variation};
use shopfront_app::domain::products::records::ProductRecord;

/// Purchasable variant of a product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariationResponse {
    pub product_code: String,
    pub title: String,
    pub description: String,
    /// Price, exactly as it was submitted
    #[salvo(schema(value_type = f64))]
    pub price: Number,
    pub published: bool,
}

impl From<Variation> for VariationResponse {
    fn from(variation: Variation) -> Self {
        Self {
            product_code: variation.product_code,
            title: variation.title,
            description: variation.description,
            price: variation.price,
            published: variation.published,
        }
    }
}

/// Input collected from the buyer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FormFieldResponse {
    pub name: String,
    /// Either `text` or `number`
    #[serde(rename = "type")]
    pub field_type: String,
}

impl From<FormField> for FormFieldResponse {
    fn from(field: FormField) -> Self {
        Self {
            name: field.name,
            field_type: field.field_type.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: u64,

    pub title: String,

    /// A string, number, or boolean, as submitted
    #[salvo(schema(value_type = Object))]
    pub description: Value,

    pub slug: String,

    pub poster: String,

    pub categories: Vec<String>,

    pub variations: Vec<VariationResponse>,

    pub form: Vec<FormFieldResponse>,

    pub published: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.into(),
            title: product.title,
            description: product.description.into(),
            slug: product.slug,
            poster: product.poster,
            categories: product.categories,
            variations: product.variations.into_iter().map(Into::into).collect(),
            form: product.form.into_iter().map(Into::into).collect(),
            published: product.published,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    /// Identifier of the removed product
    pub deleted: u64,
}
