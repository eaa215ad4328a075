//! Product payload validation scenarios

use serde_json::{Value, json};
use testresult::TestResult;

use shopfront::{
    FormFieldType, NewProduct, ProductUpdate, Rule, SchemaName, Validated, ValidationErrors,
    validate, validate_as,
};

fn product() -> Value {
    json!({
        "title": "T",
        "description": "D",
        "poster": "P",
        "categories": ["a"],
        "variations": [{
            "product_code": "X1",
            "title": "V",
            "description": "d",
            "price": 10,
            "published": true,
        }],
        "form": [{ "name": "Size", "type": "text" }],
        "published": true,
    })
}

fn with(mut payload: Value, field: &str, value: Value) -> Value {
    if let Some(object) = payload.as_object_mut() {
        object.insert(field.to_string(), value);
    }

    payload
}

fn without(mut payload: Value, field: &str) -> Value {
    if let Some(object) = payload.as_object_mut() {
        object.remove(field);
    }

    payload
}

fn create_errors(payload: &Value) -> ValidationErrors {
    match validate_as::<NewProduct>(payload) {
        Ok(product) => unreachable!("expected validation to fail, got {product:?}"),
        Err(errors) => errors,
    }
}

fn rule_at<'a>(errors: &'a ValidationErrors, path: &str) -> Option<&'a Rule> {
    errors.at(path).map(|error| &error.rule)
}

#[test]
fn slug_is_optional_on_create() -> TestResult {
    let product = validate_as::<NewProduct>(&product())?;

    assert_eq!(product.title, "T");
    assert_eq!(product.slug, None);
    assert_eq!(product.categories, vec!["a".to_string()]);
    assert_eq!(product.form.first().map(|f| f.field_type), Some(FormFieldType::Text));

    Ok(())
}

#[test]
fn slug_is_required_on_update() {
    let result = validate(SchemaName::UpdateProduct, &product());

    let Err(errors) = result else {
        unreachable!("update without slug must fail");
    };

    assert_eq!(errors.len(), 1, "only slug should be reported: {errors:?}");
    assert_eq!(rule_at(&errors, "slug"), Some(&Rule::Required));
}

#[test]
fn update_accepts_payload_with_slug() -> TestResult {
    let payload = with(product(), "slug", json!("t-shirt"));

    let validated = validate(SchemaName::UpdateProduct, &payload)?;

    assert!(
        matches!(&validated, Validated::UpdateProduct(ProductUpdate { slug, .. }) if slug == "t-shirt"),
        "expected update payload, got {validated:?}"
    );

    Ok(())
}

#[test]
fn valid_payload_round_trips_field_for_field() -> TestResult {
    let payload = with(product(), "slug", json!("t"));

    let created = validate_as::<NewProduct>(&payload)?;
    let updated = validate_as::<ProductUpdate>(&payload)?;

    assert_eq!(serde_json::to_value(&created)?, payload);
    assert_eq!(serde_json::to_value(&updated)?, payload);

    Ok(())
}

#[test]
fn scalar_descriptions_keep_their_type() -> TestResult {
    for description in [json!("text"), json!(42), json!(1.5), json!(false)] {
        let payload = with(product(), "description", description.clone());

        let product = validate_as::<NewProduct>(&payload)?;

        assert_eq!(serde_json::to_value(&product.description)?, description);
    }

    Ok(())
}

#[test]
fn every_missing_required_field_is_named() {
    for field in [
        "title",
        "description",
        "poster",
        "categories",
        "variations",
        "form",
        "published",
    ] {
        let errors = create_errors(&without(product(), field));

        assert_eq!(
            rule_at(&errors, field),
            Some(&Rule::Required),
            "expected {field} to be reported as required"
        );
    }
}

#[test]
fn empty_strings_count_as_missing_for_required_text() {
    let errors = create_errors(&with(product(), "title", json!("")));

    assert_eq!(rule_at(&errors, "title"), Some(&Rule::Required));
}

#[test]
fn empty_arrays_are_rejected() {
    for field in ["categories", "variations", "form"] {
        let errors = create_errors(&with(product(), field, json!([])));

        assert_eq!(errors.len(), 1, "expected a single error for empty {field}");
        assert_eq!(
            rule_at(&errors, field),
            Some(&Rule::ArrayTooSmall { min: 1, actual: 0 }),
            "expected {field} to be reported as too small"
        );
    }
}

#[test]
fn form_type_outside_enum_is_reported_at_its_index() {
    let payload = with(
        product(),
        "form",
        json!([
            { "name": "Size", "type": "text" },
            { "name": "Colour", "type": "colour" },
            { "name": "Count", "type": "number" },
        ]),
    );

    let errors = create_errors(&payload);

    assert_eq!(errors.len(), 1);
    assert!(
        matches!(
            rule_at(&errors, "form[1].type"),
            Some(Rule::EnumViolation { allowed }) if *allowed == ["text", "number"]
        ),
        "expected enum violation at form[1].type, got {errors:?}"
    );
}

#[test]
fn nested_errors_carry_index_paths() {
    let payload = with(
        product(),
        "variations",
        json!([
            { "product_code": "X1", "title": "V", "description": "d", "price": 10, "published": true },
            { "product_code": "X2", "title": "W", "description": "e", "price": "12", "published": true },
        ]),
    );

    let errors = create_errors(&payload);

    assert_eq!(errors.len(), 1);
    assert!(
        matches!(rule_at(&errors, "variations[1].price"), Some(Rule::TypeMismatch { .. })),
        "expected type mismatch at variations[1].price, got {errors:?}"
    );
}

#[test]
fn errors_accumulate_across_independent_fields() {
    let payload = without(
        with(
            with(product(), "published", json!("yes")),
            "categories",
            json!([]),
        ),
        "poster",
    );

    let errors = create_errors(&payload);

    let fields: Vec<String> = errors.iter().map(|e| e.field.to_string()).collect();

    assert_eq!(fields, vec!["poster", "categories", "published"]);
}

#[test]
fn nested_multiplicities_are_all_reported() {
    let payload = with(
        product(),
        "variations",
        json!([
            { "title": "V", "description": "d", "price": 10, "published": true },
            { "product_code": "X2", "title": "W", "description": "e", "price": 12 },
            "not-a-variation",
        ]),
    );

    let errors = create_errors(&payload);

    let fields: Vec<String> = errors.iter().map(|e| e.field.to_string()).collect();

    assert_eq!(
        fields,
        vec![
            "variations[0].product_code",
            "variations[1].published",
            "variations[2]",
        ]
    );
}

#[test]
fn non_string_categories_are_rejected() {
    let errors = create_errors(&with(product(), "categories", json!(["a", 7])));

    assert!(
        matches!(rule_at(&errors, "categories[1]"), Some(Rule::TypeMismatch { .. })),
        "expected type mismatch at categories[1], got {errors:?}"
    );
}

#[test]
fn malformed_roots_never_panic() {
    for payload in [json!(null), json!("product"), json!(3), json!([product()])] {
        for schema in SchemaName::ALL {
            let result = validate(schema, &payload);

            let Err(errors) = result else {
                unreachable!("{payload} must be rejected by {schema}");
            };

            assert_eq!(errors.len(), 1, "expected a single error for {payload}");
            assert!(
                matches!(rule_at(&errors, "<root>"), Some(Rule::MalformedRoot { .. })),
                "expected malformed root for {payload}"
            );
        }
    }
}

#[test]
fn validation_does_not_mutate_input() -> TestResult {
    let payload = with(product(), "unknown", json!({ "kept": true }));
    let before = payload.clone();

    let product = validate_as::<NewProduct>(&payload)?;

    assert_eq!(payload, before);
    assert_eq!(serde_json::to_value(&product)?, without(before, "unknown"));

    Ok(())
}
