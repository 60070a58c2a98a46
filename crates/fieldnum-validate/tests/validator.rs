use fieldnum_validate::{
    Field, FieldMetadata, FieldType, Messages, Validation, ValidatorError, validate_number,
    validator,
};
use serde_json::json;

fn check(field: &Field, response: serde_json::Value) -> Validation {
    validator(field, &Messages::default())
        .expect("field type should be supported")
        .validate(&response)
}

#[test]
fn statement_uses_custom_response_message() {
    let field = Field::new("statement", "foo")
        .with_title("foo")
        .with_metadata(FieldMetadata::default().with_response_message("foobarbaz"));
    let res = check(&field, json!({"foo": "bar"}));
    assert!(!res.valid);
    assert_eq!(res.message, "foobarbaz");
}

#[test]
fn statement_like_fields_fall_back_to_placeholder() {
    for kind in ["statement", "thankyou_screen", "share", "webview", "wait"] {
        let res = check(&Field::new(kind, "foo"), json!("anything"));
        assert!(!res.valid, "{kind}");
        assert_eq!(res.message, "Sorry, I can't accept any responses now.");
    }
}

#[test]
fn validates_numbers_via_field_type() {
    let field = Field::new("number", "foo");
    assert!(check(&field, json!("123")).valid);
    assert!(check(&field, json!(123)).valid);
    assert!(!check(&field, json!("abc")).valid);
    assert!(!check(&field, json!(true)).valid);
    assert!(!check(&field, json!(null)).valid);

    let res = check(&field, json!("12abc"));
    assert_eq!(res.message, "Sorry, please enter a valid number.");
}

#[test]
fn validates_numbers_using_locale_from_metadata() {
    let de = Field::new("number", "foo").with_metadata(FieldMetadata::default().with_locale("de-DE"));
    assert!(check(&de, json!("1.234,56")).valid);
    assert!(check(&de, json!("100,50")).valid);

    let us = Field::new("number", "foo");
    assert!(check(&us, json!("1,234.56")).valid);
    assert!(!check(&us, json!("1.234.567,89")).valid);
}

#[test]
fn validates_arabic_numerals_with_ar_sa_locale() {
    let field =
        Field::new("number", "foo").with_metadata(FieldMetadata::default().with_locale("ar-SA"));
    assert!(check(&field, json!("١٬٢٣٤٫٥٦")).valid);
    assert!(check(&field, json!("١٢٣")).valid);
    assert!(check(&field, json!("1,234.56")).valid);
    assert!(!check(&field, json!("١٢3")).valid);
}

#[test]
fn validate_number_is_exposed_directly() {
    let messages = Messages::with_overrides([("label.error.range", "Bitte eine Zahl")]);
    let field = Field::new("number", "n").with_metadata(FieldMetadata::default().with_locale("de-DE"));
    let v = validate_number(&field, &messages);
    assert_eq!(
        v.validate(&json!("zwölf")),
        Validation {
            valid: false,
            message: "Bitte eine Zahl".into()
        }
    );
    assert!(v.validate(&json!("12,5")).valid);
}

#[test]
fn text_fields_require_strings() {
    for kind in ["short_text", "long_text"] {
        let field = Field::new(kind, "foo");
        assert!(check(&field, json!("hello")).valid);
        let res = check(&field, json!({"sticker": 1}));
        assert!(!res.valid);
        assert_eq!(
            res.message,
            "Sorry, that answer is not valid. Please try to answer the question again."
        );
    }
}

#[test]
fn notify_requires_matching_ref() {
    let field = Field::new("notify", "foo").with_metadata(FieldMetadata::default().with_reference("abc"));
    assert!(check(&field, json!({"ref": "abc"})).valid);

    let res = check(&field, json!({"ref": "xyz"}));
    assert!(!res.valid);
    assert_eq!(
        res.message,
        "Sorry, please use the buttons provided to answer the question."
    );

    let without_ref = Field::new("notify", "foo");
    assert!(check(&without_ref, json!({})).valid);
    assert!(!check(&without_ref, json!({"ref": "abc"})).valid);
}

#[test]
fn email_requires_an_address() {
    let field = Field::new("email", "foo");
    assert!(check(&field, json!("nandan@example.org")).valid);

    let res = check(&field, json!("nandan at example"));
    assert!(!res.valid);
    assert_eq!(res.message, "Sorry, please enter a valid email address.");
    assert!(!check(&field, json!(42)).valid);
}

fn phone_field(mobile: bool) -> Field {
    Field::new("phone_number", "foo")
        .with_metadata(FieldMetadata::default().with_phone_rules("IN", mobile))
}

#[test]
fn phone_rejects_landline_when_mobile_required() {
    let res = check(&phone_field(true), json!("+914888000000"));
    assert!(!res.valid);
    assert_eq!(res.message, "Sorry, please enter a valid phone number.");
}

#[test]
fn phone_rejects_non_numbers() {
    let res = check(&phone_field(false), json!("9999"));
    assert!(!res.valid);
    assert_eq!(res.message, "Sorry, please enter a valid phone number.");
}

#[test]
fn phone_accepts_mobile_as_text_or_number() {
    let field = phone_field(true);
    assert!(check(&field, json!("+918888000000")).valid);
    assert!(check(&field, json!(8888000000_u64)).valid);
}

#[test]
fn upload_requires_type_and_url() {
    let image = Field::new("upload", "foo").with_metadata(FieldMetadata::default().with_upload_type("image"));
    let video = Field::new("upload", "foo").with_metadata(FieldMetadata::default().with_upload_type("video"));
    let attachment = json!({
        "type": "image",
        "payload": { "url": "https://example.com/cat.jpg" }
    });

    assert!(check(&image, attachment.clone()).valid);
    assert!(!check(&video, attachment).valid);
    assert!(!check(&image, json!(null)).valid);
    assert!(!check(&image, json!({"type": "image", "payload": {"url": ""}})).valid);
}

#[test]
fn unknown_field_type_is_a_configuration_error() {
    let err = validator(&Field::new("hologram", "foo"), &Messages::default()).unwrap_err();
    assert!(matches!(err, ValidatorError::UnknownFieldType(ref kind) if kind == "hologram"));
    assert_eq!(
        err.to_string(),
        "there is no validator for the question of type hologram"
    );
}

#[test]
fn every_supported_type_builds() {
    for kind in FieldType::ALL {
        assert!(validator(&Field::new(kind.as_str(), "f"), &Messages::default()).is_ok());
    }
}

#[test]
fn field_and_messages_load_from_yaml() {
    let field = Field::from_yaml_str(
        "type: number\nref: price\ntitle: Price?\nmd:\n  locale: ar-MA\n",
    )
    .unwrap();
    let messages = Messages::from_yaml_str("label.error.range: Nombre invalide\n").unwrap();
    let v = validator(&field, &messages).unwrap();

    assert!(v.validate(&json!("1 234,56")).valid);
    assert_eq!(v.validate(&json!("douze")).message, "Nombre invalide");
}
