use signup_form::{Field, FormValues, Messages, Schema};

fn schema() -> Schema {
    Schema::registration(&Messages::russian())
}

fn valid() -> FormValues {
    FormValues::new("alice", "alice@example.com", "Secret123", "Secret123")
}

// ============================================================================
// Username
// ============================================================================

#[test]
fn test_username_too_short() {
    for name in ["", "a", "ab"] {
        let values = FormValues {
            username: name.into(),
            ..valid()
        };
        let errors = schema().validate(&values).to_error_set();
        assert_eq!(
            errors.get(Field::Username),
            Some("Имя должно быть не менее 3 символов"),
            "username {:?}",
            name
        );
        assert_eq!(errors.len(), 1);
    }
}

#[test]
fn test_username_too_long() {
    let values = FormValues {
        username: "a".repeat(21),
        ..valid()
    };
    let errors = schema().validate(&values).to_error_set();
    assert_eq!(errors.get(Field::Username), Some("Имя слишком длинное"));
}

#[test]
fn test_username_bounds_inclusive() {
    for name in ["abc".to_string(), "a".repeat(20)] {
        let values = FormValues {
            username: name,
            ..valid()
        };
        assert!(schema().validate(&values).is_valid());
    }
}

#[test]
fn test_username_error_does_not_suppress_others() {
    let values = FormValues::new("al", "not-an-email", "short", "other");
    let errors = schema().validate(&values).to_error_set();

    assert_eq!(errors.len(), 4);
    assert!(errors.contains(Field::Username));
    assert!(errors.contains(Field::Email));
    assert!(errors.contains(Field::Password));
    assert!(errors.contains(Field::ConfirmPassword));
}

// ============================================================================
// Email
// ============================================================================

#[test]
fn test_email_without_domain_structure() {
    for email in [
        "",
        "alice",
        "alice@",
        "@example.com",
        "alice.example.com",
        "a!b@example.com",
        "a#b@example.com",
        "a{b}@example.com",
        "a~@example.com",
        "алиса@example.com",
        "a@example.co_m.com",
        ".alice@example.com",
        "al..ice@example.com",
    ] {
        let values = FormValues {
            email: email.into(),
            ..valid()
        };
        let errors = schema().validate(&values).to_error_set();
        assert_eq!(
            errors.get(Field::Email),
            Some("Введите корректный email"),
            "email {:?}",
            email
        );
    }
}

#[test]
fn test_short_email_is_valid() {
    let values = FormValues {
        email: "a@b.co".into(),
        ..valid()
    };
    assert!(schema().validate_field(Field::Email, &values).is_none());
}

// ============================================================================
// Password
// ============================================================================

#[test]
fn test_password_too_short() {
    let values = FormValues {
        password: "short1".into(),
        confirm_password: "short1".into(),
        ..valid()
    };
    let errors = schema().validate(&values).to_error_set();
    assert_eq!(
        errors.get(Field::Password),
        Some("Пароль должен быть не менее 8 символов")
    );
}

#[test]
fn test_password_missing_uppercase() {
    let values = FormValues {
        password: "longenough".into(),
        confirm_password: "longenough".into(),
        ..valid()
    };
    let errors = schema().validate(&values).to_error_set();
    assert_eq!(
        errors.get(Field::Password),
        Some("Пароль должен содержать хотя бы одну заглавную букву")
    );
}

#[test]
fn test_password_passes_both_rules() {
    let values = FormValues {
        password: "Longenough1".into(),
        confirm_password: "Longenough1".into(),
        ..valid()
    };
    assert!(schema().validate_field(Field::Password, &values).is_none());
}

// ============================================================================
// Confirmation
// ============================================================================

#[test]
fn test_mismatch_attached_to_confirmation_only() {
    let values = FormValues {
        password: "Abcdefgh".into(),
        confirm_password: "Abcdefgx".into(),
        ..valid()
    };
    let result = schema().validate(&values);
    let errors = result.to_error_set();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Пароли не совпадают"));
    assert_eq!(errors.get(Field::Password), None);
    assert_eq!(result.first_invalid_field(), Some(Field::ConfirmPassword));
}

#[test]
fn test_mismatch_reported_alongside_password_error() {
    let values = FormValues {
        password: "short".into(),
        confirm_password: "other".into(),
        ..valid()
    };
    let errors = schema().validate(&values).to_error_set();
    assert!(errors.contains(Field::Password));
    assert!(errors.contains(Field::ConfirmPassword));
}

#[test]
fn test_fully_valid_input() {
    let result = schema().validate(&valid());
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
}

#[test]
fn test_english_catalog() {
    let schema = Schema::registration(&Messages::english());
    let values = FormValues {
        confirm_password: "nope".into(),
        ..valid()
    };
    let errors = schema.validate(&values).to_error_set();
    assert_eq!(
        errors.get(Field::ConfirmPassword),
        Some("Passwords do not match")
    );
}
