use objutil_core::errors::{ExError, ExErrorKind, ObjUtilError};
use objutil_core::Mapping;
use serde_json::json;

#[test]
fn test_collaborator_not_registered_verifiable_by_kind() {
    let err = ObjUtilError::CollaboratorNotRegistered {
        op: "pick".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Configuration);
    assert_eq!(ex_err.code(), "ERR_CONFIGURATION");
    assert_eq!(ex_err.op(), Some("pick"));
    assert!(ex_err.message().contains("register_key_set_factory"));
}

#[test]
fn test_domain_error_display_names_operation() {
    let err = ObjUtilError::CollaboratorNotRegistered {
        op: "pick".to_string(),
    };
    assert!(err.to_string().starts_with("pick: no key-set factory registered"));
    assert_eq!(err.kind(), ExErrorKind::Configuration);
}

#[test]
fn test_ex_error_display_carries_code() {
    let ex_err: ExError = ObjUtilError::CollaboratorNotRegistered {
        op: "pick".to_string(),
    }
    .into();
    let text = ex_err.to_string();
    assert!(text.starts_with("[ERR_CONFIGURATION] in operation 'pick'"));
}

#[test]
fn test_non_object_is_invalid_input() {
    let err = Mapping::try_from(json!("just a string")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.code(), "ERR_INVALID_INPUT");
    assert!(err.message().contains("string"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::Configuration, "ERR_CONFIGURATION"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
