use registry_core::{is_blank, Member, MemberValidationError};

#[test]
fn new_member_keeps_supplied_values() {
    let member = Member::new(Some(5), "Jamie Lannister", "123456-1234").unwrap();

    assert_eq!(member.id(), Some(5));
    assert_eq!(member.name(), "Jamie Lannister");
    assert_eq!(member.social_security_number(), "123456-1234");
}

#[test]
fn unsaved_member_has_no_id() {
    let member = Member::unsaved("Cersei Lannister", "654321-0987").unwrap();
    assert_eq!(member.id(), None);
}

#[test]
fn id_is_not_validated() {
    let member = Member::new(Some(-3), "Arya Stark", "000000-0000").unwrap();
    assert_eq!(member.id(), Some(-3));
}

#[test]
fn new_rejects_blank_fields() {
    assert_eq!(
        Member::new(None, "", "123456-1234").unwrap_err(),
        MemberValidationError::EmptyName
    );
    assert_eq!(
        Member::new(None, "   ", "123456-1234").unwrap_err(),
        MemberValidationError::EmptyName
    );
    assert_eq!(
        Member::new(None, "Jamie Lannister", "").unwrap_err(),
        MemberValidationError::EmptySocialSecurityNumber
    );
}

#[test]
fn setters_reject_blank_values_without_mutating() {
    let mut member = Member::unsaved("Jamie Lannister", "123456-1234").unwrap();

    assert_eq!(
        member.set_name("").unwrap_err(),
        MemberValidationError::EmptyName
    );
    assert_eq!(
        member.set_social_security_number("\t").unwrap_err(),
        MemberValidationError::EmptySocialSecurityNumber
    );
    assert_eq!(member.name(), "Jamie Lannister");
    assert_eq!(member.social_security_number(), "123456-1234");

    member.set_name("Sansa Stark").unwrap();
    member.set_social_security_number("111111-2222").unwrap();
    assert_eq!(member.name(), "Sansa Stark");
    assert_eq!(member.social_security_number(), "111111-2222");
}

#[test]
fn is_blank_treats_whitespace_as_missing() {
    assert!(is_blank(""));
    assert!(is_blank(" \n"));
    assert!(!is_blank(" x "));
}

#[test]
fn member_serialization_uses_expected_fields() {
    let member = Member::new(Some(7), "Cersei Lannister", "654321-0987").unwrap();

    let json = serde_json::to_value(&member).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Cersei Lannister");
    assert_eq!(json["social_security_number"], "654321-0987");

    let decoded: Member = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, member);
}

#[test]
fn deserialize_rejects_blank_name() {
    let value = serde_json::json!({
        "id": null,
        "name": "",
        "social_security_number": "654321-0987"
    });

    let err = serde_json::from_value::<Member>(value).unwrap_err();
    assert!(
        err.to_string().contains("name cannot be blank"),
        "unexpected error: {err}"
    );
}
