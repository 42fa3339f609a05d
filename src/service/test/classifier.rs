use crate::model::role::Role;
use crate::service::classifier::{classify_grade, classify_guild_roles, RoleLists};

fn lists() -> RoleLists {
    RoleLists {
        admin: vec!["111".to_string()],
        rh: vec!["222".to_string()],
        employee: vec!["333".to_string(), "334".to_string()],
    }
}

/// Tests that an admin role wins regardless of what else the set contains.
///
/// Expected: Role::Admin even when rh and employee roles are also present
#[test]
fn admin_takes_precedence_over_everything() {
    let roles = vec![
        "333".to_string(),
        "222".to_string(),
        "111".to_string(),
    ];
    assert_eq!(classify_guild_roles(&lists(), &roles), Role::Admin);
    assert_eq!(
        classify_guild_roles(&lists(), &["111".to_string()]),
        Role::Admin
    );
}

/// Tests that rh wins over employee when both lists intersect.
///
/// Expected: Role::Rh
#[test]
fn rh_takes_precedence_over_employee() {
    let roles = vec!["334".to_string(), "222".to_string()];
    assert_eq!(classify_guild_roles(&lists(), &roles), Role::Rh);
}

/// Tests classification of a plain employee role set.
///
/// Expected: Role::Employee
#[test]
fn employee_role_classifies_as_employee() {
    assert_eq!(
        classify_guild_roles(&lists(), &["334".to_string()]),
        Role::Employee
    );
}

/// Tests that an empty or unmatched role set yields visitor.
///
/// Expected: Role::Visitor
#[test]
fn unmatched_or_empty_roles_classify_as_visitor() {
    assert_eq!(classify_guild_roles(&lists(), &[]), Role::Visitor);
    assert_eq!(
        classify_guild_roles(&lists(), &["999".to_string()]),
        Role::Visitor
    );
}

/// Tests the admin grade keywords.
///
/// Expected: Role::Admin for both "Patron" and "Co Patron" spellings
#[test]
fn patron_grades_classify_as_admin() {
    assert_eq!(classify_grade("Patron"), Role::Admin);
    assert_eq!(classify_grade("Co Patron"), Role::Admin);
    assert_eq!(classify_grade("co patron"), Role::Admin);
}

/// Tests the rh grade keywords, including the precedence over the employee
/// group: "Chef RH" contains both "CHEF" and "RH" and must classify as rh
/// because the rh group is checked first.
///
/// Expected: Role::Rh
#[test]
fn rh_group_is_checked_before_employee_group() {
    assert_eq!(classify_grade("DRH"), Role::Rh);
    assert_eq!(classify_grade("rh"), Role::Rh);
    assert_eq!(classify_grade("Chef RH"), Role::Rh);
}

/// Tests that grade matching is case-insensitive, including on accented
/// keywords.
///
/// Expected: Role::Employee
#[test]
fn employee_grades_match_case_insensitively() {
    assert_eq!(classify_grade("chef d'équipe"), Role::Employee);
    assert_eq!(classify_grade("Mécano confirmé"), Role::Employee);
    assert_eq!(classify_grade("apprenti"), Role::Employee);
    assert_eq!(classify_grade("STAGIAIRE"), Role::Employee);
    assert_eq!(classify_grade("Responsable atelier"), Role::Employee);
}

/// Tests that unknown grades fall through to visitor.
///
/// Expected: Role::Visitor
#[test]
fn unknown_grades_classify_as_visitor() {
    assert_eq!(classify_grade("Client"), Role::Visitor);
    assert_eq!(classify_grade(""), Role::Visitor);
    assert_eq!(classify_grade("Aucun"), Role::Visitor);
}
