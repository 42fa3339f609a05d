//! Role classification.
//!
//! Pure, deterministic mapping from resolved membership facts to a `Role`.
//! Two variants exist, one per membership backend: guild-role intersection
//! and free-text grade matching. Neither performs I/O and neither can fail;
//! anything unrecognized classifies as `Visitor`.

use crate::model::role::Role;

/// Configured Discord role IDs per authorization level, sourced from the
/// comma-separated `DISCORD_*_ROLE_IDS` environment variables.
#[derive(Clone, Debug, Default)]
pub struct RoleLists {
    pub admin: Vec<String>,
    pub rh: Vec<String>,
    pub employee: Vec<String>,
}

/// Grade keywords, uppercase, grouped by level. Groups are tested in
/// declaration order and the first containing group wins; order is the
/// tie-break, not keyword specificity ("Chef RH" is rh, not employee).
const ADMIN_GRADES: [&str; 2] = ["PATRON", "CO PATRON"];
const RH_GRADES: [&str; 2] = ["DRH", "RH"];
const EMPLOYEE_GRADES: [&str; 6] = [
    "RESPONSABLE",
    "CHEF",
    "CONFIRMÉ",
    "MÉCANO",
    "APPRENTI",
    "STAGIAIRE",
];

/// Classifies a set of guild role IDs against the configured lists.
///
/// Admin takes precedence over rh over employee; a user holding roles from
/// several lists gets the highest. An empty role set is a visitor.
pub fn classify_guild_roles(lists: &RoleLists, roles: &[String]) -> Role {
    let holds_any = |ids: &[String]| roles.iter().any(|role| ids.contains(role));

    if holds_any(&lists.admin) {
        Role::Admin
    } else if holds_any(&lists.rh) {
        Role::Rh
    } else if holds_any(&lists.employee) {
        Role::Employee
    } else {
        Role::Visitor
    }
}

/// Classifies a free-text grade string from the employee registry.
///
/// Matching is case-insensitive substring containment, evaluated per group
/// in declared order with first match winning.
pub fn classify_grade(grade: &str) -> Role {
    let grade = grade.to_uppercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|keyword| grade.contains(keyword));

    if contains_any(&ADMIN_GRADES) {
        Role::Admin
    } else if contains_any(&RH_GRADES) {
        Role::Rh
    } else if contains_any(&EMPLOYEE_GRADES) {
        Role::Employee
    } else {
        Role::Visitor
    }
}
