//! Property-based tests for the employee merge-patch semantics.

use proptest::prelude::*;

use crate::{Employee, EmployeeUpdate, Patch};

prop_compose! {
    fn arb_employee()(
        id in 1..i32::MAX,
        name in "[A-Za-z ]{1,40}",
        local in "[a-z]{3,10}",
        domain in "[a-z]{3,10}",
        department in "[A-Za-z]{2,20}",
    ) -> Employee {
        Employee {
            id,
            name,
            email: format!("{}@{}.com", local, domain),
            department,
        }
    }
}

fn arb_patch() -> impl Strategy<Value = Patch<String>> {
    prop_oneof![
        Just(Patch::Missing),
        "[A-Za-z]{1,20}".prop_map(Patch::Value),
    ]
}

prop_compose! {
    fn arb_update()(
        name in arb_patch(),
        email in arb_patch(),
        department in arb_patch(),
    ) -> EmployeeUpdate {
        EmployeeUpdate { name, email, department }
    }
}

fn merged(field: &Patch<String>, before: &str) -> String {
    field.as_value().cloned().unwrap_or_else(|| before.to_string())
}

proptest! {
    /// Fields left out of the update keep their prior values, present ones win.
    #[test]
    fn prop_merge_applies_only_present_fields(
        employee in arb_employee(),
        update in arb_update(),
    ) {
        let mut after = employee.clone();
        after.apply(update.clone());

        prop_assert_eq!(after.id, employee.id);
        prop_assert_eq!(after.name, merged(&update.name, &employee.name));
        prop_assert_eq!(after.email, merged(&update.email, &employee.email));
        prop_assert_eq!(after.department, merged(&update.department, &employee.department));
    }

    /// A payload survives a trip through JSON with its missing keys intact.
    #[test]
    fn prop_update_json_preserves_presence(update in arb_update()) {
        let json = serde_json::to_string(&update).unwrap();
        let parsed: EmployeeUpdate = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, update);
    }
}
