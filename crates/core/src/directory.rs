//! Static employee directory.
//!
//! Department and manager are denormalized onto the user row at registration
//! by looking up the employee id here. Unknown ids fall back to
//! General / "TBD".

/// Department and manager resolved for an employee id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeInfo {
    pub department: &'static str,
    pub manager: &'static str,
}

const DIRECTORY: [(&str, EmployeeInfo); 3] = [
    (
        "E0058",
        EmployeeInfo {
            department: "Engineering",
            manager: "A. Chen",
        },
    ),
    (
        "E0059",
        EmployeeInfo {
            department: "Product",
            manager: "S. Kim",
        },
    ),
    (
        "E0060",
        EmployeeInfo {
            department: "Design",
            manager: "M. Rodriguez",
        },
    ),
];

/// Fallback for employee ids not present in the directory.
pub const UNKNOWN_EMPLOYEE: EmployeeInfo = EmployeeInfo {
    department: "General",
    manager: "TBD",
};

/// Resolve department and manager for an employee id.
pub fn lookup_employee(employee_id: &str) -> EmployeeInfo {
    DIRECTORY
        .iter()
        .find(|(id, _)| *id == employee_id)
        .map(|(_, info)| *info)
        .unwrap_or(UNKNOWN_EMPLOYEE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_employee_resolves_department_and_manager() {
        let info = lookup_employee("E0058");
        assert_eq!(info.department, "Engineering");
        assert_eq!(info.manager, "A. Chen");
    }

    #[test]
    fn unknown_employee_falls_back_to_general() {
        let info = lookup_employee("E9999");
        assert_eq!(info, UNKNOWN_EMPLOYEE);
    }
}
