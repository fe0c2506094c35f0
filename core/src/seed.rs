/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr};

use super::consts::{SEED_ASSIGNMENTS, SEED_DEPARTMENTS, SEED_EMPLOYEES, SEED_ROLES};
use super::types::*;

/// Drops and recreates every table. Only the seed endpoint uses this.
pub async fn reset_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::fresh(db).await
}

/// Inserts the fixed demo dataset. Runs after [`reset_schema`], so each call
/// produces the same rows; the statements are not wrapped in a transaction.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let mut departments = Vec::with_capacity(SEED_DEPARTMENTS.len());
    for name in SEED_DEPARTMENTS {
        let department = ADepartment {
            name: Set(name.to_string()),
            ..Default::default()
        };
        departments.push(department.insert(db).await?);
    }

    let mut roles = Vec::with_capacity(SEED_ROLES.len());
    for title in SEED_ROLES {
        let role = ARole {
            title: Set(title.to_string()),
            ..Default::default()
        };
        roles.push(role.insert(db).await?);
    }

    let mut employees = Vec::with_capacity(SEED_EMPLOYEES.len());
    for (name, email) in SEED_EMPLOYEES {
        let employee = AEmployee {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            ..Default::default()
        };
        employees.push(employee.insert(db).await?);
    }

    for (employee, (department_idx, role_idx)) in employees.iter().zip(SEED_ASSIGNMENTS) {
        let link = AEmployeeDepartment {
            employee: Set(employee.id),
            department: Set(departments[department_idx].id),
            ..Default::default()
        };
        link.insert(db).await?;

        let link = AEmployeeRole {
            employee: Set(employee.id),
            role: Set(roles[role_idx].id),
            ..Default::default()
        };
        link.insert(db).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn seed_inserts_the_fixed_dataset() {
        let mut mock = MockDatabase::new(DatabaseBackend::Postgres);

        for (id, name) in SEED_DEPARTMENTS.iter().enumerate() {
            mock = mock.append_query_results([vec![MDepartment {
                id: id as i32 + 1,
                name: name.to_string(),
            }]]);
        }

        for (id, title) in SEED_ROLES.iter().enumerate() {
            mock = mock.append_query_results([vec![MRole {
                id: id as i32 + 1,
                title: title.to_string(),
            }]]);
        }

        for (id, (name, email)) in SEED_EMPLOYEES.iter().enumerate() {
            mock = mock.append_query_results([vec![MEmployee {
                id: id as i32 + 1,
                name: name.to_string(),
                email: email.to_string(),
            }]]);
        }

        for (employee_idx, &(department_idx, role_idx)) in SEED_ASSIGNMENTS.iter().enumerate() {
            mock = mock
                .append_query_results([vec![MEmployeeDepartment {
                    id: employee_idx as i32 + 1,
                    employee: employee_idx as i32 + 1,
                    department: department_idx as i32 + 1,
                }]])
                .append_query_results([vec![MEmployeeRole {
                    id: employee_idx as i32 + 1,
                    employee: employee_idx as i32 + 1,
                    role: role_idx as i32 + 1,
                }]]);
        }

        let db = mock.into_connection();
        seed_demo_data(&db).await.unwrap();

        // 2 departments + 3 roles + 3 employees + 6 junction rows
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 14);
    }
}
