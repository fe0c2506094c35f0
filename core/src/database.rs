/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::time::Duration;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    opt.sqlx_logging(cli.log_level == "debug");

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

/// Resolves the department of an employee through the junction table. With
/// multiple links, the last iterated link wins and the rest are discarded.
pub async fn get_employee_department(
    db: &DatabaseConnection,
    employee_id: i32,
) -> Result<Option<MDepartment>, DbErr> {
    let links = EEmployeeDepartment::find()
        .filter(CEmployeeDepartment::Employee.eq(employee_id))
        .all(db)
        .await?;

    let mut department = None;
    for link in links {
        department = EDepartment::find_by_id(link.department).one(db).await?;
    }

    Ok(department)
}

/// Same resolution as [`get_employee_department`], over the role junction.
pub async fn get_employee_role(
    db: &DatabaseConnection,
    employee_id: i32,
) -> Result<Option<MRole>, DbErr> {
    let links = EEmployeeRole::find()
        .filter(CEmployeeRole::Employee.eq(employee_id))
        .all(db)
        .await?;

    let mut role = None;
    for link in links {
        role = ERole::find_by_id(link.role).one(db).await?;
    }

    Ok(role)
}

pub async fn get_employee_details(
    db: &DatabaseConnection,
    employee: MEmployee,
) -> Result<EmployeeDetails, DbErr> {
    let department = get_employee_department(db, employee.id).await?;
    let role = get_employee_role(db, employee.id).await?;

    Ok(EmployeeDetails::from_parts(employee, department, role))
}

pub async fn get_all_employees(db: &DatabaseConnection) -> Result<Vec<EmployeeDetails>, DbErr> {
    let employees = EEmployee::find().all(db).await?;

    let mut details = Vec::with_capacity(employees.len());
    for employee in employees {
        details.push(get_employee_details(db, employee).await?);
    }

    Ok(details)
}

/// Returns at most one element; a missing or unparsable id yields an empty
/// list rather than an error.
pub async fn get_employee_by_id(
    db: &DatabaseConnection,
    employee_id: Option<i32>,
) -> Result<Vec<EmployeeDetails>, DbErr> {
    let Some(employee_id) = employee_id else {
        return Ok(Vec::new());
    };

    match EEmployee::find_by_id(employee_id).one(db).await? {
        Some(employee) => Ok(vec![get_employee_details(db, employee).await?]),
        None => Ok(Vec::new()),
    }
}

pub async fn get_employees_by_department(
    db: &DatabaseConnection,
    department_id: Option<i32>,
) -> Result<Vec<EmployeeDetails>, DbErr> {
    let Some(department_id) = department_id else {
        return Ok(Vec::new());
    };

    let links = EEmployeeDepartment::find()
        .filter(CEmployeeDepartment::Department.eq(department_id))
        .all(db)
        .await?;

    let mut details = Vec::new();
    for link in links {
        // Dangling links are skipped silently.
        if let Some(employee) = EEmployee::find_by_id(link.employee).one(db).await? {
            details.push(get_employee_details(db, employee).await?);
        }
    }

    Ok(details)
}

pub async fn get_employees_by_role(
    db: &DatabaseConnection,
    role_id: Option<i32>,
) -> Result<Vec<EmployeeDetails>, DbErr> {
    let Some(role_id) = role_id else {
        return Ok(Vec::new());
    };

    let links = EEmployeeRole::find()
        .filter(CEmployeeRole::Role.eq(role_id))
        .all(db)
        .await?;

    let mut details = Vec::new();
    for link in links {
        if let Some(employee) = EEmployee::find_by_id(link.employee).one(db).await? {
            details.push(get_employee_details(db, employee).await?);
        }
    }

    Ok(details)
}

pub async fn sort_employees_by_name(
    db: &DatabaseConnection,
    order: SortOrder,
) -> Result<Vec<EmployeeDetails>, DbErr> {
    let employees = EEmployee::find()
        .order_by(CEmployee::Name, order.into())
        .all(db)
        .await?;

    let mut details = Vec::with_capacity(employees.len());
    for employee in employees {
        details.push(get_employee_details(db, employee).await?);
    }

    Ok(details)
}

pub async fn add_employee(
    db: &DatabaseConnection,
    name: String,
    email: String,
) -> Result<MEmployee, DbErr> {
    let employee = AEmployee {
        name: Set(name),
        email: Set(email),
        ..Default::default()
    };

    employee.insert(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn employee(id: i32, name: &str, email: &str) -> MEmployee {
        MEmployee {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn department_resolution_keeps_last_link() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                MEmployeeDepartment {
                    id: 1,
                    employee: 1,
                    department: 1,
                },
                MEmployeeDepartment {
                    id: 2,
                    employee: 1,
                    department: 2,
                },
            ]])
            .append_query_results([vec![MDepartment {
                id: 1,
                name: "Engineering".to_string(),
            }]])
            .append_query_results([vec![MDepartment {
                id: 2,
                name: "Marketing".to_string(),
            }]])
            .into_connection();

        let department = get_employee_department(&db, 1).await.unwrap();
        assert_eq!(
            department,
            Some(MDepartment {
                id: 2,
                name: "Marketing".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn department_resolution_without_links_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<MEmployeeDepartment>::new()])
            .into_connection();

        let department = get_employee_department(&db, 1).await.unwrap();
        assert!(department.is_none());
    }

    #[tokio::test]
    async fn employee_details_resolve_department_and_role() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![MEmployeeDepartment {
                id: 1,
                employee: 1,
                department: 1,
            }]])
            .append_query_results([vec![MDepartment {
                id: 1,
                name: "Engineering".to_string(),
            }]])
            .append_query_results([Vec::<MEmployeeRole>::new()])
            .into_connection();

        let details = get_employee_details(
            &db,
            employee(1, "Rahul Sharma", "rahul.sharma@example.com"),
        )
        .await
        .unwrap();

        assert_eq!(details.department.as_ref().map(|d| d.id), Some(1));
        assert!(details.role.is_none());
    }

    #[tokio::test]
    async fn employee_by_unknown_id_is_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<MEmployee>::new()])
            .into_connection();

        let details = get_employee_by_id(&db, Some(99)).await.unwrap();
        assert!(details.is_empty());
    }

    #[tokio::test]
    async fn employee_by_unparsable_id_skips_the_query() {
        // No results appended; nothing may hit the database.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let details = get_employee_by_id(&db, None).await.unwrap();
        assert!(details.is_empty());
    }

    #[tokio::test]
    async fn dangling_department_link_is_skipped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![MEmployeeDepartment {
                id: 1,
                employee: 42,
                department: 1,
            }]])
            .append_query_results([Vec::<MEmployee>::new()])
            .into_connection();

        let details = get_employees_by_department(&db, Some(1)).await.unwrap();
        assert!(details.is_empty());
    }

    #[tokio::test]
    async fn employees_by_role_resolve_details() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![MEmployeeRole {
                id: 1,
                employee: 1,
                role: 3,
            }]])
            .append_query_results([vec![employee(
                1,
                "Ankit Verma",
                "ankit.verma@example.com",
            )]])
            .append_query_results([vec![MEmployeeDepartment {
                id: 3,
                employee: 1,
                department: 1,
            }]])
            .append_query_results([vec![MDepartment {
                id: 1,
                name: "Engineering".to_string(),
            }]])
            .append_query_results([vec![MEmployeeRole {
                id: 1,
                employee: 1,
                role: 3,
            }]])
            .append_query_results([vec![MRole {
                id: 3,
                title: "Product Manager".to_string(),
            }]])
            .into_connection();

        let details = get_employees_by_role(&db, Some(3)).await.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].name, "Ankit Verma");
        assert_eq!(
            details[0].role.as_ref().map(|r| r.title.clone()),
            Some("Product Manager".to_string())
        );
    }

    #[tokio::test]
    async fn add_employee_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![employee(5, "X", "x@x.com")]])
            .into_connection();

        let created = add_employee(&db, "X".to_string(), "x@x.com".to_string())
            .await
            .unwrap();
        assert_eq!(created.id, 5);
    }
}
