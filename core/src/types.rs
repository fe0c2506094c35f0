/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::{DatabaseConnection, Order};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Staffdir", display_name = "Staffdir", bin_name = "staffdir-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "STAFFDIR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "STAFFDIR_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "STAFFDIR_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "STAFFDIR_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "STAFFDIR_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

/// An employee enriched with its resolved department and role. Junction
/// resolution keeps the last matched link, so each association collapses to
/// at most one object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<MDepartment>,
    pub role: Option<MRole>,
}

impl EmployeeDetails {
    pub fn from_parts(
        employee: MEmployee,
        department: Option<MDepartment>,
        role: Option<MRole>,
    ) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            department,
            role,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EmployeesResponse {
    pub employees: Vec<EmployeeDetails>,
}

/// Sort direction for name ordering. Parses the exact query values "ASC" and
/// "DESC"; everything else is rejected before it reaches the query layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

pub type EDepartment = department::Entity;
pub type EEmployee = employee::Entity;
pub type EEmployeeDepartment = employee_department::Entity;
pub type EEmployeeRole = employee_role::Entity;
pub type ERole = role::Entity;

pub type MDepartment = department::Model;
pub type MEmployee = employee::Model;
pub type MEmployeeDepartment = employee_department::Model;
pub type MEmployeeRole = employee_role::Model;
pub type MRole = role::Model;

pub type ADepartment = department::ActiveModel;
pub type AEmployee = employee::ActiveModel;
pub type AEmployeeDepartment = employee_department::ActiveModel;
pub type AEmployeeRole = employee_role::ActiveModel;
pub type ARole = role::ActiveModel;

pub type CDepartment = department::Column;
pub type CEmployee = employee::Column;
pub type CEmployeeDepartment = employee_department::Column;
pub type CEmployeeRole = employee_role::Column;
pub type CRole = role::Column;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_parses_exact_values_only() {
        assert_eq!(SortOrder::parse("ASC"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("DESC"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("asc"), None);
        assert_eq!(SortOrder::parse("descending"), None);
        assert_eq!(SortOrder::parse(""), None);
    }

    #[test]
    fn employee_details_maps_base_fields() {
        let employee = MEmployee {
            id: 7,
            name: "Rahul Sharma".to_string(),
            email: "rahul.sharma@example.com".to_string(),
        };

        let details = EmployeeDetails::from_parts(employee, None, None);
        assert_eq!(details.id, 7);
        assert_eq!(details.name, "Rahul Sharma");
        assert!(details.department.is_none());
        assert!(details.role.is_none());
    }
}
