/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::{Path, Query, State};
use core::database::{
    add_employee, get_all_employees, get_employee_by_id, get_employees_by_department,
    get_employees_by_role, sort_employees_by_name,
};
use core::input::parse_id;
use core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct NewEmployeeRequest {
    #[serde(rename = "newEmployee")]
    pub new_employee: NewEmployee,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AddEmployeeResponse {
    #[serde(rename = "addEmployee")]
    pub add_employee: MEmployee,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SortQuery {
    pub order: Option<String>,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<EmployeesResponse>> {
    let employees = get_all_employees(&state.db).await?;

    if employees.is_empty() {
        return Err(WebError::no_employees());
    }

    Ok(Json(EmployeesResponse { employees }))
}

/// Always 200; an unknown or unparsable id yields an empty list.
pub async fn get_details(
    state: State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> WebResult<Json<EmployeesResponse>> {
    let employees = get_employee_by_id(&state.db, parse_id(&id)).await?;

    Ok(Json(EmployeesResponse { employees }))
}

pub async fn get_by_department(
    state: State<Arc<ServerState>>,
    Path(department_id): Path<String>,
) -> WebResult<Json<EmployeesResponse>> {
    let employees = get_employees_by_department(&state.db, parse_id(&department_id)).await?;

    if employees.is_empty() {
        return Err(WebError::no_employees_by_department());
    }

    Ok(Json(EmployeesResponse { employees }))
}

pub async fn get_by_role(
    state: State<Arc<ServerState>>,
    Path(role_id): Path<String>,
) -> WebResult<Json<EmployeesResponse>> {
    let employees = get_employees_by_role(&state.db, parse_id(&role_id)).await?;

    if employees.is_empty() {
        return Err(WebError::no_employees_by_role());
    }

    Ok(Json(EmployeesResponse { employees }))
}

pub async fn get_sorted_by_name(
    state: State<Arc<ServerState>>,
    Query(query): Query<SortQuery>,
) -> WebResult<Json<EmployeesResponse>> {
    let order = query
        .order
        .as_deref()
        .and_then(SortOrder::parse)
        .ok_or_else(WebError::invalid_order)?;

    let employees = sort_employees_by_name(&state.db, order).await?;

    Ok(Json(EmployeesResponse { employees }))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Json(body): Json<NewEmployeeRequest>,
) -> WebResult<Json<AddEmployeeResponse>> {
    let employee = add_employee(&state.db, body.new_employee.name, body.new_employee.email).await?;

    Ok(Json(AddEmployeeResponse {
        add_employee: employee,
    }))
}
