/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const SEED_DEPARTMENTS: [&str; 2] = ["Engineering", "Marketing"];

pub const SEED_ROLES: [&str; 3] = ["Software Engineer", "Marketing Specialist", "Product Manager"];

pub const SEED_EMPLOYEES: [(&str, &str); 3] = [
    ("Rahul Sharma", "rahul.sharma@example.com"),
    ("Priya Singh", "priya.singh@example.com"),
    ("Ankit Verma", "ankit.verma@example.com"),
];

/// (department index, role index) per seeded employee, in `SEED_EMPLOYEES` order.
pub const SEED_ASSIGNMENTS: [(usize, usize); 3] = [(0, 0), (1, 1), (0, 2)];
