// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the moncal-core crate.
//!
//! These tests combine calendar edits, the audit log and the JSON file the
//! way a session does.

mod event_lifecycle;
mod save_load;
