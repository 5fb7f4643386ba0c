// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, object access, and namespace enumeration.

pub mod client;
pub mod namespaces;
pub mod resources;

pub use client::create_client;
pub use resources::ResourceClient;
