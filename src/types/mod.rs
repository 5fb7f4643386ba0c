// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster object bindings and catalog records.

pub mod image;
pub mod notebook;

pub use image::{image_reference, image_stream_resource, ImageCatalogEntry};
pub use notebook::{Notebook, NotebookSpec, NotebookTemplateSpec, WorkbenchStatus};
