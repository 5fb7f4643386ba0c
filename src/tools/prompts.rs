// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Instruction guiding a caller through picking a catalog image and creating a workbench
pub fn create_workbench_prompt(namespace: &str, name: &str) -> String {
    format!(
        "I want to create a workbench named '{}' in namespace '{}'. Please check the image catalog \
         (read_image_catalog) to find a suitable Data Science image (prefer Python 3.12) and then \
         call the create_workbench tool.",
        name, namespace
    )
}
