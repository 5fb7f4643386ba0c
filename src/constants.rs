// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Annotation keys read or written on workbench and catalog objects
pub mod annotations {
    /// Present on a Notebook while it is stopped; the value is the stop timestamp
    pub const STOPPED: &str = "kubeflow-resource-stopped";
    pub const DISPLAY_NAME: &str = "openshift.io/display-name";
    pub const DESCRIPTION: &str = "openshift.io/description";
    pub const INJECT_AUTH: &str = "notebooks.opendatahub.io/inject-auth";
    pub const LAST_IMAGE_SELECTION: &str = "notebooks.opendatahub.io/last-image-selection";
    pub const HARDWARE_PROFILE_NAME: &str = "opendatahub.io/hardware-profile-name";
    pub const HARDWARE_PROFILE_NAMESPACE: &str = "opendatahub.io/hardware-profile-namespace";
    /// Human readable name of a catalog image stream
    pub const IMAGE_DISPLAY_NAME: &str = "opendatahub.io/notebook-image-name";
}

/// Label keys set on created objects
pub mod labels {
    pub const APP: &str = "app";
    pub const DASHBOARD: &str = "opendatahub.io/dashboard";
    pub const ODH_MANAGED: &str = "opendatahub.io/odh-managed";
}

/// Image catalog lookup
pub mod catalog {
    /// Only image streams carrying this label are part of the catalog
    pub const LABEL_SELECTOR: &str = "opendatahub.io/notebook-image=true";
    pub const DEFAULT_NAMESPACE: &str = "redhat-ods-applications";
    /// Reported when an image stream has no published repository yet
    pub const URL_NOT_AVAILABLE: &str = "URL not available";
}

/// Fixed shape of every provisioned workbench
pub mod workbench {
    pub const STORAGE_SIZE: &str = "10Gi";
    pub const STORAGE_ACCESS_MODE: &str = "ReadWriteOnce";
    pub const PORT: i32 = 8888;
    pub const PORT_NAME: &str = "notebook-port";
    pub const CPU: &str = "2";
    pub const MEMORY: &str = "4Gi";
    pub const WORKING_DIR: &str = "/opt/app-root/src";
    pub const STORAGE_MOUNT_PATH: &str = "/opt/app-root/src/";
    pub const STORAGE_VOLUME: &str = "storage-volume";
    pub const SHM_VOLUME: &str = "shm";
    pub const SHM_MOUNT_PATH: &str = "/dev/shm";
    pub const SERVICE_ACCOUNT: &str = "default";
    pub const HARDWARE_PROFILE: &str = "default-profile";
    pub const DESCRIPTION: &str = "Created via workbench manager";
}
