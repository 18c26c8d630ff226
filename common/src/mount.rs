use crate::error::RenderError;
use std::collections::HashSet;
use tracing::{debug, error};

/// A page that exposes named mount points.
pub trait HostPage {
    fn has_mount(&self, mount_id: &str) -> bool;
}

/// Fails with [`RenderError::MissingMountPoint`] unless `page` has `mount_id`.
/// Callers must not render anything when this fails.
pub fn require_mount<P: HostPage + ?Sized>(page: &P, mount_id: &str) -> Result<(), RenderError> {
    if page.has_mount(mount_id) {
        debug!("Found mount point #{}", mount_id);
        Ok(())
    } else {
        let err = RenderError::MissingMountPoint(mount_id.to_string());
        error!("{}", err);
        Err(err)
    }
}

/// In-memory host page with a fixed set of mount points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticPage {
    mounts: HashSet<String>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mount(mut self, mount_id: impl Into<String>) -> Self {
        self.mounts.insert(mount_id.into());
        self
    }
}

impl HostPage for StaticPage {
    fn has_mount(&self, mount_id: &str) -> bool {
        self.mounts.contains(mount_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_mount_is_accepted() {
        let page = StaticPage::new().with_mount("main");
        assert_eq!(require_mount(&page, "main"), Ok(()));
    }

    #[test]
    fn test_missing_mount_point_is_reported() {
        let page = StaticPage::new().with_mount("app");
        assert_eq!(
            require_mount(&page, "main"),
            Err(RenderError::MissingMountPoint("main".to_string()))
        );
    }
}
