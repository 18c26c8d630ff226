/// Id of the host page element the forum is rendered into.
pub const MOUNT_ID: &str = "main";
