/// User interface module
///
/// - `sidebar.rs` - image list, file buttons, adjustment controls
/// - `viewer.rs` - preview area and frame upload helpers

pub mod sidebar;
pub mod viewer;
