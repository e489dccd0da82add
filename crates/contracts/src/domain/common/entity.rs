use super::resource::Resource;

/// Trait for records returned by the school backend
pub trait Entity {
    /// Resource the entity is listed under
    const RESOURCE: Resource;

    /// Primary key
    fn id(&self) -> i64;

    /// Human readable label (dropdown options, page titles)
    fn display_name(&self) -> String;

    /// Primary key as stored in the recently-viewed marker
    fn id_string(&self) -> String {
        self.id().to_string()
    }
}
