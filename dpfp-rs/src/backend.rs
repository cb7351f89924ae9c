use crate::{DeviceId, DeviceInfo};

/// The device client runtime as seen by a `Session`.
///
/// Implementations follow the runtime's contract: `init` comes first, `terminate`
/// comes last, and identifiers are only valid in between.
pub trait Backend {
    /// Opens the runtime session.
    fn init(&mut self) -> crate::Result<()>;

    /// Lists the readers currently attached, in the order the runtime reports them.
    /// An empty list is not an error.
    fn enumerate_devices(&mut self) -> crate::Result<Vec<DeviceId>>;

    fn device_info(&mut self, id: &DeviceId) -> crate::Result<DeviceInfo>;

    /// Renders an identifier in its canonical `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}` form.
    fn device_id_text(&self, id: &DeviceId) -> crate::Result<String> {
        Ok(id.to_string())
    }

    /// Closes the runtime session.
    fn terminate(&mut self);
}
