/// Holds at most one installed handler for the lifetime of its owner.
///
/// The web shell keeps event closures in these slots so a second install
/// call finds the slot occupied and registers nothing.
#[derive(Debug)]
pub struct HandlerSlot<H> {
    handler: Option<H>,
}

impl<H> Default for HandlerSlot<H> {
    fn default() -> Self {
        Self { handler: None }
    }
}

impl<H> HandlerSlot<H> {
    pub const fn new() -> Self {
        Self { handler: None }
    }

    /// Runs `install` only when the slot is empty. Returns `Ok(true)` when a
    /// handler was installed by this call and `Ok(false)` when one already
    /// existed. A failed install leaves the slot empty.
    pub fn install_with<E, F>(&mut self, install: F) -> Result<bool, E>
    where
        F: FnOnce() -> Result<H, E>,
    {
        if self.handler.is_some() {
            return Ok(false);
        }
        self.handler = Some(install()?);
        Ok(true)
    }
}
