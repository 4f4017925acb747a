//! Entity implementation

slotmap::new_key_type! {
    /// Generational entity handle.
    ///
    /// A handle whose entity was removed never resolves again, even if the
    /// slot is reused.
    pub struct Entity;
}
