///
/// SchemaHooks
///
/// Optional lifecycle callbacks a record can implement to maintain
/// invariants around its own (de)serialization — spec §4.B, e.g. filling in
/// a content hash before encoding. All six hooks default to no-ops so most
/// records never implement this trait at all; the hooks are purely
/// observational/mutational on the record in caller memory and must not
/// resize the output buffer the schema composer already sized.
///
pub trait SchemaHooks: Sized {
    fn before_size(&self) {}
    fn after_size(&self, _encoded_len: usize) {}

    fn before_encode(&self) {}
    fn after_encode(&self, _out: &[u8]) {}

    fn before_decode(_input: &[u8]) {}
    fn after_decode(&mut self) {}
}
