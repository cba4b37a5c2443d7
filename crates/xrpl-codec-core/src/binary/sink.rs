/// Append-only byte destination.
///
/// Implemented for `Vec<u8>` and for the SHA-512 half hasher, so the same
/// serialization code can build buffers or feed hashes without copying.
pub trait BytesSink {
    /// Append a slice.
    fn put(&mut self, bytes: &[u8]);

    /// Append a single byte.
    fn put_u8(&mut self, byte: u8) {
        self.put(&[byte]);
    }
}

impl BytesSink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    fn put_u8(&mut self, byte: u8) {
        self.push(byte);
    }
}

impl<S: BytesSink + ?Sized> BytesSink for &mut S {
    fn put(&mut self, bytes: &[u8]) {
        (**self).put(bytes);
    }

    fn put_u8(&mut self, byte: u8) {
        (**self).put_u8(byte);
    }
}
