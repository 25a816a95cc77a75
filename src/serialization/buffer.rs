/// A random-access byte sink.
///
/// Writes append at the logical end and overwrite after [`set_position`]
/// moves the cursor back; a write straddling the end overwrites what it
/// covers and grows the rest. All multi-byte primitives are big-endian.
///
/// [`set_position`]: ByteBuffer::set_position
#[derive(Debug, Default)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
    pos: usize,
}

impl ByteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ByteBuffer {
            bytes: Vec::with_capacity(capacity),
            pos: 0,
        }
    }

    /// Current write offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor. Seeking past the end of the written region is a
    /// programmer error.
    pub fn set_position(&mut self, pos: usize) {
        assert!(
            pos <= self.bytes.len(),
            "position {pos} past end of buffer ({})",
            self.bytes.len()
        );
        self.pos = pos;
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        let overlap = (self.bytes.len() - self.pos).min(bytes.len());
        self.bytes[self.pos..self.pos + overlap].copy_from_slice(&bytes[..overlap]);
        self.bytes.extend_from_slice(&bytes[overlap..]);
        self.pos += bytes.len();
    }

    pub fn put_u8(&mut self, v: u8) {
        self.put_bytes(&[v]);
    }

    pub fn put_i8(&mut self, v: i8) {
        self.put_bytes(&v.to_be_bytes());
    }

    pub fn put_i16(&mut self, v: i16) {
        self.put_bytes(&v.to_be_bytes());
    }

    pub fn put_i32(&mut self, v: i32) {
        self.put_bytes(&v.to_be_bytes());
    }

    pub fn put_i64(&mut self, v: i64) {
        self.put_bytes(&v.to_be_bytes());
    }

    pub fn put_f32(&mut self, v: f32) {
        self.put_bytes(&v.to_be_bytes());
    }

    pub fn put_f64(&mut self, v: f64) {
        self.put_bytes(&v.to_be_bytes());
    }
}
