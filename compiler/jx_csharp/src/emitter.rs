//! Output Emitter
//!
//! Sink for translated text. The writer only ever appends; nothing emitted
//! is revisited.

/// Trait for receiving translated output.
pub trait Emitter {
    /// Append a text fragment.
    fn emit(&mut self, text: &str);
}

/// String-based emitter for in-memory translation.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the translated output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn emit(&mut self, text: &str) {
        (**self).emit(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_emitter_appends() {
        let mut emitter = StringEmitter::with_capacity(8);
        assert!(emitter.is_empty());
        emitter.emit("(int)");
        emitter.emit("((uint)(");
        assert_eq!(emitter.as_str(), "(int)((uint)(");
        assert_eq!(emitter.len(), 13);
        assert_eq!(emitter.output(), "(int)((uint)(");
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut emitter = StringEmitter::new();
        {
            let by_ref = &mut emitter;
            by_ref.emit("x");
        }
        assert_eq!(emitter.output(), "x");
    }
}
