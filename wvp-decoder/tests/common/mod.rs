//! Hand-assembled module bytes for integration tests

#![allow(dead_code)]

/// Unsigned LEB128 encoding of `value`
pub fn uleb(mut value: u32) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

/// Length-prefixed name
pub fn name(text: &str) -> Vec<u8> {
    let mut out = uleb(text.len() as u32);
    out.extend_from_slice(text.as_bytes());
    out
}

/// Module bytes built section by section
#[derive(Debug, Clone)]
pub struct ModuleBuilder {
    bytes: Vec<u8>,
}

impl Default for ModuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleBuilder {
    pub fn new() -> Self {
        Self {
            bytes: vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00],
        }
    }

    /// Append a section with raw contents
    pub fn section(mut self, id: u8, contents: &[u8]) -> Self {
        self.bytes.push(id);
        self.bytes.extend(uleb(contents.len() as u32));
        self.bytes.extend_from_slice(contents);
        self
    }

    /// Append a vector section: count followed by the concatenated entries
    pub fn vec_section(self, id: u8, entries: &[Vec<u8>]) -> Self {
        let mut contents = uleb(entries.len() as u32);
        for entry in entries {
            contents.extend_from_slice(entry);
        }
        self.section(id, &contents)
    }

    /// Type section of `() -> ()` signatures
    pub fn nullary_types(self, count: u32) -> Self {
        let entries: Vec<Vec<u8>> = (0..count).map(|_| vec![0x60, 0x00, 0x00]).collect();
        self.vec_section(0x01, &entries)
    }

    /// Function and code sections for `count` empty functions of type 0
    pub fn empty_functions(self, count: u32) -> Self {
        let funcs: Vec<Vec<u8>> = (0..count).map(|_| vec![0x00]).collect();
        let bodies: Vec<Vec<u8>> = (0..count).map(|_| vec![0x02, 0x00, 0x0B]).collect();
        self.vec_section(0x03, &funcs).vec_section(0x0A, &bodies)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
