//! JVM access-flag bits, as defined by the class file format (and mirrored by
//! `org.objectweb.asm.Opcodes`).

/// A raw `access_flags` bitmask carried by a class, field, or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessFlags(pub u16);

impl AccessFlags {
    pub const PUBLIC: u16 = 0x0001;
    pub const PRIVATE: u16 = 0x0002;
    pub const PROTECTED: u16 = 0x0004;
    pub const STATIC: u16 = 0x0008;
    pub const FINAL: u16 = 0x0010;
    pub const INTERFACE: u16 = 0x0200;
    pub const ABSTRACT: u16 = 0x0400;
    pub const SYNTHETIC: u16 = 0x1000;
    pub const ANNOTATION: u16 = 0x2000;
    pub const ENUM: u16 = 0x4000;
    pub const BRIDGE: u16 = 0x0040;
    pub const VARARGS: u16 = 0x0080;

    pub fn has(self, bit: u16) -> bool {
        self.0 & bit != 0
    }

    pub fn is_public(self) -> bool {
        self.has(Self::PUBLIC)
    }

    pub fn is_protected(self) -> bool {
        self.has(Self::PROTECTED)
    }

    /// Public or protected: the visibility threshold for stub emission.
    pub fn is_accessible(self) -> bool {
        self.is_public() || self.is_protected()
    }

    pub fn is_static(self) -> bool {
        self.has(Self::STATIC)
    }

    pub fn is_synthetic(self) -> bool {
        self.has(Self::SYNTHETIC)
    }

    pub fn is_bridge(self) -> bool {
        self.has(Self::BRIDGE)
    }

    pub fn is_varargs(self) -> bool {
        self.has(Self::VARARGS)
    }

    pub fn is_interface(self) -> bool {
        self.has(Self::INTERFACE)
    }
}

impl From<u16> for AccessFlags {
    fn from(bits: u16) -> Self {
        AccessFlags(bits)
    }
}
