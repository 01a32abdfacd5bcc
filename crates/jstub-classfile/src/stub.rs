use crate::classfile::ClassFile;
use crate::code::LocalVariable;
use crate::descriptor::{parse_field_descriptor, parse_method_descriptor, FieldType, MethodDescriptor};
use crate::error::Result;
use crate::signature::{
    parse_class_signature, parse_field_signature, parse_method_signature, ClassSignature,
    FieldTypeSignature, MethodSignature,
};

/// A class file with its class-level signature parsed; field and method
/// descriptors/signatures are kept raw and parsed lazily via
/// `FieldStub::parse`/`MethodStub::parse`, so a single malformed member
/// cannot abort parsing of the whole class.
#[derive(Debug, Clone)]
pub struct ClassStub {
    pub internal_name: String,
    pub access_flags: u16,
    pub super_class: Option<String>,
    pub interfaces: Vec<String>,
    pub signature: Option<ClassSignature>,
    pub inner_classes: Vec<crate::InnerClassInfo>,
    pub has_enclosing_method: bool,
    pub fields: Vec<FieldStub>,
    pub methods: Vec<MethodStub>,
}

#[derive(Debug, Clone)]
pub struct FieldStub {
    pub access_flags: u16,
    pub name: String,
    pub descriptor: String,
    pub signature: Option<String>,
}

impl FieldStub {
    /// Parse this field's descriptor and (if present) generic signature.
    ///
    /// Deferred until a caller actually renders this field so that one
    /// malformed field's descriptor/signature cannot abort the whole class.
    pub fn parse(&self) -> Result<(FieldType, Option<FieldTypeSignature>)> {
        let parsed_descriptor = parse_field_descriptor(&self.descriptor)?;
        let signature = match self.signature.as_deref() {
            Some(sig) => Some(parse_field_signature(sig)?),
            None => None,
        };
        Ok((parsed_descriptor, signature))
    }
}

#[derive(Debug, Clone)]
pub struct MethodStub {
    pub access_flags: u16,
    pub name: String,
    pub descriptor: String,
    pub signature: Option<String>,
    pub local_variables: Vec<LocalVariable>,
}

impl MethodStub {
    /// Parse this method's descriptor and (if present) generic signature.
    ///
    /// Deferred until a caller actually renders this method so that one
    /// malformed overload's descriptor/signature cannot abort the whole class.
    pub fn parse(&self) -> Result<(MethodDescriptor, Option<MethodSignature>)> {
        let parsed_descriptor = parse_method_descriptor(&self.descriptor)?;
        let signature = match self.signature.as_deref() {
            Some(sig) => Some(parse_method_signature(sig)?),
            None => None,
        };
        Ok((parsed_descriptor, signature))
    }
}

impl ClassStub {
    pub fn from_classfile(class: &ClassFile) -> Result<Self> {
        let signature = match class.signature.as_deref() {
            Some(sig) => Some(parse_class_signature(sig)?),
            None => None,
        };

        let fields = class
            .fields
            .iter()
            .map(|f| FieldStub {
                access_flags: f.access_flags,
                name: f.name.clone(),
                descriptor: f.descriptor.clone(),
                signature: f.signature.clone(),
            })
            .collect();

        let methods = class
            .methods
            .iter()
            .map(|m| MethodStub {
                access_flags: m.access_flags,
                name: m.name.clone(),
                descriptor: m.descriptor.clone(),
                signature: m.signature.clone(),
                local_variables: m.local_variables.clone(),
            })
            .collect();

        Ok(ClassStub {
            internal_name: class.this_class.clone(),
            access_flags: class.access_flags,
            super_class: class.super_class.clone(),
            interfaces: class.interfaces.clone(),
            signature,
            inner_classes: class.inner_classes.clone(),
            has_enclosing_method: class.has_enclosing_method,
            fields,
            methods,
        })
    }
}

impl ClassFile {
    pub fn stub(&self) -> Result<ClassStub> {
        ClassStub::from_classfile(self)
    }
}
