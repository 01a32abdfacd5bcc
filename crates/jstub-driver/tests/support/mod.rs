//! Hand-rolled class-file byte builder used only by this crate's tests, so that
//! signature/descriptor/local-variable-table behaviour can be exercised without
//! shipping real compiled `.class` fixtures.
#![allow(dead_code)]

pub struct ConstantPoolBuilder {
    bytes: Vec<u8>,
    next_index: u16,
}

impl ConstantPoolBuilder {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            next_index: 1,
        }
    }

    pub fn utf8(&mut self, s: &str) -> u16 {
        let idx = self.next_index;
        self.next_index += 1;
        self.bytes.push(1); // CONSTANT_Utf8
        self.bytes.extend_from_slice(&(s.len() as u16).to_be_bytes());
        self.bytes.extend_from_slice(s.as_bytes());
        idx
    }

    pub fn class(&mut self, internal_name: &str) -> u16 {
        let name_idx = self.utf8(internal_name);
        let idx = self.next_index;
        self.next_index += 1;
        self.bytes.push(7); // CONSTANT_Class
        self.bytes.extend_from_slice(&name_idx.to_be_bytes());
        idx
    }

    fn finish(self) -> (u16, Vec<u8>) {
        (self.next_index, self.bytes)
    }
}

pub struct Attr {
    pub name_idx: u16,
    pub body: Vec<u8>,
}

pub fn signature_attr(cp: &mut ConstantPoolBuilder, sig: &str) -> Attr {
    let name_idx = cp.utf8("Signature");
    let sig_idx = cp.utf8(sig);
    Attr {
        name_idx,
        body: sig_idx.to_be_bytes().to_vec(),
    }
}

pub fn inner_classes_attr(cp: &mut ConstantPoolBuilder, entries: &[(&str, Option<&str>, Option<&str>, u16)]) -> Attr {
    let name_idx = cp.utf8("InnerClasses");
    let mut body = (entries.len() as u16).to_be_bytes().to_vec();
    for (inner, outer, inner_name, access) in entries {
        body.extend_from_slice(&cp.class(inner).to_be_bytes());
        body.extend_from_slice(&outer.map(|o| cp.class(o)).unwrap_or(0).to_be_bytes());
        body.extend_from_slice(&inner_name.map(|n| cp.utf8(n)).unwrap_or(0).to_be_bytes());
        body.extend_from_slice(&access.to_be_bytes());
    }
    Attr { name_idx, body }
}

pub fn code_attr_with_locals(
    cp: &mut ConstantPoolBuilder,
    locals: &[(&str, &str, u16)],
) -> Attr {
    let code_name_idx = cp.utf8("Code");
    let lvt_name_idx = cp.utf8("LocalVariableTable");

    let mut lvt_body = (locals.len() as u16).to_be_bytes().to_vec();
    for (name, desc, index) in locals {
        lvt_body.extend_from_slice(&0u16.to_be_bytes()); // start_pc
        lvt_body.extend_from_slice(&1u16.to_be_bytes()); // length
        lvt_body.extend_from_slice(&cp.utf8(name).to_be_bytes());
        lvt_body.extend_from_slice(&cp.utf8(desc).to_be_bytes());
        lvt_body.extend_from_slice(&index.to_be_bytes());
    }

    let mut code_body = Vec::new();
    code_body.extend_from_slice(&1u16.to_be_bytes()); // max_stack
    code_body.extend_from_slice(&1u16.to_be_bytes()); // max_locals
    code_body.extend_from_slice(&1u32.to_be_bytes()); // code_length
    code_body.push(0xb1); // return
    code_body.extend_from_slice(&0u16.to_be_bytes()); // exception_table_length
    code_body.extend_from_slice(&1u16.to_be_bytes()); // attributes_count
    code_body.extend_from_slice(&lvt_name_idx.to_be_bytes());
    code_body.extend_from_slice(&(lvt_body.len() as u32).to_be_bytes());
    code_body.extend_from_slice(&lvt_body);

    Attr {
        name_idx: code_name_idx,
        body: code_body,
    }
}

pub struct MemberBuilder {
    pub access_flags: u16,
    pub name_idx: u16,
    pub desc_idx: u16,
    pub attrs: Vec<Attr>,
}

fn write_attrs(out: &mut Vec<u8>, attrs: &[Attr]) {
    out.extend_from_slice(&(attrs.len() as u16).to_be_bytes());
    for attr in attrs {
        out.extend_from_slice(&attr.name_idx.to_be_bytes());
        out.extend_from_slice(&(attr.body.len() as u32).to_be_bytes());
        out.extend_from_slice(&attr.body);
    }
}

fn write_member(out: &mut Vec<u8>, m: &MemberBuilder) {
    out.extend_from_slice(&m.access_flags.to_be_bytes());
    out.extend_from_slice(&m.name_idx.to_be_bytes());
    out.extend_from_slice(&m.desc_idx.to_be_bytes());
    write_attrs(out, &m.attrs);
}

#[allow(clippy::too_many_arguments)]
pub fn build_class(
    mut cp: ConstantPoolBuilder,
    access_flags: u16,
    this_class: u16,
    super_class: u16,
    interfaces: &[u16],
    fields: Vec<MemberBuilder>,
    methods: Vec<MemberBuilder>,
    class_attrs: Vec<Attr>,
) -> Vec<u8> {
    let _ = &mut cp;
    let (cp_count, cp_bytes) = cp.finish();

    let mut out = Vec::new();
    out.extend_from_slice(&0xCAFEBABEu32.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes()); // minor
    out.extend_from_slice(&52u16.to_be_bytes()); // major
    out.extend_from_slice(&cp_count.to_be_bytes());
    out.extend_from_slice(&cp_bytes);
    out.extend_from_slice(&access_flags.to_be_bytes());
    out.extend_from_slice(&this_class.to_be_bytes());
    out.extend_from_slice(&super_class.to_be_bytes());
    out.extend_from_slice(&(interfaces.len() as u16).to_be_bytes());
    for i in interfaces {
        out.extend_from_slice(&i.to_be_bytes());
    }
    out.extend_from_slice(&(fields.len() as u16).to_be_bytes());
    for f in &fields {
        write_member(&mut out, f);
    }
    out.extend_from_slice(&(methods.len() as u16).to_be_bytes());
    for m in &methods {
        write_member(&mut out, m);
    }
    write_attrs(&mut out, &class_attrs);
    out
}
