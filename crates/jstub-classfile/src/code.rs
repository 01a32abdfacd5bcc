use crate::constant_pool::ConstantPool;
use crate::error::Result;
use crate::reader::Reader;

/// One entry of a method's `LocalVariableTable` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVariable {
    pub start_pc: u16,
    pub length: u16,
    pub name: String,
    pub descriptor: String,
    pub index: u16,
}

/// Parse the `Code` attribute body, returning the `LocalVariableTable` entries found in its
/// nested attributes. Absent when the method has no such table (e.g. no debug info was
/// compiled in, or the method is abstract/native and carries no `Code` attribute at all).
pub(crate) fn parse_local_variable_table(
    info: &[u8],
    cp: &ConstantPool,
) -> Result<Vec<LocalVariable>> {
    let mut reader = Reader::new(info);
    let _max_stack = reader.read_u2()?;
    let _max_locals = reader.read_u2()?;
    let code_length = reader.read_u4()? as usize;
    reader.read_bytes(code_length)?;

    let exception_table_length = reader.read_u2()? as usize;
    for _ in 0..exception_table_length {
        reader.read_bytes(8)?;
    }

    let mut locals = Vec::new();
    let attributes_count = reader.read_u2()? as usize;
    for _ in 0..attributes_count {
        let name_index = reader.read_u2()?;
        let length = reader.read_u4()? as usize;
        let body = reader.read_bytes(length)?;
        if cp.get_utf8(name_index)? == "LocalVariableTable" {
            let mut sub = Reader::new(body);
            let count = sub.read_u2()? as usize;
            for _ in 0..count {
                let start_pc = sub.read_u2()?;
                let var_length = sub.read_u2()?;
                let name_index = sub.read_u2()?;
                let descriptor_index = sub.read_u2()?;
                let index = sub.read_u2()?;
                locals.push(LocalVariable {
                    start_pc,
                    length: var_length,
                    name: cp.get_utf8(name_index)?.to_string(),
                    descriptor: cp.get_utf8(descriptor_index)?.to_string(),
                    index,
                });
            }
        }
    }

    Ok(locals)
}
