use jstub_classfile::FieldType;
use jstub_translate::base_type_name;

/// Java methods whose return type must be widened to `T | None`.
///
/// There is no `@Nullable` analysis here — only this hard-coded allowlist,
/// keyed by `"{dotted.class.Name}.{method}({param1}, {param2}, ...)"` using
/// raw (unmangled) Java type names, covering the collection and property
/// APIs most commonly called in a way that can return `null`.
const METHOD_CAN_RETURN_NONE: &[&str] = &[
    "java.util.Map.get(java.lang.Object)",
    "java.util.Map.put(java.lang.Object, java.lang.Object)",
    "java.util.Map.remove(java.lang.Object)",
    "java.util.Map.putIfAbsent(java.lang.Object, java.lang.Object)",
    "java.util.Dictionary.get(java.lang.Object)",
    "java.util.Dictionary.put(java.lang.Object, java.lang.Object)",
    "java.util.Dictionary.remove(java.lang.Object)",
    "java.util.Properties.getProperty(java.lang.String)",
    "java.lang.ClassLoader.getResourceAsStream(java.lang.String)",
    "java.lang.ClassLoader.getResource(java.lang.String)",
    "java.lang.Class.getSuperclass()",
    "java.lang.Class.getEnclosingClass()",
    "java.lang.ref.Reference.get()",
];

pub fn can_return_none(class_name_dotted: &str, method_name: &str, params: &[FieldType]) -> bool {
    let key = whitelist_key(class_name_dotted, method_name, params);
    METHOD_CAN_RETURN_NONE.contains(&key.as_str())
}

fn whitelist_key(class_name_dotted: &str, method_name: &str, params: &[FieldType]) -> String {
    let rendered: Vec<String> = params.iter().map(desc_to_whitelist_type).collect();
    format!("{class_name_dotted}.{method_name}({})", rendered.join(", "))
}

fn desc_to_whitelist_type(ty: &FieldType) -> String {
    match ty {
        FieldType::Base(base) => base_type_name(*base).to_string(),
        FieldType::Object(internal_name) => internal_name.replace(['/', '$'], "."),
        FieldType::Array(inner) => format!("{}[]", desc_to_whitelist_type(inner)),
    }
}
