use jstub_classfile::BaseType;

/// One row of the Java primitive / boxed-type / Python-surrogate-type table.
pub struct Primitive {
    pub java_primitive: &'static str,
    pub java_object: &'static str,
    /// The JPype-style surrogate type, e.g. `java.jint`.
    pub python_primitive: &'static str,
    /// The plain Python type implicit conversions widen to, e.g. `int`.
    pub python_type: &'static str,
}

pub const PRIMITIVES: &[Primitive] = &[
    Primitive {
        java_primitive: "void",
        java_object: "java.lang.Void",
        python_primitive: "java.jvoid",
        python_type: "None",
    },
    Primitive {
        java_primitive: "byte",
        java_object: "java.lang.Byte",
        python_primitive: "java.jbyte",
        python_type: "int",
    },
    Primitive {
        java_primitive: "short",
        java_object: "java.lang.Short",
        python_primitive: "java.jshort",
        python_type: "int",
    },
    Primitive {
        java_primitive: "int",
        java_object: "java.lang.Integer",
        python_primitive: "java.jint",
        python_type: "int",
    },
    Primitive {
        java_primitive: "long",
        java_object: "java.lang.Long",
        python_primitive: "java.jlong",
        python_type: "int",
    },
    Primitive {
        java_primitive: "boolean",
        java_object: "java.lang.Boolean",
        python_primitive: "java.jboolean",
        python_type: "bool",
    },
    Primitive {
        java_primitive: "double",
        java_object: "java.lang.Double",
        python_primitive: "java.jdouble",
        python_type: "float",
    },
    Primitive {
        java_primitive: "float",
        java_object: "java.lang.Float",
        python_primitive: "java.jfloat",
        python_type: "float",
    },
    Primitive {
        java_primitive: "char",
        java_object: "java.lang.Character",
        python_primitive: "java.jchar",
        python_type: "str",
    },
];

pub fn primitive_by_dotted_name(name: &str) -> Option<&'static Primitive> {
    PRIMITIVES
        .iter()
        .find(|p| p.java_primitive == name || p.java_object == name)
}

pub fn base_type_name(base: BaseType) -> &'static str {
    match base {
        BaseType::Byte => "byte",
        BaseType::Char => "char",
        BaseType::Double => "double",
        BaseType::Float => "float",
        BaseType::Int => "int",
        BaseType::Long => "long",
        BaseType::Short => "short",
        BaseType::Boolean => "boolean",
    }
}

/// Maps a surrogate primitive array-element type to the bridge's dedicated
/// array wrapper type, e.g. `java.jint` -> `java.chaquopy.JavaArrayJInt`.
pub fn parameter_to_array_type(python_primitive: &str) -> Option<&'static str> {
    Some(match python_primitive {
        "java.jboolean" => "java.chaquopy.JavaArrayJBoolean",
        "java.jbyte" => "java.chaquopy.JavaArrayJByte",
        "java.jshort" => "java.chaquopy.JavaArrayJShort",
        "java.jint" => "java.chaquopy.JavaArrayJInt",
        "java.jlong" => "java.chaquopy.JavaArrayJLong",
        "java.jfloat" => "java.chaquopy.JavaArrayJFloat",
        "java.jdouble" => "java.chaquopy.JavaArrayJDouble",
        "java.jchar" => "java.chaquopy.JavaArrayJChar",
        _ => return None,
    })
}

pub fn is_array_wrapper_type(name: &str) -> bool {
    matches!(
        name,
        "java.chaquopy.JavaArrayJBoolean"
            | "java.chaquopy.JavaArrayJByte"
            | "java.chaquopy.JavaArrayJShort"
            | "java.chaquopy.JavaArrayJInt"
            | "java.chaquopy.JavaArrayJLong"
            | "java.chaquopy.JavaArrayJFloat"
            | "java.chaquopy.JavaArrayJDouble"
            | "java.chaquopy.JavaArrayJChar"
    )
}
