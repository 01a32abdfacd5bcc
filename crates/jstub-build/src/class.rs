use std::collections::{BTreeMap, HashMap, HashSet};

use jstub_classfile::{AccessFlags, ClassFile, ClassStub, Error, MethodStub, TypeSignature};
use jstub_translate::{
    convert_descriptor, convert_signature, make_type_vars, pysafe, to_annotated_type,
    to_type_var_declaration, translate_type_name,
};
use jstub_types::{ClassStubFragment, TypeVar};

/// Convert one class's bytecode into a rendered stub fragment, recursing
/// into its public/protected nested classes when `all_class_data` is given.
///
/// Returns an empty fragment for synthetic classes and for anonymous/local
/// classes (detected via the `EnclosingMethod` attribute) — neither has a
/// stable, importable name worth emitting.
pub fn convert_class_to_stub(
    class_data: &[u8],
    all_class_data: Option<&HashMap<String, Vec<u8>>>,
    classes_done: &mut HashSet<String>,
    classes_used: &mut HashSet<String>,
    parent_type_vars: Option<&[TypeVar]>,
) -> Result<ClassStubFragment, Error> {
    let class = ClassFile::parse(class_data)?;
    if AccessFlags(class.access_flags).is_synthetic() || class.has_enclosing_method {
        return Ok(ClassStubFragment::default());
    }
    let stub = class.stub()?;
    Ok(render_class(&stub, all_class_data, classes_done, classes_used, parent_type_vars))
}

fn render_class(
    stub: &ClassStub,
    all_class_data: Option<&HashMap<String, Vec<u8>>>,
    classes_done: &mut HashSet<String>,
    classes_used: &mut HashSet<String>,
    parent_type_vars: Option<&[TypeVar]>,
) -> ClassStubFragment {
    let raw_class_name = &stub.internal_name;
    let package_internal = raw_class_name.rsplit_once('/').map(|(p, _)| p).unwrap_or("");
    let package_name = package_internal.replace('/', ".");
    let simple_name = raw_class_name.rsplit('/').next().unwrap_or(raw_class_name);
    let class_name_dotted = raw_class_name.replace(['/', '$'], ".");
    let display_name = simple_name.rsplit('$').next().unwrap_or(simple_name).to_string();
    let class_prefix = simple_name.replace('$', "__");

    let class_type_vars = stub
        .signature
        .as_ref()
        .map(|sig| make_type_vars(&sig.type_parameters, &class_prefix))
        .unwrap_or_default();

    let mut is_static_inner = true;
    if parent_type_vars.is_some() {
        for ic in &stub.inner_classes {
            if &ic.inner_class == raw_class_name && ic.outer_class.as_deref() != Some(raw_class_name.as_str()) {
                is_static_inner = AccessFlags(ic.access_flags).is_static();
                break;
            }
        }
    }
    let usable_type_vars: Vec<TypeVar> = match parent_type_vars {
        Some(parent) if !is_static_inner => {
            parent.iter().cloned().chain(class_type_vars.iter().cloned()).collect()
        }
        _ => class_type_vars.clone(),
    };

    let mut imports: Vec<String> = Vec::new();

    let mut fields_output = Vec::new();
    for f in &stub.fields {
        let flags = AccessFlags(f.access_flags);
        if !flags.is_accessible() || flags.is_synthetic() {
            continue;
        }
        let Some(safe_name) = pysafe(&f.name) else { continue };
        let field_is_static = flags.is_static();
        let scope: &[TypeVar] = if field_is_static { &[] } else { &usable_type_vars };
        let (parsed_descriptor, signature) = match f.parse() {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(class = %class_name_dotted, field = %f.name, error = %err, "skipping field");
                continue;
            }
        };
        let field_type = match &signature {
            Some(sig) => convert_signature(sig, scope, false, false, false),
            None => convert_descriptor(&parsed_descriptor, false),
        };
        let mut annotation =
            to_annotated_type(&field_type, &package_name, classes_done, classes_used, &mut imports, true);
        if field_is_static {
            imports.push("import typing".to_string());
            annotation = format!("typing.ClassVar[{annotation}]");
        }
        fields_output.push(format!("{safe_name}: {annotation} = ..."));
    }

    let mut constructors_output = Vec::new();
    let ctors: Vec<&MethodStub> = stub
        .methods
        .iter()
        .filter(|m| {
            let flags = AccessFlags(m.access_flags);
            m.name == "<init>" && flags.is_accessible() && !flags.is_synthetic() && !flags.is_bridge()
        })
        .collect();
    if !ctors.is_empty() {
        if let Err(err) = crate::method::generate_method_group(
            &package_name,
            "__init__",
            &ctors,
            classes_done,
            classes_used,
            &usable_type_vars,
            &class_name_dotted,
            &mut constructors_output,
            &mut imports,
            "__init__",
            true,
        ) {
            tracing::warn!(class = %class_name_dotted, error = %err, "skipping constructors");
        }
    }

    let mut method_groups: BTreeMap<String, Vec<&MethodStub>> = BTreeMap::new();
    for m in &stub.methods {
        if m.name == "<init>" || m.name == "<clinit>" {
            continue;
        }
        let flags = AccessFlags(m.access_flags);
        if !flags.is_accessible() || flags.is_synthetic() || flags.is_bridge() {
            continue;
        }
        let Some(py_name) = pysafe(&m.name) else { continue };
        method_groups.entry(py_name).or_default().push(m);
    }

    let mut methods_output = Vec::new();
    for (py_name, overloads) in &method_groups {
        if let Err(err) = crate::method::generate_method_group(
            &package_name,
            py_name,
            overloads,
            classes_done,
            classes_used,
            &usable_type_vars,
            &class_name_dotted,
            &mut methods_output,
            &mut imports,
            py_name,
            false,
        ) {
            tracing::warn!(class = %class_name_dotted, method = %py_name, error = %err, "skipping method");
        }
    }

    // The JVM always writes java.lang.Object as an interface's superclass,
    // but interfaces do expose Object's methods at runtime, so it stays in
    // the parsed supertype list — only the rendering below drops it.
    let super_type_strs = match &stub.signature {
        Some(sig) => {
            let mut supers = vec![convert_signature(
                &TypeSignature::Class(sig.super_class.clone()),
                &usable_type_vars,
                false,
                false,
                false,
            )];
            for iface in &sig.interfaces {
                supers.push(convert_signature(
                    &TypeSignature::Class(iface.clone()),
                    &usable_type_vars,
                    false,
                    false,
                    false,
                ));
            }
            supers
        }
        None => {
            let mut supers = Vec::new();
            if let Some(super_name) = &stub.super_class {
                supers.push(translate_type_name(&super_name.replace('/', "."), vec![], false, false, false));
            }
            for iface in &stub.interfaces {
                supers.push(translate_type_name(&iface.replace('/', "."), vec![], false, false, false));
            }
            supers
        }
    };

    let mut super_type_annotations = Vec::new();
    for st in &super_type_strs {
        if st.name == "java.lang.Object" && super_type_strs.len() > 1 {
            continue;
        }
        let ann = to_annotated_type(st, &package_name, classes_done, classes_used, &mut imports, false);
        super_type_annotations.push(ann);
    }
    if !class_type_vars.is_empty() {
        imports.push("import typing".to_string());
        let generic_args: Vec<&str> = class_type_vars.iter().map(|tv| tv.python_name.as_str()).collect();
        super_type_annotations.push(format!("typing.Generic[{}]", generic_args.join(", ")));
    }
    if class_name_dotted == "java.lang.Throwable" {
        super_type_annotations.push("builtins.Exception".to_string());
        imports.push("import builtins".to_string());
    }
    let super_str = if super_type_annotations.is_empty() {
        String::new()
    } else {
        format!("({})", super_type_annotations.join(", "))
    };

    let mut nested_classes_output = Vec::new();
    let mut nested_type_var_lines = Vec::new();
    let mut nested_done = HashSet::new();
    if let Some(all_data) = all_class_data {
        for ic in &stub.inner_classes {
            if ic.outer_class.as_deref() != Some(raw_class_name.as_str()) {
                continue;
            }
            let Some(inner_name) = &ic.inner_name else { continue };
            let _ = inner_name;
            let flags = AccessFlags(ic.access_flags);
            if flags.is_synthetic() || !flags.is_accessible() {
                continue;
            }
            let Some(ic_data) = all_data.get(&ic.inner_class) else { continue };
            let ic_is_static = flags.is_static();
            let ic_parent_tvars = if ic_is_static { None } else { Some(usable_type_vars.as_slice()) };

            let mut ic_done = classes_done.clone();
            match convert_class_to_stub(ic_data, Some(all_data), &mut ic_done, classes_used, ic_parent_tvars) {
                Ok(nested_stub) => {
                    nested_done.extend(ic_done);
                    imports.extend(nested_stub.imports);
                    nested_type_var_lines.extend(nested_stub.type_vars);
                    for line in nested_stub.code {
                        nested_classes_output.push(if line.trim().is_empty() {
                            String::new()
                        } else {
                            format!("    {line}")
                        });
                    }
                }
                Err(err) => {
                    tracing::warn!(class = %ic.inner_class, error = %err, "skipping nested class");
                }
            }
        }
    }
    classes_done.extend(nested_done);

    let own_type_var_lines: Vec<String> = class_type_vars
        .iter()
        .map(|tv| to_type_var_declaration(tv, &package_name, classes_done, classes_used, &mut imports))
        .collect();
    let mut all_type_var_lines = own_type_var_lines;
    all_type_var_lines.extend(nested_type_var_lines);

    let has_body = !fields_output.is_empty()
        || !constructors_output.is_empty()
        || !methods_output.is_empty()
        || !nested_classes_output.is_empty();

    let mut class_code = Vec::new();
    if has_body {
        class_code.push(format!("class {display_name}{super_str}:"));
        for line in &fields_output {
            class_code.push(format!("    {line}"));
        }
        for line in &constructors_output {
            class_code.push(format!("    {line}"));
        }
        for line in &methods_output {
            class_code.push(format!("    {line}"));
        }
        class_code.extend(nested_classes_output);
    } else {
        class_code.push(format!("class {display_name}{super_str}: ..."));
    }
    classes_done.insert(display_name);

    if !all_type_var_lines.is_empty() {
        let mut type_vars = vec![String::new()];
        type_vars.extend(all_type_var_lines);
        ClassStubFragment {
            imports,
            type_vars,
            code: class_code,
        }
    } else {
        let mut code = vec![String::new()];
        code.extend(class_code);
        ClassStubFragment {
            imports,
            type_vars: Vec::new(),
            code,
        }
    }
}
