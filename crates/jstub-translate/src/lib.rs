#![forbid(unsafe_code)]

mod convert;
mod primitives;
mod pysafe;
mod render;

pub use convert::{
    convert_descriptor, convert_return_descriptor, convert_signature, descriptor_param_types,
    make_type_vars, translate_type_name,
};
pub use primitives::{base_type_name, is_array_wrapper_type, parameter_to_array_type};
pub use pysafe::{pysafe, pysafe_package_path};
pub use render::{to_annotated_type, to_type_var_declaration};
