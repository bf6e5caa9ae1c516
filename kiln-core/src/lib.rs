mod error;
mod file;
mod forms;
mod naming;

pub use error::{Error, Result};
pub use file::{WriteResult, emit, write_if_missing};
pub use forms::{ModuleForms, validate_name};
pub use naming::{
    Pluralizer, pluralize, split_words, to_camel_case, to_kebab_case, to_pascal_case,
    to_snake_case,
};
