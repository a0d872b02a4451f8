//! Enum declaration generation.

use crate::options::GeneratorOptions;
use crate::writer::CodeWriter;
use coredts_schema::{Enum, EnumValue, SchemaIndex, unique_names};

/// Generator for enum declarations.
pub struct EnumGenerator<'a> {
    enums: &'a [Enum],
    index: &'a SchemaIndex<'a>,
    options: GeneratorOptions,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(enums: &'a [Enum], index: &'a SchemaIndex<'a>, options: GeneratorOptions) -> Self {
        Self {
            enums,
            index,
            options,
        }
    }

    /// Generates all enum declarations as a standalone document.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut file = CodeWriter::new();
        self.generate_into(&mut file);
        file.to_string()
    }

    /// Emits all enum declarations into `file`.
    ///
    /// Returns the number of enums written.
    pub fn generate_into(&self, file: &mut CodeWriter) -> usize {
        let mut count = 0;

        for name in unique_names(self.enums.iter().map(|e| e.name.as_str())) {
            let Some(enum_def) = self.index.enumeration(name) else {
                tracing::debug!("Enum {} does not resolve to an enum, skipping", name);
                continue;
            };
            if self.options.skips(enum_def) {
                tracing::debug!("Skipping deprecated enum {}", name);
                continue;
            }

            tracing::debug!("Generating enum {}", name);
            let enum_block = file.scope(format!("declare enum {} {{", enum_def.name));
            enum_block.add_description_and_deprecation_for(enum_def);
            for value in &enum_def.values {
                if !self.options.skips(value) {
                    enum_block.add_definition_line(member_line(value), value);
                }
            }
            count += 1;
        }

        count
    }
}

fn member_line(value: &EnumValue) -> String {
    match value.value {
        Some(number) => format!("{} = {},", value.name, number),
        None => format!("{},", value.name),
    }
}
