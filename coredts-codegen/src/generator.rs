//! Main declaration generator.

use crate::options::GeneratorOptions;
use crate::typescript::types::{INTEGER_TYPE_NAME, OPTIONAL_TYPE_NAME};
use crate::typescript::{ClassGenerator, EnumGenerator, NamespaceGenerator};
use crate::writer::CodeWriter;
use coredts_schema::{CoreApi, SchemaIndex};

const LINT_PRAGMA: &str = "/* eslint-disable @typescript-eslint/no-unused-vars,max-len,@typescript-eslint/no-redeclare,no-trailing-spaces,no-multiple-empty-lines,@typescript-eslint/indent,@typescript-eslint/naming-convention,no-underscore-dangle,vars-on-top,no-var */";
const IDE_PRAGMA: &str = "// noinspection JSUnusedGlobalSymbols";

/// Ambient globals available to every script, with their descriptions.
const GLOBALS: &[(&str, &str)] = &[
    (
        "declare const script: CoreObject;",
        "Provides access to current instance of script.",
    ),
    (
        "declare function time(this: void): number;",
        "Returns the time in seconds (floating point) since the game started on the server.",
    ),
    (
        "declare function print(this: void, message: string): string;",
        "Print a message to the event log. Access the Event Log from the Window menu.",
    ),
    (
        "declare function warn(this: void, message: string): string;",
        "Similar to print(), but includes the script name and line number.",
    ),
];

/// Main declaration generator that coordinates all entity generators.
pub struct Generator<'a> {
    api: &'a CoreApi,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with default options.
    #[must_use]
    pub fn new(api: &'a CoreApi) -> Self {
        Self {
            api,
            options: GeneratorOptions::default(),
        }
    }

    /// Sets the generation options.
    #[must_use]
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Generates the complete declaration file.
    #[must_use]
    pub fn generate(&self) -> String {
        self.build().to_string()
    }

    /// Builds the document tree without rendering it.
    #[must_use]
    pub fn build(&self) -> CodeWriter {
        let index = SchemaIndex::build(self.api);
        let mut file = CodeWriter::new();

        add_general_comments(&mut file);
        add_predefined_types(&mut file);
        add_globals(&mut file);

        let classes =
            ClassGenerator::new(&self.api.classes, &index, self.options).generate_into(&mut file);
        let namespaces = NamespaceGenerator::new(&self.api.namespaces, &index, self.options)
            .generate_into(&mut file);
        let enums =
            EnumGenerator::new(&self.api.enums, &index, self.options).generate_into(&mut file);

        tracing::info!(
            classes,
            namespaces,
            enums,
            "Generated declarations for {} of {} entities",
            classes + namespaces + enums,
            self.api.entity_count()
        );

        file
    }
}

fn add_general_comments(file: &mut CodeWriter) {
    file.add_lines([LINT_PRAGMA, IDE_PRAGMA]);
}

fn add_predefined_types(file: &mut CodeWriter) {
    file.scope_with_end(format!("declare type {INTEGER_TYPE_NAME} = number;"), None);
    file.scope_with_end(
        format!("declare type {OPTIONAL_TYPE_NAME}<T> = T | undefined;"),
        None,
    );
}

fn add_globals(file: &mut CodeWriter) {
    for (declaration, description) in GLOBALS {
        file.add_as_section(*declaration).comment().add(*description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coredts_schema::{Class, Constant, Enum, EnumValue, Function, Namespace, Signature};

    const PREAMBLE: &[&str] = &[
        LINT_PRAGMA,
        IDE_PRAGMA,
        "",
        "declare type Integer = number;",
        "",
        "",
        "declare type Optional<T> = T | undefined;",
        "",
        "/**",
        " * Provides access to current instance of script.",
        " */",
        "declare const script: CoreObject;",
        "/**",
        " * Returns the time in seconds (floating point) since the game started on the server.",
        " */",
        "declare function time(this: void): number;",
        "/**",
        " * Print a message to the event log. Access the Event Log from the Window menu.",
        " */",
        "declare function print(this: void, message: string): string;",
        "/**",
        " * Similar to print(), but includes the script name and line number.",
        " */",
        "declare function warn(this: void, message: string): string;",
    ];

    #[test]
    fn test_empty_api_yields_preamble() {
        let api = CoreApi::default();
        let output = Generator::new(&api).generate();

        assert_eq!(output, PREAMBLE.join("\n"));
    }

    #[test]
    fn test_root_class_end_to_end() {
        let mut root = Class::new("Root");
        root.member_functions.push(Function::new(
            "IsA",
            vec![Signature::new(Vec::new(), Some("boolean"))],
        ));
        let api = CoreApi {
            classes: vec![root],
            ..CoreApi::default()
        };

        let output = Generator::new(&api).generate();
        let mut expected: Vec<&str> = PREAMBLE.to_vec();
        expected.extend([
            "",
            "declare interface Root {",
            "    ",
            "    // FUNCTIONS",
            "    IsA<T extends Root>(): this is T;",
            "    ",
            "}",
            "",
        ]);

        assert_eq!(output, expected.join("\n"));
        assert!(!output.contains("RootStatic"));
    }

    #[test]
    fn test_entity_kind_order() {
        let mut vector = Class::new("Vector3");
        vector.constants.push(Constant::new("ZERO", "Vector3"));
        let api = CoreApi {
            enums: vec![Enum::new("Color", vec![EnumValue::new("RED", Some(0))])],
            namespaces: vec![Namespace::new("World")],
            classes: vec![vector],
        };

        let output = Generator::new(&api).generate();
        let class = output.find("declare interface Vector3 {").expect("class missing");
        let companion = output
            .find("declare const Vector3: Vector3Static;")
            .expect("companion missing");
        let namespace = output.find("declare namespace World {").expect("namespace missing");
        let enumeration = output.find("declare enum Color {").expect("enum missing");

        assert!(class < companion);
        assert!(companion < namespace);
        assert!(namespace < enumeration);
    }

    #[test]
    fn test_class_and_namespace_sharing_a_name() {
        let json = r#"{
            "Classes": [{"Name": "Chat", "Properties": [{"Name": "id", "Type": "string"}]}],
            "Namespaces": [{"Name": "Chat", "StaticFunctions": [
                {"Name": "BroadcastMessage", "Signatures": [{"Parameters": [{"Name": "message", "Type": "string"}]}]}
            ]}]
        }"#;
        let api = coredts_schema::parse_api(json).expect("Failed to parse");

        let output = Generator::new(&api).generate();
        assert!(output.contains("declare interface Chat {\n    \n    // PROPERTIES\n    id: string;"));
        assert!(output.contains(
            "declare namespace Chat {\n    \n    // FUNCTIONS\n    function BroadcastMessage(this: void, message: string): void;"
        ));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let api = CoreApi {
            classes: vec![
                Class::new("Object"),
                Class::new("CoreObject").with_base("Object"),
            ],
            namespaces: vec![Namespace::new("World"), Namespace::new("Game")],
            enums: vec![Enum::new("Color", Vec::new())],
        };

        let generator = Generator::new(&api);
        let tree = generator.build();
        assert_eq!(tree.to_string(), tree.to_string());
        assert_eq!(generator.generate(), Generator::new(&api).generate());
    }

    #[test]
    fn test_keep_deprecated_option() {
        let mut old = Class::new("Old");
        old.docs.is_deprecated = Some(true);
        let api = CoreApi {
            classes: vec![old],
            ..CoreApi::default()
        };

        assert!(!Generator::new(&api).generate().contains("Old"));
        let kept = Generator::new(&api)
            .with_options(GeneratorOptions::new().omit_deprecated(false))
            .generate();
        assert!(kept.contains("/**\n * @deprecated \n */\ndeclare interface Old {"));
    }
}
