//! Synthetic API documents for benchmarks.

use coredts_schema::{
    Class, Constant, CoreApi, Docs, Enum, EnumValue, Function, Namespace, Parameter, Property,
    Signature, Tag,
};

/// Builds a document with `classes` classes, each deriving from the previous.
///
/// Every class carries a handful of documented properties, overloaded member
/// functions, and every fourth class gets constants and static functions.
#[must_use]
pub fn synthetic_api(classes: usize) -> CoreApi {
    let mut api = CoreApi::default();

    let mut root = Class::new("Object");
    root.member_functions.push(Function::new(
        "IsA",
        vec![Signature::new(vec![Parameter::new("typeName", "string")], Some("bool"))],
    ));
    api.classes.push(root);

    for i in 0..classes {
        let base = if i == 0 {
            "Object".to_string()
        } else {
            format!("Class{}", i - 1)
        };
        let mut class = Class::new(format!("Class{i}")).with_base(base);
        class.docs = Docs::described(format!("Synthetic class number {i}."));

        for p in 0..8 {
            let mut property = Property::new(format!("field{p}"), "Array<Optional<integer>>");
            if p % 2 == 0 {
                property.tags.push(Tag::ReadOnly);
            }
            property.docs = Docs::described("A synthetic property.\nSpanning two lines.");
            class.properties.push(property);
        }

        class.member_functions.push(Function::new(
            "Update",
            vec![
                Signature::new(vec![Parameter::new("dt", "number")], None),
                Signature::new(
                    vec![
                        Parameter::new("dt", "number"),
                        Parameter::new("target", "CoreObject").optional(),
                    ],
                    Some("bool"),
                ),
            ],
        ));

        if i % 4 == 0 {
            class.constants.push(Constant::new("DEFAULT", format!("Class{i}")));
            class.static_functions.push(Function::new(
                "New",
                vec![Signature::new(Vec::new(), Some(format!("Class{i}").as_str()))],
            ));
        }

        api.classes.push(class);
    }

    let mut world = Namespace::new("World");
    world.static_functions.push(Function::new(
        "FindObjectByName",
        vec![Signature::new(
            vec![Parameter::new("name", "string")],
            Some("Optional<CoreObject>"),
        )],
    ));
    api.namespaces.push(world);

    api.enums.push(Enum::new(
        "Visibility",
        (0..16)
            .map(|v| EnumValue::new(format!("VALUE_{v}"), Some(v)))
            .collect(),
    ));

    api
}
