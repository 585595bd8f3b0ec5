//! Turns script records into function pointer declarations

use crate::registry::OverloadRegistry;
use crate::signature::{self, ParsedSignature, SignatureError};
use offsetgen_core::{
    DeclarationStyle, Error, FunctionRecord, GeneratedDeclaration, GenerationStatistics, Result,
};
use rayon::prelude::*;
use tracing::info;

/// Declarations for a whole script, in input order
#[derive(Debug, Clone, Default)]
pub struct Translation {
    pub declarations: Vec<GeneratedDeclaration>,
    pub statistics: GenerationStatistics,
}

/// Translate one record, registering its name in `registry`
pub fn translate(
    record: &FunctionRecord,
    registry: &mut OverloadRegistry,
    style: &DeclarationStyle,
) -> Result<GeneratedDeclaration> {
    let parsed = signature::parse(&record.signature).map_err(|e| malformed(record, e))?;
    Ok(declare(record, &parsed, registry, style))
}

/// Translate every record in order with a fresh registry.
///
/// Signatures are tokenized in parallel, names are resolved sequentially so
/// overload numbering follows the input order. The first malformed record in
/// input order aborts the whole translation.
pub fn translate_all(records: &[FunctionRecord], style: &DeclarationStyle) -> Result<Translation> {
    let parsed: Vec<_> = records
        .par_iter()
        .map(|record| signature::parse(&record.signature))
        .collect();

    let mut registry = OverloadRegistry::new();
    let mut declarations = Vec::with_capacity(records.len());
    let mut total_parameters = 0;

    for (record, parsed) in records.iter().zip(parsed) {
        let parsed = parsed.map_err(|e| malformed(record, e))?;
        total_parameters += parsed.parameters.len();
        declarations.push(declare(record, &parsed, &mut registry, style));
    }

    let statistics = GenerationStatistics {
        total_records: declarations.len(),
        overloaded_names: registry.overloaded_names().count(),
        total_parameters,
    };

    info!(
        "Translated {} records ({} distinct names, {} overloaded)",
        statistics.total_records,
        registry.len(),
        statistics.overloaded_names
    );

    Ok(Translation {
        declarations,
        statistics,
    })
}

fn declare(
    record: &FunctionRecord,
    parsed: &ParsedSignature,
    registry: &mut OverloadRegistry,
    style: &DeclarationStyle,
) -> GeneratedDeclaration {
    let name = registry.resolve(&parsed.function_name);

    GeneratedDeclaration {
        offset_literal: style.offset_radix.literal(record.address),
        pointer_type_text: pointer_type(&name, parsed, style),
        binding_text: binding(&name, style),
        resolved_name: name,
        display_name: record.display_name.clone(),
        address: record.address,
    }
}

fn pointer_type(name: &str, parsed: &ParsedSignature, style: &DeclarationStyle) -> String {
    let convention = if style.calling_convention.is_empty() {
        String::new()
    } else {
        format!("{} ", style.calling_convention)
    };

    format!(
        "typedef {} ({}*p_{})({});",
        parsed.return_type,
        convention,
        name,
        parsed.parameters.join(", ")
    )
}

fn binding(name: &str, style: &DeclarationStyle) -> String {
    format!(
        "p_{name} {name} = (p_{name})({} + {}::{name});",
        style.module_base, style.offsets_namespace
    )
}

fn malformed(record: &FunctionRecord, err: SignatureError) -> Error {
    Error::malformed_signature(
        &record.display_name,
        record.address,
        &record.signature,
        err.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use offsetgen_core::{Address, OffsetRadix};

    fn record(address: u64, signature: &str) -> FunctionRecord {
        FunctionRecord::new(address, signature, format!("Test$${}", address))
    }

    #[test]
    fn test_translate_basic() {
        let mut registry = OverloadRegistry::new();
        let decl = translate(
            &record(0x1A2B, "int Baz(int a, float b)"),
            &mut registry,
            &DeclarationStyle::default(),
        )
        .unwrap();

        assert_eq!(decl.resolved_name, "Baz");
        assert_eq!(decl.offset_literal, "0x1A2B");
        assert_eq!(
            decl.pointer_type_text,
            "typedef int (__fastcall *p_Baz)(int, float);"
        );
        assert_eq!(
            decl.binding_text,
            "p_Baz Baz = (p_Baz)(GameAssembly + offsets::Baz);"
        );
        assert_eq!(decl.address, Address::new(0x1A2B));
    }

    #[test]
    fn test_translate_no_parameters() {
        let mut registry = OverloadRegistry::new();
        let decl = translate(
            &record(0x10, "void Bar()"),
            &mut registry,
            &DeclarationStyle::default(),
        )
        .unwrap();
        assert_eq!(decl.pointer_type_text, "typedef void (__fastcall *p_Bar)();");
    }

    #[test]
    fn test_translate_overloads_share_registry() {
        let mut registry = OverloadRegistry::new();
        let style = DeclarationStyle::default();
        let names: Vec<String> = ["void Foo()", "void Foo(int a)", "void Foo(float b)"]
            .into_iter()
            .enumerate()
            .map(|(i, sig)| {
                translate(&record(i as u64, sig), &mut registry, &style)
                    .unwrap()
                    .resolved_name
            })
            .collect();
        assert_eq!(names, vec!["Foo", "Foo_1", "Foo_2"]);
    }

    #[test]
    fn test_suffix_reaches_every_fragment() {
        let mut registry = OverloadRegistry::new();
        let style = DeclarationStyle::default();
        translate(&record(1, "void Foo()"), &mut registry, &style).unwrap();
        let decl = translate(&record(2, "void Foo(int a)"), &mut registry, &style).unwrap();
        assert_eq!(
            decl.pointer_type_text,
            "typedef void (__fastcall *p_Foo_1)(int);"
        );
        assert_eq!(
            decl.binding_text,
            "p_Foo_1 Foo_1 = (p_Foo_1)(GameAssembly + offsets::Foo_1);"
        );
    }

    #[test]
    fn test_custom_style() {
        let style = DeclarationStyle {
            calling_convention: String::new(),
            module_base: "Base".to_string(),
            offsets_namespace: "rva".to_string(),
            offset_radix: OffsetRadix::Decimal,
        };
        let mut registry = OverloadRegistry::new();
        let decl = translate(&record(0x1A2B, "void Bar(int a)"), &mut registry, &style).unwrap();
        assert_eq!(decl.offset_literal, "6699");
        assert_eq!(decl.pointer_type_text, "typedef void (*p_Bar)(int);");
        assert_eq!(decl.binding_text, "p_Bar Bar = (p_Bar)(Base + rva::Bar);");
    }

    #[test]
    fn test_malformed_identifies_record() {
        let mut registry = OverloadRegistry::new();
        let err = translate(
            &record(0x40, "void Broken"),
            &mut registry,
            &DeclarationStyle::default(),
        )
        .unwrap_err();

        match err {
            Error::MalformedSignature { name, address, .. } => {
                assert_eq!(name, "Test$$64");
                assert_eq!(address, Address::new(0x40));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_translate_all_reports_first_malformed_record() {
        let records = vec![
            record(1, "void A()"),
            record(2, "B()"),
            record(3, "void C"),
        ];
        let err = translate_all(&records, &DeclarationStyle::default()).unwrap_err();
        match err {
            Error::MalformedSignature { address, .. } => assert_eq!(address, Address::new(2)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_translate_all_keeps_input_order() {
        let records: Vec<FunctionRecord> = (0..200)
            .map(|i| record(i, if i % 2 == 0 { "void Even(int a)" } else { "void Odd()" }))
            .collect();
        let translation = translate_all(&records, &DeclarationStyle::default()).unwrap();

        assert_eq!(translation.declarations.len(), 200);
        assert_eq!(translation.declarations[0].resolved_name, "Even");
        assert_eq!(translation.declarations[1].resolved_name, "Odd");
        assert_eq!(translation.declarations[2].resolved_name, "Even_1");
        assert_eq!(translation.declarations[199].resolved_name, "Odd_99");
        for (i, decl) in translation.declarations.iter().enumerate() {
            assert_eq!(decl.address.as_u64(), i as u64);
        }

        assert_eq!(translation.statistics.total_records, 200);
        assert_eq!(translation.statistics.overloaded_names, 2);
        assert_eq!(translation.statistics.total_parameters, 100);
    }

    #[test]
    fn test_translate_all_empty() {
        let translation = translate_all(&[], &DeclarationStyle::default()).unwrap();
        assert!(translation.declarations.is_empty());
        assert_eq!(translation.statistics, GenerationStatistics::default());
    }
}
