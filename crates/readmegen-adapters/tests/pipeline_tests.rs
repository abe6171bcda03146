//! End-to-end generation through the real adapters, in memory.

use std::path::Path;

use readmegen_adapters::{
    AiEnhancer, AiSettings, BuiltinTemplateStore, MemoryFilesystem, SimpleRenderer,
};
use readmegen_core::{
    application::{ApplicationError, Enhancer, GenerateRequest, ReadmeService},
    domain::{ProjectMetadata, TemplateKind, parse_feature_list},
    error::{ErrorCategory, ReadmeError},
};

fn service(fs: &MemoryFilesystem) -> ReadmeService {
    ReadmeService::new(
        Box::new(BuiltinTemplateStore::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
    )
}

fn metadata(template: TemplateKind, output: &str) -> ProjectMetadata {
    ProjectMetadata::builder()
        .name("Demo")
        .description("A demo")
        .template(template)
        .features(["Fast", "Portable"])
        .output_path(output)
        .build()
        .unwrap()
}

#[test]
fn generates_minimal_readme() {
    let fs = MemoryFilesystem::new();

    let report = service(&fs)
        .generate(GenerateRequest {
            metadata: metadata(TemplateKind::Minimal, "out.md"),
            enhancers: &[],
            force: false,
        })
        .unwrap();

    let content = fs.read_file(Path::new("out.md")).unwrap();
    assert!(content.starts_with("# Demo\n"));
    assert!(content.contains("A demo"));
    assert_eq!(report.bytes_written, content.len());
    assert!(report.warnings.is_empty());
}

#[test]
fn existing_output_is_preserved_without_force() {
    let fs = MemoryFilesystem::new();
    service(&fs)
        .write(Path::new("README.md"), "precious", false)
        .unwrap();

    let err = service(&fs)
        .generate(GenerateRequest {
            metadata: metadata(TemplateKind::Standard, "README.md"),
            enhancers: &[],
            force: false,
        })
        .unwrap_err();

    assert!(matches!(
        err,
        ReadmeError::Application(ApplicationError::FileExists { .. })
    ));
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(fs.read_file(Path::new("README.md")).unwrap(), "precious");
}

#[test]
fn force_overwrites_and_nested_output_is_created() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    let request = || GenerateRequest {
        metadata: metadata(TemplateKind::Fancy, "docs/README.md"),
        enhancers: &[],
        force: true,
    };

    svc.generate(request()).unwrap();
    svc.generate(request()).unwrap();

    let content = fs.read_file(Path::new("docs/README.md")).unwrap();
    assert!(content.contains("## ✨ Features"));
    assert_eq!(parse_feature_list(&content), vec!["Fast", "Portable"]);
}

#[test]
fn ai_without_key_still_writes_readme() {
    let fs = MemoryFilesystem::new();
    let enhancers: Vec<Box<dyn Enhancer>> = vec![Box::new(AiEnhancer::new(AiSettings::default()))];

    let report = service(&fs)
        .generate(GenerateRequest {
            metadata: metadata(TemplateKind::Standard, "README.md"),
            enhancers: &enhancers,
            force: false,
        })
        .unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].enhancer, "ai");
    let content = fs.read_file(Path::new("README.md")).unwrap();
    assert!(content.contains("A demo"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    let meta = metadata(TemplateKind::Standard, "README.md");

    for template in ["minimal", "standard", "fancy"] {
        assert_eq!(
            svc.render(template, &meta).unwrap(),
            svc.render(template, &meta).unwrap()
        );
    }
}
