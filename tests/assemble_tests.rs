use serde_json::{Value, json};

use prestacao_contas::assemble::assembler::{FULL_DOCUMENT_FILENAME, assemble_full, build_documento};
use prestacao_contas::assemble::emit::{DocumentSink, MemorySink, pretty};
use prestacao_contas::assemble::registry::{CATALOG, find};
use prestacao_contas::error::FormError;
use prestacao_contas::form::state::FormState;
use prestacao_contas::trace::logger::TraceLogger;

// =========================================================================
// Catalog integrity
// =========================================================================

#[test]
fn catalog_covers_thirty_sections_with_unique_names() {
    assert_eq!(CATALOG.len(), 30);

    let mut names: Vec<&str> = CATALOG.iter().map(|s| s.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 30, "section names must be unique");

    let mut files: Vec<&str> = CATALOG.iter().map(|s| s.filename).collect();
    files.sort_unstable();
    files.dedup();
    assert_eq!(files.len(), 30, "output filenames must be unique");
}

#[test]
fn unknown_section_is_rejected() {
    let err = find("inexistente").unwrap_err();
    assert!(matches!(err, FormError::UnknownSection { .. }));
}

// =========================================================================
// Empty-form assembly
// =========================================================================

#[test]
fn empty_form_yields_a_well_formed_full_document() {
    let state = FormState::new();
    let documento = build_documento(&state).expect("empty form must still assemble");

    let value = serde_json::to_value(&documento).expect("serialize full document");
    let map = value.as_object().expect("document is an object");

    for key in [
        "descritor",
        "codigo_ajuste",
        "relacao_empregados",
        "relacao_bens",
        "contratos",
        "documentos_fiscais",
        "pagamentos",
        "disponibilidades",
        "receitas",
        "ajustes_saldo",
        "servidores_cedidos",
        "descontos",
        "devolucoes",
        "glosas",
        "empenhos",
        "repasses",
        "relatorio_atividades",
        "dados_gerais_entidade_beneficiaria",
        "responsaveis_membros_orgao_concessor",
        "publicacao_regulamento_compras",
        "publicacao_extrato_execucao_fisica_financeira",
        "declaracoes",
        "relatorio_comissao_avaliacao",
        "relatorio_governamental_analise_execucao",
        "relatorio_monitoramento_avaliacao",
        "demonstracoes_contabeis",
        "publicacoes_parecer_ata",
        "publicacao_relatorio_atividades",
        "prestacao_contas_entidade_beneficiaria",
        "parecer_conclusivo",
        "transparencia",
    ] {
        assert!(map.contains_key(key), "missing top-level key: {}", key);
    }

    assert_eq!(map["relacao_empregados"], json!([]), "lists default to empty arrays");
    assert_eq!(map["descritor"]["municipio"], Value::Null, "unfilled codes are null");
    assert_eq!(map["disponibilidades"]["saldo_fundo_fixo"], json!(0));
}

#[test]
fn every_catalog_section_assembles_on_an_empty_form() {
    let state = FormState::new();

    for def in CATALOG {
        let result = (def.document)(&state);
        assert!(
            result.is_ok(),
            "section '{}' must not fail on an empty form: {:?}",
            def.name,
            result.err()
        );
    }
}

// =========================================================================
// Per-section emission
// =========================================================================

#[test]
fn descritor_document_carries_both_header_keys() {
    let mut state = FormState::new();
    state.set_text("tipo_documento", "PRESTACAO");
    state.set_text("municipio", "7107");
    state.set_text("codigo_ajuste", "AJ-2024-001");

    let def = find("geral").expect("geral is in the catalog");
    let document = (def.document)(&state).expect("descritor must assemble");

    assert_eq!(document["descritor"]["tipo_documento"], json!("PRESTACAO"));
    assert_eq!(document["descritor"]["municipio"], json!(7107));
    assert_eq!(document["codigo_ajuste"], json!("AJ-2024-001"));
    assert_eq!(def.filename, "descritor.json");
}

#[test]
fn emission_is_pretty_printed() {
    let state = FormState::new();
    let def = find("empregados").expect("empregados is in the catalog");
    let document = (def.document)(&state).expect("must assemble");

    let mut sink = MemorySink::new();
    let content = pretty(&document, def.name).expect("pretty print");
    sink.emit(def.filename, &content).expect("emit");

    assert_eq!(sink.files.len(), 1);
    assert_eq!(sink.files[0].0, "empregados.json");
    assert!(
        sink.files[0].1.contains("\n  \"relacao_empregados\""),
        "output must be indented for human review"
    );
}

// =========================================================================
// Full-document recovery boundary
// =========================================================================

#[test]
fn section_failure_surfaces_as_one_generic_notice() {
    let mut state = FormState::new();
    // Transparency rule violation: flag set, no websites staged
    state.set_bool("trans-mantem-sitio", true);

    let tracer = TraceLogger::disabled();
    let err = assemble_full(&state, &tracer).unwrap_err();
    assert!(
        matches!(err, FormError::DocumentGeneration),
        "the boundary hides the section cause behind a generic notice"
    );
}

#[test]
fn full_document_filename_is_fixed() {
    assert_eq!(FULL_DOCUMENT_FILENAME, "prestacao_contas_completa.json");
}
