use serde_json::json;

use prestacao_contas::error::FormError;
use prestacao_contas::form::state::FormState;
use prestacao_contas::sections::atividades::{add_periodicidade, save_meta, save_programa};
use prestacao_contas::sections::contratos::{add_contrato, build as build_contratos};
use prestacao_contas::sections::declaracoes::{
    add_cpf_contratado, build as build_declaracoes, save_participacao_diretivo,
};
use prestacao_contas::sections::publicacoes::{add_pub_inicial, build_regulamento};
use prestacao_contas::sections::transparencia::{
    add_requisito_art78p1, add_sitio_internet, build as build_transparencia,
};

// =========================================================================
// Contratos: nested credor and comma-separated nature codes
// =========================================================================

#[test]
fn contrato_parses_natureza_and_nests_credor() {
    let mut state = FormState::new();
    state.set_text("contrato-numero", "CT-01/2024");
    state.set_text("contrato-credor-tipo", "2");
    state.set_text("contrato-credor-numero", "12345678000199");
    state.set_text("contrato-credor-nome", "Fornecedora Ltda");
    state.set_text("contrato-natureza", "1, 3, x, 5");
    state.set_text("contrato-valor-montante", "1200.50");

    add_contrato(&mut state).expect("contrato must stage");

    let contratos = build_contratos(&state).expect("contratos must parse");
    assert_eq!(contratos.len(), 1);
    assert_eq!(contratos[0].natureza_contratacao, vec![1, 3, 5]);
    assert_eq!(contratos[0].credor.nome, "Fornecedora Ltda");
    assert_eq!(contratos[0].credor.documento_tipo, Some(2));
    assert_eq!(contratos[0].valor_montante, Some(1200.5));
    assert!(
        contratos[0].natureza_contratacao_outro.is_none(),
        "empty optional text is omitted"
    );
}

#[test]
fn contrato_requires_numero_and_credor() {
    let mut state = FormState::new();
    state.set_text("contrato-numero", "CT-01/2024");
    // credor nome missing

    assert!(add_contrato(&mut state).is_err());
    assert_eq!(state.list_len("lista-contratos"), 0);
}

// =========================================================================
// Atividades: two levels of staging absorption
// =========================================================================

#[test]
fn programa_absorbs_metas_which_absorb_periodicidades() {
    let mut state = FormState::new();

    state.set_text("periodo-num", "1");
    state.set_text("periodo-qtd", "12");
    add_periodicidade(&mut state).expect("periodicidade must stage");

    state.set_text("meta-codigo", "M-01");
    state.set_bool("meta-atendida", true);
    save_meta(&mut state).expect("meta must stage");
    assert_eq!(
        state.list_len("staging-periodicidades-list"),
        0,
        "meta save empties the periodicidade buffer"
    );

    state.set_text("programa-nome", "Saúde Básica");
    save_programa(&mut state).expect("programa must stage");
    assert_eq!(
        state.list_len("staging-metas-list"),
        0,
        "programa save empties the meta buffer"
    );

    let relatorio =
        prestacao_contas::sections::atividades::build(&state).expect("relatório must parse");
    assert_eq!(relatorio.programas.len(), 1);
    assert_eq!(relatorio.programas[0].metas.len(), 1);
    assert!(relatorio.programas[0].metas[0].meta_atendida);
    assert_eq!(
        relatorio.programas[0].metas[0].periodicidades[0].quantidade_realizada,
        Some(12.0)
    );
}

// =========================================================================
// Declarações: scalar CPF staging plus explicit section rules
// =========================================================================

#[test]
fn participacao_absorbs_scalar_cpfs() {
    let mut state = FormState::new();
    state.set_text("part-cpf-contratado", "111");
    add_cpf_contratado(&mut state).expect("cpf must stage");
    state.set_text("part-cpf-contratado", "222");
    add_cpf_contratado(&mut state).expect("cpf must stage");

    state.set_text("part-cpf-dirigente", "999");
    save_participacao_diretivo(&mut state).expect("participação must stage");

    let secao = build_declaracoes(&state).expect("declarações must build");
    let participacao = &secao.participacoes_quadro_diretivo_administrativo[0];
    assert_eq!(participacao.cpf_dirigente, "999");
    assert_eq!(participacao.cpf_contratados, vec!["111", "222"]);
}

#[test]
fn declared_contratacao_with_empty_list_blocks_generation() {
    let mut state = FormState::new();
    state.set_bool("decl-houve-contratacao", true);

    let err = build_declaracoes(&state).unwrap_err();
    assert!(
        matches!(err, FormError::RuleViolation { section: "declaracoes", .. }),
        "flag true with empty list must violate the section rule"
    );
}

// =========================================================================
// Publicações: generic descriptor staging and the regulation rule
// =========================================================================

#[test]
fn publicacao_stages_through_shared_descriptors() {
    let mut state = FormState::new();
    state.set_text("pub-inicial-tipo", "1");
    state.set_text("pub-inicial-data", "2024-03-01");
    state.set_text("pub-inicial-url", "https://diario.example.org");
    add_pub_inicial(&mut state).expect("publicação must stage");

    state.set_bool("pub-inicial-houve", true);
    let secao = build_regulamento(&state).expect("regulamento must build");

    let publicacao = &secao.publicacoes_regulamento_inicial[0];
    assert_eq!(publicacao.tipo_veiculo_publicacao, 1);
    assert_eq!(publicacao.data_publicacao, "2024-03-01");
    assert_eq!(
        publicacao.endereco_internet.as_deref(),
        Some("https://diario.example.org")
    );
    assert!(publicacao.nome_veiculo.is_none(), "unfilled optional stays absent");
}

#[test]
fn regulamento_rule_blocks_declared_publication_without_entries() {
    let mut state = FormState::new();
    state.set_bool("pub-inicial-houve", true);

    let err = build_regulamento(&state).unwrap_err();
    assert!(matches!(
        err,
        FormError::RuleViolation {
            section: "publicacao_regulamento_compras",
            ..
        }
    ));
}

// =========================================================================
// Transparência: boolean normalization at staging time
// =========================================================================

#[test]
fn requisito_atende_is_a_real_boolean() {
    let mut state = FormState::new();
    state.set_text("req-781-num", "3");
    state.set_text("req-781-atende", "true"); // select literal, pre-normalization
    add_requisito_art78p1(&mut state).expect("requisito must stage");

    state.set_text("req-781-num", "4");
    state.set_bool("req-781-atende", false);
    add_requisito_art78p1(&mut state).expect("requisito must stage");

    let secao = build_transparencia(&state).expect("transparência must build");
    let reqs = &secao.requisitos_artigos_7o_8o_paragrafo_1o;
    assert_eq!(reqs.len(), 2);
    assert!(reqs[0].atende);
    assert!(!reqs[1].atende);

    let encoded = serde_json::to_value(reqs).expect("serialize requisitos");
    assert_eq!(
        encoded,
        json!([
            {"requisito": 3, "atende": true},
            {"requisito": 4, "atende": false}
        ]),
        "atende serializes as a JSON boolean, never a string"
    );
}

#[test]
fn declared_website_without_urls_blocks_generation() {
    let mut state = FormState::new();
    state.set_bool("trans-mantem-sitio", true);

    let err = build_transparencia(&state).unwrap_err();
    assert!(matches!(
        err,
        FormError::RuleViolation {
            section: "transparencia",
            ..
        }
    ));
}

#[test]
fn sitios_are_staged_as_bare_strings() {
    let mut state = FormState::new();
    state.set_bool("trans-mantem-sitio", true);
    state.set_text("trans-sitio-url", "https://entidade.org.br");
    add_sitio_internet(&mut state).expect("sítio must stage");

    let secao = build_transparencia(&state).expect("transparência must build");
    assert_eq!(secao.sitios_internet, vec!["https://entidade.org.br"]);
}
