use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::{FieldDescriptor, FieldKind, add_item, stage_record};
use crate::form::state::FormState;
use crate::model::publicacoes::{
    DemonstracoesContabeis, ParecerAta, PublicacaoExtrato, PublicacaoRegulamento,
    PublicacaoRelatorioAtividades, ResponsavelContabil,
};
use crate::sections::{field_text, section_doc};

const STAGING_PARECER_PUBS: &str = "staging-parecer-publicacoes-list";
const LISTA_PUB_PARECER: &str = "lista-pub-parecer";

// ============================================================================
// Publication-evidence pages. Five pages share one publication shape and
// stage it through the same descriptor set, prefixed per page.
// ============================================================================

/// Stage one publication entry; `prefix` selects the page's input ids.
pub fn add_publicacao(
    state: &mut FormState,
    prefix: &str,
    container: &str,
) -> Result<(), FormError> {
    let fields = [
        FieldDescriptor::required(
            &format!("{prefix}-tipo"),
            "tipo_veiculo_publicacao",
            "Tipo",
            FieldKind::Number,
        ),
        FieldDescriptor::optional(&format!("{prefix}-nome"), "nome_veiculo", "Nome", FieldKind::Text),
        FieldDescriptor::required(
            &format!("{prefix}-data"),
            "data_publicacao",
            "Data",
            FieldKind::Text,
        ),
        FieldDescriptor::optional(
            &format!("{prefix}-url"),
            "endereco_internet",
            "URL",
            FieldKind::Text,
        ),
    ];
    add_item(state, &fields, container, |d| {
        format!(
            "Pub. em {} ({})",
            field_text(d, "data_publicacao"),
            field_text(d, "tipo_veiculo_publicacao")
        )
    })
}

pub fn add_pub_inicial(state: &mut FormState) -> Result<(), FormError> {
    add_publicacao(state, "pub-inicial", "lista-pub-inicial")
}

pub fn add_pub_alteracao(state: &mut FormState) -> Result<(), FormError> {
    add_publicacao(state, "pub-alteracao", "lista-pub-alteracao")
}

pub fn add_pub_extrato(state: &mut FormState) -> Result<(), FormError> {
    add_publicacao(state, "extrato-pub", "lista-pub-extrato")
}

pub fn add_demonstracao_publicacao(state: &mut FormState) -> Result<(), FormError> {
    add_publicacao(state, "demo-pub", "lista-demonstracoes-publicacoes")
}

pub fn add_pub_rel_atividades(state: &mut FormState) -> Result<(), FormError> {
    add_publicacao(state, "pra-pub", "lista-pub-rel-atividades")
}

pub fn add_parecer_publicacao(state: &mut FormState) -> Result<(), FormError> {
    add_publicacao(state, "pa-pub", STAGING_PARECER_PUBS)
}

// ============================================================================
// Purchase-regulation publication (flags + two lists).
// ============================================================================

pub fn build_regulamento(state: &FormState) -> Result<PublicacaoRegulamento, FormError> {
    let secao = PublicacaoRegulamento {
        houve_publicacao_inicial: state.flag("pub-inicial-houve"),
        publicacoes_regulamento_inicial: state.records_in("lista-pub-inicial")?,
        houve_alteracao_do_regulamento: state.flag("pub-alteracao-houve"),
        houve_publicacao_regulamento_alterado: state.flag("pub-alteracao-publicada"),
        publicacoes_alteracao_regulamento: state.records_in("lista-pub-alteracao")?,
    };

    if secao.houve_publicacao_inicial && secao.publicacoes_regulamento_inicial.is_empty() {
        return Err(FormError::RuleViolation {
            section: "publicacao_regulamento_compras",
            message: "Publicação inicial declarada, mas nenhuma publicação foi adicionada."
                .to_string(),
        });
    }

    Ok(secao)
}

pub fn document_regulamento(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("publicacao_regulamento_compras", &build_regulamento(state)?)
}

// ============================================================================
// Physical-financial execution extract.
// ============================================================================

pub fn build_extrato(state: &FormState) -> Result<PublicacaoExtrato, FormError> {
    Ok(PublicacaoExtrato {
        ha_extrato_execucao_fisica_financeira: state.flag("extrato-ha"),
        extrato_elaborado_conforme_modelo: state.flag("extrato-conforme"),
        publicacoes: state.records_in("lista-pub-extrato")?,
    })
}

pub fn document_extrato(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc(
        "publicacao_extrato_execucao_fisica_financeira",
        &build_extrato(state)?,
    )
}

// ============================================================================
// Accounting statements with the responsible accountant.
// ============================================================================

pub fn build_demonstracoes(state: &FormState) -> Result<DemonstracoesContabeis, FormError> {
    Ok(DemonstracoesContabeis {
        publicacoes: state.records_in("lista-demonstracoes-publicacoes")?,
        responsavel: ResponsavelContabil {
            numero_crc: state.text("demo-crc").to_string(),
            cpf: state.text("demo-cpf").to_string(),
            situacao_regular_crc: state.flag("demo-crc-regular"),
        },
    })
}

pub fn document_demonstracoes(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("demonstracoes_contabeis", &build_demonstracoes(state)?)
}

// ============================================================================
// Council opinion / meeting minutes entries.
// ============================================================================

pub fn save_parecer_ata(state: &mut FormState) -> Result<(), FormError> {
    let Some(tipo) = state.integer("pa-tipo") else {
        return Err(FormError::IncompleteRecord {
            message: "Informe o tipo do parecer.".to_string(),
        });
    };

    let parecer = ParecerAta {
        tipo_parecer_ata: tipo,
        houve_publicacao: state.flag("pa-houve-pub"),
        conclusao_parecer: state.integer("pa-conclusao"),
        publicacoes: state.records_in(STAGING_PARECER_PUBS)?,
    };

    let display = format!("Parecer Tipo {}", tipo);
    stage_record(state, LISTA_PUB_PARECER, &parecer, display)?;

    state.clear_input("pa-tipo");
    state.clear_list(STAGING_PARECER_PUBS);
    Ok(())
}

pub fn build_pareceres(state: &FormState) -> Result<Vec<ParecerAta>, FormError> {
    state.records_in(LISTA_PUB_PARECER)
}

pub fn document_pareceres(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("publicacoes_parecer_ata", &build_pareceres(state)?)
}

// ============================================================================
// Activities-report publication.
// ============================================================================

pub fn build_pub_rel_atividades(
    state: &FormState,
) -> Result<PublicacaoRelatorioAtividades, FormError> {
    let secao = PublicacaoRelatorioAtividades {
        houve_publicacao_exercicio: state.flag("pra-houve"),
        publicacoes: state.records_in("lista-pub-rel-atividades")?,
    };

    if secao.houve_publicacao_exercicio && secao.publicacoes.is_empty() {
        return Err(FormError::RuleViolation {
            section: "publicacao_relatorio_atividades",
            message: "Publicação no exercício declarada, mas nenhuma publicação foi adicionada."
                .to_string(),
        });
    }

    Ok(secao)
}

pub fn document_pub_rel_atividades(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc(
        "publicacao_relatorio_atividades",
        &build_pub_rel_atividades(state)?,
    )
}
