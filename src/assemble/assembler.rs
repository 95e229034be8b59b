use crate::error::FormError;
use crate::form::state::FormState;
use crate::model::documento::DocumentoCompleto;
use crate::sections;
use crate::trace::event::TraceEvent;
use crate::trace::logger::TraceLogger;

pub const FULL_DOCUMENT_FILENAME: &str = "prestacao_contas_completa.json";

/// Assemble the whole report from the form state, every section at once.
///
/// Section rules apply here exactly as in per-section generation, since both
/// paths run the same builders.
pub fn build_documento(state: &FormState) -> Result<DocumentoCompleto, FormError> {
    Ok(DocumentoCompleto {
        descritor: sections::geral::build_descritor(state),
        codigo_ajuste: sections::geral::build_codigo_ajuste(state),
        relacao_empregados: sections::empregados::build(state)?,
        relacao_bens: sections::bens::build(state)?,
        contratos: sections::contratos::build(state)?,
        documentos_fiscais: sections::fiscal::build_documentos(state)?,
        pagamentos: sections::fiscal::build_pagamentos(state)?,
        disponibilidades: sections::financeiro::build_disponibilidades(state)?,
        receitas: sections::financeiro::build_receitas(state)?,
        ajustes_saldo: sections::financeiro::build_ajustes(state)?,
        servidores_cedidos: sections::pessoal::build(state)?,
        descontos: sections::financeiro::build_descontos(state)?,
        devolucoes: sections::financeiro::build_devolucoes(state)?,
        glosas: sections::fiscal::build_glosas(state)?,
        empenhos: sections::orcamento::build_empenhos(state)?,
        repasses: sections::orcamento::build_repasses(state)?,
        relatorio_atividades: sections::atividades::build(state)?,
        dados_gerais_entidade_beneficiaria: sections::certidoes::build_dados_gerais(state),
        responsaveis_membros_orgao_concessor: sections::certidoes::build_responsaveis_orgao(state),
        publicacao_regulamento_compras: sections::publicacoes::build_regulamento(state)?,
        publicacao_extrato_execucao_fisica_financeira: sections::publicacoes::build_extrato(state)?,
        declaracoes: sections::declaracoes::build(state)?,
        relatorio_comissao_avaliacao: sections::relatorios::build_relatorio(state, "comissao"),
        relatorio_governamental_analise_execucao: sections::relatorios::build_relatorio(
            state, "gov",
        ),
        relatorio_monitoramento_avaliacao: sections::relatorios::build_relatorio(state, "monit"),
        demonstracoes_contabeis: sections::publicacoes::build_demonstracoes(state)?,
        publicacoes_parecer_ata: sections::publicacoes::build_pareceres(state)?,
        publicacao_relatorio_atividades: sections::publicacoes::build_pub_rel_atividades(state)?,
        prestacao_contas_entidade_beneficiaria: sections::certidoes::build_prestacao_contas(state),
        parecer_conclusivo: sections::parecer::build(state)?,
        transparencia: sections::transparencia::build(state)?,
    })
}

/// Full-document recovery boundary: any section failure aborts the whole
/// generation with one generic notice; the underlying cause goes to the
/// trace log only.
pub fn assemble_full(
    state: &FormState,
    tracer: &TraceLogger,
) -> Result<DocumentoCompleto, FormError> {
    match build_documento(state) {
        Ok(documento) => {
            tracer.log(&TraceEvent::now("document_assembled"));
            Ok(documento)
        }
        Err(cause) => {
            tracer.log(
                &TraceEvent::now("assembly_failed").with_detail(cause.to_string()),
            );
            Err(FormError::DocumentGeneration)
        }
    }
}
