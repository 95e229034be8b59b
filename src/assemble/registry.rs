use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::state::FormState;
use crate::sections;

/// One entry in the section catalog: CLI name, output filename and the
/// assembler producing the standalone per-section document.
#[derive(Debug)]
pub struct SectionDef {
    pub name: &'static str,
    pub filename: &'static str,
    pub document: fn(&FormState) -> Result<Map<String, Value>, FormError>,
}

/// Every section, in the order the full document lays them out.
pub const CATALOG: &[SectionDef] = &[
    SectionDef { name: "geral", filename: "descritor.json", document: sections::geral::document },
    SectionDef { name: "empregados", filename: "empregados.json", document: sections::empregados::document },
    SectionDef { name: "bens", filename: "bens.json", document: sections::bens::document },
    SectionDef { name: "contratos", filename: "contratos.json", document: sections::contratos::document },
    SectionDef { name: "documentos-fiscais", filename: "docs.json", document: sections::fiscal::document_documentos },
    SectionDef { name: "pagamentos", filename: "pagamentos.json", document: sections::fiscal::document_pagamentos },
    SectionDef { name: "disponibilidades", filename: "disponibilidades.json", document: sections::financeiro::document_disponibilidades },
    SectionDef { name: "receitas", filename: "receitas.json", document: sections::financeiro::document_receitas },
    SectionDef { name: "ajustes-saldo", filename: "ajustes.json", document: sections::financeiro::document_ajustes },
    SectionDef { name: "servidores-cedidos", filename: "servidores.json", document: sections::pessoal::document },
    SectionDef { name: "descontos", filename: "descontos.json", document: sections::financeiro::document_descontos },
    SectionDef { name: "devolucoes", filename: "devolucoes.json", document: sections::financeiro::document_devolucoes },
    SectionDef { name: "glosas", filename: "glosas.json", document: sections::fiscal::document_glosas },
    SectionDef { name: "empenhos", filename: "empenhos.json", document: sections::orcamento::document_empenhos },
    SectionDef { name: "repasses", filename: "repasses.json", document: sections::orcamento::document_repasses },
    SectionDef { name: "atividades", filename: "atividades.json", document: sections::atividades::document },
    SectionDef { name: "entidade", filename: "entidade.json", document: sections::certidoes::document_dados_gerais },
    SectionDef { name: "responsaveis-orgao", filename: "responsaveis_orgao.json", document: sections::certidoes::document_responsaveis_orgao },
    SectionDef { name: "regulamento", filename: "regulamento.json", document: sections::publicacoes::document_regulamento },
    SectionDef { name: "extrato", filename: "extrato.json", document: sections::publicacoes::document_extrato },
    SectionDef { name: "declaracoes", filename: "declaracoes.json", document: sections::declaracoes::document },
    SectionDef { name: "rel-comissao", filename: "rel_comissao.json", document: sections::relatorios::document_comissao },
    SectionDef { name: "rel-governamental", filename: "rel_governamental.json", document: sections::relatorios::document_governamental },
    SectionDef { name: "rel-monitoramento", filename: "rel_monitoramento.json", document: sections::relatorios::document_monitoramento },
    SectionDef { name: "demonstracoes", filename: "demonstracoes.json", document: sections::publicacoes::document_demonstracoes },
    SectionDef { name: "pub-parecer", filename: "pub_parecer.json", document: sections::publicacoes::document_pareceres },
    SectionDef { name: "pub-atividades", filename: "pub_atividades.json", document: sections::publicacoes::document_pub_rel_atividades },
    SectionDef { name: "prestacao-contas", filename: "prestacao_contas.json", document: sections::certidoes::document_prestacao_contas },
    SectionDef { name: "parecer-conclusivo", filename: "parecer_conclusivo.json", document: sections::parecer::document },
    SectionDef { name: "transparencia", filename: "transparencia.json", document: sections::transparencia::document },
];

pub fn find(name: &str) -> Result<&'static SectionDef, FormError> {
    CATALOG
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| FormError::UnknownSection {
            name: name.to_string(),
        })
}
