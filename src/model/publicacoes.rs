use serde::{Deserialize, Serialize};

use crate::model::common::Publicacao;

// ============================================================================
// Publication-evidence sections: purchase regulation, physical-financial
// execution extract, accounting statements, council opinions/minutes and
// the activities-report publication.
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicacaoRegulamento {
    pub houve_publicacao_inicial: bool,
    pub publicacoes_regulamento_inicial: Vec<Publicacao>,
    pub houve_alteracao_do_regulamento: bool,
    pub houve_publicacao_regulamento_alterado: bool,
    pub publicacoes_alteracao_regulamento: Vec<Publicacao>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicacaoExtrato {
    pub ha_extrato_execucao_fisica_financeira: bool,
    pub extrato_elaborado_conforme_modelo: bool,
    pub publicacoes: Vec<Publicacao>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsavelContabil {
    pub numero_crc: String,
    pub cpf: String,
    pub situacao_regular_crc: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemonstracoesContabeis {
    pub publicacoes: Vec<Publicacao>,
    pub responsavel: ResponsavelContabil,
}

/// One council opinion or meeting minutes entry, with its own staged
/// publication list absorbed at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParecerAta {
    pub tipo_parecer_ata: i64,
    pub houve_publicacao: bool,
    pub conclusao_parecer: Option<i64>,
    pub publicacoes: Vec<Publicacao>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicacaoRelatorioAtividades {
    pub houve_publicacao_exercicio: bool,
    pub publicacoes: Vec<Publicacao>,
}
