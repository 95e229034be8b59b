use serde::{Deserialize, Serialize};

use crate::model::atividades::RelatorioAtividades;
use crate::model::cadastro::{
    DadosGeraisEntidade, Descritor, PrestacaoContasEntidade, ResponsaveisOrgao,
};
use crate::model::contratos::Contrato;
use crate::model::declaracoes::Declaracoes;
use crate::model::financeiro::{AjustesSaldo, Desconto, Devolucao, Disponibilidades, Receitas};
use crate::model::fiscal::{DocumentoFiscal, Glosa, Pagamento};
use crate::model::orcamento::{Empenho, Repasse};
use crate::model::parecer::ParecerConclusivo;
use crate::model::patrimonio::RelacaoBens;
use crate::model::pessoal::{Empregado, ServidorCedido};
use crate::model::publicacoes::{
    DemonstracoesContabeis, ParecerAta, PublicacaoExtrato, PublicacaoRegulamento,
    PublicacaoRelatorioAtividades,
};
use crate::model::relatorios::RelatorioAvaliacao;
use crate::model::transparencia::Transparencia;

/// The whole accountability report: every section merged under the keys the
/// external schema mandates, in the order the oversight body publishes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentoCompleto {
    pub descritor: Descritor,
    pub codigo_ajuste: String,
    pub relacao_empregados: Vec<Empregado>,
    pub relacao_bens: RelacaoBens,
    pub contratos: Vec<Contrato>,
    pub documentos_fiscais: Vec<DocumentoFiscal>,
    pub pagamentos: Vec<Pagamento>,
    pub disponibilidades: Disponibilidades,
    pub receitas: Receitas,
    pub ajustes_saldo: AjustesSaldo,
    pub servidores_cedidos: Vec<ServidorCedido>,
    pub descontos: Vec<Desconto>,
    pub devolucoes: Vec<Devolucao>,
    pub glosas: Vec<Glosa>,
    pub empenhos: Vec<Empenho>,
    pub repasses: Vec<Repasse>,
    pub relatorio_atividades: RelatorioAtividades,
    pub dados_gerais_entidade_beneficiaria: DadosGeraisEntidade,
    pub responsaveis_membros_orgao_concessor: ResponsaveisOrgao,
    pub publicacao_regulamento_compras: PublicacaoRegulamento,
    pub publicacao_extrato_execucao_fisica_financeira: PublicacaoExtrato,
    pub declaracoes: Declaracoes,
    pub relatorio_comissao_avaliacao: RelatorioAvaliacao,
    pub relatorio_governamental_analise_execucao: RelatorioAvaliacao,
    pub relatorio_monitoramento_avaliacao: RelatorioAvaliacao,
    pub demonstracoes_contabeis: DemonstracoesContabeis,
    pub publicacoes_parecer_ata: Vec<ParecerAta>,
    pub publicacao_relatorio_atividades: PublicacaoRelatorioAtividades,
    pub prestacao_contas_entidade_beneficiaria: PrestacaoContasEntidade,
    pub parecer_conclusivo: ParecerConclusivo,
    pub transparencia: Transparencia,
}
