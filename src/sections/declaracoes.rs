use serde_json::{Map, Value};

use crate::error::FormError;
use crate::form::field::{add_scalar, stage_record};
use crate::form::state::FormState;
use crate::model::declaracoes::{Declaracoes, EmpresaPertencente, ParticipacaoDiretivo};
use crate::sections::section_doc;

const STAGING_CPF_CONTRATADOS: &str = "staging-cpf-contratados-list";
const LISTA_EMPRESAS: &str = "lista-empresas-pertencentes";
const LISTA_PARTICIPACOES: &str = "lista-participacoes-diretivo";

// ============================================================================
// Conflict-of-interest declarations page.
// ============================================================================

pub fn add_empresa_pertencente(state: &mut FormState) -> Result<(), FormError> {
    let cnpj = state.text("empresa-cnpj").to_string();
    let cpf = state.text("empresa-cpf").to_string();

    if cnpj.is_empty() && cpf.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Informe CNPJ ou CPF".to_string(),
        });
    }

    let empresa = EmpresaPertencente {
        cnpj: cnpj.clone(),
        cpf: cpf.clone(),
    };
    let display = format!("CNPJ:{} CPF:{}", cnpj, cpf);
    stage_record(state, LISTA_EMPRESAS, &empresa, display)?;

    state.clear_inputs(&["empresa-cnpj", "empresa-cpf"]);
    Ok(())
}

/// Staged as a bare string: the raw CPF, not a JSON-encoded record.
pub fn add_cpf_contratado(state: &mut FormState) -> Result<(), FormError> {
    add_scalar(state, "part-cpf-contratado", STAGING_CPF_CONTRATADOS, |v| {
        format!("CPF: {}", v)
    })
}

pub fn save_participacao_diretivo(state: &mut FormState) -> Result<(), FormError> {
    let cpf_dirigente = state.text("part-cpf-dirigente").to_string();
    if cpf_dirigente.is_empty() {
        return Err(FormError::IncompleteRecord {
            message: "Informe CPF Dirigente".to_string(),
        });
    }

    let participacao = ParticipacaoDiretivo {
        cpf_dirigente: cpf_dirigente.clone(),
        cpf_contratados: state.scalars_in(STAGING_CPF_CONTRATADOS),
    };

    let display = format!("Dirigente {}", cpf_dirigente);
    stage_record(state, LISTA_PARTICIPACOES, &participacao, display)?;

    state.clear_input("part-cpf-dirigente");
    state.clear_list(STAGING_CPF_CONTRATADOS);
    Ok(())
}

pub fn build(state: &FormState) -> Result<Declaracoes, FormError> {
    let secao = Declaracoes {
        houve_contratacao_empresas_pertencentes: state.flag("decl-houve-contratacao"),
        empresas_pertencentes: state.records_in(LISTA_EMPRESAS)?,
        houve_participacao_quadro_diretivo_administrativo: state.flag("decl-houve-participacao"),
        participacoes_quadro_diretivo_administrativo: state.records_in(LISTA_PARTICIPACOES)?,
    };

    if secao.houve_contratacao_empresas_pertencentes && secao.empresas_pertencentes.is_empty() {
        return Err(FormError::RuleViolation {
            section: "declaracoes",
            message: "Contratação de empresas pertencentes declarada, mas nenhuma empresa foi adicionada."
                .to_string(),
        });
    }
    if secao.houve_participacao_quadro_diretivo_administrativo
        && secao.participacoes_quadro_diretivo_administrativo.is_empty()
    {
        return Err(FormError::RuleViolation {
            section: "declaracoes",
            message: "Participação no quadro diretivo declarada, mas nenhuma participação foi adicionada."
                .to_string(),
        });
    }

    Ok(secao)
}

pub fn document(state: &FormState) -> Result<Map<String, Value>, FormError> {
    section_doc("declaracoes", &build(state)?)
}
