use serde::{Deserialize, Serialize};

use crate::model::numero::{real, real_opcional};

// ============================================================================
// Personnel sections: employees with their monthly remuneration periods,
// and public servants ceded to the entity.
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodoRemuneracao {
    pub mes: i64,
    #[serde(with = "real")]
    pub carga_horaria: f64,
    #[serde(with = "real")]
    pub remuneracao_bruta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empregado {
    pub cpf: String,
    pub data_admissao: String,
    /// Serialized as an explicit null while the employee is still active.
    pub data_demissao: Option<String>,
    pub cbo: String,
    pub cns: String,
    #[serde(with = "real")]
    pub salario_contratual: f64,
    pub periodos_remuneracao: Vec<PeriodoRemuneracao>,
}

/// Cession periods allow partial entries: only the month is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodoCessao {
    pub mes: i64,
    #[serde(with = "real_opcional")]
    pub carga_horaria: Option<f64>,
    #[serde(with = "real_opcional")]
    pub remuneracao_bruta: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServidorCedido {
    pub cpf: String,
    pub data_inicial_cessao: String,
    pub data_final_cessao: String,
    pub cargo_publico_ocupado: String,
    pub funcao_desempenhada_entidade_beneficiaria: String,
    pub onus_pagamento: Option<i64>,
    pub periodos_cessao: Vec<PeriodoCessao>,
}
