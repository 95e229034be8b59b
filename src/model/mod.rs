pub mod atividades;
pub mod cadastro;
pub mod common;
pub mod contratos;
pub mod declaracoes;
pub mod documento;
pub mod financeiro;
pub mod fiscal;
pub mod numero;
pub mod orcamento;
pub mod parecer;
pub mod patrimonio;
pub mod pessoal;
pub mod publicacoes;
pub mod relatorios;
pub mod transparencia;
