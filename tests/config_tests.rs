use prestacao_contas::cli::config::{AppConfig, load_config};

// =========================================================================
// YAML config parsing and defaults
// =========================================================================

#[test]
fn defaults_apply_when_config_is_missing() {
    let config = load_config(Some("/nonexistent/prestacao.yaml"));
    assert_eq!(config.generate.output_dir, "out");
    assert_eq!(config.generate.draft, "rascunho.json");
    assert_eq!(config.trace.file, "prestacao_trace.jsonl");
}

#[test]
fn partial_yaml_fills_the_rest_with_defaults() {
    let yaml = r#"
generate:
  output_dir: "relatorios"
"#;

    let config: AppConfig = serde_yaml::from_str(yaml).expect("parse config YAML");
    assert_eq!(config.generate.output_dir, "relatorios");
    assert_eq!(
        config.generate.draft, "rascunho.json",
        "unspecified fields keep their defaults"
    );
    assert_eq!(config.trace.file, "prestacao_trace.jsonl");
}

#[test]
fn full_yaml_overrides_everything() {
    let yaml = r#"
generate:
  output_dir: "saida"
  draft: "dados/rascunho.json"
trace:
  file: "log/eventos.jsonl"
"#;

    let config: AppConfig = serde_yaml::from_str(yaml).expect("parse config YAML");
    assert_eq!(config.generate.output_dir, "saida");
    assert_eq!(config.generate.draft, "dados/rascunho.json");
    assert_eq!(config.trace.file, "log/eventos.jsonl");
}
