//! Facts comparison applier

use super::write_artifact;
use crate::ReconcileError;
use revisor_domain::facts::is_truthy;
use revisor_domain::traits::PatchApplier;
use revisor_domain::{Correction, CorrectionAction, FactsAction, FactsComparison, OperationKind};
use tracing::debug;

/// Applies facts corrections to a facts comparison artifact (a JSON object
/// with a `tabela` and fact buckets)
#[derive(Debug, Clone, Default)]
pub struct FactsApplier {
    pretty: bool,
}

impl FactsApplier {
    /// Create an applier
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn apply_one(&self, facts: &mut FactsComparison, correction: &Correction) {
        let CorrectionAction::Facts(action) = &correction.action else {
            debug!(
                correction_type = correction.type_name(),
                "Skipping correction from another family"
            );
            return;
        };

        match action {
            FactsAction::FixRow {
                tema,
                field,
                new_value,
            } => {
                let (Some(tema), Some(field), Some(value)) =
                    (tema.as_deref(), field.as_deref(), new_value.as_ref())
                else {
                    debug!("Skipping fix_row with missing tema, field or value");
                    return;
                };
                if !is_truthy(value) {
                    debug!(tema, field, "Skipping fix_row with empty value");
                    return;
                }
                match facts.row_mut(tema) {
                    Some(row) => {
                        row.insert(field.to_string(), value.clone());
                        debug!(tema, field, "Fixed row");
                    }
                    None => debug!(tema, "Skipping fix_row of unknown row"),
                }
            }
            FactsAction::AddRow { row } => match row.as_ref().filter(|r| is_truthy(r)) {
                Some(row) => {
                    if facts.push_row(row.clone()) {
                        debug!("Added row");
                    } else {
                        debug!("Skipping add_row on an artifact without a table");
                    }
                }
                None => debug!("Skipping add_row without a row"),
            },
            FactsAction::RemoveRow { tema } => match tema.as_deref() {
                Some(tema) => {
                    let removed = facts.remove_rows(tema);
                    debug!(tema, removed, "Removed rows");
                }
                None => debug!("Skipping remove_row without tema"),
            },
            FactsAction::AddFato { list, fato } => {
                let (Some(list), Some(fato)) = (
                    list.as_deref().filter(|l| !l.is_empty()),
                    fato.as_ref().filter(|f| is_truthy(f)),
                ) else {
                    debug!("Skipping add_fato without list or fact");
                    return;
                };
                if facts.push_fact(list, fato.clone()) {
                    debug!(list, "Added fact");
                } else {
                    debug!(list, "Skipping add_fato into a field that is not a list");
                }
            }
            FactsAction::Unrecognized(name) => {
                debug!(correction_type = %name, "Skipping unrecognized facts correction");
            }
        }
    }
}

impl PatchApplier for FactsApplier {
    type Error = ReconcileError;

    fn kind(&self) -> OperationKind {
        OperationKind::FactsComparison
    }

    fn apply(&self, artifact: &str, corrections: &[Correction]) -> Result<String, ReconcileError> {
        let mut facts: FactsComparison = serde_json::from_str(artifact)?;
        for correction in corrections {
            self.apply_one(&mut facts, correction);
        }
        write_artifact(&facts, self.pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn original() -> String {
        json!({
            "fatosControversos": ["Vínculo", "Salário"],
            "tabela": [
                {"tema": "Vínculo", "alegacaoAutor": "Sim", "alegacaoReu": "Não", "status": "controverso"},
                {"tema": "Salário", "alegacaoAutor": "R$ 3.000", "status": "controverso"}
            ],
            "observacoes": "Audiência designada"
        })
        .to_string()
    }

    fn run(corrections: Vec<Correction>) -> Value {
        let out = FactsApplier::default().apply(&original(), &corrections).unwrap();
        serde_json::from_str(&out).unwrap()
    }

    fn fix(tema: &str, field: &str, value: Value) -> Correction {
        Correction::new(FactsAction::FixRow {
            tema: Some(tema.to_string()),
            field: Some(field.to_string()),
            new_value: Some(value),
        })
    }

    #[test]
    fn test_fix_row_updates_one_field() {
        let out = run(vec![fix("Vínculo", "status", json!("incontroverso"))]);
        assert_eq!(out["tabela"][0]["status"], json!("incontroverso"));
        assert_eq!(out["tabela"][0]["alegacaoReu"], json!("Não"));
        assert_eq!(out["tabela"][1]["status"], json!("controverso"));
        assert_eq!(out["observacoes"], json!("Audiência designada"));
    }

    #[test]
    fn test_fix_row_with_falsy_value_is_noop() {
        let expected: Value = serde_json::from_str(&original()).unwrap();
        for value in [json!(""), json!(null), json!(false), json!(0)] {
            assert_eq!(run(vec![fix("Vínculo", "status", value)]), expected);
        }
        assert_eq!(run(vec![fix("Inexistente", "status", json!("x"))]), expected);
    }

    #[test]
    fn test_add_row_never_creates_table() {
        let out = run(vec![Correction::new(FactsAction::AddRow {
            row: Some(json!({"tema": "FGTS", "status": "controverso"})),
        })]);
        assert_eq!(out["tabela"].as_array().unwrap().len(), 3);

        let out = FactsApplier::default()
            .apply(
                r#"{"fatosIncontroversos": []}"#,
                &[Correction::new(FactsAction::AddRow {
                    row: Some(json!({"tema": "FGTS"})),
                })],
            )
            .unwrap();
        assert_eq!(out, r#"{"fatosIncontroversos":[]}"#);
    }

    #[test]
    fn test_remove_row() {
        let out = run(vec![
            Correction::new(FactsAction::RemoveRow {
                tema: Some("Salário".to_string()),
            }),
            Correction::new(FactsAction::RemoveRow { tema: None }),
        ]);
        let rows = out["tabela"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["tema"], json!("Vínculo"));
    }

    #[test]
    fn test_add_fato_creates_bucket() {
        let out = run(vec![Correction::new(FactsAction::AddFato {
            list: Some("fatosIncontroversos".to_string()),
            fato: Some(json!("F")),
        })]);
        assert_eq!(out["fatosIncontroversos"], json!(["F"]));
        assert_eq!(out["fatosControversos"], json!(["Vínculo", "Salário"]));
    }

    #[test]
    fn test_add_fato_into_non_list_is_noop() {
        let out = run(vec![
            Correction::new(FactsAction::AddFato {
                list: Some("observacoes".to_string()),
                fato: Some(json!("F")),
            }),
            Correction::new(FactsAction::AddFato {
                list: None,
                fato: Some(json!("F")),
            }),
        ]);
        assert_eq!(out, serde_json::from_str::<Value>(&original()).unwrap());
    }

    #[test]
    fn test_keys_keep_their_order() {
        let out = FactsApplier::default()
            .apply(&original(), &[fix("Vínculo", "status", json!("incontroverso"))])
            .unwrap();
        let controversos = out.find("\"fatosControversos\"").unwrap();
        let tabela = out.find("\"tabela\"").unwrap();
        let observacoes = out.find("\"observacoes\"").unwrap();
        assert!(controversos < tabela && tabela < observacoes);
    }

    #[test]
    fn test_null_table_is_written_back() {
        let out = FactsApplier::default()
            .apply(
                r#"{"tabela":null,"resumo":"x"}"#,
                &[
                    Correction::new(FactsAction::AddFato {
                        list: Some("fatosIncontroversos".to_string()),
                        fato: Some(json!("F")),
                    }),
                    Correction::new(FactsAction::AddRow {
                        row: Some(json!({"tema": "FGTS"})),
                    }),
                ],
            )
            .unwrap();
        assert_eq!(out, r#"{"tabela":null,"resumo":"x","fatosIncontroversos":["F"]}"#);
    }

    #[test]
    fn test_fix_row_without_field_is_noop() {
        let out = run(vec![Correction::new(FactsAction::FixRow {
            tema: Some("Vínculo".to_string()),
            field: None,
            new_value: Some(json!("incontroverso")),
        })]);
        assert_eq!(out, serde_json::from_str::<Value>(&original()).unwrap());
    }

    #[test]
    fn test_malformed_artifact_is_an_error() {
        let result = FactsApplier::default().apply("[1, 2]", &[]);
        assert!(matches!(result, Err(ReconcileError::InvalidArtifact(_))));
    }
}
