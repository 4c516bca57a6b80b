//! Parsing tests across every operation kind

#[cfg(test)]
mod tests {
    use crate::{parse_double_check_response, ParseError};
    use revisor_domain::{
        CorrectionAction, DispositivoAction, FactsAction, OperationKind, ReviewAction,
        TopicAction,
    };
    use serde_json::json;

    #[test]
    fn test_facts_comparison_response() {
        let response = r#"{
            "verifiedResult": {
                "tabela": [{"tema": "Vínculo", "status": "incontroverso"}],
                "fatosIncontroversos": ["Vínculo"]
            },
            "corrections": [
                {"type": "fix_row", "tema": "Vínculo", "field": "status", "newValue": "incontroverso", "reason": "Confissão"},
                {"type": "add_row", "row": {"tema": "Salário", "status": "controverso"}, "reason": "Omitido"},
                {"type": "remove_row", "tema": "Horas extras", "reason": "Sem pedido"},
                {"type": "add_fato", "list": "fatosIncontroversos", "fato": "Vínculo", "reason": "Confissão"}
            ]
        }"#;

        let parsed = parse_double_check_response(OperationKind::FactsComparison, response).unwrap();
        let types: Vec<_> = parsed.corrections.iter().map(|c| c.type_name()).collect();
        assert_eq!(types, vec!["fix_row", "add_row", "remove_row", "add_fato"]);

        match &parsed.corrections[1].action {
            CorrectionAction::Facts(FactsAction::AddRow { row: Some(row) }) => {
                assert_eq!(row["tema"], json!("Salário"));
            }
            other => panic!("Expected AddRow, got {:?}", other),
        }

        let verified: serde_json::Value =
            serde_json::from_str(parsed.verified.as_deref().unwrap()).unwrap();
        assert_eq!(verified["fatosIncontroversos"], json!(["Vínculo"]));
    }

    #[test]
    fn test_dispositivo_response() {
        let response = r#"[
            {"type": "add", "item": "Condeno o réu em honorários", "reason": "Omissão"},
            {"type": "modify", "item": "10%", "suggestion": "15%", "reason": "Complexidade"},
            {"type": "remove", "item": "Custas pelo autor", "reason": "Sucumbência do réu"}
        ]"#;

        let parsed = parse_double_check_response(OperationKind::Dispositivo, response).unwrap();
        assert!(parsed.verified.is_none());
        assert!(matches!(
            parsed.corrections[1].action,
            CorrectionAction::Dispositivo(DispositivoAction::Modify { suggestion: Some(_), .. })
        ));
    }

    #[test]
    fn test_prose_kinds_share_review_family() {
        let response = r#"[{"type": "false_positive", "item": "Nulidade da citação", "reason": "Comparecimento espontâneo"}]"#;

        for kind in [
            OperationKind::SentenceReview,
            OperationKind::ProofAnalysis,
            OperationKind::QuickPrompt,
        ] {
            let parsed = parse_double_check_response(kind, response).unwrap();
            assert!(matches!(
                parsed.corrections[0].action,
                CorrectionAction::Review(ReviewAction::FalsePositive { item: Some(_) })
            ));
        }
    }

    #[test]
    fn test_review_types_are_unrecognized_for_topics() {
        let response = r#"[{"type": "missed", "item": "x", "reason": "r"}]"#;
        let parsed = parse_double_check_response(OperationKind::TopicExtraction, response).unwrap();
        assert_eq!(
            parsed.corrections[0].action,
            CorrectionAction::Topic(TopicAction::Unrecognized("missed".to_string()))
        );
    }

    #[test]
    fn test_upstream_order_is_kept() {
        let response = r#"[
            {"type": "remove", "topic": "C", "reason": ""},
            {"type": "remove", "topic": "A", "reason": ""},
            {"type": "remove", "topic": "B", "reason": ""}
        ]"#;
        let parsed = parse_double_check_response(OperationKind::TopicExtraction, response).unwrap();
        let topics: Vec<_> = parsed
            .corrections
            .iter()
            .map(|c| c.to_json()["topic"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(topics, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_truncated_response_fails() {
        let response = r#"{"verifiedResult": "x", "corrections": [{"type": "add""#;
        let result = parse_double_check_response(OperationKind::Dispositivo, response);
        assert!(matches!(result, Err(ParseError::JsonParse(_))));
    }
}
