//! Propriétés de la construction des requêtes

use dnaview_core::{AnalysisError, AnalysisRequest};
use proptest::prelude::*;

proptest! {
    #[test]
    fn whitespace_only_input_is_rejected(input in "[ \t\r\n]{0,16}") {
        prop_assert!(matches!(AnalysisRequest::new(&input), Err(AnalysisError::EmptySequence)));
    }

    #[test]
    fn sequence_is_trimmed_input(
        left in "[ \t\n]{0,4}",
        core in "[ACGTacgtN][ACGTacgtN ]{0,30}[ACGTacgtN]|[ACGT]",
        right in "[ \t\n]{0,4}",
    ) {
        let raw = format!("{}{}{}", left, core, right);
        let request = AnalysisRequest::new(&raw).unwrap();

        prop_assert_eq!(request.sequence(), core.as_str());

        let body: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        prop_assert_eq!(body, serde_json::json!({ "sequence": core }));
    }
}
