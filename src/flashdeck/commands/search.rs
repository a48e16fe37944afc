use crate::commands::{CmdMessage, CmdResult};
use crate::search::{self, MatchMode};
use crate::state::AppState;

pub fn run(state: &AppState, query: &str, mode: MatchMode) -> CmdResult {
    let results = search::search(&state.documents, query, mode);
    let mut result = CmdResult::default();
    if results.is_empty() && !query.trim().is_empty() {
        result.add_message(CmdMessage::info(format!("No cards match \"{}\"", query)));
    }
    result.with_search_results(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StateFixture;

    #[test]
    fn finds_cards_across_documents() {
        let state = StateFixture::new()
            .with_document("# Traits\nShared behaviour")
            .with_document("# Lifetimes\nborrow checker\n# Generics\ntrait bounds")
            .state;
        let result = run(&state, "TRAIT", MatchMode::Literal);
        let hits: Vec<_> = result
            .search_results
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(hits, vec!["Traits", "Generics"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_query_is_silent() {
        let state = StateFixture::new().with_document("# A").state;
        let result = run(&state, "  ", MatchMode::Literal);
        assert!(result.search_results.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn no_match_reports_message() {
        let state = StateFixture::new().with_document("# A").state;
        let result = run(&state, "zzz", MatchMode::Literal);
        assert_eq!(result.messages.len(), 1);
    }
}
